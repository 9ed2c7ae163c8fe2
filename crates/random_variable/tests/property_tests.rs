//! Property-based tests for validation, reproducibility, statistics and
//! per-family support over each family's whole parameter domain.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use random_variable::{
    Bernoulli, Beta, Binomial, ChiSquared, ContinuousUniform, DiscreteUniform, Distribution,
    DistributionKind, Exponential, Generator, Normal, Pareto, Poisson, RandomVariable, Rayleigh,
    Samples, F,
};

fn non_finite() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY)
    ]
}

fn any_kind() -> impl Strategy<Value = DistributionKind> {
    prop::sample::select(DistributionKind::ALL.to_vec())
}

/// Values spread evenly in log scale over `[lo, hi]`, with both ends drawn
/// explicitly.
fn log_uniform(lo: f64, hi: f64) -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(lo),
        1 => Just(hi),
        8 => (lo.log10()..hi.log10()).prop_map(move |e| 10f64.powf(e).clamp(lo, hi)),
    ]
}

/// Probabilities in (0, 1), dense near both ends.
fn open_probability() -> impl Strategy<Value = f64> {
    prop_oneof![
        log_uniform(1e-300, 0.5),
        log_uniform(1e-16, 0.5).prop_map(|q| 1.0 - q),
    ]
}

fn trial_count() -> impl Strategy<Value = u64> {
    prop_oneof![
        1u64..=1000,
        1u64..=Binomial::N_MAX,
        Just(Binomial::N_MAX),
    ]
}

/// Every draw is finite and inside the family's support.
fn assert_draws_in_support(
    distribution: impl Into<Distribution>,
    seed: u64,
) -> Result<(), TestCaseError> {
    let d = distribution.into();
    let mut rng = Generator::from_seed(seed);
    for _ in 0..64 {
        let x = d.sample(&mut rng);
        prop_assert!(x.is_finite(), "{}: non-finite outcome {}", d, x);
        prop_assert!(d.support_contains(x), "{}: {} outside support", d, x);
        if d.kind().is_discrete() {
            prop_assert_eq!(x.fract(), 0.0);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_same_seed_same_stream(seed in any::<u64>(), mu in -1e6..1e6_f64, sigma in 1e-3..1e3_f64) {
        let x = RandomVariable::normal(mu, sigma).unwrap();
        let a = x.outcomes_with(32, &mut Generator::from_seed(seed)).unwrap();
        let b = x.outcomes_with(32, &mut Generator::from_seed(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_non_finite_parameters_rejected(kind in any_kind(), bad in non_finite(), slot in 0usize..2) {
        prop_assume!(kind.arity() > 0);
        let mut params = vec![1.0; kind.arity()];
        params[slot % kind.arity()] = bad;
        let err = Distribution::from_params(kind, &params).unwrap_err();
        prop_assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_poisson_outcomes_are_counts(lambda in 1e-3..Poisson::LAMBDA_MAX, seed in any::<u64>()) {
        let d = Poisson::new(lambda).unwrap();
        let x = RandomVariable::new(d);
        let samples = x.outcomes_with(50, &mut Generator::from_seed(seed)).unwrap();
        prop_assert!(samples.iter().all(|&k| k >= 0.0 && k.fract() == 0.0));
    }

    #[test]
    fn test_non_positive_sigma_rejected(mu in -1e3..1e3_f64, sigma in -1e3..=0.0_f64) {
        prop_assert!(Normal::new(mu, sigma).is_err());
    }

    #[test]
    fn test_statistics_bracketed_by_extremes(values in prop::collection::vec(-1e6..1e6_f64, 1..200)) {
        let s = Samples::from(values);
        let (min, max) = (s.min().unwrap(), s.max().unwrap());
        let mean = s.mean().unwrap();
        let median = s.median().unwrap();
        prop_assert!(min <= max);
        prop_assert!(mean >= min - 1e-6 && mean <= max + 1e-6);
        prop_assert!(median >= min && median <= max);
    }

    #[test]
    fn test_shift_matches_outcome_plus_constant(seed in any::<u64>(), c in -1e3..1e3_f64) {
        let x = RandomVariable::continuous_uniform(-5.0, 5.0).unwrap();
        let z = &x + c;
        let shifted = z.outcome_with(&mut Generator::from_seed(seed)).unwrap();
        let base = x.outcome_with(&mut Generator::from_seed(seed)).unwrap();
        prop_assert_eq!(shifted, base + c);
    }

    #[test]
    fn test_outcome_count_matches_request(n in 0usize..500, seed in any::<u64>()) {
        let x = RandomVariable::discrete_uniform(-3, 3).unwrap();
        prop_assert_eq!(x.outcomes_with(n, &mut Generator::from_seed(seed)).unwrap().len(), n);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_bernoulli_whole_domain(p in open_probability(), seed in any::<u64>()) {
        assert_draws_in_support(Bernoulli::new(p).unwrap(), seed)?;
    }

    #[test]
    fn test_beta_whole_domain(
        alpha in log_uniform(Beta::SHAPE_MIN, 1e300),
        beta in log_uniform(Beta::SHAPE_MIN, 1e300),
        seed in any::<u64>(),
    ) {
        assert_draws_in_support(Beta::new(alpha, beta).unwrap(), seed)?;
    }

    #[test]
    fn test_binomial_whole_domain(n in trial_count(), p in open_probability(), seed in any::<u64>()) {
        assert_draws_in_support(Binomial::new(n, p).unwrap(), seed)?;
    }

    #[test]
    fn test_chi_squared_whole_domain(
        k in prop_oneof![1u64..=100, 1u64..=(1u64 << 53)],
        seed in any::<u64>(),
    ) {
        assert_draws_in_support(ChiSquared::new(k).unwrap(), seed)?;
    }

    #[test]
    fn test_continuous_uniform_whole_domain(
        ends in (-1e307..1e307_f64, -1e307..1e307_f64),
        seed in any::<u64>(),
    ) {
        let (a, b) = (ends.0.min(ends.1), ends.0.max(ends.1));
        prop_assume!(a < b);
        assert_draws_in_support(ContinuousUniform::new(a, b).unwrap(), seed)?;
    }

    #[test]
    fn test_discrete_uniform_whole_domain(ends in (any::<i64>(), any::<i64>()), seed in any::<u64>()) {
        let (a, b) = (ends.0.min(ends.1), ends.0.max(ends.1));
        prop_assume!(a < b);
        assert_draws_in_support(DiscreteUniform::new(a, b).unwrap(), seed)?;
    }

    #[test]
    fn test_exponential_whole_domain(mean in log_uniform(1e-300, Exponential::MEAN_MAX), seed in any::<u64>()) {
        assert_draws_in_support(Exponential::new(mean).unwrap(), seed)?;
    }

    #[test]
    fn test_f_whole_domain(
        d1 in log_uniform(F::DOF_MIN, 1e300),
        d2 in log_uniform(F::DOF_MIN, 1e300),
        seed in any::<u64>(),
    ) {
        assert_draws_in_support(F::new(d1, d2).unwrap(), seed)?;
    }

    #[test]
    fn test_normal_whole_domain(
        mu in -Normal::MU_MAX..=Normal::MU_MAX,
        sigma in log_uniform(1e-300, Normal::SIGMA_MAX),
        seed in any::<u64>(),
    ) {
        assert_draws_in_support(Normal::new(mu, sigma).unwrap(), seed)?;
    }

    #[test]
    fn test_pareto_whole_domain(
        scale in log_uniform(1e-300, Pareto::SCALE_MAX),
        shape in log_uniform(Pareto::SHAPE_MIN, 1e300),
        seed in any::<u64>(),
    ) {
        assert_draws_in_support(Pareto::new(scale, shape).unwrap(), seed)?;
    }

    #[test]
    fn test_poisson_whole_domain(lambda in log_uniform(1e-300, Poisson::LAMBDA_MAX), seed in any::<u64>()) {
        assert_draws_in_support(Poisson::new(lambda).unwrap(), seed)?;
    }

    #[test]
    fn test_rayleigh_whole_domain(sigma in log_uniform(1e-300, Rayleigh::SIGMA_MAX), seed in any::<u64>()) {
        assert_draws_in_support(Rayleigh::new(sigma).unwrap(), seed)?;
    }

    #[test]
    fn test_below_floor_rejected(
        shape in log_uniform(1e-300, 0.0999),
        dof in log_uniform(1e-300, 0.2499),
    ) {
        prop_assert!(Pareto::new(1.0, shape).unwrap_err().is_invalid_parameter());
        prop_assert!(F::new(dof, 1.0).unwrap_err().is_invalid_parameter());
        prop_assert!(F::new(1.0, dof).unwrap_err().is_invalid_parameter());
    }
}
