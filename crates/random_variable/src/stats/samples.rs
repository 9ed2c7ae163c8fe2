//! The outcome collection returned by batch sampling.

use std::ops::Deref;

/// A finite sequence of outcomes with summary statistics.
///
/// # Examples
/// ```
/// use random_variable::Samples;
///
/// let s = Samples::from(vec![1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(s.min(), Some(1.0));
/// assert_eq!(s.max(), Some(4.0));
/// assert_eq!(s.mean(), Some(2.5));
/// assert_eq!(s.median(), Some(2.5));
///
/// let empty = Samples::default();
/// assert_eq!(empty.mean(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Samples(Vec<f64>);

impl Samples {
    /// Unwraps the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Smallest outcome. NaN values are skipped unless every value is NaN.
    pub fn min(&self) -> Option<f64> {
        self.0.iter().copied().reduce(f64::min)
    }

    /// Largest outcome. NaN values are skipped unless every value is NaN.
    pub fn max(&self) -> Option<f64> {
        self.0.iter().copied().reduce(f64::max)
    }

    /// Arithmetic mean.
    ///
    /// Accumulates with Neumaier compensated summation, so the rounding
    /// error does not grow with the number of samples.
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        let mut sum = 0.0_f64;
        let mut compensation = 0.0_f64;
        for &x in &self.0 {
            let t = sum + x;
            if sum.abs() >= x.abs() {
                compensation += (sum - t) + x;
            } else {
                compensation += (x - t) + sum;
            }
            sum = t;
        }
        Some((sum + compensation) / self.0.len() as f64)
    }

    /// Median: the middle element of a sorted copy, or the mean of the two
    /// central elements for an even count.
    pub fn median(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        let mut sorted = self.0.clone();
        sorted.sort_unstable_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Some(sorted[mid])
        } else {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        }
    }
}

impl Deref for Samples {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Samples {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<Samples> for Vec<f64> {
    fn from(samples: Samples) -> Self {
        samples.0
    }
}

impl FromIterator<f64> for Samples {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Samples {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Samples {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_eq!(Samples::from(vec![2.0, 4.0, 6.0]).mean(), Some(4.0));
        assert_eq!(Samples::from(vec![-3.5]).mean(), Some(-3.5));
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(Samples::from(vec![4.0, 1.0, 3.0, 2.0]).median(), Some(2.5));
        assert_eq!(Samples::from(vec![3.0, 1.0, 2.0]).median(), Some(2.0));
        assert_eq!(Samples::from(vec![7.0]).median(), Some(7.0));
    }

    #[test]
    fn test_median_leaves_input_order() {
        let s = Samples::from(vec![3.0, 1.0, 2.0]);
        let _ = s.median();
        assert_eq!(&s[..], &[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_min_max() {
        let s = Samples::from(vec![0.5, -2.0, 9.0, 3.0]);
        assert_eq!(s.min(), Some(-2.0));
        assert_eq!(s.max(), Some(9.0));
        assert_eq!(Samples::from(vec![f64::NAN, 1.0]).min(), Some(1.0));
    }

    #[test]
    fn test_empty_is_none_for_every_statistic() {
        let s = Samples::default();
        assert_eq!(s.min(), None);
        assert_eq!(s.max(), None);
        assert_eq!(s.mean(), None);
        assert_eq!(s.median(), None);
    }

    #[test]
    fn test_compensated_mean_of_ill_conditioned_sum() {
        // Naive summation loses the small terms entirely
        let mut values = vec![1e16];
        values.extend(std::iter::repeat(1.0).take(1000));
        values.push(-1e16);
        let s = Samples::from(values);
        assert_relative_eq!(s.mean().unwrap(), 1000.0 / 1002.0, max_relative = 1e-12);
    }

    #[test]
    fn test_collect_and_iterate() {
        let s: Samples = (1..=4).map(f64::from).collect();
        assert_eq!(s.len(), 4);
        assert_eq!(s.iter().sum::<f64>(), 10.0);
        assert_eq!(s.clone().into_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        let doubled: Vec<f64> = (&s).into_iter().map(|x| x * 2.0).collect();
        assert_eq!(doubled, vec![2.0, 4.0, 6.0, 8.0]);
    }
}
