//! Scalar math support for lifted functions.

pub mod special;
