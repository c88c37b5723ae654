//! Element-wise verification against the `rustfft` reference transform.
//!
//! Tolerances are scaled to the problem rather than fixed: a direct sum of
//! *N* terms with angles up to `2 pi N` accumulates an absolute error of
//! roughly `N * eps * sum |x|`, see [`tolerance`].
use crate::{DftError, DftNum, Result};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::strategy::to_float;

/// Safety factor on top of the first-order error bound.
pub const TOLERANCE_FACTOR: f64 = 32.0;

/// Outcome of comparing one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check<T> {
    /// Element position
    pub index: usize,
    /// Reference value
    pub expected: Complex<T>,
    /// Value under test
    pub actual: Complex<T>,
    /// `|actual - expected| <= tol`
    pub ok: bool,
}

/// Forward transform computed by `rustfft`, unnormalized.
#[must_use]
pub fn reference_forward<T: DftNum>(data: &[Complex<T>]) -> Vec<Complex<T>> {
    let mut buffer = data.to_vec();
    if !buffer.is_empty() {
        let mut planner = FftPlanner::<T>::new();
        planner.plan_fft_forward(buffer.len()).process(&mut buffer);
    }
    buffer
}

/// Inverse transform computed by `rustfft`, normalized by *N*.
#[must_use]
pub fn reference_inverse<T: DftNum>(data: &[Complex<T>]) -> Vec<Complex<T>> {
    let mut buffer = data.to_vec();
    if !buffer.is_empty() {
        let mut planner = FftPlanner::<T>::new();
        planner.plan_fft_inverse(buffer.len()).process(&mut buffer);
        let n = to_float::<T>(buffer.len());
        for b in buffer.iter_mut() {
            *b = *b / n;
        }
    }
    buffer
}

/// Absolute tolerance for transforming `data`.
///
/// `TOLERANCE_FACTOR * N * eps * max(sum |x|, 1)`. Valid for both a
/// forward transform of `data` and a round trip back to `data`.
#[must_use]
pub fn tolerance<T: DftNum>(data: &[Complex<T>]) -> T {
    let mass = data.iter().fold(T::zero(), |acc, v| acc + v.norm());
    let factor = T::from_f64(TOLERANCE_FACTOR).unwrap_or_else(T::one);
    factor * to_float::<T>(data.len().max(1)) * T::epsilon() * mass.max(T::one())
}

/// Compares `actual` against `expected` element by element.
///
/// Every element is checked, a failing element does not stop the
/// comparison.
///
/// # Errors
/// [`DftError::LengthMismatch`] if the sequences differ in length.
pub fn compare<T: DftNum>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    tol: T,
) -> Result<Vec<Check<T>>> {
    if actual.len() != expected.len() {
        return Err(DftError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Ok(actual
        .iter()
        .zip(expected.iter())
        .enumerate()
        .map(|(index, (a, e))| Check {
            index,
            expected: *e,
            actual: *a,
            ok: (*a - *e).norm() <= tol,
        })
        .collect())
}

/// Whether every check passed.
#[must_use]
pub fn all_ok<T>(checks: &[Check<T>]) -> bool {
    checks.iter().all(|c| c.ok)
}
