//! Summation kernels.
//!
//! Both strategies evaluate the same sum
//! `X[k] = sum_n x[n] * exp(-+ i * 2 pi k n / N)`; they only differ in how a
//! single term is formed. The trigonometric form expands the product into
//! its real and imaginary parts, the exponential form builds the unit phasor
//! and performs one complex multiply-add.
use crate::DftNum;
use rustfft::num_complex::Complex;

/// Evaluation strategy of the summation.
///
/// The strategy does not change the result beyond floating point rounding,
/// see the `equivalence` tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Expand every term into `cos`/`sin` products.
    #[default]
    Trigonometric,
    /// Accumulate `x * exp(-+ i * angle)` as a complex multiply-add.
    Exponential,
}

/// Sense of the exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// `exp(-i * angle)`, time to frequency domain
    Forward,
    /// `exp(+i * angle)`, frequency to time domain
    Inverse,
}

impl Strategy {
    /// Unnormalized sum for output index `k` over all of `data`.
    pub(crate) fn bin<T: DftNum>(
        self,
        data: &[Complex<T>],
        k: usize,
        direction: Direction,
    ) -> Complex<T> {
        match self {
            Strategy::Trigonometric => trigonometric_bin(data, k, direction),
            Strategy::Exponential => exponential_bin(data, k, direction),
        }
    }
}

/// Converts an index to the float type.
///
/// `FromPrimitive` never fails for float targets, larger values round.
#[inline]
pub(crate) fn to_float<T: DftNum>(v: usize) -> T {
    T::from_usize(v).unwrap_or_else(T::nan)
}

/// `2 pi k n / N`
#[inline]
fn angle<T: DftNum>(k: T, n: usize, len: T) -> T {
    let two_pi = T::PI() + T::PI();
    two_pi * k * to_float::<T>(n) / len
}

fn trigonometric_bin<T: DftNum>(data: &[Complex<T>], k: usize, direction: Direction) -> Complex<T> {
    let len = to_float::<T>(data.len());
    let k = to_float::<T>(k);
    let mut re = T::zero();
    let mut im = T::zero();
    for (n, x) in data.iter().enumerate() {
        let (sin, cos) = angle(k, n, len).sin_cos();
        match direction {
            Direction::Forward => {
                re = re + x.re * cos + x.im * sin;
                im = im - x.re * sin + x.im * cos;
            }
            Direction::Inverse => {
                re = re + x.re * cos - x.im * sin;
                im = im + x.re * sin + x.im * cos;
            }
        }
    }
    Complex::new(re, im)
}

fn exponential_bin<T: DftNum>(data: &[Complex<T>], k: usize, direction: Direction) -> Complex<T> {
    let len = to_float::<T>(data.len());
    let k = to_float::<T>(k);
    let sign = match direction {
        Direction::Forward => -T::one(),
        Direction::Inverse => T::one(),
    };
    data.iter()
        .enumerate()
        .fold(Complex::new(T::zero(), T::zero()), |acc, (n, x)| {
            acc + *x * Complex::cis(sign * angle(k, n, len))
        })
}
