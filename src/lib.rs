//! # rustdft: direct discrete Fourier transform
//!
//! This library evaluates the Discrete Fourier Transform (DFT) and its
//! inverse by the O(N²) summation definition
//!
//! ```text
//! X[k] = sum_n x[n] * exp(-i 2 pi k n / N)
//! x[n] = 1/N * sum_k X[k] * exp(+i 2 pi k n / N)
//! ```
//!
//! Two summation strategies are available, a trigonometric expansion and a
//! complex exponential multiply-add, see [`Strategy`]. They produce the same
//! coefficients up to rounding.
//!
//! The one-shot functions [`forward`] and [`inverse`] use the default
//! configuration. A [`DftHandler`] carries a declared length, the strategy,
//! the normalization and the finite check, and is provided to
//! [`nddft`]/[`ndidft`] alongside 1-dimensional arrays (ndarray).
//!
//! ## Parallel
//! With the `parallel` feature the bins are evaluated in parallel
//! through the parallel abilities of ndarray, see [`nddft_par`].
//!
//! ## Example
//! ```
//! use rustdft::{forward, inverse, Complex};
//!
//! let x: Vec<Complex<f64>> = [1., 2., 3., 4.].iter().map(|&v| Complex::new(v, 0.)).collect();
//! let xhat = forward(&x).unwrap();
//! assert!((xhat[0].re - 10.).abs() < 1e-12);
//! let y = inverse(&xhat).unwrap();
//! assert!((y[3].re - 4.).abs() < 1e-12);
//! ```
#![warn(missing_docs)]
use ndarray::{ArrayBase, Ix1};
#[cfg(feature = "parallel")]
use ndarray::{ArrayViewMut1, Zip};
use ndarray::{Data, DataMut};
use num_traits::{Float, FloatConst};
pub use rustfft::num_complex::Complex;
pub use rustfft::num_traits::Zero;
pub use rustfft::FftNum;
use std::borrow::Cow;
use strategy::{to_float, Direction};
use tracing::{debug, warn};

pub mod bench;
pub mod error;
pub mod report;
pub mod strategy;
pub mod verify;

pub use error::{DftError, Result};
pub use strategy::Strategy;

/// Float types the engine can operate on (`f32`, `f64`).
pub trait DftNum: FftNum + Float + FloatConst {}

impl<T: FftNum + Float + FloatConst> DftNum for T {}

/// Scaling applied to the transform output.
#[derive(Clone, Copy)]
pub enum Normalization<T> {
    /// No scaling in either direction
    None,
    /// Forward unscaled, inverse divided by *N*
    Default,
    /// Custom scaling of the inverse output, forward unscaled
    Custom(fn(&mut [T])),
}

/// Declare procedural macro which creates functions for the individual
/// transforms on 1-dimensional arrays, i.e. dft and idft.
/// Non-contiguous arrays are copied to a temporary buffer.
macro_rules! create_transform {
    (
        $(#[$meta:meta])* $i: ident, $d: expr, $p: ident
    ) => {
        $(#[$meta])*
        ///
        /// # Errors
        /// See [`DftError`].
        pub fn $i<R, S, T>(
            input: &ArrayBase<R, Ix1>,
            output: &mut ArrayBase<S, Ix1>,
            handler: &DftHandler<T>,
        ) -> Result<()>
        where
            T: DftNum,
            R: Data<Elem = Complex<T>>,
            S: Data<Elem = Complex<T>> + DataMut,
        {
            let data: Cow<[Complex<T>]> = match input.as_slice() {
                Some(slice) => Cow::Borrowed(slice),
                None => Cow::Owned(input.to_vec()),
            };
            if let Some(out) = output.as_slice_mut() {
                return handler.$p(&data, out, $d);
            }
            let mut outvec = vec![Complex::zero(); output.len()];
            handler.$p(&data, &mut outvec, $d)?;
            for (y, v) in output.iter_mut().zip(outvec) {
                *y = v;
            }
            Ok(())
        }
    };
}

/// # Direct Discrete Fourier Transform.
///
/// Transforms complex sequences of length *n* to complex sequences of
/// length *n* and vice versa. Evaluation is O(n²), the handler holds no
/// plan, only its configuration.
///
/// The accompanying functions are [`nddft`], [`ndidft`] (serial) and
/// [`nddft_par`], [`ndidft_par`] (parallel).
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use rustdft::{nddft, Complex, DftHandler, Strategy};
///
/// let n = 6;
/// let data = Array1::from_shape_fn(n, |i| Complex::new(i as f64, -(i as f64)));
/// let mut vhat = Array1::<Complex<f64>>::zeros(n);
/// let handler: DftHandler<f64> = DftHandler::new(n).strategy(Strategy::Exponential);
/// nddft(&data, &mut vhat, &handler).unwrap();
/// ```
pub struct DftHandler<T> {
    n: usize,
    strategy: Strategy,
    norm: Normalization<Complex<T>>,
    check_finite: bool,
}

impl<T: DftNum> DftHandler<T> {
    /// Creates a new `DftHandler`.
    ///
    /// # Arguments
    ///
    /// * `n` - Length of the sequences which will be transformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rustdft::DftHandler;
    /// let handler: DftHandler<f64> = DftHandler::new(10);
    /// ```
    #[must_use]
    pub fn new(n: usize) -> Self {
        DftHandler::<T> {
            n,
            strategy: Strategy::default(),
            norm: Normalization::Default,
            check_finite: true,
        }
    }

    /// Sets the summation strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the normalization.
    ///
    /// # Example
    /// ```
    /// use rustdft::{Complex, DftHandler, Normalization};
    ///
    /// fn halve(data: &mut [Complex<f64>]) {
    ///     for d in data.iter_mut() {
    ///         *d = *d * 0.5;
    ///     }
    /// }
    /// let handler = DftHandler::<f64>::new(4).normalization(Normalization::Custom(halve));
    /// ```
    #[must_use]
    pub fn normalization(mut self, norm: Normalization<Complex<T>>) -> Self {
        self.norm = norm;
        self
    }

    /// Enables or disables rejection of NaN and infinite input (enabled by default).
    ///
    /// When disabled, non-finite values propagate to the output.
    #[must_use]
    pub fn check_finite(mut self, check_finite: bool) -> Self {
        self.check_finite = check_finite;
        self
    }

    /// Declared length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the declared length is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Selected summation strategy.
    #[must_use]
    pub fn selected_strategy(&self) -> Strategy {
        self.strategy
    }

    /// Forward transform into a freshly allocated vector.
    ///
    /// # Errors
    /// See [`DftError`].
    pub fn forward(&self, data: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        let mut out = vec![Complex::zero(); self.n];
        self.dft_lane(data, &mut out, Direction::Forward)?;
        Ok(out)
    }

    /// Inverse transform into a freshly allocated vector.
    ///
    /// # Errors
    /// See [`DftError`].
    pub fn inverse(&self, data: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        let mut out = vec![Complex::zero(); self.n];
        self.dft_lane(data, &mut out, Direction::Inverse)?;
        Ok(out)
    }

    /// Forward transform into `out`. `out` is left untouched on error.
    ///
    /// # Errors
    /// See [`DftError`].
    pub fn forward_into(&self, data: &[Complex<T>], out: &mut [Complex<T>]) -> Result<()> {
        self.dft_lane(data, out, Direction::Forward)
    }

    /// Inverse transform into `out`. `out` is left untouched on error.
    ///
    /// # Errors
    /// See [`DftError`].
    pub fn inverse_into(&self, data: &[Complex<T>], out: &mut [Complex<T>]) -> Result<()> {
        self.dft_lane(data, out, Direction::Inverse)
    }

    fn dft_lane(
        &self,
        data: &[Complex<T>],
        out: &mut [Complex<T>],
        direction: Direction,
    ) -> Result<()> {
        self.validate(data, out)?;
        debug!(n = self.n, strategy = ?self.strategy, ?direction, "dft");
        for (k, y) in out.iter_mut().enumerate() {
            *y = self.strategy.bin(data, k, direction);
        }
        self.normalize(out, direction);
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn dft_lane_par(
        &self,
        data: &[Complex<T>],
        out: &mut [Complex<T>],
        direction: Direction,
    ) -> Result<()> {
        self.validate(data, out)?;
        debug!(n = self.n, strategy = ?self.strategy, ?direction, "dft_par");
        let strategy = self.strategy;
        Zip::indexed(ArrayViewMut1::from(&mut *out)).par_for_each(|k, y| {
            *y = strategy.bin(data, k, direction);
        });
        self.normalize(out, direction);
        Ok(())
    }

    fn normalize(&self, out: &mut [Complex<T>], direction: Direction) {
        if direction == Direction::Forward || out.is_empty() {
            return;
        }
        match self.norm {
            Normalization::None => (),
            Normalization::Default => {
                let n = to_float::<T>(out.len());
                for b in out.iter_mut() {
                    *b = *b / n;
                }
            }
            Normalization::Custom(f) => f(out),
        }
    }

    fn validate(&self, data: &[Complex<T>], out: &[Complex<T>]) -> Result<()> {
        Self::assert_size(self.n, data.len())?;
        Self::assert_size(self.n, out.len())?;
        if self.check_finite {
            if let Some(index) = data
                .iter()
                .position(|v| !v.re.is_finite() || !v.im.is_finite())
            {
                warn!(index, n = self.n, "rejecting non-finite dft input");
                return Err(DftError::NonFiniteInput { index });
            }
        }
        Ok(())
    }

    fn assert_size(n: usize, size: usize) -> Result<()> {
        if n == size {
            Ok(())
        } else {
            Err(DftError::LengthMismatch {
                expected: n,
                actual: size,
            })
        }
    }
}

/// Forward transform with the default configuration.
///
/// # Errors
/// [`DftError::NonFiniteInput`] if `data` contains NaN or infinite values.
///
/// # Example
/// ```
/// use rustdft::{forward, Complex};
///
/// assert!(forward::<f64>(&[]).unwrap().is_empty());
/// let xhat = forward(&[Complex::new(2.0f64, 0.0); 3]).unwrap();
/// assert!((xhat[0].re - 6.0).abs() < 1e-12);
/// ```
pub fn forward<T: DftNum>(data: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    DftHandler::new(data.len()).forward(data)
}

/// Inverse transform with the default configuration, normalized by *N*.
///
/// # Errors
/// [`DftError::NonFiniteInput`] if `data` contains NaN or infinite values.
pub fn inverse<T: DftNum>(data: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    DftHandler::new(data.len()).inverse(data)
}

create_transform!(
    /// Complex-to-complex direct Fourier Transform (serial).
    /// # Example
    /// ```
    /// use ndarray::Array1;
    /// use rustdft::{nddft, Complex, DftHandler};
    ///
    /// let n = 6;
    /// let data = Array1::from_shape_fn(n, |i| Complex::new(i as f64, -1.0 * i as f64));
    /// let mut vhat = Array1::<Complex<f64>>::zeros(n);
    /// let handler: DftHandler<f64> = DftHandler::new(n);
    /// nddft(&data, &mut vhat, &handler).unwrap();
    /// ```
    nddft,
    Direction::Forward,
    dft_lane
);

create_transform!(
    /// Complex-to-complex inverse direct Fourier Transform (serial).
    /// # Example
    /// ```
    /// use ndarray::Array1;
    /// use rustdft::{nddft, ndidft, Complex, DftHandler};
    ///
    /// let n = 6;
    /// let mut data = Array1::from_shape_fn(n, |i| Complex::new(i as f64, -1.0 * i as f64));
    /// let mut vhat = Array1::<Complex<f64>>::zeros(n);
    /// let handler: DftHandler<f64> = DftHandler::new(n);
    /// nddft(&data, &mut vhat, &handler).unwrap();
    /// ndidft(&vhat, &mut data, &handler).unwrap();
    /// ```
    ndidft,
    Direction::Inverse,
    dft_lane
);

#[cfg(feature = "parallel")]
create_transform!(
    /// Complex-to-complex direct Fourier Transform (parallel).
    ///
    /// Further infos: see [`nddft`]
    nddft_par,
    Direction::Forward,
    dft_lane_par
);

#[cfg(feature = "parallel")]
create_transform!(
    /// Complex-to-complex inverse direct Fourier Transform (parallel).
    ///
    /// Further infos: see [`ndidft`]
    ndidft_par,
    Direction::Inverse,
    dft_lane_par
);

/// Tests
#[cfg(test)]
mod test {
    use super::*;
    use ndarray::{s, Array1};

    fn ramp(n: usize) -> Vec<Complex<f64>> {
        (0..n)
            .map(|i| Complex::new(i as f64, -1.0 * i as f64))
            .collect()
    }

    fn assert_close(expected: &[Complex<f64>], actual: &[Complex<f64>], dif: f64) {
        assert_eq!(expected.len(), actual.len());
        for (a, b) in expected.iter().zip(actual.iter()) {
            if (a.re - b.re).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
            if (a.im - b.im).abs() > dif {
                panic!("Large difference of values, got {} expected {}.", b, a)
            }
        }
    }

    #[test]
    /// Successive forward and inverse transform
    fn test_dft() {
        let expected = ramp(6);
        for strategy in [Strategy::Trigonometric, Strategy::Exponential] {
            let handler: DftHandler<f64> = DftHandler::new(6).strategy(strategy);
            let vhat = handler.forward(&expected).unwrap();
            let data = handler.inverse(&vhat).unwrap();
            assert_close(&expected, &data, 1e-10);
        }
    }

    #[test]
    fn test_handler_config() {
        let handler: DftHandler<f64> = DftHandler::new(6);
        assert_eq!(handler.len(), 6);
        assert!(!handler.is_empty());
        assert_eq!(handler.selected_strategy(), Strategy::Trigonometric);

        let handler: DftHandler<f64> = DftHandler::new(0).strategy(Strategy::Exponential);
        assert!(handler.is_empty());
        assert_eq!(handler.selected_strategy(), Strategy::Exponential);
        assert!(handler.forward(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<Complex<f64>> = Vec::new();
        assert!(forward(&empty).unwrap().is_empty());
        assert!(inverse(&empty).unwrap().is_empty());
        let single = vec![Complex::new(3.5, -1.25)];
        assert_close(&single, &forward(&single).unwrap(), 0.);
        assert_close(&single, &inverse(&single).unwrap(), 0.);
    }

    #[test]
    fn test_size_mismatch() {
        let handler: DftHandler<f64> = DftHandler::new(4);
        let err = handler.forward(&ramp(3)).unwrap_err();
        assert_eq!(
            err,
            DftError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
        let mut out = vec![Complex::new(9., 9.); 5];
        let err = handler.inverse_into(&ramp(4), &mut out).unwrap_err();
        assert_eq!(
            err,
            DftError::LengthMismatch {
                expected: 4,
                actual: 5
            }
        );
        assert!(out.iter().all(|v| *v == Complex::new(9., 9.)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut data = ramp(4);
        data[2].im = f64::NAN;
        assert_eq!(
            forward(&data).unwrap_err(),
            DftError::NonFiniteInput { index: 2 }
        );
        data[2].im = 0.;
        data[1].re = f64::INFINITY;
        assert_eq!(
            inverse(&data).unwrap_err(),
            DftError::NonFiniteInput { index: 1 }
        );
    }

    #[test]
    fn test_non_finite_propagates_without_check() {
        let mut data = ramp(4);
        data[0].re = f64::NAN;
        let handler = DftHandler::<f64>::new(4).check_finite(false);
        let vhat = handler.forward(&data).unwrap();
        assert!(vhat.iter().all(|v| v.re.is_nan()));
    }

    #[test]
    fn test_normalization() {
        fn double(data: &mut [Complex<f64>]) {
            for d in data.iter_mut() {
                *d = *d * 2.;
            }
        }
        let data = ramp(5);
        let vhat = forward(&data).unwrap();

        let raw = DftHandler::<f64>::new(5)
            .normalization(Normalization::None)
            .inverse(&vhat)
            .unwrap();
        let scaled: Vec<_> = data.iter().map(|v| *v * 5.).collect();
        assert_close(&scaled, &raw, 1e-10);

        let custom = DftHandler::<f64>::new(5)
            .normalization(Normalization::Custom(double))
            .inverse(&vhat)
            .unwrap();
        let doubled: Vec<_> = scaled.iter().map(|v| *v * 2.).collect();
        assert_close(&doubled, &custom, 1e-10);

        // forward pass is never scaled
        let unscaled = DftHandler::<f64>::new(5)
            .normalization(Normalization::Custom(double))
            .forward(&data)
            .unwrap();
        assert_close(&vhat, &unscaled, 0.);
    }

    #[test]
    fn test_nddft_strided() {
        let n = 5;
        let full = Array1::from_vec(ramp(2 * n));
        let strided = full.slice(s![..;2]);
        let mut vhat = Array1::<Complex<f64>>::zeros(2 * n);
        let mut vhat_view = vhat.slice_mut(s![1..;2]);
        let handler: DftHandler<f64> = DftHandler::new(n);
        nddft(&strided, &mut vhat_view, &handler).unwrap();

        let expected = forward(&strided.to_vec()).unwrap();
        let got: Vec<_> = vhat.slice(s![1..;2]).to_vec();
        assert_close(&expected, &got, 0.);
        assert!(vhat.slice(s![..;2]).iter().all(|v| *v == Complex::zero()));
    }

    #[test]
    fn test_nddft_size_mismatch() {
        let data = Array1::from_vec(ramp(4));
        let mut vhat = Array1::<Complex<f64>>::zeros(3);
        let handler: DftHandler<f64> = DftHandler::new(4);
        assert!(nddft(&data, &mut vhat, &handler).is_err());
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_dft_serial_vs_parallel() {
        let n = 17;
        let data = Array1::from_vec(ramp(n));
        let mut vhat = Array1::<Complex<f64>>::zeros(n);
        let mut vhat_par = Array1::<Complex<f64>>::zeros(n);
        let mut back = Array1::<Complex<f64>>::zeros(n);
        let handler: DftHandler<f64> = DftHandler::new(n).strategy(Strategy::Exponential);
        nddft(&data, &mut vhat, &handler).unwrap();
        nddft_par(&data, &mut vhat_par, &handler).unwrap();
        assert_close(vhat.as_slice().unwrap(), vhat_par.as_slice().unwrap(), 0.);

        ndidft_par(&vhat_par, &mut back, &handler).unwrap();
        assert_close(data.as_slice().unwrap(), back.as_slice().unwrap(), 1e-10);
    }

    #[test]
    fn test_f32() {
        let data: Vec<Complex<f32>> = (0..8).map(|i| Complex::new(i as f32, 0.)).collect();
        let back = inverse(&forward(&data).unwrap()).unwrap();
        for (a, b) in data.iter().zip(back.iter()) {
            assert!((a - b).norm() < 1e-4);
        }
    }
}
