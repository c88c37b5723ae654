//! Wall-clock comparison of the direct transform against `rustfft`.
//!
//! For statistically sound measurements use the criterion benches in
//! `benches/`; this module serves the `speedtest` command of the binary.
use crate::{DftHandler, Result, Strategy};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use std::time::{Duration, Instant};
use tracing::info;

/// Signal lengths of the speed test, including non powers of two.
pub const SPEEDTEST_SIZES: [usize; 11] = [8, 16, 32, 64, 128, 256, 512, 1024, 2047, 2048, 2049];

/// Real ramp `1, 2, ..., n`.
#[must_use]
pub fn ramp(n: usize) -> Vec<Complex<f64>> {
    (1..=n).map(|z| Complex::new(z as f64, 0.)).collect()
}

/// Elapsed time of `repeats` forward transforms per method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Signal length
    pub n: usize,
    /// Number of transforms per measurement
    pub repeats: usize,
    /// Direct transform, trigonometric strategy
    pub trigonometric: Duration,
    /// Direct transform, exponential strategy
    pub exponential: Duration,
    /// `rustfft` (planned once, outside the measurement)
    pub reference: Duration,
}

impl Timing {
    /// How many times faster the reference is than the trigonometric strategy.
    ///
    /// Infinite if the reference finished below timer resolution.
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let reference = self.reference.as_secs_f64();
        if reference == 0. {
            return f64::INFINITY;
        }
        self.trigonometric.as_secs_f64() / reference
    }

    /// Report lines in the layout of the speed test.
    #[must_use]
    pub fn render(&self) -> String {
        let r = self.repeats;
        format!(
            "Length time-domain signal: {}\n\
             Time {r} * dft trigonometric : {:.9}\n\
             Time {r} * dft exponential   : {:.9}\n\
             Time {r} * rustfft           : {:.9} -> {:.0} times faster than dft\n",
            self.n,
            self.trigonometric.as_secs_f64(),
            self.exponential.as_secs_f64(),
            self.reference.as_secs_f64(),
            self.speedup().round(),
        )
    }
}

/// Times `repeats` forward transforms of `samples` with both strategies and
/// with `rustfft`.
///
/// # Errors
/// Propagates transform errors, e.g. non-finite samples.
pub fn compare_time(samples: &[Complex<f64>], repeats: usize) -> Result<Timing> {
    let n = samples.len();
    let trigonometric = time_strategy(samples, repeats, Strategy::Trigonometric)?;
    let exponential = time_strategy(samples, repeats, Strategy::Exponential)?;

    let reference = if n == 0 {
        Duration::ZERO
    } else {
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);
        let mut buffer = vec![Complex::new(0., 0.); n];
        let start = Instant::now();
        for _ in 0..repeats {
            buffer.copy_from_slice(samples);
            fft.process(&mut buffer);
        }
        start.elapsed()
    };

    let timing = Timing {
        n,
        repeats,
        trigonometric,
        exponential,
        reference,
    };
    info!(n, speedup = timing.speedup(), "speedtest");
    Ok(timing)
}

fn time_strategy(samples: &[Complex<f64>], repeats: usize, strategy: Strategy) -> Result<Duration> {
    let handler = DftHandler::new(samples.len()).strategy(strategy);
    let mut out = vec![Complex::new(0., 0.); samples.len()];
    let start = Instant::now();
    for _ in 0..repeats {
        handler.forward_into(samples, &mut out)?;
    }
    Ok(start.elapsed())
}
