//! Console report of a transform test sample.
//!
//! A sample is transformed, checked against the reference transform, then
//! transformed back and checked against the original samples. Each element
//! is printed as one tabulated row followed by `OK` or `ERROR`.
use crate::verify::{self, Check};
use crate::{DftHandler, Result, Strategy};
use rustfft::num_complex::Complex;
use std::fmt::Write;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Magnitude as used in the report, `2/N * |v|`.
#[must_use]
pub fn magnitude(value: Complex<f64>, n: usize) -> f64 {
    value.norm() * 2. / n as f64
}

/// Phase `atan2(im, re)`.
#[must_use]
pub fn phase(value: Complex<f64>) -> f64 {
    value.im.atan2(value.re)
}

/// One tabulated row, `index re imj` optionally followed by magnitude and phase.
#[must_use]
pub fn format_row(index: usize, value: Complex<f64>, n: usize, polar: bool) -> String {
    let mut row = format!("{:4} {:18.8} {:18.8}j", index, value.re, value.im);
    if polar {
        row.push_str(&format!(
            " {:12.6} {:12.6}",
            magnitude(value, n),
            phase(value)
        ));
    }
    row
}

/// Rows for every element of `values`.
#[must_use]
pub fn format_rows(values: &[Complex<f64>], polar: bool) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format_row(i, *v, values.len(), polar))
        .collect()
}

/// Checked forward and inverse transform of one sample.
#[derive(Debug, Clone)]
pub struct SampleReport {
    /// Time-domain input
    pub samples: Vec<Complex<f64>>,
    /// Engine spectrum checked against the reference
    pub spectrum: Vec<Check<f64>>,
    /// Round-tripped samples checked against the input
    pub recovered: Vec<Check<f64>>,
}

impl SampleReport {
    /// Runs the sample through `strategy` and checks both directions.
    ///
    /// Both directions are checked with the scaled [`verify::tolerance`] of
    /// the samples, which also covers the rounding of the reference.
    ///
    /// # Errors
    /// Propagates transform errors, e.g. non-finite samples.
    pub fn run(samples: &[Complex<f64>], strategy: Strategy) -> Result<Self> {
        let handler = DftHandler::new(samples.len()).strategy(strategy);
        let xhat = handler.forward(samples)?;
        let tol = verify::tolerance(samples);
        let spectrum = verify::compare(&xhat, &verify::reference_forward(samples), tol)?;
        let x_inv = handler.inverse(&xhat)?;
        let recovered = verify::compare(&x_inv, samples, tol)?;
        Ok(SampleReport {
            samples: samples.to_vec(),
            spectrum,
            recovered,
        })
    }

    /// Whether every element passed in both directions.
    #[must_use]
    pub fn passed(&self) -> bool {
        verify::all_ok(&self.spectrum) && verify::all_ok(&self.recovered)
    }

    /// Renders the report, with ANSI colors if `color` is set.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let (ok, error) = if color {
            (format!("{GREEN}OK{RESET}"), format!("{RED}ERROR{RESET}"))
        } else {
            ("OK".to_string(), "ERROR".to_string())
        };
        let n = self.samples.len();
        let stars = "*".repeat(30);
        let samples: Vec<String> = self.samples.iter().map(ToString::to_string).collect();

        let mut out = String::new();
        let _ = writeln!(out, "\n{stars} Test {stars}");
        let _ = writeln!(out, "Samples: {n} \n [{}]", samples.join(", "));
        let _ = writeln!(out, "DFT:");
        for c in &self.spectrum {
            if c.ok {
                let _ = writeln!(out, "{} {ok}", format_row(c.index, c.actual, n, true));
            } else {
                let _ = writeln!(
                    out,
                    "{} {error} X_ref: {:.18} {:.18} X: {:.18} {:.18}",
                    format_row(c.index, c.actual, n, false),
                    c.expected.re,
                    c.expected.im,
                    c.actual.re,
                    c.actual.im
                );
            }
        }
        let _ = writeln!(out, "IDFT:");
        for c in &self.recovered {
            if c.ok {
                let _ = writeln!(out, "{} {ok}", format_row(c.index, c.actual, n, false));
            } else {
                let _ = writeln!(
                    out,
                    "{} {error} x: {:.18} {:.18} x_inv: {:.18} {:.18}",
                    format_row(c.index, c.actual, n, false),
                    c.expected.re,
                    c.expected.im,
                    c.actual.re,
                    c.actual.im
                );
            }
        }
        out
    }
}
