//! Compare both summation strategies on a signal with three harmonics.
//!
//! cargo run --example dft_strategy
use rustdft::report::format_rows;
use rustdft::{Complex, DftHandler, Strategy};
use std::f64::consts::PI;

fn main() {
    let n = 16;
    let x: Vec<Complex<f64>> = (0..n)
        .map(|i| {
            let arc = 2. * PI * i as f64 / n as f64;
            Complex::new(150. + 1000. * arc.sin() + 300. * (3. * arc).sin(), 0.)
        })
        .collect();
    for strategy in [Strategy::Trigonometric, Strategy::Exponential] {
        let xhat = DftHandler::new(n).strategy(strategy).forward(&x).unwrap();
        println!("{strategy:?}:");
        for row in format_rows(&xhat, true) {
            println!("{row}");
        }
    }
}
