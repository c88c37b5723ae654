//! Show how `Normalization` acts on the inverse transform only.
//!
//! cargo run --example dft_scaling
use rustdft::{Complex, DftHandler, Normalization};

fn unit_energy(data: &mut [Complex<f64>]) {
    let scale = 1. / (data.len() as f64).sqrt();
    for d in data.iter_mut() {
        *d = *d * scale;
    }
}

fn main() {
    let x: Vec<Complex<f64>> = [1., 2., 3., 4.].iter().map(|&v| Complex::new(v, 0.)).collect();

    for (label, norm) in [
        ("default", Normalization::Default),
        ("none", Normalization::None),
        ("1/sqrt(N)", Normalization::Custom(unit_energy)),
    ] {
        let handler = DftHandler::<f64>::new(x.len()).normalization(norm);
        // identical spectrum for every normalization
        let xhat = handler.forward(&x).unwrap();
        let back = handler.inverse(&xhat).unwrap();
        println!("{label:>10}: X[0] = {}  x[3] = {}", xhat[0], back[3]);
    }
}
