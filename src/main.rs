use anyhow::{bail, Context, Result};
use rustdft::bench::{compare_time, ramp, SPEEDTEST_SIZES};
use rustdft::report::SampleReport;
use rustdft::{Complex, Strategy};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("report") => {
            if !run_report(args.collect())? {
                std::process::exit(1);
            }
            Ok(())
        }
        Some("speedtest") => run_speedtest(args.collect()),
        _ => {
            eprintln!("Usage:");
            eprintln!("  rustdft report [--exp] [--no-color]");
            eprintln!("  rustdft speedtest [SIZE ...]");
            Ok(())
        }
    }
}

fn real(values: &[f64]) -> Vec<Complex<f64>> {
    values.iter().map(|&v| Complex::new(v, 0.)).collect()
}

fn samples() -> Vec<Vec<Complex<f64>>> {
    let mut with_imag = real(&[1., 2., 3., 4.]);
    with_imag[0].im = 2.;
    vec![
        real(&[1., 2., 3., 4.]),
        with_imag,
        real(&[1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11.]),
        real(&[
            0., 1., 1., 1., 1., 1., 1., 1., 0., -1., -1., -1., -1., -1., -1., -1.,
        ]),
        real(&[
            150., 810., 1069., 959., 850., 959., 1069., 810., 150., -510., -769., -659., -550.,
            -659., -769., -510.,
        ]),
    ]
}

/// Returns whether every sample passed.
fn run_report(args: Vec<String>) -> Result<bool> {
    let mut strategy = Strategy::Trigonometric;
    let mut color = true;
    for arg in &args {
        match arg.as_str() {
            "--exp" => strategy = Strategy::Exponential,
            "--no-color" => color = false,
            other => bail!("unknown report option `{other}`"),
        }
    }
    let mut passed = true;
    for (i, sample) in samples().iter().enumerate() {
        let report = SampleReport::run(sample, strategy)
            .with_context(|| format!("transforming sample {i}"))?;
        print!("{}", report.render(color));
        passed &= report.passed();
    }
    Ok(passed)
}

fn run_speedtest(args: Vec<String>) -> Result<()> {
    let sizes = if args.is_empty() {
        SPEEDTEST_SIZES.to_vec()
    } else {
        args.iter()
            .map(|a| a.parse::<usize>().with_context(|| format!("invalid size `{a}`")))
            .collect::<Result<Vec<_>>>()?
    };
    for n in sizes {
        let timing = compare_time(&ramp(n), 1).with_context(|| format!("timing size {n}"))?;
        print!("{}", timing.render());
    }
    Ok(())
}
