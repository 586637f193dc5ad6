//! Compare the three quadrature rules on a few integrands.
//!
//! Run with `RUST_LOG=mfe_lib=debug` to follow each refinement step.

use anyhow::Result;
use mfe_lib::{integrate_with_report, norm_pdf, QuadratureConfig, QuadratureRule};
use tracing_subscriber::EnvFilter;

type Integrand = Box<dyn Fn(f64) -> f64>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cases: Vec<(&str, Integrand, f64, f64, f64)> = vec![
        ("x^2 on [0, 2]", Box::new(|x: f64| x * x) as Integrand, 0.0, 2.0, 8.0 / 3.0),
        ("e^x on [0, 1]", Box::new(f64::exp) as Integrand, 0.0, 1.0, 1.0_f64.exp() - 1.0),
        ("phi on [0, 1.96]", Box::new(norm_pdf) as Integrand, 0.0, 1.96, 0.475_002_104_851_780),
    ];

    println!(
        "{:<18} {:<12} {:>16} {:>10} {:>8} {:>12}",
        "Integrand", "Rule", "Estimate", "n", "Steps", "Abs error"
    );
    println!("{}", "-".repeat(80));

    for (label, f, a, b, exact) in &cases {
        for rule in QuadratureRule::ALL {
            let config = QuadratureConfig::default().with_rule(rule);
            let report = integrate_with_report(f, *a, *b, &config)?;
            println!(
                "{:<18} {:<12} {:>16.10} {:>10} {:>8} {:>12.3e}",
                label,
                rule,
                report.value,
                report.subdivisions,
                report.refinements,
                (report.value - exact).abs()
            );
        }
    }

    Ok(())
}
