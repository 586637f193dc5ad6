use mfe_lib::{default_configs, integrate_with_config, QuadratureConfig};

fn main() {
    let presets: [(&str, QuadratureConfig, &str); 4] = [
        ("Standard", default_configs::standard(), "General use"),
        ("Fast", default_configs::fast(), "Smooth integrands"),
        ("Precise", default_configs::precise(), "Reference values"),
        ("Minimal", default_configs::minimal(), "Quick checks, debugging"),
    ];

    println!("MFE-lib Quadrature Configuration Presets\n");

    for (i, (name, config, use_case)) in presets.iter().enumerate() {
        println!("{}. {} Configuration:", i + 1, name);
        println!("   Rule: {}", config.rule);
        println!("   Initial subdivisions: {}", config.initial_subdivisions);
        println!("   Tolerance: {:.1e}", config.tolerance);
        println!("   Max refinements: {}", config.max_refinements);
        println!("   Use case: {}\n", use_case);
    }

    println!("Integrating sin(x) over [0, pi] with each preset...");
    for (name, config, _) in &presets {
        match integrate_with_config(f64::sin, 0.0, std::f64::consts::PI, config) {
            Ok(v) => println!("   {:<9} {:.12}", name, v),
            Err(e) => println!("   {:<9} failed: {}", name, e),
        }
    }
}
