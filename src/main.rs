//! Sample the `exp(x·y)` field on the default grid and write the quiver figure.
//!
//! Run: cargo run --bin gradfield
//! Verbose: RUST_LOG=gradfield=debug cargo run --bin gradfield

use gradfield::{render_svg, FieldSampler, OrbitCamera, Quiver, QuiverConfig};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const OUTPUT: &str = "gradient_field.svg";

/// `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = QuiverConfig::default();
    let samples = FieldSampler::new(config.clone()).sample()?;
    let quiver = Quiver::build(&samples, &config);

    let svg = render_svg(&quiver, &config, &OrbitCamera::default())?;
    let path = Path::new(OUTPUT);
    std::fs::write(path, svg)?;

    info!(
        path = %path.display(),
        arrows = quiver.arrows().len(),
        skipped = quiver.skipped(),
        "figure written"
    );
    Ok(())
}
