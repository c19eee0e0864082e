//! Orbit views of the exp(x·y) quiver
//!
//! Samples the default 8×8×8 grid, prints the field along the grid diagonal,
//! then renders the same quiver from four camera positions. The camera is
//! driven the way an interactive viewer would drive it: pointer offsets orbit
//! it, scroll steps zoom it.
//!
//! Run: cargo run -p gradfield --example orbit_views

use gradfield::{render_svg, FieldSampler, OrbitCamera, Quiver, QuiverConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = QuiverConfig::default();
    let samples = FieldSampler::new(config.clone()).sample()?;

    println!("Field along the diagonal (i = j = k):");
    println!("  {:>7} {:>7} {:>7} | {:>10} {:>10} {:>10}", "x", "y", "z", "U", "V", "W");
    for i in 0..samples.shape()[0] {
        let p = samples.position(i, i, i);
        let d = samples.vector(i, i, i);
        println!(
            "  {:7.3} {:7.3} {:7.3} | {:10.4} {:10.4} {:10.4}",
            p.x, p.y, p.z, d.x, d.y, d.z
        );
    }
    println!();

    let quiver = Quiver::build(&samples, &config);
    println!(
        "{} arrows ({} skipped), length {} normalized={}",
        quiver.arrows().len(),
        quiver.skipped(),
        config.arrow_length,
        config.normalize
    );

    // (name, pointer dx, pointer dy, scroll)
    let views = [
        ("default", 0.0, 0.0, 0.0),
        ("side", 100.0, 100.0, 0.0),
        ("top", 0.0, -200.0, 0.0),
        ("close", -150.0, 0.0, 12.0),
    ];
    for (name, dx, dy, scroll) in views {
        let mut camera = OrbitCamera::default();
        camera.orbit(dx, dy);
        camera.zoom(scroll);
        let basis = camera.basis()?;
        let svg = render_svg(&quiver, &config, &camera)?;
        let path = format!("orbit_{name}.svg");
        std::fs::write(&path, &svg)?;
        println!(
            "  {name:<8} theta={:6.1} phi={:5.1} r={:4.1} front=({:+.2}, {:+.2}, {:+.2}) -> {path}",
            camera.theta, camera.phi, camera.radius, basis.front.x, basis.front.y, basis.front.z
        );
    }

    Ok(())
}
