//! Walkthrough of the vector and point API.
//!
//! Run with `RUST_LOG=math3d=trace` to see the library's diagnostics.

use math3d::prelude::*;
use math3d::vector;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Variable-length vectors
    let v = vector![3.0, 0.0, 4.0];
    let w = vector![1.0, 2.0, 2.0];
    info!(?v, ?w, "vectors");
    info!(sum = ?v.add(&w), difference = ?v.sub(&w), "arithmetic");
    info!(
        length = v.length(),
        length_squared = v.length_squared(),
        manhattan = v.manhattan_distance(),
        "norms"
    );
    info!(element_wise = ?v.dot(&w), scalar = v.inner_product(&w), "products");
    info!(normalized = ?v.normalize(), zero = ?zero_vector(3).normalize(), "normalize");

    // Checked operations report mismatched dimensions instead of panicking
    if let Err(err) = v.checked_add(&vector![1.0, 2.0]) {
        info!(%err, "checked_add rejected operands");
    }
    let lowered = Vec3::try_from(&w)?;
    info!(?lowered, "lowered Vector to Vec3");

    // Fixed-size vectors
    let a = Vec2::new(3.0, 4.0);
    info!(normalized = ?a.normalize(), basis = ?Vec2::standard_basis(), "Vec2");
    info!(basis = ?Vec4::standard_basis(), "Vec4 basis starts with w");

    // Points
    let p = Point::ORIGIN;
    let q = Point::new(1.0, 2.0, 2.0);
    info!(distance = p.distance(&q), delta = ?p.delta_xyz(&q), "points");
    info!(slope = ?p.slope(&q), cosines = ?p.direction_cosines(&q), "slope");

    let line = p.point_slope(&q);
    for t in [0.0, 0.5, 1.0, 2.0] {
        info!(t, point = ?line(t), "point on line");
    }

    Ok(())
}
