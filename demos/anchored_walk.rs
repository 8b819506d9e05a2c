//! Anchored Walk
//!
//! Moves an anchored 4D integer vector around and resets it.
//!
//! This demo shows:
//! - Loading layered configuration
//! - Arithmetic, geometry and containment queries on `Vec4i`
//! - Recording and resetting an origin with `AnchoredVec4i`
//! - Driving edits through an inspector binding
//!
//! Run with: `cargo run --example anchored_walk`

use int4d::config::Int4dConfig;
use int4d::inspector::Rect;
use int4d::{AnchoredVec4i, ByteSerializable, Vec4i};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = Int4dConfig::load()?;
    let fmt = &config.format;

    let mut walker = AnchoredVec4i::new(Vec4i::new(1, 2, 3, 4));
    println!("start      {}", fmt.format(walker.value())?);

    for step in [Vec4i::RIGHT, Vec4i::UP, Vec4i::INWARD, Vec4i::INWARD] {
        *walker += step * 3;
        println!(
            "step {:<5} {} |d| = {:.3}",
            step.to_string(),
            fmt.format(walker.value())?,
            walker.displacement().magnitude()
        );
    }

    let heading = walker.displacement().normalized();
    println!("heading    {}", fmt.format(heading)?);
    println!("contains 10 or 11: {}", walker.contains_or(&[10, 11])?);
    println!("angle to W: {:.2} deg", walker.displacement().angle(Vec4i::INWARD));
    println!("bytes      {:02x?}", walker.to_bytes());

    {
        let mut inspector = config.inspector(&mut walker)?;
        inspector.edit("X", "-20")?;
        let layout = inspector.layout(Rect::new(0.0, 0.0, 420.0, 18.0), 120.0, 600.0, &config.inspector);
        for (label, (value, rect)) in inspector
            .field_labels()
            .iter()
            .zip(inspector.display_values().iter().zip(&layout.fields))
        {
            println!("  {} = {:>6} at x={:.1} w={:.1}", label, value, rect.x, rect.width);
        }
    }

    println!("reset      {}", fmt.format(walker.reset())?);
    Ok(())
}
