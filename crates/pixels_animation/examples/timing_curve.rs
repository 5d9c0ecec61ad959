//! Timing Curve Demo
//!
//! Drives an animated value headlessly through a multi-keyframe timing curve
//! and prints it as a bar per frame:
//! - Bounce easing on the first segment, back on the second, linear after that
//! - Fixed 30 fps frame loop, the way a renderer would tick it
//!
//! Run with: cargo run -p pixels_animation --example timing_curve

use pixels_animation::builder::timing_curve;
use pixels_animation::{Animatable, Easing, Result};
use tracing_subscriber::EnvFilter;

const FRAME: f32 = 1.0 / 30.0;
const WIDTH: usize = 48;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let curve = timing_curve(
        3.0,
        [0.0, 0.25, 0.5, 0.75, 0.5],
        [Easing::InOutBounce, Easing::InOutBack, Easing::Linear],
    )?;

    let mut width = Animatable::new(0.0f32);
    width.animate(curve, 1.0);

    let mut frame = 0u32;
    while width.is_animating() {
        width.update(FRAME);
        frame += 1;

        let filled = ((*width).clamp(0.0, 1.0) * WIDTH as f32).round() as usize;
        tracing::info!(
            "{:>3} {:>6.3} |{}{}|",
            frame,
            *width,
            "#".repeat(filled),
            " ".repeat(WIDTH - filled)
        );
    }

    tracing::info!("settled at {:.3} after {} frames", *width, frame);
    Ok(())
}
