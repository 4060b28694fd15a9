//! Play a short tone back at a different rate and print both versions.

use strider::resample::{resample_f32, Interpolation, ResampleConfig};
use strider::{float_step, SliceCursor};

fn main() -> anyhow::Result<()> {
    // One cycle of a coarse triangle wave recorded at 8 kHz.
    let recorded = [0.0f32, 0.5, 1.0, 0.5, 0.0, -0.5, -1.0, -0.5];

    let config = ResampleConfig::from_rates(8_000.0, 12_000.0)?
        .with_interpolation(Interpolation::Linear);
    let played = resample_f32(&recorded, &config)?;

    println!("recorded ({} samples): {:?}", recorded.len(), recorded);
    println!("played   ({} samples): {:?}", played.len(), played);

    // The same walk by hand, showing where each output sample is read.
    let mut it = float_step(SliceCursor::new(&recorded), Some(config.step))?;
    for out_idx in 0..played.len() {
        println!(
            "out {out_idx}: input index {} + {:.3}",
            it.cursor().index(),
            it.error()
        );
        it.increment();
    }

    Ok(())
}
