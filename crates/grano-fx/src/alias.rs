//! Grain-decimation distortion.
//!
//! The buffer is chopped into fixed grains; every even-indexed grain is
//! discarded and every odd-indexed grain doubled in place. The result is
//! the same length (up to the dropped remainder) but hops through the
//! source two grains at a time, a crude downward alias of the original —
//! optionally smoothed with a collaborator envelope.

use grano_core::{AudioBuffer, AudioConfig, PrngState, Result, segment};
use grano_gen::{Shape, wavetable};

use crate::collab::NativeSynth;

/// Apply the grain-decimation effect.
///
/// `split_frames == 0` asks for a randomized grain: the configured grain
/// window divided by a draw in `[1, grain_frames]`. `envelope_shape`
/// `None` leaves the result raw; [`Shape::Random`] resolves to one of
/// the non-recursive families before reaching the collaborator.
///
/// A buffer too short to yield any odd-indexed grain returns empty.
pub fn alias(
    buf: &AudioBuffer,
    envelope_shape: Option<Shape>,
    split_frames: usize,
    config: &AudioConfig,
    synth: &dyn NativeSynth,
    prng: &mut PrngState,
) -> Result<AudioBuffer> {
    let split_frames = if split_frames == 0 {
        let divisor = prng.randint(1, config.grain_frames as i64) as usize;
        (config.grain_frames / divisor.max(1)).max(1)
    } else {
        split_frames
    };

    let grains = segment::split_fixed(buf, split_frames)?;
    let doubled: Vec<AudioBuffer> = grains
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .map(|(_, grain)| grain.looped(2))
        .collect();

    tracing::debug!(
        grain_frames = split_frames,
        kept = doubled.len(),
        "alias decimation"
    );

    if doubled.is_empty() {
        return AudioBuffer::new(buf.channels(), buf.sample_rate());
    }
    let out = AudioBuffer::concat_all(&doubled)?;

    match envelope_shape {
        Some(shape) => {
            let shape = if shape == Shape::Random {
                wavetable::random_shape(prng)
            } else {
                shape
            };
            synth.envelope(&out, shape, 1.0, 0.0, 0.0, 1.0)
        }
        None => Ok(out),
    }
}
