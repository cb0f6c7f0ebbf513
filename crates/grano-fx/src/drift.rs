//! Pitch transposition and slow tape-style pitch drift, via the external
//! resampler.

use grano_core::{AudioBuffer, Error, PrngState, Result, segment};
use grano_gen::{Shape, wavetable};

use crate::collab::Resampler;

/// Chunk length the drift sweep works over — 10 ms at 44.1 kHz, short
/// enough that the per-chunk rate steps read as continuous wobble.
const DRIFT_CHUNK_FRAMES: usize = 441;

/// Transpose a buffer by a speed factor: `1.0` is unchanged, `0.5` half
/// speed (down an octave), `2.0` double speed (up an octave).
///
/// The work happens in the collaborator: the buffer is resampled to
/// `rate / amount` and the result is addressed at the original rate, so
/// playback runs `amount` times as fast. A non-positive factor is
/// rejected.
pub fn transpose(
    buf: &AudioBuffer,
    amount: f64,
    resampler: &dyn Resampler,
) -> Result<AudioBuffer> {
    if amount <= 0.0 {
        return Err(Error::invalid_argument(format!(
            "transpose: speed factor must be positive, got {amount}"
        )));
    }
    let from_rate = buf.sample_rate();
    let to_rate = ((f64::from(from_rate) / amount) as u32).max(1);
    resampler.resample(buf, from_rate, to_rate)
}

/// Apply a slow sinusoidal pitch drift of ±`amount / 2` around unity.
///
/// The buffer is split into short fixed chunks, a sine speed table over
/// `[1 - amount/2, 1 + amount/2]` is rendered at chunk resolution, and
/// each chunk is transposed by its table entry. `amount` must stay below
/// `2.0` — beyond that the low side of the sweep reaches a zero or
/// negative speed, which [`transpose`] rejects.
///
/// A buffer shorter than one chunk comes back unchanged.
pub fn drift(
    buf: &AudioBuffer,
    amount: f64,
    resampler: &dyn Resampler,
    prng: &mut PrngState,
) -> Result<AudioBuffer> {
    let high = 1.0 + amount * 0.5;
    let low = 1.0 - amount * 0.5;

    let chunks = segment::split_fixed(buf, DRIFT_CHUNK_FRAMES)?;
    if chunks.is_empty() {
        return Ok(buf.clone());
    }

    let speeds = wavetable::generate(Shape::Sine, chunks.len(), high, low, prng);
    tracing::debug!(chunks = chunks.len(), amount, "drift sweep");

    let shifted: Vec<AudioBuffer> = chunks
        .iter()
        .zip(&speeds)
        .map(|(chunk, &speed)| transpose(chunk, speed, resampler))
        .collect::<Result<_>>()?;
    AudioBuffer::concat_all(&shifted)
}
