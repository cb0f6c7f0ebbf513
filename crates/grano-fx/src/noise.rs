//! Noise generators and the frame-scatter corruptor.

use grano_core::{AudioBuffer, AudioConfig, PrngState, Result};
use grano_gen::Shape;

use crate::collab::NativeSynth;

/// Uniform white noise: every sample of every channel drawn from the
/// full i16 range.
pub fn noise(frames: usize, config: &AudioConfig, prng: &mut PrngState) -> Result<AudioBuffer> {
    let samples = (0..frames * usize::from(config.channels))
        .map(|_| prng.randint(i64::from(i16::MIN), i64::from(i16::MAX)) as i16)
        .collect();
    AudioBuffer::from_samples(samples, config.channels, config.sample_rate)
}

/// Time-domain band-limited noise: single cycles at random frequencies
/// in `[low_hz, high_hz)` appended until at least `length_frames` long.
///
/// The last cycle is kept whole, so the result may overshoot the
/// requested length by up to one cycle; callers wanting an exact length
/// follow with [`AudioBuffer::cut`]. The classic band for this texture
/// is roughly 3–7 kHz with a full-period sine.
pub fn band_limited_noise(
    length_frames: usize,
    low_hz: f64,
    high_hz: f64,
    shape: Shape,
    config: &AudioConfig,
    synth: &dyn NativeSynth,
    prng: &mut PrngState,
) -> Result<AudioBuffer> {
    let mut cycles = Vec::new();
    let mut total = 0;
    while total < length_frames {
        let freq = prng.draw(low_hz, high_hz);
        let cycle = synth.cycle(shape, config.hz_to_frames(freq), 1.0)?;
        if cycle.is_empty() {
            break;
        }
        total += cycle.num_frames();
        cycles.push(cycle);
    }
    if cycles.is_empty() {
        return AudioBuffer::new(config.channels, config.sample_rate);
    }
    AudioBuffer::concat_all(&cycles)
}

/// Scatter single frames of a buffer across itself.
///
/// `coverage` scales how many frames are moved: `total × coverage`
/// single-frame cuts, each pasted over a random position. Per move the
/// source frame is drawn first, the destination second — seeded streams
/// depend on that order. An empty buffer comes back unchanged.
pub fn fnoise(buf: &AudioBuffer, coverage: f64, prng: &mut PrngState) -> Result<AudioBuffer> {
    let total = buf.num_frames();
    if total == 0 {
        return Ok(buf.clone());
    }

    let moves = (total as f64 * coverage) as usize;
    let mut out = buf.clone();
    for _ in 0..moves {
        let source = prng.randint(0, total as i64 - 1) as usize;
        let frame = out.cut(source, 1);
        let destination = prng.randint(0, total as i64 - 1) as usize;
        out = out.replace_at(&frame, destination)?;
    }
    Ok(out)
}
