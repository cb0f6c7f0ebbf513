//! Breakpoint envelopes applied as per-frame gain.

use grano_core::{AudioBuffer, Error, PrngState, Result};
use grano_gen::{Anchor, breakpoint};

use crate::pan::scaled;

/// Shape a buffer's amplitude along a list of envelope points.
///
/// The points become line-segment anchors, the breakpoint interpolator
/// renders one gain value per frame, and every channel of each frame is
/// scaled by its gain. At least two points are required — a single point
/// describes no segment. An empty buffer comes back unchanged.
///
/// # Example
///
/// ```rust,ignore
/// // Fade in over the first half, out over the second.
/// let shaped = apply_breakpoints(&buf, &[0.0, 1.0, 0.0], &mut prng)?;
/// ```
pub fn apply_breakpoints(
    buf: &AudioBuffer,
    points: &[f64],
    prng: &mut PrngState,
) -> Result<AudioBuffer> {
    if points.len() < 2 {
        return Err(Error::invalid_argument(
            "apply_breakpoints: at least two envelope points required",
        ));
    }
    if buf.is_empty() {
        return Ok(buf.clone());
    }

    let anchors: Vec<Anchor> = points.iter().map(|&point| Anchor::Value(point)).collect();
    let curve = breakpoint::render(&anchors, buf.num_frames(), prng);

    let ch = usize::from(buf.channels());
    let samples = buf
        .samples()
        .chunks_exact(ch)
        .enumerate()
        .flat_map(|(frame, frame_samples)| {
            let gain = curve[frame];
            frame_samples.iter().map(move |&sample| scaled(sample, gain))
        })
        .collect();
    AudioBuffer::from_samples(samples, buf.channels(), buf.sample_rate())
}
