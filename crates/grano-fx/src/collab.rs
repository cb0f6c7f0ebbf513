//! Trait seams for the external collaborators.
//!
//! The core deliberately does not implement raw oscillator synthesis,
//! low-level envelope application, mixing, or sample-rate conversion —
//! those live in a native synthesis engine and a resampler owned by the
//! host. The applicators in this crate reach them through these
//! object-safe traits, so any engine that can fill the signatures plugs
//! in.

use grano_core::{AudioBuffer, Result};
use grano_gen::Shape;

/// Native synthesis primitives.
///
/// Implementations produce buffers in the packed interleaved 16-bit
/// layout documented on [`AudioBuffer`].
pub trait NativeSynth {
    /// Render `frames` frames of an oscillator.
    fn synth(
        &self,
        shape: Shape,
        freq_hz: f64,
        frames: usize,
        amp: f64,
        phase: f64,
        offset: f64,
    ) -> Result<AudioBuffer>;

    /// Render a single cycle of `frames` frames.
    fn cycle(&self, shape: Shape, frames: usize, amp: f64) -> Result<AudioBuffer>;

    /// Apply a shaped amplitude envelope across a buffer.
    fn envelope(
        &self,
        buf: &AudioBuffer,
        shape: Shape,
        amp: f64,
        phase: f64,
        offset: f64,
        mult: f64,
    ) -> Result<AudioBuffer>;

    /// Sum buffers into one.
    fn mix(&self, buffers: &[AudioBuffer]) -> Result<AudioBuffer>;
}

/// Sample-rate conversion.
pub trait Resampler {
    /// Convert `buf` from `from_rate` to `to_rate`, scaling the frame
    /// count by `to_rate / from_rate`.
    fn resample(&self, buf: &AudioBuffer, from_rate: u32, to_rate: u32) -> Result<AudioBuffer>;
}
