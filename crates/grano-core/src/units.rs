//! Unit conversions between frames, milliseconds, seconds, Hz, and BPM.
//!
//! All conversions are pure arithmetic over an [`AudioConfig`]'s sample
//! rate. A config can only be constructed with a nonzero rate, so the
//! frame/time conversions cannot divide by zero; the BPM helpers take the
//! tempo as an argument and reject a non-positive value instead of
//! propagating an infinity.

use crate::config::AudioConfig;
use crate::error::{Error, Result};

impl AudioConfig {
    /// Convert seconds to frames (truncating).
    ///
    /// # Example
    ///
    /// ```rust
    /// use grano_core::AudioConfig;
    ///
    /// let config = AudioConfig::default(); // 44100 Hz
    /// assert_eq!(config.seconds_to_frames(1.0), 44100);
    /// assert_eq!(config.seconds_to_frames(0.5), 22050);
    /// ```
    pub fn seconds_to_frames(&self, seconds: f64) -> usize {
        self.ms_to_frames(seconds * 1000.0)
    }

    /// Convert milliseconds to frames (truncating).
    ///
    /// Negative durations clamp to zero frames.
    pub fn ms_to_frames(&self, ms: f64) -> usize {
        let frames = ms * f64::from(self.sample_rate) / 1000.0;
        frames.max(0.0) as usize
    }

    /// Convert frames to milliseconds.
    pub fn frames_to_ms(&self, frames: usize) -> f64 {
        self.frames_to_seconds(frames) * 1000.0
    }

    /// Convert frames to seconds.
    pub fn frames_to_seconds(&self, frames: usize) -> f64 {
        frames as f64 / f64::from(self.sample_rate)
    }

    /// Frequency in Hz of a cycle that is `frames` long.
    ///
    /// Zero frames maps to 0 Hz rather than an infinity.
    pub fn frames_to_hz(&self, frames: usize) -> f64 {
        if frames > 0 {
            f64::from(self.sample_rate) / frames as f64
        } else {
            0.0
        }
    }

    /// Length in frames of one cycle at `hz` (truncating).
    ///
    /// A zero or negative frequency maps to a 1-frame cycle — a documented
    /// degenerate-but-non-crashing policy, not an error.
    pub fn hz_to_frames(&self, hz: f64) -> usize {
        if hz > 0.0 {
            (f64::from(self.sample_rate) / hz) as usize
        } else {
            1
        }
    }

    /// Byte offset of a frame in the packed little-endian 16-bit PCM
    /// layout: `channels × 2` bytes per frame. This stride is the ABI for
    /// external consumers reading buffers directly.
    pub fn frames_to_bytes(&self, frames: usize) -> usize {
        frames * usize::from(self.channels) * 2
    }
}

/// Milliseconds per beat at the given tempo.
///
/// A zero or negative BPM is rejected: the division would otherwise
/// produce an infinity that poisons every downstream frame count.
pub fn bpm_to_ms(bpm: f64) -> Result<f64> {
    if bpm <= 0.0 {
        return Err(Error::invalid_argument(format!(
            "bpm must be positive, got {bpm}"
        )));
    }
    Ok(60000.0 / bpm)
}

/// Frames per beat at the given tempo (truncating).
pub fn bpm_to_frames(bpm: f64, config: &AudioConfig) -> Result<usize> {
    let ms = bpm_to_ms(bpm)?;
    Ok((ms / 1000.0 * f64::from(config.sample_rate)) as usize)
}
