//! Stereo panning.

use grano_core::{AudioBuffer, Error, Result};

/// Translate a pan position in `[0, 1]` into `(left, right)` channel
/// gains.
///
/// Center (0.5) leaves both channels at unity; moving toward either edge
/// attenuates the opposite channel linearly while the near channel stays
/// at unity. 0.0 is hard left, 1.0 hard right.
///
/// # Example
///
/// ```rust
/// use grano_fx::pan::pan_positions;
///
/// assert_eq!(pan_positions(0.5), (1.0, 1.0));
/// assert_eq!(pan_positions(0.0), (1.0, 0.0));
/// assert_eq!(pan_positions(1.0), (0.0, 1.0));
/// ```
pub fn pan_positions(position: f64) -> (f64, f64) {
    if position > 0.5 {
        let toward_right = (position - 0.5) * 2.0;
        (1.0 - toward_right, 1.0)
    } else if position < 0.5 {
        (1.0, position * 2.0)
    } else {
        (1.0, 1.0)
    }
}

/// Pan a stereo buffer to `position` with an overall `amp` gain.
///
/// Mono or multi-channel input is rejected — there is no meaningful
/// left/right in it.
pub fn pan(buf: &AudioBuffer, position: f64, amp: f64) -> Result<AudioBuffer> {
    if buf.channels() != 2 {
        return Err(Error::invalid_argument(
            "pan: stereo input required",
        ));
    }
    let (left_gain, right_gain) = pan_positions(position);
    let samples = buf
        .samples()
        .chunks_exact(2)
        .flat_map(|frame| {
            [
                scaled(frame[0], left_gain * amp),
                scaled(frame[1], right_gain * amp),
            ]
        })
        .collect();
    AudioBuffer::from_samples(samples, 2, buf.sample_rate())
}

/// Scale one sample by a float gain, saturating at the i16 rails.
pub(crate) fn scaled(sample: i16, gain: f64) -> i16 {
    (f64::from(sample) * gain).clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}
