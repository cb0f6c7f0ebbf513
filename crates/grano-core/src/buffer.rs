//! Frame-addressed algebra over packed 16-bit PCM.
//!
//! An [`AudioBuffer`] is an ordered sequence of signed 16-bit samples
//! interleaved by channel; one *frame* is one sample per channel. Every
//! operation here addresses the buffer in frames and converts to sample
//! offsets via the channel count (`sample_offset = frame * channels`);
//! the packed byte layout — `channels × 2` little-endian bytes per frame —
//! is the ABI for external engines reading these buffers directly
//! ([`AudioBuffer::to_bytes`]).
//!
//! All operations are pure value-returning transforms; nothing mutates a
//! shared buffer in place. Out-of-range cuts clamp to the available data
//! instead of failing — generative pipelines degrade gracefully rather
//! than abort mid-render.

use crate::error::{Error, Result};

/// Interleaved signed 16-bit PCM with a channel count and sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i16>,
    channels: u16,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create an empty buffer.
    ///
    /// Fails with [`Error::InvalidArgument`] for a zero channel count.
    pub fn new(channels: u16, sample_rate: u32) -> Result<Self> {
        Self::from_samples(Vec::new(), channels, sample_rate)
    }

    /// Wrap interleaved samples.
    ///
    /// The sample count must be a multiple of the channel count — that is
    /// the invariant every frame-indexed operation relies on.
    pub fn from_samples(samples: Vec<i16>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(Error::invalid_argument("buffer channels must be nonzero"));
        }
        if samples.len() % usize::from(channels) != 0 {
            return Err(Error::invalid_argument(format!(
                "sample count {} is not a multiple of {} channels",
                samples.len(),
                channels
            )));
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// A buffer of zero-valued frames.
    pub fn silence(frames: usize, channels: u16, sample_rate: u32) -> Result<Self> {
        Self::from_samples(
            vec![0; frames * usize::from(channels)],
            channels,
            sample_rate,
        )
    }

    /// Decode packed little-endian 16-bit PCM bytes.
    pub fn from_bytes(bytes: &[u8], channels: u16, sample_rate: u32) -> Result<Self> {
        if bytes.len() % 2 != 0 {
            return Err(Error::invalid_argument(
                "byte length must be even for 16-bit samples",
            ));
        }
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Self::from_samples(samples, channels, sample_rate)
    }

    /// Internal constructor for slices already known to satisfy the
    /// frame invariant.
    fn from_parts(&self, samples: Vec<i16>) -> Self {
        Self {
            samples,
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }

    /// The interleaved samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Number of interleaved channels per frame.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Length in frames.
    pub fn num_frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels)
    }

    /// Whether the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples of one frame, or `None` past the end.
    pub fn frame(&self, index: usize) -> Option<&[i16]> {
        let ch = usize::from(self.channels);
        let start = index.checked_mul(ch)?;
        self.samples.get(start..start + ch)
    }

    /// Encode as packed little-endian bytes (`channels × 2` per frame).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for sample in &self.samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    /// Copy out a frame range.
    ///
    /// Out-of-range requests clamp silently to the available data: a cut
    /// past the end returns whatever overlaps, possibly nothing. Never an
    /// error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grano_core::AudioBuffer;
    ///
    /// let buf = AudioBuffer::from_samples(vec![1, 2, 3, 4, 5], 1, 44100).unwrap();
    /// // Asking for 1000 frames starting at 2 clamps to the 3 available.
    /// assert_eq!(buf.cut(2, 1000).num_frames(), 3);
    /// ```
    pub fn cut(&self, start_frame: usize, len_frames: usize) -> Self {
        let ch = usize::from(self.channels);
        let total = self.samples.len();
        let start = start_frame.saturating_mul(ch).min(total);
        let end = start
            .saturating_add(len_frames.saturating_mul(ch))
            .min(total);
        self.from_parts(self.samples[start..end].to_vec())
    }

    /// Surround with silence: `lead` zero frames before, `trail` after.
    pub fn pad(&self, lead_frames: usize, trail_frames: usize) -> Self {
        let ch = usize::from(self.channels);
        let mut samples = Vec::with_capacity(self.samples.len() + (lead_frames + trail_frames) * ch);
        samples.resize(lead_frames * ch, 0);
        samples.extend_from_slice(&self.samples);
        samples.resize(samples.len() + trail_frames * ch, 0);
        self.from_parts(samples)
    }

    /// Splice `needle` in at a frame boundary, growing the result by the
    /// needle's length. An insert point past the end clamps to the end
    /// (append).
    pub fn insert_at(&self, needle: &AudioBuffer, at_frame: usize) -> Result<Self> {
        self.check_channels(needle)?;
        let ch = usize::from(self.channels);
        let split = at_frame.saturating_mul(ch).min(self.samples.len());
        let mut samples = Vec::with_capacity(self.samples.len() + needle.samples.len());
        samples.extend_from_slice(&self.samples[..split]);
        samples.extend_from_slice(&needle.samples);
        samples.extend_from_slice(&self.samples[split..]);
        Ok(self.from_parts(samples))
    }

    /// Overwrite `needle.num_frames()` frames ending exactly at
    /// `end_frame`, preserving total length — a fixed-size overwrite,
    /// distinct from [`insert_at`](Self::insert_at).
    ///
    /// Clamping keeps the needle's tail aligned to the end frame: if the
    /// region would start before frame 0 (or `end_frame` exceeds the
    /// buffer), only the overlapping trailing part of the needle lands.
    pub fn replace_at(&self, needle: &AudioBuffer, end_frame: usize) -> Result<Self> {
        self.check_channels(needle)?;
        let ch = usize::from(self.channels);
        let total_frames = self.num_frames();
        let needle_frames = needle.num_frames();

        let end = end_frame.min(total_frames);
        let start = end.saturating_sub(needle_frames);
        let copied = end - start;

        let mut samples = self.samples.clone();
        let src_offset = (needle_frames - copied) * ch;
        samples[start * ch..end * ch]
            .copy_from_slice(&needle.samples[src_offset..src_offset + copied * ch]);
        Ok(self.from_parts(samples))
    }

    /// Force the buffer to an exact length.
    ///
    /// Longer inputs truncate via [`cut`](Self::cut). Shorter inputs are
    /// tiled (repeated whole, then truncated to the target) unless
    /// `silence_pad` is set, in which case trailing silence fills the gap.
    /// A zero-length input is returned unchanged — there is nothing to
    /// tile from.
    pub fn fill(&self, target_frames: usize, silence_pad: bool) -> Self {
        let len = self.num_frames();
        if len == 0 {
            return self.clone();
        }
        if len < target_frames {
            if silence_pad {
                return self.pad(0, target_frames - len);
            }
            let repeats = target_frames / len + 1;
            return self.looped(repeats).cut(0, target_frames);
        }
        self.cut(0, target_frames)
    }

    /// The buffer repeated `count` times end to end.
    pub fn looped(&self, count: usize) -> Self {
        let mut samples = Vec::with_capacity(self.samples.len() * count);
        for _ in 0..count {
            samples.extend_from_slice(&self.samples);
        }
        self.from_parts(samples)
    }

    /// This buffer followed by `other`.
    pub fn concat(&self, other: &AudioBuffer) -> Result<Self> {
        self.check_channels(other)?;
        let mut samples = Vec::with_capacity(self.samples.len() + other.samples.len());
        samples.extend_from_slice(&self.samples);
        samples.extend_from_slice(&other.samples);
        Ok(self.from_parts(samples))
    }

    /// Join a sequence of equal-channel buffers end to end.
    ///
    /// Fails with [`Error::EmptyInput`] when given nothing — the channel
    /// count of an empty join is undefined.
    pub fn concat_all(chunks: &[AudioBuffer]) -> Result<Self> {
        let Some(first) = chunks.first() else {
            return Err(Error::EmptyInput {
                what: "concat_all",
            });
        };
        let mut out = first.clone();
        for chunk in &chunks[1..] {
            out = out.concat(chunk)?;
        }
        Ok(out)
    }

    /// Deinterleave into one mono buffer per channel.
    ///
    /// This is the exact structural split (no gain applied), the inverse
    /// of [`merge_channels`](Self::merge_channels).
    pub fn split_channels(&self) -> Vec<AudioBuffer> {
        let ch = usize::from(self.channels);
        (0..ch)
            .map(|c| {
                let samples = self.samples.iter().skip(c).step_by(ch).copied().collect();
                AudioBuffer {
                    samples,
                    channels: 1,
                    sample_rate: self.sample_rate,
                }
            })
            .collect()
    }

    /// Reinterleave mono buffers into one multi-channel buffer.
    ///
    /// All inputs must be mono and the same length.
    pub fn merge_channels(channels: &[AudioBuffer]) -> Result<Self> {
        let Some(first) = channels.first() else {
            return Err(Error::EmptyInput {
                what: "merge_channels",
            });
        };
        let frames = first.num_frames();
        for channel in channels {
            if channel.channels != 1 {
                return Err(Error::invalid_argument(
                    "merge_channels: inputs must be mono",
                ));
            }
            if channel.num_frames() != frames {
                return Err(Error::invalid_argument(
                    "merge_channels: inputs must be the same length",
                ));
            }
        }
        let mut samples = Vec::with_capacity(frames * channels.len());
        for frame in 0..frames {
            for channel in channels {
                samples.push(channel.samples[frame]);
            }
        }
        Ok(Self {
            samples,
            channels: channels.len() as u16,
            sample_rate: first.sample_rate,
        })
    }

    fn check_channels(&self, other: &AudioBuffer) -> Result<()> {
        if self.channels != other.channels {
            return Err(Error::ChannelMismatch {
                expected: self.channels,
                actual: other.channels,
            });
        }
        Ok(())
    }
}

/// Zero-crossing test between two consecutive single-channel samples.
///
/// The sign-transition table is exact and deliberate:
///
/// | prev | next | crossing |
/// |------|------|----------|
/// | +    | −    | true     |
/// | −    | +    | true     |
/// | 0    | ≠0   | false    |
/// | ≠0   | 0    | true     |
/// | 0    | 0    | false    |
///
/// Same-sign transitions are never crossings.
#[inline]
pub fn is_zero_crossing(prev: i16, next: i16) -> bool {
    match (prev.signum(), next.signum()) {
        (1, -1) | (-1, 1) => true,
        (0, _) => false,
        (_, 0) => true,
        _ => false,
    }
}
