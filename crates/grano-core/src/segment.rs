//! Splitting buffers into chunks: fixed-size, zero-crossing-aligned, or
//! randomized-size. Chunks are plain [`AudioBuffer`]s; reassembly is
//! [`AudioBuffer::concat_all`].

use crate::buffer::{AudioBuffer, is_zero_crossing};
use crate::error::{Error, Result};
use crate::rng::PrngState;

/// Partition into consecutive chunks of exactly `frame_size` frames.
///
/// A final partial remainder is dropped, not padded — callers that need
/// exact coverage should [`AudioBuffer::fill`] first.
pub fn split_fixed(buf: &AudioBuffer, frame_size: usize) -> Result<Vec<AudioBuffer>> {
    if frame_size == 0 {
        return Err(Error::invalid_argument(
            "split_fixed: frame_size must be nonzero",
        ));
    }
    let count = buf.num_frames() / frame_size;
    Ok((0..count)
        .map(|i| buf.cut(i * frame_size, frame_size))
        .collect())
}

/// Split a mono buffer at its zero crossings.
///
/// Walks frame by frame, closing the running chunk immediately after the
/// frame whose transition into the next frame is a zero crossing
/// ([`is_zero_crossing`]), and at end of buffer. Concatenating the chunks
/// reproduces the input exactly.
///
/// Mono only: a stereo buffer has no single crossing position. Callers
/// demultiplex with [`AudioBuffer::split_channels`] and segment each
/// channel independently.
pub fn split_at_zero_crossings(buf: &AudioBuffer) -> Result<Vec<AudioBuffer>> {
    if buf.channels() != 1 {
        return Err(Error::invalid_argument(
            "split_at_zero_crossings: mono input required; split_channels first",
        ));
    }
    let samples = buf.samples();
    let mut chunks = Vec::new();
    let mut chunk_start = 0;
    for i in 0..samples.len() {
        let at_end = i + 1 == samples.len();
        if at_end || is_zero_crossing(samples[i], samples[i + 1]) {
            chunks.push(buf.cut(chunk_start, i + 1 - chunk_start));
            chunk_start = i + 1;
        }
    }
    tracing::trace!(chunks = chunks.len(), "split_at_zero_crossings");
    Ok(chunks)
}

/// Split into randomly sized chunks of `min_frames..=max_frames` frames.
///
/// Each iteration draws a chunk size from the PRNG — the draw happens
/// even on iterations where the chunk is then withheld, so seeded draw
/// counts stay stable. A chunk is only emitted while enough buffer
/// remains to emit at least one more chunk after it (a lookahead guard
/// against ending on a truncated tail); the tail itself is discarded.
/// The loop runs at most `total / min_frames` times — an upper bound,
/// since the guard can stop emission early.
pub fn split_variable(
    buf: &AudioBuffer,
    min_frames: usize,
    max_frames: usize,
    prng: &mut PrngState,
) -> Result<Vec<AudioBuffer>> {
    if min_frames == 0 {
        return Err(Error::invalid_argument(
            "split_variable: min_frames must be nonzero",
        ));
    }
    if min_frames > max_frames {
        return Err(Error::invalid_argument(
            "split_variable: min_frames must not exceed max_frames",
        ));
    }

    let total = buf.num_frames();
    let mut chunks = Vec::new();
    let mut pos = 0;
    for _ in 0..total / min_frames {
        let size = prng.randint(min_frames as i64, max_frames as i64) as usize;
        if pos + size < total.saturating_sub(size) {
            chunks.push(buf.cut(pos, size));
            pos += size;
        }
    }
    tracing::debug!(
        chunks = chunks.len(),
        consumed = pos,
        total,
        "split_variable"
    );
    Ok(chunks)
}
