//! Structural transforms over ordered sequences, driven by the PRNG.
//!
//! These operate on plain slices — note lists, chunk orderings, parameter
//! sequences — and reproduce exactly under a seeded [`PrngState`].

use grano_core::PrngState;

/// Combine two sequences by alternating their elements up to the longer
/// length.
///
/// When the lengths are equal a coin flip decides which operand counts as
/// "longer"; the flip consumes one PRNG draw either way, so seeded draw
/// counts do not depend on the outcome.
pub fn interleave<T: Clone>(a: &[T], b: &[T], prng: &mut PrngState) -> Vec<T> {
    let longer = if a.len() > b.len() {
        a.len()
    } else if b.len() > a.len() {
        b.len()
    } else if prng.randint(0, 1) == 0 {
        a.len()
    } else {
        b.len()
    };

    let mut combined = Vec::with_capacity(a.len() + b.len());
    for i in 0..longer {
        if i < a.len() {
            combined.push(a[i].clone());
        }
        if i < b.len() {
            combined.push(b[i].clone());
        }
    }
    combined
}

/// Cyclically rotate a sequence left by `offset` positions.
///
/// Offsets at or past the length clamp to `len - 1` rather than wrapping.
/// An empty input rotates to an empty output.
pub fn rotate<T: Clone>(items: &[T], offset: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let offset = offset.min(items.len() - 1);
    let mut rotated = Vec::with_capacity(items.len());
    rotated.extend_from_slice(&items[offset..]);
    rotated.extend_from_slice(&items[..offset]);
    rotated
}

/// Rotate by a PRNG-drawn offset in `[0, len - 1]`.
pub fn rotate_random<T: Clone>(items: &[T], prng: &mut PrngState) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let offset = prng.randint(0, items.len() as i64 - 1) as usize;
    rotate(items, offset)
}

/// Partition into fixed windows of `packet_size`, dropping a trailing
/// partial window — the list analogue of fixed-size buffer splitting.
pub fn split_packets<T: Clone>(items: &[T], packet_size: usize) -> Vec<Vec<T>> {
    if packet_size == 0 {
        return Vec::new();
    }
    items
        .chunks_exact(packet_size)
        .map(<[T]>::to_vec)
        .collect()
}

/// Shuffle within fixed windows: partition into `packet_size` windows,
/// permute each independently, flatten in window order.
///
/// Only operates when `3 <= packet_size <= len`; outside that range the
/// input comes back unchanged — local shuffling of one- or two-element
/// windows would be a no-op or a coin flip, neither worth a draw.
pub fn shuffle_packets<T: Clone + PartialEq>(
    items: &[T],
    packet_size: usize,
    prng: &mut PrngState,
) -> Vec<T> {
    if packet_size < 3 || packet_size > items.len() {
        return items.to_vec();
    }
    split_packets(items, packet_size)
        .iter()
        .flat_map(|window| prng.shuffle(window))
        .collect()
}
