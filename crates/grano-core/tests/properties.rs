//! Property-based tests for grano-core buffer algebra and the PRNG.
//!
//! Clamp behavior, length invariants, and seeded reproducibility across
//! randomized inputs, using proptest for input generation.

use proptest::prelude::*;

use grano_core::{AudioBuffer, PrngState, is_zero_crossing, segment};

fn mono_buffer(samples: Vec<i16>) -> AudioBuffer {
    AudioBuffer::from_samples(samples, 1, 44100).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Cut never exceeds the available data and never errors: the result
    /// length is exactly the overlap of the request with the buffer.
    #[test]
    fn cut_length_is_the_clamped_overlap(
        samples in prop::collection::vec(any::<i16>(), 0..256),
        start in 0usize..512,
        len in 0usize..512,
    ) {
        let buf = mono_buffer(samples);
        let total = buf.num_frames();
        let expected = total.saturating_sub(start).min(len);
        prop_assert_eq!(buf.cut(start, len).num_frames(), expected);
    }

    /// Fill always produces exactly the target length (tiling or
    /// padding), except for the documented empty-input fallback.
    #[test]
    fn fill_hits_the_target_exactly(
        samples in prop::collection::vec(any::<i16>(), 1..128),
        target in 0usize..512,
        silence_pad in any::<bool>(),
    ) {
        let buf = mono_buffer(samples);
        prop_assert_eq!(buf.fill(target, silence_pad).num_frames(), target);
    }

    /// Tiling repeats the source verbatim: every output frame equals the
    /// source frame at its index modulo the source length.
    #[test]
    fn fill_tiles_verbatim(
        samples in prop::collection::vec(any::<i16>(), 1..64),
        target in 1usize..256,
    ) {
        let buf = mono_buffer(samples.clone());
        let filled = buf.fill(target, false);
        for (i, &sample) in filled.samples().iter().enumerate() {
            prop_assert_eq!(sample, samples[i % samples.len()]);
        }
    }

    /// Splitting fixed and concatenating reproduces the input truncated
    /// to a whole number of chunks.
    #[test]
    fn split_fixed_round_trips(
        samples in prop::collection::vec(any::<i16>(), 0..256),
        frame_size in 1usize..32,
    ) {
        let buf = mono_buffer(samples);
        let chunks = segment::split_fixed(&buf, frame_size).unwrap();
        let whole = (buf.num_frames() / frame_size) * frame_size;
        if chunks.is_empty() {
            prop_assert_eq!(whole, 0);
        } else {
            let joined = AudioBuffer::concat_all(&chunks).unwrap();
            let expected = buf.cut(0, whole);
            prop_assert_eq!(joined.samples(), expected.samples());
        }
    }

    /// Zero-crossing segmentation loses nothing: the chunks concatenate
    /// back to the input exactly.
    #[test]
    fn zero_crossing_split_is_lossless(
        samples in prop::collection::vec(-100i16..=100, 1..256),
    ) {
        let buf = mono_buffer(samples);
        let chunks = segment::split_at_zero_crossings(&buf).unwrap();
        let joined = AudioBuffer::concat_all(&chunks).unwrap();
        prop_assert_eq!(joined.samples(), buf.samples());
    }

    /// Insert grows by exactly the needle length and preserves both
    /// operands around the splice point.
    #[test]
    fn insert_preserves_both_sides(
        hay in prop::collection::vec(any::<i16>(), 0..64),
        needle in prop::collection::vec(any::<i16>(), 0..64),
        at in 0usize..128,
    ) {
        let hay_buf = mono_buffer(hay.clone());
        let needle_buf = mono_buffer(needle.clone());
        let spliced = hay_buf.insert_at(&needle_buf, at).unwrap();
        prop_assert_eq!(spliced.num_frames(), hay.len() + needle.len());

        let split = at.min(hay.len());
        prop_assert_eq!(&spliced.samples()[..split], &hay[..split]);
        prop_assert_eq!(&spliced.samples()[split..split + needle.len()], &needle[..]);
        prop_assert_eq!(&spliced.samples()[split + needle.len()..], &hay[split..]);
    }

    /// Replace never changes the buffer length.
    #[test]
    fn replace_preserves_length(
        hay in prop::collection::vec(any::<i16>(), 0..64),
        needle in prop::collection::vec(any::<i16>(), 0..64),
        end in 0usize..128,
    ) {
        let hay_buf = mono_buffer(hay.clone());
        let needle_buf = mono_buffer(needle);
        let replaced = hay_buf.replace_at(&needle_buf, end).unwrap();
        prop_assert_eq!(replaced.num_frames(), hay.len());
    }

    /// The crossing test is symmetric for strict sign changes and never
    /// fires within a sign.
    #[test]
    fn zero_crossing_sign_rules(a in any::<i16>(), b in any::<i16>()) {
        let crossing = is_zero_crossing(a, b);
        if a > 0 && b > 0 || a < 0 && b < 0 {
            prop_assert!(!crossing);
        }
        if a != 0 && b != 0 && (a > 0) != (b > 0) {
            prop_assert!(crossing);
        }
        if a == 0 {
            prop_assert!(!crossing);
        }
        if a != 0 && b == 0 {
            prop_assert!(crossing);
        }
    }

    /// Seeded integer draws are reproducible and honor their bounds.
    #[test]
    fn seeded_randint_reproduces(seed in any::<u64>(), low in -50i64..50, span in 0i64..100) {
        let high = low + span;
        let mut a = PrngState::new();
        let mut b = PrngState::new();
        a.seed(Some(&seed.to_le_bytes()));
        b.seed(Some(&seed.to_le_bytes()));
        for _ in 0..32 {
            let x = a.randint(low, high);
            prop_assert_eq!(x, b.randint(low, high));
            prop_assert!(x >= low.min(0) && x <= high);
        }
    }

    /// The biased shuffle is a permutation: same elements, same counts.
    #[test]
    fn shuffle_is_a_permutation(
        items in prop::collection::vec(0u8..16, 0..24),
        seed in any::<u64>(),
    ) {
        let mut prng = PrngState::new();
        prng.seed(Some(&seed.to_le_bytes()));
        let mut shuffled = prng.shuffle(&items);
        shuffled.sort_unstable();
        let mut sorted = items.clone();
        sorted.sort_unstable();
        prop_assert_eq!(shuffled, sorted);
    }
}
