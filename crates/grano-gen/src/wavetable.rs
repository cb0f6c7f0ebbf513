//! Wavetable generation: one rendered cycle (or envelope shape) of a
//! named waveform family as a finite `f64` sequence.
//!
//! Most shapes are pure functions of `(shape, size, high, low)`.
//! [`Shape::Impulse`], [`Shape::Vary`], and [`Shape::Random`] consume PRNG
//! draws; under a seeded [`PrngState`] they are reproducible draw for
//! draw. [`Shape::Vary`] is the one recursive shape — it builds a random
//! anchor list and hands it to the breakpoint interpolator, which renders
//! each segment back through this generator.

use std::f64::consts::{PI, TAU};

use grano_core::PrngState;

use crate::breakpoint::{self, Anchor};

/// Waveform families.
///
/// A closed enumeration rather than name strings: an unknown shape is a
/// compile error, and every `match` below is exhaustive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
    /// Half-period sine arc, `sin(tπ)`.
    #[default]
    Sine,
    /// Full-period sine, `sin(t·2π)`.
    Sine2pi,
    /// Half-period cosine.
    Cos,
    /// Full-period cosine.
    Cos2pi,
    /// Raised-cosine window.
    Hann,
    /// Bell built from a normal-CDF rational approximation.
    Gauss,
    /// Symmetric triangle.
    Tri,
    /// Inverted triangle.
    Itri,
    /// Linear ramp low→high.
    Line,
    /// Alias for the same ramp in oscillator terms.
    Saw,
    /// Reverse of [`Shape::Line`].
    Phasor,
    /// Short random ±1 burst, zero-padded.
    Impulse,
    /// Random multi-segment curve via the breakpoint interpolator.
    Vary,
    /// Constant at the high value.
    Flat,
    /// A shape picked at call time from the non-recursive families.
    Random,
}

/// Selection pool for [`Shape::Vary`] sub-tables, in the original list
/// order. `Vary` itself is a member; the depth guard in [`generate`]
/// keeps the recursion bounded.
const VARY_POOL: [Shape; 11] = [
    Shape::Sine,
    Shape::Gauss,
    Shape::Cos,
    Shape::Line,
    Shape::Saw,
    Shape::Impulse,
    Shape::Phasor,
    Shape::Sine2pi,
    Shape::Cos2pi,
    Shape::Vary,
    Shape::Flat,
];

/// Selection pool for [`Shape::Random`]: the non-recursive families only,
/// so a "random" table can never spiral into endless `Vary` nesting.
const RANDOM_POOL: [Shape; 9] = [
    Shape::Sine,
    Shape::Gauss,
    Shape::Cos,
    Shape::Line,
    Shape::Saw,
    Shape::Impulse,
    Shape::Phasor,
    Shape::Sine2pi,
    Shape::Cos2pi,
];

/// Nested `Vary` tables beyond this depth render as [`Shape::Line`].
const MAX_VARY_DEPTH: usize = 8;

/// A wavetable request: shape, length, and value bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavetableSpec {
    /// Waveform family.
    pub shape: Shape,
    /// Number of points to render.
    pub size: usize,
    /// Upper value bound.
    pub high: f64,
    /// Lower value bound.
    pub low: f64,
}

impl WavetableSpec {
    /// A spec with the conventional `[0.0, 1.0]` bounds.
    pub fn new(shape: Shape, size: usize) -> Self {
        Self {
            shape,
            size,
            high: 1.0,
            low: 0.0,
        }
    }

    /// Set the value bounds.
    pub fn with_bounds(mut self, high: f64, low: f64) -> Self {
        self.high = high;
        self.low = low;
        self
    }

    /// Render the table.
    pub fn render(&self, prng: &mut PrngState) -> Vec<f64> {
        generate(self.shape, self.size, self.high, self.low, prng)
    }
}

/// Render `size` points of `shape` scaled between `low` and `high`.
///
/// Edge policy: `size == 0` renders nothing; `0 < size < 4` renders
/// `size` copies of `low` — a degenerate flat approximation, not an
/// error. Both fall out before any shape math runs, so shapes whose
/// formulas divide by `size - 1` never see a pathological length.
///
/// # Example
///
/// ```rust
/// use grano_core::PrngState;
/// use grano_gen::{Shape, wavetable::generate};
///
/// let mut prng = PrngState::new();
/// let ramp = generate(Shape::Line, 5, 1.0, 0.0, &mut prng);
/// assert_eq!(ramp, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn generate(shape: Shape, size: usize, high: f64, low: f64, prng: &mut PrngState) -> Vec<f64> {
    generate_at_depth(shape, size, high, low, prng, 0)
}

pub(crate) fn generate_at_depth(
    shape: Shape,
    size: usize,
    high: f64,
    low: f64,
    prng: &mut PrngState,
    depth: usize,
) -> Vec<f64> {
    if size == 0 {
        return Vec::new();
    }
    if size < 4 {
        return vec![low; size];
    }

    match shape {
        Shape::Sine => frange(size, 1.0, 0.0)
            .into_iter()
            .map(|t| (t * PI).sin() * (high - low) + low)
            .collect(),

        Shape::Sine2pi => frange(size, 1.0, 0.0)
            .into_iter()
            .map(|t| (t * TAU).sin() * (high - low) + low)
            .collect(),

        Shape::Cos => frange(size, 1.0, 0.0)
            .into_iter()
            .map(|t| (t * PI).cos() * (high - low) + low)
            .collect(),

        Shape::Cos2pi => frange(size, 1.0, 0.0)
            .into_iter()
            .map(|t| (t * TAU).cos() * (high - low) + low)
            .collect(),

        Shape::Hann => (0..size)
            .map(|i| 0.5 * (1.0 - (TAU * i as f64 / (size - 1) as f64).cos()))
            .collect(),

        Shape::Gauss => frange(size, 2.0, -2.0)
            .into_iter()
            .map(|t| normal_bell(t) * (high - low) + low)
            .collect(),

        // The triangle peaks just below 1 and ignores the bounds, as the
        // shape has always been defined; it is only a true triangle wave
        // when the caller recenters it on zero.
        Shape::Tri => (0..size)
            .map(|i| {
                let n = size as f64;
                (2.0 / (n + 1.0)) * ((n + 1.0) / 2.0 - (i as f64 - (n - 1.0) / 2.0).abs())
            })
            .collect(),

        Shape::Itri => frange(size, high, low - high)
            .into_iter()
            .map(f64::abs)
            .collect(),

        Shape::Line | Shape::Saw => frange(size, high, low),

        Shape::Phasor => {
            let mut table = frange(size, high, low);
            table.reverse();
            table
        }

        Shape::Impulse => {
            let divisor = prng.randint(2, 12) as usize;
            let burst = size / divisor.max(1);
            let mut table: Vec<f64> = (0..burst).map(|_| prng.randint(-1, 1) as f64).collect();
            table.resize(size, 0.0);
            table
        }

        Shape::Flat => vec![high; size],

        Shape::Random => {
            let pick = random_shape(prng);
            generate_at_depth(pick, size, high, low, prng, depth)
        }

        Shape::Vary => vary(size, high, low, prng, depth),
    }
}

/// Random multi-segment curve: draw a sub-table of `(shape, value)`
/// anchors and interpolate it out to `size` points.
fn vary(size: usize, high: f64, low: f64, prng: &mut PrngState, depth: usize) -> Vec<f64> {
    if depth >= MAX_VARY_DEPTH {
        return generate_at_depth(Shape::Line, size, high, low, prng, depth);
    }

    let bsize = if size < 32 {
        size
    } else {
        size / prng.randint(2, 16).max(1) as usize
    };

    // Draws happen for every slot — index 0 included, even though its
    // anchor is then forced to the bare low bound. Seeded streams depend
    // on that draw count.
    let mut anchors: Vec<Anchor> = (0..bsize)
        .map(|_| {
            let shape = VARY_POOL[prng.randint(0, VARY_POOL.len() as i64 - 1) as usize];
            let value = prng.draw(low, high);
            Anchor::shaped(shape, value)
        })
        .collect();

    if anchors.is_empty() {
        anchors.push(Anchor::Value(low));
    } else {
        anchors[0] = Anchor::Value(low);
    }

    breakpoint::render_at_depth(&anchors, size, prng, depth + 1)
}

/// Uniform PRNG pick from the non-recursive shape families — the same
/// pool [`Shape::Random`] dispatches through.
pub fn random_shape(prng: &mut PrngState) -> Shape {
    RANDOM_POOL[prng.randint(0, RANDOM_POOL.len() as i64 - 1) as usize]
}

/// `steps` points linearly spaced from `low` to `high`, endpoints
/// inclusive. One step collapses to the low bound.
pub(crate) fn frange(steps: usize, high: f64, low: f64) -> Vec<f64> {
    if steps == 1 {
        return vec![low];
    }
    (0..steps)
        .map(|i| (i as f64 / (steps - 1) as f64) * (high - low) + low)
        .collect()
}

/// Normal-CDF rational approximation (Abramowitz & Stegun 7.1.26) folded
/// into a bell over `[-2, 2]`.
fn normal_bell(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs() / 2.0_f64.sqrt();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    ((sign * y).abs() - 1.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(label: &[u8]) -> PrngState {
        let mut prng = PrngState::new();
        prng.seed(Some(label));
        prng
    }

    #[test]
    fn zero_size_is_empty() {
        let mut prng = PrngState::new();
        assert!(generate(Shape::Sine, 0, 1.0, 0.0, &mut prng).is_empty());
    }

    #[test]
    fn tiny_sizes_flatten_to_low() {
        let mut prng = PrngState::new();
        for size in 1..4 {
            let table = generate(Shape::Sine, size, 1.0, 0.25, &mut prng);
            assert_eq!(table, vec![0.25; size]);
        }
    }

    #[test]
    fn line_endpoints_and_monotonicity() {
        let mut prng = PrngState::new();
        let table = generate(Shape::Line, 64, 3.0, -1.0, &mut prng);
        assert_eq!(table.len(), 64);
        assert!((table[0] - (-1.0)).abs() < 1e-12);
        assert!((table[63] - 3.0).abs() < 1e-12);
        for pair in table.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn saw_is_line() {
        let mut prng = PrngState::new();
        assert_eq!(
            generate(Shape::Saw, 16, 1.0, 0.0, &mut prng),
            generate(Shape::Line, 16, 1.0, 0.0, &mut prng)
        );
    }

    #[test]
    fn phasor_is_reversed_line() {
        let mut prng = PrngState::new();
        let mut line = generate(Shape::Line, 16, 1.0, 0.0, &mut prng);
        line.reverse();
        assert_eq!(generate(Shape::Phasor, 16, 1.0, 0.0, &mut prng), line);
    }

    #[test]
    fn sine_stays_in_bounds() {
        let mut prng = PrngState::new();
        for value in generate(Shape::Sine, 128, 1.0, 0.0, &mut prng) {
            assert!((-1e-9..=1.0 + 1e-9).contains(&value));
        }
    }

    #[test]
    fn sine2pi_swings_both_ways() {
        let mut prng = PrngState::new();
        let table = generate(Shape::Sine2pi, 128, 1.0, 0.0, &mut prng);
        // Scaled by (high-low)+low with low=0: range [-1, 1]
        assert!(table.iter().copied().fold(f64::MAX, f64::min) < -0.9);
        assert!(table.iter().copied().fold(f64::MIN, f64::max) > 0.9);
    }

    #[test]
    fn hann_window_shape() {
        let mut prng = PrngState::new();
        let table = generate(Shape::Hann, 65, 1.0, 0.0, &mut prng);
        assert!(table[0].abs() < 1e-12);
        assert!(table[64].abs() < 1e-9);
        assert!((table[32] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gauss_is_a_bell() {
        let mut prng = PrngState::new();
        let table = generate(Shape::Gauss, 129, 1.0, 0.0, &mut prng);
        let mid = table[64];
        assert!(mid > table[0]);
        assert!(mid > table[128]);
        assert!(table[0] < 0.1);
    }

    #[test]
    fn tri_peaks_in_the_middle() {
        let mut prng = PrngState::new();
        let table = generate(Shape::Tri, 33, 1.0, 0.0, &mut prng);
        assert!(table[16] > table[0]);
        assert!(table[16] > table[32]);
        assert!((table[0] - table[32]).abs() < 1e-12);
    }

    #[test]
    fn flat_is_high_everywhere() {
        let mut prng = PrngState::new();
        assert_eq!(
            generate(Shape::Flat, 8, 0.7, 0.0, &mut prng),
            vec![0.7; 8]
        );
    }

    #[test]
    fn impulse_is_burst_then_silence() {
        let mut prng = seeded(b"impulse");
        let table = generate(Shape::Impulse, 120, 1.0, 0.0, &mut prng);
        assert_eq!(table.len(), 120);
        // The burst is at most size/2 points; everything after is zero.
        for &value in &table[60..] {
            assert_eq!(value, 0.0);
        }
        for &value in &table {
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn every_shape_renders_exact_length() {
        let shapes = [
            Shape::Sine,
            Shape::Sine2pi,
            Shape::Cos,
            Shape::Cos2pi,
            Shape::Hann,
            Shape::Gauss,
            Shape::Tri,
            Shape::Itri,
            Shape::Line,
            Shape::Saw,
            Shape::Phasor,
            Shape::Impulse,
            Shape::Vary,
            Shape::Flat,
            Shape::Random,
        ];
        let mut prng = seeded(b"lengths");
        for shape in shapes {
            for size in [4, 5, 31, 32, 100, 513] {
                let table = generate(shape, size, 1.0, 0.0, &mut prng);
                assert_eq!(table.len(), size, "shape {shape:?} size {size}");
            }
        }
    }

    #[test]
    fn vary_is_reproducible_under_seed() {
        let mut a = seeded(b"vary");
        let mut b = seeded(b"vary");
        assert_eq!(
            generate(Shape::Vary, 256, 1.0, 0.0, &mut a),
            generate(Shape::Vary, 256, 1.0, 0.0, &mut b)
        );
    }

    #[test]
    fn random_is_reproducible_under_seed() {
        let mut a = seeded(b"random");
        let mut b = seeded(b"random");
        assert_eq!(
            generate(Shape::Random, 64, 1.0, 0.0, &mut a),
            generate(Shape::Random, 64, 1.0, 0.0, &mut b)
        );
    }

    #[test]
    fn spec_builder_renders() {
        let mut prng = PrngState::new();
        let table = WavetableSpec::new(Shape::Line, 10)
            .with_bounds(2.0, 1.0)
            .render(&mut prng);
        assert_eq!(table.len(), 10);
        assert!((table[0] - 1.0).abs() < 1e-12);
        assert!((table[9] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn frange_single_step_is_low() {
        assert_eq!(frange(1, 10.0, 3.0), vec![3.0]);
    }
}
