//! Deterministic pseudo-random streams for reproducible generative work.
//!
//! Two independent scalar generators live in one explicit, passable
//! [`PrngState`] — never in process globals, so parallel render pipelines
//! can each own their own stream:
//!
//! - The **seed chain**: a one-way SHA-1 hash chain. Once seeded, every
//!   [`PrngState::draw`] advances the chain exactly once, so N draws from
//!   the same seed reproduce the same N values regardless of call site.
//!   Unseeded, draws fall through to the system generator.
//! - The **logistic stream** ([`PrngState::chaos_draw`]): the logistic-map
//!   recurrence `x' = r·x·(1-x)` with fixed `r = 3.9`, deterministic from
//!   process start and never touched by [`PrngState::seed`]. A cheap
//!   secondary stream for places that need decorrelated values without
//!   consuming seed-chain entropy.
//!
//! The chain value is kept as the decimal-digit string formed by
//! concatenating the digest's byte values. That string is what gets hashed
//! to advance the chain, and parsing it as `f64` reproduces the original
//! integer→float rounding when the value is mapped into `[0, 1)` via
//! `(x / 100^20) mod 1`.

use rand::Rng;
use sha1::{Digest, Sha1};

use crate::error::{Error, Result};

/// Coefficient of the logistic-map recurrence.
const LOGISTIC_R: f64 = 3.9;

/// Initial state of the logistic stream.
const LOGISTIC_X0: f64 = 0.444;

/// Divisor mapping chain integers into `[0, 1)`: `100^20`.
const CHAIN_SCALE: f64 = 1e40;

/// Explicit PRNG state.
///
/// # Example
///
/// ```rust
/// use grano_core::PrngState;
///
/// let mut a = PrngState::new();
/// let mut b = PrngState::new();
/// a.seed(Some(b"voice 1"));
/// b.seed(Some(b"voice 1"));
///
/// // Same seed, same call count — identical streams.
/// for _ in 0..8 {
///     assert_eq!(a.draw(0.0, 1.0), b.draw(0.0, 1.0));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PrngState {
    /// Current chain value as a decimal digit string; `None` = unseeded.
    seed_digits: Option<String>,
    /// Digest that produced the current chain value.
    seed_hash: [u8; 20],
    /// Number of chain advances since seeding.
    steps: u64,
    /// Logistic stream state.
    pop: f64,
}

impl Default for PrngState {
    fn default() -> Self {
        Self::new()
    }
}

impl PrngState {
    /// Create an unseeded state. Draws use system randomness until
    /// [`seed`](Self::seed) is called; the logistic stream starts at its
    /// fixed initial value either way.
    pub fn new() -> Self {
        Self {
            seed_digits: None,
            seed_hash: [0; 20],
            steps: 0,
            pop: LOGISTIC_X0,
        }
    }

    /// Seed the chain from arbitrary bytes.
    ///
    /// With `None`, seeds from a default waveform cycle (one 440 Hz
    /// sine cycle of packed stereo PCM), so repeated default seeding is
    /// itself reproducible. Seeding never touches the logistic stream.
    pub fn seed(&mut self, material: Option<&[u8]>) {
        let digest = match material {
            Some(bytes) => Sha1::digest(bytes),
            None => Sha1::digest(default_seed_cycle()),
        };
        self.seed_hash.copy_from_slice(digest.as_slice());
        self.seed_digits = Some(digits_of(digest.as_slice()));
        self.steps = 0;
    }

    /// Whether the seed chain is active.
    pub fn is_seeded(&self) -> bool {
        self.seed_digits.is_some()
    }

    /// Number of chain advances since the last [`seed`](Self::seed).
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Digest backing the current chain value.
    pub fn seed_hash(&self) -> &[u8; 20] {
        &self.seed_hash
    }

    /// Draw a float in `[low, high)`.
    ///
    /// Seeded: advances the hash chain exactly once — hashing the ASCII
    /// decimal chain string, concatenating the new digest's byte values
    /// into the next chain string — then maps `(value / 100^20) mod 1`
    /// into the requested range. Advancing the chain is the only way the
    /// seeded stream consumes entropy.
    ///
    /// Unseeded: system randomness, non-reproducible.
    pub fn draw(&mut self, low: f64, high: f64) -> f64 {
        let unit = if let Some(digits) = self.seed_digits.as_ref() {
            let digest = Sha1::digest(digits.as_bytes());
            let next = digits_of(digest.as_slice());
            self.seed_hash.copy_from_slice(digest.as_slice());
            let value = digits_to_f64(&next);
            self.seed_digits = Some(next);
            self.steps += 1;
            (value / CHAIN_SCALE) % 1.0
        } else {
            rand::random::<f64>()
        };
        unit * (high - low) + low
    }

    /// Advance the logistic stream and scale it into `[low, high)`.
    ///
    /// Independent of the seed chain; deterministic from process start.
    pub fn chaos_draw(&mut self, low: f64, high: f64) -> f64 {
        self.pop = LOGISTIC_R * self.pop * (1.0 - self.pop);
        self.pop * (high - low) + low
    }

    /// Draw an integer.
    ///
    /// Seeded: `trunc(draw(0,1) * (high - low) + low)` — the upper bound
    /// is effectively excluded. Unseeded: the system integer generator,
    /// inclusive of both bounds. The asymmetry is preserved deliberately;
    /// existing seeded material depends on the exclusive mapping. `low`
    /// must not exceed `high`.
    pub fn randint(&mut self, low: i64, high: i64) -> i64 {
        debug_assert!(low <= high, "randint bounds out of order");
        if self.is_seeded() {
            (self.draw(0.0, 1.0) * (high - low) as f64 + low as f64) as i64
        } else {
            rand::thread_rng().gen_range(low..=high)
        }
    }

    /// Pick one element.
    ///
    /// Fails with [`Error::EmptyInput`] on an empty slice — there is no
    /// sane fallback element to return.
    pub fn choose<T: Clone>(&mut self, items: &[T]) -> Result<T> {
        if items.is_empty() {
            return Err(Error::EmptyInput { what: "choose" });
        }
        let index = self.randint(0, items.len() as i64 - 1) as usize;
        Ok(items[index].clone())
    }

    /// Permute by repeatedly choosing and removing the first equal
    /// element.
    ///
    /// This is NOT a uniform shuffle: its distribution is defined by the
    /// sequence of [`randint`](Self::randint) draws over the shrinking
    /// pool, and for short sequences it is measurably biased. It is kept
    /// verbatim because seeded compositions depend on the exact
    /// permutation it yields.
    pub fn shuffle<T: Clone + PartialEq>(&mut self, items: &[T]) -> Vec<T> {
        let mut pool = items.to_vec();
        let mut shuffled = Vec::with_capacity(pool.len());
        while !pool.is_empty() {
            let index = self.randint(0, pool.len() as i64 - 1) as usize;
            let item = pool[index].clone();
            if let Some(first) = pool.iter().position(|candidate| *candidate == item) {
                pool.remove(first);
            }
            shuffled.push(item);
        }
        shuffled
    }

    /// Weighted pick over ordered `(item, weight)` pairs.
    ///
    /// Expands each item `weight` times into a flat pool and chooses from
    /// it. Ordered pairs rather than a map keep seeded output
    /// deterministic. Fails with [`Error::InvalidArgument`] if the pairs
    /// are empty or any weight is zero.
    pub fn weighted_choose<T: Clone>(&mut self, weighted: &[(T, u32)]) -> Result<T> {
        if weighted.is_empty() {
            return Err(Error::invalid_argument("weighted_choose: no weights given"));
        }
        let mut pool = Vec::new();
        for (item, weight) in weighted {
            if *weight == 0 {
                return Err(Error::invalid_argument(
                    "weighted_choose: weights must be positive",
                ));
            }
            for _ in 0..*weight {
                pool.push(item.clone());
            }
        }
        self.choose(&pool)
    }
}

/// Concatenate a digest's byte values as decimal digits, e.g.
/// `[5, 213, 0, ...]` → `"52130..."`.
fn digits_of(digest: &[u8]) -> String {
    use core::fmt::Write;
    let mut digits = String::with_capacity(digest.len() * 3);
    for byte in digest {
        let _ = write!(digits, "{byte}");
    }
    digits
}

/// Interpret a decimal digit string as `f64` (round-to-nearest, the same
/// rounding a big-integer→float conversion performs).
fn digits_to_f64(digits: &str) -> f64 {
    digits.parse::<f64>().unwrap_or(0.0)
}

/// One 440 Hz sine cycle at 44.1 kHz as packed stereo little-endian i16 —
/// the default seed material.
fn default_seed_cycle() -> Vec<u8> {
    let frames = 44100 / 440; // 100-frame cycle
    let mut bytes = Vec::with_capacity(frames * 4);
    for i in 0..frames {
        let t = i as f64 / frames as f64;
        let sample = ((t * core::f64::consts::TAU).sin() * f64::from(i16::MAX)) as i16;
        bytes.extend_from_slice(&sample.to_le_bytes());
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}
