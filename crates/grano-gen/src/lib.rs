//! Grano Gen - generators for algorithmic composition
//!
//! Finite sequences for driving synthesis and control: wavetables,
//! multi-segment breakpoint curves, Euclidean rhythm patterns, and
//! PRNG-driven list transforms. Everything that consumes randomness takes
//! an explicit [`grano_core::PrngState`], so seeded renders reproduce bit
//! for bit.
//!
//! # Components
//!
//! - [`wavetable`] - one cycle (or envelope shape) of a named waveform
//!   family as a `Vec<f64>`; [`Shape`] is a closed enum.
//! - [`breakpoint`] - stitch wavetable segments into one control curve
//!   from a list of [`Anchor`]s.
//! - [`euclid`] - binary rhythm patterns by iterative bucket-filling.
//! - [`lists`] - interleave, rotate, and packet-shuffle ordered
//!   sequences.
//!
//! # Example
//!
//! ```rust
//! use grano_core::PrngState;
//! use grano_gen::{Anchor, Shape, breakpoint, euclid, wavetable};
//!
//! let mut prng = PrngState::new();
//! prng.seed(Some(b"etude 3"));
//!
//! // A 512-point swell: silence up to full level through a sine arc,
//! // then a slow linear decay.
//! let curve = breakpoint::render(
//!     &[
//!         Anchor::Value(0.0),
//!         Anchor::shaped(Shape::Sine, 1.0),
//!         Anchor::shaped(Shape::Line, 0.1),
//!     ],
//!     512,
//!     &mut prng,
//! );
//! assert_eq!(curve.len(), 512);
//!
//! // A rhythm to place grains on.
//! let hits = euclid::pattern(16, 5).unwrap();
//! assert_eq!(hits.len(), 16);
//!
//! // A reproducible random envelope.
//! let table = wavetable::generate(Shape::Vary, 256, 1.0, 0.0, &mut prng);
//! assert_eq!(table.len(), 256);
//! ```

pub mod breakpoint;
pub mod euclid;
pub mod lists;
pub mod wavetable;

// Re-export main types at crate root
pub use breakpoint::{Anchor, render};
pub use wavetable::{Shape, WavetableSpec, generate};
