//! Grano Core - primitives for algorithmic sound composition
//!
//! This crate provides the foundation of the grano toolkit: explicit
//! configuration, unit conversion, a reproducible seeded PRNG, and
//! byte-exact algebra over packed 16-bit PCM buffers.
//!
//! # Core Abstractions
//!
//! ## Configuration
//!
//! - [`AudioConfig`] - sample rate / channels / grain size, serde+TOML
//!   backed. There is no hidden global state anywhere in the workspace:
//!   every rate-dependent call takes a config, every random-consuming
//!   call takes a [`PrngState`], so independent render pipelines can run
//!   side by side.
//!
//! ## Deterministic randomness
//!
//! - [`PrngState`] - a one-way SHA-1 seed chain (bit-for-bit reproducible
//!   once seeded) plus an independent logistic-map stream. Drawing is the
//!   only way to consume entropy, so N draws from the same seed always
//!   produce the same N values.
//!
//! ## Buffers
//!
//! - [`AudioBuffer`] - interleaved i16 frames with pure, value-returning
//!   operations: [`cut`](AudioBuffer::cut), [`pad`](AudioBuffer::pad),
//!   [`insert_at`](AudioBuffer::insert_at),
//!   [`replace_at`](AudioBuffer::replace_at),
//!   [`fill`](AudioBuffer::fill), channel (de)interleaving, and the
//!   packed-byte ABI ([`to_bytes`](AudioBuffer::to_bytes)). Out-of-range
//!   cuts clamp instead of failing.
//!
//! ## Segmentation
//!
//! - [`segment::split_fixed`] / [`segment::split_at_zero_crossings`] /
//!   [`segment::split_variable`] - partition buffers into chunks for
//!   granular processing.
//!
//! # Example
//!
//! ```rust
//! use grano_core::{AudioBuffer, AudioConfig, PrngState, segment};
//!
//! let config = AudioConfig::default();
//! let mut prng = PrngState::new();
//! prng.seed(Some(b"session 12"));
//!
//! let frames = config.ms_to_frames(100.0);
//! let buf = AudioBuffer::silence(frames, config.channels, config.sample_rate).unwrap();
//!
//! // Randomized segmentation is reproducible under the seed.
//! let chunks = segment::split_variable(&buf, 100, 400, &mut prng).unwrap();
//! let joined = AudioBuffer::concat_all(&chunks).unwrap();
//! assert!(joined.num_frames() <= buf.num_frames());
//! ```

pub mod buffer;
pub mod clock;
pub mod config;
pub mod error;
pub mod math;
pub mod rng;
pub mod segment;
pub mod units;

// Re-export main types at crate root
pub use buffer::{AudioBuffer, is_zero_crossing};
pub use config::{AudioConfig, ConfigError};
pub use error::{Error, Result};
pub use rng::PrngState;
pub use units::{bpm_to_frames, bpm_to_ms};
