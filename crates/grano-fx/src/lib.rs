//! Grano FX - applicators composed from the core and the generators
//!
//! Higher-level effects that combine wavetables, segmentation, and buffer
//! algebra with the external native-synthesis and resampling
//! collaborators:
//!
//! - [`pan`] - constant-power-free linear stereo panning
//!   ([`pan::pan_positions`] / [`pan::pan`])
//! - [`panenv::PanSweep`] - grain-resolution pan and amplitude sweeps
//! - [`drift`] - pitch transposition and slow sinusoidal pitch drift via
//!   a [`Resampler`]
//! - [`envelope::apply_breakpoints`] - breakpoint curves as per-frame
//!   gain
//! - [`noise`] - white noise, band-limited noise, and the frame-scatter
//!   corruptor
//! - [`alias`] - grain-decimation distortion
//!
//! The collaborator seams ([`NativeSynth`], [`Resampler`]) are the only
//! way this crate touches raw synthesis or rate conversion — any engine
//! that fills the trait signatures plugs in, and tests run against small
//! deterministic stand-ins.

pub mod alias;
pub mod collab;
pub mod drift;
pub mod envelope;
pub mod noise;
pub mod pan;
pub mod panenv;

// Re-export main types at crate root
pub use collab::{NativeSynth, Resampler};
pub use panenv::PanSweep;
