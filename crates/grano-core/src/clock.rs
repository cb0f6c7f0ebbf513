//! Wall-clock pacing for external real-time schedulers.
//!
//! Nothing else in the core blocks or sleeps; this helper exists so a
//! scheduler driving renders in real time can hold a frame-accurate
//! deadline without rolling its own timing loop.

use std::time::{Duration, Instant};

use crate::config::AudioConfig;

/// Block until `frames` worth of wall-clock time has passed.
///
/// Sleeps the bulk of the duration in one go, then re-sleeps the
/// remainder in shrinking increments until the deadline is reached, so
/// oversleep from the first coarse sleep cannot accumulate across calls.
pub fn wait_frames(frames: usize, config: &AudioConfig) {
    let duration = Duration::from_secs_f64(config.frames_to_seconds(frames));
    let target = Instant::now() + duration;

    std::thread::sleep(duration);

    loop {
        let now = Instant::now();
        if now >= target {
            break;
        }
        std::thread::sleep(target - now);
    }
}
