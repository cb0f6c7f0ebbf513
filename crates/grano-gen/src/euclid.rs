//! Euclidean rhythm patterns.
//!
//! The generator is the iterative bucket-filling variant, not the
//! Bresenham-exact one: pulses and rests start as two runs, and rests are
//! inserted one at a time after successive pulses, scanning forward with
//! a cursor that wraps to the start whenever no pulse remains ahead of
//! it. The forward-scan-with-reset is what gives the patterns their
//! characteristic asymmetry, so it is preserved exactly.

use grano_core::{Error, Result};

/// Generate a binary pattern of `length` steps containing exactly
/// `pulses` ones.
///
/// Fails with [`Error::InvalidArgument`] when `pulses > length`. A
/// pattern with no pulses is all rests — returned directly, since the
/// insertion scan has no pulse to hang the first rest on.
///
/// # Example
///
/// ```rust
/// use grano_gen::euclid;
///
/// let pattern = euclid::pattern(8, 3).unwrap();
/// assert_eq!(pattern.iter().filter(|&&step| step == 1).count(), 3);
/// assert_eq!(pattern.len(), 8);
/// ```
pub fn pattern(length: usize, pulses: usize) -> Result<Vec<u8>> {
    if pulses > length {
        return Err(Error::invalid_argument(format!(
            "euclid: {pulses} pulses do not fit in {length} steps"
        )));
    }
    if pulses == 0 {
        return Ok(vec![0; length]);
    }

    let mut steps: Vec<u8> = vec![1; pulses];
    let mut rests = length - pulses;
    let mut cursor = 0;

    while rests > 0 {
        match steps[cursor..].iter().position(|&step| step == 1) {
            Some(offset) => {
                let index = cursor + offset;
                steps.insert(index + 1, 0);
                rests -= 1;
                cursor = index + 1;
            }
            None => cursor = 0,
        }
    }

    Ok(steps)
}
