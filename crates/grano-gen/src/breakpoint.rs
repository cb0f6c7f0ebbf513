//! Breakpoint interpolation: stitch wavetable segments into one control
//! curve from a list of `(shape, target)` anchors.
//!
//! The first anchor supplies the initial value and is consumed — it is
//! never rendered as a segment of its own. Each remaining anchor renders
//! one wavetable segment from the previous value to its target, and the
//! segments concatenate in anchor order.

use grano_core::PrngState;

use crate::wavetable::{self, Shape};

/// One anchor of a breakpoint list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// A bare target value; the segment shape defaults to a linear ramp.
    Value(f64),
    /// A target reached through the given shape.
    Shaped {
        /// Segment shape.
        shape: Shape,
        /// Target value at the end of the segment.
        target: f64,
    },
    /// A shaped target whose segment is stretched or squeezed relative to
    /// the even group size.
    Stretched {
        /// Segment shape.
        shape: Shape,
        /// Target value at the end of the segment.
        target: f64,
        /// Multiplier applied to this segment's share of the total size.
        mult: f64,
    },
}

impl Anchor {
    /// A shaped anchor.
    pub fn shaped(shape: Shape, target: f64) -> Self {
        Anchor::Shaped { shape, target }
    }

    /// A shaped anchor with a duration multiplier.
    pub fn stretched(shape: Shape, target: f64, mult: f64) -> Self {
        Anchor::Stretched {
            shape,
            target,
            mult,
        }
    }

    /// The value this anchor lands on.
    pub fn target(&self) -> f64 {
        match self {
            Anchor::Value(value) => *value,
            Anchor::Shaped { target, .. } | Anchor::Stretched { target, .. } => *target,
        }
    }

    /// The shape leading into this anchor; bare values ramp linearly.
    pub fn shape(&self) -> Shape {
        match self {
            Anchor::Value(_) => Shape::Line,
            Anchor::Shaped { shape, .. } | Anchor::Stretched { shape, .. } => *shape,
        }
    }

    fn mult(&self) -> Option<f64> {
        match self {
            Anchor::Stretched { mult, .. } => Some(*mult),
            _ => None,
        }
    }
}

impl From<f64> for Anchor {
    fn from(value: f64) -> Self {
        Anchor::Value(value)
    }
}

/// Render `total_size` interpolated points from an anchor list.
///
/// - Fewer than two anchors coerce to the default ramp
///   `0.0 → line → 1.0` — there is always a start and an end.
/// - `total_size == 0` renders nothing; `0 < total_size < 4` renders the
///   first anchor's value `total_size` times.
/// - When `total_size` is smaller than the anchor count, the anchor list
///   is truncated to `total_size` entries first.
/// - The base group size is `total_size / (anchors - 1)`; the integer
///   remainder spills entirely into the final segment, so without
///   duration multipliers the output length is exactly `total_size`.
///
/// # Example
///
/// ```rust
/// use grano_core::PrngState;
/// use grano_gen::{Anchor, Shape, breakpoint::render};
///
/// let mut prng = PrngState::new();
/// let anchors = [
///     Anchor::Value(0.0),
///     Anchor::shaped(Shape::Line, 1.0),
///     Anchor::shaped(Shape::Line, 0.5),
/// ];
/// let curve = render(&anchors, 100, &mut prng);
/// assert_eq!(curve.len(), 100);
/// assert!((curve[99] - 0.5).abs() < 1e-12);
/// ```
pub fn render(anchors: &[Anchor], total_size: usize, prng: &mut PrngState) -> Vec<f64> {
    render_at_depth(anchors, total_size, prng, 0)
}

pub(crate) fn render_at_depth(
    anchors: &[Anchor],
    total_size: usize,
    prng: &mut PrngState,
    depth: usize,
) -> Vec<f64> {
    // We need at least a start and an end point.
    let default_ramp = [Anchor::Value(0.0), Anchor::shaped(Shape::Line, 1.0)];
    let anchors = if anchors.len() < 2 {
        &default_ramp[..]
    } else {
        anchors
    };

    if total_size == 0 {
        return Vec::new();
    }
    if total_size < 4 {
        return vec![anchors[0].target(); total_size];
    }

    // One destination value per rendered point at minimum.
    let anchors = &anchors[..anchors.len().min(total_size)];

    let group = total_size / (anchors.len() - 1);
    let spill = total_size % (anchors.len() - 1);

    let mut previous = anchors[0].target();
    let segments = &anchors[1..];
    let mut curve = Vec::with_capacity(total_size);

    for (i, anchor) in segments.iter().enumerate() {
        let mut seg_size = match anchor.mult() {
            // The multiplier stretches this segment only; the spill below
            // still lands on the final segment's unscaled share.
            Some(mult) => (group as f64 * mult) as usize,
            None => group,
        };
        if i == segments.len() - 1 {
            seg_size += spill;
        }

        let target = anchor.target();
        curve.extend(wavetable::generate_at_depth(
            anchor.shape(),
            seg_size,
            target,
            previous,
            prng,
            depth,
        ));
        previous = target;
    }

    curve
}
