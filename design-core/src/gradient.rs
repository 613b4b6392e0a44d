//! Linear gradient paints to CSS `linear-gradient()` values.
//!
//! Design tools describe a gradient by handle positions in the node's
//! normalized space (y grows downward). CSS wants an angle measured from
//! "to top", clockwise. The direction from handle 0 to handle 1 is converted
//! with `atan2(dy, dx) + 90deg`, then normalized into `[0, 360)`.

use std::fmt;

use crate::{Color, Paint, PaintKind, Vector};

/// CSS value for a paint that cannot be expressed as a gradient.
pub const NO_GRADIENT: &str = "none";

/// One color stop with its position as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Stop color.
    pub color: Color,
    /// Position, `0..=100` for well-formed input.
    pub percent: i64,
}

/// A resolved directional gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Direction in whole degrees, `0..360`.
    pub angle: i64,
    /// Stops in paint order.
    pub stops: Vec<GradientStop>,
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg", self.angle)?;
        for stop in &self.stops {
            write!(f, ", {} {}%", stop.color.to_css(), stop.percent)?;
        }
        f.write_str(")")
    }
}

/// CSS angle for the direction from `start` to `end`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn css_angle(start: Vector, end: Vector) -> i64 {
    let degrees = (end.y - start.y).atan2(end.x - start.x).to_degrees() + 90.0;
    let normalized = if degrees < 0.0 { degrees + 360.0 } else { degrees };
    (normalized.round() as i64).rem_euclid(360)
}

/// Resolve a linear gradient paint.
///
/// Returns `None` for non-linear gradient kinds and for gradients with fewer
/// than two handles or no stops.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn linear_gradient(paint: &Paint) -> Option<LinearGradient> {
    if paint.kind != PaintKind::GradientLinear || paint.gradient_stops.is_empty() {
        return None;
    }
    let [start, end, ..] = paint.gradient_handle_positions.as_slice() else {
        return None;
    };

    let stops = paint
        .gradient_stops
        .iter()
        .map(|stop| GradientStop {
            color: stop.color,
            percent: (stop.position * 100.0).round() as i64,
        })
        .collect();

    Some(LinearGradient {
        angle: css_angle(*start, *end),
        stops,
    })
}
