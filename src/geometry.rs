//! Layout and gesture math for the star rating widget
//!
//! Everything in here is pure so the rendering and interaction rules can be
//! unit tested without spinning up a renderer. The widget resolves its slot
//! geometry from *measured* bounds on every frame, so these functions take
//! plain numbers rather than configuration state.

use iced::{Point, Size};

/// Number of star slots in the row
pub const SLOT_COUNT: usize = 5;

/// Maximum rating value (one point per star)
pub const MAX_RATING: f32 = SLOT_COUNT as f32;

/// Default gap between stars when an explicit star width is configured
pub const DEFAULT_SPACING: f32 = 8.0;

/// Maximum pointer displacement (in px) still treated as a tap
pub const TAP_SLOP: f32 = 8.0;

/// Inner/outer radius ratio of the star polygon
const INNER_RADIUS_RATIO: f32 = 0.45;

/// Fraction of a star slot shown as filled for the given rating
///
/// `index` is 1-based: the first star covers ratings 0..=1, the second
/// 1..=2, and so on. Always in [0, 1] regardless of the rating value.
pub fn fill_amount(rating: f32, index: usize) -> f32 {
    (rating - (index as f32 - 1.0)).clamp(0.0, 1.0)
}

/// Fill fractions for all five slots
pub fn fill_amounts(rating: f32) -> [f32; SLOT_COUNT] {
    std::array::from_fn(|i| fill_amount(rating, i + 1))
}

/// Per-star width derived from an overall row width
///
/// Stars take 4/5 of the row; the remaining 1/5 is absorbed by gaps.
pub fn auto_star_width(overall: f32) -> f32 {
    overall / 25.0 * 4.0
}

/// Resolved slot geometry for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotMetrics {
    /// Width (and height) of a single star
    pub star_width: f32,
    /// Gap between adjacent stars
    pub gap: f32,
    /// Offset of the first star from the left edge of the bounds
    pub leading: f32,
}

impl SlotMetrics {
    /// Resolve slot geometry from measured bounds
    ///
    /// An explicit `star_width` is used verbatim. Otherwise the star width is
    /// derived from the measured overall width (capped by the available
    /// height) and the default gap is 1/25 of the overall width, which leaves
    /// half a gap of margin on each side of the row.
    pub fn resolve(bounds: Size, star_width: Option<f32>, spacing: Option<f32>) -> Self {
        let (star_width, gap) = match star_width {
            Some(width) => (width, spacing.unwrap_or(DEFAULT_SPACING)),
            None => (
                auto_star_width(bounds.width).min(bounds.height),
                spacing.unwrap_or(bounds.width / 25.0),
            ),
        };

        let span = star_width * SLOT_COUNT as f32 + gap * (SLOT_COUNT - 1) as f32;
        let leading = ((bounds.width - span) / 2.0).max(0.0);

        Self {
            star_width,
            gap,
            leading,
        }
    }

    /// X offset of the slot with the given 1-based index
    pub fn slot_x(&self, index: usize) -> f32 {
        self.leading + (index as f32 - 1.0) * (self.star_width + self.gap)
    }

    /// Total width spanned by the five stars and their gaps
    pub fn span(&self) -> f32 {
        self.star_width * SLOT_COUNT as f32 + self.gap * (SLOT_COUNT - 1) as f32
    }
}

/// Vertices of a five-pointed star inscribed in a `size` x `size` box
///
/// Points alternate between the outer and inner radius, starting from the
/// top point and winding clockwise.
pub fn star_points(size: f32) -> [Point; 10] {
    let center = Point::new(size / 2.0, size / 2.0);
    let outer = size / 2.0;
    let inner = outer * INNER_RADIUS_RATIO;

    std::array::from_fn(|i| {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    })
}

/// Rating at a pointer x offset within a row of the given measured width
///
/// Returns `None` before the first layout pass has produced a usable width,
/// so an early gesture has no effect instead of yielding NaN or infinity.
pub fn rating_at(x: f32, width: f32) -> Option<f32> {
    if !width.is_finite() || width <= 0.0 {
        return None;
    }

    Some((x / width * MAX_RATING).clamp(0.0, MAX_RATING))
}

/// Axis dominance rule: horizontal motion must dominate vertical motion
///
/// A zero-displacement tap qualifies. A vertically dominated gesture is a
/// scroll/pan and must not change the rating.
pub fn is_rating_gesture(dx: f32, dy: f32) -> bool {
    dx.abs() >= dy.abs()
}

/// Decide the committed rating for a finished gesture, if any
///
/// `origin` and `position` are the press and release points relative to the
/// widget bounds. When `tap_only` is set, gestures travelling further than
/// [`TAP_SLOP`] are rejected so only taps change the rating.
pub fn commit_rating(origin: Point, position: Point, width: f32, tap_only: bool) -> Option<f32> {
    let delta = position - origin;

    if !is_rating_gesture(delta.x, delta.y) {
        return None;
    }

    if tap_only && delta.x.hypot(delta.y) > TAP_SLOP {
        return None;
    }

    rating_at(position.x, width)
}

/// Live preview rating for an in-flight drag, if the gesture qualifies
///
/// Applies the same dominance gate as [`commit_rating`] so a vertical pan
/// over the widget never flashes a preview.
pub fn preview_rating(origin: Point, position: Point, width: f32) -> Option<f32> {
    let delta = position - origin;

    if !is_rating_gesture(delta.x, delta.y) {
        return None;
    }

    rating_at(position.x, width)
}
