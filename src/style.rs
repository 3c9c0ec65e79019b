//! Appearance of the star rating widget
//!
//! Plain value types: every modifier consumes the receiver and returns an
//! updated copy, so styles compose left-to-right with later calls overriding
//! earlier ones and no shared mutable state anywhere.

use iced::{Color, color};

/// Track color when nothing else is configured (a light grey)
pub const DEFAULT_BASE: Color = color!(0xd6d6d6);

/// Fill color when nothing else is configured
pub const DEFAULT_HIGHLIGHT: Color = color!(0xffcc00);

/// Colors and outline of the star row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Color of the unfilled track stars
    pub base_color: Color,
    /// Color of the filled portion
    pub highlighted_color: Color,
    /// Optional stroke drawn over the filled portion
    pub outline: Option<Outline>,
}

impl Style {
    /// Replace the track color
    pub fn with_base_color(mut self, color: Color) -> Self {
        self.base_color = color;
        self
    }

    /// Replace the fill color
    pub fn with_highlighted_color(mut self, color: Color) -> Self {
        self.highlighted_color = color;
        self
    }

    /// Set the outline stroke color
    ///
    /// Keeps any previously configured weight; the default is light.
    pub fn with_outline(mut self, color: Color) -> Self {
        let weight = self.outline.map(|outline| outline.weight).unwrap_or_default();
        self.outline = Some(Outline { color, weight });
        self
    }

    /// Set the outline stroke weight, keeping the configured color
    ///
    /// Has no effect until an outline color is set.
    pub fn with_outline_weight(mut self, weight: Weight) -> Self {
        if let Some(outline) = &mut self.outline {
            outline.weight = weight;
        }
        self
    }

    /// Color used for the outline stroke
    ///
    /// Falls back to the highlight color when no outline is configured, so
    /// the stroke blends into the fill.
    pub fn outline_color(&self) -> Color {
        self.outline
            .map(|outline| outline.color)
            .unwrap_or(self.highlighted_color)
    }

    /// Stroke weight used for the outline
    pub fn outline_weight(&self) -> Weight {
        self.outline.map(|outline| outline.weight).unwrap_or_default()
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE,
            highlighted_color: DEFAULT_HIGHLIGHT,
            outline: None,
        }
    }
}

/// Outline stroke configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color,
    pub weight: Weight,
}

/// Stroke emphasis of the outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Light,
    Regular,
    Bold,
}

impl Weight {
    /// Stroke width in pixels for a star of the given size
    pub fn stroke_width(self, star_width: f32) -> f32 {
        let factor = match self {
            Weight::Light => 0.035,
            Weight::Regular => 0.055,
            Weight::Bold => 0.08,
        };

        (star_width * factor).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_do_not_mutate_receiver() {
        let base = Style::default();
        let styled = base.with_base_color(Color::BLACK);

        assert_eq!(base, Style::default());
        assert_eq!(styled.base_color, Color::BLACK);
        // Only the targeted field changed
        assert_eq!(styled.highlighted_color, base.highlighted_color);
        assert_eq!(styled.outline, base.outline);
    }

    #[test]
    fn test_modifiers_idempotent() {
        let once = Style::default().with_highlighted_color(Color::WHITE);
        let twice = once.with_highlighted_color(Color::WHITE);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_later_calls_override_earlier() {
        let style = Style::default()
            .with_base_color(Color::BLACK)
            .with_base_color(Color::WHITE);

        assert_eq!(style.base_color, Color::WHITE);
    }

    #[test]
    fn test_outline_defaults_to_light() {
        let style = Style::default().with_outline(Color::BLACK);

        assert_eq!(style.outline_weight(), Weight::Light);
        assert_eq!(style.outline_color(), Color::BLACK);
    }

    #[test]
    fn test_outline_falls_back_to_highlight() {
        let style = Style::default();

        assert_eq!(style.outline_color(), DEFAULT_HIGHLIGHT);
    }

    #[test]
    fn test_outline_weight_keeps_color() {
        let style = Style::default()
            .with_outline(Color::BLACK)
            .with_outline_weight(Weight::Bold);

        assert_eq!(style.outline_color(), Color::BLACK);
        assert_eq!(style.outline_weight(), Weight::Bold);
    }

    #[test]
    fn test_stroke_width_floor() {
        // Tiny stars still get a visible stroke
        assert_eq!(Weight::Light.stroke_width(10.0), 1.0);
        assert!(Weight::Bold.stroke_width(40.0) > Weight::Light.stroke_width(40.0));
    }
}
