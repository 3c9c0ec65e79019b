//! Star rating widget
//!
//! A row of five vector stars showing a possibly-fractional rating in
//! [0, 5]. The read-only variant just renders; the interactive variant maps
//! pointer drags and taps back to a rating value and publishes it as a
//! message when the gesture commits.
//!
//! Fractional fills are drawn by clipping the highlighted star to the
//! leading fraction of its slot, over a fully visible track star. Slot
//! geometry is resolved from the measured bounds on every frame, so the
//! widget works both with a fixed width and when filling available space.

use iced::mouse;
use iced::touch;
use iced::widget::Canvas;
use iced::widget::canvas::{self, Action, Frame, Geometry, Path, Stroke};
use iced::{Color, Element, Event, Length, Point, Rectangle, Renderer, Theme, Vector};

use crate::geometry::{self, DEFAULT_SPACING, SLOT_COUNT, SlotMetrics};
use crate::style::{Style, Weight};

/// Star rating widget
///
/// Modifiers consume the receiver and return an updated copy; chains compose
/// left-to-right with later calls overriding earlier ones.
pub struct StarRating<'a, Message> {
    rating: f32,
    preview: Option<f32>,
    width: Option<f32>,
    star_width: Option<f32>,
    spacing: Option<f32>,
    style: Style,
    tap_only: bool,
    on_change: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_preview: Option<Box<dyn Fn(f32) -> Message + 'a>>,
}

impl<'a, Message> StarRating<'a, Message> {
    /// Create a read-only rating display
    ///
    /// Pointer input is ignored entirely. The rating is clamped to [0, 5].
    pub fn new(rating: f32) -> Self {
        Self {
            rating: rating.clamp(0.0, geometry::MAX_RATING),
            preview: None,
            width: None,
            star_width: None,
            spacing: None,
            style: Style::default(),
            tap_only: false,
            on_change: None,
            on_preview: None,
        }
    }

    /// Create an interactive rating control
    ///
    /// `on_change` is published with the new rating when a gesture commits:
    /// on drag end or tap, and only when the gesture's horizontal travel
    /// dominates its vertical travel. Vertically dominated gestures are
    /// treated as scrolling and leave the rating untouched.
    pub fn interactive<F>(rating: f32, on_change: F) -> Self
    where
        F: 'a + Fn(f32) -> Message,
    {
        let mut rating = Self::new(rating);
        rating.on_change = Some(Box::new(on_change));
        rating
    }

    /// Set the overall row width
    ///
    /// The per-star width is derived from it at render time as `width / 25 * 4`
    /// unless an explicit [`star_width`](Self::star_width) is configured.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set an explicit per-star width, used verbatim
    pub fn star_width(mut self, star_width: f32) -> Self {
        self.star_width = Some(star_width);
        self
    }

    /// Set the gap between adjacent stars
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Set the color of the unfilled track stars
    pub fn base_color(mut self, color: Color) -> Self {
        self.style = self.style.with_base_color(color);
        self
    }

    /// Set the color of the filled portion
    pub fn highlighted_color(mut self, color: Color) -> Self {
        self.style = self.style.with_highlighted_color(color);
        self
    }

    /// Draw an outline over the filled portion in the given color
    pub fn outline(mut self, color: Color) -> Self {
        self.style = self.style.with_outline(color);
        self
    }

    /// Set the outline stroke weight
    pub fn outline_weight(mut self, weight: Weight) -> Self {
        self.style = self.style.with_outline_weight(weight);
        self
    }

    /// Replace the whole style at once
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Disable drag-to-change; the rating can only be set by tapping
    pub fn tap_only(mut self) -> Self {
        self.tap_only = true;
        self
    }

    /// Publish a live preview rating while a qualifying drag is in flight
    ///
    /// The preview is advisory: the bound value only changes on commit, and
    /// an abandoned gesture publishes one final preview equal to the bound
    /// rating so the display snaps back. Feed the received value back through
    /// [`preview`](Self::preview) to show it.
    pub fn on_preview<F>(mut self, on_preview: F) -> Self
    where
        F: 'a + Fn(f32) -> Message,
    {
        self.on_preview = Some(Box::new(on_preview));
        self
    }

    /// Override the displayed rating with an in-flight preview value
    ///
    /// The bound rating stays the source of truth; the preview only affects
    /// what is drawn. Clamped to [0, 5] like the rating itself.
    pub fn preview(mut self, preview: Option<f32>) -> Self {
        self.preview = preview.map(|value| value.clamp(0.0, geometry::MAX_RATING));
        self
    }

    /// Host layout size derived from the sizing configuration
    fn layout_size(&self) -> (Length, Length) {
        match (self.star_width, self.width) {
            (Some(star_width), _) => {
                let gap = self.spacing.unwrap_or(DEFAULT_SPACING);
                let span = star_width * SLOT_COUNT as f32 + gap * (SLOT_COUNT - 1) as f32;
                (Length::Fixed(span), Length::Fixed(star_width))
            }
            (None, Some(width)) => (
                Length::Fixed(width),
                Length::Fixed(geometry::auto_star_width(width)),
            ),
            (None, None) => (Length::Fill, Length::Fill),
        }
    }
}

/// Transient pointer-tracking state of one widget instance
#[derive(Debug, Clone, Copy, Default)]
pub struct Interaction {
    drag: Option<Drag>,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    /// Press position, relative to the widget bounds
    origin: Point,
    /// Last observed position, relative to the widget bounds
    position: Point,
}

impl<Message> canvas::Program<Message> for StarRating<'_, Message> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        // Read-only displays ignore input entirely
        let on_change = self.on_change.as_ref()?;

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                let position = cursor.position_in(bounds)?;
                state.drag = Some(Drag {
                    origin: position,
                    position,
                });
                Some(Action::capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                let drag = state.drag.as_mut()?;
                let position = cursor.land().position()?;
                drag.position = Point::new(position.x - bounds.x, position.y - bounds.y);

                if !self.tap_only {
                    if let Some(on_preview) = &self.on_preview {
                        if let Some(rating) =
                            geometry::preview_rating(drag.origin, drag.position, bounds.width)
                        {
                            return Some(Action::publish(on_preview(rating)).and_capture());
                        }
                    }
                }

                Some(Action::capture())
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                let drag = state.drag.take()?;

                match geometry::commit_rating(
                    drag.origin,
                    drag.position,
                    bounds.width,
                    self.tap_only,
                ) {
                    Some(rating) => {
                        tracing::debug!(rating, "rating committed");
                        Some(Action::publish(on_change(rating)).and_capture())
                    }
                    None => {
                        tracing::trace!("gesture abandoned");
                        // Snap any live preview back to the bound rating
                        self.on_preview
                            .as_ref()
                            .map(|on_preview| Action::publish(on_preview(self.rating)).and_capture())
                    }
                }
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let shown = self.preview.unwrap_or(self.rating);
        let metrics = SlotMetrics::resolve(bounds.size(), self.star_width, self.spacing);
        let star_width = metrics.star_width;
        let y = ((bounds.height - star_width) / 2.0).max(0.0);

        let star = Path::new(|builder| {
            let points = geometry::star_points(star_width);
            builder.move_to(points[0]);
            for point in &points[1..] {
                builder.line_to(*point);
            }
            builder.close();
        });

        let outline_stroke = Stroke::default()
            .with_color(self.style.outline_color())
            .with_width(self.style.outline_weight().stroke_width(star_width));

        for index in 1..=SLOT_COUNT {
            let x = metrics.slot_x(index);
            let amount = geometry::fill_amount(shown, index);

            // Track star, always fully visible
            frame.with_save(|frame| {
                frame.translate(Vector::new(x, y));
                frame.fill(&star, self.style.base_color);
            });

            if amount > 0.0 {
                // Mask: only the leading fraction of the slot shows through
                let mask = Rectangle {
                    x,
                    y,
                    width: star_width * amount,
                    height: star_width,
                };

                frame.with_clip(mask, |frame| {
                    frame.fill(&star, self.style.highlighted_color);
                    frame.stroke(&star, outline_stroke);
                });
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.on_change.is_none() {
            return mouse::Interaction::default();
        }

        if state.drag.is_some() {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(bounds) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<StarRating<'a, Message>> for Element<'a, Message> {
    fn from(rating: StarRating<'a, Message>) -> Element<'a, Message> {
        let (width, height) = rating.layout_size();

        Canvas::new(rating).width(width).height(height).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;
    use iced::widget::canvas::Program;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum TestMessage {
        Changed(f32),
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(250.0, 40.0))
    }

    fn press_at(x: f32, y: f32) -> (Event, mouse::Cursor) {
        (
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            mouse::Cursor::Available(Point::new(x, y)),
        )
    }

    fn release_at(x: f32, y: f32) -> (Event, mouse::Cursor) {
        (
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            mouse::Cursor::Available(Point::new(x, y)),
        )
    }

    #[test]
    fn test_rating_clamped_at_construction() {
        assert_eq!(StarRating::<TestMessage>::new(7.0).rating, 5.0);
        assert_eq!(StarRating::<TestMessage>::new(-1.0).rating, 0.0);
        assert_eq!(StarRating::<TestMessage>::new(3.5).rating, 3.5);
    }

    #[test]
    fn test_preview_clamped_like_rating() {
        let rating = StarRating::<TestMessage>::new(3.0).preview(Some(9.0));

        assert_eq!(rating.preview, Some(5.0));
        // The bound rating is untouched by the preview
        assert_eq!(rating.rating, 3.0);
    }

    #[test]
    fn test_later_modifiers_override_earlier() {
        let rating = StarRating::<TestMessage>::new(3.0)
            .base_color(Color::BLACK)
            .base_color(Color::WHITE);

        assert_eq!(rating.style.base_color, Color::WHITE);
    }

    #[test]
    fn test_layout_size_from_overall_width() {
        let (width, height) = StarRating::<TestMessage>::new(3.0).width(250.0).layout_size();

        assert_eq!(width, Length::Fixed(250.0));
        assert_eq!(height, Length::Fixed(40.0));
    }

    #[test]
    fn test_layout_size_from_star_width() {
        let (width, height) = StarRating::<TestMessage>::new(3.0)
            .star_width(20.0)
            .spacing(4.0)
            .layout_size();

        // 5 stars of 20 plus 4 gaps of 4
        assert_eq!(width, Length::Fixed(116.0));
        assert_eq!(height, Length::Fixed(20.0));
    }

    #[test]
    fn test_layout_size_fills_when_unconfigured() {
        let (width, height) = StarRating::<TestMessage>::new(3.0).layout_size();

        assert_eq!(width, Length::Fill);
        assert_eq!(height, Length::Fill);
    }

    #[test]
    fn test_read_only_ignores_input() {
        let rating = StarRating::<TestMessage>::new(3.0);
        let mut state = Interaction::default();
        let (event, cursor) = press_at(125.0, 20.0);

        let action = rating.update(&mut state, &event, bounds(), cursor);

        assert!(action.is_none());
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_press_inside_bounds_starts_tracking() {
        let rating = StarRating::interactive(3.0, TestMessage::Changed);
        let mut state = Interaction::default();
        let (event, cursor) = press_at(125.0, 20.0);

        let action = rating.update(&mut state, &event, bounds(), cursor);

        assert!(action.is_some());
        assert!(state.drag.is_some());
    }

    #[test]
    fn test_press_outside_bounds_is_ignored() {
        let rating = StarRating::interactive(3.0, TestMessage::Changed);
        let mut state = Interaction::default();
        let (event, cursor) = press_at(300.0, 20.0);

        let action = rating.update(&mut state, &event, bounds(), cursor);

        assert!(action.is_none());
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_release_ends_tracking() {
        let rating = StarRating::interactive(3.0, TestMessage::Changed);
        let mut state = Interaction::default();

        let (press, cursor) = press_at(125.0, 20.0);
        rating.update(&mut state, &press, bounds(), cursor);

        let (release, cursor) = release_at(125.0, 20.0);
        let action = rating.update(&mut state, &release, bounds(), cursor);

        // Tap commits and tracking stops
        assert!(action.is_some());
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let rating = StarRating::interactive(3.0, TestMessage::Changed);
        let mut state = Interaction::default();
        let (release, cursor) = release_at(125.0, 20.0);

        let action = rating.update(&mut state, &release, bounds(), cursor);

        assert!(action.is_none());
    }

    #[test]
    fn test_vertical_drag_is_abandoned_silently() {
        // No preview handler, so an abandoned gesture publishes nothing
        let rating = StarRating::interactive(3.0, TestMessage::Changed);
        let mut state = Interaction::default();

        let (press, cursor) = press_at(125.0, 10.0);
        rating.update(&mut state, &press, bounds(), cursor);

        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(125.0, 35.0),
        });
        rating.update(
            &mut state,
            &moved,
            bounds(),
            mouse::Cursor::Available(Point::new(125.0, 35.0)),
        );

        let (release, cursor) = release_at(125.0, 35.0);
        let action = rating.update(&mut state, &release, bounds(), cursor);

        assert!(action.is_none());
        assert!(state.drag.is_none());
    }
}
