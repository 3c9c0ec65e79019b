//! Star rating demo
//!
//! Shows the three widget variants side by side: a read-only display, an
//! interactive control with live preview while dragging, and a tap-only
//! control with drag-to-change disabled.

use iced::widget::{column, container, text};
use iced::{Element, Length, Theme, color};

use star_rating::{StarRating, Weight};

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(Demo::default, Demo::update, Demo::view)
        .title("Star rating")
        .theme(Demo::theme)
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    RatingPreviewed(f32),
    RatingChanged(f32),
    TapRatingChanged(f32),
}

struct Demo {
    /// Committed rating of the interactive row
    rating: f32,
    /// In-flight preview while a drag is being tracked
    preview: Option<f32>,
    /// Committed rating of the tap-only row
    tap_rating: f32,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            rating: 3.5,
            preview: None,
            tap_rating: 2.0,
        }
    }
}

impl Demo {
    fn update(&mut self, message: Message) {
        match message {
            Message::RatingPreviewed(value) => {
                self.preview = Some(value);
            }
            Message::RatingChanged(value) => {
                tracing::info!(value, "rating committed");
                self.rating = value;
                self.preview = None;
            }
            Message::TapRatingChanged(value) => {
                tracing::info!(value, "tap-only rating committed");
                self.tap_rating = value;
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let shown = self.preview.unwrap_or(self.rating);

        let content = column![
            text("Read-only"),
            StarRating::new(3.5).width(250.0),
            text(format!("Drag or tap: {shown:.1}")),
            StarRating::interactive(self.rating, Message::RatingChanged)
                .on_preview(Message::RatingPreviewed)
                .preview(self.preview)
                .width(250.0)
                .outline(color!(0xb8860b))
                .outline_weight(Weight::Regular),
            text(format!("Tap only: {:.1}", self.tap_rating)),
            StarRating::interactive(self.tap_rating, Message::TapRatingChanged)
                .tap_only()
                .star_width(28.0)
                .spacing(6.0)
                .highlighted_color(color!(0xff4d8d)),
        ]
        .spacing(16);

        container(content).center(Length::Fill).into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
