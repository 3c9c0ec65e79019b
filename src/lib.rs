//! Star rating widget for iced
//!
//! A row of five stars rendering a fractional rating in [0, 5], with an
//! interactive variant that turns pointer drags and taps back into rating
//! values.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! - **Geometry** (`geometry`): pure layout and gesture math, unit tested
//!   without a renderer
//! - **Style** (`style`): appearance value types with copy-on-write modifiers
//! - **Widget** (`star_rating`): the `canvas::Program` tying both together
//!
//! # Example
//!
//! ```no_run
//! use star_rating::StarRating;
//!
//! enum Message {
//!     RatingChanged(f32),
//! }
//!
//! let display: iced::Element<'_, Message> = StarRating::new(3.5).width(250.0).into();
//!
//! let control: iced::Element<'_, Message> =
//!     StarRating::interactive(3.5, Message::RatingChanged)
//!         .width(250.0)
//!         .into();
//! ```

pub mod geometry;
pub mod style;

mod star_rating;

pub use star_rating::{Interaction, StarRating};
pub use style::{Outline, Style, Weight};
