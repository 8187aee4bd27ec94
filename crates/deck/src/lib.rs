//! Slide deck model for the presenter: descriptors, the built-in deck,
//! cyclic navigation, and synthetic chart data.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod navigation;

pub use catalog::Deck;
pub use domain::{Rgb, SlideDescriptor, SlideIcon, SlideKind};
pub use error::DeckError;
pub use metrics::{chart_data_for, generate_chart_data, ChartPoint, CHART_HORIZON};
pub use navigation::{Navigator, Position};
