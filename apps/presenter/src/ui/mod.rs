//! UI layer: app shell, page layout, slide painting, icons, theme, and transitions.

pub mod app;
pub mod icons;
pub mod layout;
pub mod slide_view;
pub mod theme;
pub mod transition;

pub use app::PresenterApp;
