//! Controller layer: navigation commands and their application to deck state.

pub mod events;
pub mod orchestration;
