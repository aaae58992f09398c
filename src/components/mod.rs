//! Reusable view components.

pub mod entity_picker;
