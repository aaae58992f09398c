//! Small browser and formatting utilities shared across pages.

pub mod dark_mode;
pub mod date;
pub mod dialog;
