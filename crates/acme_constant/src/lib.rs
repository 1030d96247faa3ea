//! Default palettes and app metadata shared by every client.

pub mod app;
pub mod theme;

pub use theme::{ThemeVariant, UnknownVariant};
