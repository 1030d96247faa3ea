//! Types shared by the admin, user and mobile apps.
//!
//! [`ColorTheme`] is total: every [`ThemeSlot`] always has a value.
//! [`ThemeOverrides`] is the partial form used to derive one palette from another.

mod color;
mod overrides;

pub use color::{ColorTheme, ThemeSlot, UnknownSlot};
pub use overrides::ThemeOverrides;
