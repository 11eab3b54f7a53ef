//! Style module: colors, modifiers and the color scheme used by row rendering.

mod color;
mod scheme;

pub use color::{Modifiers, Rgb};
pub use scheme::{ColorScheme, SpanRole, Style};
