//! Model module: the screen tree a caller builds before each render pass.
//!
//! A [`Screen`] owns [`Row`]s, each row owns [`Column`]s, each column owns
//! [`Span`]s. The tree itself is never touched by the renderer; computed
//! widths and the visible window live in the screen's [`crate::Frame`].

mod layout;
mod row;
mod screen;
mod span;

pub use layout::Layout;
pub use row::{Column, Row};
pub use screen::{Screen, WindowRequest};
pub use span::Span;
