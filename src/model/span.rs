//! Span: an atomic styled text fragment.

use crate::style::{Modifiers, SpanRole};
use unicode_width::UnicodeWidthStr;

/// A styled piece of text inside a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    content: String,
    role: SpanRole,
    modifiers: Modifiers,
}

impl Span {
    /// Create a span with the primary role.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_role(content, SpanRole::Primary)
    }

    /// Create a span with an explicit role.
    pub fn with_role(content: impl Into<String>, role: SpanRole) -> Self {
        Self {
            content: content.into(),
            role,
            modifiers: Modifiers::empty(),
        }
    }

    /// Add modifiers (builder pattern).
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// The text of the span.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The semantic role of the span.
    pub const fn role(&self) -> SpanRole {
        self.role
    }

    /// Modifiers applied on top of the role's style.
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Display width in terminal cells.
    pub fn content_length(&self) -> usize {
        UnicodeWidthStr::width(self.content.as_str())
    }
}

impl From<&str> for Span {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Span {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}
