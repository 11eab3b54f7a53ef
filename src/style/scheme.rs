//! Color scheme: resolves semantic span roles into concrete styles.

use super::color::{Modifiers, Rgb};

/// Concrete style applied to a rendered cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Style {
    /// Foreground color (`None` = terminal default).
    pub fg: Option<Rgb>,
    /// Background color (`None` = terminal default).
    pub bg: Option<Rgb>,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// Create a style with a foreground color only.
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg: Some(fg),
            bg: None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the background color (builder pattern).
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Add modifiers (builder pattern).
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }
}

/// Semantic role of a span. The color scheme decides what each role looks like.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SpanRole {
    /// Regular text.
    #[default]
    Primary,
    /// Less important text (locations, hints).
    Secondary,
    /// Emphasized text.
    Highlighted,
    /// Text belonging to the selected row.
    Selected,
    /// Decorations and separators.
    Dim,
    /// Keywords and labels.
    Keyword,
}

/// Maps each [`SpanRole`] to a [`Style`], plus the style used for padding cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    /// Style for [`SpanRole::Primary`].
    pub primary: Style,
    /// Style for [`SpanRole::Secondary`].
    pub secondary: Style,
    /// Style for [`SpanRole::Highlighted`].
    pub highlighted: Style,
    /// Style for [`SpanRole::Selected`].
    pub selected: Style,
    /// Style for [`SpanRole::Dim`].
    pub dim: Style,
    /// Style for [`SpanRole::Keyword`].
    pub keyword: Style,
    /// Style for blank padding cells.
    pub background: Style,
}

impl ColorScheme {
    /// Resolve a role into its style.
    pub const fn style_for(&self, role: SpanRole) -> Style {
        match role {
            SpanRole::Primary => self.primary,
            SpanRole::Secondary => self.secondary,
            SpanRole::Highlighted => self.highlighted,
            SpanRole::Selected => self.selected,
            SpanRole::Dim => self.dim,
            SpanRole::Keyword => self.keyword,
        }
    }

    /// A scheme that leaves every color at the terminal default.
    pub fn plain() -> Self {
        Self {
            primary: Style::default(),
            secondary: Style::default(),
            highlighted: Style::default().with_modifiers(Modifiers::BOLD),
            selected: Style::default().with_modifiers(Modifiers::REVERSED),
            dim: Style::default().with_modifiers(Modifiers::DIM),
            keyword: Style::default(),
            background: Style::default(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: Style::fg(Rgb::new(220, 220, 220)),
            secondary: Style::fg(Rgb::new(150, 150, 150)),
            highlighted: Style::fg(Rgb::WHITE).with_modifiers(Modifiers::BOLD),
            selected: Style::fg(Rgb::new(100, 200, 100)).with_modifiers(Modifiers::BOLD),
            dim: Style::fg(Rgb::new(90, 90, 90)),
            keyword: Style::fg(Rgb::new(215, 135, 255)),
            background: Style::default(),
        }
    }
}
