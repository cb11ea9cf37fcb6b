//! Text styles and the built-in styled text node
//!
//! A [`Style`] is the display-layer descriptor applied to literal segments.
//! [`Span`] is a ready-made node type for callers that have no display layer
//! of their own: a piece of text with a style, renderable as plain text or HTML.

use serde::Deserialize;

/// Visual style for a run of text
///
/// Every field is optional; an empty style renders as unstyled text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Foreground color (any CSS color value)
    pub color: Option<String>,
    /// Background color (any CSS color value)
    pub background: Option<String>,
    pub font_family: Option<String>,
    /// Font size with unit, e.g. `16px`
    pub font_size: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set the font size
    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// True when no property is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// CSS declarations for this style, in a fixed property order
    ///
    /// Returns an empty string for an empty style.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        if let Some(color) = &self.color {
            decls.push(format!("color: {}", color));
        }
        if let Some(background) = &self.background {
            decls.push(format!("background-color: {}", background));
        }
        if let Some(family) = &self.font_family {
            decls.push(format!("font-family: {}", family));
        }
        if let Some(size) = &self.font_size {
            decls.push(format!("font-size: {}", size));
        }
        if self.bold {
            decls.push("font-weight: bold".to_string());
        }
        if self.italic {
            decls.push("font-style: italic".to_string());
        }
        if self.underline {
            decls.push("text-decoration: underline".to_string());
        }
        decls.join("; ")
    }
}

/// Styled text node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    /// Text without any style
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    /// Text with a style
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}
