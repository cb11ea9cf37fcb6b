//! Render output: keyed segments or an untouched pass-through string

use crate::style::Style;
use crate::value::Fragment;

/// One unit of rendered output
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<N> {
    /// Literal template text, carrying the default style
    Literal { text: String, style: Style },
    /// Content resolved from a binding
    Value { name: String, content: Fragment<N> },
    /// Content produced by the fallback for an unbound placeholder
    Missing { name: String, content: Fragment<N> },
}

impl<N> Segment<N> {
    /// Placeholder name for value and missing segments
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Literal { .. } => None,
            Segment::Value { name, .. } | Segment::Missing { name, .. } => Some(name),
        }
    }

    /// Text of a literal segment, or of a text fragment
    pub fn text(&self) -> Option<&str> {
        match self {
            Segment::Literal { text, .. } => Some(text),
            Segment::Value { content, .. } | Segment::Missing { content, .. } => content.as_text(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal { .. })
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Segment::Missing { .. })
    }
}

/// Result of rendering a template
///
/// A template without any `{` is returned untouched as [`Output::PassThrough`];
/// everything else is split into [`Output::Segments`].
#[derive(Debug, Clone, PartialEq)]
pub enum Output<N> {
    PassThrough(String),
    Segments(Vec<Segment<N>>),
}

impl<N> Output<N> {
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Output::PassThrough(_))
    }

    /// The pass-through text, if no segmentation happened
    pub fn as_pass_through(&self) -> Option<&str> {
        match self {
            Output::PassThrough(text) => Some(text),
            Output::Segments(_) => None,
        }
    }

    /// The segments, if the template had a `{`
    pub fn segments(&self) -> Option<&[Segment<N>]> {
        match self {
            Output::PassThrough(_) => None,
            Output::Segments(segments) => Some(segments),
        }
    }

    /// Segments paired with their positional key
    ///
    /// Keys count up from zero and are unique within one output. A pass-through
    /// output has no segments and yields nothing.
    pub fn keyed(&self) -> impl Iterator<Item = (usize, &Segment<N>)> {
        self.segments().unwrap_or(&[]).iter().enumerate()
    }

    /// Normalize to a segment list
    ///
    /// A non-empty pass-through becomes one unstyled literal segment; an empty
    /// one becomes no segments.
    pub fn into_segments(self) -> Vec<Segment<N>> {
        match self {
            Output::Segments(segments) => segments,
            Output::PassThrough(text) if text.is_empty() => Vec::new(),
            Output::PassThrough(text) => vec![Segment::Literal {
                text,
                style: Style::default(),
            }],
        }
    }
}
