//! Parsed template representation

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A node with its source span
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// One piece of a template, borrowing from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'s> {
    /// Maximal run of literal text, never empty
    Literal(&'s str),
    /// Placeholder name, without the surrounding braces
    Placeholder(&'s str),
}

/// A template split into literal runs and placeholders, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Template<'s> {
    pub pieces: Vec<Spanned<Piece<'s>>>,
}

impl<'s> Template<'s> {
    /// Placeholder names in order of appearance (repeats included)
    pub fn placeholders(&self) -> impl Iterator<Item = &'s str> + '_ {
        self.pieces.iter().filter_map(|p| match p.node {
            Piece::Placeholder(name) => Some(name),
            Piece::Literal(_) => None,
        })
    }

    /// Number of literal runs
    pub fn literal_count(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p.node, Piece::Literal(_)))
            .count()
    }
}
