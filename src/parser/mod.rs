//! Parser for `{name}` placeholder templates

pub mod ast;
pub mod lexer;

pub use ast::*;

use lexer::Token;

/// Split `source` into literal runs and placeholders
///
/// Text and braces that do not form a placeholder are folded into a single
/// literal piece, so two literal pieces are never adjacent.
pub fn parse(source: &str) -> Template<'_> {
    let mut pieces = Vec::new();
    let mut literal_start: Option<usize> = None;

    for (token, span) in lexer::lex(source) {
        match token {
            Token::Placeholder => {
                if let Some(start) = literal_start.take() {
                    pieces.push(Spanned::new(
                        Piece::Literal(&source[start..span.start]),
                        start..span.start,
                    ));
                }
                let name = &source[span.start + 1..span.end - 1];
                pieces.push(Spanned::new(Piece::Placeholder(name), span));
            }
            Token::Text | Token::BraceOpen | Token::BraceClose => {
                literal_start.get_or_insert(span.start);
            }
        }
    }

    if let Some(start) = literal_start {
        pieces.push(Spanned::new(
            Piece::Literal(&source[start..]),
            start..source.len(),
        ));
    }

    Template { pieces }
}
