//! Lexer for placeholder templates using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `{name}` - one or more non-brace characters between braces
    #[regex(r"\{[^{}]+\}")]
    Placeholder,

    /// A run of characters that are not braces
    #[regex(r"[^{}]+")]
    Text,

    // Braces that do not form a placeholder
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
}

impl Token {
    /// Single-character token used when the lexer has to recover
    fn from_char(ch: char) -> Self {
        match ch {
            '{' => Token::BraceOpen,
            '}' => Token::BraceClose,
            _ => Token::Text,
        }
    }
}

/// Lex input string into tokens with spans
///
/// Nothing is dropped: the token spans tile the whole input. A `{` that never
/// closes is emitted as [`Token::BraceOpen`] and lexing resumes right after it.
pub fn lex(input: &str) -> Vec<(Token, Span)> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    'restart: while offset < input.len() {
        let mut lexer = Token::lexer(&input[offset..]);
        while let Some(result) = lexer.next() {
            let span = offset + lexer.span().start..offset + lexer.span().end;
            match result {
                Ok(token) => tokens.push((token, span)),
                Err(()) => {
                    let Some(ch) = input[span.start..].chars().next() else {
                        break 'restart;
                    };
                    let end = span.start + ch.len_utf8();
                    tokens.push((Token::from_char(ch), span.start..end));
                    offset = end;
                    continue 'restart;
                }
            }
        }
        break;
    }

    tokens
}
