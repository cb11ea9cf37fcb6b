//! Placeholder substitution
//!
//! This module turns a parsed template and a set of bindings into an ordered
//! list of segments. Every placeholder yields exactly one segment (its bound
//! value or the fallback) and every literal run yields exactly one literal
//! segment.
//!
//! # Example
//!
//! ```text
//! "Hello, {name}!" + { name: "World" }
//!   => [Literal("Hello, "), Value(name = "World"), Literal("!")]
//! ```

mod fallback;
mod resolver;
mod segment;

pub use fallback::Fallback;
pub use resolver::resolve;
pub use segment::{Output, Segment};

use crate::error::RenderError;
use crate::parser::{Piece, Template};
use crate::style::Style;
use crate::value::Bindings;

/// Substitute every placeholder of `template`
///
/// Literal segments get a copy of `default_style`; value and missing segments
/// are left unstyled. Stops at the first failing binding function.
pub fn substitute<N: Clone>(
    template: &Template<'_>,
    bindings: &Bindings<N>,
    default_style: &Style,
    fallback: &Fallback<N>,
) -> Result<Vec<Segment<N>>, RenderError> {
    let mut segments = Vec::with_capacity(template.pieces.len());

    for piece in &template.pieces {
        match piece.node {
            Piece::Literal(text) => segments.push(Segment::Literal {
                text: text.to_string(),
                style: default_style.clone(),
            }),
            Piece::Placeholder(name) => match bindings.get(name) {
                Some(value) => {
                    tracing::trace!(name, span = ?piece.span, "substituting placeholder");
                    segments.push(Segment::Value {
                        name: name.to_string(),
                        content: resolve(name, value)?,
                    });
                }
                None => {
                    tracing::debug!(name, span = ?piece.span, "no binding for placeholder, using fallback");
                    segments.push(Segment::Missing {
                        name: name.to_string(),
                        content: fallback.call(name),
                    });
                }
            },
        }
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::value::{Fragment, Value};
    use pretty_assertions::assert_eq;

    fn literal(text: &str, style: &Style) -> Segment<()> {
        Segment::Literal {
            text: text.to_string(),
            style: style.clone(),
        }
    }

    #[test]
    fn test_substitute_mixed() {
        let style = Style::new().with_color("#333");
        let bindings: Bindings<()> = Bindings::new().with("name", "World");
        let template = parse("Hello, {name}! Welcome to {place}.");
        let segments = substitute(&template, &bindings, &style, &Fallback::default())
            .expect("Should render");

        assert_eq!(
            segments,
            vec![
                literal("Hello, ", &style),
                Segment::Value {
                    name: "name".to_string(),
                    content: Fragment::Text("World".to_string()),
                },
                literal("! Welcome to ", &style),
                Segment::Missing {
                    name: "place".to_string(),
                    content: Fragment::Text("{place}".to_string()),
                },
                literal(".", &style),
            ]
        );
    }

    #[test]
    fn test_substitute_stops_at_failing_binding() {
        let bindings: Bindings<()> = Bindings::new().with(
            "bad",
            Value::try_thunk(|| "nope".parse::<u8>().map(|n| n.to_string())),
        );
        let template = parse("{bad}");
        let err = substitute(&template, &bindings, &Style::default(), &Fallback::default())
            .unwrap_err();
        assert_eq!(err.name(), "bad");
    }
}
