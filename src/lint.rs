//! Lint checks for templates and their bindings.
//!
//! Rendering never fails on a missing binding or a stray brace, which makes
//! typos easy to miss. The lint reports them without changing the output:
//! placeholders with no binding, bindings that no placeholder uses, and braces
//! that are not part of any placeholder.

use std::collections::HashSet;
use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::parser::lexer::{self, Token};
use crate::parser::Span;
use crate::value::Bindings;

/// A lint warning about a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
    /// Location in the template, when the warning points at one
    pub span: Option<Span>,
}

/// Category of lint warning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Missing,
    Unused,
    StrayBrace,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Missing => write!(f, "missing"),
            LintCategory::Unused => write!(f, "unused"),
            LintCategory::StrayBrace => write!(f, "stray-brace"),
        }
    }
}

/// Run all lint checks on a template source.
///
/// Spanned warnings come first, in source order, followed by unused bindings
/// in name order.
pub fn check<N>(source: &str, bindings: &Bindings<N>) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut referenced = HashSet::new();

    for (token, span) in lexer::lex(source) {
        match token {
            Token::Placeholder => {
                let name = &source[span.start + 1..span.end - 1];
                referenced.insert(name);
                if !bindings.contains(name) {
                    warnings.push(LintWarning {
                        category: LintCategory::Missing,
                        message: format!("placeholder '{}' has no binding", name),
                        span: Some(span),
                    });
                }
            }
            Token::BraceOpen => warnings.push(LintWarning {
                category: LintCategory::StrayBrace,
                message: "'{' does not start a placeholder".to_string(),
                span: Some(span),
            }),
            Token::BraceClose => warnings.push(LintWarning {
                category: LintCategory::StrayBrace,
                message: "'}' does not close a placeholder".to_string(),
                span: Some(span),
            }),
            Token::Text => {}
        }
    }

    for name in bindings.names() {
        if !referenced.contains(name) {
            warnings.push(LintWarning {
                category: LintCategory::Unused,
                message: format!("binding '{}' is never used", name),
                span: None,
            });
        }
    }

    warnings
}

impl LintWarning {
    /// Format the warning with source context using ariadne
    ///
    /// Warnings without a span are reported as a single line.
    pub fn report(&self, source: &str, filename: &str) -> String {
        let Some(span) = &self.span else {
            return format!("Warning: [{}] {}\n", self.category, self.message);
        };

        // ariadne counts chars, lexer spans are bytes
        let start = source[..span.start].chars().count();
        let end = start + source[span.clone()].chars().count();

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, start)
            .with_message(format!("[{}] {}", self.category, self.message))
            .with_label(
                Label::new((filename, start..end))
                    .with_message(&self.message)
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("Warning: [{}] {}\n", self.category, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(warnings: &[LintWarning]) -> Vec<LintCategory> {
        warnings.iter().map(|w| w.category).collect()
    }

    #[test]
    fn test_clean_template() {
        let bindings: Bindings<()> = Bindings::new().with("name", "World");
        assert!(check("Hello, {name}!", &bindings).is_empty());
    }

    #[test]
    fn test_missing_per_occurrence() {
        let bindings: Bindings<()> = Bindings::new();
        let warnings = check("{a} {b} {a}", &bindings);
        assert_eq!(categories(&warnings), vec![LintCategory::Missing; 3]);
        assert_eq!(warnings[2].span, Some(8..11));
        assert_eq!(warnings[0].message, "placeholder 'a' has no binding");
    }

    #[test]
    fn test_unused_bindings_sorted() {
        let bindings: Bindings<()> = Bindings::new().with("z", 1).with("a", 2).with("used", 3);
        let warnings = check("{used}", &bindings);
        let messages: Vec<_> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["binding 'a' is never used", "binding 'z' is never used"]
        );
        assert!(warnings.iter().all(|w| w.span.is_none()));
    }

    #[test]
    fn test_stray_braces() {
        let bindings: Bindings<()> = Bindings::new().with("x", 1);
        let warnings = check("} {} {x}", &bindings);
        assert_eq!(categories(&warnings), vec![LintCategory::StrayBrace; 3]);
        assert_eq!(warnings[0].span, Some(0..1));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(LintCategory::Missing.to_string(), "missing");
        assert_eq!(LintCategory::Unused.to_string(), "unused");
        assert_eq!(LintCategory::StrayBrace.to_string(), "stray-brace");
    }

    #[test]
    fn test_report_contains_message() {
        let bindings: Bindings<()> = Bindings::new();
        let source = "Hello, {name}!";
        let warnings = check(source, &bindings);
        let report = warnings[0].report(source, "greeting.txt");
        assert!(report.contains("placeholder 'name' has no binding"));
        assert!(report.contains("greeting.txt"));
    }

    #[test]
    fn test_report_label_after_multibyte_text() {
        let bindings: Bindings<()> = Bindings::new();
        let source = "héllo wörld ✓✓✓ {x}";
        let warnings = check(source, &bindings);
        assert_eq!(warnings[0].span, Some(24..27));

        let report = warnings[0].report(source, "t");
        assert!(report.contains("t:1:17"), "report was: {}", report);
        assert!(report.contains("héllo wörld ✓✓✓ "));
        assert!(report.matches("placeholder 'x' has no binding").count() >= 2);
    }

    #[test]
    fn test_report_without_span() {
        let warning = LintWarning {
            category: LintCategory::Unused,
            message: "binding 'x' is never used".to_string(),
            span: None,
        };
        assert_eq!(
            warning.report("", "t"),
            "Warning: [unused] binding 'x' is never used\n"
        );
    }
}
