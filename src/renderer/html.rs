//! HTML generation from render output

use crate::template::{Output, Segment};

use super::{HtmlConfig, Markup};

/// Build the HTML for one render output
struct HtmlBuilder<'c> {
    config: &'c HtmlConfig,
    out: String,
}

impl<'c> HtmlBuilder<'c> {
    fn new(config: &'c HtmlConfig) -> Self {
        Self {
            config,
            out: String::new(),
        }
    }

    fn prefix(&self) -> &str {
        self.config.class_prefix.as_deref().unwrap_or("")
    }

    fn open(&mut self, key: Option<usize>, class: &str, css: &str) {
        let mut tag = String::from("<span");
        if let Some(key) = key.filter(|_| self.config.keys) {
            tag.push_str(&format!(" data-key=\"{}\"", key));
        }
        tag.push_str(&format!(" class=\"{}{}\"", self.prefix(), class));
        if !css.is_empty() {
            tag.push_str(&format!(" style=\"{}\"", escape_html(css)));
        }
        tag.push('>');
        self.out.push_str(&tag);
    }

    fn close(&mut self) {
        self.out.push_str("</span>");
    }

    fn add_segment<N: Markup>(&mut self, key: usize, segment: &Segment<N>) {
        match segment {
            Segment::Literal { text, style } => {
                self.open(Some(key), "literal", &style.to_css());
                self.out.push_str(&escape_html(text));
            }
            Segment::Value { content, .. } => {
                self.open(Some(key), "value", "");
                content.write_html(&mut self.out);
            }
            Segment::Missing { content, .. } => {
                self.open(Some(key), "missing", "");
                content.write_html(&mut self.out);
            }
        }
        self.close();
    }

    fn build(self) -> String {
        self.out
    }
}

/// Render output as HTML `<span>` elements
///
/// Each segment becomes one `<span>` carrying its positional key and a class
/// naming its kind. Literal segments carry their style inline. A pass-through
/// output is escaped text, wrapped like any other output.
pub fn render_html<N: Markup>(output: &Output<N>, config: &HtmlConfig) -> String {
    let mut builder = HtmlBuilder::new(config);

    if config.wrap {
        builder.open(None, "text", "");
    }

    match output {
        Output::PassThrough(text) => builder.out.push_str(&escape_html(text)),
        Output::Segments(segments) => {
            for (key, segment) in segments.iter().enumerate() {
                builder.add_segment(key, segment);
            }
        }
    }

    if config.wrap {
        builder.close();
    }

    builder.build()
}

/// Escape special HTML characters
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Span, Style};
    use crate::value::Fragment;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_html("\"q\" 'a'"), "&quot;q&quot; &#39;a&#39;");
    }

    #[test]
    fn test_render_pass_through() {
        let output: Output<Span> = Output::PassThrough("No vars <here>".to_string());
        assert_eq!(
            render_html(&output, &HtmlConfig::default()),
            "<span class=\"vt-text\">No vars &lt;here&gt;</span>"
        );
    }

    #[test]
    fn test_render_segments_without_wrap_or_keys() {
        let output = Output::Segments(vec![
            Segment::Literal {
                text: "Hi ".to_string(),
                style: Style::new().with_font_family("monospace"),
            },
            Segment::Value {
                name: "who".to_string(),
                content: Fragment::Node(Span::plain("you")),
            },
        ]);
        let config = HtmlConfig::new().with_wrap(false).with_keys(false).without_class_prefix();
        assert_eq!(
            render_html(&output, &config),
            "<span class=\"literal\" style=\"font-family: monospace\">Hi </span><span class=\"value\"><span>you</span></span>"
        );
    }

    #[test]
    fn test_missing_segment_class() {
        let output: Output<Span> = Output::Segments(vec![Segment::Missing {
            name: "x".to_string(),
            content: Fragment::Text("{x}".to_string()),
        }]);
        let html = render_html(&output, &HtmlConfig::new().with_wrap(false));
        assert_eq!(html, "<span data-key=\"0\" class=\"vt-missing\">{x}</span>");
    }
}
