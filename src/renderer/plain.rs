//! Plain text output

use crate::template::{Output, Segment};

use super::Markup;

/// Concatenate the text of every segment, dropping all styling
pub fn render_plain<N: Markup>(output: &Output<N>) -> String {
    let segments = match output {
        Output::PassThrough(text) => return text.clone(),
        Output::Segments(segments) => segments,
    };

    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal { text, .. } => out.push_str(text),
            Segment::Value { content, .. } | Segment::Missing { content, .. } => {
                content.write_plain(&mut out)
            }
        }
    }
    out
}
