//! Display layer for rendered templates
//!
//! Turns an [`Output`](crate::Output) into plain text or HTML. Node types
//! take part by implementing [`Markup`].

pub mod config;
pub mod html;
pub mod plain;

pub use config::HtmlConfig;
pub use html::render_html;
pub use plain::render_plain;

use std::rc::Rc;
use std::sync::Arc;

use crate::style::Span;
use crate::value::Fragment;

/// A node that can be written as plain text and as HTML
pub trait Markup {
    /// Append the text content, without any styling
    fn write_plain(&self, out: &mut String);

    /// Append escaped HTML
    fn write_html(&self, out: &mut String);
}

impl Markup for str {
    fn write_plain(&self, out: &mut String) {
        out.push_str(self);
    }

    fn write_html(&self, out: &mut String) {
        out.push_str(&html::escape_html(self));
    }
}

impl Markup for String {
    fn write_plain(&self, out: &mut String) {
        self.as_str().write_plain(out);
    }

    fn write_html(&self, out: &mut String) {
        self.as_str().write_html(out);
    }
}

impl Markup for Span {
    fn write_plain(&self, out: &mut String) {
        out.push_str(&self.text);
    }

    fn write_html(&self, out: &mut String) {
        let css = self.style.to_css();
        if css.is_empty() {
            out.push_str("<span>");
        } else {
            out.push_str(&format!("<span style=\"{}\">", html::escape_html(&css)));
        }
        out.push_str(&html::escape_html(&self.text));
        out.push_str("</span>");
    }
}

impl<N: Markup> Markup for Fragment<N> {
    fn write_plain(&self, out: &mut String) {
        match self {
            Fragment::Text(text) => text.write_plain(out),
            Fragment::Node(node) => node.write_plain(out),
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Fragment::Text(text) => text.write_html(out),
            Fragment::Node(node) => node.write_html(out),
        }
    }
}

impl<T: Markup + ?Sized> Markup for &T {
    fn write_plain(&self, out: &mut String) {
        (**self).write_plain(out);
    }

    fn write_html(&self, out: &mut String) {
        (**self).write_html(out);
    }
}

impl<T: Markup + ?Sized> Markup for Box<T> {
    fn write_plain(&self, out: &mut String) {
        (**self).write_plain(out);
    }

    fn write_html(&self, out: &mut String) {
        (**self).write_html(out);
    }
}

impl<T: Markup + ?Sized> Markup for Rc<T> {
    fn write_plain(&self, out: &mut String) {
        (**self).write_plain(out);
    }

    fn write_html(&self, out: &mut String) {
        (**self).write_html(out);
    }
}

impl<T: Markup + ?Sized> Markup for Arc<T> {
    fn write_plain(&self, out: &mut String) {
        (**self).write_plain(out);
    }

    fn write_html(&self, out: &mut String) {
        (**self).write_html(out);
    }
}
