//! Variable Text - substitute `{name}` placeholders with rich content
//!
//! This library splits a template into literal text and placeholders and
//! resolves each placeholder against a set of bindings. A binding can be plain
//! data, a node of the caller's display layer, or a function evaluated at
//! render time. Placeholders without a binding go through a fallback.
//!
//! # Example
//!
//! ```rust
//! use variable_text::{render, render_plain, Bindings, Span};
//!
//! let bindings: Bindings<Span> = Bindings::new().with("name", "World");
//! let output = render("Hello, {name}!", &bindings).unwrap();
//! assert_eq!(output.segments().unwrap().len(), 3);
//! assert_eq!(render_plain(&output), "Hello, World!");
//! ```

pub mod config;
pub mod error;
pub mod lint;
pub mod parser;
pub mod renderer;
pub mod style;
pub mod template;
pub mod value;

pub use config::{Config, ConfigError, MissingMode};
pub use error::RenderError;
pub use lint::{LintCategory, LintWarning};
pub use parser::{parse, Template};
pub use renderer::{render_html, render_plain, HtmlConfig, Markup};
pub use style::{Span, Style};
pub use template::{Fallback, Output, Segment};
pub use value::{Bindings, Fragment, Primitive, Value};

/// Configuration for the render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig<N> {
    /// Style applied to every literal segment
    pub default_style: Style,
    /// Content for placeholders without a binding
    pub fallback: Fallback<N>,
    /// Collect lint warnings in [`render_with_lint`]
    pub lint: bool,
}

impl<N: 'static> Default for RenderConfig<N> {
    fn default() -> Self {
        Self {
            default_style: Style::default(),
            fallback: Fallback::default(),
            lint: false,
        }
    }
}

impl<N: 'static> RenderConfig<N> {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N> RenderConfig<N> {
    /// Set the style for literal segments
    pub fn with_default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }

    /// Set the fallback for unbound placeholders
    pub fn with_fallback(mut self, fallback: Fallback<N>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the fallback from a function
    pub fn on_missing<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> Fragment<N> + Send + Sync + 'static,
    {
        self.with_fallback(Fallback::new(f))
    }

    /// Enable or disable lint collection
    pub fn with_lint(mut self, lint: bool) -> Self {
        self.lint = lint;
        self
    }
}

/// Render a template with the default configuration
///
/// Unbound placeholders are kept as `{name}` and literal text is unstyled.
///
/// # Example
///
/// ```rust
/// use variable_text::{render, Bindings, Output, Span};
///
/// let output = render("No vars here", &Bindings::<Span>::new()).unwrap();
/// assert_eq!(output, Output::PassThrough("No vars here".to_string()));
/// ```
pub fn render<N: Clone + 'static>(text: &str, bindings: &Bindings<N>) -> Result<Output<N>, RenderError> {
    render_with_config(text, bindings, &RenderConfig::default())
}

/// Render a template with custom configuration
///
/// A template without any `{` is returned as [`Output::PassThrough`] without
/// being scanned. Otherwise every literal run and every placeholder becomes one
/// segment, in template order. The only error is a failing
/// [`Value::TryThunk`], which aborts the render.
///
/// # Example
///
/// ```rust
/// use variable_text::{render_with_config, render_plain, Bindings, Fragment, RenderConfig, Span};
///
/// let config = RenderConfig::new()
///     .on_missing(|name| Fragment::Text(format!("[missing: {}]", name)));
///
/// let bindings: Bindings<Span> = Bindings::new().with("name", "Traveler");
/// let output = render_with_config("Hello, {name}! Welcome to {location}.", &bindings, &config).unwrap();
/// assert_eq!(render_plain(&output), "Hello, Traveler! Welcome to [missing: location].");
/// ```
pub fn render_with_config<N: Clone>(
    text: &str,
    bindings: &Bindings<N>,
    config: &RenderConfig<N>,
) -> Result<Output<N>, RenderError> {
    if !text.contains('{') {
        return Ok(Output::PassThrough(text.to_string()));
    }

    let template = parse(text);
    let segments = template::substitute(&template, bindings, &config.default_style, &config.fallback)?;

    Ok(Output::Segments(segments))
}

/// Render a template and collect lint warnings
///
/// Warnings are only computed when `config.lint` is set; the output is the
/// same as [`render_with_config`] either way.
pub fn render_with_lint<N: Clone>(
    text: &str,
    bindings: &Bindings<N>,
    config: &RenderConfig<N>,
) -> Result<(Output<N>, Vec<LintWarning>), RenderError> {
    let output = render_with_config(text, bindings, config)?;

    let warnings = if config.lint {
        lint::check(text, bindings)
    } else {
        Vec::new()
    };

    Ok((output, warnings))
}
