//! Configuration for HTML rendering

/// Configuration options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Prefix for CSS class names (e.g., "vt-" for "vt-literal")
    pub class_prefix: Option<String>,

    /// Whether to emit the positional key as a `data-key` attribute
    pub keys: bool,

    /// Whether to wrap the whole output in a single `<span>`
    pub wrap: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            class_prefix: Some("vt-".to_string()),
            keys: true,
            wrap: true,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set whether segment keys are emitted
    pub fn with_keys(mut self, keys: bool) -> Self {
        self.keys = keys;
        self
    }

    /// Set whether the output is wrapped in a root element
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}
