//! Error types for rendering

use thiserror::Error;

/// Boxed error returned by fallible binding functions
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while rendering a template
///
/// Missing placeholders and malformed braces are never errors; the only failure
/// is a binding function that reports one.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A fallible binding function failed
    #[error("binding '{name}' failed: {source}")]
    Binding {
        name: String,
        #[source]
        source: BoxError,
    },
}

impl RenderError {
    /// Name of the placeholder whose binding failed
    pub fn name(&self) -> &str {
        match self {
            RenderError::Binding { name, .. } => name,
        }
    }
}
