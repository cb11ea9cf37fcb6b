//! Fallback policy for placeholders with no binding

use std::fmt;
use std::sync::Arc;

use crate::value::Fragment;

/// Produces the content for an unbound placeholder from its name
///
/// The function should depend on the name only, so that rendering stays
/// deterministic.
pub struct Fallback<N> {
    handler: Arc<dyn Fn(&str) -> Fragment<N> + Send + Sync>,
}

impl<N> Fallback<N> {
    /// Use `f` for every unbound placeholder
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> Fragment<N> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(f),
        }
    }

    /// Re-emit the placeholder unchanged as `{name}`
    pub fn keep() -> Self
    where
        N: 'static,
    {
        Self::new(|name| Fragment::Text(format!("{{{}}}", name)))
    }

    /// Render unbound placeholders as empty text
    pub fn blank() -> Self
    where
        N: 'static,
    {
        Self::new(|_| Fragment::Text(String::new()))
    }

    pub fn call(&self, name: &str) -> Fragment<N> {
        (self.handler)(name)
    }
}

impl<N: 'static> Default for Fallback<N> {
    fn default() -> Self {
        Self::keep()
    }
}

impl<N> Clone for Fallback<N> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<N> fmt::Debug for Fallback<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fallback(..)")
    }
}
