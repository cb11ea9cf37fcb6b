//! Value resolution - turns a bound value into renderable content

use crate::error::RenderError;
use crate::value::{Fragment, Value};

/// Resolve the value bound to `name`
///
/// Nodes are cloned for this occurrence, thunks are called exactly once and
/// primitives are stringified. A failing [`Value::TryThunk`] is returned as
/// [`RenderError::Binding`] without any recovery.
pub fn resolve<N: Clone>(name: &str, value: &Value<N>) -> Result<Fragment<N>, RenderError> {
    match value {
        Value::Node(node) => Ok(Fragment::Node(node.clone())),
        Value::Thunk(f) => Ok(f()),
        Value::TryThunk(f) => f().map_err(|source| RenderError::Binding {
            name: name.to_string(),
            source,
        }),
        Value::Primitive(p) => Ok(Fragment::Text(p.to_string())),
    }
}
