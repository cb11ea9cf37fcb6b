//! Binding values and the name → value lookup
//!
//! A placeholder is bound to one of a closed set of [`Value`] variants. The
//! node type `N` belongs to the caller's display layer; this module never
//! looks inside it.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::sync::Arc;

use crate::error::BoxError;

/// Lazily evaluated binding
pub type Thunk<N> = Arc<dyn Fn() -> Fragment<N> + Send + Sync>;

/// Lazily evaluated binding that may fail
pub type TryThunk<N> = Arc<dyn Fn() -> Result<Fragment<N>, BoxError> + Send + Sync>;

/// Renderable content: plain text or a display-layer node
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<N> {
    Text(String),
    Node(N),
}

impl<N> Fragment<N> {
    /// Wrap a display-layer node
    pub fn node(node: N) -> Self {
        Fragment::Node(node)
    }

    /// The text, if this fragment is plain text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::Node(_) => None,
        }
    }

    /// The node, if this fragment is a display-layer node
    pub fn as_node(&self) -> Option<&N> {
        match self {
            Fragment::Text(_) => None,
            Fragment::Node(node) => Some(node),
        }
    }
}

impl<N> From<&str> for Fragment<N> {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl<N> From<String> for Fragment<N> {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

/// Scalar binding value, stringified at render time
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Str(s) => f.write_str(s),
            Primitive::Int(n) => write!(f, "{}", n),
            Primitive::Float(x) => {
                if x.is_infinite() {
                    f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
                } else if *x == 0.0 {
                    // -0 prints as 0
                    f.write_str("0")
                } else if x.abs() >= 1e21 || x.abs() < 1e-6 {
                    // exponent form keeps an explicit sign: 1e+21, 1.5e-7
                    let exp = format!("{:e}", x);
                    match exp.split_once('e') {
                        Some((mantissa, power)) if !power.starts_with('-') => {
                            write!(f, "{}e+{}", mantissa, power)
                        }
                        _ => f.write_str(&exp),
                    }
                } else {
                    write!(f, "{}", x)
                }
            }
            Primitive::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Value bound to a placeholder name
pub enum Value<N> {
    /// Pre-rendered node, emitted as-is at every occurrence
    Node(N),
    /// Function evaluated once per occurrence
    Thunk(Thunk<N>),
    /// Fallible function evaluated once per occurrence; its error aborts the render
    TryThunk(TryThunk<N>),
    /// Scalar converted to its display string
    Primitive(Primitive),
}

impl<N> Value<N> {
    pub fn node(node: N) -> Self {
        Value::Node(node)
    }

    pub fn thunk<F, R>(f: F) -> Self
    where
        N: 'static,
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<Fragment<N>> + 'static,
    {
        Value::Thunk(Arc::new(move || -> Fragment<N> { f().into() }))
    }

    pub fn try_thunk<F, R, E>(f: F) -> Self
    where
        N: 'static,
        F: Fn() -> Result<R, E> + Send + Sync + 'static,
        R: Into<Fragment<N>> + 'static,
        E: Into<BoxError> + 'static,
    {
        Value::TryThunk(Arc::new(move || -> Result<Fragment<N>, BoxError> {
            f().map(Into::into).map_err(Into::into)
        }))
    }
}

impl<N: Clone> Clone for Value<N> {
    fn clone(&self) -> Self {
        match self {
            Value::Node(node) => Value::Node(node.clone()),
            Value::Thunk(f) => Value::Thunk(Arc::clone(f)),
            Value::TryThunk(f) => Value::TryThunk(Arc::clone(f)),
            Value::Primitive(p) => Value::Primitive(p.clone()),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Value<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Value::Thunk(_) => f.write_str("Thunk(..)"),
            Value::TryThunk(_) => f.write_str("TryThunk(..)"),
            Value::Primitive(p) => f.debug_tuple("Primitive").field(p).finish(),
        }
    }
}

impl<N> From<Primitive> for Value<N> {
    fn from(p: Primitive) -> Self {
        Value::Primitive(p)
    }
}

impl<N> From<&str> for Value<N> {
    fn from(s: &str) -> Self {
        Value::Primitive(Primitive::Str(s.to_string()))
    }
}

impl<N> From<String> for Value<N> {
    fn from(s: String) -> Self {
        Value::Primitive(Primitive::Str(s))
    }
}

impl<N> From<i32> for Value<N> {
    fn from(n: i32) -> Self {
        Value::Primitive(Primitive::Int(n.into()))
    }
}

impl<N> From<i64> for Value<N> {
    fn from(n: i64) -> Self {
        Value::Primitive(Primitive::Int(n))
    }
}

impl<N> From<u32> for Value<N> {
    fn from(n: u32) -> Self {
        Value::Primitive(Primitive::Int(n.into()))
    }
}

impl<N> From<f64> for Value<N> {
    fn from(x: f64) -> Self {
        Value::Primitive(Primitive::Float(x))
    }
}

impl<N> From<bool> for Value<N> {
    fn from(b: bool) -> Self {
        Value::Primitive(Primitive::Bool(b))
    }
}

/// Placeholder name → value lookup
///
/// Names are unique and matched by exact string equality. Iteration is in name
/// order.
pub struct Bindings<N> {
    values: BTreeMap<String, Value<N>>,
}

impl<N> Default for Bindings<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Bindings<N> {
    /// Create an empty set of bindings
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Add a binding, replacing any previous value for `name`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value<N>>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a node binding
    pub fn with_node(self, name: impl Into<String>, node: N) -> Self {
        self.with(name, Value::Node(node))
    }

    /// Insert a binding, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value<N>>) -> Option<Value<N>> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value<N>> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bound names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value<N>> {
        self.values.iter()
    }

    /// Move every binding of `other` into `self`, overriding duplicates
    pub fn extend(&mut self, other: Bindings<N>) {
        self.values.extend(other.values);
    }
}

impl<N: Clone> Clone for Bindings<N> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Bindings<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

impl<N, K, V> FromIterator<(K, V)> for Bindings<N>
where
    K: Into<String>,
    V: Into<Value<N>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}
