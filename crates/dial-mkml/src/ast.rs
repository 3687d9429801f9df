// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"stopwatch"`
    Str(String),
    /// Numeric literal: `120` or `64.5`
    Number(f64),
    /// Color literal as straight-alpha `[r, g, b, a]` bytes.
    Color([u8; 4]),
    /// `true` / `false`
    Bool(bool),
    /// Unquoted identifier: enum variants such as `clock` or `stopwatch`.
    Ident(String),
}

impl Value {
    /// Textual form, matching how the value would read as an HTML attribute.
    pub fn as_attribute(&self) -> String {
        match self {
            Value::Str(s) | Value::Ident(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Color([r, g, b, a]) => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a widget block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based line of the key, for diagnostics.
    pub line: usize,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A widget declaration.
///
/// ```mkml
/// AnalogClock "kitchen" {
///     size: 120
///     mode: stopwatch
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Widget type name: `"AnalogClock"`.
    pub widget: String,
    /// Optional inline string content, used as the instance name.
    pub content: Option<String>,
    pub props: Vec<Prop>,
    /// 1-based line of the widget name.
    pub line: usize,
}

impl Node {
    /// Look up a property value by key. The last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f64` if it is a `Number`.
    pub fn prop_f64(&self, key: &str) -> Option<f64> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get a property as `bool` if it is a `Bool`.
    pub fn prop_bool(&self, key: &str) -> Option<bool> {
        match self.prop(key)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// The top-level parse result for a `.mkml` source file: one or more widget
/// declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}
