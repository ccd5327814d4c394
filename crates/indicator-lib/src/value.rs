//! Loosely-typed option values coming from the command line or a TOML preset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A construction value before it is validated against a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    /// Interpret a command-line token: numbers first, then booleans, else text.
    ///
    /// - `"530e-9"` → `Value::Number(5.3e-7)`
    /// - `"true"` → `Value::Bool(true)`
    /// - `"green"` → `Value::Text("green")`
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(n) = s.parse::<f64>() {
            return Value::Number(n);
        }
        match s {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Text(s.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "\"{s}\""),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
