//! Template identities and render data.
//!
//! ## Template syntax
//!
//! Templates are opaque text with two placeholder kinds:
//!
//! | Placeholder               | Effect                                         |
//! |---------------------------|------------------------------------------------|
//! | `{{#if key}}...{{/if}}`   | block kept iff `key` is truthy, else removed   |
//! | `{{key.subkey}}`          | dotted lookup, rendered as text, `""` if null  |
//!
//! Conditional blocks do not nest and have no `else`. Unknown keys are never
//! an error: they are falsy in conditions and empty in interpolation.

use std::fmt;

use serde_json::{Map, Value};

/// The named page templates an operator can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// The page markup, always rendered.
    Page,
    /// Page-level server actions/load.
    PageServer,
    /// Route-level server endpoint.
    Server,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Page, Self::PageServer, Self::Server];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::PageServer => "page-server",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data a template is rendered against.
///
/// A JSON object so that dotted keys can reach into nested values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    data: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a top-level value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Resolve a dotted key (`a.b.c`). Missing paths resolve to `None`.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let first = self.data.get(parts.next()?)?;
        parts.try_fold(first, |value, part| match value {
            Value::Object(map) => map.get(part),
            Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Truthiness of a key: `false`, `null`, `0`, `""` and missing are falsy.
    pub fn is_truthy(&self, key: &str) -> bool {
        match self.lookup(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// Text form of a key: strings verbatim, `""` for missing or null.
    pub fn text(&self, key: &str) -> String {
        match self.lookup(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Map<String, Value>> for RenderContext {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested() -> RenderContext {
        match json!({
            "module": "widgets",
            "meta": { "owner": { "name": "ops" }, "count": 0 },
            "tags": ["a", "b"],
            "auth": true,
            "empty": "",
            "none": null
        }) {
            Value::Object(map) => RenderContext::from(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn dotted_lookup_reaches_nested_values() {
        let ctx = nested();
        assert_eq!(ctx.text("meta.owner.name"), "ops");
        assert_eq!(ctx.text("tags.1"), "b");
        assert_eq!(ctx.text("meta.missing.deeper"), "");
    }

    #[test]
    fn scalars_render_as_text() {
        let ctx = nested();
        assert_eq!(ctx.text("auth"), "true");
        assert_eq!(ctx.text("meta.count"), "0");
        assert_eq!(ctx.text("none"), "");
    }

    #[test]
    fn truthiness_follows_loose_rules() {
        let ctx = nested();
        assert!(ctx.is_truthy("auth"));
        assert!(ctx.is_truthy("module"));
        assert!(ctx.is_truthy("tags"));
        assert!(!ctx.is_truthy("meta.count"));
        assert!(!ctx.is_truthy("empty"));
        assert!(!ctx.is_truthy("none"));
        assert!(!ctx.is_truthy("nope"));
    }

    #[test]
    fn builder_overwrites_keys() {
        let ctx = RenderContext::new().with("auth", true).with("auth", false);
        assert!(!ctx.is_truthy("auth"));
    }
}
