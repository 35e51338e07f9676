//! Placeholder renderer built on `regex`.

use std::sync::LazyLock;

use modgen_core::{application::ports::TemplateRenderer, domain::RenderContext};
use regex::{Captures, Regex};
use tracing::trace;

static CONDITIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{#if\s+([\w.]+)\}\}(.*?)\{\{/if\}\}").expect("conditional pattern")
});

static INTERPOLATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([\w.]+)\s*\}\}").expect("interpolation pattern"));

/// Renders `{{#if key}}...{{/if}}` blocks, then `{{key}}` placeholders.
///
/// One pass each: a block's body is not searched for nested blocks, and text
/// produced by interpolation is not interpolated again.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for SimpleRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> String {
        let blocks = CONDITIONAL.replace_all(template, |caps: &Captures| {
            if context.is_truthy(&caps[1]) {
                caps[2].to_string()
            } else {
                String::new()
            }
        });

        let out = INTERPOLATION.replace_all(&blocks, |caps: &Captures| context.text(&caps[1]));
        trace!(input = template.len(), output = out.len(), "Rendered template");
        out.into_owned()
    }
}
