//! Domain value objects: normalized identifiers.
//!
//! # Design
//!
//! Every name an operator types goes through [`normalize`] before it touches
//! the filesystem or a registry. The wrappers here ([`ModuleName`],
//! [`PageSlug`]) exist so that a raw, un-normalized string can never be passed
//! where a slug is expected.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const SEPARATOR: char = '-';

// ── normalize ────────────────────────────────────────────────────────────────

/// Convert free-form text into a filesystem-and-route-safe slug.
///
/// The input is split on `/` and empty segments are dropped. A segment wrapped
/// in `[` `]` is a route parameter: its inner text is normalized and the
/// brackets are put back. Within a segment:
///
/// - a lowercase letter followed by an uppercase letter gets a separator
///   between them (`userList` -> `user-list`),
/// - whitespace, `_` and every other character outside `[A-Za-z0-9-]` become a
///   separator,
/// - runs of separators collapse into one,
/// - the result is lowercased.
///
/// The function is idempotent. An empty result means the input held nothing
/// usable; callers must reject it.
///
/// ```
/// use modgen_core::domain::normalize;
///
/// assert_eq!(normalize("User List"), "user-list");
/// assert_eq!(normalize("Some/[ID Value]/Thing"), "some/[id-value]/thing");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.split('/')
        .filter(|segment| !segment.is_empty())
        .map(normalize_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn normalize_segment(segment: &str) -> String {
    match param_inner(segment) {
        Some(inner) => format!("[{}]", kebab(inner)),
        None => kebab(segment),
    }
}

/// Inner text of a `[param]` segment, if the segment is one.
fn param_inner(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
}

/// Whether a normalized segment keeps a letter or digit inside any brackets.
fn has_content(segment: &str) -> bool {
    param_inner(segment)
        .unwrap_or(segment)
        .chars()
        .any(|c| c.is_ascii_alphanumeric())
}

fn kebab(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        if prev.is_some_and(|p| p.is_ascii_lowercase()) && ch.is_ascii_uppercase() {
            push_separator(&mut out);
        }

        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else {
            push_separator(&mut out);
        }

        prev = Some(ch);
    }

    out
}

fn push_separator(out: &mut String) {
    if !out.ends_with(SEPARATOR) {
        out.push(SEPARATOR);
    }
}

// ── ModuleName ───────────────────────────────────────────────────────────────

/// Normalized name of a module.
///
/// Always a single, non-parameter path segment holding at least one letter or
/// digit. Deserializing goes through [`ModuleName::parse`], so a hand-edited
/// registry cannot smuggle in an un-normalized name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl ModuleName {
    /// Normalize `raw` into a module name.
    ///
    /// Surrounding whitespace is trimmed first so that a stray space in a
    /// prompt does not turn into a leading separator.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let slug = normalize(raw.trim());

        if !has_content(&slug) {
            return Err(DomainError::EmptyIdentifier {
                field: "module name",
            });
        }
        if slug.contains('/') {
            return Err(DomainError::InvalidModuleName {
                name: slug,
                reason: "a module name cannot contain '/'".into(),
            });
        }
        if param_inner(&slug).is_some() {
            return Err(DomainError::InvalidModuleName {
                name: slug,
                reason: "a module name cannot be a [parameter] segment".into(),
            });
        }

        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleName {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── PageSlug ─────────────────────────────────────────────────────────────────

/// Normalized route of a page inside its module.
///
/// May span several segments (`settings/advanced`) and contain parameters
/// (`[id]`). The slug `index` is the module's own root page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSlug(String);

impl PageSlug {
    pub const INDEX: &'static str = "index";

    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let slug = normalize(raw.trim());
        if slug.is_empty() || !slug.split('/').all(has_content) {
            return Err(DomainError::EmptyIdentifier { field: "page name" });
        }
        Ok(Self(slug))
    }

    /// The root page of a module.
    pub fn index() -> Self {
        Self(Self::INDEX.to_string())
    }

    pub fn is_index(&self) -> bool {
        self.0 == Self::INDEX
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments of the slug, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for PageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_plain_words() {
        assert_eq!(normalize("User List"), "user-list");
        assert_eq!(normalize("Widgets"), "widgets");
        assert_eq!(normalize("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn splits_camel_case_boundaries() {
        assert_eq!(normalize("userList"), "user-list");
        assert_eq!(normalize("aBcD"), "a-bc-d");
        // Only lower -> upper is a boundary; runs of capitals stay together.
        assert_eq!(normalize("HTMLPage"), "htmlpage");
    }

    #[test]
    fn preserves_parameter_brackets() {
        assert_eq!(normalize("Some/[ID Value]/Thing"), "some/[id-value]/thing");
        assert_eq!(normalize("[userId]"), "[user-id]");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(normalize("a  --  b"), "a-b");
        assert_eq!(normalize("a__b"), "a-b");
        assert_eq!(normalize("v1.2!"), "v1-2-");
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(normalize("//reports///daily/"), "reports/daily");
        assert_eq!(normalize("///"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn replaces_non_ascii() {
        assert_eq!(normalize("café menu"), "caf-menu");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "User List",
            "Some/[ID Value]/Thing",
            "  padded  ",
            "aBcD_eF gh",
            "[[nested]]",
            "x[",
            "[]",
            "-a-/-b-",
            "Ünïcödé Wörds",
            "already-kebab/[id]",
            "a.b.c/d..e",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn module_name_trims_and_normalizes() {
        let name = ModuleName::parse("  My Widgets ").unwrap();
        assert_eq!(name.as_str(), "my-widgets");
    }

    #[test]
    fn module_name_rejects_empty() {
        assert_eq!(
            ModuleName::parse("   "),
            Err(DomainError::EmptyIdentifier {
                field: "module name"
            })
        );
        assert!(ModuleName::parse("///").is_err());
    }

    #[test]
    fn punctuation_only_is_empty() {
        for raw in ["!!!", "-", "[ ]", "--/--"] {
            assert_eq!(
                ModuleName::parse(raw),
                Err(DomainError::EmptyIdentifier {
                    field: "module name"
                }),
                "{raw:?}"
            );
            assert_eq!(
                PageSlug::parse(raw),
                Err(DomainError::EmptyIdentifier { field: "page name" }),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn page_slug_rejects_any_blank_segment() {
        assert!(PageSlug::parse("reports/!!!").is_err());
        assert!(PageSlug::parse("reports/[?]").is_err());
        assert_eq!(PageSlug::parse("reports/[id]").unwrap().as_str(), "reports/[id]");
    }

    #[test]
    fn module_name_deserializes_through_parse() {
        let name: ModuleName = serde_json::from_str("\"Stock Items\"").unwrap();
        assert_eq!(name.as_str(), "stock-items");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"stock-items\"");

        assert!(serde_json::from_str::<ModuleName>("\"a/b\"").is_err());
        assert!(serde_json::from_str::<ModuleName>("\"!!!\"").is_err());
    }

    #[test]
    fn module_name_rejects_nested_and_params() {
        assert!(matches!(
            ModuleName::parse("a/b"),
            Err(DomainError::InvalidModuleName { .. })
        ));
        assert!(matches!(
            ModuleName::parse("[id]"),
            Err(DomainError::InvalidModuleName { .. })
        ));
    }

    #[test]
    fn module_names_order_lexicographically() {
        let mut names = vec![
            ModuleName::parse("zeta").unwrap(),
            ModuleName::parse("alpha").unwrap(),
        ];
        names.sort();
        assert_eq!(names[0].as_str(), "alpha");
    }

    #[test]
    fn page_slug_keeps_nested_segments() {
        let slug = PageSlug::parse("Settings/Advanced").unwrap();
        assert_eq!(slug.as_str(), "settings/advanced");
        assert_eq!(slug.segments().collect::<Vec<_>>(), ["settings", "advanced"]);
        assert!(!slug.is_index());
        assert!(PageSlug::parse("Index").unwrap().is_index());
    }

    #[test]
    fn page_slug_rejects_empty() {
        assert!(matches!(
            PageSlug::parse(" / "),
            Err(DomainError::EmptyIdentifier { field: "page name" })
        ));
    }
}
