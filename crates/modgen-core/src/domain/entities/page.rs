use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ModuleName;

/// One entry of the page registry.
///
/// `path` is derived from `(module, page)` when the entry is written; it is
/// kept in the record so operators can read the registry without knowing the
/// layout rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub module: String,
    pub page: String,
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub auth: bool,
    #[serde(default)]
    pub has_page_server: bool,
    #[serde(default)]
    pub has_server: bool,
}

impl PageRecord {
    /// Whether `other` has the same `(module, page, path)` identity.
    pub fn same_key(&self, other: &PageRecord) -> bool {
        self.module == other.module && self.page == other.page && self.path == other.path
    }

    pub fn belongs_to(&self, module: &ModuleName) -> bool {
        self.module == module.as_str()
    }
}

/// Insert `entry`, or overwrite the entry with the same key in place.
pub fn upsert_page(pages: &mut Vec<PageRecord>, entry: PageRecord) {
    match pages.iter_mut().find(|p| p.same_key(&entry)) {
        Some(existing) => *existing = entry,
        None => pages.push(entry),
    }
}

/// Remove every page owned by `module`.
pub fn drop_module_pages(pages: &mut Vec<PageRecord>, module: &ModuleName) {
    pages.retain(|p| !p.belongs_to(module));
}

/// Move every page of `from` to `to`, rewriting the module segment of its path.
pub fn rename_module_pages(
    pages: &mut [PageRecord],
    routes_prefix: &str,
    from: &ModuleName,
    to: &ModuleName,
) {
    for page in pages.iter_mut().filter(|p| p.belongs_to(from)) {
        page.module = to.as_str().to_string();
        page.path = rewrite_module_segment(&page.path, routes_prefix, from.as_str(), to.as_str());
    }
}

/// Replace the module segment of a registry path.
///
/// The module segment is the one directly after `routes_prefix`. Paths that do
/// not start with the prefix (hand-edited entries) fall back to the first
/// segment equal to `old`. Segments that merely *contain* `old` are never
/// touched, so `src/routes/shop/shopping-cart` renames cleanly. Both `/` and
/// `\` separate segments, and the separators of `path` are kept as written.
pub fn rewrite_module_segment(path: &str, routes_prefix: &str, old: &str, new: &str) -> String {
    const SEPARATORS: [char; 2] = ['/', '\\'];

    let segments: Vec<&str> = path.split(SEPARATORS).collect();
    let prefix: Vec<&str> = routes_prefix
        .split(SEPARATORS)
        .filter(|s| !s.is_empty())
        .collect();

    let leading = segments.starts_with(&prefix) && segments.get(prefix.len()) == Some(&old);
    let index = if leading {
        Some(prefix.len())
    } else {
        segments.iter().position(|s| *s == old)
    };

    let Some(i) = index else {
        return path.to_string();
    };
    // Separators are one byte each.
    let start: usize = segments[..i].iter().map(|s| s.len() + 1).sum();
    format!("{}{new}{}", &path[..start], &path[start + old.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(module: &str, page: &str, path: &str) -> PageRecord {
        PageRecord {
            module: module.into(),
            page: page.into(),
            path: path.into(),
            description: String::new(),
            auth: false,
            has_page_server: false,
            has_server: false,
        }
    }

    fn name(s: &str) -> ModuleName {
        ModuleName::parse(s).unwrap()
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(record("a", "index", "src/routes/a")).unwrap();
        assert!(json.get("hasPageServer").is_some());
        assert!(json.get("hasServer").is_some());
        assert!(json.get("has_server").is_none());
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut pages = vec![
            record("a", "index", "src/routes/a"),
            record("b", "index", "src/routes/b"),
            record("c", "index", "src/routes/c"),
        ];
        let mut updated = record("b", "index", "src/routes/b");
        updated.description = "changed".into();

        upsert_page(&mut pages, updated);

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].description, "changed");
        assert_eq!(pages[0].module, "a");
        assert_eq!(pages[2].module, "c");
    }

    #[test]
    fn upsert_appends_new_key() {
        let mut pages = vec![record("a", "index", "src/routes/a")];
        upsert_page(&mut pages, record("a", "list", "src/routes/a/list"));
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].page, "list");
    }

    #[test]
    fn drop_removes_only_owned_pages() {
        let mut pages = vec![
            record("a", "index", "src/routes/a"),
            record("ab", "index", "src/routes/ab"),
            record("a", "list", "src/routes/a/list"),
        ];
        drop_module_pages(&mut pages, &name("a"));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].module, "ab");
    }

    #[test]
    fn rewrite_touches_only_module_segment() {
        assert_eq!(
            rewrite_module_segment(
                "src/routes/widgets/widgets-report",
                "src/routes",
                "widgets",
                "gadgets"
            ),
            "src/routes/gadgets/widgets-report"
        );
        assert_eq!(
            rewrite_module_segment("src/routes/shop/shop", "src/routes", "shop", "store"),
            "src/routes/store/shop"
        );
    }

    #[test]
    fn rewrite_falls_back_for_foreign_prefix() {
        assert_eq!(
            rewrite_module_segment("app/widgets/list", "src/routes", "widgets", "gadgets"),
            "app/gadgets/list"
        );
        assert_eq!(
            rewrite_module_segment("app/other/list", "src/routes", "widgets", "gadgets"),
            "app/other/list"
        );
    }

    #[test]
    fn rewrite_accepts_backslash_paths() {
        assert_eq!(
            rewrite_module_segment(
                r"src\routes\widgets\widgets-report",
                "src/routes",
                "widgets",
                "gadgets"
            ),
            r"src\routes\gadgets\widgets-report"
        );
        assert_eq!(
            rewrite_module_segment(r"src\routes\widgets", "src/routes", "widgets", "gadgets"),
            r"src\routes\gadgets"
        );
    }

    #[test]
    fn rename_rewrites_module_and_path() {
        let mut pages = vec![
            record("widgets", "index", "src/routes/widgets"),
            record("routes", "index", "src/routes/routes"),
            record("widgets", "activity", "src/routes/widgets/activity"),
        ];

        rename_module_pages(&mut pages, "src/routes", &name("widgets"), &name("gadgets"));

        assert_eq!(pages[0].module, "gadgets");
        assert_eq!(pages[0].path, "src/routes/gadgets");
        assert_eq!(pages[1].path, "src/routes/routes");
        assert_eq!(pages[2].path, "src/routes/gadgets/activity");
    }

    #[test]
    fn missing_flags_default_to_false() {
        let json = r#"{"module":"a","page":"index","path":"src/routes/a"}"#;
        let rec: PageRecord = serde_json::from_str(json).unwrap();
        assert!(!rec.auth && !rec.has_server && !rec.has_page_server);
    }
}
