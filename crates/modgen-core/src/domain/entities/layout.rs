use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ModuleName, PageSlug};

/// Where generated artifacts live inside a project.
///
/// All configured directories are relative to `root`. Methods returning
/// `PathBuf` give paths joined onto the root, ready for the filesystem port;
/// [`ProjectLayout::record_path`] gives the root-relative, `/`-separated form
/// stored in the page registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    routes_dir: String,
    admin_segment: String,
    modules_dir: String,
    module_extension: String,
    page_file: String,
    page_server_file: String,
    server_file: String,
}

impl ProjectLayout {
    /// SvelteKit-style layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            routes_dir: "src/routes".into(),
            admin_segment: "admin".into(),
            modules_dir: "src/lib/modules".into(),
            module_extension: "ts".into(),
            page_file: "+page.svelte".into(),
            page_server_file: "+page.server.ts".into(),
            server_file: "+server.ts".into(),
        }
    }

    pub fn with_routes_dir(mut self, dir: impl Into<String>) -> Self {
        self.routes_dir = trim_slashes(dir.into());
        self
    }

    pub fn with_admin_segment(mut self, segment: impl Into<String>) -> Self {
        self.admin_segment = trim_slashes(segment.into());
        self
    }

    pub fn with_modules_dir(mut self, dir: impl Into<String>) -> Self {
        self.modules_dir = trim_slashes(dir.into());
        self
    }

    pub fn with_module_extension(mut self, ext: impl Into<String>) -> Self {
        self.module_extension = ext.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_page_files(
        mut self,
        page: impl Into<String>,
        page_server: impl Into<String>,
        server: impl Into<String>,
    ) -> Self {
        self.page_file = page.into();
        self.page_server_file = page_server.into();
        self.server_file = server.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn admin_segment(&self) -> &str {
        &self.admin_segment
    }

    /// Root-relative routes directory, `/`-separated (e.g. `src/routes`).
    pub fn routes_prefix(&self) -> &str {
        &self.routes_dir
    }

    // ── module-level paths ──────────────────────────────────────────────────

    pub fn module_routes(&self, module: &ModuleName) -> PathBuf {
        self.routes_root().join(module.as_str())
    }

    pub fn admin_routes(&self, module: &ModuleName) -> PathBuf {
        self.routes_root()
            .join(&self.admin_segment)
            .join(module.as_str())
    }

    pub fn definition_file(&self, module: &ModuleName) -> PathBuf {
        self.root.join(&self.modules_dir).join(format!(
            "{}.{}",
            module.as_str(),
            self.module_extension
        ))
    }

    // ── page-level paths ────────────────────────────────────────────────────

    /// Directory holding a page's files; `index` maps to the module root.
    pub fn page_dir(&self, module: &ModuleName, page: &PageSlug) -> PathBuf {
        let mut dir = self.module_routes(module);
        if !page.is_index() {
            dir.extend(page.segments());
        }
        dir
    }

    pub fn page_file(&self, dir: &Path) -> PathBuf {
        dir.join(&self.page_file)
    }

    pub fn page_server_file(&self, dir: &Path) -> PathBuf {
        dir.join(&self.page_server_file)
    }

    pub fn server_file(&self, dir: &Path) -> PathBuf {
        dir.join(&self.server_file)
    }

    /// Registry form of a page's route path, e.g. `src/routes/widgets/activity`.
    pub fn record_path(&self, module: &ModuleName, page: &PageSlug) -> String {
        let mut path = format!("{}/{}", self.routes_dir, module);
        if !page.is_index() {
            path.push('/');
            path.push_str(page.as_str());
        }
        path
    }

    /// Path shown to the operator: relative to the root when possible.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn routes_root(&self) -> PathBuf {
        self.root.join(&self.routes_dir)
    }
}

fn trim_slashes(value: String) -> String {
    value.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> ModuleName {
        ModuleName::parse(name).unwrap()
    }

    #[test]
    fn default_layout_paths() {
        let layout = ProjectLayout::new("/proj");
        let m = module("widgets");

        assert_eq!(layout.module_routes(&m), PathBuf::from("/proj/src/routes/widgets"));
        assert_eq!(
            layout.admin_routes(&m),
            PathBuf::from("/proj/src/routes/admin/widgets")
        );
        assert_eq!(
            layout.definition_file(&m),
            PathBuf::from("/proj/src/lib/modules/widgets.ts")
        );
    }

    #[test]
    fn index_page_maps_to_module_root() {
        let layout = ProjectLayout::new("/proj");
        let m = module("widgets");

        assert_eq!(
            layout.page_dir(&m, &PageSlug::index()),
            layout.module_routes(&m)
        );
        assert_eq!(layout.record_path(&m, &PageSlug::index()), "src/routes/widgets");
    }

    #[test]
    fn nested_page_paths() {
        let layout = ProjectLayout::new("/proj");
        let m = module("widgets");
        let page = PageSlug::parse("reports/[id]").unwrap();

        assert_eq!(
            layout.page_dir(&m, &page),
            PathBuf::from("/proj/src/routes/widgets/reports/[id]")
        );
        assert_eq!(layout.record_path(&m, &page), "src/routes/widgets/reports/[id]");
    }

    #[test]
    fn builder_overrides_trim_separators() {
        let layout = ProjectLayout::new("/proj")
            .with_routes_dir("/app/routes/")
            .with_module_extension(".js");
        let m = module("widgets");

        assert_eq!(layout.routes_prefix(), "app/routes");
        assert!(layout.definition_file(&m).ends_with("widgets.js"));
    }

    #[test]
    fn display_strips_root() {
        let layout = ProjectLayout::new("/proj");
        let shown = layout.display(Path::new("/proj/src/routes/widgets"));
        assert_eq!(shown, "src/routes/widgets");
    }
}
