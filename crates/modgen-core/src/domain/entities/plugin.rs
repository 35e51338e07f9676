use serde::{Deserialize, Serialize};

/// A plugin's `manifest.json`, as published next to its module definition.
///
/// Read-only: modgen never writes manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub routes: Vec<PluginRoute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRoute {
    pub path: String,
    pub entry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<NavEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
}

impl PluginRoute {
    pub fn is_admin(&self) -> bool {
        self.nav.as_ref().and_then(|n| n.admin).unwrap_or(false)
    }
}

/// A plugin together with the routes it exposes in the admin area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPlugin {
    pub manifest: PluginManifest,
    pub admin_routes: Vec<PluginRoute>,
}

impl AdminPlugin {
    /// Admin URL of each admin route, paired with its nav label.
    pub fn admin_links(&self) -> Vec<(String, String)> {
        self.admin_routes
            .iter()
            .map(|r| {
                let label = r.nav.as_ref().map(|n| n.label.clone()).unwrap_or_default();
                (to_admin_path(&self.manifest.name, &r.path), label)
            })
            .collect()
    }
}

/// Keep plugins that declare at least one admin route.
pub fn admin_plugins(manifests: Vec<PluginManifest>) -> Vec<AdminPlugin> {
    manifests
        .into_iter()
        .filter_map(|manifest| {
            let admin_routes: Vec<_> = manifest
                .routes
                .iter()
                .filter(|r| r.is_admin())
                .cloned()
                .collect();
            (!admin_routes.is_empty()).then_some(AdminPlugin {
                manifest,
                admin_routes,
            })
        })
        .collect()
}

/// `/admin/<plugin>` followed by `path` with any leading `/admin` removed.
pub fn to_admin_path(plugin: &str, path: &str) -> String {
    let rest = path.strip_prefix("/admin").unwrap_or(path);
    format!("/admin/{plugin}{rest}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVENTORY: &str = r#"{
        "name": "inventory",
        "label": "Inventory",
        "icon": "box",
        "version": "1.0.0",
        "routes": [
            { "path": "/inventory", "entry": "index.svelte", "nav": { "label": "Inventory" } },
            { "path": "/admin/settings", "entry": "settings.svelte",
              "nav": { "label": "Settings", "admin": true } }
        ]
    }"#;

    const BLOG: &str = r#"{
        "name": "blog",
        "label": "Blog",
        "icon": "pen",
        "version": "0.2.0",
        "routes": [ { "path": "/blog", "entry": "index.svelte" } ]
    }"#;

    #[test]
    fn keeps_only_plugins_with_admin_routes() {
        let manifests = vec![
            serde_json::from_str(INVENTORY).unwrap(),
            serde_json::from_str(BLOG).unwrap(),
        ];

        let plugins = admin_plugins(manifests);

        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins[0].manifest.name, "inventory");
        assert_eq!(plugins[0].admin_routes.len(), 1);
        assert_eq!(plugins[0].admin_routes[0].path, "/admin/settings");
    }

    #[test]
    fn builds_admin_paths() {
        assert_eq!(
            to_admin_path("inventory", "/admin/settings"),
            "/admin/inventory/settings"
        );
        assert_eq!(to_admin_path("inventory", "/reports"), "/admin/inventory/reports");
    }

    #[test]
    fn admin_links_pair_path_and_label() {
        let plugins = admin_plugins(vec![serde_json::from_str(INVENTORY).unwrap()]);
        assert_eq!(
            plugins[0].admin_links(),
            vec![("/admin/inventory/settings".to_string(), "Settings".to_string())]
        );
    }
}
