//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the [`ProjectLayout`] built
//! from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `MODGEN_<SECTION>__<KEY>`
//! 3. Config file (`--config FILE`, or `.modgen.toml` when present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use modgen_core::domain::ProjectLayout;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".modgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where generated files go.
    pub layout: LayoutConfig,
    /// Registry file locations.
    pub registry: RegistryConfig,
    /// Page template location.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub routes_dir: String,
    pub admin_segment: String,
    pub modules_dir: String,
    pub module_extension: String,
    pub page_file: String,
    pub page_server_file: String,
    pub server_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub modules: PathBuf,
    pub pages: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            routes_dir: "src/routes".into(),
            admin_segment: "admin".into(),
            modules_dir: "src/lib/modules".into(),
            module_extension: "ts".into(),
            page_file: "+page.svelte".into(),
            page_server_file: "+page.server.ts".into(),
            server_file: "+server.ts".into(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            modules: PathBuf::from("src/lib/modules.json"),
            pages: PathBuf::from("src/lib/pages.json"),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("templates"),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default `.modgen.toml` is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file
            .cloned()
            .unwrap_or_else(Self::config_path);

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                config::Environment::with_prefix("MODGEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Project layout rooted at `root`.
    pub fn layout(&self, root: &Path) -> ProjectLayout {
        let l = &self.layout;
        ProjectLayout::new(root)
            .with_routes_dir(l.routes_dir.as_str())
            .with_admin_segment(l.admin_segment.as_str())
            .with_modules_dir(l.modules_dir.as_str())
            .with_module_extension(l.module_extension.as_str())
            .with_page_files(
                l.page_file.as_str(),
                l.page_server_file.as_str(),
                l.server_file.as_str(),
            )
    }

    pub fn modules_registry(&self, root: &Path) -> PathBuf {
        root.join(&self.registry.modules)
    }

    pub fn pages_registry(&self, root: &Path) -> PathBuf {
        root.join(&self.registry.pages)
    }

    pub fn templates_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.templates.dir)
    }

    /// Directory scanned for plugin manifests (the module definitions dir).
    pub fn plugins_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.layout.modules_dir)
    }
}
