pub mod layout;
pub mod page;
pub mod plan;
pub mod plugin;
pub mod registry;
pub mod template;

pub use layout::ProjectLayout;
pub use page::PageRecord;
pub use plan::{FsEffect, Plan, PlanAction, RegistryUpdate};
pub use plugin::{AdminPlugin, NavEntry, PluginManifest, PluginRoute};
pub use registry::RegistryEntry;
pub use template::{RenderContext, TemplateKind};
