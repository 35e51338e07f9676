//! Application services - orchestrate use cases.
//!
//! Services load registry snapshots, hand them to the domain planners, and
//! execute confirmed plans through the ports.

pub mod module_service;
pub mod plugin_service;

pub use module_service::{ApplyReport, ModuleService};
pub use plugin_service::PluginService;
