//! modgen core - module and page scaffolding for route-based web projects.
//!
//! This crate provides the domain and application layers, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            modgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ModuleService, PluginService)      │
//! │     plan → preview → confirm → apply    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │  Filesystem, Registry, TemplateStore,   │
//! │   TemplateRenderer, ManifestSource      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     modgen-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modgen_core::prelude::*;
//!
//! let service = ModuleService::new(layout, filesystem, modules, pages, templates, renderer);
//! let plan = service.plan_create_module("Widgets")?;
//! for line in plan.preview_lines(service.layout()) {
//!     println!("  • {line}");
//! }
//! let report = service.apply(&plan)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplyReport, ModuleService, PluginService,
        ports::{Filesystem, ManifestSource, Registry, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        AdminPlugin, FsEffect, ModuleName, PageRecord, PageRequest, PageSlug, Plan, PlanAction,
        PluginManifest, ProjectLayout, RegistryEntry, RegistryUpdate, RenderContext, TemplateKind,
        normalize,
    };
    pub use crate::error::{ModgenError, ModgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
