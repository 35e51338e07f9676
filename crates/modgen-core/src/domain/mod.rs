//! Core domain layer for modgen.
//!
//! Pure logic only: identifiers, layout rules, registry entry shapes and the
//! planners that turn a request into a [`Plan`]. All I/O happens behind the
//! ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: planners receive registry snapshots and rendered content
//! - **No async**: everything is synchronous
//! - **Immutable plans**: a [`Plan`] is built once and then only read

pub mod entities;
pub mod error;
pub mod planning;
pub mod skeleton;
pub mod value_objects;

mod validation;

pub use entities::{
    layout::ProjectLayout,
    page::PageRecord,
    plan::{FsEffect, Plan, PlanAction, RegistryUpdate},
    plugin::{AdminPlugin, NavEntry, PluginManifest, PluginRoute, admin_plugins, to_admin_path},
    registry::RegistryEntry,
    template::{RenderContext, TemplateKind},
};

pub use error::{DomainError, ErrorCategory};
pub use planning::{PageRequest, RenderedPage};
pub use skeleton::ModuleSkeleton;
pub use validation::DomainValidator;
pub use value_objects::{ModuleName, PageSlug, normalize};
