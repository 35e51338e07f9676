//! Pure planners for the module lifecycle.
//!
//! Each function takes a registry snapshot and a [`ProjectLayout`] and either
//! rejects the request or returns the complete [`Plan`]. Nothing here performs
//! I/O; page content is rendered by the caller and passed in.

use crate::domain::{
    entities::{
        layout::ProjectLayout,
        page::PageRecord,
        plan::{FsEffect, Plan, PlanAction, RegistryUpdate},
        template::RenderContext,
    },
    error::DomainError,
    skeleton::ModuleSkeleton,
    validation::DomainValidator,
    value_objects::{ModuleName, PageSlug},
};

/// What an operator asked for when adding a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub module: ModuleName,
    pub page: PageSlug,
    pub description: String,
    pub auth: bool,
    pub with_page_server: bool,
    pub with_server: bool,
}

impl PageRequest {
    pub fn new(module: ModuleName, page: PageSlug) -> Self {
        Self {
            module,
            page,
            description: String::new(),
            auth: false,
            with_page_server: false,
            with_server: false,
        }
    }

    /// Data the page templates see: `module`, `page`, `description`, `auth`.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new()
            .with("module", self.module.as_str())
            .with("page", self.page.as_str())
            .with("description", self.description.as_str())
            .with("auth", self.auth)
    }
}

/// Rendered template output for one page. Optional parts are `None` when the
/// request did not ask for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub page: String,
    pub page_server: Option<String>,
    pub server: Option<String>,
}

pub fn plan_create_module(
    module: ModuleName,
    registered: &[ModuleName],
    layout: &ProjectLayout,
) -> Result<Plan, DomainError> {
    DomainValidator::validate_new_module(&module, registered, layout)?;

    let skeleton = ModuleSkeleton::for_module(&module);
    let routes = layout.module_routes(&module);
    let admin = layout.admin_routes(&module);
    let activity = PageSlug::parse("activity")?;

    let plan = Plan::new(PlanAction::CreateModule(module.clone()))
        .with_effect(FsEffect::Materialize {
            path: layout.page_file(&routes),
            content: skeleton.index_page,
        })
        .with_effect(FsEffect::Materialize {
            path: layout.page_file(&layout.page_dir(&module, &activity)),
            content: skeleton.activity_page,
        })
        .with_effect(FsEffect::Materialize {
            path: layout.page_file(&admin.join("settings")),
            content: skeleton.settings_page,
        })
        .with_effect(FsEffect::Materialize {
            path: layout.page_file(&admin.join("security")),
            content: skeleton.security_page,
        })
        .with_effect(FsEffect::Materialize {
            path: layout.definition_file(&module),
            content: skeleton.definition,
        })
        .with_update(RegistryUpdate::UpsertPage(skeleton_record(
            layout,
            &module,
            PageSlug::index(),
            format!("Index for {module}"),
        )))
        .with_update(RegistryUpdate::UpsertPage(skeleton_record(
            layout,
            &module,
            activity,
            format!("Activity for {module}"),
        )))
        .with_update(RegistryUpdate::RegisterModule(module));

    Ok(plan)
}

pub fn plan_rename_module(
    from: ModuleName,
    to: ModuleName,
    registered: &[ModuleName],
    layout: &ProjectLayout,
) -> Result<Plan, DomainError> {
    DomainValidator::require_registered(&from, registered)?;
    DomainValidator::validate_new_module(&to, registered, layout)?;

    let plan = Plan::new(PlanAction::RenameModule {
        from: from.clone(),
        to: to.clone(),
    })
    .with_effect(FsEffect::Rename {
        from: layout.module_routes(&from),
        to: layout.module_routes(&to),
        required: true,
    })
    .with_effect(FsEffect::Rename {
        from: layout.admin_routes(&from),
        to: layout.admin_routes(&to),
        required: false,
    })
    .with_effect(FsEffect::Rename {
        from: layout.definition_file(&from),
        to: layout.definition_file(&to),
        required: false,
    })
    .with_update(RegistryUpdate::RewritePages {
        from: from.clone(),
        to: to.clone(),
        routes_prefix: layout.routes_prefix().to_string(),
    })
    .with_update(RegistryUpdate::RenameModule { from, to });

    Ok(plan)
}

/// Plan removal of a module. An unregistered module yields an empty plan so
/// that repeating a delete is a no-op.
pub fn plan_delete_module(
    module: ModuleName,
    registered: &[ModuleName],
    layout: &ProjectLayout,
) -> Plan {
    let plan = Plan::new(PlanAction::DeleteModule(module.clone()));
    if DomainValidator::require_registered(&module, registered).is_err() {
        return plan;
    }

    plan.with_effect(FsEffect::Remove {
        path: layout.module_routes(&module),
    })
    .with_effect(FsEffect::Remove {
        path: layout.admin_routes(&module),
    })
    .with_effect(FsEffect::Remove {
        path: layout.definition_file(&module),
    })
    .with_update(RegistryUpdate::DropPages(module.clone()))
    .with_update(RegistryUpdate::UnregisterModule(module))
}

pub fn plan_add_page(
    request: &PageRequest,
    rendered: RenderedPage,
    registered: &[ModuleName],
    layout: &ProjectLayout,
) -> Result<Plan, DomainError> {
    DomainValidator::require_registered(&request.module, registered)?;

    let dir = layout.page_dir(&request.module, &request.page);
    let mut plan = Plan::new(PlanAction::AddPage {
        module: request.module.clone(),
        page: request.page.clone(),
    })
    .with_effect(FsEffect::Materialize {
        path: layout.page_file(&dir),
        content: rendered.page,
    });

    if request.with_page_server {
        plan = plan.with_effect(FsEffect::Materialize {
            path: layout.page_server_file(&dir),
            content: rendered.page_server.unwrap_or_default(),
        });
    }
    if request.with_server {
        plan = plan.with_effect(FsEffect::Materialize {
            path: layout.server_file(&dir),
            content: rendered.server.unwrap_or_default(),
        });
    }

    let record = PageRecord {
        module: request.module.to_string(),
        page: request.page.to_string(),
        path: layout.record_path(&request.module, &request.page),
        description: request.description.clone(),
        auth: request.auth,
        has_page_server: request.with_page_server,
        has_server: request.with_server,
    };

    Ok(plan.with_update(RegistryUpdate::UpsertPage(record)))
}

fn skeleton_record(
    layout: &ProjectLayout,
    module: &ModuleName,
    page: PageSlug,
    description: String,
) -> PageRecord {
    PageRecord {
        module: module.to_string(),
        path: layout.record_path(module, &page),
        page: page.to_string(),
        description,
        auth: false,
        has_page_server: false,
        has_server: false,
    }
}
