//! Built-in page templates.
//!
//! These are written to the templates directory the first time modgen runs in
//! a project. After that the files on disk are the source of truth and an
//! operator may edit them freely; they are never overwritten.

use modgen_core::domain::TemplateKind;

// ── Defaults ─────────────────────────────────────────────────────────────────

const PAGE: &str = r#"<!-- {{description}} -->
<script lang="ts">
  {{#if auth}}
  // Placeholder auth check. Replace with a guard in +layout.server.ts
  export const load = async () => {
    // await checkAuth();
  };
  {{/if}}
</script>

<section>
  <h1>{{module}} – {{page}}</h1>
  <p>{{description}}</p>
</section>
"#;

const PAGE_SERVER: &str = r#"// +page.server.ts for {{module}}/{{page}}
// Add actions or load() here as needed.
import type { Actions, PageServerLoad } from './$types';

export const load: PageServerLoad = async (event) => {
  {{#if auth}}// await requireAuth(event.locals);{{/if}}
  return {};
};

export const actions: Actions = {
  default: async (event) => {
    return { success: true };
  }
};
"#;

const SERVER: &str = r#"// +server.ts for {{module}}/{{page}}
// Add REST endpoints (GET/POST/etc.) here.
import type { RequestHandler } from './$types';

export const GET: RequestHandler = async (event) => {
  {{#if auth}}// await requireAuth(event.locals);{{/if}}
  return new Response(JSON.stringify({ ok: true }), { headers: { 'content-type': 'application/json' } });
};
"#;

// ── Public API ───────────────────────────────────────────────────────────────

/// Default text of a template.
pub fn default_text(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Page => PAGE,
        TemplateKind::PageServer => PAGE_SERVER,
        TemplateKind::Server => SERVER,
    }
}

/// File name of a template inside the templates directory.
pub fn file_name(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Page => "page.svelte.tpl",
        TemplateKind::PageServer => "page.server.ts.tpl",
        TemplateKind::Server => "server.ts.tpl",
    }
}
