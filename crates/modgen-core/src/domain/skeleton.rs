//! Fixed files every new module starts with.
//!
//! Unlike page templates these are not operator-editable; `__MODULE__` is
//! replaced by the module name.

use crate::domain::value_objects::ModuleName;

const PLACEHOLDER: &str = "__MODULE__";

const INDEX_PAGE: &str = r#"<!-- Auto-generated index page for __MODULE__ -->
<script lang="ts">
  let items: string[] = [];
  let current = '';
  const create = () => { if (current) { items = [...items, current]; current = ''; } };
  const remove = (i: number) => { items = items.filter((_, idx) => idx !== i); };
</script>

<h1>__MODULE__ Module</h1>
<input bind:value={current} placeholder="New item" />
<button on:click={create}>Add</button>
<ul>
  {#each items as item, i}
    <li>{item} <button on:click={() => remove(i)}>Delete</button></li>
  {/each}
</ul>
"#;

const ACTIVITY_PAGE: &str = r#"<!-- Activity view for __MODULE__. Replace with real data -->
<script lang="ts">
  const rows = [];
  const headers = [{ key: 'name', header: 'Name' }];
</script>

<h1>__MODULE__ – Activity</h1>
<pre>{JSON.stringify({ rows, headers }, null, 2)}</pre>
"#;

const SETTINGS_PAGE: &str = r#"<!-- Settings for __MODULE__ -->
<script lang="ts">
  import { settings } from '$lib/modules/__MODULE__';
</script>

<h1>__MODULE__ Settings</h1>
<pre>{JSON.stringify(settings, null, 2)}</pre>
"#;

const SECURITY_PAGE: &str = r#"<!-- Security for __MODULE__ -->
<script lang="ts">
  import { variables } from '$lib/modules/__MODULE__';
</script>

<h1>__MODULE__ Security</h1>
<pre>{JSON.stringify(variables, null, 2)}</pre>
"#;

const DEFINITION: &str = r#"// Definitions for the __MODULE__ module
export const settings = {};
export const variables = {};
"#;

/// Generated content of a module skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSkeleton {
    pub index_page: String,
    pub activity_page: String,
    pub settings_page: String,
    pub security_page: String,
    pub definition: String,
}

impl ModuleSkeleton {
    pub fn for_module(module: &ModuleName) -> Self {
        let fill = |text: &str| text.replace(PLACEHOLDER, module.as_str());
        Self {
            index_page: fill(INDEX_PAGE),
            activity_page: fill(ACTIVITY_PAGE),
            settings_page: fill(SETTINGS_PAGE),
            security_page: fill(SECURITY_PAGE),
            definition: fill(DEFINITION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_module_name_everywhere() {
        let skeleton = ModuleSkeleton::for_module(&ModuleName::parse("widgets").unwrap());

        assert!(skeleton.index_page.contains("<h1>widgets Module</h1>"));
        assert!(skeleton.settings_page.contains("$lib/modules/widgets"));
        assert!(skeleton.definition.contains("export const variables = {};"));
        for text in [
            &skeleton.index_page,
            &skeleton.activity_page,
            &skeleton.settings_page,
            &skeleton.security_page,
            &skeleton.definition,
        ] {
            assert!(!text.contains(PLACEHOLDER));
        }
    }

    #[test]
    fn svelte_braces_survive() {
        let skeleton = ModuleSkeleton::for_module(&ModuleName::parse("a").unwrap());
        assert!(skeleton.index_page.contains("{#each items as item, i}"));
    }
}
