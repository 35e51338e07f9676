//! End-to-end tests for the modgen binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn modgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modgen").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();
    modgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-page"))
        .stdout(predicate::str::contains("rename"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    modgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn create_list_rename_delete() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    modgen(root)
        .args(["create", "Widgets", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned changes:"))
        .stdout(predicate::str::contains("src/lib/modules/widgets.ts"))
        .stdout(predicate::str::contains("Module 'widgets' created"));

    assert!(root.join("src/routes/widgets/+page.svelte").is_file());
    assert!(root.join("src/routes/widgets/activity/+page.svelte").is_file());
    assert!(root.join("src/routes/admin/widgets/settings/+page.svelte").is_file());
    assert!(root.join("src/routes/admin/widgets/security/+page.svelte").is_file());
    assert_eq!(
        read_json(&root.join("src/lib/modules.json")),
        serde_json::json!(["widgets"])
    );

    modgen(root)
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout("widgets\n");

    modgen(root)
        .args(["rename", "widgets", "gadgets", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(if present)"))
        .stdout(predicate::str::contains("Module 'widgets' renamed to 'gadgets'"));

    assert!(!root.join("src/routes/widgets").exists());
    assert!(root.join("src/routes/gadgets/activity/+page.svelte").is_file());
    assert!(root.join("src/lib/modules/gadgets.ts").is_file());
    let pages = read_json(&root.join("src/lib/pages.json"));
    let paths: Vec<&str> = pages
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, ["src/routes/gadgets", "src/routes/gadgets/activity"]);

    modgen(root)
        .args(["delete", "gadgets", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module 'gadgets' deleted"));

    assert!(!root.join("src/routes/gadgets").exists());
    assert!(!root.join("src/routes/admin/gadgets").exists());
    assert!(!root.join("src/lib/modules/gadgets.ts").exists());
    assert_eq!(
        read_json(&root.join("src/lib/modules.json")),
        serde_json::json!([])
    );
    assert_eq!(
        read_json(&root.join("src/lib/pages.json")),
        serde_json::json!([])
    );
}

#[test]
fn dry_run_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    modgen(root)
        .args(["create", "widgets", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/routes/widgets/+page.svelte"))
        .stdout(predicate::str::contains("Dry run"));

    assert!(!root.join("src/routes").exists());
    assert!(!root.join("src/lib/modules.json").exists());
}

#[test]
fn templates_are_seeded_once() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    modgen(root).arg("list").assert().success();
    let template = root.join("templates/page.svelte.tpl");
    assert!(template.is_file());
    assert!(root.join("templates/page.server.ts.tpl").is_file());
    assert!(root.join("templates/server.ts.tpl").is_file());

    fs::write(&template, "custom {{page}}").unwrap();
    modgen(root).arg("list").assert().success();
    assert_eq!(fs::read_to_string(&template).unwrap(), "custom {{page}}");
}

#[test]
fn add_page_renders_requested_files() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    modgen(root).args(["create", "widgets", "-y"]).assert().success();
    modgen(root)
        .args([
            "add-page",
            "Stock List",
            "-m",
            "widgets",
            "-d",
            "All the stock",
            "--auth",
            "--page-server",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 'stock-list' added to module 'widgets'"));

    let dir = root.join("src/routes/widgets/stock-list");
    let page = fs::read_to_string(dir.join("+page.svelte")).unwrap();
    assert!(page.contains("All the stock"));
    assert!(dir.join("+page.server.ts").is_file());
    assert!(!dir.join("+server.ts").exists());

    let output = modgen(root)
        .args(["list", "--pages", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let pages: Value = serde_json::from_slice(&output.stdout).unwrap();
    let added = pages
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["page"] == "stock-list")
        .unwrap();
    assert_eq!(added["path"], "src/routes/widgets/stock-list");
    assert_eq!(added["auth"], true);
    assert_eq!(added["hasPageServer"], true);
    assert_eq!(added["hasServer"], false);
}

#[test]
fn addpage_alias_is_accepted() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    modgen(root).args(["create", "widgets", "-y"]).assert().success();
    modgen(root)
        .args(["addpage", "[id]", "-m", "widgets", "--server", "-y"])
        .assert()
        .success();

    assert!(root.join("src/routes/widgets/[id]/+server.ts").is_file());
}

#[test]
fn deleting_unknown_module_is_a_noop() {
    let temp = TempDir::new().unwrap();
    modgen(temp.path())
        .args(["delete", "ghost", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to delete"));
}

#[test]
fn config_file_changes_layout() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(
        root.join(".modgen.toml"),
        "[layout]\nroutes_dir = \"app/routes\"\n\n[registry]\nmodules = \"modules.json\"\n",
    )
    .unwrap();

    modgen(root).args(["create", "widgets", "-y"]).assert().success();

    assert!(root.join("app/routes/widgets/+page.svelte").is_file());
    assert!(root.join("modules.json").is_file());
    assert!(root.join("src/lib/pages.json").is_file());
}

#[test]
fn init_writes_default_config_once() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    modgen(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let text = fs::read_to_string(root.join(".modgen.toml")).unwrap();
    assert!(text.contains("routes_dir = \"src/routes\""));

    modgen(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    modgen(root)
        .args(["config", "get", "registry.pages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("registry.pages = src/lib/pages.json"));
}

#[test]
fn plugins_lists_admin_views() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let dir = root.join("src/lib/modules/inventory");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("manifest.json"),
        r#"{"name":"inventory","label":"Inventory","version":"1.0.0","routes":[
            {"path":"/admin/settings","entry":"settings.svelte",
             "nav":{"label":"Settings","admin":true}}]}"#,
    )
    .unwrap();

    modgen(root)
        .arg("plugins")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory (inventory v1.0.0)"))
        .stdout(predicate::str::contains("/admin/inventory/settings"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    modgen(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modgen"));
}
