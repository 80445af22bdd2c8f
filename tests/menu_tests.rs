//! Tests that drive the interactive menu with scripted input.

use modequill::config::Config;
use modequill::store::record::MODES_KEY;
use modequill::store::ModeStore;
use rusqlite::{params, Connection};
use serde_json::json;
use std::io::Cursor;
use tempfile::TempDir;

fn store_with_custom_mode(dir: &TempDir) -> ModeStore {
    let path = dir.path().join("state.vscdb");
    let connection = Connection::open(&path).unwrap();
    connection
        .execute_batch("CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB);")
        .unwrap();
    let state = json!({
        "composerState": {
            "modes4": [
                { "id": "agent", "name": "Agent", "icon": "infinity" },
                {
                    "id": "c1",
                    "name": "Foo",
                    "icon": "bug",
                    "thinkingLevel": "high",
                    "autoRun": false,
                    "shouldAutoApplyIfNoEditTool": true,
                    "enabledTools": [1],
                    "autoFix": false,
                    "enabledMcpServers": []
                }
            ]
        }
    });
    connection
        .execute(
            "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
            params![MODES_KEY, state.to_string()],
        )
        .unwrap();
    ModeStore::open(&path).unwrap()
}

fn run(store: &ModeStore, config: &Config, script: &str) -> String {
    let mut out = Vec::new();
    modequill::ui::menu::run_menu(store, config, Cursor::new(script.to_string()), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_exit_choice() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);
    let output = run(&store, &Config::default(), "0\n");
    assert!(output.contains("1. Show all modes"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_end_of_input_exits() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);
    let output = run(&store, &Config::default(), "");
    assert!(output.contains("No more input, exiting."));
}

#[test]
fn test_list_custom_only() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);
    let output = run(&store, &Config::default(), "2\n\n0\n");
    assert!(output.contains("1. [custom] Foo"));
    assert!(!output.contains("[built-in]"));
    assert!(output.contains("Total modes: 1"));
}

#[test]
fn test_invalid_choice_keeps_running() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);
    let output = run(&store, &Config::default(), "9\n\n0\n");
    assert!(output.contains("Invalid choice, try again."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_delete_requires_yes() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);

    let output = run(&store, &Config::default(), "5\nc1\nno\n\n0\n");
    assert!(output.contains("Nothing deleted."));
    assert!(store.get("c1").is_ok());

    let output = run(&store, &Config::default(), "5\nc1\nyes\n\n0\n");
    assert!(output.contains("Mode 'c1' deleted"));
    assert!(store.get("c1").is_err());
}

#[test]
fn test_delete_builtin_reports_error() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);
    let output = run(&store, &Config::default(), "5\nagent\nyes\n\n0\n");
    assert!(output.contains("Error: cannot delete built-in mode 'agent'"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_export_uses_default_file_then_import_with_new_id() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);
    let export_path = dir.path().join("exported.json");
    let config = Config {
        export_file: export_path.to_string_lossy().into_owned(),
        ..Config::default()
    };

    let output = run(&store, &config, "3\nc1\n\n\n0\n");
    assert!(output.contains("Mode 'Foo' exported to"));
    assert!(export_path.exists());

    let script = format!("4\n{}\nc1-copy\n\n0\n", export_path.display());
    let output = run(&store, &config, &script);
    assert!(output.contains("Mode 'Foo' added with id c1-copy"));
    assert_eq!(store.list(false).unwrap().len(), 2);
}

#[test]
fn test_template_default_file() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);
    let template_path = dir.path().join("starter.json");
    let config = Config {
        template_file: template_path.to_string_lossy().into_owned(),
        ..Config::default()
    };

    let output = run(&store, &config, "6\n\n\n0\n");
    assert!(output.contains("Template written to"));
    assert!(output.contains("thinkingLevel: none, low, medium, high"));
    assert!(template_path.exists());
}

#[test]
fn test_input_ending_mid_operation_cancels() {
    let dir = TempDir::new().unwrap();
    let store = store_with_custom_mode(&dir);
    let output = run(&store, &Config::default(), "3\nc1\n");
    assert!(output.contains("Operation cancelled."));
}
