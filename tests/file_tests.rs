//! Integration tests for mode files: templates, exports and imports.

use modequill::document::template::{template_mode, TEMPLATE_ID, TEMPLATE_TOOLS};
use modequill::document::validate::validate_mode;
use modequill::file::loader::load_json_file;
use modequill::store::ModeStore;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_template_file_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mode_template.json");

    ModeStore::create_template(&path).unwrap();

    let value = load_json_file(&path).unwrap();
    assert_eq!(value["id"], json!(TEMPLATE_ID));
    assert_eq!(value["icon"], json!("infinity"));
    assert_eq!(value["thinkingLevel"], json!("none"));
    assert_eq!(value["autoRun"], json!(false));
    assert_eq!(value["shouldAutoApplyIfNoEditTool"], json!(true));
    assert_eq!(value["enabledTools"], json!(TEMPLATE_TOOLS));
    assert_eq!(value["autoFix"], json!(true));
    assert_eq!(value["enabledMcpServers"], json!([]));
    assert!(value["customRulesForAI"].as_str().unwrap().starts_with('#'));
}

#[test]
fn test_template_is_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("t.json");
    ModeStore::create_template(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("{\n  \"id\": \"YOUR_UNIQUE_ID\",\n  \"name\""));
    assert!(content.contains("\n  \"enabledTools\": [\n    1,\n    18,"));
    assert!(content.ends_with("}\n"));
}

#[test]
fn test_template_reimports_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("t.json");
    ModeStore::create_template(&path).unwrap();

    let mode = validate_mode(load_json_file(&path).unwrap()).unwrap();
    assert_eq!(mode, template_mode());
}

#[test]
fn test_template_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("t.json");
    assert!(ModeStore::create_template(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_non_ascii_written_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ru.json");
    let mut mode = template_mode();
    mode.name = "Режим 1С".to_string();

    modequill::file::saver::save_json_file(&path, &mode).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"name\": \"Режим 1С\""));
    assert!(!content.contains("\\u"));
}
