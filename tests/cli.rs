//! Black-box tests of the ontofactory binary.

mod common;

use common::*;

#[test]
fn classify_bare_identifier_as_json() {
    let env = TestEnv::new();

    let result = env.run(&["classify", "pato", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(value["strategy"], "remote-query");
    assert_eq!(value["source"], "pato");
    assert!(value.get("artifact").is_none());
}

#[test]
fn classify_library_handle_shows_artifact_without_converting() {
    let env = TestEnv::new();

    let result = env.run(&["classify", "obo:pato"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("strategy:  library"));
    assert!(result.stdout.contains("http://purl.obolibrary.org/obo/pato.owl"));
    assert!(result.stdout.contains("cached:    no"));
    assert!(!env.cache_path().join("obo:pato.owl").exists());
}

#[test]
fn load_local_json_file() {
    let env = TestEnv::new();
    env.write_file("pato.json", PATO_JSON);
    let path = env.work_dir.path().join("pato.json");

    let result = env.run(&["load", path.to_str().unwrap(), "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(value["strategy"], "local-file");
    assert_eq!(value["nodes"], 2);
    assert_eq!(value["edges"], 1);
}

#[test]
fn load_default_from_project_config() {
    let env = TestEnv::new();
    env.write_file("ontofactory.toml", PROJECT_CONFIG);
    env.write_file("pato.json", PATO_JSON);

    let result = env.run(&["load"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("handle:    pato.json"));
    assert!(result.stdout.contains("nodes:     2"));
}

#[test]
fn load_empty_handle_fails() {
    let env = TestEnv::new();

    let result = env.run(&["load", ""]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("unsupported ontology handle"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn load_with_missing_converter_fails() {
    let env = TestEnv::new();

    let result = env.run(&["load", "obo:pato"]);

    assert!(!result.success);
    assert!(result.stderr.contains("ontofactory-test-missing-converter"));
}

#[test]
fn cache_path_honours_flag() {
    let env = TestEnv::new();
    let elsewhere = env.work_dir.path().join("elsewhere");

    let result = env.run(&["cache", "path", "--cache-dir", elsewhere.to_str().unwrap()]);

    assert!(result.success);
    assert_eq!(result.stdout.trim(), elsewhere.display().to_string());
}

#[test]
fn cache_list_reports_artifacts() {
    let env = TestEnv::new();
    std::fs::write(env.cache_path().join("obo:pato.owl"), CONVERTED_JSON).unwrap();
    std::fs::write(env.cache_path().join("notes.txt"), "ignored").unwrap();

    let result = env.run(&["cache", "list", "--json"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let rows: Vec<serde_json::Value> = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "obo:pato.owl");
    assert_eq!(rows[0]["size"], CONVERTED_JSON.len());
}

#[test]
fn cache_list_empty() {
    let env = TestEnv::new();

    let result = env.run(&["cache", "list"]);

    assert!(result.success);
    assert_eq!(result.stdout, "no cached artifacts\n");
}
