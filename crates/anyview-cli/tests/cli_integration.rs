use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_temp(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn anyview() -> Command {
    Command::cargo_bin("anyview").unwrap()
}

#[test]
fn test_no_args_shows_guidance() {
    anyview()
        .assert()
        .success()
        .stdout(predicate::str::contains("anyview render"));
}

#[test]
fn test_render_tree_plain() {
    let file = write_temp(r#"{"name": "ada", "tags": ["math", "engines"]}"#, ".json");
    anyview()
        .args(["render", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("- name: ada"));
}

#[test]
fn test_render_table_markdown() {
    let file = write_temp(r#"{"input": 110, "cart": 40}"#, ".json");
    anyview()
        .args([
            "render",
            file.path().to_str().unwrap(),
            "--view",
            "table",
            "--format",
            "md",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("| field | hint | value |"))
        .stdout(predicate::str::contains("| input | int | 110 |"));
}

#[test]
fn test_render_yaml_output() {
    let file = write_temp(r#"{"a": 1, "b": "two"}"#, ".json");
    anyview()
        .args([
            "render",
            file.path().to_str().unwrap(),
            "--format",
            "yaml",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("a: 1"))
        .stdout(predicate::str::contains("b: two"));
}

#[test]
fn test_render_accepts_yaml_input() {
    let file = write_temp("name: ada\nage: 36\n", ".yaml");
    anyview()
        .args([
            "render",
            file.path().to_str().unwrap(),
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"age\": 36"));
}

#[test]
fn test_render_zooms_into_path() {
    let file = write_temp(r#"{"users": [{"name": "ada"}, {"name": "bob"}]}"#, ".json");
    anyview()
        .args([
            "render",
            file.path().to_str().unwrap(),
            "--path",
            "users/1/name",
            "--view",
            "one-line",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob"));
}

#[test]
fn test_render_unknown_path_fails_with_available_names() {
    let file = write_temp(r#"{"a": 1, "b": 2}"#, ".json");
    anyview()
        .args([
            "render",
            file.path().to_str().unwrap(),
            "--path",
            "missing",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing not found"))
        .stderr(predicate::str::contains("a, b"));
}

#[test]
fn test_chart_outputs_sized_html() {
    let file = write_temp(
        r#"{"input": 110, "registration": 80, "cart": 40, "checkout": 20, "retention": 12}"#,
        ".json",
    );
    anyview()
        .args([
            "chart",
            file.path().to_str().unwrap(),
            "--width",
            "500",
            "--height",
            "200",
            "--axis-width",
            "50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("width: 500px; height: 200px;"))
        .stdout(predicate::str::contains("width: 440px; height: 40px;"));
}

#[test]
fn test_chart_rejects_non_mapping_input() {
    let file = write_temp("[1, 2, 3]", ".json");
    anyview()
        .args(["chart", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected mapping"));
}
