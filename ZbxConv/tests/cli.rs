use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn convert_xml_to_json_file() {
    let dir = tempdir().unwrap();
    let destination = dir.path().join("template.json");

    let mut cmd = cargo_bin_cmd!("zbxconv");
    cmd.arg("convert")
        .arg("--source")
        .arg(fixture_path("template_v44.xml"))
        .arg("--destination")
        .arg(&destination);
    cmd.assert().success();

    let json = std::fs::read_to_string(&destination).unwrap();
    assert!(json.starts_with("{\n    \"version\": \"4.4\""));
    assert!(json.contains("\"template\": \"Template DB Demo\""));
}

#[test]
fn convert_to_stdout_needs_output_format() {
    let mut cmd = cargo_bin_cmd!("zbxconv");
    cmd.arg("convert")
        .arg("-s")
        .arg(fixture_path("template_v42.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("output format is required"));

    let mut cmd = cargo_bin_cmd!("zbxconv");
    cmd.arg("-q")
        .arg("convert")
        .arg("-s")
        .arg(fixture_path("template_v42.json"))
        .arg("-o")
        .arg("xml");
    cmd.assert().success().stdout(
        predicate::str::starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<zabbix_export>")
            .and(predicate::str::contains("<version>4.2</version>"))
            .and(predicate::str::contains("<macros/>")),
    );
}

#[test]
fn unsupported_version_writes_nothing() {
    let dir = tempdir().unwrap();
    let destination = dir.path().join("out.xml");

    let mut cmd = cargo_bin_cmd!("zbxconv");
    cmd.arg("convert")
        .arg("-s")
        .arg(fixture_path("template_v99.json"))
        .arg("-d")
        .arg(&destination);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported template version \"9.9\""));

    assert!(!destination.exists());
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let destination = dir.path().join("out.csv");

    let mut cmd = cargo_bin_cmd!("zbxconv");
    cmd.arg("convert")
        .arg("-s")
        .arg(fixture_path("template_v40.xml"))
        .arg("-d")
        .arg(&destination);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format: csv"));
}

#[test]
fn detect_prints_version() {
    let mut cmd = cargo_bin_cmd!("zbxconv");
    cmd.arg("detect")
        .arg("-s")
        .arg(fixture_path("template_v40.yaml"));
    cmd.assert().success().stdout("4.0\n");
}

#[test]
fn versions_lists_table() {
    let mut cmd = cargo_bin_cmd!("zbxconv");
    cmd.arg("versions");
    cmd.assert().success().stdout(
        predicate::str::contains("4.2        4.0      4.0")
            .and(predicate::str::contains("4.4        4.4      4.4")),
    );
}

#[test]
fn config_file_adds_version() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("zbxconv.toml");
    std::fs::write(
        &config,
        "[[versions]]\ntag = \"9.9\"\nschema = \"4.4\"\nrules = \"4.4\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("zbxconv");
    cmd.arg("detect")
        .arg("-s")
        .arg(fixture_path("template_v99.json"))
        .arg("--config")
        .arg(&config);
    cmd.assert().success().stdout("9.9\n");
}
