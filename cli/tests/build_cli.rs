use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

fn sample(name: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let mut path = PathBuf::from(manifest_dir);
    path.push("samples");
    path.push(name);
    path
}

fn streamgen() -> Command {
    Command::cargo_bin("streamgen").expect("streamgen binary")
}

#[test]
fn build_writes_controller_at_package_path() {
    let td = tempfile::tempdir().expect("tempdir");

    streamgen()
        .arg("build")
        .arg(sample("test_project.json"))
        .args(["--package", "de.fzi.cep.sepa.flink.test.project"])
        .arg("--output")
        .arg(td.path())
        .assert()
        .success();

    let written = td
        .path()
        .join("de/fzi/cep/sepa/flink/test/project/TestProjectController.java");
    let text = fs::read_to_string(&written).expect("controller written");
    assert!(text.starts_with("package de.fzi.cep.sepa.flink.test.project;\n"));
    assert!(text.contains("public class TestProjectController extends AbstractFlinkAgentDeclarer<TestProjectParameters> {"));
    assert!(text.contains("TestProjectParameters staticParam = new TestProjectParameters(graph, mappingFirst, freeText);"));
}

#[test]
fn build_prints_to_stdout_without_output_dir() {
    let out = streamgen()
        .arg("build")
        .arg(sample("temperature_alert.json"))
        .args(["-p", "org.example.alerts"])
        .output()
        .expect("run streamgen");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("public class TemperatureAlertController"));
    assert!(stdout.contains("staticProperty1.setValue(\"30\");"));
    assert!(stdout.contains("e1 = PrimitivePropertyBuilder.createPropertyRestriction(\"http://test.org#sensorId\").build();"));
}

#[test]
fn build_expands_globs_and_honours_dump() {
    let td = tempfile::tempdir().expect("tempdir");
    let pattern = sample("*.json");

    streamgen()
        .arg("build")
        .arg(pattern.to_string_lossy().to_string())
        .args(["--package", "gen", "--dump", "model"])
        .arg("--output")
        .arg(td.path())
        .assert()
        .success();

    assert!(td.path().join("gen/TestProjectController.java").exists());
    assert!(td.path().join("gen/TemperatureAlertController.java").exists());
    assert!(td.path().join("TestProject.model.json").exists());
}

#[test]
fn explicit_name_overrides_descriptor_name() {
    let out = streamgen()
        .arg("build")
        .arg(sample("test_project.json"))
        .args(["-p", "p", "--name", "Renamed"])
        .output()
        .expect("run streamgen");

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("public class RenamedController extends"));
}

#[test]
fn unsupported_descriptor_fails_with_report() {
    let td = tempfile::tempdir().expect("tempdir");
    let descriptor = td.path().join("fixed.json");
    fs::write(&descriptor, r#"{ "name": "fixed", "output_strategies": [ { "type": "fixed" } ] }"#).expect("write descriptor");

    let out = streamgen()
        .arg("build")
        .arg(&descriptor)
        .args(["-p", "p"])
        .output()
        .expect("run streamgen");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("STREAMGEN | ERROR | strategies[0]"), "{}", stderr);
}

#[test]
fn missing_descriptor_fails() {
    streamgen()
        .arg("build")
        .arg("/no/such/descriptor.json")
        .args(["-p", "p"])
        .assert()
        .failure();
}

#[test]
fn inspect_reports_lowering_status_as_json() {
    let out = streamgen()
        .arg("inspect")
        .arg(sample("temperature_alert.json"))
        .arg("--json")
        .output()
        .expect("run streamgen");

    assert!(out.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json summary");
    assert_eq!(summary["operator"], "TemperatureAlert");
    assert_eq!(summary["static_parameters"][1]["internal_name"], "threshold");
    assert!(summary["lowering"].is_null());
}

#[test]
fn verbose_flags_raise_the_log_level() {
    let quiet = streamgen()
        .env_remove("RUST_LOG")
        .arg("build")
        .arg(sample("test_project.json"))
        .args(["-p", "p"])
        .output()
        .expect("run streamgen");
    assert!(quiet.status.success());
    let stderr = String::from_utf8_lossy(&quiet.stderr);
    assert!(stderr.contains("is emitted through EpProperties.stringEp"), "{}", stderr);
    assert!(!stderr.contains("lowering stream"), "{}", stderr);

    let loud = streamgen()
        .env_remove("RUST_LOG")
        .args(["-vv", "build"])
        .arg(sample("test_project.json"))
        .args(["-p", "p"])
        .output()
        .expect("run streamgen");
    assert!(loud.status.success());
    let stderr = String::from_utf8_lossy(&loud.stderr);
    assert!(stderr.contains("lowering stream 'TestProject' as stream0"), "{}", stderr);
    assert!(!String::from_utf8_lossy(&loud.stdout).contains("lowering stream"));
}

#[test]
fn rust_log_applies_without_verbose_flags() {
    let out = streamgen()
        .env("RUST_LOG", "error")
        .arg("build")
        .arg(sample("test_project.json"))
        .args(["-p", "p"])
        .output()
        .expect("run streamgen");
    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).contains("EpProperties.stringEp"));
}
