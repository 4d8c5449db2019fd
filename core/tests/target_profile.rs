use std::fs;

use streamgen_core::{ErrorKind, StreamgenErrorExt, TargetProfile};

#[test]
fn defaults_target_flink() {
    let profile = TargetProfile::default();
    assert_eq!(profile.runtime().unwrap().canonical(), "de.fzi.cep.sepa.flink.FlinkSepaRuntime");
    assert_eq!(profile.declarer().unwrap().simple(), "AbstractFlinkAgentDeclarer");
    assert_eq!(profile.deployment_config().unwrap().package(), "de.fzi.cep.sepa.flink");
    assert_eq!(profile.jar_constant, "JAR_FILE");
    assert!(profile.validate().is_ok());
}

#[test]
fn partial_profile_keeps_defaults() {
    let td = tempfile::tempdir().expect("tempdir");
    let file = td.path().join("target.json");
    fs::write(&file, r#"{ "config_class": "Settings", "file_comment": "generated" }"#).expect("write profile");

    let profile = TargetProfile::load_from_file(&file).expect("load profile");
    assert_eq!(profile.config_class, "Settings");
    assert_eq!(profile.file_comment.as_deref(), Some("generated"));
    assert_eq!(profile.host_constant, "FLINK_HOST");
}

#[test]
fn invalid_profile_is_rejected() {
    let td = tempfile::tempdir().expect("tempdir");
    let file = td.path().join("target.json");
    fs::write(&file, r#"{ "runtime_class": "not a class" }"#).expect("write profile");

    let err = TargetProfile::load_from_file(&file).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    assert!(err.message().contains("runtime_class"));

    let bad_constant = TargetProfile { port_constant: "9-9".to_string(), ..TargetProfile::default() };
    assert!(bad_constant.validate().is_err());
}

#[test]
fn unreadable_profile_is_rejected() {
    let err = TargetProfile::load_from_file("/definitely/not/here.json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    assert_eq!(err.issuer(), "streamgen.config");
}
