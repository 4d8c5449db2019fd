use streamgen_core::config::TargetProfile;
use streamgen_core::descriptor::StaticParameter;
use streamgen_core::lower::{MethodBuilder, extract_static_parameters, lower_runtime_method, lower_static_parameters};
use streamgen_core::{ErrorKind, StreamgenErrorExt};

const PACKAGE: &str = "de.fzi.cep.sepa.flink.test.project";

fn mapping_and_free_text() -> Vec<StaticParameter> {
    vec![
        StaticParameter::mapping("http://test.org#mytest", "mappingFirst", "Mapping First: ", ""),
        StaticParameter::free_text("freeText", "Free Text: ", ""),
    ]
}

#[test]
fn runtime_method_matches_expected_text() {
    let method = lower_runtime_method("TestProject", PACKAGE, &mapping_and_free_text(), &TargetProfile::default()).unwrap();

    let expected = "@java.lang.Override\nprotected de.fzi.cep.sepa.flink.FlinkSepaRuntime<de.fzi.cep.sepa.flink.test.project.TestProjectParameters> getRuntime(de.fzi.cep.sepa.model.impl.graph.SepaInvocation graph) {\n  String mappingFirst = de.fzi.cep.sepa.model.util.SepaUtils.getMappingPropertyName(graph, \"mappingFirst\");\n  String freeText = de.fzi.cep.sepa.model.util.SepaUtils.getFreeTextStaticPropertyValue(graph, \"freeText\");\n  de.fzi.cep.sepa.flink.test.project.TestProjectParameters staticParam = new de.fzi.cep.sepa.flink.test.project.TestProjectParameters(graph, mappingFirst, freeText);\n  return new de.fzi.cep.sepa.flink.test.project.TestProjectProgram(staticParam, new de.fzi.cep.sepa.flink.FlinkDeploymentConfig(de.fzi.cep.sepa.flink.test.project.Config.JAR_FILE, de.fzi.cep.sepa.flink.test.project.Config.FLINK_HOST, de.fzi.cep.sepa.flink.test.project.Config.FLINK_PORT));\n}\n";
    assert_eq!(method.to_string(), expected);
}

#[test]
fn extraction_names_follow_parameter_order() {
    let params = vec![
        StaticParameter::free_text("zeta", "", ""),
        StaticParameter::mapping("http://test.org#a", "alpha", "", ""),
        StaticParameter::free_text("mid", "", ""),
    ];
    let mut b = MethodBuilder::new("getRuntime");
    let names = extract_static_parameters(&mut b, &params).unwrap();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);

    let method = lower_runtime_method("Op", "p", &params, &TargetProfile::default()).unwrap();
    let holder = method.body[3].to_string();
    assert_eq!(holder, "p.OpParameters staticParam = new p.OpParameters(graph, zeta, alpha, mid);");
}

#[test]
fn no_parameters_only_passes_graph() {
    let method = lower_runtime_method("Op", "p", &[], &TargetProfile::default()).unwrap();
    assert_eq!(method.body.len(), 2);
    assert_eq!(method.body[0].to_string(), "p.OpParameters staticParam = new p.OpParameters(graph);");
}

#[test]
fn custom_target_profile_is_used() {
    let target = TargetProfile {
        runtime_class: "org.example.rt.SparkRuntime".to_string(),
        deployment_config_class: "org.example.rt.SparkDeploymentConfig".to_string(),
        config_class: "Settings".to_string(),
        jar_constant: "JAR".to_string(),
        host_constant: "HOST".to_string(),
        port_constant: "PORT".to_string(),
        ..TargetProfile::default()
    };
    let method = lower_runtime_method("Op", "p", &[], &target).unwrap();

    assert_eq!(method.returns.to_string(), "org.example.rt.SparkRuntime<p.OpParameters>");
    assert_eq!(
        method.body[1].to_string(),
        "return new p.OpProgram(staticParam, new org.example.rt.SparkDeploymentConfig(p.Settings.JAR, p.Settings.HOST, p.Settings.PORT));"
    );
}

#[test]
fn duplicate_key_is_malformed() {
    let params = vec![
        StaticParameter::free_text("value", "", ""),
        StaticParameter::free_text("value", "", ""),
    ];
    let err = lower_runtime_method("Op", "p", &params, &TargetProfile::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDescriptor);
    assert_eq!(err.position().unwrap().index, 1);
}

#[test]
fn reserved_or_invalid_keys_are_malformed() {
    for key in ["graph", "staticParam", "not valid", "class", ""] {
        let params = vec![StaticParameter::free_text(key, "", "")];
        let err = lower_runtime_method("Op", "p", &params, &TargetProfile::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDescriptor, "key {:?}", key);
    }
}

#[test]
fn keys_hiding_referenced_classes_are_malformed() {
    for key in ["SepaUtils", "Config", "TestProjectParameters", "TestProjectProgram", "de"] {
        let params = vec![
            StaticParameter::mapping("http://test.org#mytest", "mappingFirst", "", ""),
            StaticParameter::free_text(key, "", ""),
        ];
        let err = lower_runtime_method("TestProject", PACKAGE, &params, &TargetProfile::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDescriptor, "key {:?}", key);
        assert_eq!(err.position().unwrap().to_string(), "static_parameters[1]");
        assert!(err.message().contains(key));
    }
}

#[test]
fn profile_config_class_is_reserved() {
    let target = TargetProfile { config_class: "Settings".to_string(), ..TargetProfile::default() };
    let params = vec![StaticParameter::free_text("Settings", "", "")];
    let err = lower_runtime_method("Op", "p", &params, &target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDescriptor);

    let params = vec![StaticParameter::free_text("Config", "", "")];
    assert!(lower_runtime_method("Op", "p", &params, &target).is_ok());
}

#[test]
fn declaration_surface_for_mapping_and_free_text() {
    let mut params = mapping_and_free_text();
    if let StaticParameter::FreeText { value, .. } = &mut params[1] {
        *value = "default".to_string();
    }
    let mut b = MethodBuilder::new("testMethod");
    lower_static_parameters(&mut b, &params).unwrap();

    let lines: Vec<String> = b.statements().iter().map(|s| s.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "java.util.List<de.fzi.cep.sepa.model.impl.staticproperty.StaticProperty> staticProperties = new java.util.ArrayList<de.fzi.cep.sepa.model.impl.staticproperty.StaticProperty>();",
            "de.fzi.cep.sepa.model.impl.staticproperty.MappingPropertyUnary staticProperty0 = new de.fzi.cep.sepa.model.impl.staticproperty.MappingPropertyUnary(java.net.URI.create(\"http://test.org#mytest\"), \"mappingFirst\", \"Mapping First: \", \"\");",
            "staticProperties.add(staticProperty0);",
            "de.fzi.cep.sepa.model.impl.staticproperty.FreeTextStaticProperty staticProperty1 = new de.fzi.cep.sepa.model.impl.staticproperty.FreeTextStaticProperty(\"freeText\", \"Free Text: \", \"\");",
            "staticProperty1.setValue(\"default\");",
            "staticProperties.add(staticProperty1);",
        ]
    );
}
