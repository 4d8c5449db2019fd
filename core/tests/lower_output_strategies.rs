use streamgen_core::descriptor::{AppendStrategy, OutputStrategy, PropertyDescriptor, xsd};
use streamgen_core::lower::{MethodBuilder, lower_append_strategy, lower_output_strategies};

#[test]
fn empty_append_strategy() {
    let mut b = MethodBuilder::new("testMethod");
    lower_append_strategy(&mut b, &AppendStrategy::new(), 0).unwrap();

    let expected = "void testMethod() {\n  de.fzi.cep.sepa.model.impl.output.AppendOutputStrategy outputStrategy0 = new de.fzi.cep.sepa.model.impl.output.AppendOutputStrategy();\n  java.util.List<de.fzi.cep.sepa.model.impl.eventproperty.EventProperty> appendProperties = new java.util.ArrayList<de.fzi.cep.sepa.model.impl.eventproperty.EventProperty>();\n  outputStrategy0.setEventProperties(appendProperties);\n}\n";
    assert_eq!(b.build().to_string(), expected);
}

#[test]
fn append_strategy_uses_shorthand_for_numeric_domain() {
    let strategy = AppendStrategy::new().with_properties(vec![PropertyDescriptor::primitive(
        xsd::LONG,
        "testTime",
        "",
        "http://schema.org/Number",
    )]);
    let mut b = MethodBuilder::new("testMethod");
    lower_append_strategy(&mut b, &strategy, 0).unwrap();

    let expected = "void testMethod() {\n  de.fzi.cep.sepa.model.impl.output.AppendOutputStrategy outputStrategy0 = new de.fzi.cep.sepa.model.impl.output.AppendOutputStrategy();\n  java.util.List<de.fzi.cep.sepa.model.impl.eventproperty.EventProperty> appendProperties = new java.util.ArrayList<de.fzi.cep.sepa.model.impl.eventproperty.EventProperty>();\n  appendProperties.add(de.fzi.cep.sepa.model.builder.EpProperties.stringEp(\"testTime\", \"http://schema.org/Number\"));\n  outputStrategy0.setEventProperties(appendProperties);\n}\n";
    assert_eq!(b.build().to_string(), expected);
}

#[test]
fn append_strategy_falls_back_to_generic_element() {
    let strategy = AppendStrategy::new().with_properties(vec![PropertyDescriptor::primitive(
        xsd::STRING,
        "room",
        "",
        "http://test.org#room",
    )]);
    let mut b = MethodBuilder::new("testMethod");
    lower_append_strategy(&mut b, &strategy, 0).unwrap();

    let lines: Vec<String> = b.statements().iter().map(|s| s.to_string()).collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[2],
        "de.fzi.cep.sepa.model.impl.eventproperty.EventProperty e0 = de.fzi.cep.sepa.model.builder.PrimitivePropertyBuilder.createPropertyRestriction(\"http://test.org#room\").build();"
    );
    assert_eq!(lines[3], "appendProperties.add(e0);");
}

#[test]
fn boolean_domain_uses_boolean_factory() {
    let strategy = AppendStrategy::new().with_properties(vec![PropertyDescriptor::primitive(
        xsd::BOOLEAN,
        "active",
        "",
        "http://schema.org/Boolean",
    )]);
    let mut b = MethodBuilder::new("testMethod");
    lower_append_strategy(&mut b, &strategy, 3).unwrap();

    let lines: Vec<String> = b.statements().iter().map(|s| s.to_string()).collect();
    assert_eq!(
        lines[2],
        "appendProperties.add(de.fzi.cep.sepa.model.builder.EpProperties.booleanEp(\"active\", \"http://schema.org/Boolean\"));"
    );
    assert_eq!(lines[3], "outputStrategy3.setEventProperties(appendProperties);");
}

#[test]
fn empty_strategy_list_only_declares_container() {
    let mut b = MethodBuilder::new("testMethod");
    lower_output_strategies(&mut b, &[]).unwrap();

    let expected = "void testMethod() {\n  java.util.List<de.fzi.cep.sepa.model.impl.output.OutputStrategy> strategies = new java.util.ArrayList<de.fzi.cep.sepa.model.impl.output.OutputStrategy>();\n}\n";
    assert_eq!(b.build().to_string(), expected);
}

#[test]
fn strategies_are_added_in_order() {
    let strategies = vec![
        OutputStrategy::Append(AppendStrategy::new()),
        OutputStrategy::Append(AppendStrategy::new()),
    ];
    let mut b = MethodBuilder::new("testMethod");
    lower_output_strategies(&mut b, &strategies).unwrap();

    let lines: Vec<String> = b.statements().iter().map(|s| s.to_string()).collect();
    assert_eq!(lines[4], "strategies.add(outputStrategy0);");
    assert_eq!(lines[6], "appendProperties = new java.util.ArrayList<de.fzi.cep.sepa.model.impl.eventproperty.EventProperty>();");
    assert_eq!(lines.last().unwrap(), "strategies.add(outputStrategy1);");
}
