//! file: core/src/lower/model.rs
//! description: classes of the target model library referenced by generated code.
//!
//! Also holds the shorthand-factory table used when lowering appended
//! properties of an Append output strategy.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::descriptor::xsd;
use crate::syntax::{ClassName, TypeName};

const MODEL_BUILDER: &str = "de.fzi.cep.sepa.model.builder";
const MODEL_PROPERTY: &str = "de.fzi.cep.sepa.model.impl.eventproperty";
const MODEL_OUTPUT: &str = "de.fzi.cep.sepa.model.impl.output";
const MODEL_STATIC: &str = "de.fzi.cep.sepa.model.impl.staticproperty";
const MODEL_GRAPH: &str = "de.fzi.cep.sepa.model.impl.graph";

pub const LIST: ClassName = ClassName::from_static("java.util", "List");
pub const ARRAY_LIST: ClassName = ClassName::from_static("java.util", "ArrayList");
pub const URI: ClassName = ClassName::from_static("java.net", "URI");
pub const OVERRIDE: ClassName = ClassName::from_static("java.lang", "Override");

pub const EVENT_PROPERTY: ClassName = ClassName::from_static(MODEL_PROPERTY, "EventProperty");
pub const EVENT_STREAM: ClassName = ClassName::from_static("de.fzi.cep.sepa.model.impl", "EventStream");
pub const STREAM_BUILDER: ClassName = ClassName::from_static(MODEL_BUILDER, "StreamBuilder");
pub const SCHEMA_BUILDER: ClassName = ClassName::from_static(MODEL_BUILDER, "SchemaBuilder");
pub const PRIMITIVE_PROPERTY_BUILDER: ClassName = ClassName::from_static(MODEL_BUILDER, "PrimitivePropertyBuilder");
pub const EP_PROPERTIES: ClassName = ClassName::from_static(MODEL_BUILDER, "EpProperties");

pub const OUTPUT_STRATEGY: ClassName = ClassName::from_static(MODEL_OUTPUT, "OutputStrategy");
pub const APPEND_OUTPUT_STRATEGY: ClassName = ClassName::from_static(MODEL_OUTPUT, "AppendOutputStrategy");

pub const STATIC_PROPERTY: ClassName = ClassName::from_static(MODEL_STATIC, "StaticProperty");
pub const MAPPING_PROPERTY_UNARY: ClassName = ClassName::from_static(MODEL_STATIC, "MappingPropertyUnary");
pub const FREE_TEXT_STATIC_PROPERTY: ClassName = ClassName::from_static(MODEL_STATIC, "FreeTextStaticProperty");

pub const SEPA_DESCRIPTION: ClassName = ClassName::from_static(MODEL_GRAPH, "SepaDescription");
pub const SEPA_INVOCATION: ClassName = ClassName::from_static(MODEL_GRAPH, "SepaInvocation");
pub const SEPA_UTILS: ClassName = ClassName::from_static("de.fzi.cep.sepa.model.util", "SepaUtils");
pub const STANDARD_TRANSPORT_FORMAT: ClassName = ClassName::from_static("de.fzi.cep.sepa.util", "StandardTransportFormat");

/// `List<element>`
pub fn list_of(element: ClassName) -> TypeName {
    TypeName::parameterized(LIST, vec![TypeName::Class(element)])
}

/// `ArrayList<element>`
pub fn array_list_of(element: ClassName) -> TypeName {
    TypeName::parameterized(ARRAY_LIST, vec![TypeName::Class(element)])
}

pub const SCHEMA_NUMBER: &str = "http://schema.org/Number";
pub const SCHEMA_TEXT: &str = "http://schema.org/Text";
pub const SCHEMA_BOOLEAN: &str = "http://schema.org/Boolean";
pub const SCHEMA_DATE_TIME: &str = "http://schema.org/DateTime";

lazy_static! {
    /// domain concept -> runtime type -> `EpProperties` factory method.
    ///
    /// The numeric domain maps to `stringEp` for every numeric runtime type;
    /// generated controllers depend on this mapping, keep it unchanged.
    static ref SHORTHANDS: HashMap<&'static str, HashMap<&'static str, &'static str>> = {
        let mut m: HashMap<&'static str, HashMap<&'static str, &'static str>> = HashMap::new();
        let number = m.entry(SCHEMA_NUMBER).or_default();
        for runtime_type in [xsd::INT, xsd::INTEGER, xsd::LONG, xsd::FLOAT, xsd::DOUBLE] {
            number.insert(runtime_type, "stringEp");
        }
        m.entry(SCHEMA_TEXT).or_default().insert(xsd::STRING, "stringEp");
        m.entry(SCHEMA_BOOLEAN).or_default().insert(xsd::BOOLEAN, "booleanEp");
        m.entry(SCHEMA_DATE_TIME).or_default().insert(xsd::LONG, "longEp");
        m
    };
}

/// Factory method of `EpProperties` for a property with the given domain
/// concept and runtime type, if one exists.
pub fn shorthand_factory(domain: &str, runtime_type: &str) -> Option<&'static str> {
    SHORTHANDS.get(domain).and_then(|by_type| by_type.get(runtime_type)).copied()
}

/// The numeric domain concept is rendered through the string factory.
pub fn is_numeric_string_quirk(domain: &str, runtime_type: &str) -> bool {
    domain == SCHEMA_NUMBER && shorthand_factory(domain, runtime_type) == Some("stringEp")
}
