//! file: core/src/descriptor/mod.rs
//! description: the operator descriptor model consumed by lowering.
//!
//! These types describe one stream-processing operator: its input data
//! channels, output strategies, static parameters and transport grounding.
//! They are plain data, deserialized from JSON by `DescriptorSource` or
//! assembled in code, and are never mutated by the generator.

pub mod source;

use serde::{Deserialize, Serialize};

pub use source::DescriptorSource;

/// XML schema datatype URIs used as runtime types of primitive properties.
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub streams: Vec<DataChannel>,
    #[serde(default)]
    pub output_strategies: Vec<OutputStrategy>,
    #[serde(default)]
    pub static_parameters: Vec<StaticParameter>,
    #[serde(default)]
    pub grounding: Option<TransportGrounding>,
}

impl OperatorDescriptor {
    pub fn new(path: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        OperatorDescriptor {
            name: name.into(),
            description: description.into(),
            path: path.into(),
            streams: Vec::new(),
            output_strategies: Vec::new(),
            static_parameters: Vec::new(),
            grounding: None,
        }
    }

    pub fn with_stream(mut self, stream: DataChannel) -> Self {
        self.streams.push(stream);
        self
    }

    pub fn with_output_strategy(mut self, strategy: OutputStrategy) -> Self {
        self.output_strategies.push(strategy);
        self
    }

    pub fn with_static_parameter(mut self, parameter: StaticParameter) -> Self {
        self.static_parameters.push(parameter);
        self
    }

    pub fn with_grounding(mut self, grounding: TransportGrounding) -> Self {
        self.grounding = Some(grounding);
        self
    }
}

/// One input event stream and the schema of its events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataChannel {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl DataChannel {
    pub fn new(name: impl Into<String>, description: impl Into<String>, path: impl Into<String>) -> Self {
        DataChannel {
            name: name.into(),
            description: description.into(),
            path: path.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: Vec<PropertyDescriptor>) -> Self {
        self.properties = properties;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyDescriptor {
    Primitive(PrimitiveProperty),
    Nested(NestedProperty),
    List(ListProperty),
}

impl PropertyDescriptor {
    /// A primitive property that only restricts the domain concept, leaving
    /// runtime type and label open.
    pub fn restriction(domain: impl Into<String>) -> Self {
        PropertyDescriptor::Primitive(PrimitiveProperty {
            runtime_type: String::new(),
            label: String::new(),
            description: String::new(),
            domain: domain.into(),
        })
    }

    pub fn primitive(
        runtime_type: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        PropertyDescriptor::Primitive(PrimitiveProperty {
            runtime_type: runtime_type.into(),
            label: label.into(),
            description: description.into(),
            domain: domain.into(),
        })
    }

    /// Variant name as used in diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            PropertyDescriptor::Primitive(_) => "Primitive",
            PropertyDescriptor::Nested(_) => "Nested",
            PropertyDescriptor::List(_) => "List",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveProperty {
    #[serde(default)]
    pub runtime_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Domain concept URI (e.g. `http://schema.org/Number`).
    #[serde(default)]
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedProperty {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProperty {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub element: Box<PropertyDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputStrategy {
    Append(AppendStrategy),
    Fixed {
        #[serde(default)]
        properties: Vec<PropertyDescriptor>,
    },
    Custom {
        #[serde(default)]
        output_right: bool,
    },
    Rename {
        name: String,
    },
}

impl OutputStrategy {
    pub fn variant_name(&self) -> &'static str {
        match self {
            OutputStrategy::Append(_) => "Append",
            OutputStrategy::Fixed { .. } => "Fixed",
            OutputStrategy::Custom { .. } => "Custom",
            OutputStrategy::Rename { .. } => "Rename",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppendStrategy {
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl AppendStrategy {
    pub fn new() -> Self {
        AppendStrategy::default()
    }

    pub fn with_properties(mut self, properties: Vec<PropertyDescriptor>) -> Self {
        self.properties = properties;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StaticParameter {
    /// Binds the parameter to a property of an input stream.
    Mapping {
        internal_name: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        description: String,
        /// Identifier (URI) of the mapped input property.
        #[serde(default)]
        maps_to: String,
    },
    FreeText {
        internal_name: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        description: String,
        /// Default value; empty means none.
        #[serde(default)]
        value: String,
    },
    OneOf {
        internal_name: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        options: Vec<String>,
    },
}

impl StaticParameter {
    pub fn mapping(
        maps_to: impl Into<String>,
        internal_name: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        StaticParameter::Mapping {
            internal_name: internal_name.into(),
            label: label.into(),
            description: description.into(),
            maps_to: maps_to.into(),
        }
    }

    pub fn free_text(internal_name: impl Into<String>, label: impl Into<String>, description: impl Into<String>) -> Self {
        StaticParameter::FreeText {
            internal_name: internal_name.into(),
            label: label.into(),
            description: description.into(),
            value: String::new(),
        }
    }

    pub fn internal_name(&self) -> &str {
        match self {
            StaticParameter::Mapping { internal_name, .. }
            | StaticParameter::FreeText { internal_name, .. }
            | StaticParameter::OneOf { internal_name, .. } => internal_name,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            StaticParameter::Mapping { .. } => "Mapping",
            StaticParameter::FreeText { .. } => "FreeText",
            StaticParameter::OneOf { .. } => "OneOf",
        }
    }
}

/// Messaging transport and wire formats an operator supports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransportGrounding {
    #[serde(default)]
    pub formats: Vec<String>,
    #[serde(default)]
    pub protocols: Vec<TransportProtocol>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportProtocol {
    pub kind: String,
    #[serde(default)]
    pub broker_hostname: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub topic: String,
}
