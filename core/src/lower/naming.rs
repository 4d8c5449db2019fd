//! file: core/src/lower/naming.rs
//! description: local variable naming for generated method bodies.
//!
//! Names are a fixed semantic prefix followed by the positional index of the
//! descriptor element being lowered. Siblings never share an index, so
//! container names never collide; there is no counter state.

/// Properties container of a stream (`eventProperties0`).
pub const PROPERTIES: &str = "eventProperties";
/// Element of a properties container (`e0`).
pub const ELEMENT: &str = "e";
pub const STREAM: &str = "stream";
pub const OUTPUT_STRATEGY: &str = "outputStrategy";
pub const STATIC_PROPERTY: &str = "staticProperty";

pub const APPEND_PROPERTIES: &str = "appendProperties";
pub const STRATEGIES: &str = "strategies";
pub const STATIC_PROPERTIES: &str = "staticProperties";
pub const DESCRIPTION: &str = "desc";
pub const GRAPH: &str = "graph";
pub const STATIC_PARAM: &str = "staticParam";

pub fn local_name(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index)
}

pub fn properties_name(index: usize) -> String {
    local_name(PROPERTIES, index)
}

pub fn element_name(index: usize) -> String {
    local_name(ELEMENT, index)
}

pub fn stream_name(index: usize) -> String {
    local_name(STREAM, index)
}

pub fn strategy_name(index: usize) -> String {
    local_name(OUTPUT_STRATEGY, index)
}

pub fn static_property_name(index: usize) -> String {
    local_name(STATIC_PROPERTY, index)
}

