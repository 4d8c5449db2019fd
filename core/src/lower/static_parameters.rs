//! file: core/src/lower/static_parameters.rs
//! description: static parameters, both sides.
//!
//! `extract_static_parameters` reads each configured value back out of the
//! invocation graph inside `getRuntime`; `lower_static_parameters` declares
//! the parameters inside `declareModel`. Both walk the parameters in
//! descriptor order.

use std::collections::HashSet;

use log::debug;

use super::err::{MalformedDescriptorError, UnsupportedVariantError};
use super::method_builder::MethodBuilder;
use super::model::{FREE_TEXT_STATIC_PROPERTY, MAPPING_PROPERTY_UNARY, SEPA_UTILS, STATIC_PROPERTY, URI, array_list_of, list_of};
use super::naming;
use crate::descriptor::StaticParameter;
use crate::error::GenResult;
use crate::position::NodePosition;
use crate::syntax::{Expr, TypeName, is_identifier};

const ISSUER: &str = "streamgen.lower.static_parameters";
pub(crate) const CONTAINER: &str = "static_parameters";

/// Emit one `String <key> = SepaUtils...(graph, "<key>")` per parameter and
/// return the extracted variable names in order.
pub fn extract_static_parameters(b: &mut MethodBuilder, params: &[StaticParameter]) -> GenResult<Vec<String>> {
    let mut names = Vec::with_capacity(params.len());
    let mut seen = HashSet::new();

    for (index, param) in params.iter().enumerate() {
        let position = NodePosition::new(CONTAINER, index);
        let getter = match param {
            StaticParameter::Mapping { .. } => "getMappingPropertyName",
            StaticParameter::FreeText { .. } => "getFreeTextStaticPropertyValue",
            StaticParameter::OneOf { .. } => {
                return Err(UnsupportedVariantError::boxed(
                    "static parameter",
                    param.variant_name(),
                    ISSUER,
                    position,
                ));
            }
        };

        let key = param.internal_name();
        check_key(key, &seen, position)?;
        seen.insert(key.to_string());

        debug!("extracting static parameter '{}' through {}", key, getter);
        let init = Expr::invoke_static(SEPA_UTILS, getter, vec![Expr::name(naming::GRAPH), Expr::string(key)]);
        b.declare(TypeName::STRING, key, init);
        names.push(key.to_string());
    }

    Ok(names)
}

fn check_key(key: &str, seen: &HashSet<String>, position: NodePosition) -> GenResult<()> {
    let problem = if !is_identifier(key) {
        "is not a valid variable name"
    } else if key == naming::GRAPH || key == naming::STATIC_PARAM {
        "clashes with a reserved local"
    } else if seen.contains(key) {
        "is used by more than one static parameter"
    } else {
        return Ok(());
    };
    Err(MalformedDescriptorError::boxed(
        format!("static parameter key '{}' {}", key, problem),
        ISSUER,
        Some(position),
    ))
}

/// Declare `staticProperties` and one `staticProperty{k}` per parameter.
pub fn lower_static_parameters(b: &mut MethodBuilder, params: &[StaticParameter]) -> GenResult<()> {
    b.declare(
        list_of(STATIC_PROPERTY),
        naming::STATIC_PROPERTIES,
        Expr::new_instance(array_list_of(STATIC_PROPERTY), vec![]),
    );

    for (k, param) in params.iter().enumerate() {
        let local = naming::static_property_name(k);
        match param {
            StaticParameter::Mapping { internal_name, label, description, maps_to } => {
                let uri = Expr::invoke_static(URI, "create", vec![Expr::string(maps_to)]);
                b.declare(
                    MAPPING_PROPERTY_UNARY,
                    local.clone(),
                    Expr::new_instance(
                        MAPPING_PROPERTY_UNARY,
                        vec![uri, Expr::string(internal_name), Expr::string(label), Expr::string(description)],
                    ),
                );
            }
            StaticParameter::FreeText { internal_name, label, description, value } => {
                b.declare(
                    FREE_TEXT_STATIC_PROPERTY,
                    local.clone(),
                    Expr::new_instance(
                        FREE_TEXT_STATIC_PROPERTY,
                        vec![Expr::string(internal_name), Expr::string(label), Expr::string(description)],
                    ),
                );
                if !value.is_empty() {
                    b.exec(Expr::name(local.clone()).call("setValue", vec![Expr::string(value)]));
                }
            }
            StaticParameter::OneOf { .. } => {
                return Err(UnsupportedVariantError::boxed(
                    "static parameter",
                    param.variant_name(),
                    ISSUER,
                    NodePosition::new(naming::STATIC_PROPERTIES, k),
                ));
            }
        }
        b.exec(Expr::name(naming::STATIC_PROPERTIES).call("add", vec![Expr::name(local)]));
    }
    Ok(())
}
