use log::{debug, warn};

use super::err::UnsupportedVariantError;
use super::method_builder::MethodBuilder;
use super::model::{
    APPEND_OUTPUT_STRATEGY, EP_PROPERTIES, EVENT_PROPERTY, OUTPUT_STRATEGY, array_list_of, is_numeric_string_quirk,
    list_of, shorthand_factory,
};
use super::naming;
use super::properties::lower_element;
use crate::descriptor::{AppendStrategy, OutputStrategy, PropertyDescriptor};
use crate::error::GenResult;
use crate::position::NodePosition;
use crate::syntax::Expr;

const ISSUER: &str = "streamgen.lower.output_strategies";

/// Declare `strategies` and lower every output strategy into it.
pub fn lower_output_strategies(b: &mut MethodBuilder, strategies: &[OutputStrategy]) -> GenResult<()> {
    b.declare(
        list_of(OUTPUT_STRATEGY),
        naming::STRATEGIES,
        Expr::new_instance(array_list_of(OUTPUT_STRATEGY), vec![]),
    );

    for (index, strategy) in strategies.iter().enumerate() {
        match strategy {
            OutputStrategy::Append(append) => lower_append_strategy(b, append, index)?,
            other => {
                return Err(UnsupportedVariantError::boxed(
                    "output strategy",
                    other.variant_name(),
                    ISSUER,
                    NodePosition::new(naming::STRATEGIES, index),
                ));
            }
        }
        b.exec(Expr::name(naming::STRATEGIES).call("add", vec![Expr::name(naming::strategy_name(index))]));
    }
    Ok(())
}

/// Lower one Append strategy into `outputStrategy{index}`.
pub fn lower_append_strategy(b: &mut MethodBuilder, strategy: &AppendStrategy, index: usize) -> GenResult<()> {
    let local = naming::strategy_name(index);
    debug!("lowering append strategy with {} properties as {}", strategy.properties.len(), local);

    b.declare(APPEND_OUTPUT_STRATEGY, local.clone(), Expr::new_instance(APPEND_OUTPUT_STRATEGY, vec![]));
    b.declare(
        list_of(EVENT_PROPERTY),
        naming::APPEND_PROPERTIES,
        Expr::new_instance(array_list_of(EVENT_PROPERTY), vec![]),
    );

    for (i, property) in strategy.properties.iter().enumerate() {
        match shorthand(property) {
            Some(expr) => {
                b.exec(Expr::name(naming::APPEND_PROPERTIES).call("add", vec![expr]));
            }
            None => lower_element(b, naming::APPEND_PROPERTIES, property, i)?,
        }
    }

    b.exec(Expr::name(local).call("setEventProperties", vec![Expr::name(naming::APPEND_PROPERTIES)]));
    Ok(())
}

fn shorthand(property: &PropertyDescriptor) -> Option<Expr> {
    let PropertyDescriptor::Primitive(p) = property else {
        return None;
    };
    let factory = shorthand_factory(&p.domain, &p.runtime_type)?;
    if is_numeric_string_quirk(&p.domain, &p.runtime_type) {
        warn!(
            "appended property '{}' ({}) is emitted through EpProperties.{}",
            p.label, p.runtime_type, factory
        );
    }
    Some(Expr::invoke_static(
        EP_PROPERTIES,
        factory,
        vec![Expr::string(&p.label), Expr::string(&p.domain)],
    ))
}
