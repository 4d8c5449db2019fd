use log::debug;

use super::err::{MalformedDescriptorError, UnsupportedVariantError};
use super::method_builder::MethodBuilder;
use super::model::{EVENT_PROPERTY, PRIMITIVE_PROPERTY_BUILDER, array_list_of, list_of};
use super::naming;
use crate::descriptor::PropertyDescriptor;
use crate::error::GenResult;
use crate::position::NodePosition;
use crate::syntax::Expr;

const ISSUER: &str = "streamgen.lower.properties";

/// Declare `eventProperties{index}` and populate it with one element per
/// property, in order. The container is declared even for an empty list.
pub fn lower_properties(b: &mut MethodBuilder, properties: &[PropertyDescriptor], index: usize) -> GenResult<()> {
    let container = naming::properties_name(index);
    debug!("lowering {} properties into {}", properties.len(), container);

    b.declare(
        list_of(EVENT_PROPERTY),
        container.clone(),
        Expr::new_instance(array_list_of(EVENT_PROPERTY), vec![]),
    );
    for (i, property) in properties.iter().enumerate() {
        lower_element(b, &container, property, i)?;
    }
    Ok(())
}

/// Emit `e{i} = <construction>` followed by `container.add(e{i})`.
pub(crate) fn lower_element(
    b: &mut MethodBuilder,
    container: &str,
    property: &PropertyDescriptor,
    i: usize,
) -> GenResult<()> {
    let init = property_expr(property, NodePosition::new(container, i))?;
    let element = naming::element_name(i);
    b.declare(EVENT_PROPERTY, element.clone(), init);
    b.exec(Expr::name(container).call("add", vec![Expr::name(element)]));
    Ok(())
}

/// Construction expression of one property.
pub fn property_expr(property: &PropertyDescriptor, position: NodePosition) -> GenResult<Expr> {
    match property {
        PropertyDescriptor::Primitive(p) => {
            if p.domain.trim().is_empty() {
                return Err(MalformedDescriptorError::boxed(
                    format!("primitive property '{}' has no domain concept", p.label),
                    ISSUER,
                    Some(position),
                ));
            }
            Ok(
                Expr::invoke_static(PRIMITIVE_PROPERTY_BUILDER, "createPropertyRestriction", vec![Expr::string(&p.domain)])
                    .call("build", vec![]),
            )
        }
        PropertyDescriptor::Nested(_) | PropertyDescriptor::List(_) => Err(UnsupportedVariantError::boxed(
            "property",
            property.variant_name(),
            ISSUER,
            position,
        )),
    }
}
