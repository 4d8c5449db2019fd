use log::debug;

use super::method_builder::MethodBuilder;
use super::model::STANDARD_TRANSPORT_FORMAT;
use super::naming;
use crate::descriptor::TransportGrounding;
use crate::syntax::Expr;

/// Emit the supported-grounding assignment on `desc`.
///
/// The generated controller always advertises the standard transport
/// formats; the descriptor's own grounding is not consulted.
pub fn lower_grounding(b: &mut MethodBuilder, grounding: Option<&TransportGrounding>) {
    if grounding.is_some() {
        debug!("descriptor grounding ignored, using the standard transport formats");
    }
    let supported = Expr::invoke_static(STANDARD_TRANSPORT_FORMAT, "getSupportedGrounding", vec![]);
    b.exec(Expr::name(naming::DESCRIPTION).call("setSupportedGrounding", vec![supported]));
}
