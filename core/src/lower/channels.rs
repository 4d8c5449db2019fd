use log::debug;

use super::method_builder::MethodBuilder;
use super::model::{EVENT_STREAM, SCHEMA_BUILDER, STREAM_BUILDER};
use super::naming;
use super::properties::lower_properties;
use crate::descriptor::DataChannel;
use crate::error::GenResult;
use crate::syntax::Expr;

/// Lower one input stream into `stream{index}`, built from
/// `eventProperties{index}`.
pub fn lower_data_channel(b: &mut MethodBuilder, channel: &DataChannel, index: usize) -> GenResult<()> {
    debug!("lowering stream '{}' as {}", channel.name, naming::stream_name(index));
    lower_properties(b, &channel.properties, index)?;

    let schema = Expr::invoke_static(SCHEMA_BUILDER, "create", vec![])
        .call("properties", vec![Expr::name(naming::properties_name(index))])
        .call("build", vec![]);
    let stream = Expr::invoke_static(
        STREAM_BUILDER,
        "createStream",
        vec![
            Expr::string(&channel.name),
            Expr::string(&channel.description),
            Expr::string(&channel.path),
        ],
    )
    .call("schema", vec![schema])
    .call("build", vec![]);

    b.declare(EVENT_STREAM, naming::stream_name(index), stream);
    Ok(())
}
