//! file: core/src/lower/mod.rs
//! description: lowering of an operator descriptor into method bodies.
//!
//! Each submodule lowers one descriptor category by appending statements to
//! the `MethodBuilder` of the method being generated. Passes run once per
//! descriptor element, in descriptor order, and stop at the first failure.

pub mod channels;
pub mod err;
pub mod grounding;
pub mod method_builder;
pub mod model;
pub mod naming;
pub mod output_strategies;
pub mod properties;
pub mod runtime;
pub mod static_parameters;

pub use channels::lower_data_channel;
pub use err::{MalformedDescriptorError, UnsupportedVariantError};
pub use grounding::lower_grounding;
pub use method_builder::MethodBuilder;
pub use output_strategies::{lower_append_strategy, lower_output_strategies};
pub use properties::lower_properties;
pub use runtime::lower_runtime_method;
pub use static_parameters::{extract_static_parameters, lower_static_parameters};
