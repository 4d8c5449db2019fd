pub mod config;
pub mod controller;
pub mod descriptor;
pub mod error;
pub mod lower;
pub mod position;
pub mod syntax;

pub use config::TargetProfile;
pub use controller::ControllerGenerator;
pub use descriptor::{DescriptorSource, OperatorDescriptor};
pub use error::{ErrorKind, GenResult, Level, StreamgenErrorExt};
pub use position::NodePosition;
pub use syntax::{ClassDecl, JavaFile, MethodDecl};

pub fn generate_error_report<E: StreamgenErrorExt + ?Sized>(error: &E) -> String {
    let level = error.level();
    let position = match error.position() {
        Some(pos) => pos.to_string(),
        None => "unknown position".to_string(),
    };
    let message = error.message();

    format!("STREAMGEN | {} | {} | {}", level, position, message)
}

/// Generate the controller compilation unit for `descriptor` and render it.
pub fn generate_controller(
    descriptor: &OperatorDescriptor,
    operator_name: &str,
    package_name: &str,
    target: &TargetProfile,
) -> GenResult<String> {
    let file = ControllerGenerator::new(descriptor, operator_name, package_name)
        .with_target(target.clone())
        .build_file()?;
    Ok(file.render())
}

/// Load a descriptor file and parse it.
pub fn load_descriptor<P: AsRef<std::path::Path>>(path: P) -> GenResult<OperatorDescriptor> {
    let source = DescriptorSource::new(path.as_ref().to_path_buf())?;
    source.parse()
}
