//! file: core/src/controller.rs
//! description: assembles the controller class of one operator.
//!
//! The controller reconstructs the descriptor in `declareModel()` and wires
//! the user's program in `getRuntime(graph)`. Statement order inside both
//! methods follows descriptor order and is stable across runs.

use log::{debug, info};

use crate::config::TargetProfile;
use crate::descriptor::OperatorDescriptor;
use crate::error::GenResult;
use crate::lower::model::{OVERRIDE, SEPA_DESCRIPTION};
use crate::lower::runtime::parameters_class;
use crate::lower::{
    MalformedDescriptorError, MethodBuilder, lower_data_channel, lower_grounding, lower_output_strategies,
    lower_runtime_method, lower_static_parameters, naming,
};
use crate::syntax::{ClassDecl, Expr, JavaFile, MethodDecl, Modifier, Stmt, TypeName, is_identifier, is_package_name};

const ISSUER: &str = "streamgen.controller";

pub struct ControllerGenerator<'a> {
    descriptor: &'a OperatorDescriptor,
    operator_name: String,
    package_name: String,
    target: TargetProfile,
}

impl<'a> ControllerGenerator<'a> {
    pub fn new(descriptor: &'a OperatorDescriptor, operator_name: impl Into<String>, package_name: impl Into<String>) -> Self {
        ControllerGenerator {
            descriptor,
            operator_name: operator_name.into(),
            package_name: package_name.into(),
            target: TargetProfile::default(),
        }
    }

    pub fn with_target(mut self, target: TargetProfile) -> Self {
        self.target = target;
        self
    }

    pub fn controller_class_name(&self) -> String {
        format!("{}Controller", self.operator_name)
    }

    /// `public SepaDescription declareModel()`
    pub fn declare_model(&self) -> GenResult<MethodDecl> {
        let d = self.descriptor;
        let mut b = MethodBuilder::new("declareModel")
            .annotate(OVERRIDE)
            .modifier(Modifier::Public)
            .returns(SEPA_DESCRIPTION);

        b.declare(
            SEPA_DESCRIPTION,
            naming::DESCRIPTION,
            Expr::new_instance(
                SEPA_DESCRIPTION,
                vec![Expr::string(&d.path), Expr::string(&d.name), Expr::string(&d.description)],
            ),
        );

        for (index, stream) in d.streams.iter().enumerate() {
            lower_data_channel(&mut b, stream, index)?;
            b.exec(Expr::name(naming::DESCRIPTION).call("addEventStream", vec![Expr::name(naming::stream_name(index))]));
        }

        lower_output_strategies(&mut b, &d.output_strategies)?;
        b.exec(Expr::name(naming::DESCRIPTION).call("setOutputStrategies", vec![Expr::name(naming::STRATEGIES)]));

        lower_grounding(&mut b, d.grounding.as_ref());

        lower_static_parameters(&mut b, &d.static_parameters)?;
        b.exec(
            Expr::name(naming::DESCRIPTION).call("setStaticProperties", vec![Expr::name(naming::STATIC_PROPERTIES)]),
        );

        b.append(Stmt::Return(Some(Expr::name(naming::DESCRIPTION))));
        debug!("declareModel of {} has {} statements", self.operator_name, b.current_len());
        Ok(b.build())
    }

    /// `protected <Runtime><<Name>Parameters> getRuntime(SepaInvocation graph)`
    pub fn runtime_method(&self) -> GenResult<MethodDecl> {
        lower_runtime_method(
            &self.operator_name,
            &self.package_name,
            &self.descriptor.static_parameters,
            &self.target,
        )
    }

    pub fn build(&self) -> GenResult<ClassDecl> {
        self.validate_names()?;
        info!("generating {} for operator '{}'", self.controller_class_name(), self.descriptor.name);

        let superclass = TypeName::parameterized(
            self.target.declarer()?,
            vec![TypeName::Class(parameters_class(&self.operator_name, &self.package_name))],
        );
        let methods = vec![self.declare_model()?, self.runtime_method()?];

        Ok(ClassDecl {
            package: self.package_name.clone(),
            name: self.controller_class_name(),
            modifiers: vec![Modifier::Public],
            superclass: Some(superclass),
            methods,
        })
    }

    /// The class as a compilation unit, with the profile's file comment.
    pub fn build_file(&self) -> GenResult<JavaFile> {
        let file = JavaFile::new(self.build()?);
        Ok(match &self.target.file_comment {
            Some(comment) => file.with_file_comment(comment.clone()),
            None => file,
        })
    }

    fn validate_names(&self) -> GenResult<()> {
        if !is_identifier(&self.operator_name) {
            return Err(MalformedDescriptorError::boxed(
                format!("operator name '{}' is not a valid class name", self.operator_name),
                ISSUER,
                None,
            ));
        }
        if !is_package_name(&self.package_name) {
            return Err(MalformedDescriptorError::boxed(
                format!("package '{}' is not a valid package name", self.package_name),
                ISSUER,
                None,
            ));
        }
        Ok(())
    }
}
