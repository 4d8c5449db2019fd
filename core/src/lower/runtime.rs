use std::collections::BTreeSet;

use log::debug;

use super::err::MalformedDescriptorError;
use super::method_builder::MethodBuilder;
use super::model::{OVERRIDE, SEPA_INVOCATION};
use super::naming;
use super::static_parameters::{CONTAINER, extract_static_parameters};
use crate::config::TargetProfile;
use crate::descriptor::StaticParameter;
use crate::error::GenResult;
use crate::position::NodePosition;
use crate::syntax::{ClassName, Expr, MethodDecl, Modifier, Stmt, TypeName};

const ISSUER: &str = "streamgen.lower.runtime";

/// Parameter-holder class of an operator (`<pkg>.<Name>Parameters`).
pub fn parameters_class(operator_name: &str, package_name: &str) -> ClassName {
    ClassName::new(package_name, format!("{}Parameters", operator_name))
}

/// User-supplied processing implementation (`<pkg>.<Name>Program`).
pub fn program_class(operator_name: &str, package_name: &str) -> ClassName {
    ClassName::new(package_name, format!("{}Program", operator_name))
}

/// Build the overridden `getRuntime(graph)` method: extract every static
/// parameter, thread the values into the parameter holder and hand it to the
/// program together with the deployment configuration.
pub fn lower_runtime_method(
    operator_name: &str,
    package_name: &str,
    params: &[StaticParameter],
    target: &TargetProfile,
) -> GenResult<MethodDecl> {
    let parameters = parameters_class(operator_name, package_name);
    let returns = TypeName::parameterized(target.runtime()?, vec![TypeName::Class(parameters.clone())]);

    let mut b = MethodBuilder::new("getRuntime")
        .annotate(OVERRIDE)
        .modifier(Modifier::Protected)
        .returns(returns)
        .param(SEPA_INVOCATION, naming::GRAPH);

    let extracted = extract_static_parameters(&mut b, params)?;
    if extracted.len() != params.len() {
        return Err(MalformedDescriptorError::boxed(
            format!(
                "extracted {} values for {} static parameters of '{}'",
                extracted.len(),
                params.len(),
                operator_name
            ),
            ISSUER,
            None,
        ));
    }
    debug!("threading {} static parameters into {}", extracted.len(), parameters);

    let mut args = Vec::with_capacity(extracted.len() + 1);
    args.push(Expr::name(naming::GRAPH));
    args.extend(extracted.into_iter().map(Expr::name));
    b.declare(parameters.clone(), naming::STATIC_PARAM, Expr::new_instance(parameters, args));

    let config = ClassName::new(package_name, target.config_class.clone());
    let deployment = Expr::new_instance(
        target.deployment_config()?,
        vec![
            Expr::field(config.clone(), target.jar_constant.clone()),
            Expr::field(config.clone(), target.host_constant.clone()),
            Expr::field(config, target.port_constant.clone()),
        ],
    );
    let program = Expr::new_instance(
        program_class(operator_name, package_name),
        vec![Expr::name(naming::STATIC_PARAM), deployment],
    );
    b.append(Stmt::Return(Some(program)));

    let method = b.build();
    check_shadowing(&method, params)?;
    Ok(method)
}

/// A local named like a referenced class, or like the first segment of its
/// package, hides that class in every later qualified reference.
fn check_shadowing(method: &MethodDecl, params: &[StaticParameter]) -> GenResult<()> {
    let mut classes = BTreeSet::new();
    method.collect_classes(&mut classes);
    let hidden: BTreeSet<&str> = classes
        .iter()
        .flat_map(|c| [c.simple(), c.package().split('.').next().unwrap_or_default()])
        .filter(|name| !name.is_empty())
        .collect();

    for (index, param) in params.iter().enumerate() {
        let key = param.internal_name();
        if hidden.contains(key) {
            return Err(MalformedDescriptorError::boxed(
                format!("static parameter key '{}' hides a class referenced by getRuntime", key),
                ISSUER,
                Some(NodePosition::new(CONTAINER, index)),
            ));
        }
    }
    Ok(())
}
