//! file: core/src/config.rs
//! description: target runtime profile.
//!
//! A `TargetProfile` names the runtime-specific classes and constants the
//! generated controller is wired against. Every field has a default matching
//! the Flink runtime, so an empty JSON object is a valid profile.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ErrorKind, GenResult, Level, StreamgenErrorExt};
use crate::position::NodePosition;
use crate::syntax::{ClassName, is_identifier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetProfile {
    /// Generic runtime returned by `getRuntime`, parameterized with the
    /// operator's parameter class.
    pub runtime_class: String,
    pub deployment_config_class: String,
    /// Superclass of the generated controller.
    pub declarer_class: String,
    /// Simple name of the per-operator constants class in the target package.
    pub config_class: String,
    pub jar_constant: String,
    pub host_constant: String,
    pub port_constant: String,
    /// Optional line comment written at the top of every generated file.
    pub file_comment: Option<String>,
}

impl Default for TargetProfile {
    fn default() -> Self {
        TargetProfile {
            runtime_class: "de.fzi.cep.sepa.flink.FlinkSepaRuntime".to_string(),
            deployment_config_class: "de.fzi.cep.sepa.flink.FlinkDeploymentConfig".to_string(),
            declarer_class: "de.fzi.cep.sepa.flink.AbstractFlinkAgentDeclarer".to_string(),
            config_class: "Config".to_string(),
            jar_constant: "JAR_FILE".to_string(),
            host_constant: "FLINK_HOST".to_string(),
            port_constant: "FLINK_PORT".to_string(),
            file_comment: None,
        }
    }
}

impl TargetProfile {
    /// Load a profile from a JSON file path.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GenResult<TargetProfile> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::boxed(format!("read profile {}: {}", path.display(), e)))?;
        let profile: TargetProfile = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::boxed(format!("parse profile {}: {}", path.display(), e)))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Check that class names are dotted identifiers and constants are
    /// identifiers.
    pub fn validate(&self) -> GenResult<()> {
        for (field, value) in [
            ("runtime_class", &self.runtime_class),
            ("deployment_config_class", &self.deployment_config_class),
            ("declarer_class", &self.declarer_class),
        ] {
            if ClassName::parse(value).is_none() {
                return Err(ConfigError::boxed(format!("{} '{}' is not a class name", field, value)));
            }
        }
        for (field, value) in [
            ("config_class", &self.config_class),
            ("jar_constant", &self.jar_constant),
            ("host_constant", &self.host_constant),
            ("port_constant", &self.port_constant),
        ] {
            if !is_identifier(value) {
                return Err(ConfigError::boxed(format!("{} '{}' is not an identifier", field, value)));
            }
        }
        Ok(())
    }

    pub fn runtime(&self) -> GenResult<ClassName> {
        Self::class("runtime_class", &self.runtime_class)
    }

    pub fn deployment_config(&self) -> GenResult<ClassName> {
        Self::class("deployment_config_class", &self.deployment_config_class)
    }

    pub fn declarer(&self) -> GenResult<ClassName> {
        Self::class("declarer_class", &self.declarer_class)
    }

    fn class(field: &str, value: &str) -> GenResult<ClassName> {
        ClassName::parse(value)
            .ok_or_else(|| ConfigError::boxed(format!("{} '{}' is not a class name", field, value)))
    }
}

#[derive(Debug, Clone)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn boxed(message: String) -> Box<dyn StreamgenErrorExt> {
        Box::new(ConfigError { message })
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

impl StreamgenErrorExt for ConfigError {
    fn level(&self) -> Level {
        Level::Error
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidConfig
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        "streamgen.config".to_string()
    }

    fn position(&self) -> Option<NodePosition> {
        None
    }
}
