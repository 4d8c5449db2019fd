use std::path::PathBuf;

use crate::descriptor::OperatorDescriptor;
use crate::error::{ErrorKind, GenResult, Level, StreamgenErrorExt};
use crate::position::NodePosition;

/// A descriptor document as read from disk, before decoding.
#[derive(Debug, Clone)]
pub struct DescriptorSource {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

impl DescriptorSource {
    pub fn new(path: PathBuf) -> GenResult<Self> {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(MissingDescriptorError {
                path: path.clone(),
                reason: e.to_string(),
            }) as Box<dyn StreamgenErrorExt>
        })?;
        Ok(DescriptorSource { name, path, content })
    }

    pub fn from_string(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        DescriptorSource {
            path: PathBuf::from(&name),
            name,
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Decode the JSON document into an `OperatorDescriptor`.
    pub fn parse(&self) -> GenResult<OperatorDescriptor> {
        serde_json::from_str(&self.content).map_err(|e| {
            Box::new(DescriptorParseError {
                name: self.name.clone(),
                line: e.line(),
                column: e.column(),
                reason: e.to_string(),
            }) as Box<dyn StreamgenErrorExt>
        })
    }
}

impl std::fmt::Display for DescriptorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Descriptor: {} at {:?}", self.name, self.path)
    }
}

#[derive(Debug, Clone)]
pub struct MissingDescriptorError {
    pub path: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for MissingDescriptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing descriptor at {:?}: {}", self.path, self.reason)
    }
}

impl std::error::Error for MissingDescriptorError {}

impl StreamgenErrorExt for MissingDescriptorError {
    fn level(&self) -> Level {
        Level::Error
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::MissingInput
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn issuer(&self) -> String {
        "streamgen.descriptor.source".to_string()
    }

    fn position(&self) -> Option<NodePosition> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct DescriptorParseError {
    pub name: String,
    pub line: usize,
    pub column: usize,
    pub reason: String,
}

impl std::fmt::Display for DescriptorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not decode descriptor {} ({}:{}): {}", self.name, self.line, self.column, self.reason)
    }
}

impl std::error::Error for DescriptorParseError {}

impl StreamgenErrorExt for DescriptorParseError {
    fn level(&self) -> Level {
        Level::Error
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn issuer(&self) -> String {
        "streamgen.descriptor.parse".to_string()
    }

    fn position(&self) -> Option<NodePosition> {
        None
    }
}
