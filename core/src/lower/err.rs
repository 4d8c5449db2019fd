use crate::error::{ErrorKind, Level, StreamgenErrorExt};
use crate::position::NodePosition;

/// A descriptor node carries a variant this lowering pass does not handle.
#[derive(Debug, Clone)]
pub struct UnsupportedVariantError {
    level: Level,
    category: String,
    variant: String,
    issuer: String,
    position: NodePosition,
}

impl UnsupportedVariantError {
    pub fn new(category: &str, variant: &str, issuer: &str, position: NodePosition) -> Self {
        UnsupportedVariantError {
            level: Level::Error,
            category: category.to_string(),
            variant: variant.to_string(),
            issuer: issuer.to_string(),
            position,
        }
    }

    pub fn boxed(category: &str, variant: &str, issuer: &str, position: NodePosition) -> Box<dyn StreamgenErrorExt> {
        Box::new(Self::new(category, variant, issuer, position))
    }
}

impl std::fmt::Display for UnsupportedVariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} variant '{}' is not supported at {}", self.category, self.variant, self.position)
    }
}

impl std::error::Error for UnsupportedVariantError {}

impl StreamgenErrorExt for UnsupportedVariantError {
    fn level(&self) -> Level {
        self.level
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UnsupportedVariant
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn issuer(&self) -> String {
        self.issuer.clone()
    }

    fn position(&self) -> Option<NodePosition> {
        Some(self.position.clone())
    }
}

/// A structural precondition of the descriptor does not hold.
#[derive(Debug, Clone)]
pub struct MalformedDescriptorError {
    level: Level,
    message: String,
    issuer: String,
    position: Option<NodePosition>,
}

impl MalformedDescriptorError {
    pub fn with(level: Level, message: String, issuer: String, position: Option<NodePosition>) -> Self {
        MalformedDescriptorError { level, message, issuer, position }
    }

    pub fn boxed(message: String, issuer: &str, position: Option<NodePosition>) -> Box<dyn StreamgenErrorExt> {
        Box::new(Self::with(Level::Error, message, issuer.to_string(), position))
    }
}

impl std::fmt::Display for MalformedDescriptorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(pos) = &self.position {
            write!(f, "{} at {}", self.message, pos)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for MalformedDescriptorError {}

impl StreamgenErrorExt for MalformedDescriptorError {
    fn level(&self) -> Level {
        self.level
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::MalformedDescriptor
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        self.issuer.clone()
    }

    fn position(&self) -> Option<NodePosition> {
        self.position.clone()
    }
}
