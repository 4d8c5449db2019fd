use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_str = match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        };
        write!(f, "{}", level_str)
    }
}

/// Broad failure category, so callers can branch without downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A descriptor node carries a variant this lowering pass does not handle.
    UnsupportedVariant,
    /// A structural precondition of the descriptor is violated.
    MalformedDescriptor,
    /// The descriptor file could not be read.
    MissingInput,
    /// The descriptor file could not be decoded.
    InvalidInput,
    /// The target profile is unreadable or inconsistent.
    InvalidConfig,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self {
            ErrorKind::UnsupportedVariant => "unsupported variant",
            ErrorKind::MalformedDescriptor => "malformed descriptor",
            ErrorKind::MissingInput => "missing input",
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::InvalidConfig => "invalid config",
        };
        write!(f, "{}", kind_str)
    }
}

pub trait StreamgenErrorExt {
    fn level(&self) -> Level;
    fn kind(&self) -> ErrorKind;
    fn message(&self) -> String;
    fn issuer(&self) -> String;
    fn position(&self) -> Option<crate::position::NodePosition>;
}

/// Result alias used by every fallible operation in the crate.
pub type GenResult<T> = Result<T, Box<dyn StreamgenErrorExt>>;

impl fmt::Debug for dyn StreamgenErrorExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos_str = match self.position() {
            Some(pos) => pos.to_string(),
            None => "unknown".to_string(),
        };

        write!(
            f,
            "STREAMGEN | {} | {} | {} | {} | {}",
            self.level(),
            self.kind(),
            pos_str,
            self.issuer(),
            self.message()
        )
    }
}

impl fmt::Display for dyn StreamgenErrorExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
