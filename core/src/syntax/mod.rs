//! file: core/src/syntax/mod.rs
//! description: Java syntax tree produced by lowering.
//!
//! Only the node shapes the controller generator emits are modelled:
//! typed locals, assignments, expression statements and returns inside
//! methods of a single top-level class. `printer` renders the tree.

pub mod decl;
pub mod expr;
pub mod file;
pub mod printer;
pub mod stmt;
pub mod types;

pub use decl::{ClassDecl, MethodDecl, Modifier, Param};
pub use expr::Expr;
pub use file::JavaFile;
pub use printer::{CodeWriter, ImportScope};
pub use stmt::Stmt;
pub use types::{ClassName, TypeName};

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long", "native",
    "new", "package", "private", "protected", "public", "return", "short", "static", "strictfp",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try", "void",
    "volatile", "while", "true", "false", "null", "_",
];

/// True when `s` is usable as a Java identifier (ASCII subset).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let first_ok = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_' || c == '$',
        None => false,
    };
    first_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') && !KEYWORDS.contains(&s)
}

/// True for a dotted package name; the empty string is the default package.
pub fn is_package_name(s: &str) -> bool {
    s.is_empty() || s.split('.').all(is_identifier)
}
