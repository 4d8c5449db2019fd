use std::fmt;

use super::decl::ClassDecl;
use super::printer::{CodeWriter, ImportScope};

/// A compilation unit: one top-level class with its package clause,
/// imports and an optional leading line comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaFile {
    pub class: ClassDecl,
    pub file_comment: Option<String>,
}

impl JavaFile {
    pub fn new(class: ClassDecl) -> Self {
        JavaFile { class, file_comment: None }
    }

    pub fn with_file_comment(mut self, comment: impl Into<String>) -> Self {
        self.file_comment = Some(comment.into());
        self
    }

    /// Relative path of the unit (`de/fzi/Foo.java`).
    pub fn relative_path(&self) -> std::path::PathBuf {
        let mut path = std::path::PathBuf::new();
        for segment in self.class.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", self.class.name));
        path
    }

    pub fn render(&self) -> String {
        let scope = ImportScope::for_class(&self.class);
        let mut w = CodeWriter::scoped(&scope);

        if let Some(comment) = &self.file_comment {
            for line in comment.lines() {
                w.push("// ");
                w.push(line);
                w.push("\n");
            }
        }
        if !self.class.package.is_empty() {
            w.push("package ");
            w.push(&self.class.package);
            w.push(";\n\n");
        }
        let imports = scope.imports();
        for import in &imports {
            w.push("import ");
            w.push(import);
            w.push(";\n");
        }
        if !imports.is_empty() {
            w.push("\n");
        }
        w.emit_class(&self.class);
        w.finish()
    }
}

impl fmt::Display for JavaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
