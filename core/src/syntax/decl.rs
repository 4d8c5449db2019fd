//! file: core/src/syntax/decl.rs
//! description: method and class declarations.
//!
//! `MethodDecl` and `ClassDecl` are immutable once built; the lowering
//! passes produce them through `MethodBuilder` and the controller generator.

use std::collections::BTreeSet;
use std::fmt;

use super::stmt::Stmt;
use super::types::{ClassName, TypeName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Abstract => "abstract",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    pub ty: TypeName,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub annotations: Vec<ClassName>,
    pub modifiers: Vec<Modifier>,
    pub returns: TypeName,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

impl MethodDecl {
    pub(crate) fn collect_classes(&self, out: &mut BTreeSet<ClassName>) {
        out.extend(self.annotations.iter().cloned());
        self.returns.collect_classes(out);
        for p in &self.params {
            p.ty.collect_classes(out);
        }
        for s in &self.body {
            s.collect_classes(out);
        }
    }
}

impl fmt::Display for MethodDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = super::printer::CodeWriter::qualified();
        w.emit_method(self);
        write!(f, "{}", w.finish())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub package: String,
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub superclass: Option<TypeName>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn class_name(&self) -> ClassName {
        ClassName::new(self.package.clone(), self.name.clone())
    }

    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Every class referenced from the declaration, its signatures and bodies.
    pub fn referenced_classes(&self) -> BTreeSet<ClassName> {
        let mut out = BTreeSet::new();
        if let Some(sup) = &self.superclass {
            sup.collect_classes(&mut out);
        }
        for m in &self.methods {
            m.collect_classes(&mut out);
        }
        out
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = super::printer::CodeWriter::qualified();
        w.emit_class(self);
        write!(f, "{}", w.finish())
    }
}
