use std::collections::HashMap;

use log::trace;

use crate::syntax::{ClassName, Expr, MethodDecl, Modifier, Param, Stmt, TypeName};

/// A per-method lowering helper: an append-only statement buffer plus the
/// set of locals already declared in the body. Lowering passes receive the
/// builder of the enclosing method by `&mut` and append to it directly.
pub struct MethodBuilder {
    name: String,
    annotations: Vec<ClassName>,
    modifiers: Vec<Modifier>,
    returns: TypeName,
    params: Vec<Param>,
    locals: HashMap<String, TypeName>,
    body: Vec<Stmt>,
}

impl MethodBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        MethodBuilder {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: Vec::new(),
            returns: TypeName::Void,
            params: Vec::new(),
            locals: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn annotate(mut self, annotation: ClassName) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn returns(mut self, ty: impl Into<TypeName>) -> Self {
        self.returns = ty.into();
        self
    }

    /// Parameters count as declared locals of the body.
    pub fn param(mut self, ty: impl Into<TypeName>, name: impl Into<String>) -> Self {
        let ty = ty.into();
        let name = name.into();
        self.locals.insert(name.clone(), ty.clone());
        self.params.push(Param { ty, name });
        self
    }

    pub fn append(&mut self, stmt: Stmt) -> &mut Self {
        trace!("{}: {}", self.name, stmt);
        if let Stmt::Local { ty, name, .. } = &stmt {
            self.locals.insert(name.clone(), ty.clone());
        }
        self.body.push(stmt);
        self
    }

    /// Declare `name`, or re-assign it when an earlier statement of this
    /// body already declared it.
    pub fn declare(&mut self, ty: impl Into<TypeName>, name: impl Into<String>, init: Expr) -> &mut Self {
        let name = name.into();
        if self.is_declared(&name) {
            self.append(Stmt::assign(name, init))
        } else {
            self.append(Stmt::local(ty, name, init))
        }
    }

    /// Append an expression statement.
    pub fn exec(&mut self, expr: Expr) -> &mut Self {
        self.append(Stmt::Expr(expr))
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.locals.contains_key(name)
    }

    pub fn lookup_local(&self, name: &str) -> Option<&TypeName> {
        self.locals.get(name)
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.body
    }

    pub fn current_len(&self) -> usize {
        self.body.len()
    }

    pub fn build(self) -> MethodDecl {
        MethodDecl {
            name: self.name,
            annotations: self.annotations,
            modifiers: self.modifiers,
            returns: self.returns,
            params: self.params,
            body: self.body,
        }
    }
}
