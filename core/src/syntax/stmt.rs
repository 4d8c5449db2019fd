use std::collections::BTreeSet;
use std::fmt;

use super::expr::Expr;
use super::types::{ClassName, TypeName};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    /// Typed local declaration with an initializer.
    Local { ty: TypeName, name: String, init: Expr },
    /// Re-assignment of an already declared local.
    Assign { name: String, value: Expr },
    /// Expression evaluated for its side effect.
    Expr(Expr),
    Return(Option<Expr>),
}

impl Stmt {
    pub fn local(ty: impl Into<TypeName>, name: impl Into<String>, init: Expr) -> Self {
        Stmt::Local { ty: ty.into(), name: name.into(), init }
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Stmt::Assign { name: name.into(), value }
    }

    pub(crate) fn collect_classes(&self, out: &mut BTreeSet<ClassName>) {
        match self {
            Stmt::Local { ty, init, .. } => {
                ty.collect_classes(out);
                init.collect_classes(out);
            }
            Stmt::Assign { value, .. } => value.collect_classes(out),
            Stmt::Expr(e) => e.collect_classes(out),
            Stmt::Return(Some(e)) => e.collect_classes(out),
            Stmt::Return(None) => {}
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = super::printer::CodeWriter::qualified();
        w.emit_stmt(self);
        write!(f, "{}", w.finish())
    }
}
