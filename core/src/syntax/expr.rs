use std::collections::BTreeSet;
use std::fmt;

use super::types::{ClassName, TypeName};

/// Expressions the generator needs: locals, string literals, constructor and
/// static-factory invocations, fluent calls on a receiver and static fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Name(String),
    Str(String),
    New { ty: TypeName, args: Vec<Expr> },
    Static { owner: ClassName, method: String, args: Vec<Expr> },
    Call { receiver: Box<Expr>, method: String, args: Vec<Expr> },
    Field { owner: ClassName, name: String },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn new_instance(ty: impl Into<TypeName>, args: Vec<Expr>) -> Self {
        Expr::New { ty: ty.into(), args }
    }

    pub fn invoke_static(owner: ClassName, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Static { owner, method: method.into(), args }
    }

    pub fn field(owner: ClassName, name: impl Into<String>) -> Self {
        Expr::Field { owner, name: name.into() }
    }

    /// Chain a method call onto this expression (`self.method(args)`).
    pub fn call(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call { receiver: Box::new(self), method: method.into(), args }
    }

    pub(crate) fn collect_classes(&self, out: &mut BTreeSet<ClassName>) {
        match self {
            Expr::Name(_) | Expr::Str(_) => {}
            Expr::New { ty, args } => {
                ty.collect_classes(out);
                args.iter().for_each(|a| a.collect_classes(out));
            }
            Expr::Static { owner, args, .. } => {
                out.insert(owner.clone());
                args.iter().for_each(|a| a.collect_classes(out));
            }
            Expr::Call { receiver, args, .. } => {
                receiver.collect_classes(out);
                args.iter().for_each(|a| a.collect_classes(out));
            }
            Expr::Field { owner, .. } => {
                out.insert(owner.clone());
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = super::printer::CodeWriter::qualified();
        w.emit_expr(self);
        write!(f, "{}", w.finish())
    }
}
