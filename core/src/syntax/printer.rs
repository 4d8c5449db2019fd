//! file: core/src/syntax/printer.rs
//! description: renders syntax nodes to Java source text.
//!
//! `CodeWriter` has two modes. Without an `ImportScope` every class is
//! written fully qualified, which is what the `Display` impls of the syntax
//! nodes use. With a scope (built for one compilation unit) classes that are
//! imported, live in the unit's package or in `java.lang` are written by
//! their simple name.

use std::collections::{BTreeMap, BTreeSet};

use super::decl::{ClassDecl, MethodDecl};
use super::expr::Expr;
use super::stmt::Stmt;
use super::types::{ClassName, TypeName};

pub(crate) const INDENT: &str = "  ";
const JAVA_LANG: &str = "java.lang";

/// Import table of one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct ImportScope {
    package: String,
    imports: BTreeMap<String, ClassName>,
    local_names: BTreeSet<String>,
}

impl ImportScope {
    /// Import every referenced class whose simple name is unambiguous.
    /// Simple names that clash with the unit's own package win over imports;
    /// clashing foreign classes stay fully qualified.
    pub fn for_class(class: &ClassDecl) -> Self {
        let referenced = class.referenced_classes();

        let mut local_names: BTreeSet<String> = referenced
            .iter()
            .filter(|c| c.package() == class.package)
            .map(|c| c.simple().to_string())
            .collect();
        local_names.insert(class.name.clone());

        let mut by_simple: BTreeMap<&str, Vec<&ClassName>> = BTreeMap::new();
        for c in referenced.iter() {
            by_simple.entry(c.simple()).or_default().push(c);
        }

        let mut imports = BTreeMap::new();
        for (simple, classes) in by_simple {
            if local_names.contains(simple) || classes.len() != 1 {
                continue;
            }
            let c = classes[0];
            // default-package classes cannot be imported
            if c.package() == JAVA_LANG || c.package().is_empty() {
                continue;
            }
            imports.insert(simple.to_string(), c.clone());
        }

        ImportScope { package: class.package.clone(), imports, local_names }
    }

    /// Imported classes ordered by canonical name.
    pub fn imports(&self) -> Vec<String> {
        let mut out: Vec<String> = self.imports.values().map(|c| c.canonical()).collect();
        out.sort();
        out
    }

    fn resolves_simple(&self, class: &ClassName) -> bool {
        if self.imports.get(class.simple()) == Some(class) {
            return true;
        }
        if class.package() == self.package {
            return true;
        }
        class.package() == JAVA_LANG
            && !self.imports.contains_key(class.simple())
            && !self.local_names.contains(class.simple())
    }
}

pub struct CodeWriter<'a> {
    out: String,
    indent: usize,
    scope: Option<&'a ImportScope>,
}

impl<'a> CodeWriter<'a> {
    pub fn qualified() -> Self {
        CodeWriter { out: String::new(), indent: 0, scope: None }
    }

    pub fn scoped(scope: &'a ImportScope) -> Self {
        CodeWriter { out: String::new(), indent: 0, scope: Some(scope) }
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub(crate) fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    fn class_ref(&self, class: &ClassName) -> String {
        match self.scope {
            Some(scope) if scope.resolves_simple(class) => class.simple().to_string(),
            _ => class.canonical(),
        }
    }

    pub fn emit_type(&mut self, ty: &TypeName) {
        match ty {
            TypeName::Void => self.push("void"),
            TypeName::Simple(s) => self.push(s),
            TypeName::Class(c) => {
                let name = self.class_ref(c);
                self.push(&name);
            }
            TypeName::Parameterized { raw, args } => {
                let name = self.class_ref(raw);
                self.push(&name);
                self.push("<");
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.emit_type(a);
                }
                self.push(">");
            }
        }
    }

    fn emit_args(&mut self, args: &[Expr]) {
        self.push("(");
        for (i, a) in args.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.emit_expr(a);
        }
        self.push(")");
    }

    pub fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Name(n) => self.push(n),
            Expr::Str(s) => {
                let lit = string_literal(s);
                self.push(&lit);
            }
            Expr::New { ty, args } => {
                self.push("new ");
                self.emit_type(ty);
                self.emit_args(args);
            }
            Expr::Static { owner, method, args } => {
                let name = self.class_ref(owner);
                self.push(&name);
                self.push(".");
                self.push(method);
                self.emit_args(args);
            }
            Expr::Call { receiver, method, args } => {
                self.emit_expr(receiver);
                self.push(".");
                self.push(method);
                self.emit_args(args);
            }
            Expr::Field { owner, name } => {
                let owner_name = self.class_ref(owner);
                self.push(&owner_name);
                self.push(".");
                self.push(name);
            }
        }
    }

    /// Statements are written without indentation or trailing newline; the
    /// enclosing method adds both.
    pub fn emit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Local { ty, name, init } => {
                self.emit_type(ty);
                self.push(" ");
                self.push(name);
                self.push(" = ");
                self.emit_expr(init);
            }
            Stmt::Assign { name, value } => {
                self.push(name);
                self.push(" = ");
                self.emit_expr(value);
            }
            Stmt::Expr(e) => self.emit_expr(e),
            Stmt::Return(Some(e)) => {
                self.push("return ");
                self.emit_expr(e);
            }
            Stmt::Return(None) => self.push("return"),
        }
        self.push(";");
    }

    pub fn emit_method(&mut self, method: &MethodDecl) {
        for a in &method.annotations {
            self.push_indent();
            self.push("@");
            let name = self.class_ref(a);
            self.push(&name);
            self.push("\n");
        }
        self.push_indent();
        for m in &method.modifiers {
            self.push(&m.to_string());
            self.push(" ");
        }
        self.emit_type(&method.returns);
        self.push(" ");
        self.push(&method.name);
        self.push("(");
        for (i, p) in method.params.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.emit_type(&p.ty);
            self.push(" ");
            self.push(&p.name);
        }
        self.push(") {\n");
        self.indent += 1;
        for s in &method.body {
            self.push_indent();
            self.emit_stmt(s);
            self.push("\n");
        }
        self.indent -= 1;
        self.push_indent();
        self.push("}\n");
    }

    pub fn emit_class(&mut self, class: &ClassDecl) {
        self.push_indent();
        for m in &class.modifiers {
            self.push(&m.to_string());
            self.push(" ");
        }
        self.push("class ");
        self.push(&class.name);
        if let Some(sup) = &class.superclass {
            self.push(" extends ");
            self.emit_type(sup);
        }
        self.push(" {\n");
        self.indent += 1;
        for (i, m) in class.methods.iter().enumerate() {
            if i > 0 {
                self.push("\n");
            }
            self.emit_method(m);
        }
        self.indent -= 1;
        self.push_indent();
        self.push("}\n");
    }
}

/// Java string literal with surrounding quotes.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
