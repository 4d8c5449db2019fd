use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// A top-level Java class identified by package and simple name.
///
/// Names are `Cow<'static, str>` so the well-known model classes can be
/// declared as constants while names derived from descriptors stay owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: Cow<'static, str>,
    simple: Cow<'static, str>,
}

impl ClassName {
    pub const fn from_static(package: &'static str, simple: &'static str) -> Self {
        ClassName { package: Cow::Borrowed(package), simple: Cow::Borrowed(simple) }
    }

    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        ClassName { package: Cow::Owned(package.into()), simple: Cow::Owned(simple.into()) }
    }

    /// Split a dotted canonical name (`java.util.List`) into package and
    /// simple name. Every segment must be a Java identifier.
    pub fn parse(canonical: &str) -> Option<Self> {
        if !canonical.split('.').all(super::is_identifier) {
            return None;
        }
        match canonical.rsplit_once('.') {
            Some((package, simple)) => Some(ClassName::new(package, simple)),
            None => Some(ClassName::new("", canonical)),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple(&self) -> &str {
        &self.simple
    }

    pub fn canonical(&self) -> String {
        if self.package.is_empty() {
            self.simple.to_string()
        } else {
            format!("{}.{}", self.package, self.simple)
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Void,
    /// Emitted verbatim and never imported (`String`).
    Simple(Cow<'static, str>),
    Class(ClassName),
    Parameterized { raw: ClassName, args: Vec<TypeName> },
}

impl TypeName {
    pub const STRING: TypeName = TypeName::Simple(Cow::Borrowed("String"));

    pub fn parameterized(raw: ClassName, args: Vec<TypeName>) -> Self {
        TypeName::Parameterized { raw, args }
    }

    pub(crate) fn collect_classes(&self, out: &mut BTreeSet<ClassName>) {
        match self {
            TypeName::Void | TypeName::Simple(_) => {}
            TypeName::Class(c) => {
                out.insert(c.clone());
            }
            TypeName::Parameterized { raw, args } => {
                out.insert(raw.clone());
                for a in args {
                    a.collect_classes(out);
                }
            }
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> Self {
        TypeName::Class(class)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = super::printer::CodeWriter::qualified();
        w.emit_type(self);
        write!(f, "{}", w.finish())
    }
}
