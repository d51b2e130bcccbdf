use std::fmt;

use super::{Resource, Uri};
use crate::ns::{rdf, xsd};

/// A textual value, used as the [`Object`] of a triple.
///
/// `value` holds the lexical form, without quotes or escape sequences.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Datatype IRI.
    pub datatype: Uri,
    /// Language tag, for `rdf:langString` literals.
    pub language: Option<String>,
}

impl Literal {
    /// Build a literal from its parts.
    pub fn new(value: &str, datatype: Uri, language: Option<&str>) -> Self {
        Literal {
            value: value.into(),
            datatype,
            language: language.map(Into::into),
        }
    }

    /// Build a literal with the given datatype.
    pub fn typed<U: Into<Uri>>(value: &str, datatype: U) -> Self {
        Self::new(value, datatype.into(), None)
    }

    /// Build a language-tagged string (datatype `rdf:langString`).
    pub fn lang(value: &str, tag: &str) -> Self {
        Self::new(value, rdf::langString.prefixed(), Some(tag))
    }

    /// Whether this literal is a plain `xsd:string`.
    pub fn is_plain(&self) -> bool {
        self.language.is_none() && self.datatype.is(&xsd::string)
    }
}

impl From<&str> for Literal {
    fn from(l: &str) -> Self {
        Literal::typed(l, &xsd::string)
    }
}

impl From<String> for Literal {
    fn from(l: String) -> Self {
        Literal {
            value: l,
            datatype: xsd::string.prefixed(),
            language: None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.value.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if self.is_plain() {
            Ok(())
        } else {
            write!(f, "^^{}", self.datatype)
        }
    }
}

/// The value position of a triple: either a [`Literal`] or a reference
/// to another resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Object {
    /// A literal value.
    Literal(Literal),
    /// A resource (IRI or blank node).
    Resource(Uri),
}

impl Object {
    /// Whether this object is a [`Literal`].
    pub fn is_literal(&self) -> bool {
        matches!(self, Object::Literal(_))
    }

    /// Whether this object is a resource.
    pub fn is_resource(&self) -> bool {
        matches!(self, Object::Resource(_))
    }

    /// The literal held by this object, if any.
    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Object::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// The resource held by this object, if any.
    pub fn resource(&self) -> Option<&Uri> {
        match self {
            Object::Resource(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Literal> for Object {
    fn from(l: Literal) -> Self {
        Object::Literal(l)
    }
}

impl From<Uri> for Object {
    fn from(u: Uri) -> Self {
        Object::Resource(u)
    }
}

impl From<Resource> for Object {
    fn from(r: Resource) -> Self {
        Object::Resource(r.0)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Literal(literal) => literal.fmt(f),
            Object::Resource(resource) => resource.fmt(f),
        }
    }
}
