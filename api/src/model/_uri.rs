use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ns::NsTerm;

/// How a [`Uri`] was written, and therefore how it must be expanded
/// before it denotes an absolute IRI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UriType {
    /// An absolute IRI, e.g. `<http://example.org/foo#bar>`.
    Full,
    /// A relative IRI reference, e.g. `<bar>` or `<#bar>`,
    /// to be resolved against the base IRI.
    Relative,
    /// A prefixed name, e.g. `ex:bar`; the prefix keeps its colon.
    Prefixed,
    /// A name in the empty prefix, e.g. `:bar`.
    PrefixedWithBase,
    /// A blank node label, e.g. `_:bar`.
    BlankNode,
}

/// An identifier, naming resources and relationships.
///
/// The textual value of a `Uri` is `prefix` followed by `name`.
/// Where the split between the two falls is only a convenience:
/// two `Uri`s with the same [`UriType`] and the same textual value
/// are equal, hash the same, and sort together.
///
/// Conventions on `prefix`:
/// * [`Prefixed`](UriType::Prefixed): the prefix label with its colon (`"ex:"`);
/// * [`PrefixedWithBase`](UriType::PrefixedWithBase): `":"`;
/// * [`BlankNode`](UriType::BlankNode): `"_:"`;
/// * [`Relative`](UriType::Relative): usually empty.
#[derive(Clone, Debug)]
pub struct Uri {
    /// Namespace part.
    pub prefix: String,
    /// Local part.
    pub name: String,
    /// How this identifier is written.
    pub uri_type: UriType,
}

impl Uri {
    /// Build a `Uri` from its parts.
    pub fn new(prefix: &str, name: &str, uri_type: UriType) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
            uri_type,
        }
    }

    /// Build an absolute `Uri` from an IRI,
    /// splitting it after its last `#`, `/` or (failing that) `:`.
    ///
    /// The IRI is not validated.
    pub fn full(iri: &str) -> Self {
        let split = iri
            .rfind(&['#', '/'][..])
            .or_else(|| iri.rfind(':'))
            .map(|i| i + 1)
            .unwrap_or(0);
        Self::new(&iri[..split], &iri[split..], UriType::Full)
    }

    /// Build a blank node identifier from its label (without `_:`).
    pub fn blank(label: &str) -> Self {
        Self::new("_:", label, UriType::BlankNode)
    }

    /// The textual value of this `Uri` (`prefix` followed by `name`).
    pub fn value(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    /// Whether this `Uri` is an absolute IRI.
    pub fn is_full(&self) -> bool {
        self.uri_type == UriType::Full
    }

    /// Whether this `Uri` is a blank node identifier.
    pub fn is_blank_node(&self) -> bool {
        self.uri_type == UriType::BlankNode
    }

    /// Whether this `Uri` denotes the given vocabulary term,
    /// either in its expanded form or in its conventional prefixed form
    /// (e.g. `rdf:type`).
    ///
    /// Prefixed forms are compared by label, assuming the label has its standard binding
    /// (see [`Graph::rebound_prefixes`](super::Graph::rebound_prefixes)).
    pub fn is(&self, term: &NsTerm) -> bool {
        match self.uri_type {
            UriType::Full => self.text_eq(term.namespace(), term.suffix()),
            UriType::Prefixed => self.text_eq(term.label(), term.suffix()),
            _ => false,
        }
    }

    fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.prefix.bytes().chain(self.name.bytes())
    }

    fn text_eq(&self, prefix: &str, name: &str) -> bool {
        self.prefix.len() + self.name.len() == prefix.len() + name.len()
            && self.bytes().eq(prefix.bytes().chain(name.bytes()))
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.uri_type == other.uri_type && other.text_eq(&self.prefix, &self.name)
    }
}

impl Eq for Uri {}

impl Hash for Uri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri_type.hash(state);
        for b in self.bytes() {
            state.write_u8(b);
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for Uri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uri_type
            .cmp(&other.uri_type)
            .then_with(|| self.bytes().cmp(other.bytes()))
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.uri_type {
            UriType::Full | UriType::Relative => write!(f, "<{}{}>", self.prefix, self.name),
            UriType::Prefixed | UriType::PrefixedWithBase | UriType::BlankNode => {
                write!(f, "{}{}", self.prefix, self.name)
            }
        }
    }
}
