use super::*;
use crate::model::{Uri, UriType};

/// A term of a standard vocabulary, produced by the [`namespace!`] macro.
///
/// It knows both its expanded IRI (namespace + suffix)
/// and its conventional prefixed name (e.g. `rdfs:domain`),
/// so that it can be compared with [`Uri`]s in either form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NsTerm {
    pub(crate) label: &'static str,
    pub(crate) ns: &'static str,
    pub(crate) suffix: &'static str,
}

impl fmt::Display for NsTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ns, self.suffix)
    }
}

impl NsTerm {
    /// Make an NsTerm without checking that it produces a valid IRI.
    pub const fn new_unchecked(label: &'static str, ns: &'static str, suffix: &'static str) -> Self {
        NsTerm { label, ns, suffix }
    }

    /// The conventional prefix label, including its trailing colon.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The namespace IRI.
    pub fn namespace(&self) -> &'static str {
        self.ns
    }

    /// The local name of this term in its namespace.
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// This term as an expanded [`Uri`] of type [`UriType::Full`].
    pub fn full(&self) -> Uri {
        Uri::new(self.ns, self.suffix, UriType::Full)
    }

    /// This term as a prefixed [`Uri`], e.g. `rdf:type`.
    pub fn prefixed(&self) -> Uri {
        Uri::new(self.label, self.suffix, UriType::Prefixed)
    }
}

impl From<&NsTerm> for Uri {
    fn from(term: &NsTerm) -> Self {
        term.prefixed()
    }
}

impl From<NsTerm> for Uri {
    fn from(term: NsTerm) -> Self {
        term.prefixed()
    }
}
