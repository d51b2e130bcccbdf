use std::convert::Infallible;
use std::fmt;

use super::{Literal, Object, Relationship, Resource, Uri};

/// An RDF triple: the statement that a [`Resource`] has some
/// [`Relationship`] with an [`Object`].
///
/// Typically constructed from a ([`Resource`], [`Relationship`], [`Object`]) tuple
/// with `.into()`, and destructured back the same way:
///
/// ```
/// # use rdf_rs_api::model::*;
/// let s: Resource = Uri::new("ex:", "John", UriType::Prefixed).into();
/// let p: Relationship = Uri::new("foaf:", "name", UriType::Prefixed).into();
/// let o: Object = Literal::from("John").into();
///
/// let t: Triple = (s.clone(), p.clone(), o.clone()).into();
/// assert_eq!(t.to_string(), r#"ex:John foaf:name "John" ."#);
///
/// let (s2, p2, o2) = t.into();
/// assert_eq!((s2, p2, o2), (s, p, o));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// The subject of this triple.
    pub subject: Resource,
    /// The predicate of this triple.
    pub predicate: Relationship,
    /// The object of this triple.
    pub object: Object,
}

impl Triple {
    /// Build a triple from anything convertible into its three positions.
    pub fn new<S, P, O>(subject: S, predicate: P, object: O) -> Self
    where
        S: Into<Resource>,
        P: Into<Relationship>,
        O: Into<Object>,
    {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// The [`Uri`]s of this triple: subject, predicate,
    /// then the object or the datatype of the object.
    pub fn uris(&self) -> impl Iterator<Item = &Uri> {
        let object = match &self.object {
            Object::Resource(uri) => uri,
            Object::Literal(literal) => &literal.datatype,
        };
        [&self.subject.0, &self.predicate.0, object].into_iter()
    }

    /// Rebuild this triple, passing each of its [`Uri`]s through `f`
    /// (see [`Triple::uris`]). Stop at the first error.
    pub fn try_map_uris<E, F>(&self, mut f: F) -> Result<Triple, E>
    where
        F: FnMut(&Uri) -> Result<Uri, E>,
    {
        let subject = Resource(f(&self.subject.0)?);
        let predicate = Relationship(f(&self.predicate.0)?);
        let object = match &self.object {
            Object::Resource(uri) => Object::Resource(f(uri)?),
            Object::Literal(literal) => Object::Literal(Literal {
                datatype: f(&literal.datatype)?,
                ..literal.clone()
            }),
        };
        Ok(Triple {
            subject,
            predicate,
            object,
        })
    }

    /// Rebuild this triple, passing each of its [`Uri`]s through `f`.
    pub fn map_uris<F: FnMut(&Uri) -> Uri>(&self, mut f: F) -> Triple {
        match self.try_map_uris(|uri| Ok::<_, Infallible>(f(uri))) {
            Ok(triple) => triple,
            Err(never) => match never {},
        }
    }
}

impl From<(Resource, Relationship, Object)> for Triple {
    fn from(triple: (Resource, Relationship, Object)) -> Self {
        let (subject, predicate, object) = triple;
        Triple {
            subject,
            predicate,
            object,
        }
    }
}

impl From<Triple> for (Resource, Relationship, Object) {
    fn from(triple: Triple) -> Self {
        (triple.subject, triple.predicate, triple.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

impl fmt::Debug for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
