//! Standard namespaces.
//!
//! This module provides:
//! * the [`namespace`] macro, for defining static namespaces;
//! * modules corresponding to the namespaces used by RDF and RDFS
//!   (generated via the [`namespace`] macro).
//!
//! # Example use
//! ```
//! use rdf_rs_api::model::{Triple, Uri};
//! use rdf_rs_api::ns::{rdf, rdfs};
//!
//! let person = Uri::new("foaf:", "Person", rdf_rs_api::model::UriType::Prefixed);
//! let t = Triple::new(person, rdf::type_.prefixed(), rdfs::Class.prefixed());
//! assert_eq!(t.to_string(), "foaf:Person rdf:type rdfs:Class .");
//! assert!(t.predicate.0.is(&rdf::type_));
//! ```
use std::fmt;

#[macro_use]
mod _macro;
mod _term;
pub use _term::*;

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
///
pub mod rdf {
    namespace!(
        "rdf:",
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Alt,
        Bag,
        List,
        Property,
        Seq,
        Statement,
        // datatypes
        HTML,
        langString,
        XMLLiteral,
        // properties
        first,
        object,
        predicate,
        rest,
        subject,
        value,
        // individuals
        nil;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "rdfs:",
        "http://www.w3.org/2000/01/rdf-schema#",
        // types
        Class,
        Container,
        ContainerMembershipProperty,
        Datatype,
        Literal,
        Resource,
        // semantic properties
        domain,
        range,
        subClassOf,
        subPropertyOf,
        // documentation properties
        comment,
        isDefinedBy,
        label,
        member,
        seeAlso
    );
}

/// The standard `xsd:` namespace.
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "xsd:",
        "http://www.w3.org/2001/XMLSchema#",
        anyType,
        anySimpleType,
            anyURI,
            boolean,
            date,
            dateTime,
            decimal,
                integer,
                    nonNegativeInteger,
                    long,
                        int,
            double,
            float,
            string,
                normalizedString,
                    token,
                        language
    );
}

/// The namespace conventionally bound to `label`
/// (one of `"rdf:"`, `"rdfs:"` and `"xsd:"`).
///
/// Terms implied by the syntax of a document (`a`, plain and numeric literals, collections)
/// always belong to these namespaces, whatever the document binds their labels to.
pub fn standard_namespace(label: &str) -> Option<&'static str> {
    [
        (rdf::LABEL, rdf::PREFIX),
        (rdfs::LABEL, rdfs::PREFIX),
        (xsd::LABEL, xsd::PREFIX),
    ]
    .into_iter()
    .find(|(l, _)| *l == label)
    .map(|(_, ns)| ns)
}
