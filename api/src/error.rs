//! Error and result type for the triple model.

use thiserror::Error;

/// Type alias for `Result` with default error [`ModelError`].
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = ModelError> = std::result::Result<T, E>;

/// This error is raised when a [`Graph`](crate::model::Graph) can not expand
/// one of its URIs into an absolute IRI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A prefixed name uses a prefix that the graph never declared.
    #[error("Use of prefix '{0}' without first defining it")]
    UndefinedPrefix(String),
    /// A prefix label does not end with a colon, or is not a valid `PN_PREFIX`.
    #[error("The given prefix '{0}' does not match PN_PREFIX? ':'")]
    InvalidPrefix(String),
    /// A relative IRI reference was found in a graph without a base IRI.
    #[error("The relative IRI '{0}' can not be resolved: the graph has no base")]
    MissingBase(String),
    /// The base, a namespace, or a resolved IRI is not a valid absolute IRI.
    #[error("The given IRI '{iri}' is not valid according to RFC3987: {reason}")]
    InvalidIri {
        /// The faulty IRI.
        iri: String,
        /// What is wrong with `iri`.
        reason: String,
    },
}
