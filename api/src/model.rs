//! The triple model: [`Uri`]s name [`Resource`]s and [`Relationship`]s,
//! which combine with an [`Object`] into a [`Triple`].
//! A [`Graph`] gathers the triples of a document together with its
//! `@base` and `@prefix` metadata.

mod _graph;
pub use _graph::*;
mod _object;
pub use _object::*;
mod _relationship;
pub use _relationship::*;
mod _resource;
pub use _resource::*;
mod _triple;
pub use _triple::*;
mod _uri;
pub use _uri::*;

#[cfg(test)]
mod test;
