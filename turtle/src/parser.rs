//! Parsers turn RDF concrete syntaxes into a [`Graph`].
//!
//! ```
//! # use rdf_rs_turtle::parser::{ParserError, RdfParser, TurtleParser};
//! # fn main() -> Result<(), ParserError> {
//! let graph = TurtleParser::default().graph(r#"
//!     @prefix foaf: <http://xmlns.com/foaf/0.1/> .
//!     <http://example.org/#alice> foaf:name "Alice" ; foaf:knows [ foaf:name "Bob" ] .
//! "#)?;
//! assert_eq!(graph.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use rdf_rs_api::model::{Graph, Object, Relationship, Resource, Triple, Uri};

mod _error;
pub use _error::*;
pub(crate) mod _lexer;

pub mod turtle;
pub use self::turtle::TurtleParser;

/// A parser for some concrete syntax of RDF.
///
/// Each method parses one kind of syntactic element from a string.
pub trait RdfParser {
    /// Parse an IRI, prefixed name or blank node label.
    fn uri(&self, txt: &str) -> Parsed<Uri>;

    /// Parse a [`Resource`] (subject position).
    fn resource(&self, txt: &str) -> Parsed<Resource> {
        self.uri(txt).map(Resource::from)
    }

    /// Parse a [`Relationship`] (predicate position).
    fn relationship(&self, txt: &str) -> Parsed<Relationship> {
        self.uri(txt).map(Relationship::from)
    }

    /// Parse an [`Object`] (literal or resource).
    fn object(&self, txt: &str) -> Parsed<Object>;

    /// Parse a single statement, which may expand into several triples.
    fn triple(&self, txt: &str) -> Parsed<Vec<Triple>>;

    /// Parse a whole document.
    ///
    /// The URIs of the returned graph are kept as they appear in the document;
    /// use [`Graph::apply_metadata`] to expand them.
    fn graph(&self, txt: &str) -> Parsed<Graph>;

    /// Read and parse a whole file.
    ///
    /// # Errors
    ///
    /// Returns a [`ParserError`] if the file can not be read, or is not a valid document.
    fn from_file<P: AsRef<Path>>(&self, path: P) -> Parsed<Graph> {
        let path = path.as_ref();
        log::debug!("parsing {}", path.display());
        let txt = std::fs::read_to_string(path)?;
        self.graph(&txt)
    }
}

/// This macro provides a straightforward implementation of the default functions
/// of a parser module (`parse_str` and `parse_file`),
/// using the `Default` value of the given parser type.
macro_rules! def_mod_functions_for_parser {
    ($parser_type: ident) => {
        /// Convenience function for parsing a str with the default parser.
        pub fn parse_str(txt: &str) -> $crate::parser::Parsed<rdf_rs_api::model::Graph> {
            $crate::parser::RdfParser::graph(&$parser_type::default(), txt)
        }

        /// Convenience function for parsing a file with the default parser.
        pub fn parse_file<P: AsRef<std::path::Path>>(
            path: P,
        ) -> $crate::parser::Parsed<rdf_rs_api::model::Graph> {
            $crate::parser::RdfParser::from_file(&$parser_type::default(), path)
        }
    };
}
pub(crate) use def_mod_functions_for_parser;
