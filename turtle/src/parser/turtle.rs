//! Parser for the [Turtle] concrete syntax of RDF.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/

use std::collections::HashMap;

use lazy_static::lazy_static;
use rdf_rs_api::model::{Graph, Object, Triple, Uri, UriType};
use rdf_rs_api::ns::{rdf, xsd, NsTerm};
use regex::Regex;

use super::_lexer::{tokenize, Token, TokenKind};
use super::{Parsed, ParserError, RdfParser, SyntaxError};

mod _state;
use _state::State;

lazy_static! {
    static ref SCHEME: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap();
    static ref PNAME: Regex =
        Regex::new(r"^((?:[A-Za-z][\w.\-]*)?:)((?:[\w:%\-]|\\.)(?:[\w.:%\-]|\\.)*)?$").unwrap();
    static ref BNODE: Regex = Regex::new(r"^_:([\w][\w.\-]*)$").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^[+-]?\d+$").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^[+-]?\d*\.\d+$").unwrap();
    static ref DOUBLE: Regex =
        Regex::new(r"^[+-]?(?:\d+\.\d*|\.\d+|\d+)[eE][+-]?\d+$").unwrap();
}

/// Turtle parser.
///
/// Blank nodes (`[ ... ]` and collections) are named `_:blank1`, `_:blank2`, ...
/// in order of appearance, skipping the labels used explicitly by the document.
///
/// Terms implied by the syntax (`a`, the datatypes of plain, boolean and numeric literals,
/// `rdf:first`, `rdf:rest` and `rdf:nil` in collections) are prefixed (e.g. `xsd:integer`),
/// unless the document binds `rdf:` or `xsd:` to another namespace;
/// they are then written in full.
#[derive(Clone, Debug)]
pub struct TurtleParser {
    /// The base IRI used to resolve relative IRI-references,
    /// unless the document contains a `@base` directive.
    pub base: Option<String>,
    /// Whether the `rdf:`, `rdfs:` and `xsd:` prefixes are known
    /// without being declared (default: `true`).
    pub default_prefixes: bool,
}

impl Default for TurtleParser {
    fn default() -> Self {
        TurtleParser {
            base: None,
            default_prefixes: true,
        }
    }
}

impl TurtleParser {
    fn empty_graph(&self) -> Parsed<Graph> {
        let mut graph = match &self.base {
            Some(base) => Graph::with_base(base)?,
            None => Graph::new(),
        };
        if !self.default_prefixes {
            graph.prefixes = HashMap::new();
        }
        Ok(graph)
    }
}

impl RdfParser for TurtleParser {
    fn uri(&self, txt: &str) -> Parsed<Uri> {
        match tokenize(txt)?.as_slice() {
            [token] => classify(token),
            _ => Err(ParserError::new(SyntaxError::InvalidUri(txt.into()))),
        }
    }

    fn object(&self, txt: &str) -> Parsed<Object> {
        let tokens = tokenize(txt)?;
        let mut state = State::new(&tokens);
        let object = state.object()?;
        state.end()?;
        Ok(object)
    }

    fn triple(&self, txt: &str) -> Parsed<Vec<Triple>> {
        let tokens = tokenize(txt)?;
        let mut state = State::new(&tokens);
        state.triples()?;
        state.eat(&TokenKind::Dot);
        state.end()?;
        Ok(state.into_triples())
    }

    fn graph(&self, txt: &str) -> Parsed<Graph> {
        let tokens = tokenize(txt)?;
        let mut graph = self.empty_graph()?;
        let mut state = State::new(&tokens);
        while !state.at_end() {
            if !state.directive(&mut graph)? {
                state.triples()?;
                state.expect(&TokenKind::Dot, "'.'")?;
            }
        }
        graph.extend(state.into_triples());
        log::debug!(
            "parsed {} triples, {} prefixes",
            graph.len(),
            graph.prefixes.len()
        );
        Ok(graph)
    }
}

super::def_mod_functions_for_parser!(TurtleParser);

/// Classify an IRI or a word token as a [`Uri`].
pub(super) fn classify(token: &Token) -> Parsed<Uri> {
    match &token.kind {
        TokenKind::Iri(iri) if SCHEME.is_match(iri) => Ok(Uri::full(iri)),
        TokenKind::Iri(iri) => Ok(Uri::new("", iri, UriType::Relative)),
        TokenKind::Word(word) if word == "a" => Ok(rdf::type_.prefixed()),
        TokenKind::Word(word) => {
            if let Some(caps) = BNODE.captures(word) {
                return Ok(Uri::blank(&caps[1]));
            }
            match PNAME.captures(word) {
                Some(caps) => {
                    let prefix = &caps[1];
                    let local = caps.get(2).map_or("", |m| m.as_str());
                    let uri_type = if prefix == ":" {
                        UriType::PrefixedWithBase
                    } else {
                        UriType::Prefixed
                    };
                    Ok(Uri::new(prefix, &unescape_local(local), uri_type))
                }
                None => Err(token_error(SyntaxError::InvalidUri(word.clone()), token)),
            }
        }
        other => Err(token_error(
            SyntaxError::InvalidUri(other.to_string()),
            token,
        )),
    }
}

/// The datatype of a word appearing in object position
/// (booleans and numbers), or `None` if it is not a literal.
pub(super) fn word_datatype(word: &str) -> Option<&'static NsTerm> {
    match word {
        "true" | "false" => Some(&xsd::boolean),
        _ if INTEGER.is_match(word) => Some(&xsd::integer),
        _ if DECIMAL.is_match(word) => Some(&xsd::decimal),
        _ if DOUBLE.is_match(word) => Some(&xsd::double),
        _ => None,
    }
}

pub(super) fn token_error(kind: SyntaxError, token: &Token) -> ParserError {
    ParserError::at(kind, token.line, token.col)
}

// PN_LOCAL_ESC: `\` followed by one of `_~.-!$&'()*+,;=/?#@%`
fn unescape_local(local: &str) -> String {
    let mut unescaped = String::with_capacity(local.len());
    let mut chars = local.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescaped.extend(chars.next()),
            c => unescaped.push(c),
        }
    }
    unescaped
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test;
