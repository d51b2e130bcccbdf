use std::collections::HashSet;

use oxiri::Iri;
use rdf_rs_api::model::{Graph, Literal, Object, Triple, Uri, UriType};
use rdf_rs_api::ns::{rdf, standard_namespace, xsd, NsTerm};

use super::{classify, token_error, word_datatype};
use crate::parser::_lexer::{Token, TokenKind};
use crate::parser::{Parsed, ParserError, SyntaxError};

/// Recursive descent over a list of tokens,
/// accumulating triples in the order where their statements end.
pub(super) struct State<'t> {
    tokens: &'t [Token],
    pos: usize,
    blank_nodes: usize,
    /// Blank node labels written in the document.
    explicit_blanks: HashSet<String>,
    /// Standard prefix labels that the document binds to another namespace.
    rebound: Vec<String>,
    triples: Vec<Triple>,
}

impl<'t> State<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        let explicit_blanks = tokens
            .iter()
            .filter_map(|t| match &t.kind {
                TokenKind::Word(w) => w.strip_prefix("_:").map(String::from),
                _ => None,
            })
            .collect();
        let rebound = tokens
            .windows(3)
            .filter_map(|w| match [&w[0].kind, &w[1].kind, &w[2].kind] {
                [TokenKind::Prefix { .. }, TokenKind::Word(label), TokenKind::Iri(ns)] => {
                    let standard = standard_namespace(label)?;
                    (standard != ns.as_str()).then(|| label.clone())
                }
                _ => None,
            })
            .collect();
        State {
            tokens,
            pos: 0,
            blank_nodes: 0,
            explicit_blanks,
            rebound,
            triples: Vec::new(),
        }
    }

    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&'t TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn next(&mut self, expected: &str) -> Parsed<&'t Token> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or_else(|| self.eof(expected))?;
        self.pos += 1;
        Ok(token)
    }

    /// Consume the next token if it is `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: &TokenKind, expected: &str) -> Parsed<()> {
        let token = self.next(expected)?;
        if &token.kind == kind {
            Ok(())
        } else {
            Err(unexpected(expected, token))
        }
    }

    /// Fail unless all tokens have been consumed.
    pub fn end(&self) -> Parsed<()> {
        match self.tokens.get(self.pos) {
            None => Ok(()),
            Some(token) => Err(unexpected("end of input", token)),
        }
    }

    fn eof(&self, expected: &str) -> ParserError {
        let kind = SyntaxError::UnexpectedEof(expected.into());
        match self.tokens.last() {
            Some(last) => token_error(kind, last),
            None => ParserError::new(kind),
        }
    }

    fn fresh_blank(&mut self) -> Uri {
        loop {
            self.blank_nodes += 1;
            let label = format!("blank{}", self.blank_nodes);
            if !self.explicit_blanks.contains(&label) {
                return Uri::blank(&label);
            }
        }
    }

    /// A term implied by the syntax (`a`, literals, collections):
    /// prefixed, unless the document binds its label to another namespace.
    fn implied(&self, term: &NsTerm) -> Uri {
        if self.rebound.iter().any(|label| label == term.label()) {
            term.full()
        } else {
            term.prefixed()
        }
    }

    /// Parse a `@prefix`/`PREFIX` or `@base`/`BASE` directive into `graph`,
    /// if the next token starts one. Return whether it did.
    pub fn directive(&mut self, graph: &mut Graph) -> Parsed<bool> {
        let sparql = match self.peek() {
            Some(TokenKind::Prefix { sparql }) => {
                let directive = self.next("@prefix")?;
                let label = self.next("a prefix label")?;
                let prefix = match &label.kind {
                    TokenKind::Word(w) if w.ends_with(':') => w,
                    _ => return Err(malformed("prefix label", label)),
                };
                let ns = self.directive_iri(graph)?;
                graph
                    .add_prefix(prefix, &ns)
                    .map_err(|err| with_position(err.into(), directive))?;
                log::trace!("prefix {prefix} <{ns}>");
                *sparql
            }
            Some(TokenKind::Base { sparql }) => {
                self.next("@base")?;
                let base = self.directive_iri(graph)?;
                log::trace!("base <{base}>");
                graph.base_prefix = Some(base);
                *sparql
            }
            _ => return Ok(false),
        };
        if !sparql {
            self.expect(&TokenKind::Dot, "'.' after directive")?;
        }
        Ok(true)
    }

    /// The IRI of a directive, resolved against the current base.
    fn directive_iri(&mut self, graph: &Graph) -> Parsed<String> {
        let token = self.next("an IRI")?;
        let TokenKind::Iri(iri) = &token.kind else {
            return Err(malformed("IRI", token));
        };
        if Iri::parse(iri.as_str()).is_ok() {
            return Ok(iri.clone());
        }
        graph
            .resolve(&Uri::new("", iri, UriType::Relative))
            .map(|uri| uri.value())
            .map_err(|err| with_position(err.into(), token))
    }

    /// Parse the triples of a statement (without its final `.`).
    pub fn triples(&mut self) -> Parsed<()> {
        let token = self.next("a subject")?;
        match &token.kind {
            TokenKind::OpenBracket => {
                let subject = self.blank_property_list()?;
                // `[ ... ] .` is a statement on its own
                if !matches!(self.peek(), Some(TokenKind::Dot) | None) {
                    self.predicate_object_list(&subject)?;
                }
            }
            TokenKind::OpenParen => {
                let subject = self.collection()?;
                self.predicate_object_list(&subject)?;
            }
            TokenKind::Iri(_) | TokenKind::Word(_) => {
                let subject = classify(token)?;
                self.predicate_object_list(&subject)?;
            }
            _ => return Err(unexpected("a subject", token)),
        }
        Ok(())
    }

    fn verb(&mut self) -> Parsed<Uri> {
        let token = self.next("a predicate")?;
        match &token.kind {
            TokenKind::Word(w) if w == "a" => Ok(self.implied(&rdf::type_)),
            TokenKind::Iri(_) | TokenKind::Word(_) => classify(token),
            _ => Err(unexpected("a predicate", token)),
        }
    }

    fn predicate_object_list(&mut self, subject: &Uri) -> Parsed<()> {
        loop {
            let predicate = self.verb()?;
            loop {
                let object = self.object()?;
                self.triples
                    .push(Triple::new(subject.clone(), predicate.clone(), object));
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            if !self.eat(&TokenKind::Semicolon) {
                return Ok(());
            }
            while self.eat(&TokenKind::Semicolon) {}
            if matches!(
                self.peek(),
                None | Some(TokenKind::Dot) | Some(TokenKind::CloseBracket)
            ) {
                return Ok(());
            }
        }
    }

    /// Parse an object; the triples of nested blank nodes and collections
    /// are emitted before returning.
    pub fn object(&mut self) -> Parsed<Object> {
        let token = self.next("an object")?;
        match &token.kind {
            TokenKind::OpenBracket => Ok(self.blank_property_list()?.into()),
            TokenKind::OpenParen => Ok(self.collection()?.into()),
            TokenKind::Str(value) => Ok(self.literal(value)?.into()),
            TokenKind::Word(word) => match word_datatype(word) {
                Some(datatype) => Ok(Literal::typed(word, self.implied(datatype)).into()),
                None => classify(token)
                    .map(Object::from)
                    .map_err(|_| token_error(SyntaxError::InvalidObject(word.clone()), token)),
            },
            TokenKind::Iri(_) => Ok(classify(token)?.into()),
            _ => Err(unexpected("an object", token)),
        }
    }

    fn literal(&mut self, value: &str) -> Parsed<Literal> {
        match self.peek() {
            Some(TokenKind::LangTag(tag)) => {
                self.pos += 1;
                let datatype = self.implied(&rdf::langString);
                Ok(Literal::new(value, datatype, Some(tag.as_str())))
            }
            Some(TokenKind::DatatypeMarker) => {
                self.pos += 1;
                let token = self.next("a datatype")?;
                match &token.kind {
                    TokenKind::Iri(_) | TokenKind::Word(_) => {
                        Ok(Literal::typed(value, classify(token)?))
                    }
                    _ => Err(unexpected("a datatype", token)),
                }
            }
            _ => Ok(Literal::typed(value, self.implied(&xsd::string))),
        }
    }

    /// Parse the inside of `[ ... ]`, the opening bracket being consumed.
    fn blank_property_list(&mut self) -> Parsed<Uri> {
        let node = self.fresh_blank();
        if !self.eat(&TokenKind::CloseBracket) {
            self.predicate_object_list(&node)?;
            self.close('[', &TokenKind::CloseBracket)?;
        }
        Ok(node)
    }

    /// Parse the inside of `( ... )`, the opening parenthesis being consumed.
    ///
    /// The `rdf:first` triples come in list order (each after the triples of its element),
    /// then the `rdf:rest` triples, from the end of the list back to its head.
    fn collection(&mut self) -> Parsed<Uri> {
        let mut nodes = vec![];
        while !self.eat(&TokenKind::CloseParen) {
            if self.at_end() {
                return Err(self.unbalanced('('));
            }
            let node = self.fresh_blank();
            let first = self.object()?;
            let first_p = self.implied(&rdf::first);
            self.triples.push(Triple::new(node.clone(), first_p, first));
            nodes.push(node);
        }
        let rest_p = self.implied(&rdf::rest);
        let mut rest = self.implied(&rdf::nil);
        for node in nodes.into_iter().rev() {
            self.triples
                .push(Triple::new(node.clone(), rest_p.clone(), rest));
            rest = node;
        }
        Ok(rest)
    }

    fn close(&mut self, opening: char, closing: &TokenKind) -> Parsed<()> {
        match self.tokens.get(self.pos) {
            None => Err(self.unbalanced(opening)),
            Some(token) if &token.kind == closing => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(unexpected(&format!("'{closing}'"), token)),
        }
    }

    fn unbalanced(&self, opening: char) -> ParserError {
        let kind = SyntaxError::UnbalancedBrackets(opening);
        match self.tokens.last() {
            Some(last) => token_error(kind, last),
            None => ParserError::new(kind),
        }
    }
}

fn unexpected(expected: &str, token: &Token) -> ParserError {
    token_error(
        SyntaxError::UnexpectedToken {
            expected: expected.into(),
            found: token.kind.to_string(),
        },
        token,
    )
}

fn malformed(expected: &str, token: &Token) -> ParserError {
    token_error(
        SyntaxError::MalformedDirective(format!("expected {expected}, found '{}'", token.kind)),
        token,
    )
}

fn with_position(err: ParserError, token: &Token) -> ParserError {
    err.located(token.line, token.col)
}
