use std::collections::HashMap;

use super::*;
use crate::parser::{ParserError, RdfParser, SyntaxError};
use crate::test::TTL_SAMPLES;
use crate::test_setup;
use rdf_rs_api::model::{Literal, Object, Relationship, Resource, Triple, Uri, UriType};
use rdf_rs_api::ns::{rdf, rdfs, xsd};
use test_case::test_case;

type TestResult = Result<(), ParserError>;

fn parser() -> TurtleParser {
    TurtleParser::default()
}

fn test_data(name: &str) -> String {
    format!("{}/test_data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn triples(txt: &str) -> Vec<Triple> {
    match parser().triple(txt) {
        Ok(triples) => triples,
        Err(err) => panic!("{txt:?}: {err}"),
    }
}

#[test_case("<http://foo.example.com/bar/person>", Uri::new("http://foo.example.com/bar/", "person", UriType::Full); "full")]
#[test_case("<http://example.com/foo#John>", Uri::new("http://example.com/foo#", "John", UriType::Full); "full with fragment")]
#[test_case("<person>", Uri::new("", "person", UriType::Relative); "relative")]
#[test_case("<#spiderman>", Uri::new("", "#spiderman", UriType::Relative); "relative fragment")]
#[test_case("ex:person", Uri::new("ex:", "person", UriType::Prefixed); "prefixed")]
#[test_case("ex:", Uri::new("ex:", "", UriType::Prefixed); "prefix only")]
#[test_case(":person", Uri::new(":", "person", UriType::PrefixedWithBase); "empty prefix")]
#[test_case("_:b0", Uri::blank("b0"); "blank node")]
#[test_case("a", rdf::type_.prefixed(); "rdf type")]
#[test_case(r"ex:a\,b", Uri::new("ex:", "a,b", UriType::Prefixed); "escaped local")]
fn uri(txt: &str, expected: Uri) -> TestResult {
    assert_eq!(parser().uri(txt)?, expected);
    Ok(())
}

#[test_case("person"; "bare word")]
#[test_case("42"; "number")]
#[test_case("\"lit\""; "literal")]
#[test_case("ex:a ex:b"; "two terms")]
#[test_case(""; "empty")]
fn invalid_uri(txt: &str) {
    let err = parser().uri(txt).unwrap_err();
    assert!(
        matches!(err.kind(), Some(SyntaxError::InvalidUri(_))),
        "{err}"
    );
}

#[test]
fn resource_and_relationship() -> TestResult {
    let p = parser();
    assert_eq!(
        p.resource("ex:john")?,
        Resource(Uri::new("ex:", "john", UriType::Prefixed))
    );
    assert_eq!(p.relationship("a")?, Relationship(rdf::type_.prefixed()));
    Ok(())
}

#[test_case(r#""Johnson""#, Literal::from("Johnson").into(); "plain")]
#[test_case(r#""a literal"@en"#, Literal::lang("a literal", "en").into(); "language")]
#[test_case(r#""-5"^^xsd:integer"#, Literal::typed("-5", &xsd::integer).into(); "typed")]
#[test_case(r#""x"^^<http://ex.org/dt>"#, Literal::typed("x", Uri::full("http://ex.org/dt")).into(); "typed full")]
#[test_case("true", Literal::typed("true", &xsd::boolean).into(); "boolean")]
#[test_case("-12", Literal::typed("-12", &xsd::integer).into(); "integer")]
#[test_case("+1.5", Literal::typed("+1.5", &xsd::decimal).into(); "decimal")]
#[test_case("4.2E9", Literal::typed("4.2E9", &xsd::double).into(); "double")]
#[test_case("ex:o", Uri::new("ex:", "o", UriType::Prefixed).into(); "prefixed")]
#[test_case("[]", Uri::blank("blank1").into(); "empty blank node")]
#[test_case("()", rdf::nil.prefixed().into(); "empty collection")]
fn object(txt: &str, expected: Object) -> TestResult {
    assert_eq!(parser().object(txt)?, expected);
    Ok(())
}

#[test_case("maybe"; "bare word")]
#[test_case("1.2.3"; "malformed number")]
fn invalid_object(txt: &str) {
    let err = parser().object(txt).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(&SyntaxError::InvalidObject(txt.into())),
        "{err}"
    );
    assert_eq!(err.position(), Some((1, 1)));
}

#[test]
fn basic_triple() -> TestResult {
    let t = parser().triple(r#"<http://example.com/foo#John> foaf:lastName "Johnson" ."#)?;
    let expected: Triple = (
        Uri::new("http://example.com/foo#", "John", UriType::Full).into(),
        Uri::new("foaf:", "lastName", UriType::Prefixed).into(),
        Literal::from("Johnson").into(),
    )
        .into();
    assert_eq!(t, vec![expected]);
    Ok(())
}

#[test]
fn final_dot_is_optional_for_a_single_triple() {
    assert_eq!(triples("ex:a ex:b ex:c"), triples("ex:a ex:b ex:c ."));
}

#[test]
fn predicate_list() {
    let t = triples(
        r#"<http://example.com/foo#John> foaf:lastName "Johnson" ; foaf:name "John" ; foaf:email "john@example.com" ."#,
    );
    let expected: Vec<Triple> = [
        r#"<http://example.com/foo#John> foaf:lastName "Johnson" ."#,
        r#"<http://example.com/foo#John> foaf:name "John" ."#,
        r#"<http://example.com/foo#John> foaf:email "john@example.com" ."#,
    ]
    .into_iter()
    .flat_map(triples)
    .collect();
    assert_eq!(t, expected);
}

#[test]
fn object_list() {
    let t = triples(r#"<http://example.com/foo#John> foaf:goesBy "John", "John Jackson" ."#);
    let expected: Vec<Triple> = [
        r#"<http://example.com/foo#John> foaf:goesBy "John" ."#,
        r#"<http://example.com/foo#John> foaf:goesBy "John Jackson" ."#,
    ]
    .into_iter()
    .flat_map(triples)
    .collect();
    assert_eq!(t, expected);
}

#[test]
fn literals() {
    let t = triples(r#"_:a _:b "a literal"@en, "-5"^^xsd:integer, true . "#);
    let literals: Vec<Literal> = t
        .into_iter()
        .filter_map(|t| t.object.literal().cloned())
        .collect();
    assert_eq!(
        literals,
        vec![
            Literal::lang("a literal", "en"),
            Literal::typed("-5", &xsd::integer),
            Literal::typed("true", &xsd::boolean),
        ]
    );
}

#[test]
fn collection() {
    let t = triples(r#":a :b ( "apple" "banana" ) ."#);
    let expected: Vec<Triple> = [
        r#"_:blank1 rdf:first "apple" ."#,
        r#"_:blank2 rdf:first "banana" ."#,
        "_:blank2 rdf:rest rdf:nil .",
        "_:blank1 rdf:rest _:blank2 .",
        ":a :b _:blank1 .",
    ]
    .into_iter()
    .flat_map(triples)
    .collect();
    assert_eq!(t, expected);
}

#[test]
fn long_collection() -> TestResult {
    let items: Vec<String> = (0..100_000).map(|i| i.to_string()).collect();
    let txt = format!("<s> <p> ( {} ) .", items.join(" "));
    let graph = parse_str(&txt)?;
    assert_eq!(graph.len(), 200_001);
    assert_eq!(graph.triples[0], triples("_:blank1 rdf:first 0 .")[0]);
    assert_eq!(
        graph.triples[100_000],
        triples("_:blank100000 rdf:rest rdf:nil .")[0]
    );
    assert_eq!(graph.triples[200_000], triples("<s> <p> _:blank1 .")[0]);
    Ok(())
}

#[test]
fn nested_collections() {
    let t = triples("ex:a ex:b ( ( 1 ) [ ex:c 2 ] ) .");
    let expected: Vec<Triple> = [
        "_:blank2 rdf:first 1 .",
        "_:blank2 rdf:rest rdf:nil .",
        "_:blank1 rdf:first _:blank2 .",
        "_:blank4 ex:c 2 .",
        "_:blank3 rdf:first _:blank4 .",
        "_:blank3 rdf:rest rdf:nil .",
        "_:blank1 rdf:rest _:blank3 .",
        "ex:a ex:b _:blank1 .",
    ]
    .into_iter()
    .flat_map(triples)
    .collect();
    assert_eq!(t, expected);
}

#[test]
fn generated_labels_skip_explicit_ones() -> TestResult {
    let graph = parse_str("_:blank1 <p> <o> . <s> <q> [ <r> 1 ] . _:blank3 <p> ( 2 ) .")?;
    let expected: Vec<Triple> = [
        "_:blank1 <p> <o> .",
        "_:blank2 <r> 1 .",
        "<s> <q> _:blank2 .",
        "_:blank4 rdf:first 2 .",
        "_:blank4 rdf:rest rdf:nil .",
        "_:blank3 <p> _:blank4 .",
    ]
    .into_iter()
    .flat_map(triples)
    .collect();
    assert_eq!(graph.triples, expected);
    Ok(())
}

const IMPLIED_TERMS: &str = r#"<http://ex.org/s> a <http://ex.org/C> ;
    <http://ex.org/p> "x", "y"@en, 2, ( <http://ex.org/o> ) ."#;

#[test]
fn implied_terms_without_default_prefixes() -> TestResult {
    let p = TurtleParser {
        default_prefixes: false,
        ..TurtleParser::default()
    };
    let mut graph = p.graph(IMPLIED_TERMS)?;
    assert!(graph.prefixes.is_empty());
    graph.apply_metadata()?;
    let s = Uri::full("http://ex.org/s");
    let p = Uri::full("http://ex.org/p");
    assert!(graph.contains(&Triple::new(s.clone(), rdf::type_.full(), Uri::full("http://ex.org/C"))));
    assert!(graph.contains(&Triple::new(s.clone(), p.clone(), Literal::typed("x", xsd::string.full()))));
    assert!(graph.contains(&Triple::new(s.clone(), p.clone(), Literal::new("y", rdf::langString.full(), Some("en")))));
    assert!(graph.contains(&Triple::new(s, p, Literal::typed("2", xsd::integer.full()))));
    assert!(graph.contains(&Triple::new(Uri::blank("blank1"), rdf::rest.full(), rdf::nil.full())));
    Ok(())
}

#[test_case("@prefix xsd: <http://example.org/mine#> . @prefix rdf: <http://example.org/r#> .", ""; "before")]
#[test_case("@prefix xsd: <http://example.org/mine#> .", "PREFIX rdf: <http://example.org/r#>"; "around")]
fn implied_terms_ignore_rebound_labels(before: &str, after: &str) -> TestResult {
    let txt = format!("{before}\n{IMPLIED_TERMS}\n<http://ex.org/s> <http://ex.org/p> rdf:value, \"z\"^^xsd:foo .\n{after}");
    let mut graph = parse_str(&txt)?;
    assert!(graph.triples.iter().any(|t| t.predicate.0 == rdf::type_.full()));
    graph.apply_metadata()?;
    let s = Uri::full("http://ex.org/s");
    let p = Uri::full("http://ex.org/p");
    assert!(graph.contains(&Triple::new(s.clone(), rdf::type_.full(), Uri::full("http://ex.org/C"))));
    assert!(graph.contains(&Triple::new(s.clone(), p.clone(), Literal::typed("x", xsd::string.full()))));
    assert!(graph.contains(&Triple::new(s.clone(), p.clone(), Literal::new("y", rdf::langString.full(), Some("en")))));
    assert!(graph.contains(&Triple::new(s.clone(), p.clone(), Literal::typed("2", xsd::integer.full()))));
    assert!(graph.contains(&Triple::new(Uri::blank("blank1"), rdf::first.full(), Uri::full("http://ex.org/o"))));
    assert!(graph.contains(&Triple::new(Uri::blank("blank1"), rdf::rest.full(), rdf::nil.full())));
    // written terms follow the document's own bindings
    assert!(graph.contains(&Triple::new(s.clone(), p.clone(), Uri::full("http://example.org/r#value"))));
    assert!(graph.contains(&Triple::new(s, p, Literal::typed("z", Uri::full("http://example.org/mine#foo")))));
    Ok(())
}

#[test]
fn standard_bindings_keep_implied_terms_prefixed() -> TestResult {
    let graph = parse_str(&format!("@prefix rdf: <{}> .\n{IMPLIED_TERMS}", rdf::PREFIX))?;
    assert_eq!(graph.triples[0].predicate.0, rdf::type_.prefixed());
    Ok(())
}

#[test]
fn meta() -> TestResult {
    let graph = parser().graph(
        "@base <http://example.org/> . @prefix ex: <http://example.org/> . PREFIX foo: <http://bar.com/>",
    )?;
    assert_eq!(graph.base_prefix.as_deref(), Some("http://example.org/"));
    let expected: HashMap<String, String> = [
        ("ex:", "http://example.org/"),
        ("foo:", "http://bar.com/"),
        ("rdf:", rdf::PREFIX),
        ("rdfs:", rdfs::PREFIX),
        ("xsd:", xsd::PREFIX),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(graph.prefixes, expected);
    assert!(graph.is_empty());
    Ok(())
}

#[test]
fn no_default_prefixes() -> TestResult {
    let p = TurtleParser {
        default_prefixes: false,
        ..TurtleParser::default()
    };
    let graph = p.graph("@prefix ex: <http://example.org/> .")?;
    assert_eq!(graph.prefixes.len(), 1);
    Ok(())
}

#[test]
fn relative_directives_use_the_current_base() -> TestResult {
    let p = TurtleParser {
        base: Some("http://example.org/a/".into()),
        ..TurtleParser::default()
    };
    let graph = p.graph("@prefix ex: <ns#> . @base <b/> . @prefix ex2: <ns#> .")?;
    assert_eq!(graph.prefixes["ex:"], "http://example.org/a/ns#");
    assert_eq!(graph.prefixes["ex2:"], "http://example.org/a/b/ns#");
    assert_eq!(graph.base_prefix.as_deref(), Some("http://example.org/a/b/"));
    Ok(())
}

#[test]
fn relative_prefix_without_base() {
    let err = parser().graph("@prefix ex: <ns#> .").unwrap_err();
    assert_eq!(err.position(), Some((1, 13)));
}

#[test]
fn apply_meta() -> TestResult {
    test_setup();
    let mut graph = parser().from_file(test_data("simple.ttl"))?;
    assert_eq!(graph.len(), 7);
    graph.apply_metadata()?;

    let unapplied = graph.iter().any(|t| {
        !t.subject.0.is_full()
            || !t.predicate.0.is_full()
            || matches!(&t.object, Object::Resource(o) if !o.is_full())
    });
    assert!(!unapplied);
    assert!(graph.contains(&Triple::new(
        Uri::full("http://example.org/#spiderman"),
        Uri::full("http://xmlns.com/foaf/0.1/name"),
        Literal::new("Человек-паук", rdf::langString.full(), Some("ru")),
    )));
    Ok(())
}

#[test]
fn blank_node_lists() -> TestResult {
    let graph = parse_file(test_data("blank_property_list.ttl"))?;
    let expected: Vec<Triple> = [
        r#"_:blank1 foaf:name "Alice" ."#,
        r#"_:blank2 foaf:name "Bob" ."#,
        r#"_:blank3 foaf:name "Eve" ."#,
        "_:blank2 foaf:knows _:blank3 .",
        r#"_:blank2 foaf:mbox "bob@example.com" ."#,
        "_:blank1 foaf:knows _:blank2 .",
    ]
    .into_iter()
    .flat_map(triples)
    .collect();
    assert_eq!(graph.triples, expected);
    Ok(())
}

#[test]
fn blank_nodes_are_numbered_across_statements() -> TestResult {
    let graph = parse_str("ex:a ex:p [] . ex:b ex:p [] .")?;
    let objects: Vec<String> = graph.iter().map(|t| t.object.to_string()).collect();
    assert_eq!(objects, vec!["_:blank1", "_:blank2"]);
    Ok(())
}

#[test]
fn sample_counts() {
    for (name, txt, count) in TTL_SAMPLES {
        let graph = parse_str(txt).unwrap_or_else(|err| panic!("{name}: {err}"));
        assert_eq!(graph.len(), *count, "{name}");
    }
}

#[test]
fn missing_file() {
    let err = parser().from_file(test_data("no_such_file.ttl")).unwrap_err();
    assert_eq!(err.kind(), None);
}

#[test_case("ex:a ex:b", SyntaxError::UnexpectedEof("an object".into()), (1, 6); "missing object")]
#[test_case("ex:a ex:b ex:c", SyntaxError::UnexpectedEof("'.'".into()), (1, 11); "missing dot")]
#[test_case("ex:a ex:b ex:c ;\n, .", SyntaxError::UnexpectedToken { expected: "a predicate".into(), found: ",".into() }, (2, 1); "comma after semicolon")]
#[test_case("ex:a ex:b [ ex:c ex:d", SyntaxError::UnbalancedBrackets('['), (1, 18); "unclosed bracket")]
#[test_case("ex:a ex:b ( ex:c", SyntaxError::UnbalancedBrackets('('), (1, 13); "unclosed paren")]
#[test_case("ex:a ex:b [ ex:c ex:d ) .", SyntaxError::UnexpectedToken { expected: "']'".into(), found: ")".into() }, (1, 23); "mismatched bracket")]
#[test_case("@prefix ex <http://ex.org/> .", SyntaxError::MalformedDirective("expected prefix label, found 'ex'".into()), (1, 9); "prefix without colon")]
#[test_case("@base \"x\" .", SyntaxError::MalformedDirective("expected IRI, found '\"x\"'".into()), (1, 7); "base not an iri")]
#[test_case("@prefix ex: <http://ex.org/> ex:a ex:b ex:c .", SyntaxError::UnexpectedToken { expected: "'.' after directive".into(), found: "ex:a".into() }, (1, 30); "directive without dot")]
#[test_case("ex:a ex:b ex:c . ]", SyntaxError::UnexpectedToken { expected: "a subject".into(), found: "]".into() }, (1, 18); "stray bracket")]
fn syntax_errors(txt: &str, kind: SyntaxError, position: (usize, usize)) {
    let err = parse_str(txt).unwrap_err();
    assert_eq!(err.kind(), Some(&kind), "{err}");
    assert_eq!(err.position(), Some(position));
}
