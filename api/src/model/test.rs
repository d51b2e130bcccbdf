use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use test_case::test_case;

use super::*;
use crate::ns::{rdf, rdfs, xsd};
use crate::{test_setup, ModelError};

fn h<H: Hash>(x: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

fn pfx(prefix: &str, name: &str) -> Uri {
    Uri::new(prefix, name, UriType::Prefixed)
}

fn sample_triple() -> Triple {
    Triple::new(
        Uri::full("http://example.com/foo#John"),
        pfx("foaf:", "lastName"),
        Literal::from("Johnson"),
    )
}

#[test]
fn triple_to_tuple_and_back() {
    let t = sample_triple();
    let tuple: (Resource, Relationship, Object) = t.clone().into();
    let back: Triple = tuple.into();
    assert_eq!(back, t);
}

#[test]
fn tuple_to_triple_and_back() {
    let tuple = (
        Resource::from(Uri::blank("a")),
        Relationship::from(pfx("ex:", "p")),
        Object::from(Literal::lang("chat", "fr")),
    );
    let t: Triple = tuple.clone().into();
    assert_eq!(t.subject, tuple.0);
    assert_eq!(t.predicate, tuple.1);
    assert_eq!(t.object, tuple.2);
    let back: (Resource, Relationship, Object) = t.into();
    assert_eq!(back, tuple);
}

#[test]
fn same_uri_as_resource_and_relationship() {
    let u = pfx("ex:", "knows");
    let r = Resource::from(u.clone());
    let p = Relationship::from(u.clone());
    assert_eq!(r.0, p.0);
    assert_eq!(Uri::from(r), u);
}

#[test_case(""; "empty")]
#[test_case("plain"; "plain")]
#[test_case("with \"quotes\" and\nnewline"; "escapes")]
#[test_case("すし"; "unicode")]
fn literal_from_text(txt: &str) {
    let l = Literal::from(txt);
    assert_eq!(l.value, txt);
    assert!(l.datatype.is(&xsd::string));
    assert!(l.language.is_none());
    assert!(l.is_plain());
    assert_eq!(Literal::from(txt.to_string()), l);
}

#[test]
fn uri_equality_ignores_split() {
    let u1 = Uri::new("http://example.org/", "a/b", UriType::Full);
    let u2 = Uri::new("http://example.org/a/", "b", UriType::Full);
    let u3 = Uri::full("http://example.org/a/b");
    assert_eq!(u1, u2);
    assert_eq!(u1, u3);
    assert_eq!(h(&u1), h(&u2));
    assert_eq!(h(&u1), h(&u3));
    assert_eq!(u1.cmp(&u2), std::cmp::Ordering::Equal);
}

#[test]
fn uri_equality_depends_on_type() {
    let relative = Uri::new("", "foo", UriType::Relative);
    let base = Uri::new("", "foo", UriType::PrefixedWithBase);
    assert_ne!(relative, base);
}

#[test_case("http://example.org/foo#bar", "http://example.org/foo#", "bar")]
#[test_case("http://example.org/foo/bar", "http://example.org/foo/", "bar")]
#[test_case("http://example.org/", "http://example.org/", "")]
#[test_case("urn:isbn:0451450523", "urn:isbn:", "0451450523")]
fn uri_full_split(iri: &str, prefix: &str, name: &str) {
    let u = Uri::full(iri);
    assert_eq!(u.prefix, prefix);
    assert_eq!(u.name, name);
    assert_eq!(u.uri_type, UriType::Full);
    assert_eq!(u.value(), iri);
}

#[test_case(Uri::full("http://ex.org/a"), "<http://ex.org/a>")]
#[test_case(Uri::new("", "person", UriType::Relative), "<person>")]
#[test_case(pfx("ex:", "person"), "ex:person")]
#[test_case(Uri::new(":", "person", UriType::PrefixedWithBase), ":person")]
#[test_case(Uri::blank("b1"), "_:b1")]
fn uri_display(uri: Uri, expected: &str) {
    assert_eq!(uri.to_string(), expected);
}

#[test_case(Literal::from("Johnson"), r#""Johnson""#)]
#[test_case(Literal::lang("すし", "jp"), r#""すし"@jp"#)]
#[test_case(Literal::typed("-5", &xsd::integer), r#""-5"^^xsd:integer"#)]
#[test_case(Literal::typed("1", xsd::integer.full()), r#""1"^^<http://www.w3.org/2001/XMLSchema#integer>"#)]
#[test_case(Literal::from("say \"hi\"\n"), r#""say \"hi\"\n""#)]
fn literal_display(literal: Literal, expected: &str) {
    assert_eq!(literal.to_string(), expected);
}

#[test]
fn object_accessors() {
    let lit = Object::from(Literal::from("x"));
    assert!(lit.is_literal());
    assert!(!lit.is_resource());
    assert_eq!(lit.literal().map(|l| l.value.as_str()), Some("x"));
    assert!(lit.resource().is_none());

    let res = Object::from(Resource::from(pfx("ex:", "y")));
    assert!(res.is_resource());
    assert_eq!(res.resource(), Some(&pfx("ex:", "y")));
    assert!(res.literal().is_none());
}

#[test]
fn uri_is_vocabulary_term() {
    assert!(pfx("rdf:", "type").is(&rdf::type_));
    assert!(rdf::type_.full().is(&rdf::type_));
    assert!(Uri::full("http://www.w3.org/2000/01/rdf-schema#domain").is(&rdfs::domain));
    assert!(!pfx("rdfs:", "range").is(&rdfs::domain));
    assert!(!Uri::blank("type").is(&rdf::type_));
}

#[test]
fn triple_display() {
    assert_eq!(
        sample_triple().to_string(),
        r#"<http://example.com/foo#John> foaf:lastName "Johnson" ."#
    );
}

// ---------------------------------------------------------------------------------
//                                      graph
// ---------------------------------------------------------------------------------

fn spiderman_graph() -> Graph {
    let mut g = Graph::with_base("http://example.org/").unwrap();
    g.add_prefix("foaf:", "http://xmlns.com/foaf/0.1/").unwrap();
    g.add_prefix("rel:", "http://www.perceive.net/schemas/relationship/")
        .unwrap();
    g.insert(Triple::new(
        Uri::new("", "#spiderman", UriType::Relative),
        pfx("rel:", "enemyOf"),
        Uri::new("", "#green-goblin", UriType::Relative),
    ));
    g.insert(Triple::new(
        Uri::new("", "#spiderman", UriType::Relative),
        pfx("rdf:", "type"),
        pfx("foaf:", "Person"),
    ));
    g.insert(Triple::new(
        Uri::new(":", "spiderman", UriType::PrefixedWithBase),
        pfx("foaf:", "name"),
        Literal::lang("Человек-паук", "ru"),
    ));
    g.insert(Triple::new(
        pfx("_:", "b0"),
        pfx("foaf:", "knows"),
        Uri::blank("b1"),
    ));
    g
}

#[test]
fn graph_defaults() {
    let g = Graph::new();
    assert!(g.is_empty());
    assert_eq!(g.base_prefix, None);
    assert_eq!(g.prefixes.len(), 3);
    assert_eq!(g.prefixes["rdf:"], rdf::PREFIX);
    assert_eq!(g.prefixes["rdfs:"], rdfs::PREFIX);
    assert_eq!(g.prefixes["xsd:"], xsd::PREFIX);
}

#[test]
fn graph_insert_skips_duplicates() {
    let mut g = Graph::new();
    assert!(g.insert(sample_triple()));
    assert!(!g.insert(sample_triple()));
    assert_eq!(g.len(), 1);
    g.extend(vec![sample_triple(), sample_triple()]);
    assert_eq!(g.len(), 1);
}

#[test_case("ex"; "no colon")]
#[test_case("1ex:"; "leading digit")]
#[test_case("e x:"; "space")]
fn graph_rejects_invalid_prefix(prefix: &str) {
    let mut g = Graph::new();
    assert_eq!(
        g.add_prefix(prefix, "http://example.org/"),
        Err(ModelError::InvalidPrefix(prefix.into()))
    );
}

#[test]
fn graph_rejects_relative_namespace() {
    let mut g = Graph::new();
    assert!(matches!(
        g.add_prefix("ex:", "example/"),
        Err(ModelError::InvalidIri { .. })
    ));
    assert!(Graph::with_base("not an iri").is_err());
}

#[test]
fn apply_metadata_expands_everything() {
    test_setup();
    let mut g = spiderman_graph();
    g.apply_metadata().unwrap();

    for t in &g {
        assert!(t.subject.0.is_full() || t.subject.0.is_blank_node(), "{t}");
        assert!(t.predicate.0.is_full(), "{t}");
        match &t.object {
            Object::Resource(u) => assert!(u.is_full() || u.is_blank_node(), "{t}"),
            Object::Literal(l) => assert!(l.datatype.is_full(), "{t}"),
        }
    }
    assert_eq!(
        g.triples[0].to_string(),
        "<http://example.org/#spiderman> \
         <http://www.perceive.net/schemas/relationship/enemyOf> \
         <http://example.org/#green-goblin> ."
    );
    assert!(g.triples[1].predicate.0.is(&rdf::type_));
    assert_eq!(
        g.triples[2].subject.0,
        Uri::full("http://example.org/spiderman")
    );
    assert_eq!(g.triples[3].subject.0, Uri::blank("b0"));
}

#[test]
fn empty_prefix_is_preferred_over_base() {
    let mut g = Graph::with_base("http://example.org/base/").unwrap();
    let u = Uri::new(":", "x", UriType::PrefixedWithBase);
    assert_eq!(g.resolve(&u), Ok(Uri::full("http://example.org/base/x")));
    g.add_prefix(":", "http://example.org/empty#").unwrap();
    assert_eq!(g.resolve(&u), Ok(Uri::full("http://example.org/empty#x")));
}

#[test]
fn relative_resolution_follows_rfc3987() {
    let g = Graph::with_base("http://example.org/a/b").unwrap();
    let up = Uri::new("", "../c", UriType::Relative);
    assert_eq!(g.resolve(&up), Ok(Uri::full("http://example.org/c")));
}

#[test]
fn apply_metadata_errors_leave_graph_unchanged() {
    let mut g = spiderman_graph();
    g.insert(Triple::new(
        pfx("dc:", "x"),
        pfx("foaf:", "name"),
        Literal::from("x"),
    ));
    let before = g.clone();
    assert_eq!(
        g.apply_metadata(),
        Err(ModelError::UndefinedPrefix("dc:".into()))
    );
    assert_eq!(g, before);
}

#[test]
fn relative_without_base() {
    let g = Graph::new();
    let u = Uri::new("", "foo", UriType::Relative);
    assert_eq!(g.resolve(&u), Err(ModelError::MissingBase("foo".into())));
    let u = Uri::new(":", "foo", UriType::PrefixedWithBase);
    assert_eq!(g.resolve(&u), Err(ModelError::UndefinedPrefix(":".into())));
}

#[test]
fn graph_from_iterator() {
    let g: Graph = vec![sample_triple(), sample_triple()].into_iter().collect();
    assert_eq!(g.len(), 1);
    let triples: Vec<Triple> = g.into_iter().collect();
    assert_eq!(triples, vec![sample_triple()]);
}

#[test]
fn graph_extend_many() {
    let mut g = Graph::new();
    g.insert(sample_triple());
    let many = (0..20_000).map(|i| {
        Triple::new(
            pfx("ex:", &format!("s{}", i % 10_000)),
            pfx("ex:", "p"),
            Literal::from("o"),
        )
    });
    g.extend(many);
    assert_eq!(g.len(), 10_001);
    assert_eq!(g.triples[0], sample_triple());
    assert_eq!(g.triples[1].subject.0, pfx("ex:", "s0"));
    assert_eq!(g.triples[10_000].subject.0, pfx("ex:", "s9999"));
}

#[test_case(pfx("rdf:", "type"), rdf::type_.full(); "rdf")]
#[test_case(pfx("rdfs:", "Class"), rdfs::Class.full(); "rdfs")]
#[test_case(pfx("xsd:", "string"), xsd::string.full(); "xsd")]
fn undeclared_standard_prefixes(uri: Uri, expected: Uri) {
    let mut g = Graph::new();
    g.prefixes.clear();
    assert_eq!(g.resolve(&uri), Ok(expected));
    assert_eq!(
        g.resolve(&pfx("ex:", "a")),
        Err(ModelError::UndefinedPrefix("ex:".into()))
    );
}

#[test]
fn declared_standard_labels_take_precedence() {
    let mut g = Graph::new();
    g.add_prefix("xsd:", "http://example.org/mine#").unwrap();
    assert_eq!(
        g.resolve(&pfx("xsd:", "string")),
        Ok(Uri::full("http://example.org/mine#string"))
    );
    assert_eq!(g.rebound_prefixes(), vec!["xsd:"]);
    g.add_prefix("xsd:", xsd::PREFIX).unwrap();
    assert!(g.rebound_prefixes().is_empty());
}

#[test]
fn triple_uris() {
    let t = sample_triple();
    let uris: Vec<&Uri> = t.uris().collect();
    assert_eq!(
        uris,
        vec![
            &Uri::full("http://example.com/foo#John"),
            &pfx("foaf:", "lastName"),
            &xsd::string.prefixed(),
        ]
    );
    let blanked = t.map_uris(|u| Uri::blank(&u.name));
    assert_eq!(blanked.to_string(), r#"_:John _:lastName "Johnson"^^_:string ."#);
}
