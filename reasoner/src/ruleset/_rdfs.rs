use rdf_rs_api::model::{Object, Triple};
use rdf_rs_api::ns::{rdf, rdfs};

use super::{has_type, spelled_like};
use crate::{BaseReasoner, Entailment};

/// A [`BaseReasoner`] for [RDFS entailment](https://www.w3.org/TR/rdf11-mt/#rdfs-entailment)
/// (RDF 1.1 Semantics, §9.2.1).
///
/// Rules are named after the patterns they implement:
/// `rdfs1`, `rdfs2`, `rdfs3`, `rdfs4a`, `rdfs4b`, `rdfs5` ... `rdfs13`.
/// In binary rules, the first premise is the schema triple
/// (e.g. `p rdfs:domain c`), the second one is the data triple.
///
/// Vocabulary terms in conclusions are written like the matching term of the premise
/// (or like its predicate, when the premise has no vocabulary term):
/// expanded if it was a full IRI, prefixed (`rdf:type`) otherwise.
///
/// # Limitations
///
/// * `rdfs1` is applied to literals (`s p "v"^^dt` entails
///   `_:l rdf:type dt . s p _:l .`) rather than to every recognized datatype;
/// * the axiomatic triples of RDF and RDFS are not inferred.
#[derive(Clone, Copy, Debug, Default)]
pub struct RdfsReasoner;

impl BaseReasoner for RdfsReasoner {
    fn entailment_patterns() -> Vec<Entailment> {
        vec![
            rdfs1(),
            rdfs2(),
            rdfs3(),
            rdfs4a(),
            rdfs4b(),
            rdfs5(),
            rdfs6(),
            rdfs7(),
            rdfs8(),
            rdfs9(),
            rdfs10(),
            rdfs11(),
            rdfs12(),
            rdfs13(),
        ]
    }
}

/// Literals have the type of their datatype.
fn rdfs1() -> Entailment {
    Entailment::unary(
        "rdfs1",
        |t| t.object.is_literal(),
        |t, blank_nodes| {
            let Object::Literal(literal) = &t.object else {
                return vec![];
            };
            let node = blank_nodes.for_literal(literal);
            vec![
                Triple::new(
                    node.clone(),
                    spelled_like(&rdf::type_, &literal.datatype),
                    literal.datatype.clone(),
                ),
                Triple::new(t.subject.clone(), t.predicate.clone(), node),
            ]
        },
    )
}

/// `rdfs:domain`
fn rdfs2() -> Entailment {
    Entailment::binary(
        "rdfs2",
        |schema, data| {
            schema.predicate.0.is(&rdfs::domain)
                && schema.object.is_resource()
                && data.predicate.0 == schema.subject.0
        },
        |schema, data, _| {
            schema
                .object
                .resource()
                .map(|class| {
                    Triple::new(
                        data.subject.clone(),
                        spelled_like(&rdf::type_, &schema.predicate.0),
                        class.clone(),
                    )
                })
                .into_iter()
                .collect()
        },
    )
}

/// `rdfs:range`
fn rdfs3() -> Entailment {
    Entailment::binary(
        "rdfs3",
        |schema, data| {
            schema.predicate.0.is(&rdfs::range)
                && schema.object.is_resource()
                && data.object.is_resource()
                && data.predicate.0 == schema.subject.0
        },
        |schema, data, _| match (data.object.resource(), schema.object.resource()) {
            (Some(value), Some(class)) => vec![Triple::new(
                value.clone(),
                spelled_like(&rdf::type_, &schema.predicate.0),
                class.clone(),
            )],
            _ => vec![],
        },
    )
}

/// Subjects are resources.
fn rdfs4a() -> Entailment {
    Entailment::unary(
        "rdfs4a",
        |_| true,
        |t, _| {
            let like = &t.predicate.0;
            vec![Triple::new(
                t.subject.clone(),
                spelled_like(&rdf::type_, like),
                spelled_like(&rdfs::Resource, like),
            )]
        },
    )
}

/// Objects are resources (unless they are literals).
fn rdfs4b() -> Entailment {
    Entailment::unary(
        "rdfs4b",
        |t| t.object.is_resource(),
        |t, _| {
            t.object
                .resource()
                .map(|o| {
                    let like = &t.predicate.0;
                    Triple::new(
                        o.clone(),
                        spelled_like(&rdf::type_, like),
                        spelled_like(&rdfs::Resource, like),
                    )
                })
                .into_iter()
                .collect()
        },
    )
}

/// `rdfs:subPropertyOf` is transitive.
fn rdfs5() -> Entailment {
    Entailment::binary(
        "rdfs5",
        |t1, t2| {
            t1.predicate.0.is(&rdfs::subPropertyOf)
                && t2.predicate.0.is(&rdfs::subPropertyOf)
                && t1.object.resource() == Some(&t2.subject.0)
        },
        |t1, t2, _| {
            vec![Triple::new(
                t1.subject.clone(),
                t1.predicate.clone(),
                t2.object.clone(),
            )]
        },
    )
}

/// `rdfs:subPropertyOf` is reflexive on properties.
fn rdfs6() -> Entailment {
    Entailment::unary(
        "rdfs6",
        |t| has_type(t, &rdf::Property),
        |t, _| {
            vec![Triple::new(
                t.subject.clone(),
                spelled_like(&rdfs::subPropertyOf, &t.predicate.0),
                t.subject.clone(),
            )]
        },
    )
}

/// A statement with a sub-property holds for its super-properties.
fn rdfs7() -> Entailment {
    Entailment::binary(
        "rdfs7",
        |schema, data| {
            schema.predicate.0.is(&rdfs::subPropertyOf)
                && schema.object.is_resource()
                && data.predicate.0 == schema.subject.0
        },
        |schema, data, _| {
            schema
                .object
                .resource()
                .map(|super_property| {
                    Triple::new(
                        data.subject.clone(),
                        super_property.clone(),
                        data.object.clone(),
                    )
                })
                .into_iter()
                .collect()
        },
    )
}

/// Classes are subclasses of `rdfs:Resource`.
fn rdfs8() -> Entailment {
    Entailment::unary(
        "rdfs8",
        |t| has_type(t, &rdfs::Class),
        |t, _| {
            let like = &t.predicate.0;
            vec![Triple::new(
                t.subject.clone(),
                spelled_like(&rdfs::subClassOf, like),
                spelled_like(&rdfs::Resource, like),
            )]
        },
    )
}

/// Instances of a subclass are instances of its super-classes.
fn rdfs9() -> Entailment {
    Entailment::binary(
        "rdfs9",
        |schema, data| {
            schema.predicate.0.is(&rdfs::subClassOf)
                && schema.object.is_resource()
                && data.predicate.0.is(&rdf::type_)
                && data.object.resource() == Some(&schema.subject.0)
        },
        |schema, data, _| {
            vec![Triple::new(
                data.subject.clone(),
                data.predicate.clone(),
                schema.object.clone(),
            )]
        },
    )
}

/// `rdfs:subClassOf` is reflexive on classes.
fn rdfs10() -> Entailment {
    Entailment::unary(
        "rdfs10",
        |t| has_type(t, &rdfs::Class),
        |t, _| {
            vec![Triple::new(
                t.subject.clone(),
                spelled_like(&rdfs::subClassOf, &t.predicate.0),
                t.subject.clone(),
            )]
        },
    )
}

/// `rdfs:subClassOf` is transitive.
fn rdfs11() -> Entailment {
    Entailment::binary(
        "rdfs11",
        |t1, t2| {
            t1.predicate.0.is(&rdfs::subClassOf)
                && t2.predicate.0.is(&rdfs::subClassOf)
                && t1.object.resource() == Some(&t2.subject.0)
        },
        |t1, t2, _| {
            vec![Triple::new(
                t1.subject.clone(),
                t1.predicate.clone(),
                t2.object.clone(),
            )]
        },
    )
}

/// Container membership properties are sub-properties of `rdfs:member`.
fn rdfs12() -> Entailment {
    Entailment::unary(
        "rdfs12",
        |t| has_type(t, &rdfs::ContainerMembershipProperty),
        |t, _| {
            let like = &t.predicate.0;
            vec![Triple::new(
                t.subject.clone(),
                spelled_like(&rdfs::subPropertyOf, like),
                spelled_like(&rdfs::member, like),
            )]
        },
    )
}

/// Datatypes are subclasses of `rdfs:Literal`.
fn rdfs13() -> Entailment {
    Entailment::unary(
        "rdfs13",
        |t| has_type(t, &rdfs::Datatype),
        |t, _| {
            let like = &t.predicate.0;
            vec![Triple::new(
                t.subject.clone(),
                spelled_like(&rdfs::subClassOf, like),
                spelled_like(&rdfs::Literal, like),
            )]
        },
    )
}
