//! Writes a [`Graph`] back as [Turtle].
//!
//! Nothing is buffered here: every term is a separate write,
//! so file or socket targets are better wrapped in an [`io::BufWriter`].
//!
//! [Turtle]: https://www.w3.org/TR/turtle/

use std::collections::BTreeSet;
use std::io;

use rdf_rs_api::model::{Graph, Object, Relationship, Triple, Uri, UriType};
use rdf_rs_api::ns::{rdf, standard_namespace};

/// Layout options of a [`TurtleSerializer`].
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    pub(super) group_subjects: bool,
    pub(super) indentation: String,
}

impl TurtleConfig {
    /// When set (the default), a run of triples with the same subject
    /// is written as one statement, its predicates separated by `;`.
    pub fn group_subjects(&self) -> bool {
        self.group_subjects
    }

    /// Leading whitespace of each continuation line of a grouped statement
    /// (two spaces by default).
    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    /// The default layout.
    pub fn new() -> Self {
        TurtleConfig {
            group_subjects: true,
            indentation: "  ".into(),
        }
    }

    /// Turn subject grouping on or off.
    pub fn with_group_subjects(self, group_subjects: bool) -> Self {
        TurtleConfig {
            group_subjects,
            ..self
        }
    }

    /// Change the indentation of continuation lines.
    ///
    /// # Panics
    /// If `indentation` contains anything but whitespace.
    pub fn with_indentation<T: Into<String>>(self, indentation: T) -> Self {
        let indentation = indentation.into();
        assert!(
            indentation.chars().all(char::is_whitespace),
            "indentation must be whitespace, got {indentation:?}"
        );
        TurtleConfig {
            indentation,
            ..self
        }
    }
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes graphs as Turtle to some [`io::Write`].
///
/// The `@base` and `@prefix` metadata of the graph come first,
/// then its triples in order, with their URIs written as they are
/// (expanded or not, see [`Graph::apply_metadata`]).
/// The `rdf:`, `rdfs:` and `xsd:` prefixes are declared
/// whenever the triples use them without the graph declaring them.
pub struct TurtleSerializer<W> {
    config: TurtleConfig,
    write: W,
}

impl<W: io::Write> TurtleSerializer<W> {
    /// A serializer with the default layout.
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, TurtleConfig::default())
    }

    /// A serializer with the given layout.
    pub fn new_with_config(write: W, config: TurtleConfig) -> Self {
        TurtleSerializer { config, write }
    }

    /// The layout used by this serializer.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Write `graph` to the underlying [`Write`](io::Write).
    pub fn serialize_graph(&mut self, graph: &Graph) -> io::Result<&mut Self> {
        let w = &mut self.write;
        if let Some(base) = &graph.base_prefix {
            writeln!(w, "@base <{base}> .")?;
        }
        let a_is_rdf_type = !graph.rebound_prefixes().contains(&rdf::LABEL);
        let mut prefixes: Vec<(&str, &str)> = graph
            .prefixes
            .iter()
            .map(|(prefix, ns)| (prefix.as_str(), ns.as_str()))
            .collect();
        prefixes.extend(undeclared_standard_prefixes(graph, a_is_rdf_type));
        prefixes.sort();
        for (prefix, ns) in &prefixes {
            writeln!(w, "@prefix {prefix} <{ns}> .")?;
        }
        if (graph.base_prefix.is_some() || !prefixes.is_empty()) && !graph.is_empty() {
            writeln!(w)?;
        }

        let mut previous = None;
        for t in graph {
            let verb = verb(&t.predicate, a_is_rdf_type);
            match previous {
                Some(subject) if self.config.group_subjects && subject == &t.subject => {
                    write!(w, " ;\n{}{verb} {}", self.config.indentation, t.object)?;
                }
                Some(_) => {
                    writeln!(w, " .")?;
                    write!(w, "{} {verb} {}", t.subject, t.object)?;
                }
                None => write!(w, "{} {verb} {}", t.subject, t.object)?,
            }
            previous = Some(&t.subject);
        }
        if previous.is_some() {
            writeln!(w, " .")?;
        }
        w.flush()?;
        log::debug!("serialized {} triples", graph.len());
        Ok(self)
    }
}

impl TurtleSerializer<Vec<u8>> {
    /// A serializer writing to memory, with the default layout.
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }

    /// A serializer writing to memory, with the given layout.
    pub fn new_stringifier_with_config(config: TurtleConfig) -> Self {
        Self::new_with_config(Vec::new(), config)
    }

    /// The Turtle text written so far.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.write).into_owned()
    }
}

/// Serialize `graph` as Turtle, with the default config.
pub fn to_turtle_string(graph: &Graph) -> String {
    let mut stringifier = TurtleSerializer::new_stringifier();
    match stringifier.serialize_graph(graph) {
        Ok(s) => s.as_string(),
        // writing to a Vec<u8> does not fail
        Err(_) => String::new(),
    }
}

/// `a` stands for the prefixed form of `rdf:type`, which it parses back to
/// as long as `rdf:` has its standard binding.
fn writes_a(predicate: &Relationship, a_is_rdf_type: bool) -> bool {
    a_is_rdf_type && predicate.0.uri_type == UriType::Prefixed && predicate.0.is(&rdf::type_)
}

fn verb(predicate: &Relationship, a_is_rdf_type: bool) -> String {
    if writes_a(predicate, a_is_rdf_type) {
        "a".into()
    } else {
        predicate.to_string()
    }
}

/// The URIs of `t` that appear in its Turtle form.
fn written_uris(t: &Triple, a_is_rdf_type: bool) -> impl Iterator<Item = &Uri> {
    let predicate = (!writes_a(&t.predicate, a_is_rdf_type)).then_some(&t.predicate.0);
    let object = match &t.object {
        Object::Resource(uri) => Some(uri),
        Object::Literal(l) if l.language.is_none() && !l.is_plain() => Some(&l.datatype),
        Object::Literal(_) => None,
    };
    std::iter::once(&t.subject.0).chain(predicate).chain(object)
}

/// Standard prefixes used by the triples of `graph` but not declared by it.
fn undeclared_standard_prefixes(graph: &Graph, a_is_rdf_type: bool) -> BTreeSet<(&str, &str)> {
    graph
        .iter()
        .flat_map(|t| written_uris(t, a_is_rdf_type))
        .filter(|uri| uri.uri_type == UriType::Prefixed && !graph.prefixes.contains_key(&uri.prefix))
        .filter_map(|uri| Some((uri.prefix.as_str(), standard_namespace(&uri.prefix)?)))
        .collect()
}
