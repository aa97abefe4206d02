//! Entry point: routes an input to the matcher for its shape.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::record::{Opaque, Record};
use crate::{flat, graph};

/// An input to classify, tagged by shape once at the boundary.
#[derive(Clone, Copy)]
pub enum Subject<'a> {
    /// A decoded key/value map, e.g. a JSON object from a REST or GraphQL
    /// response.
    Map(&'a Map<String, Value>),
    /// A typed object probed through [`Record`].
    Object(&'a dyn Record),
}

impl<'a> Subject<'a> {
    #[must_use]
    pub fn object(record: &'a dyn Record) -> Self {
        Subject::Object(record)
    }
}

impl<'a> From<&'a Value> for Subject<'a> {
    /// JSON objects become [`Subject::Map`]. Every other JSON value exposes
    /// no fields and can never match.
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Subject::Map(map),
            _ => Subject::Object(&Opaque),
        }
    }
}

impl<'a> From<&'a Map<String, Value>> for Subject<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        Subject::Map(map)
    }
}

impl<'a> From<&'a dyn Record> for Subject<'a> {
    fn from(record: &'a dyn Record) -> Self {
        Subject::Object(record)
    }
}

/// Which interpretation of the input produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPath {
    /// Flat `title`/`option1`/`option2` fields, on an object or a map,
    /// optionally wrapped in a single-element `variants` list.
    Flat,
    /// An explicit `hasOnlyDefaultVariant: true`.
    Flag,
    /// A `variants.edges[].node` connection with a single default node.
    Edges,
    /// A bare GraphQL variant node with default `selectedOptions`.
    Node,
}

/// Outcome of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub matched: bool,
    /// Set only when `matched` is `true`.
    pub path: Option<MatchPath>,
}

impl Verdict {
    const UNMATCHED: Verdict = Verdict {
        matched: false,
        path: None,
    };

    fn from_path(path: Option<MatchPath>) -> Self {
        path.map_or(Self::UNMATCHED, |path| Verdict {
            matched: true,
            path: Some(path),
        })
    }
}

/// Classifies `subject` and reports which interpretation matched.
///
/// Maps are tried as flat records first and as GraphQL nodes second; either
/// one matching is enough. Objects only have the flat interpretation.
#[must_use]
pub fn classify<'a>(subject: impl Into<Subject<'a>>) -> Verdict {
    let path = match subject.into() {
        Subject::Map(map) => flat::map_matches(map)
            .then_some(MatchPath::Flat)
            .or_else(|| graph::evaluate(map)),
        Subject::Object(record) => flat::object_matches(record).then_some(MatchPath::Flat),
    };
    Verdict::from_path(path)
}

/// Returns `true` when `subject` is a product with exactly one variant that
/// carries no option differentiation, or is such a variant itself.
///
/// Never panics: any shape it does not recognize yields `false`.
#[must_use]
pub fn is_default_variant<'a>(subject: impl Into<Subject<'a>>) -> bool {
    classify(subject).matched
}
