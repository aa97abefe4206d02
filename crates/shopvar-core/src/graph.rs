//! Default-variant matching for Admin GraphQL response shapes.
//!
//! A product node can carry up to three independent signals:
//!
//! - `hasOnlyDefaultVariant`, precomputed by the server and authoritative
//!   when present,
//! - `variants { edges { node { title selectedOptions { name value } } } }`,
//! - `totalVariants`, which must be `1` whenever it is requested.
//!
//! Every signal that is present has to agree.

use serde_json::{Map, Value};

use crate::dispatch::MatchPath;
use crate::field::{
    is_default_title, lookup, Field, DEFAULT_TITLE, EDGES, HAS_ONLY_DEFAULT_VARIANT, NAME, NODE,
    SELECTED_OPTIONS, TITLE, TOTAL_VARIANTS, VALUE, VARIANTS,
};

/// Option name Shopify reports for the single option of an option-less
/// product.
const DEFAULT_OPTION_NAME: &str = "Title";

/// Evaluates `map` as a GraphQL product or variant node.
///
/// Returns the path that produced a positive match, or `None`.
#[must_use]
pub fn evaluate(map: &Map<String, Value>) -> Option<MatchPath> {
    let flag = lookup(map, &HAS_ONLY_DEFAULT_VARIANT);
    if flag.is_present() {
        // Any value other than null or `false` counts as set.
        let only_default = !matches!(flag, Field::Null | Field::Present(Value::Bool(false)));
        tracing::debug!(only_default, "hasOnlyDefaultVariant decides the match");
        return only_default.then_some(MatchPath::Flag);
    }

    match lookup(map, &VARIANTS) {
        Field::Present(Value::Object(variants)) => {
            (edges_match(variants) && total_variants_match(map)).then_some(MatchPath::Edges)
        }
        Field::Present(_) | Field::Null => None,
        // A bare variant node. Title-only nodes are left to the flat matcher,
        // which gives the same answer.
        Field::Absent => (lookup(map, &SELECTED_OPTIONS).is_present() && node_matches(map))
            .then_some(MatchPath::Node),
    }
}

/// Returns `true` when `map` is a GraphQL product or variant node that
/// represents a default variant.
#[must_use]
pub fn matches(map: &Map<String, Value>) -> bool {
    evaluate(map).is_some()
}

fn edges_match(variants: &Map<String, Value>) -> bool {
    let Field::Present(Value::Array(edges)) = lookup(variants, &EDGES) else {
        tracing::trace!("variants connection has no edges sequence");
        return false;
    };

    let [edge] = edges.as_slice() else {
        tracing::trace!(count = edges.len(), "variants connection does not have exactly one edge");
        return false;
    };

    match edge.as_object().map(|edge| lookup(edge, &NODE)) {
        Some(Field::Present(Value::Object(node))) => node_matches(node),
        _ => {
            tracing::trace!("variant edge has no node map");
            false
        }
    }
}

/// `totalVariants` is optional; when present it must equal `1` (`1.0`
/// included).
fn total_variants_match(map: &Map<String, Value>) -> bool {
    match lookup(map, &TOTAL_VARIANTS) {
        Field::Absent => true,
        Field::Null => false,
        Field::Present(total) => total.as_u64() == Some(1) || total.as_f64() == Some(1.0),
    }
}

/// Evaluates one variant node.
///
/// A title that is present and wrong is dispositive. Otherwise the last
/// signal present wins, and a node with neither signal does not match.
pub(crate) fn node_matches(node: &Map<String, Value>) -> bool {
    let mut verdict = None;

    let title = lookup(node, &TITLE);
    if title.is_present() {
        if !is_default_title(title) {
            return false;
        }
        verdict = Some(true);
    }

    let options = lookup(node, &SELECTED_OPTIONS);
    if options.is_present() {
        verdict = Some(selected_options_match(options));
    }

    verdict.unwrap_or(false)
}

fn selected_options_match(options: Field<&Value>) -> bool {
    let Some(Value::Array(options)) = options.value() else {
        return false;
    };
    let [Value::Object(option)] = options.as_slice() else {
        return false;
    };

    let name = lookup(option, &NAME).value().and_then(Value::as_str);
    let value = lookup(option, &VALUE).value().and_then(Value::as_str);
    name == Some(DEFAULT_OPTION_NAME) && value == Some(DEFAULT_TITLE)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
