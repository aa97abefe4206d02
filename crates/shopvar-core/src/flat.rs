//! Default-variant matching for flat records: typed objects and decoded maps
//! that carry `title`, `option1` and `option2` directly.
//!
//! A product (anything exposing `variants`) matches only when it wraps
//! exactly one variant and that variant matches.

use serde_json::{Map, Value};

use crate::field::{lookup, Field, Key, Scalar, OPTION1, OPTION2, TITLE, VARIANTS};
use crate::record::{Attr, Record};

/// Evaluates a single variant-like record through `probe`.
///
/// `option1` passes when null or the default title. `option2` passes only
/// when null: a second option slot repeating the default title still means
/// the merchant configured something. Slots the record does not expose are
/// skipped. `option3` and beyond are never inspected.
fn variant_matches<'a, F>(probe: F) -> bool
where
    F: Fn(&Key) -> Field<Scalar<'a>>,
{
    let title = probe(&TITLE);
    if !title.is_present() {
        tracing::trace!("variant has no title accessor");
        return false;
    }
    let title_match = title.value().is_some_and(|title| title.is_default_title());

    let option1_match = match probe(&OPTION1) {
        Field::Absent => return title_match,
        Field::Null => true,
        Field::Present(option1) => option1.is_default_title(),
    };
    let option_match = title_match && option1_match;

    match probe(&OPTION2) {
        Field::Absent => option_match,
        option2 => option_match && option2.is_null(),
    }
}

fn record_variant_matches(record: &dyn Record) -> bool {
    variant_matches(|key| record.field(key.name()).map(|attr| attr.scalar()))
}

fn map_variant_matches(map: &Map<String, Value>) -> bool {
    variant_matches(|key| lookup(map, key).map(Scalar::from))
}

/// Matches an object-like value, unwrapping its `variants` accessor when it
/// has one.
#[must_use]
pub fn object_matches(record: &dyn Record) -> bool {
    match record.field(VARIANTS.name()) {
        Field::Absent => record_variant_matches(record),
        Field::Present(Attr::List(variants)) => match variants.as_slice() {
            [Some(variant)] => record_variant_matches(*variant),
            [None] => {
                tracing::trace!("single variant is not a record");
                false
            }
            _ => {
                tracing::trace!(count = variants.len(), "product does not have exactly one variant");
                false
            }
        },
        Field::Null | Field::Present(Attr::Text(_) | Attr::Other) => {
            tracing::trace!("variants accessor is not a sequence");
            false
        }
    }
}

/// Matches a decoded map under the flat interpretation.
///
/// A missing or null `variants` key means the map is itself the variant.
/// A `variants` sequence must hold exactly one map. Anything else under
/// `variants` (for example a GraphQL connection) fails here and is left to
/// [`crate::graph`].
#[must_use]
pub fn map_matches(map: &Map<String, Value>) -> bool {
    match lookup(map, &VARIANTS) {
        Field::Absent | Field::Null => map_variant_matches(map),
        Field::Present(Value::Array(variants)) => match variants.as_slice() {
            [Value::Object(variant)] => map_variant_matches(variant),
            _ => {
                tracing::trace!(
                    count = variants.len(),
                    "variants is not a single-element sequence of maps"
                );
                false
            }
        },
        Field::Present(_) => false,
    }
}

#[cfg(test)]
#[path = "flat_test.rs"]
mod tests;
