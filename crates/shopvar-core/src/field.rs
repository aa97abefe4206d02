//! Tri-state field probing shared by every matcher.
//!
//! A field is either not exposed at all ([`Field::Absent`]), exposed but
//! holding nothing ([`Field::Null`]), or exposed with a value
//! ([`Field::Present`]). The matchers treat `Absent` and `Null` differently:
//! an absent option slot is skipped, a null one is checked and passes.

use serde_json::{Map, Value};

/// The literal title Shopify assigns to the only variant of a product that
/// has no options.
pub const DEFAULT_TITLE: &str = "Default Title";

/// Result of looking up a named field on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<T> {
    /// The record exposes no accessor or key with this name.
    Absent,
    /// The accessor exists and holds null.
    Null,
    /// The accessor exists and holds a value.
    Present(T),
}

impl<T> Field<T> {
    /// Returns `true` unless the field is [`Field::Absent`].
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self, Field::Absent)
    }

    /// Returns `true` for [`Field::Null`] only.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Returns the held value, if any.
    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Null => None,
        }
    }

    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Present(value) => Field::Present(f(value)),
        }
    }
}

/// A field name together with the key encodings it may appear under in a
/// decoded map.
///
/// GraphQL responses use camelCase (`selectedOptions`) while REST payloads
/// and serde-serialized Rust structs use snake_case (`selected_options`).
/// Encodings are tried in order; the first key present wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    encodings: &'static [&'static str],
}

impl Key {
    #[must_use]
    pub const fn new(encodings: &'static [&'static str]) -> Self {
        Self { encodings }
    }

    /// The canonical name, used as the accessor name for [`crate::Record`]s.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.encodings.first().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn encodings(&self) -> &'static [&'static str] {
        self.encodings
    }
}

pub const TITLE: Key = Key::new(&["title"]);
pub const OPTION1: Key = Key::new(&["option1"]);
pub const OPTION2: Key = Key::new(&["option2"]);
pub const VARIANTS: Key = Key::new(&["variants"]);
pub const EDGES: Key = Key::new(&["edges"]);
pub const NODE: Key = Key::new(&["node"]);
pub const NAME: Key = Key::new(&["name"]);
pub const VALUE: Key = Key::new(&["value"]);
pub const SELECTED_OPTIONS: Key = Key::new(&["selectedOptions", "selected_options"]);
pub const HAS_ONLY_DEFAULT_VARIANT: Key =
    Key::new(&["hasOnlyDefaultVariant", "has_only_default_variant"]);
pub const TOTAL_VARIANTS: Key = Key::new(&["totalVariants", "total_variants"]);

/// Looks `key` up in a decoded map, trying each encoding in order.
///
/// A key that is present with a JSON `null` yields [`Field::Null`], which is
/// distinct from the key not being there at all.
#[must_use]
pub fn lookup<'a>(map: &'a Map<String, Value>, key: &Key) -> Field<&'a Value> {
    key.encodings()
        .iter()
        .find_map(|encoding| map.get(*encoding))
        .map_or(Field::Absent, |value| match value {
            Value::Null => Field::Null,
            other => Field::Present(other),
        })
}

/// The part of a field value the flat matcher cares about: is it the text
/// it compares against, or something else entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    Text(&'a str),
    Other,
}

impl Scalar<'_> {
    /// Returns `true` when this is text equal to [`DEFAULT_TITLE`].
    #[must_use]
    pub fn is_default_title(&self) -> bool {
        matches!(self, Scalar::Text(text) if *text == DEFAULT_TITLE)
    }
}

impl<'a> From<&'a Value> for Scalar<'a> {
    fn from(value: &'a Value) -> Self {
        value.as_str().map_or(Scalar::Other, Scalar::Text)
    }
}

/// Returns `true` when `field` holds exactly [`DEFAULT_TITLE`].
pub(crate) fn is_default_title(field: Field<&Value>) -> bool {
    field
        .value()
        .is_some_and(|value| Scalar::from(value).is_default_title())
}
