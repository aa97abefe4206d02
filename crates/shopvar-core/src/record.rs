//! Capability seam for typed, in-memory product and variant objects.
//!
//! A [`Record`] answers one question: "do you expose an accessor with this
//! name, and what does it hold?". Implementors list only the accessors they
//! really have. Anything not listed reports [`Field::Absent`], which is how
//! a struct without an `option1` field opts out of the option checks.

use crate::field::{Field, Scalar};

/// An object-like value whose fields can be probed by name.
pub trait Record {
    /// Returns the value of the accessor called `name`, or [`Field::Absent`]
    /// when this record has no such accessor.
    fn field(&self, name: &str) -> Field<Attr<'_>>;
}

/// The value held by a record accessor.
pub enum Attr<'a> {
    Text(&'a str),
    /// A sequence. Elements that are not records are `None`.
    List(Vec<Option<&'a dyn Record>>),
    /// Present and non-null, but neither text nor a sequence.
    Other,
}

impl<'a> Attr<'a> {
    /// Builds a list attribute from a slice of records.
    #[must_use]
    pub fn records<R: Record>(items: &'a [R]) -> Self {
        Attr::List(
            items
                .iter()
                .map(|item| Some(item as &'a dyn Record))
                .collect(),
        )
    }

    #[must_use]
    pub fn scalar(&self) -> Scalar<'a> {
        match *self {
            Attr::Text(text) => Scalar::Text(text),
            Attr::List(_) | Attr::Other => Scalar::Other,
        }
    }
}

impl<'a> From<Option<&'a str>> for Field<Attr<'a>> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Field::Null, |text| Field::Present(Attr::Text(text)))
    }
}

impl<'a> From<&'a str> for Field<Attr<'a>> {
    fn from(text: &'a str) -> Self {
        Field::Present(Attr::Text(text))
    }
}

/// A value that exposes no accessors at all: strings, numbers, booleans,
/// null and bare arrays once they reach the object path.
pub(crate) struct Opaque;

impl Record for Opaque {
    fn field(&self, _name: &str) -> Field<Attr<'_>> {
        Field::Absent
    }
}
