//! Field extraction
//!
//! Looks up a project field by name among an item's field values.

use crate::core::models::FieldEntry;

/// Find the scalar value of the field called `name`
///
/// The first entry owned by `name` decides: its text, date or option label
/// is returned. An empty value, or a milestone/iteration value, yields
/// `None` without looking further.
#[must_use]
pub fn extract_field<'a>(fields: &'a [FieldEntry], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|entry| entry.is_field(name))
        .and_then(|entry| entry.value.as_scalar())
        .filter(|value| !value.is_empty())
}
