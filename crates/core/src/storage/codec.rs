//! Attribute conversion between typed entities and table items.
//!
//! Pure functions only. Decoding is strict: an attribute that is absent, has
//! the wrong type, or (for identifiers) is empty fails the whole record rather
//! than producing a half-populated entity.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{AttributeMap, AttributeValue};

/// Bidirectional, field-by-field conversion for one entity type.
pub trait AttributeCodec: Sized {
    /// Writes every modeled field.
    fn encode(&self) -> AttributeMap;

    /// Reads every modeled field, verifying its stored type.
    fn decode(item: &AttributeMap) -> Result<Self, MalformedAttribute>;
}

/// What is wrong with a stored attribute.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    #[error("attribute is missing")]
    Missing,
    #[error("expected type {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("identifier is empty")]
    Empty,
    #[error("not a valid number: {0}")]
    InvalidNumber(String),
}

/// A record failed decoding at `field`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {kind}")]
pub struct MalformedAttribute {
    pub field: &'static str,
    pub kind: MalformedKind,
}

impl MalformedAttribute {
    fn new(field: &'static str, kind: MalformedKind) -> Self {
        Self { field, kind }
    }
}

fn attribute<'a>(
    item: &'a AttributeMap,
    field: &'static str,
) -> Result<&'a AttributeValue, MalformedAttribute> {
    item.get(field)
        .ok_or_else(|| MalformedAttribute::new(field, MalformedKind::Missing))
}

/// Get a required string attribute.
pub fn required_string(
    item: &AttributeMap,
    field: &'static str,
) -> Result<String, MalformedAttribute> {
    let value = attribute(item, field)?;
    value.as_s().map(str::to_string).ok_or_else(|| {
        MalformedAttribute::new(
            field,
            MalformedKind::WrongType {
                expected: "S",
                found: value.type_name(),
            },
        )
    })
}

/// Get a required, non-empty string attribute used as an identifier.
pub fn required_identifier(
    item: &AttributeMap,
    field: &'static str,
) -> Result<String, MalformedAttribute> {
    let id = required_string(item, field)?;
    if id.is_empty() {
        return Err(MalformedAttribute::new(field, MalformedKind::Empty));
    }
    Ok(id)
}

/// Get a required decimal attribute stored as `N`.
///
/// Accepts the plain and exponent forms the table may hand back.
pub fn required_number(
    item: &AttributeMap,
    field: &'static str,
) -> Result<Decimal, MalformedAttribute> {
    let value = attribute(item, field)?;
    let raw = value.as_n().ok_or_else(|| {
        MalformedAttribute::new(
            field,
            MalformedKind::WrongType {
                expected: "N",
                found: value.type_name(),
            },
        )
    })?;
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| MalformedAttribute::new(field, MalformedKind::InvalidNumber(raw.to_string())))
}
