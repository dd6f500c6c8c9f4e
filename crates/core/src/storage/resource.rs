use super::codec::AttributeCodec;

/// A required draft field that was absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

/// An entity type that can be kept in a [`ResourceStore`](super::ResourceStore).
///
/// Implementors describe their identifier attribute, how a caller-supplied
/// draft is validated, and (through [`AttributeCodec`]) how they are laid out
/// in the table. The partition key attribute is always [`Self::ID_FIELD`].
pub trait Resource: AttributeCodec + Clone + Send + Sync + 'static {
    /// Caller input for `create`, before an identifier exists.
    type Draft: Send + Sync;

    /// Human readable type name used in error messages.
    const ENTITY_TYPE: &'static str;

    /// Attribute holding the identifier; also the table's partition key.
    const ID_FIELD: &'static str;

    /// Checks every required field of `draft` and builds the entity.
    ///
    /// The identifier is left empty; the store assigns one before writing.
    fn from_draft(draft: &Self::Draft) -> Result<Self, MissingField>;

    /// Replaces the identifier of a not-yet-persisted entity.
    fn with_id(self, id: String) -> Self;
}

/// A required text field: present and non-empty.
pub fn require_text(field: &'static str, value: &Option<String>) -> Result<String, MissingField> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.clone()),
        _ => Err(MissingField(field)),
    }
}

/// A required non-text field: present.
pub fn require_present<T: Copy>(field: &'static str, value: Option<T>) -> Result<T, MissingField> {
    value.ok_or(MissingField(field))
}
