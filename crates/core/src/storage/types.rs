use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single attribute as stored in the table.
///
/// Only scalar types are modeled. An attribute that is "absent" is simply not
/// present in the [`AttributeMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A string.
    S(String),
    /// A number, kept in its decimal string form as the table transmits it.
    N(String),
    /// A boolean.
    Bool(bool),
    /// An explicit null.
    Null,
    /// Raw bytes.
    B(Vec<u8>),
}

impl AttributeValue {
    /// Returns the string payload if this is an `S` attribute.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the decimal payload if this is an `N` attribute.
    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttributeValue::N(n) => Some(n),
            _ => None,
        }
    }

    /// Short type descriptor used in diagnostics (`S`, `N`, `BOOL`, `NULL`, `B`).
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::S(_) => "S",
            AttributeValue::N(_) => "N",
            AttributeValue::Bool(_) => "BOOL",
            AttributeValue::Null => "NULL",
            AttributeValue::B(_) => "B",
        }
    }
}

impl From<Decimal> for AttributeValue {
    fn from(value: Decimal) -> Self {
        AttributeValue::N(value.to_string())
    }
}

/// An item as the table sees it: attribute name to value.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// The condition attached to a put.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutCondition {
    /// The write succeeds only if no stored item has this attribute, i.e. the
    /// key is not taken yet.
    AttributeNotExists(String),
}

/// Result of one bounded scan call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub items: Vec<AttributeMap>,
    /// Key of the last item evaluated when the scan stopped early.
    pub last_evaluated_key: Option<AttributeMap>,
}

/// One page of entities produced by a list operation.
///
/// Items come back in the table's internal scan order. That order is neither
/// insertion order nor sorted by any field the caller can rely on; the only
/// guarantee is that feeding `cursor` back into the next call continues after
/// the last item of this page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub cursor: Option<String>,
}

impl<T> Page<T> {
    /// Returns true if the scan reported more data after this page.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_only_their_variant() {
        let s = AttributeValue::S("box".to_string());
        let n = AttributeValue::N("42".to_string());

        assert_eq!(s.as_s(), Some("box"));
        assert_eq!(s.as_n(), None);
        assert_eq!(n.as_n(), Some("42"));
        assert_eq!(n.as_s(), None);
        assert_eq!(AttributeValue::Bool(true).as_s(), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(AttributeValue::S(String::new()).type_name(), "S");
        assert_eq!(AttributeValue::N("1".to_string()).type_name(), "N");
        assert_eq!(AttributeValue::Bool(false).type_name(), "BOOL");
        assert_eq!(AttributeValue::Null.type_name(), "NULL");
        assert_eq!(AttributeValue::B(vec![1, 2]).type_name(), "B");
    }

    #[test]
    fn test_number_from_decimal_keeps_scale() {
        assert_eq!(
            AttributeValue::from(Decimal::new(-1500, 2)),
            AttributeValue::N("-15.00".to_string())
        );
        assert_eq!(
            AttributeValue::from(Decimal::new(1513, 2)),
            AttributeValue::N("15.13".to_string())
        );
    }

    #[test]
    fn test_empty_page() {
        let page: Page<String> = Page {
            items: vec![],
            cursor: None,
        };
        assert!(page.is_empty());
        assert!(!page.has_more());
        assert_eq!(page.len(), 0);
    }
}
