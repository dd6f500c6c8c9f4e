use serde::{Deserialize, Serialize};

use crate::storage::{
    require_text, required_identifier, required_string, AttributeCodec, AttributeMap,
    AttributeValue, MalformedAttribute, MissingField, Resource,
};

pub const PRODUCT_ID: &str = "productId";
pub const PRODUCT_TYPE: &str = "productType";
pub const DELIVERY_DATE: &str = "deliveryDate";

/// A shippable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub product_type: String,
    /// Free-form delivery slot, e.g. `2020-10-08 13:00 - 15:00`.
    pub delivery_date: String,
}

/// Request payload for creating a product.
///
/// Both fields are optional at the type level so that a missing field can be
/// reported by name instead of as a generic deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
}

impl NewProduct {
    pub fn new(product_type: impl Into<String>, delivery_date: impl Into<String>) -> Self {
        Self {
            product_type: Some(product_type.into()),
            delivery_date: Some(delivery_date.into()),
        }
    }
}

impl AttributeCodec for Product {
    fn encode(&self) -> AttributeMap {
        let mut item = AttributeMap::new();
        item.insert(
            PRODUCT_ID.to_string(),
            AttributeValue::S(self.product_id.clone()),
        );
        item.insert(
            PRODUCT_TYPE.to_string(),
            AttributeValue::S(self.product_type.clone()),
        );
        item.insert(
            DELIVERY_DATE.to_string(),
            AttributeValue::S(self.delivery_date.clone()),
        );
        item
    }

    fn decode(item: &AttributeMap) -> Result<Self, MalformedAttribute> {
        Ok(Product {
            product_id: required_identifier(item, PRODUCT_ID)?,
            product_type: required_string(item, PRODUCT_TYPE)?,
            delivery_date: required_string(item, DELIVERY_DATE)?,
        })
    }
}

impl Resource for Product {
    type Draft = NewProduct;

    const ENTITY_TYPE: &'static str = "product";
    const ID_FIELD: &'static str = PRODUCT_ID;

    fn from_draft(draft: &NewProduct) -> Result<Self, MissingField> {
        Ok(Product {
            product_id: String::new(),
            product_type: require_text(PRODUCT_TYPE, &draft.product_type)?,
            delivery_date: require_text(DELIVERY_DATE, &draft.delivery_date)?,
        })
    }

    fn with_id(self, id: String) -> Self {
        Product {
            product_id: id,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MalformedKind;

    fn sample_product() -> Product {
        Product {
            product_id: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            product_type: "box".to_string(),
            delivery_date: "2020-10-08 13:00 - 15:00".to_string(),
        }
    }

    #[test]
    fn test_product_item_layout() {
        let item = sample_product().encode();

        assert_eq!(item.len(), 3);
        assert_eq!(
            item.get("productId").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(item.get("productType").unwrap().as_s().unwrap(), "box");
        assert_eq!(
            item.get("deliveryDate").unwrap().as_s().unwrap(),
            "2020-10-08 13:00 - 15:00"
        );
    }

    #[test]
    fn test_product_decodes_stored_item() {
        let product = sample_product();
        assert_eq!(Product::decode(&product.encode()).unwrap(), product);
    }

    #[test]
    fn test_decode_ignores_unmodeled_attributes() {
        let mut item = sample_product().encode();
        item.insert("legacy".to_string(), AttributeValue::Bool(true));

        assert_eq!(Product::decode(&item).unwrap(), sample_product());
    }

    #[test]
    fn test_decode_missing_identifier() {
        let mut item = sample_product().encode();
        item.remove(PRODUCT_ID);

        let err = Product::decode(&item).unwrap_err();
        assert_eq!(err.field, "productId");
        assert_eq!(err.kind, MalformedKind::Missing);
    }

    #[test]
    fn test_decode_wrong_typed_field() {
        let mut item = sample_product().encode();
        item.insert(DELIVERY_DATE.to_string(), AttributeValue::N("20201008".to_string()));

        let err = Product::decode(&item).unwrap_err();
        assert_eq!(err.field, "deliveryDate");
        assert_eq!(
            err.kind,
            MalformedKind::WrongType {
                expected: "S",
                found: "N"
            }
        );
    }

    #[test]
    fn test_from_draft_requires_product_type() {
        let draft = NewProduct {
            product_type: None,
            delivery_date: Some("2020-10-08".to_string()),
        };
        assert_eq!(Product::from_draft(&draft), Err(MissingField("productType")));
    }

    #[test]
    fn test_from_draft_requires_delivery_date() {
        let draft = NewProduct {
            product_type: Some("box".to_string()),
            delivery_date: Some(String::new()),
        };
        assert_eq!(Product::from_draft(&draft), Err(MissingField("deliveryDate")));
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let product = sample_product().with_id("other".to_string());
        assert_eq!(product.product_id, "other");
        assert_eq!(product.product_type, "box");
    }

    #[test]
    fn test_json_uses_attribute_names() {
        let json = serde_json::to_value(sample_product()).unwrap();
        assert_eq!(json["productId"], "550e8400-e29b-41d4-a716-446655440001");
        assert_eq!(json["productType"], "box");
        assert_eq!(json["deliveryDate"], "2020-10-08 13:00 - 15:00");

        let draft: NewProduct = serde_json::from_str(r#"{"productType":"box"}"#).unwrap();
        assert_eq!(draft.product_type.as_deref(), Some("box"));
        assert_eq!(draft.delivery_date, None);
    }
}
