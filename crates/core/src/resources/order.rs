use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::storage::{
    require_present, require_text, required_identifier, required_number, required_string,
    AttributeCodec, AttributeMap, AttributeValue, MalformedAttribute, MissingField, Resource,
};

pub const ORDER_ID: &str = "orderId";
pub const CUSTOMER_ID: &str = "customerId";
pub const PRE_TAX_AMOUNT: &str = "preTaxAmount";
pub const POST_TAX_AMOUNT: &str = "postTaxAmount";

/// A customer order.
///
/// Amounts are exact decimals. They travel as JSON numbers and are stored as
/// `N` attributes in their decimal text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub pre_tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub post_tax_amount: Decimal,
}

/// Request payload for creating an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub pre_tax_amount: Option<Decimal>,
    #[serde(default)]
    pub post_tax_amount: Option<Decimal>,
}

impl NewOrder {
    pub fn new(
        customer_id: impl Into<String>,
        pre_tax_amount: Decimal,
        post_tax_amount: Decimal,
    ) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            pre_tax_amount: Some(pre_tax_amount),
            post_tax_amount: Some(post_tax_amount),
        }
    }
}

impl AttributeCodec for Order {
    fn encode(&self) -> AttributeMap {
        let mut item = AttributeMap::new();
        item.insert(ORDER_ID.to_string(), AttributeValue::S(self.order_id.clone()));
        item.insert(
            CUSTOMER_ID.to_string(),
            AttributeValue::S(self.customer_id.clone()),
        );
        item.insert(PRE_TAX_AMOUNT.to_string(), self.pre_tax_amount.into());
        item.insert(POST_TAX_AMOUNT.to_string(), self.post_tax_amount.into());
        item
    }

    fn decode(item: &AttributeMap) -> Result<Self, MalformedAttribute> {
        Ok(Order {
            order_id: required_identifier(item, ORDER_ID)?,
            customer_id: required_string(item, CUSTOMER_ID)?,
            pre_tax_amount: required_number(item, PRE_TAX_AMOUNT)?,
            post_tax_amount: required_number(item, POST_TAX_AMOUNT)?,
        })
    }
}

impl Resource for Order {
    type Draft = NewOrder;

    const ENTITY_TYPE: &'static str = "order";
    const ID_FIELD: &'static str = ORDER_ID;

    fn from_draft(draft: &NewOrder) -> Result<Self, MissingField> {
        Ok(Order {
            order_id: String::new(),
            customer_id: require_text(CUSTOMER_ID, &draft.customer_id)?,
            pre_tax_amount: require_present(PRE_TAX_AMOUNT, draft.pre_tax_amount)?,
            post_tax_amount: require_present(POST_TAX_AMOUNT, draft.post_tax_amount)?,
        })
    }

    fn with_id(self, id: String) -> Self {
        Order {
            order_id: id,
            ..self
        }
    }
}
