//! Typed Shift4 API resources
//!
//! Thin serde views over the gateway's JSON responses. Unknown fields are
//! ignored on deserialization; anything callers need beyond these fields can
//! be read from the raw `serde_json::Value` via [`crate::Shift4Client::execute`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored card on a customer profile, or the card view on a charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub first6: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(default)]
    pub exp_month: Option<String>,
    #[serde(default)]
    pub exp_year: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub cardholder_name: Option<String>,
}

/// A gateway customer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_card_id: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// A page of customers from the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerList {
    #[serde(default)]
    pub list: Vec<Customer>,
    #[serde(default)]
    pub has_more: bool,
}

/// A single-use tokenized card reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    #[serde(default)]
    pub first6: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub used: bool,
}

/// An alternative payment method resource (wallet payments).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    #[serde(rename = "type", default)]
    pub method_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
}

/// A monetary charge. `captured` is passed through exactly as the gateway
/// returned it; an absent flag deserializes to `false`, which callers treat
/// as an authorization-only charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub id: String,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub captured: bool,
    #[serde(default)]
    pub refunded: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_charge_captured_passthrough() {
        let charge: Charge =
            serde_json::from_value(json!({"id": "char_1", "captured": true})).unwrap();
        assert!(charge.captured);

        // Absent flag means authorization-only
        let charge: Charge = serde_json::from_value(json!({"id": "char_1"})).unwrap();
        assert!(!charge.captured);
    }

    #[test]
    fn test_customer_with_cards() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cust_1",
            "email": "a@b.c",
            "cards": [{"id": "card_1", "last4": "1111", "expMonth": "12"}]
        }))
        .unwrap();
        assert_eq!(customer.cards.len(), 1);
        assert_eq!(customer.cards[0].exp_month.as_deref(), Some("12"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let token: Token = serde_json::from_value(json!({
            "id": "tok_1",
            "objectType": "token",
            "fingerprint": "xyz"
        }))
        .unwrap();
        assert_eq!(token.id, "tok_1");
        assert!(!token.used);
    }
}
