//! Card payload shaping and field-level error classification

use crate::error::Shift4Error;
use serde::{Deserialize, Serialize};

/// Browser and connection details sent alongside card data for the
/// gateway's fraud screening.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FraudCheckData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_fingerprint: Option<String>,
}

/// Billing contact applied to a card payload from the order under payment.
#[derive(Debug, Clone, Default)]
pub struct BillingContact {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// Uppercased before it goes on the wire.
    pub country_code: Option<String>,
}

/// Raw card details for tokenization or storage on a customer profile.
///
/// The struct covers exactly the fields the gateway accepts; there is no
/// pass-through for arbitrary extra fields, so stray form data can never
/// reach the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardRequest {
    pub number: String,
    /// The gateway expects expiry parts as strings.
    pub exp_month: String,
    pub exp_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_check_data: Option<FraudCheckData>,
}

impl CardRequest {
    pub fn new(
        number: impl Into<String>,
        exp_month: impl ToString,
        exp_year: impl ToString,
        cvc: Option<String>,
    ) -> Self {
        Self {
            number: number.into(),
            exp_month: exp_month.to_string(),
            exp_year: exp_year.to_string(),
            cvc,
            cardholder_name: None,
            address_line1: None,
            address_line2: None,
            address_city: None,
            address_state: None,
            address_zip: None,
            address_country: None,
            fraud_check_data: None,
        }
    }

    /// Apply billing contact details. The cardholder name is only filled in
    /// when the card does not already carry one.
    pub fn with_billing(mut self, billing: &BillingContact) -> Self {
        if self.cardholder_name.is_none() {
            self.cardholder_name = billing.full_name.clone();
        }
        self.address_line1 = billing.address_line1.clone();
        self.address_line2 = billing.address_line2.clone();
        self.address_city = billing.city.clone();
        self.address_state = billing.state.clone();
        self.address_zip = billing.postal_code.clone();
        self.address_country = billing
            .country_code
            .as_deref()
            .map(|c| c.to_ascii_uppercase());
        if let Some(email) = &billing.email {
            self.fraud_check_data
                .get_or_insert_with(FraudCheckData::default)
                .email
                .get_or_insert_with(|| email.clone());
        }
        self
    }

    pub fn with_fraud_check_data(mut self, fraud_check_data: FraudCheckData) -> Self {
        self.fraud_check_data = Some(fraud_check_data);
        self
    }
}

/// Either raw card details or a previously created token/card reference.
/// Serializes to the shape the customer endpoints expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CardSource {
    /// A `tok_` / `card_` identifier.
    Token(String),
    Details(Box<CardRequest>),
}

impl CardSource {
    /// Payload for the add-card endpoint, which takes `{"id": "<token>"}`
    /// for token references and the full card object otherwise.
    pub(crate) fn to_add_card_payload(&self) -> serde_json::Value {
        match self {
            Self::Token(token) => serde_json::json!({ "id": token }),
            // CardRequest serialization cannot fail
            Self::Details(card) => serde_json::to_value(card).unwrap_or_default(),
        }
    }
}

impl From<CardRequest> for CardSource {
    fn from(card: CardRequest) -> Self {
        Self::Details(Box::new(card))
    }
}

impl From<&str> for CardSource {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

/// Field-level classification of gateway card errors, used by callers to
/// highlight the offending checkout form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardErrorCategory {
    InvalidSecurityCode,
    InvalidExpiration,
    /// Invalid card number, and the catch-all for unmapped codes.
    InvalidCardNumber,
}

impl CardErrorCategory {
    /// Map a gateway `error.code` onto a form-field category.
    pub fn from_code(code: &str) -> Self {
        match code {
            "invalid_cvc" => Self::InvalidSecurityCode,
            "invalid_expiry_month" | "invalid_expiry_year" | "expired_card" => {
                Self::InvalidExpiration
            }
            _ => Self::InvalidCardNumber,
        }
    }

    /// Classify an error from a charge/token/card operation. `None` when the
    /// error body carries no structured code; callers fall back to a generic
    /// message in that case.
    pub fn classify(error: &Shift4Error) -> Option<Self> {
        error.gateway_error_code().map(|code| Self::from_code(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_request_serialization_shape() {
        let card = CardRequest::new("4111111111111111", 12, 2030, Some("123".into()));
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(
            value,
            json!({
                "number": "4111111111111111",
                "expMonth": "12",
                "expYear": "2030",
                "cvc": "123"
            })
        );
    }

    #[test]
    fn test_with_billing_applies_address_and_email() {
        let billing = BillingContact {
            full_name: Some("Ada Lovelace".into()),
            email: Some("ada@example.com".into()),
            address_line1: Some("1 Analytical Way".into()),
            address_line2: None,
            city: Some("London".into()),
            state: None,
            postal_code: Some("EC1".into()),
            country_code: Some("gb".into()),
        };
        let card = CardRequest::new("4111111111111111", 12, 2030, None).with_billing(&billing);
        assert_eq!(card.cardholder_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(card.address_country.as_deref(), Some("GB"));
        assert_eq!(
            card.fraud_check_data.unwrap().email.as_deref(),
            Some("ada@example.com")
        );
    }

    #[test]
    fn test_with_billing_keeps_existing_cardholder() {
        let billing = BillingContact {
            full_name: Some("Someone Else".into()),
            ..BillingContact::default()
        };
        let mut card = CardRequest::new("4111111111111111", 12, 2030, None);
        card.cardholder_name = Some("Ada Lovelace".into());
        let card = card.with_billing(&billing);
        assert_eq!(card.cardholder_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_card_source_payloads() {
        let source = CardSource::from("tok_abc");
        assert_eq!(source.to_add_card_payload(), json!({"id": "tok_abc"}));

        let source: CardSource = CardRequest::new("4111111111111111", 1, 2031, None).into();
        assert_eq!(
            source.to_add_card_payload()["number"],
            "4111111111111111"
        );
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            CardErrorCategory::from_code("invalid_cvc"),
            CardErrorCategory::InvalidSecurityCode
        );
        assert_eq!(
            CardErrorCategory::from_code("expired_card"),
            CardErrorCategory::InvalidExpiration
        );
        assert_eq!(
            CardErrorCategory::from_code("invalid_expiry_month"),
            CardErrorCategory::InvalidExpiration
        );
        assert_eq!(
            CardErrorCategory::from_code("invalid_card"),
            CardErrorCategory::InvalidCardNumber
        );
        // Unmapped codes collapse to the generic card category
        assert_eq!(
            CardErrorCategory::from_code("something_new"),
            CardErrorCategory::InvalidCardNumber
        );
    }

    #[test]
    fn test_classify_requires_structured_code() {
        let err = Shift4Error::from_error_body(
            402,
            r#"{"error":{"code":"invalid_cvc","message":"Invalid CVC"}}"#,
        );
        assert_eq!(
            CardErrorCategory::classify(&err),
            Some(CardErrorCategory::InvalidSecurityCode)
        );

        let err = Shift4Error::from_error_body(500, "Internal Server Error");
        assert_eq!(CardErrorCategory::classify(&err), None);
    }
}
