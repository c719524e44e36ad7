//! Charge creation
//!
//! <https://dev.shift4.com/docs/api#charges>

use crate::api::client::Shift4Client;
use crate::api::currency::to_minor_units;
use crate::api::models::Charge;
use crate::api::request::CalloutRequest;
use crate::error::{GatewayErrorKind, Result, Shift4Error};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Postal address on a charge or payment method.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Named contact with an address, for billing and shipping blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Payload for creating a charge. Amounts are integers in the currency's
/// minor unit; use [`ChargeRequest::new`] to convert a decimal amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    pub amount: i64,
    pub currency: String,
    /// `tok_` / `card_` reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// `pm_` reference for alternative payment methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl ChargeRequest {
    /// Start a charge for a decimal amount in the given currency. The amount
    /// converts to minor units exactly for 0/2/3-fraction-digit currencies.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        let currency = currency.into();
        Self {
            amount: to_minor_units(amount, &currency),
            currency,
            card: None,
            payment_method: None,
            customer_id: None,
            captured: None,
            description: None,
            charge_type: Some("customer_initiated".to_string()),
            billing: None,
            shipping: None,
            metadata: None,
        }
    }

    /// Attach a stored payment reference. `pm_` tokens charge a payment
    /// method, `tok_`/`card_` tokens charge a card; anything else means the
    /// card was never tokenized and is rejected before any callout.
    pub fn with_token(mut self, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.starts_with("pm_") {
            self.payment_method = Some(token);
        } else if token.starts_with("tok_") || token.starts_with("card_") {
            self.card = Some(token);
        } else {
            return Err(Shift4Error::Gateway {
                kind: GatewayErrorKind::Validation,
                message: "the card has not been tokenized; unable to create charge".to_string(),
                response_body: None,
                status: None,
            });
        }
        Ok(self)
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn captured(mut self, captured: bool) -> Self {
        self.captured = Some(captured);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn billing(mut self, billing: ContactInfo) -> Self {
        self.billing = Some(billing);
        self
    }

    pub fn shipping(mut self, shipping: ContactInfo) -> Self {
        self.shipping = Some(shipping);
        self
    }

    pub fn metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Charge operations.
#[derive(Debug, Clone, Copy)]
pub struct ChargesApi<'a> {
    client: &'a Shift4Client,
}

impl Shift4Client {
    pub fn charges(&self) -> ChargesApi<'_> {
        ChargesApi { client: self }
    }
}

impl ChargesApi<'_> {
    pub async fn create(&self, charge: &ChargeRequest) -> Result<Charge> {
        let request = CalloutRequest::post("/charges").json(serde_json::to_value(charge)?);
        let value = self.client.execute(&request).await?;
        Ok(serde_json::from_value(value)?)
    }
}
