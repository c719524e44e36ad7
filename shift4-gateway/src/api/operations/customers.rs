//! Customer CRUD and card management
//!
//! <https://dev.shift4.com/docs/api#customers>

use crate::api::client::Shift4Client;
use crate::api::models::{Card, Customer, CustomerList};
use crate::api::operations::cards::CardSource;
use crate::api::request::CalloutRequest;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload for creating or updating a customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw card details or a token reference to store as the first card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl CustomerRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn card(mut self, card: impl Into<CardSource>) -> Self {
        self.card = Some(card.into());
        self
    }

    pub fn metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Customer operations.
#[derive(Debug, Clone, Copy)]
pub struct CustomersApi<'a> {
    client: &'a Shift4Client,
}

impl Shift4Client {
    pub fn customers(&self) -> CustomersApi<'_> {
        CustomersApi { client: self }
    }
}

impl CustomersApi<'_> {
    /// Create a new customer, returning the created record including its
    /// opaque `cust_` identifier.
    pub async fn create(&self, info: &CustomerRequest) -> Result<Customer> {
        let request = CalloutRequest::post("/customers").json(serde_json::to_value(info)?);
        let value = self.client.execute(&request).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get(&self, customer_id: &str) -> Result<Customer> {
        let request = CalloutRequest::get(format!("/customers/{customer_id}"));
        let value = self.client.execute(&request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Update an existing customer. The gateway updates via POST to the
    /// customer resource.
    pub async fn update(&self, customer_id: &str, info: &CustomerRequest) -> Result<Customer> {
        let request =
            CalloutRequest::post(format!("/customers/{customer_id}")).json(serde_json::to_value(info)?);
        let value = self.client.execute(&request).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete(&self, customer_id: &str) -> Result<()> {
        let request = CalloutRequest::delete(format!("/customers/{customer_id}"));
        self.client.execute(&request).await?;
        Ok(())
    }

    /// List customers, optionally filtered by email. An empty email filter
    /// is sent as `email=`, not dropped.
    pub async fn list(&self, email: Option<&str>, limit: Option<u32>) -> Result<CustomerList> {
        let mut request = CalloutRequest::get("/customers");
        if let Some(email) = email {
            request = request.query("email", email);
        }
        if let Some(limit) = limit {
            request = request.query("limit", limit);
        }
        let value = self.client.execute(&request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Add a card (raw details or token reference) to a customer profile.
    pub async fn add_card(&self, customer_id: &str, card: &CardSource) -> Result<Card> {
        let request = CalloutRequest::post(format!("/customers/{customer_id}/cards"))
            .json(card.to_add_card_payload());
        let value = self.client.execute(&request).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn remove_card(&self, customer_id: &str, card_id: &str) -> Result<()> {
        let request = CalloutRequest::delete(format!("/customers/{customer_id}/cards/{card_id}"));
        self.client.execute(&request).await?;
        Ok(())
    }
}
