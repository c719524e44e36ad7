//! Alternative payment methods (wallet payments)
//!
//! APMs are created as payment-method resources and then charged by their
//! `pm_` identifier like any stored card token.

use crate::api::client::Shift4Client;
use crate::api::constants::APPLE_PAY_VERIFICATION_ENDPOINT;
use crate::api::models::PaymentMethod;
use crate::api::operations::cards::FraudCheckData;
use crate::api::operations::charges::ContactInfo;
use crate::api::request::CalloutRequest;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Apple Pay payment data as handed over by the wallet: the encrypted token
/// blob plus its envelope. Passed to the gateway verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayData {
    pub token: Value,
}

/// Payload for creating a payment-method resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRequest {
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_pay: Option<ApplePayData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<ContactInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_check_data: Option<FraudCheckData>,
}

impl PaymentMethodRequest {
    /// An Apple Pay payment method from the wallet's payment token.
    pub fn apple_pay(token: Value) -> Self {
        Self {
            method_type: "apple_pay".to_string(),
            apple_pay: Some(ApplePayData { token }),
            customer_id: None,
            billing: None,
            fraud_check_data: None,
        }
    }

    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn billing(mut self, billing: ContactInfo) -> Self {
        self.billing = Some(billing);
        self
    }

    pub fn fraud_check_data(mut self, fraud_check_data: FraudCheckData) -> Self {
        self.fraud_check_data = Some(fraud_check_data);
        self
    }
}

/// Payment-method operations.
#[derive(Debug, Clone, Copy)]
pub struct PaymentMethodsApi<'a> {
    client: &'a Shift4Client,
}

impl Shift4Client {
    pub fn payment_methods(&self) -> PaymentMethodsApi<'_> {
        PaymentMethodsApi { client: self }
    }
}

impl PaymentMethodsApi<'_> {
    pub async fn create(&self, info: &PaymentMethodRequest) -> Result<PaymentMethod> {
        let request = CalloutRequest::post("/payment-methods").json(serde_json::to_value(info)?);
        let value = self.client.execute(&request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// The Apple Pay merchant domain-association file content.
    ///
    /// Returns the configured preference when the merchant stored one,
    /// otherwise fetches the well-known file from the Shift4 developer
    /// domain; any non-200 answer yields an empty string.
    pub async fn apple_pay_verification_string(&self) -> String {
        if let Some(configured) = &self.client.preferences.apple_pay_verification_string {
            return configured.clone();
        }
        let url = format!(
            "{}{}",
            self.client.config.dev_domain, APPLE_PAY_VERIFICATION_ENDPOINT
        );
        let response = match self
            .client
            .http
            .get(&url)
            .timeout(self.client.config.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(_) => return String::new(),
        };
        if response.status() != reqwest::StatusCode::OK {
            return String::new();
        }
        response.text().await.unwrap_or_default()
    }
}
