//! Card tokenization
//!
//! <https://dev.shift4.com/docs/api#tokens>

use crate::api::client::Shift4Client;
use crate::api::models::Token;
use crate::api::operations::cards::CardRequest;
use crate::api::request::CalloutRequest;
use crate::error::Result;

/// Token operations.
#[derive(Debug, Clone, Copy)]
pub struct TokensApi<'a> {
    client: &'a Shift4Client,
}

impl Shift4Client {
    pub fn tokens(&self) -> TokensApi<'_> {
        TokensApi { client: self }
    }
}

impl TokensApi<'_> {
    /// Exchange raw card details for a single-use token. Card data is sent
    /// straight to the gateway and never persisted locally.
    pub async fn create(&self, card: &CardRequest) -> Result<Token> {
        let request = CalloutRequest::post("/tokens").json(serde_json::to_value(card)?);
        let value = self.client.execute(&request).await?;
        Ok(serde_json::from_value(value)?)
    }
}
