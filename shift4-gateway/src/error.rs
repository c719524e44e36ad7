//! Error types for Shift4 gateway callouts

use thiserror::Error;

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, Shift4Error>;

/// Category of a gateway-side failure, derived from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// 401 / 403 - the key was rejected
    Auth,
    /// 400 / 422 - the gateway rejected the request payload
    Validation,
    /// 404 - the resource does not exist
    NotFound,
    /// Connection-level failure that survived the single retry
    Transient,
    /// Anything else (5xx, unexpected transport failures)
    Unknown,
}

impl GatewayErrorKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Auth,
            400 | 422 => Self::Validation,
            404 => Self::NotFound,
            _ => Self::Unknown,
        }
    }
}

/// Errors that can occur while calling the Shift4 API.
///
/// Transport-level errors propagate unchanged through the operations facade;
/// only charge/token/card operations add field-level classification on top
/// (see [`crate::api::operations::cards::CardErrorCategory`]).
#[derive(Debug, Error)]
pub enum Shift4Error {
    /// A preference field is unknown or a required credential is unset.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The gateway returned a body that is not valid JSON.
    #[error("failed to parse gateway response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The gateway rejected the request, or the connection failed in a way
    /// that could not be recovered by the single reset retry.
    #[error("{message}")]
    Gateway {
        kind: GatewayErrorKind,
        message: String,
        /// Raw error body, kept verbatim so callers can extract structured
        /// error codes (`error.code`) for field-level messages.
        response_body: Option<String>,
        status: Option<u16>,
    },

    /// A key verification probe was rejected with 401/403.
    #[error("invalid {key_class} key for {mode} mode")]
    InvalidKey { mode: String, key_class: String },

    /// The per-call network timeout elapsed. Never retried.
    #[error("gateway request timed out")]
    Timeout,
}

impl Shift4Error {
    /// Build a gateway error from an HTTP status and raw error body.
    ///
    /// Prefers `error.message` from a JSON body; otherwise appends the raw
    /// body to a generic prefix. The raw body is always attached.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let mut message = String::from("Shift4 API callout failed");
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(parsed) => {
                if let Some(msg) = parsed
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                {
                    message = msg.to_string();
                } else if !body.is_empty() {
                    message.push_str(": ");
                    message.push_str(body);
                }
            }
            Err(_) => {
                if !body.is_empty() {
                    message.push_str(": ");
                    message.push_str(body);
                }
            }
        }
        Self::Gateway {
            kind: GatewayErrorKind::from_status(status),
            message,
            response_body: Some(body.to_string()),
            status: Some(status),
        }
    }

    /// The raw error body, if this is a gateway error that carried one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Gateway { response_body, .. } => response_body.as_deref(),
            _ => None,
        }
    }

    /// The structured `error.code` from the gateway error body, if present.
    pub fn gateway_error_code(&self) -> Option<String> {
        let body = self.response_body()?;
        let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
        parsed
            .get("error")?
            .get("code")?
            .as_str()
            .map(str::to_string)
    }

    /// Whether this error is an authentication rejection (401/403).
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Gateway {
                kind: GatewayErrorKind::Auth,
                ..
            } | Self::InvalidKey { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_body() {
        let err = Shift4Error::from_error_body(402, r#"{"error":{"message":"The card was declined"}}"#);
        assert_eq!(err.to_string(), "The card was declined");
        assert!(err.response_body().unwrap().contains("declined"));
    }

    #[test]
    fn test_error_message_from_non_json_body() {
        let err = Shift4Error::from_error_body(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Shift4 API callout failed: Bad Gateway");
        assert_eq!(err.response_body(), Some("Bad Gateway"));
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(GatewayErrorKind::from_status(401), GatewayErrorKind::Auth);
        assert_eq!(GatewayErrorKind::from_status(403), GatewayErrorKind::Auth);
        assert_eq!(GatewayErrorKind::from_status(422), GatewayErrorKind::Validation);
        assert_eq!(GatewayErrorKind::from_status(404), GatewayErrorKind::NotFound);
        assert_eq!(GatewayErrorKind::from_status(500), GatewayErrorKind::Unknown);
    }

    #[test]
    fn test_gateway_error_code_extraction() {
        let err = Shift4Error::from_error_body(
            402,
            r#"{"error":{"code":"invalid_cvc","message":"Invalid CVC"}}"#,
        );
        assert_eq!(err.gateway_error_code().as_deref(), Some("invalid_cvc"));

        let err = Shift4Error::from_error_body(500, "not json");
        assert_eq!(err.gateway_error_code(), None);
    }
}
