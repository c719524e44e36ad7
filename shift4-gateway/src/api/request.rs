//! Callout request and result types
//!
//! A [`CalloutRequest`] describes one logical HTTP exchange with the gateway:
//! method, endpoint path, query, body, and credential selection. Requests are
//! constructed fresh per operation and discarded after the call returns.

use serde_json::Value;

/// HTTP methods the gateway API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A query parameter value. Lists flatten to repeated bracket-suffixed
/// parameters (`name[]=a&name[]=b`), matching the gateway's convention.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Request body. All gateway payloads are `application/json`; a raw string
/// is sent through unchanged, everything else is serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Raw(String),
}

impl Payload {
    /// The bytes that go on the wire.
    pub fn to_body(&self) -> String {
        match self {
            // Value serialization cannot fail
            Self::Json(value) => value.to_string(),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

/// One logical callout against the Shift4 API.
#[derive(Debug, Clone)]
pub struct CalloutRequest {
    pub method: HttpMethod,
    /// Path after the configured base URL, e.g. `/customers`.
    pub endpoint: String,
    pub query: Vec<(String, QueryValue)>,
    pub payload: Option<Payload>,
    /// Overrides the configured environment for this call.
    pub live_mode: Option<bool>,
    /// Authenticate with the public key instead of the secret key.
    pub is_public: bool,
    /// Set exactly once by the transport before the single reset retry.
    /// Never set by callers.
    pub(crate) is_retry: bool,
}

impl CalloutRequest {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            payload: None,
            live_mode: None,
            is_public: false,
            is_retry: false,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    /// Add a query parameter. Empty values are kept (`email=`), not dropped.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, payload: Value) -> Self {
        self.payload = Some(Payload::Json(payload));
        self
    }

    pub fn raw_body(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(Payload::Raw(payload.into()));
        self
    }

    pub fn live_mode(mut self, live: bool) -> Self {
        self.live_mode = Some(live);
        self
    }

    pub fn public_key(mut self, public: bool) -> Self {
        self.is_public = public;
        self
    }

    /// Flatten the query into wire pairs, expanding list values into
    /// repeated `name[]` parameters.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (name, value) in &self.query {
            match value {
                QueryValue::Scalar(scalar) => pairs.push((name.clone(), scalar.clone())),
                QueryValue::List(items) => {
                    for item in items {
                        pairs.push((format!("{name}[]"), item.clone()));
                    }
                }
            }
        }
        pairs
    }

    /// Copy of this request marked as the single retry attempt.
    pub(crate) fn retry(&self) -> Self {
        let mut copy = self.clone();
        copy.is_retry = true;
        copy
    }
}

/// Raw result of one HTTP exchange, before error normalization.
///
/// Exactly one of `object` / `error_message` is meaningful, gated by `ok`.
#[derive(Debug, Clone)]
pub struct CalloutResult {
    pub ok: bool,
    pub status: u16,
    /// Parsed JSON body on success.
    pub object: Option<Value>,
    /// Raw error body on failure.
    pub error_message: Option<String>,
}
