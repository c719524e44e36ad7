//! Log redaction for card data and tokenized payment credentials
//!
//! Every payload or response that reaches a logging sink goes through
//! [`Redactor::redact`] first. The value returned to callers is never
//! redacted; this is strictly for log output.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Field names whose string values are masked in logs.
static DEFAULT_SECRET_FIELDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Card data
        "number",
        "cardNumber",
        "card_number",
        "cvc",
        // Full card token / stored credential references are treated as
        // sensitive the same way the raw PAN is
        "fullCardToken",
        // Tokenized wallet credentials (Apple Pay payment data)
        "data",
        "signature",
        "ephemeralPublicKey",
    ])
});

const MASK_CHAR: char = '*';

/// Recursive masker over JSON values.
#[derive(Debug, Clone)]
pub struct Redactor {
    secret_fields: HashSet<String>,
    mask_char: char,
}

impl Default for Redactor {
    fn default() -> Self {
        Self {
            secret_fields: DEFAULT_SECRET_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            mask_char: MASK_CHAR,
        }
    }
}

impl Redactor {
    /// A redactor with a caller-supplied secret-field set.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            secret_fields: fields.into_iter().map(Into::into).collect(),
            mask_char: MASK_CHAR,
        }
    }

    /// Deep copy of `value` with every string under a secret field name
    /// replaced by a same-length run of the mask character. Applies
    /// recursively through nested objects and arrays; non-secret fields and
    /// non-string values are untouched.
    pub fn redact(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut masked = Map::with_capacity(map.len());
                for (key, inner) in map {
                    let inner = match inner {
                        Value::String(s) if self.secret_fields.contains(key) => {
                            Value::String(self.mask(s))
                        }
                        _ => self.redact(inner),
                    };
                    masked.insert(key.clone(), inner);
                }
                Value::Object(masked)
            }
            Value::Array(items) => Value::Array(items.iter().map(|v| self.redact(v)).collect()),
            other => other.clone(),
        }
    }

    /// Redact and serialize in one step, for log lines.
    pub fn redact_to_string(&self, value: &Value) -> String {
        self.redact(value).to_string()
    }

    fn mask(&self, value: &str) -> String {
        self.mask_char.to_string().repeat(value.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_masks_nested_secret_fields() {
        let redactor = Redactor::default();
        let value = json!({
            "cardNumber": "4111111111111111",
            "nested": { "cvc": "123" }
        });
        let masked = redactor.redact(&value);
        assert_eq!(
            masked,
            json!({
                "cardNumber": "****************",
                "nested": { "cvc": "***" }
            })
        );
        // Input is untouched
        assert_eq!(value["cardNumber"], "4111111111111111");
    }

    #[test]
    fn test_masks_through_arrays() {
        let redactor = Redactor::default();
        let value = json!({
            "cards": [
                { "number": "4242424242424242", "expMonth": "12" },
                { "number": "378282246310005" }
            ]
        });
        let masked = redactor.redact(&value);
        assert_eq!(masked["cards"][0]["number"], "****************");
        assert_eq!(masked["cards"][0]["expMonth"], "12");
        assert_eq!(masked["cards"][1]["number"], "***************");
    }

    #[test]
    fn test_non_string_secret_values_untouched() {
        // Masking only replaces strings; a numeric value under a secret
        // name stays as-is
        let redactor = Redactor::default();
        let value = json!({ "cvc": 123 });
        assert_eq!(redactor.redact(&value), json!({ "cvc": 123 }));
    }

    #[test]
    fn test_wallet_credentials_masked() {
        let redactor = Redactor::default();
        let value = json!({
            "applePay": {
                "token": {
                    "data": "opaque-encrypted-blob",
                    "header": { "ephemeralPublicKey": "MFkw" }
                }
            }
        });
        let masked = redactor.redact(&value);
        assert_eq!(masked["applePay"]["token"]["data"], "*********************");
        assert_eq!(masked["applePay"]["token"]["header"]["ephemeralPublicKey"], "****");
    }

    #[test]
    fn test_custom_field_set() {
        let redactor = Redactor::with_fields(["apiKey"]);
        let value = json!({ "apiKey": "secret", "cvc": "123" });
        let masked = redactor.redact(&value);
        assert_eq!(masked["apiKey"], "******");
        assert_eq!(masked["cvc"], "123");
    }
}
