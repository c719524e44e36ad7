//! Site preference storage for the Shift4 integration
//!
//! An explicit, allow-listed preference struct. The host platform owns
//! persistence; this module only models the fields the gateway client reads
//! and validates every access against the fixed field set.

use crate::error::{Result, Shift4Error};
use serde_json::{Map, Value};
use std::fmt;

/// Preference namespace shared with the host configuration store.
pub const NAMESPACE: &str = "shift4payments__";

pub const FIELD_ENVIRONMENT: &str = "shift4payments__environment";
pub const FIELD_LIVE_PUBLIC_KEY: &str = "shift4payments__livePublicKey";
pub const FIELD_LIVE_SECRET_KEY: &str = "shift4payments__liveSecretKey";
pub const FIELD_TEST_PUBLIC_KEY: &str = "shift4payments__testPublicKey";
pub const FIELD_TEST_SECRET_KEY: &str = "shift4payments__testSecretKey";
pub const FIELD_CAPTURE_IMMEDIATELY: &str = "shift4payments__captureImmediately";
pub const FIELD_APPLE_PAY_VERIFICATION_STRING: &str = "shift4payments__applePayVerificationString";

/// All recognized preference fields. `get`/`put` reject anything else.
pub const FIELDS: &[&str] = &[
    FIELD_ENVIRONMENT,
    FIELD_LIVE_PUBLIC_KEY,
    FIELD_LIVE_SECRET_KEY,
    FIELD_TEST_PUBLIC_KEY,
    FIELD_TEST_SECRET_KEY,
    FIELD_CAPTURE_IMMEDIATELY,
    FIELD_APPLE_PAY_VERIFICATION_STRING,
];

/// Fields masked in [`Preferences::snapshot`].
const SECRET_FIELDS: &[&str] = &[FIELD_LIVE_SECRET_KEY, FIELD_TEST_SECRET_KEY];

const BLUR_CHAR: char = '*';

/// Gateway environment. Live and test mode are fully isolated credential and
/// data sets on the Shift4 side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Live,
    #[default]
    Test,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Live => write!(f, "live"),
            Mode::Test => write!(f, "test"),
        }
    }
}

/// Which half of the credential pair to authenticate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Public,
    Secret,
}

impl fmt::Display for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyClass::Public => write!(f, "public"),
            KeyClass::Secret => write!(f, "secret"),
        }
    }
}

/// A single preference value. The store only holds strings and booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceValue {
    String(String),
    Bool(bool),
}

impl From<&str> for PreferenceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PreferenceValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Shift4 site preferences, read from the host configuration store.
///
/// Keys are `None` when the merchant has not configured them, which is
/// distinct from a configured-but-empty key: an empty key is passed through
/// to the gateway (which rejects it as unauthenticated), while an
/// unconfigured key fails locally with a configuration error.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    pub environment: Mode,
    pub live_public_key: Option<String>,
    pub live_secret_key: Option<String>,
    pub test_public_key: Option<String>,
    pub test_secret_key: Option<String>,
    pub capture_immediately: bool,
    pub apple_pay_verification_string: Option<String>,
}

impl Preferences {
    /// Read a preference by its namespaced field name.
    pub fn get(&self, field: &str) -> Result<Option<PreferenceValue>> {
        match field {
            FIELD_ENVIRONMENT => Ok(Some(PreferenceValue::String(
                match self.environment {
                    Mode::Live => "Live",
                    Mode::Test => "Test",
                }
                .to_string(),
            ))),
            FIELD_LIVE_PUBLIC_KEY => Ok(self.live_public_key.clone().map(PreferenceValue::String)),
            FIELD_LIVE_SECRET_KEY => Ok(self.live_secret_key.clone().map(PreferenceValue::String)),
            FIELD_TEST_PUBLIC_KEY => Ok(self.test_public_key.clone().map(PreferenceValue::String)),
            FIELD_TEST_SECRET_KEY => Ok(self.test_secret_key.clone().map(PreferenceValue::String)),
            FIELD_CAPTURE_IMMEDIATELY => Ok(Some(PreferenceValue::Bool(self.capture_immediately))),
            FIELD_APPLE_PAY_VERIFICATION_STRING => Ok(self
                .apple_pay_verification_string
                .clone()
                .map(PreferenceValue::String)),
            other => Err(Shift4Error::Configuration(format!(
                "unknown site preference field: {other}"
            ))),
        }
    }

    /// Write a preference by its namespaced field name.
    pub fn put(&mut self, field: &str, value: PreferenceValue) -> Result<()> {
        match (field, value) {
            (FIELD_ENVIRONMENT, PreferenceValue::String(s)) => {
                self.environment = match s.as_str() {
                    "Live" => Mode::Live,
                    "Test" => Mode::Test,
                    other => {
                        return Err(Shift4Error::Configuration(format!(
                            "invalid environment value: {other}"
                        )));
                    }
                };
                Ok(())
            }
            (FIELD_LIVE_PUBLIC_KEY, PreferenceValue::String(s)) => {
                self.live_public_key = Some(s);
                Ok(())
            }
            (FIELD_LIVE_SECRET_KEY, PreferenceValue::String(s)) => {
                self.live_secret_key = Some(s);
                Ok(())
            }
            (FIELD_TEST_PUBLIC_KEY, PreferenceValue::String(s)) => {
                self.test_public_key = Some(s);
                Ok(())
            }
            (FIELD_TEST_SECRET_KEY, PreferenceValue::String(s)) => {
                self.test_secret_key = Some(s);
                Ok(())
            }
            (FIELD_CAPTURE_IMMEDIATELY, PreferenceValue::Bool(b)) => {
                self.capture_immediately = b;
                Ok(())
            }
            (FIELD_APPLE_PAY_VERIFICATION_STRING, PreferenceValue::String(s)) => {
                self.apple_pay_verification_string = Some(s);
                Ok(())
            }
            (field, value) if FIELDS.contains(&field) => Err(Shift4Error::Configuration(format!(
                "wrong value type for {field}: {value:?}"
            ))),
            (other, _) => Err(Shift4Error::Configuration(format!(
                "unknown site preference field: {other}"
            ))),
        }
    }

    /// Whether the configured default environment is live mode.
    pub fn is_live_mode(&self) -> bool {
        self.environment == Mode::Live
    }

    /// Resolve an API key for the given mode and key class.
    ///
    /// `mode: None` falls back to the configured environment. Returns an
    /// empty string as-is; fails only when the field was never configured.
    pub fn resolve_key(&self, mode: Option<Mode>, key_class: KeyClass) -> Result<&str> {
        let mode = mode.unwrap_or(self.environment);
        let key = match (mode, key_class) {
            (Mode::Live, KeyClass::Public) => &self.live_public_key,
            (Mode::Live, KeyClass::Secret) => &self.live_secret_key,
            (Mode::Test, KeyClass::Public) => &self.test_public_key,
            (Mode::Test, KeyClass::Secret) => &self.test_secret_key,
        };
        key.as_deref().ok_or_else(|| {
            Shift4Error::Configuration(format!("no {key_class} key configured for {mode} mode"))
        })
    }

    /// Whether both keys for a mode are configured and non-empty.
    pub fn has_keys(&self, mode: Mode) -> bool {
        let (public, secret) = match mode {
            Mode::Live => (&self.live_public_key, &self.live_secret_key),
            Mode::Test => (&self.test_public_key, &self.test_secret_key),
        };
        public.as_deref().is_some_and(|k| !k.is_empty())
            && secret.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// A JSON snapshot of all preference fields with secret keys masked.
    ///
    /// A recognizable key prefix (`sk_live_`, `sk_test_`, ...) is kept in
    /// the clear so the merchant can tell which key is stored.
    pub fn snapshot(&self) -> Value {
        let mut snapshot = Map::new();
        for field in FIELDS {
            // get() cannot fail for allow-listed fields
            let value = match self.get(field).ok().flatten() {
                Some(PreferenceValue::String(s)) if SECRET_FIELDS.contains(field) => {
                    Value::String(mask_key(&s))
                }
                Some(PreferenceValue::String(s)) => Value::String(s),
                Some(PreferenceValue::Bool(b)) => Value::Bool(b),
                None => Value::Null,
            };
            snapshot.insert(field.to_string(), value);
        }
        Value::Object(snapshot)
    }
}

/// Mask a key, keeping an `sk_live_` / `sk_test_` / `pk_...` prefix visible.
fn mask_key(key: &str) -> String {
    let prefix_len = ["sk_live_", "sk_test_", "pk_live_", "pk_test_"]
        .iter()
        .find(|p| key.starts_with(**p))
        .map_or(0, |p| p.len());
    let (prefix, rest) = key.split_at(prefix_len);
    format!("{prefix}{}", BLUR_CHAR.to_string().repeat(rest.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_prefs() -> Preferences {
        Preferences {
            environment: Mode::Test,
            live_public_key: Some("pk_live_1234567890".into()),
            live_secret_key: Some("sk_live_1234567890".into()),
            test_public_key: Some("pk_test_1234567890".into()),
            test_secret_key: Some("sk_test_1234567890".into()),
            capture_immediately: true,
            apple_pay_verification_string: None,
        }
    }

    #[test]
    fn test_resolve_key_matrix() {
        let prefs = test_prefs();
        assert_eq!(
            prefs.resolve_key(Some(Mode::Live), KeyClass::Secret).unwrap(),
            "sk_live_1234567890"
        );
        assert_eq!(
            prefs.resolve_key(Some(Mode::Test), KeyClass::Public).unwrap(),
            "pk_test_1234567890"
        );
        // Falls back to configured environment (Test)
        assert_eq!(
            prefs.resolve_key(None, KeyClass::Secret).unwrap(),
            "sk_test_1234567890"
        );
    }

    #[test]
    fn test_resolve_key_unconfigured() {
        let prefs = Preferences::default();
        let err = prefs.resolve_key(None, KeyClass::Secret).unwrap_err();
        assert!(matches!(err, Shift4Error::Configuration(_)));
    }

    #[test]
    fn test_empty_key_passes_through() {
        let mut prefs = test_prefs();
        prefs.test_secret_key = Some(String::new());
        assert_eq!(prefs.resolve_key(None, KeyClass::Secret).unwrap(), "");
    }

    #[test]
    fn test_get_put_allow_list() {
        let mut prefs = test_prefs();
        assert!(prefs.put("shift4payments__bogus", "x".into()).is_err());
        assert!(prefs.get("shift4payments__bogus").is_err());

        prefs
            .put(FIELD_ENVIRONMENT, "Live".into())
            .unwrap();
        assert!(prefs.is_live_mode());

        // Type mismatch on a known field is rejected
        assert!(prefs.put(FIELD_CAPTURE_IMMEDIATELY, "yes".into()).is_err());
        prefs.put(FIELD_CAPTURE_IMMEDIATELY, false.into()).unwrap();
        assert_eq!(
            prefs.get(FIELD_CAPTURE_IMMEDIATELY).unwrap(),
            Some(PreferenceValue::Bool(false))
        );
    }

    #[test]
    fn test_snapshot_masks_secret_keys() {
        let snapshot = test_prefs().snapshot();
        assert_eq!(
            snapshot[FIELD_TEST_SECRET_KEY].as_str().unwrap(),
            "sk_test_**********"
        );
        assert_eq!(
            snapshot[FIELD_LIVE_SECRET_KEY].as_str().unwrap(),
            "sk_live_**********"
        );
        // Public keys stay readable
        assert_eq!(
            snapshot[FIELD_TEST_PUBLIC_KEY].as_str().unwrap(),
            "pk_test_1234567890"
        );
        assert!(snapshot[FIELD_APPLE_PAY_VERIFICATION_STRING].is_null());
    }

    #[test]
    fn test_mask_key_without_known_prefix() {
        assert_eq!(mask_key("hunter2"), "*******");
    }
}
