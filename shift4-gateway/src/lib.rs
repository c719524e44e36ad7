//! Client library for the Shift4 payment gateway.
//!
//! The crate models the merchant-side half of a Shift4 integration: site
//! preferences with live/test key pairs, a transport that authenticates with
//! HTTP Basic and retries exactly once on a connection reset, redacted
//! logging of payloads and responses, and typed operations for customers,
//! cards, tokens, charges and alternative payment methods.
//!
//! ```no_run
//! use shift4_gateway::{Preferences, Shift4Client};
//! use shift4_gateway::api::operations::charges::ChargeRequest;
//!
//! # async fn demo() -> shift4_gateway::Result<()> {
//! let preferences = Preferences {
//!     test_secret_key: Some("sk_test_...".into()),
//!     test_public_key: Some("pk_test_...".into()),
//!     ..Preferences::default()
//! };
//! let client = Shift4Client::new(preferences);
//! let charge = ChargeRequest::new(19.99, "USD").with_token("tok_abc")?;
//! let created = client.charges().create(&charge).await?;
//! println!("charged: {}", created.id);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use api::client::{ClientConfig, Shift4Client};
pub use config::{KeyClass, Mode, PreferenceValue, Preferences};
pub use error::{GatewayErrorKind, Result, Shift4Error};
