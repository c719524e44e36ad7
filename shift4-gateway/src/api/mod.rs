//! Shift4 REST API client
//!
//! Layered the way a callout flows: a [`request::CalloutRequest`] describes
//! the exchange, [`client::Shift4Client`] resolves credentials and performs
//! it (with a single retry on connection reset), and the modules under
//! [`operations`] expose the typed resource facades built on top.

pub mod client;
pub mod constants;
pub mod currency;
pub mod models;
pub mod operations;
pub mod redact;
pub mod request;

pub use client::{ClientConfig, Shift4Client};
pub use models::{Card, Charge, Customer, CustomerList, PaymentMethod, Token};
pub use redact::Redactor;
pub use request::{CalloutRequest, CalloutResult, HttpMethod, Payload, QueryValue};
