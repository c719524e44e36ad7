//! High-level gateway operations
//!
//! Thin facades over [`Shift4Client`](crate::api::client::Shift4Client):
//! each resource gets an accessor (`client.customers()`, `client.charges()`,
//! ...) whose methods build the callout, run it through the transport, and
//! deserialize the answer into the typed models.

pub mod cards;
pub mod charges;
pub mod customers;
pub mod payment_methods;
pub mod tokens;
pub mod verify;

pub use cards::{BillingContact, CardErrorCategory, CardRequest, CardSource, FraudCheckData};
pub use charges::{Address, ChargeRequest, ChargesApi, ContactInfo};
pub use customers::{CustomerRequest, CustomersApi};
pub use payment_methods::{ApplePayData, PaymentMethodRequest, PaymentMethodsApi};
pub use tokens::TokensApi;
pub use verify::{ConnectionStatus, FieldError};
