//! Synchronous client for the Lipisha mobile-money payment gateway.
//!
//! # Overview
//! Wraps the gateway's form-encoded REST API (balance, money movement,
//! airtime, SMS, card transactions, settlement, reconciliation, users) as
//! typed method calls. Every call is a one-shot POST: parameters become form
//! fields, the configured `api_key`/`api_signature` are injected, and the raw
//! JSON response body comes back as a `String` for the caller to interpret.
//!
//! # Design
//! - [`Lipisha`] is constructed once from a [`Config`] and is safe to share
//!   across threads; its agent reuses connections.
//! - The environment flag picks sandbox vs production; nothing else differs
//!   between the two.
//! - HTTP status codes are not interpreted: any readable body is `Ok`.
//!   Business errors live inside the JSON body, and the asynchronous IPN
//!   webhook the gateway fires on completion is configured on the provider's
//!   dashboard, outside this crate.
//! - With [`Config::debug`] set, each call logs the resolved URL, the encoded
//!   body and the raw response under log target `lipisha`.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod types;

pub use client::{Config, Lipisha, PRODUCTION_URL, SANDBOX_URL, REQUEST_TIMEOUT};
pub use error::Error;
pub use form::Form;
pub use types::{Card, CustomerFilter, TransactionFilter, User, UserFilter};
