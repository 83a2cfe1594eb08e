//! Typed HTTP client for the Aula backend API.
//!
//! The backend is external; this crate only encodes its request/response
//! contracts. Every endpoint the course page depends on gets a typed method
//! on [`ApiClient`], and every failure is classified into the three error
//! kinds the page's fallback policy distinguishes: authorization failures,
//! not-found (a valid negative signal for the payment-proof check), and
//! generic network/server failures.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ApplicationFields, PaymentProofReceipt};
