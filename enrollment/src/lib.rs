//! Enrollment state reconciliation and submission flows.
//!
//! The course page depends on four independent, possibly-inconsistent backend
//! signals: course metadata, the application status, the payment-proof review
//! state, and the authoritative membership list. This crate merges them into
//! one [`aula_types::EnrollmentState`] with an explicit fallback policy
//! (secondary signals degrade to documented defaults, the primary course
//! fetch is fatal, authorization failures route to login), and implements the
//! two mutating flows — application submission and payment-proof upload —
//! with their optimistic transitions.
//!
//! The reconciler is written against the [`EnrollmentApi`] trait so its
//! decision logic is tested with in-memory fakes, independent of HTTP.

pub mod api;
pub mod application;
pub mod error;
pub mod payment;
pub mod reconcile;

#[cfg(test)]
pub(crate) mod testutil;

pub use api::EnrollmentApi;
pub use application::{submit_application, ApplicationForm};
pub use payment::submit_payment_proof;
pub use error::{FormError, PageError, SubmitError};
pub use reconcile::{load_course_page, merge_signals, CoursePage, PageLoad};
