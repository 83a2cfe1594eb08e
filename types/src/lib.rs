//! Fundamental types for the Aula student client.
//!
//! This crate defines the domain model shared across every other crate in the
//! workspace: course and video entities, the application-status enum, and the
//! enrollment state machine the page view switches on.

pub mod course;
pub mod file;
pub mod state;
pub mod video;

pub use course::{Course, CourseId, CourseSection};
pub use file::FileAttachment;
pub use state::{ApplicationStatus, EnrollmentState, PaymentProofState};
pub use video::{Video, VideoId};
