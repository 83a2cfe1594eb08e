//! Enrollment state machine for the course detail view.
//!
//! The view renders exactly one of these states at a time. The three status
//! signals (application status, payment-proof review, membership) collapse
//! into a single `EnrollmentState`, so contradictory flag combinations cannot
//! be represented.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a student's enrollment application for one course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    /// No application exists for this student/course pair.
    NotApplied,
    /// Application submitted; awaiting administrative review.
    Pending,
    /// Application approved; payment may proceed.
    Approved,
    /// Application rejected.
    Rejected,
}

impl ApplicationStatus {
    /// Parse the backend's wire value. Unknown values degrade to `NotApplied`
    /// so a misbehaving status endpoint never takes down the page.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "PENDING" => Self::Pending,
            "APPROVED" => Self::Approved,
            "REJECTED" => Self::Rejected,
            _ => Self::NotApplied,
        }
    }
}

/// Review state of an uploaded payment-proof document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentProofState {
    /// A proof file has been uploaded.
    pub submitted: bool,
    /// The proof is awaiting administrative review.
    pub pending: bool,
}

impl PaymentProofState {
    /// The state right after a successful upload.
    pub fn awaiting_review() -> Self {
        Self {
            submitted: true,
            pending: true,
        }
    }
}

/// The single reconciled state the course page switches on.
///
/// `Enrolled` is the terminal positive state: membership evidence always wins,
/// and once enrolled the payment sub-state is no longer meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentState {
    /// Student has not applied.
    NotApplied,
    /// Application submitted; under review.
    Pending,
    /// Approved, no payment proof on file yet.
    ApprovedAwaitingPayment,
    /// Approved, payment proof uploaded and under review.
    ApprovedPaymentPending,
    /// Student appears in the membership list.
    Enrolled,
    /// Application rejected.
    Rejected,
}

impl EnrollmentState {
    /// Merge the three backend signals into one state.
    ///
    /// Membership is ground truth: `enrolled` forces `Enrolled` regardless of
    /// the reported application status. Payment state only distinguishes the
    /// two approved variants.
    pub fn from_signals(
        status: ApplicationStatus,
        payment: PaymentProofState,
        enrolled: bool,
    ) -> Self {
        if enrolled {
            return Self::Enrolled;
        }
        match status {
            ApplicationStatus::NotApplied => Self::NotApplied,
            ApplicationStatus::Pending => Self::Pending,
            ApplicationStatus::Approved => {
                if payment.submitted {
                    Self::ApprovedPaymentPending
                } else {
                    Self::ApprovedAwaitingPayment
                }
            }
            ApplicationStatus::Rejected => Self::Rejected,
        }
    }

    /// Promote to `Enrolled` on membership evidence. Never downgrades.
    pub fn promote_enrolled(self) -> Self {
        Self::Enrolled
    }

    /// Transition applied after a successful application submission.
    pub fn application_submitted(self) -> Self {
        Self::Pending
    }

    /// Transition applied after a successful payment-proof upload.
    pub fn payment_submitted(self) -> Self {
        Self::ApprovedPaymentPending
    }

    /// The application status this state implies (`Enrolled` ⇒ `Approved`).
    pub fn application_status(&self) -> ApplicationStatus {
        match self {
            Self::NotApplied => ApplicationStatus::NotApplied,
            Self::Pending => ApplicationStatus::Pending,
            Self::ApprovedAwaitingPayment | Self::ApprovedPaymentPending | Self::Enrolled => {
                ApplicationStatus::Approved
            }
            Self::Rejected => ApplicationStatus::Rejected,
        }
    }

    /// Payment-proof sub-state. Only meaningful while approved and not yet
    /// enrolled; all other states report the negative default.
    pub fn payment_proof(&self) -> PaymentProofState {
        match self {
            Self::ApprovedPaymentPending => PaymentProofState::awaiting_review(),
            _ => PaymentProofState::default(),
        }
    }

    /// Whether the student is a confirmed member of the course.
    pub fn is_enrolled(&self) -> bool {
        matches!(self, Self::Enrolled)
    }

    /// Whether the application form should be offered.
    pub fn can_apply(&self) -> bool {
        matches!(self, Self::NotApplied | Self::Rejected)
    }

    /// Whether the payment-proof upload panel should be offered.
    pub fn can_submit_payment(&self) -> bool {
        matches!(self, Self::ApprovedAwaitingPayment)
    }

    /// Whether the video player is available.
    pub fn can_watch_videos(&self) -> bool {
        matches!(self, Self::Enrolled)
    }
}
