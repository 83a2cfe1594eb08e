//! Enrollment State Reconciler.
//!
//! Rebuilds the canonical page state from the four backend signals on page
//! load and after each mutating action. The fallback policy is explicit:
//!
//! - course metadata is the primary signal — its failure is fatal;
//! - application status degrades to `NotApplied`;
//! - payment-proof status degrades to the negative default (404 included);
//! - membership degrades to "not enrolled" without touching the status;
//! - an authorization failure on any signal resolves the whole load to
//!   [`PageLoad::LoginRequired`] instead of an error.
//!
//! Membership is applied as a monotonic promotion, so the relative completion
//! order of the payment-proof and membership requests cannot change the
//! merged result.

use crate::api::EnrollmentApi;
use crate::error::PageError;

use aula_types::{ApplicationStatus, Course, CourseId, EnrollmentState, PaymentProofState};

/// The fully reconciled course page.
#[derive(Clone, Debug, PartialEq)]
pub struct CoursePage {
    pub course: Course,
    pub state: EnrollmentState,
}

/// Outcome of a page load that did not fail.
///
/// `LoginRequired` is the single navigation side effect the page defines; it
/// is returned as a value so the view layer decides how to route.
#[derive(Clone, Debug, PartialEq)]
pub enum PageLoad {
    Ready(CoursePage),
    LoginRequired,
}

/// Pure merge of the three status signals into one state.
///
/// Membership evidence is applied as a promotion over the state derived from
/// the application/payment signals, never as an overwrite.
pub fn merge_signals(
    status: ApplicationStatus,
    payment: PaymentProofState,
    enrolled: bool,
) -> EnrollmentState {
    let state = EnrollmentState::from_signals(status, payment, false);
    if enrolled {
        state.promote_enrolled()
    } else {
        state
    }
}

/// Load and reconcile the course page.
///
/// Course metadata and application status are fetched concurrently; the
/// payment-proof check only runs for an approved application; membership is
/// always consulted last as ground truth.
pub async fn load_course_page<A: EnrollmentApi>(
    api: &A,
    course_id: CourseId,
) -> Result<PageLoad, PageError> {
    let (course_res, status_res) = tokio::join!(
        api.course_detail(course_id),
        api.application_status(course_id)
    );

    // Secondary signal: the page must not fail solely because the status
    // endpoint is unavailable.
    let status = match status_res {
        Ok(status) => status,
        Err(e) if e.is_unauthorized() => return Ok(PageLoad::LoginRequired),
        Err(e) => {
            tracing::debug!(course = %course_id, error = %e, "application status unavailable, assuming NOT_APPLIED");
            ApplicationStatus::NotApplied
        }
    };

    // Primary signal: fatal unless it is an authorization failure, which
    // routes to login without setting a page-level error.
    let course = match course_res {
        Ok(course) => course,
        Err(e) if e.is_unauthorized() => return Ok(PageLoad::LoginRequired),
        Err(e) => return Err(PageError::CourseUnavailable(e)),
    };

    let mut payment = PaymentProofState::default();
    if status == ApplicationStatus::Approved {
        match api.payment_proof_status(course_id).await {
            Ok(review) if review == "pending" => {
                payment = PaymentProofState::awaiting_review();
            }
            Ok(review) => {
                // Reviewed/approved proofs are superseded by the enrolled
                // path; leave the defaults.
                tracing::debug!(course = %course_id, %review, "payment proof not pending");
            }
            Err(e) if e.is_unauthorized() => return Ok(PageLoad::LoginRequired),
            Err(e) if e.is_not_found() => {
                // Valid negative signal: no proof submitted.
            }
            Err(e) => {
                tracing::debug!(course = %course_id, error = %e, "payment proof status unavailable, assuming not submitted");
            }
        }
    }

    let enrolled = match api.enrolled_courses().await {
        Ok(ids) => ids.contains(&course_id),
        Err(e) if e.is_unauthorized() => return Ok(PageLoad::LoginRequired),
        Err(e) => {
            tracing::warn!(course = %course_id, error = %e, "membership list unavailable, leaving enrollment unchanged");
            false
        }
    };

    let state = merge_signals(status, payment, enrolled);
    Ok(PageLoad::Ready(CoursePage { course, state }))
}
