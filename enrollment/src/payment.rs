//! Payment-proof upload flow.

use crate::api::EnrollmentApi;
use crate::error::{FormError, SubmitError};

use aula_types::{CourseId, EnrollmentState, FileAttachment};

/// Upload the payment-proof document and apply the optimistic transition.
///
/// The response's `status` field is advisory. `"pending"` is the expected
/// value; anything else (or its absence) still yields the same positive
/// transition — the upload did succeed — with a diagnostic recorded for the
/// unexpected shape. Failure leaves the caller's state untouched.
pub async fn submit_payment_proof<A: EnrollmentApi>(
    api: &A,
    course_id: CourseId,
    document: &FileAttachment,
    state: EnrollmentState,
) -> Result<EnrollmentState, SubmitError> {
    if document.is_empty() {
        return Err(SubmitError::Form(FormError::MissingDocument));
    }

    let receipt = api.submit_payment_proof(course_id, document).await?;

    match receipt.status.as_deref() {
        Some("pending") => {}
        other => {
            tracing::warn!(
                course = %course_id,
                status = ?other,
                "unexpected payment-proof receipt status; applying optimistic transition"
            );
        }
    }
    tracing::info!(course = %course_id, "payment proof uploaded");

    Ok(state.payment_submitted())
}
