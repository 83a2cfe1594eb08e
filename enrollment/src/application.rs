//! Enrollment application form and submission flow.
//!
//! Validation is entirely local: an incomplete form is rejected with a
//! field-specific reason before any request is built. On success the caller
//! receives the optimistically transitioned state; on failure the prior state
//! is returned untouched inside the error path.

use crate::api::EnrollmentApi;
use crate::error::{FormError, SubmitError};

use aula_client::ApplicationFields;
use aula_types::{CourseId, EnrollmentState, FileAttachment};

/// The application form as staged in the view: five textual fields plus one
/// attached document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub school: String,
    pub motivation: String,
    pub document: Option<FileAttachment>,
}

impl ApplicationForm {
    /// Check completeness and split the form into its wire fields and the
    /// attachment. Fields are matched in display order so the first missing
    /// one is reported.
    pub fn validate(&self) -> Result<(ApplicationFields, &FileAttachment), FormError> {
        if self.full_name.trim().is_empty() {
            return Err(FormError::MissingFullName);
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        if self.phone.trim().is_empty() {
            return Err(FormError::MissingPhone);
        }
        if self.school.trim().is_empty() {
            return Err(FormError::MissingSchool);
        }
        if self.motivation.trim().is_empty() {
            return Err(FormError::MissingMotivation);
        }
        let document = match &self.document {
            Some(document) if !document.is_empty() => document,
            _ => return Err(FormError::MissingDocument),
        };

        Ok((
            ApplicationFields {
                full_name: self.full_name.trim().to_string(),
                email: self.email.trim().to_string(),
                phone: self.phone.trim().to_string(),
                school: self.school.trim().to_string(),
                motivation: self.motivation.trim().to_string(),
            },
            document,
        ))
    }
}

/// Submit the enrollment application.
///
/// Returns the new state (`Pending`) on success. Validation failures issue
/// zero network requests; network failures leave `state` as the caller's
/// current truth.
pub async fn submit_application<A: EnrollmentApi>(
    api: &A,
    course_id: CourseId,
    form: &ApplicationForm,
    state: EnrollmentState,
) -> Result<EnrollmentState, SubmitError> {
    let (fields, document) = form.validate()?;
    api.submit_application(course_id, &fields, document).await?;
    tracing::info!(course = %course_id, "enrollment application submitted");
    Ok(state.application_submitted())
}
