//! Backend seam for the enrollment flows.

use aula_client::{ApiClient, ApiError, ApplicationFields, PaymentProofReceipt};
use aula_types::{ApplicationStatus, Course, CourseId, FileAttachment};

/// The slice of the backend API the enrollment flows depend on.
///
/// `ApiClient` is the production implementation; tests provide in-memory
/// fakes so reconciliation logic is exercised without HTTP.
pub trait EnrollmentApi {
    fn course_detail(
        &self,
        course_id: CourseId,
    ) -> impl std::future::Future<Output = Result<Course, ApiError>> + Send;

    fn application_status(
        &self,
        course_id: CourseId,
    ) -> impl std::future::Future<Output = Result<ApplicationStatus, ApiError>> + Send;

    /// Review status string of the uploaded proof; `Err(NotFound)` is the
    /// documented "never submitted" signal.
    fn payment_proof_status(
        &self,
        course_id: CourseId,
    ) -> impl std::future::Future<Output = Result<String, ApiError>> + Send;

    fn enrolled_courses(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<CourseId>, ApiError>> + Send;

    fn submit_application(
        &self,
        course_id: CourseId,
        fields: &ApplicationFields,
        document: &FileAttachment,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    fn submit_payment_proof(
        &self,
        course_id: CourseId,
        document: &FileAttachment,
    ) -> impl std::future::Future<Output = Result<PaymentProofReceipt, ApiError>> + Send;
}

impl EnrollmentApi for ApiClient {
    async fn course_detail(&self, course_id: CourseId) -> Result<Course, ApiError> {
        ApiClient::course_detail(self, course_id).await
    }

    async fn application_status(
        &self,
        course_id: CourseId,
    ) -> Result<ApplicationStatus, ApiError> {
        ApiClient::application_status(self, course_id).await
    }

    async fn payment_proof_status(&self, course_id: CourseId) -> Result<String, ApiError> {
        ApiClient::payment_proof_status(self, course_id).await
    }

    async fn enrolled_courses(&self) -> Result<Vec<CourseId>, ApiError> {
        ApiClient::enrolled_courses(self).await
    }

    async fn submit_application(
        &self,
        course_id: CourseId,
        fields: &ApplicationFields,
        document: &FileAttachment,
    ) -> Result<(), ApiError> {
        ApiClient::submit_application(self, course_id, fields, document).await
    }

    async fn submit_payment_proof(
        &self,
        course_id: CourseId,
        document: &FileAttachment,
    ) -> Result<PaymentProofReceipt, ApiError> {
        ApiClient::submit_payment_proof(self, course_id, document).await
    }
}
