//! HTTP client for the Aula backend.

use crate::error::ApiError;
use crate::types::{
    ApplicationFields, ApplicationStatusResponse, CourseDetailResponse, EnrolledCourseEntry,
    PaymentProofReceipt, PaymentProofStatusResponse, VideoEntry,
};

use aula_types::{ApplicationStatus, Course, CourseId, FileAttachment, Video, VideoId};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default timeout for backend requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Aula backend API.
///
/// Wraps `reqwest::Client` with the backend's base URL and the student's
/// bearer token, and provides a typed method per endpoint the course page
/// consumes. Requests carry explicit timeouts so an unresponsive backend
/// surfaces as an error instead of an indefinite loading state.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client targeting the given base URL (e.g. `https://api.aula.example`).
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, token, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ApiError::RequestFailed(format!("failed to create HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Issue a GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorized(self.http.get(self.url(path)))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("failed to parse {path}: {e}")))
    }

    /// Fetch course metadata. `GET /courses/{id}`.
    pub async fn course_detail(&self, course_id: CourseId) -> Result<Course, ApiError> {
        let resp: CourseDetailResponse = self.get_json(&format!("/courses/{course_id}")).await?;
        Ok(resp.into_course())
    }

    /// Fetch the student's application status for a course.
    /// `GET /courses/{id}/application`.
    pub async fn application_status(
        &self,
        course_id: CourseId,
    ) -> Result<ApplicationStatus, ApiError> {
        let resp: ApplicationStatusResponse = self
            .get_json(&format!("/courses/{course_id}/application"))
            .await?;
        Ok(ApplicationStatus::from_wire(&resp.status))
    }

    /// Fetch the review status of an uploaded payment proof.
    /// `GET /courses/{id}/payment-proof`; 404 means no proof was submitted.
    pub async fn payment_proof_status(&self, course_id: CourseId) -> Result<String, ApiError> {
        let resp: PaymentProofStatusResponse = self
            .get_json(&format!("/courses/{course_id}/payment-proof"))
            .await?;
        Ok(resp.status)
    }

    /// Fetch the ids of all courses the student is enrolled in.
    /// `GET /me/courses`.
    pub async fn enrolled_courses(&self) -> Result<Vec<CourseId>, ApiError> {
        let entries: Vec<EnrolledCourseEntry> = self.get_json("/me/courses").await?;
        Ok(entries.into_iter().map(|e| CourseId::new(e.id)).collect())
    }

    /// Submit an enrollment application with its attached document.
    /// `POST multipart /courses/{id}/application`.
    ///
    /// The status transition on success is driven by the client, not the
    /// response body, so the body is not decoded.
    pub async fn submit_application(
        &self,
        course_id: CourseId,
        fields: &ApplicationFields,
        document: &FileAttachment,
    ) -> Result<(), ApiError> {
        let form = Form::new()
            .text("full_name", fields.full_name.clone())
            .text("email", fields.email.clone())
            .text("phone", fields.phone.clone())
            .text("school", fields.school.clone())
            .text("motivation", fields.motivation.clone())
            .part("document", file_part(document)?);

        let response = self
            .authorized(
                self.http
                    .post(self.url(&format!("/courses/{course_id}/application"))),
            )
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(())
    }

    /// Upload a payment-proof document.
    /// `POST multipart /courses/{id}/payment-proof`.
    pub async fn submit_payment_proof(
        &self,
        course_id: CourseId,
        document: &FileAttachment,
    ) -> Result<PaymentProofReceipt, ApiError> {
        let form = Form::new().part("document", file_part(document)?);

        let response = self
            .authorized(
                self.http
                    .post(self.url(&format!("/courses/{course_id}/payment-proof"))),
            )
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }

        response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("failed to parse payment-proof receipt: {e}"))
        })
    }

    /// Fetch the enrolled-only video list with watched checkpoints.
    /// `GET /courses/{id}/videos`.
    pub async fn course_videos(&self, course_id: CourseId) -> Result<Vec<Video>, ApiError> {
        let entries: Vec<VideoEntry> = self
            .get_json(&format!("/courses/{course_id}/videos"))
            .await?;
        Ok(entries.into_iter().map(VideoEntry::into_video).collect())
    }

    /// Record a video's watched state. `POST /videos/{id}/progress`.
    ///
    /// The intended target state is sent explicitly. The upstream endpoint
    /// historically behaved as a blind toggle; an explicit payload keeps a
    /// retried or duplicated request from silently inverting progress.
    pub async fn set_video_watched(
        &self,
        video_id: VideoId,
        watched: bool,
    ) -> Result<(), ApiError> {
        let response = self
            .authorized(self.http.post(self.url(&format!("/videos/{video_id}/progress"))))
            .json(&serde_json::json!({ "watched": watched }))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(())
    }
}

/// Build the multipart file part for an upload.
fn file_part(document: &FileAttachment) -> Result<Part, ApiError> {
    Part::bytes(document.bytes.clone())
        .file_name(document.file_name.clone())
        .mime_str(&document.content_type)
        .map_err(|e| {
            ApiError::RequestFailed(format!(
                "invalid content type {}: {e}",
                document.content_type
            ))
        })
}

/// Map a transport-level reqwest error into the client taxonomy.
fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        ApiError::Unreachable(format!("connection failed: {e}"))
    } else {
        ApiError::RequestFailed(e.to_string())
    }
}
