//! In-memory fake backend for reconciler and submission-flow tests.

use crate::api::EnrollmentApi;

use aula_client::{ApiError, ApplicationFields, PaymentProofReceipt};
use aula_types::{ApplicationStatus, Course, CourseId, FileAttachment};
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) fn sample_course(id: CourseId) -> Course {
    Course {
        id,
        title: "Applied Rust".into(),
        description: "A course".into(),
        price: 120_000,
        instructor_name: "N. Instructor".into(),
        image_url: "https://cdn.aula.example/c.png".into(),
        sections: vec![],
    }
}

pub(crate) fn sample_document() -> FileAttachment {
    FileAttachment::new("proof.pdf", "application/pdf", vec![0x25, 0x50, 0x44, 0x46])
}

/// Per-endpoint call counters, readable after the flow under test completes.
#[derive(Default)]
pub(crate) struct Calls {
    course: AtomicUsize,
    status: AtomicUsize,
    payment_status: AtomicUsize,
    membership: AtomicUsize,
    submit_application: AtomicUsize,
    submit_payment: AtomicUsize,
}

impl Calls {
    pub(crate) fn payment_status(&self) -> usize {
        self.payment_status.load(Ordering::SeqCst)
    }

    pub(crate) fn membership(&self) -> usize {
        self.membership.load(Ordering::SeqCst)
    }

    pub(crate) fn submit_application(&self) -> usize {
        self.submit_application.load(Ordering::SeqCst)
    }

    pub(crate) fn submit_payment(&self) -> usize {
        self.submit_payment.load(Ordering::SeqCst)
    }

    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// Configurable fake: each field holds the result its endpoint returns.
pub(crate) struct FakeApi {
    pub(crate) course: Result<Course, ApiError>,
    pub(crate) status: Result<ApplicationStatus, ApiError>,
    pub(crate) payment_status: Result<String, ApiError>,
    pub(crate) membership: Result<Vec<CourseId>, ApiError>,
    pub(crate) application_result: Result<(), ApiError>,
    pub(crate) payment_result: Result<PaymentProofReceipt, ApiError>,
    pub(crate) calls: Calls,
}

impl FakeApi {
    /// A backend where the student has not applied and nothing is uploaded.
    pub(crate) fn new(course_id: CourseId) -> Self {
        Self {
            course: Ok(sample_course(course_id)),
            status: Ok(ApplicationStatus::NotApplied),
            payment_status: Err(ApiError::NotFound),
            membership: Ok(vec![]),
            application_result: Ok(()),
            payment_result: Ok(PaymentProofReceipt {
                status: Some("pending".into()),
                message: None,
            }),
            calls: Calls::default(),
        }
    }
}

impl EnrollmentApi for FakeApi {
    async fn course_detail(&self, _course_id: CourseId) -> Result<Course, ApiError> {
        Calls::bump(&self.calls.course);
        self.course.clone()
    }

    async fn application_status(
        &self,
        _course_id: CourseId,
    ) -> Result<ApplicationStatus, ApiError> {
        Calls::bump(&self.calls.status);
        self.status.clone()
    }

    async fn payment_proof_status(&self, _course_id: CourseId) -> Result<String, ApiError> {
        Calls::bump(&self.calls.payment_status);
        self.payment_status.clone()
    }

    async fn enrolled_courses(&self) -> Result<Vec<CourseId>, ApiError> {
        Calls::bump(&self.calls.membership);
        self.membership.clone()
    }

    async fn submit_application(
        &self,
        _course_id: CourseId,
        _fields: &ApplicationFields,
        _document: &FileAttachment,
    ) -> Result<(), ApiError> {
        Calls::bump(&self.calls.submit_application);
        self.application_result.clone()
    }

    async fn submit_payment_proof(
        &self,
        _course_id: CourseId,
        _document: &FileAttachment,
    ) -> Result<PaymentProofReceipt, ApiError> {
        Calls::bump(&self.calls.submit_payment);
        self.payment_result.clone()
    }
}
