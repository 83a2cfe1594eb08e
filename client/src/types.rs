//! Wire types for the backend API contracts.
//!
//! Raw JSON shapes are kept separate from the domain model so backend field
//! drift stays contained here. Optional fields carry `#[serde(default)]`;
//! unknown fields are ignored.

use aula_types::{Course, CourseId, CourseSection, Video, VideoId};
use serde::{Deserialize, Serialize};

/// `GET /courses/{id}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseDetailResponse {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: u64,
    pub instructor_name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

/// One section entry within a course detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionEntry {
    pub id: u64,
    pub title: String,
}

impl CourseDetailResponse {
    pub fn into_course(self) -> Course {
        Course {
            id: CourseId::new(self.id),
            title: self.title,
            description: self.description,
            price: self.price,
            instructor_name: self.instructor_name,
            image_url: self.image_url,
            sections: self
                .sections
                .into_iter()
                .map(|s| CourseSection {
                    id: s.id,
                    title: s.title,
                })
                .collect(),
        }
    }
}

/// `GET /courses/{id}/application` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationStatusResponse {
    pub status: String,
}

/// `GET /courses/{id}/payment-proof` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentProofStatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of the `GET /me/courses` membership list.
///
/// The backend returns full course objects; only the id matters for the
/// membership check.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrolledCourseEntry {
    pub id: u64,
}

/// `GET /courses/{id}/videos` entry with its watched checkpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoEntry {
    pub id: u64,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub watched: bool,
}

impl VideoEntry {
    pub fn into_video(self) -> Video {
        Video {
            id: VideoId::new(self.id),
            url: self.url,
            title: self.title,
            description: self.description,
            watched: self.watched,
        }
    }
}

/// The five textual fields of the enrollment application form.
///
/// Validation (non-empty fields, attached document) happens upstream in the
/// submission flow; by the time this struct exists the content is complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub school: String,
    pub motivation: String,
}

/// `POST /courses/{id}/payment-proof` response body.
///
/// The status field is advisory: an absent or unexpected value still counts
/// as a successful upload (the caller applies the optimistic transition and
/// records a diagnostic).
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentProofReceipt {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
