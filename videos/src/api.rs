//! Backend seam for the video flows.

use aula_client::{ApiClient, ApiError};
use aula_types::{CourseId, Video, VideoId};

/// The slice of the backend API the video library depends on.
pub trait VideoApi {
    fn course_videos(
        &self,
        course_id: CourseId,
    ) -> impl std::future::Future<Output = Result<Vec<Video>, ApiError>> + Send;

    /// Record the intended watched state. Explicit target, not a blind toggle.
    fn set_video_watched(
        &self,
        video_id: VideoId,
        watched: bool,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;
}

impl VideoApi for ApiClient {
    async fn course_videos(&self, course_id: CourseId) -> Result<Vec<Video>, ApiError> {
        ApiClient::course_videos(self, course_id).await
    }

    async fn set_video_watched(&self, video_id: VideoId, watched: bool) -> Result<(), ApiError> {
        ApiClient::set_video_watched(self, video_id, watched).await
    }
}
