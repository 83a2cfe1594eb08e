//! Video library state and watched-toggle intents.

use crate::api::VideoApi;

use aula_client::ApiError;
use aula_types::{Video, VideoId};
use std::collections::HashSet;

/// A committed intent to flip one video's watched flag.
///
/// Produced by [`VideoLibrary::begin_toggle`] and consumed exactly once by
/// [`VideoLibrary::finish_toggle`], so a flag can only change after its
/// request completed successfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleIntent {
    pub video_id: VideoId,
    /// The state the request asks the backend to record.
    pub target: bool,
}

/// The enrolled student's lesson list plus the player's selected copy.
#[derive(Clone, Debug, Default)]
pub struct VideoLibrary {
    videos: Vec<Video>,
    /// Detached copy held by the player pane. Kept in sync with the list
    /// entry of the same id on every successful toggle.
    selected: Option<Video>,
    /// Videos with a toggle request in flight (busy indication only).
    in_flight: HashSet<VideoId>,
}

impl VideoLibrary {
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            videos,
            selected: None,
            in_flight: HashSet::new(),
        }
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn selected(&self) -> Option<&Video> {
        self.selected.as_ref()
    }

    /// Select a video for playback, cloning it into the player pane.
    pub fn select(&mut self, video_id: VideoId) -> bool {
        match self.videos.iter().find(|v| v.id == video_id) {
            Some(video) => {
                self.selected = Some(video.clone());
                true
            }
            None => false,
        }
    }

    /// Whether a toggle for this video is currently in flight.
    pub fn is_busy(&self, video_id: VideoId) -> bool {
        self.in_flight.contains(&video_id)
    }

    /// Start a toggle: compute the inverted target and mark the video busy.
    ///
    /// Returns `None` if the video is unknown or already has a toggle in
    /// flight. Other videos are unaffected.
    pub fn begin_toggle(&mut self, video_id: VideoId) -> Option<ToggleIntent> {
        if self.in_flight.contains(&video_id) {
            return None;
        }
        let current = self.videos.iter().find(|v| v.id == video_id)?.watched;
        self.in_flight.insert(video_id);
        Some(ToggleIntent {
            video_id,
            target: !current,
        })
    }

    /// Complete a toggle. On success both the list entry and the selected
    /// copy (when it shares the id) take the target value; on failure neither
    /// changes. The busy mark is cleared either way.
    pub fn finish_toggle(&mut self, intent: ToggleIntent, success: bool) {
        self.in_flight.remove(&intent.video_id);
        if !success {
            return;
        }
        if let Some(video) = self.videos.iter_mut().find(|v| v.id == intent.video_id) {
            video.watched = intent.target;
        }
        if let Some(selected) = self.selected.as_mut() {
            if selected.id == intent.video_id {
                selected.watched = intent.target;
            }
        }
    }
}

/// Flip one video's watched flag against the backend.
///
/// Returns the new flag value, or `None` if no toggle was started (unknown
/// video or one already in flight). On request failure the library is left
/// unchanged and the error is surfaced for a transient notification.
pub async fn toggle_watched<A: VideoApi>(
    api: &A,
    library: &mut VideoLibrary,
    video_id: VideoId,
) -> Result<Option<bool>, ApiError> {
    let Some(intent) = library.begin_toggle(video_id) else {
        return Ok(None);
    };

    match api.set_video_watched(intent.video_id, intent.target).await {
        Ok(()) => {
            library.finish_toggle(intent, true);
            Ok(Some(intent.target))
        }
        Err(e) => {
            tracing::debug!(video = %video_id, error = %e, "watched toggle failed");
            library.finish_toggle(intent, false);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn video(id: u64, watched: bool) -> Video {
        Video {
            id: VideoId::new(id),
            url: format!("https://v.aula.example/{id}"),
            title: format!("Lesson {id}"),
            description: String::new(),
            watched,
        }
    }

    struct FakeVideoApi {
        result: Result<(), ApiError>,
        calls: AtomicUsize,
        recorded: Mutex<Vec<(VideoId, bool)>>,
    }

    impl FakeVideoApi {
        fn ok() -> Self {
            Self {
                result: Ok(()),
                calls: AtomicUsize::new(0),
                recorded: Mutex::new(vec![]),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(ApiError::Http(500)),
                ..Self::ok()
            }
        }
    }

    impl VideoApi for FakeVideoApi {
        async fn course_videos(
            &self,
            _course_id: aula_types::CourseId,
        ) -> Result<Vec<Video>, ApiError> {
            Ok(vec![])
        }

        async fn set_video_watched(
            &self,
            video_id: VideoId,
            watched: bool,
        ) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.recorded.lock().unwrap().push((video_id, watched));
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_successful_toggle_updates_both_copies() {
        let api = FakeVideoApi::ok();
        let mut library = VideoLibrary::new(vec![video(1, false), video(2, true)]);
        library.select(VideoId::new(1));

        let flipped = toggle_watched(&api, &mut library, VideoId::new(1))
            .await
            .unwrap();
        assert_eq!(flipped, Some(true));
        assert!(library.videos()[0].watched);
        assert!(library.selected().unwrap().watched);
        assert!(!library.is_busy(VideoId::new(1)));
    }

    #[tokio::test]
    async fn test_failed_toggle_changes_neither_copy() {
        let api = FakeVideoApi::failing();
        let mut library = VideoLibrary::new(vec![video(1, false)]);
        library.select(VideoId::new(1));

        let result = toggle_watched(&api, &mut library, VideoId::new(1)).await;
        assert!(result.is_err());
        assert!(!library.videos()[0].watched);
        assert!(!library.selected().unwrap().watched);
        assert!(!library.is_busy(VideoId::new(1)));
    }

    #[tokio::test]
    async fn test_toggle_sends_explicit_target_state() {
        let api = FakeVideoApi::ok();
        let mut library = VideoLibrary::new(vec![video(1, true)]);

        toggle_watched(&api, &mut library, VideoId::new(1))
            .await
            .unwrap();
        // Marking an already-watched video sends watched=false, not a blind
        // toggle trigger.
        assert_eq!(
            api.recorded.lock().unwrap().as_slice(),
            &[(VideoId::new(1), false)]
        );
        assert!(!library.videos()[0].watched);
    }

    #[tokio::test]
    async fn test_unselected_video_only_updates_list() {
        let api = FakeVideoApi::ok();
        let mut library = VideoLibrary::new(vec![video(1, false), video(2, false)]);
        library.select(VideoId::new(2));

        toggle_watched(&api, &mut library, VideoId::new(1))
            .await
            .unwrap();
        assert!(library.videos()[0].watched);
        assert!(!library.selected().unwrap().watched);
    }

    #[test]
    fn test_in_flight_video_blocks_second_intent_only_for_itself() {
        let mut library = VideoLibrary::new(vec![video(1, false), video(2, false)]);

        let first = library.begin_toggle(VideoId::new(1)).unwrap();
        assert!(library.is_busy(VideoId::new(1)));
        assert!(library.begin_toggle(VideoId::new(1)).is_none());

        // Independent video is unaffected.
        let second = library.begin_toggle(VideoId::new(2)).unwrap();
        assert!(second.target);

        library.finish_toggle(first, true);
        library.finish_toggle(second, true);
        assert!(library.videos().iter().all(|v| v.watched));
    }

    #[test]
    fn test_begin_toggle_unknown_video() {
        let mut library = VideoLibrary::new(vec![video(1, false)]);
        assert!(library.begin_toggle(VideoId::new(99)).is_none());
    }

    #[tokio::test]
    async fn test_toggle_on_unknown_video_issues_no_request() {
        let api = FakeVideoApi::ok();
        let mut library = VideoLibrary::new(vec![video(1, false)]);
        let flipped = toggle_watched(&api, &mut library, VideoId::new(99))
            .await
            .unwrap();
        assert_eq!(flipped, None);
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }
}
