use crate::client::ScheduleStore;
use crate::errors::FetchError;
use crate::models::{NewPost, Platform, PostId, ScheduledPost};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("missing required field: {0}")]
    Missing(&'static str),

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
}

/// Scheduler form fields as entered. A JSON `null` reads as an empty field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftForm {
    #[serde(deserialize_with = "null_as_empty")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub scheduled_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub image: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DraftForm {
    /// Required-field check only; everything else is left to the server.
    pub fn validate(&self) -> Result<NewPost, DraftError> {
        let platform = self.platform.trim();
        if platform.is_empty() {
            return Err(DraftError::Missing("platform"));
        }
        let platform =
            Platform::parse(platform).ok_or_else(|| DraftError::UnknownPlatform(platform.to_string()))?;
        if self.content.trim().is_empty() {
            return Err(DraftError::Missing("content"));
        }
        if self.scheduled_date.trim().is_empty() {
            return Err(DraftError::Missing("scheduledDate"));
        }

        let image = self.image.trim();
        Ok(NewPost {
            platform,
            content: self.content.clone(),
            scheduled_date: self.scheduled_date.trim().to_string(),
            image: (!image.is_empty()).then(|| image.to_string()),
        })
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Submitting,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// Transient message for the last user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            severity: Severity::Success,
            message: message.to_string(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Client side of the scheduled-post lifecycle.
///
/// The post list is only ever replaced by a fresh `list()` from the store. Creates and
/// deletes are never spliced in locally, so a post appears only after the server has
/// confirmed it and a failed create leaves the draft in place for another attempt.
///
/// Each action is split into a `begin_*` step, the remote call, and a `finish_*` step, so a
/// caller sharing the session behind a lock can release it while the call is in flight.
#[derive(Debug)]
pub struct SchedulerSession<S> {
    store: S,
    posts: Vec<ScheduledPost>,
    draft: DraftForm,
    phase: Phase,
    notice: Option<Notice>,
    load_error: Option<String>,
}

impl<S> SchedulerSession<S> {
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn posts(&self) -> &[ScheduledPost] {
        &self.posts
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: DraftForm) {
        self.draft = draft;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Take a `list()` result. On failure the previous list stays.
    pub fn apply_list(
        &mut self,
        result: Result<Vec<ScheduledPost>, FetchError>,
    ) -> Result<(), FetchError> {
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.load_error = None;
                Ok(())
            }
            Err(err) => {
                self.load_error = Some("Failed to fetch scheduled posts".to_string());
                Err(err)
            }
        }
    }

    /// Validate the draft and enter `Submitting`. An invalid draft never leaves `Idle`.
    pub fn begin_submit(&mut self) -> Result<NewPost, DraftError> {
        match self.draft.validate() {
            Ok(post) => {
                self.phase = Phase::Submitting;
                Ok(post)
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        result: Result<ScheduledPost, FetchError>,
    ) -> Result<ScheduledPost, FetchError> {
        self.phase = Phase::Idle;
        match result {
            Ok(created) => {
                info!(id = %created.id, platform = %created.platform, "scheduled post created");
                self.draft = DraftForm::default();
                self.notice = Some(Notice::success("Post scheduled successfully!"));
                Ok(created)
            }
            Err(err) => {
                self.notice = Some(Notice::error("Failed to schedule post"));
                Err(err)
            }
        }
    }

    pub fn begin_delete(&mut self) {
        self.phase = Phase::Deleting;
    }

    pub fn finish_delete(&mut self, id: &PostId, result: Result<(), FetchError>) -> Result<(), FetchError> {
        self.phase = Phase::Idle;
        match result {
            Ok(()) => {
                info!(%id, "scheduled post deleted");
                self.notice = Some(Notice::success("Post deleted successfully!"));
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::error("Failed to delete post"));
                Err(err)
            }
        }
    }
}

impl<S: ScheduleStore> SchedulerSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            posts: Vec::new(),
            draft: DraftForm::default(),
            phase: Phase::Idle,
            notice: None,
            load_error: None,
        }
    }

    /// Replace the post list with the server's.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        let result = self.store.list().await;
        self.apply_list(result)
    }

    /// Create the current draft, then re-fetch the list.
    pub async fn submit(&mut self) -> Result<ScheduledPost, SubmitError> {
        let post = self.begin_submit()?;
        let result = self.store.create(&post).await;
        let created = self.finish_submit(result)?;
        // The create stands even if the refresh fails; load() records that separately.
        let _ = self.load().await;
        Ok(created)
    }

    /// Delete by identity, then re-fetch the list.
    pub async fn delete(&mut self, id: &PostId) -> Result<(), FetchError> {
        self.begin_delete();
        let result = self.store.delete(id).await;
        self.finish_delete(id, result)?;
        let _ = self.load().await;
        Ok(())
    }
}

/// Human-readable schedule time, e.g. `January 1, 2024 10:00 AM`.
///
/// Accepts RFC 3339 timestamps and the offset-less `YYYY-MM-DDTHH:MM[:SS]` form a
/// datetime-local input produces. Anything else is returned unchanged.
pub fn format_scheduled_date(value: &str) -> String {
    const DISPLAY: &str = "%B %-d, %Y %-I:%M %p";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return parsed.format(DISPLAY).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, pattern) {
            return parsed.format(DISPLAY).to_string();
        }
    }
    value.to_string()
}
