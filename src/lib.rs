pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod scheduler;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use client::{ApiClient, ScheduleStore};
pub use config::Config;
pub use errors::{FetchError, Operation};
pub use fallback::fallback_snapshot;
pub use models::{NewPost, Platform, PlatformStats, PostId, ScheduledPost, StatsSnapshot};
pub use scheduler::{DraftForm, SchedulerSession};
pub use state::AppState;
