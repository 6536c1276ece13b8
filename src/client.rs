use crate::config::{Config, ConfigError};
use crate::errors::{FetchError, Operation};
use crate::fallback::fallback_snapshot;
use crate::models::{NewPost, PostId, ScheduledPost, StatsSnapshot};
use reqwest::{Response, Url};
use std::future::Future;
use tracing::{error, warn};

/// Remote schedule resource. Every call goes to the server; nothing is cached.
pub trait ScheduleStore {
    fn list(&self) -> impl Future<Output = Result<Vec<ScheduledPost>, FetchError>> + Send;

    fn create(&self, post: &NewPost) -> impl Future<Output = Result<ScheduledPost, FetchError>> + Send;

    fn delete(&self, id: &PostId) -> impl Future<Output = Result<(), FetchError>> + Send;
}

/// JSON client for the dashboard REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.api_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Self::with_http(&config.api_url, http)
    }

    fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::Invalid {
            name: "DASHBOARD_API_URL",
            value: base_url.to_string(),
        };
        let base = Url::parse(base_url).map_err(|_| invalid())?;
        if base.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Current stats. Never fails: any problem with the live API yields the fallback dataset.
    pub async fn get_stats(&self) -> StatsSnapshot {
        match self.fetch_stats().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("failed to fetch social media stats, serving fallback data: {err}");
                fallback_snapshot()
            }
        }
    }

    async fn fetch_stats(&self) -> Result<StatsSnapshot, reqwest::Error> {
        self.http
            .get(self.endpoint(&["stats"]))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

async fn check_status(operation: Operation, resp: Response) -> Result<Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(FetchError::status(operation, status, body))
}

fn logged(err: FetchError) -> FetchError {
    error!("{err}");
    err
}

impl ScheduleStore for ApiClient {
    async fn list(&self) -> Result<Vec<ScheduledPost>, FetchError> {
        let operation = Operation::ListPosts;
        let resp = self
            .http
            .get(self.endpoint(&["schedule"]))
            .send()
            .await
            .map_err(|err| logged(FetchError::transport(operation, err)))?;
        let resp = check_status(operation, resp).await.map_err(logged)?;
        resp.json()
            .await
            .map_err(|err| logged(FetchError::decode(operation, err)))
    }

    async fn create(&self, post: &NewPost) -> Result<ScheduledPost, FetchError> {
        let operation = Operation::CreatePost;
        let resp = self
            .http
            .post(self.endpoint(&["schedule"]))
            .json(post)
            .send()
            .await
            .map_err(|err| logged(FetchError::transport(operation, err)))?;
        let resp = check_status(operation, resp).await.map_err(logged)?;
        resp.json()
            .await
            .map_err(|err| logged(FetchError::decode(operation, err)))
    }

    async fn delete(&self, id: &PostId) -> Result<(), FetchError> {
        let operation = Operation::DeletePost;
        let id = id.to_string();
        let resp = self
            .http
            .delete(self.endpoint(&["schedule", id.as_str()]))
            .send()
            .await
            .map_err(|err| logged(FetchError::transport(operation, err)))?;
        check_status(operation, resp).await.map_err(logged)?;
        Ok(())
    }
}
