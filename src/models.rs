use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::Twitter,
        Platform::Instagram,
        Platform::Linkedin,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "LinkedIn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.key().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-platform metrics. Twitter reports `tweets`/`retweets` where the others use `posts`/`shares`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub followers: u64,
    pub engagement: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweets: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweets: Option<u64>,
    #[serde(default)]
    pub daily_stats: Vec<f64>,
}

impl PlatformStats {
    pub fn post_count(&self) -> u64 {
        self.posts.or(self.tweets).unwrap_or(0)
    }

    pub fn share_count(&self) -> u64 {
        self.shares.or(self.retweets).unwrap_or(0)
    }
}

/// Labelled trend series for the engagement chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngagementData {
    pub labels: Vec<String>,
    pub datasets: Vec<EngagementSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSeries {
    pub label: String,
    pub data: Vec<f64>,
}

/// Stats body exactly as served, held without reshaping.
///
/// Typed views are read on demand so that an unexpected field or a missing platform never
/// changes what the snapshot carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsSnapshot(Value);

impl StatsSnapshot {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn platform(&self, platform: Platform) -> Option<PlatformStats> {
        self.0
            .get(platform.key())
            .and_then(|entry| serde_json::from_value(entry.clone()).ok())
    }

    /// Every known platform present in the snapshot, in display order.
    pub fn platforms(&self) -> Vec<(Platform, PlatformStats)> {
        Platform::ALL
            .into_iter()
            .filter_map(|platform| self.platform(platform).map(|stats| (platform, stats)))
            .collect()
    }

    pub fn engagement_data(&self) -> Option<EngagementData> {
        self.0
            .get("engagementData")
            .and_then(|entry| serde_json::from_value(entry.clone()).ok())
    }
}

/// Server-assigned identity; the API may hand out numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(id) => write!(f, "{id}"),
            PostId::Text(id) => f.write_str(id),
        }
    }
}

impl PostId {
    /// Id taken from a URL path segment. Kept as the exact text so that `"007"` is never
    /// rewritten to `7` on the way back to the server.
    pub fn from_path(segment: &str) -> Self {
        PostId::Text(segment.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    pub id: PostId,
    pub platform: Platform,
    pub content: String,
    pub scheduled_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of a create call. Carries no identity; the server assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub platform: Platform,
    pub content: String,
    pub scheduled_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
