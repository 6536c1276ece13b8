use crate::models::{Platform, PlatformStats, StatsSnapshot};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformSummary {
    pub platform: Platform,
    pub label: &'static str,
    pub followers: u64,
    pub engagement: f64,
    pub posts: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighestEngagement {
    pub platform: Platform,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub platforms: Vec<PlatformSummary>,
    pub total_followers: u64,
    pub total_engagement: f64,
    pub total_posts: u64,
    pub highest_engagement: Option<HighestEngagement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub labels: Vec<String>,
    pub datasets: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResponse {
    pub followers: Chart,
    pub engagement: Chart,
    pub interactions: Chart,
    pub daily: Chart,
}

pub fn build_summary(snapshot: &StatsSnapshot) -> DashboardSummary {
    let platforms: Vec<PlatformSummary> = snapshot
        .platforms()
        .into_iter()
        .map(|(platform, stats)| PlatformSummary {
            platform,
            label: platform.label(),
            followers: stats.followers,
            engagement: stats.engagement,
            posts: stats.post_count(),
        })
        .collect();

    let total_followers = platforms
        .iter()
        .fold(0u64, |sum, p| sum.saturating_add(p.followers));
    let total_posts = platforms
        .iter()
        .fold(0u64, |sum, p| sum.saturating_add(p.posts));
    let engagement_sum: f64 = platforms.iter().map(|p| p.engagement).sum();

    // First platform wins ties.
    let highest_engagement = platforms
        .iter()
        .fold(None::<&PlatformSummary>, |best, p| match best {
            Some(b) if b.engagement >= p.engagement => Some(b),
            _ => Some(p),
        })
        .map(|p| HighestEngagement {
            platform: p.platform,
            engagement: p.engagement,
        });

    DashboardSummary {
        total_followers,
        total_engagement: round_one_decimal(engagement_sum),
        total_posts,
        highest_engagement,
        platforms,
    }
}

pub fn build_analytics(snapshot: &StatsSnapshot) -> AnalyticsResponse {
    let platforms = snapshot.platforms();
    let names: Vec<String> = platforms.iter().map(|(p, _)| p.label().to_string()).collect();

    let followers = Chart {
        labels: names.clone(),
        datasets: vec![per_platform(&platforms, "Followers", |s| s.followers as f64)],
    };
    let engagement = Chart {
        labels: names.clone(),
        datasets: vec![per_platform(&platforms, "Engagement Rate (%)", |s| s.engagement)],
    };
    let interactions = Chart {
        labels: names,
        datasets: vec![
            per_platform(&platforms, "Likes", |s| s.likes.unwrap_or(0) as f64),
            per_platform(&platforms, "Comments", |s| s.comments.unwrap_or(0) as f64),
            per_platform(&platforms, "Shares", |s| s.share_count() as f64),
        ],
    };

    let days = platforms
        .iter()
        .map(|(_, stats)| stats.daily_stats.len())
        .max()
        .unwrap_or(0);
    let daily = Chart {
        labels: day_labels(days),
        datasets: platforms
            .iter()
            .map(|(platform, stats)| Series {
                label: platform.label().to_string(),
                data: stats.daily_stats.clone(),
            })
            .collect(),
    };

    AnalyticsResponse {
        followers,
        engagement,
        interactions,
        daily,
    }
}

fn per_platform(
    platforms: &[(Platform, PlatformStats)],
    label: &str,
    value: impl Fn(&PlatformStats) -> f64,
) -> Series {
    Series {
        label: label.to_string(),
        data: platforms.iter().map(|(_, stats)| value(stats)).collect(),
    }
}

pub fn day_labels(count: usize) -> Vec<String> {
    (1..=count).map(|day| format!("Day {day}")).collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
