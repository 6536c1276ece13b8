mod common;

use common::{spawn_fake_api, spawn_fake_api_gated, spawn_fake_api_with_ids, StatsReply};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use social_dashboard::{router, ApiClient, AppState};
use std::time::Duration;

async fn spawn_dashboard(api_url: &str) -> String {
    let state = AppState::new(ApiClient::new(api_url).unwrap());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn scheduler_form_creates_and_deletes_through_the_api() {
    let api = spawn_fake_api(StatsReply::Status(StatusCode::SERVICE_UNAVAILABLE)).await;
    let base = spawn_dashboard(&api.base_url).await;
    let client = Client::new();

    let page = client
        .post(format!("{base}/scheduler"))
        .form(&[
            ("platform", "linkedin"),
            ("content", "hiring update"),
            ("scheduledDate", "2024-01-01T10:00:00Z"),
            ("image", ""),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Post scheduled successfully!"));
    assert!(page.contains("hiring update"));
    assert!(page.contains("/scheduler/1/delete"));
    assert_eq!(api.post_count().await, 1);

    let page = client
        .post(format!("{base}/scheduler/1/delete"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Post deleted successfully!"));
    assert!(page.contains("No scheduled posts yet."));
    assert_eq!(api.post_count().await, 0);
}

#[tokio::test]
async fn scheduler_delete_sends_text_ids_back_unchanged() {
    let api = spawn_fake_api_with_ids(
        StatsReply::Status(StatusCode::SERVICE_UNAVAILABLE),
        vec!["007", "7"],
    )
    .await;
    let base = spawn_dashboard(&api.base_url).await;
    let client = Client::new();

    for content in ["first", "second"] {
        client
            .post(format!("{base}/scheduler"))
            .form(&[
                ("platform", "facebook"),
                ("content", content),
                ("scheduledDate", "2024-01-01T10:00:00Z"),
            ])
            .send()
            .await
            .unwrap();
    }
    assert_eq!(api.post_ids().await, vec![json!("007"), json!("7")]);

    let page = client
        .get(format!("{base}/scheduler"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("/scheduler/007/delete"));

    let page = client
        .post(format!("{base}/scheduler/007/delete"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Post deleted successfully!"));
    assert_eq!(api.post_ids().await, vec![json!("7")]);
}

#[tokio::test]
async fn scheduler_page_stays_responsive_while_a_create_is_pending() {
    let (api, gate) = spawn_fake_api_gated(StatsReply::Status(StatusCode::SERVICE_UNAVAILABLE)).await;
    let base = spawn_dashboard(&api.base_url).await;
    let client = Client::new();

    let submit = tokio::spawn({
        let client = client.clone();
        let url = format!("{base}/scheduler");
        async move {
            client
                .post(url)
                .form(&[
                    ("platform", "twitter"),
                    ("content", "slow one"),
                    ("scheduledDate", "2024-01-01T10:00:00Z"),
                ])
                .send()
                .await
                .unwrap()
                .text()
                .await
                .unwrap()
        }
    });

    let mut pending = false;
    for _ in 0..50 {
        let page = tokio::time::timeout(
            Duration::from_secs(2),
            client.get(format!("{base}/scheduler")).send(),
        )
        .await
        .expect("scheduler page blocked behind a pending create")
        .unwrap()
        .text()
        .await
        .unwrap();
        if page.contains("Scheduling post") {
            pending = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(pending, "pending create never showed on the page");
    assert_eq!(api.post_count().await, 0);

    gate.notify_one();
    let page = submit.await.unwrap();
    assert!(page.contains("Post scheduled successfully!"));
    assert!(page.contains("slow one"));
    assert!(!page.contains("Scheduling post"));
}

#[tokio::test]
async fn json_schedule_accepts_null_image() {
    let api = spawn_fake_api(StatsReply::Status(StatusCode::SERVICE_UNAVAILABLE)).await;
    let base = spawn_dashboard(&api.base_url).await;

    let created = Client::new()
        .post(format!("{base}/api/schedule"))
        .json(&json!({
            "platform": "instagram",
            "content": "no picture",
            "scheduledDate": "2024-01-01T10:00:00Z",
            "image": null
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = created.json().await.unwrap();
    assert_eq!(created["content"], json!("no picture"));
    assert!(created.get("image").is_none_or(Value::is_null));
    assert_eq!(api.post_count().await, 1);
}

#[tokio::test]
async fn json_schedule_routes_relay_the_api() {
    let api = spawn_fake_api(StatsReply::Status(StatusCode::SERVICE_UNAVAILABLE)).await;
    let base = spawn_dashboard(&api.base_url).await;
    let client = Client::new();

    let created = client
        .post(format!("{base}/api/schedule"))
        .json(&json!({
            "platform": "facebook",
            "content": "hello",
            "scheduledDate": "2024-01-01T10:00:00Z"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = created.json().await.unwrap();
    assert_eq!(created["id"], json!(1));

    let listed: Vec<Value> = client
        .get(format!("{base}/api/schedule"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, vec![created]);

    let removed = client
        .delete(format!("{base}/api/schedule/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);

    let missing = client
        .delete(format!("{base}/api/schedule/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_routes_pass_live_data_through() {
    let body = json!({
        "facebook": { "followers": 100, "engagement": 1.0, "posts": 1, "dailyStats": [5, 6] },
        "twitter": { "followers": 200, "engagement": 2.0, "tweets": 2, "dailyStats": [7, 8] }
    });
    let api = spawn_fake_api(StatsReply::Body(body.clone())).await;
    let base = spawn_dashboard(&api.base_url).await;
    let client = Client::new();

    let stats: Value = client
        .get(format!("{base}/api/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats, body);

    let dashboard: Value = client
        .get(format!("{base}/api/dashboard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(dashboard["total_followers"], json!(300));
    assert_eq!(dashboard["highest_engagement"]["platform"], json!("twitter"));

    let analytics: Value = client
        .get(format!("{base}/api/analytics"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(analytics["daily"]["labels"], json!(["Day 1", "Day 2"]));
}
