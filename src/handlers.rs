use crate::client::ScheduleStore;
use crate::errors::AppError;
use crate::models::{PostId, ScheduledPost, StatsSnapshot};
use crate::scheduler::DraftForm;
use crate::state::AppState;
use crate::stats::{build_analytics, build_summary, AnalyticsResponse, DashboardSummary};
use crate::ui::{render_dashboard, render_scheduler};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.client.get_stats().await;
    let updated = Local::now().date_naive().to_string();
    Html(render_dashboard(&build_summary(&snapshot), &updated))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.client.get_stats().await)
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let snapshot = state.client.get_stats().await;
    Json(build_summary(&snapshot))
}

pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let snapshot = state.client.get_stats().await;
    Json(build_analytics(&snapshot))
}

// The session lock is never held across a remote call.

pub async fn scheduler_page(State(state): State<AppState>) -> Html<String> {
    let result = state.client.list().await;
    let mut session = state.scheduler.lock().await;
    // A failed refresh is rendered from the session's load error.
    let _ = session.apply_list(result);
    let notice = session.take_notice();
    Html(render_scheduler(
        session.posts(),
        session.draft(),
        session.phase(),
        notice.as_ref(),
        session.load_error(),
    ))
}

pub async fn scheduler_submit(
    State(state): State<AppState>,
    Form(draft): Form<DraftForm>,
) -> Redirect {
    let post = {
        let mut session = state.scheduler.lock().await;
        session.set_draft(draft);
        session.begin_submit()
    };
    if let Ok(post) = post {
        let result = state.client.create(&post).await;
        let _ = state.scheduler.lock().await.finish_submit(result);
    }
    Redirect::to("/scheduler")
}

pub async fn scheduler_delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let id = PostId::from_path(&id);
    state.scheduler.lock().await.begin_delete();
    let result = state.client.delete(&id).await;
    let _ = state.scheduler.lock().await.finish_delete(&id, result);
    Redirect::to("/scheduler")
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<ScheduledPost>>, AppError> {
    Ok(Json(state.client.list().await?))
}

pub async fn create_post(
    State(state): State<AppState>,
    Json(draft): Json<DraftForm>,
) -> Result<(StatusCode, Json<ScheduledPost>), AppError> {
    let post = draft.validate()?;
    let created = state.client.create(&post).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.client.delete(&PostId::from_path(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
