//! Web routes.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, IntoResponse, Json, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use jobdesk_api::{FilterField, FilterState, Job, JobsClient};
use jobdesk_core::{
    DeleteOutcome, DeleteStrategy, FormField, FormMode, InlineDelete, PreAnswered, PromptDelete,
    SubmitOutcome,
};

use crate::error::WebError;
use crate::render;
use crate::session::Session;

/// Shared state for the web server.
pub struct AppState {
    pub client: JobsClient,
    pub session: Mutex<Session>,
}

/// Create the web router.
pub fn create_router(client: JobsClient, static_dir: Option<&str>) -> Router {
    let state = Arc::new(AppState {
        session: Mutex::new(Session::new(client.clone())),
        client,
    });

    let mut router = Router::new()
        .route("/", get(index))
        // Filters
        .route("/filters", post(apply_filters))
        .route("/filters/reset", post(reset_filters))
        .route("/filters/clear/{field}", post(clear_filter))
        .route("/filters/advanced", post(toggle_advanced))
        // Add / edit
        .route("/jobs/new", get(job_new))
        .route("/jobs/{id}/edit", get(job_edit))
        .route("/back", get(back_to_list))
        .route("/jobs", post(create_job))
        .route("/jobs/{id}", post(update_job))
        // Delete
        .route("/jobs/{id}/delete", get(delete_panel).post(prompt_delete))
        .route("/jobs/{id}/delete/confirm", post(confirm_delete))
        .route("/jobs/{id}/delete/cancel", post(cancel_delete))
        // Other
        .route("/health", get(health))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
}

async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    if !session.list().is_mounted() {
        info!("mounting job desk");
        session.mount().await;
    }
    session.close_delete_panels();
    Html(render::desk_page(&mut session))
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let api_ok = state.client.health_check().await.is_ok();

    Json(json!({
        "status": if api_ok { "ok" } else { "degraded" },
        "api_connected": api_ok,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Re-fetch the list if the filters changed.
///
/// A desk that was never mounted mounts here, fetching for the filters just
/// set. Otherwise the session lock is released while the request is in
/// flight; a newer fetch started meanwhile wins and this result is dropped.
async fn sync_list(state: &AppState) {
    let pending = {
        let mut session = state.session.lock().await;
        if !session.list().is_mounted() {
            info!("mounting job desk");
            session.mount().await;
        }
        let changed = session.list.take_filter_change();
        changed.map(|filters| session.list.begin_fetch(filters))
    };

    if let Some(pending) = pending {
        let done = pending.run().await;
        let applied = state.session.lock().await.list.finish_fetch(done);
        debug!(applied, "filtered job list");
    }
}

#[derive(Deserialize)]
struct FilterForm {
    search: Option<String>,
    job_type: Option<String>,
    location: Option<String>,
    tag: Option<String>,
    sort: Option<String>,
}

impl FilterForm {
    /// Overlay the submitted fields onto `current`. Fields the browser did
    /// not send (collapsed or disabled selects) keep their value.
    fn merge_into(self, mut current: FilterState) -> FilterState {
        let submitted = [
            (FilterField::Search, self.search),
            (FilterField::JobType, self.job_type),
            (FilterField::Location, self.location),
            (FilterField::Tag, self.tag),
            (FilterField::Sort, self.sort),
        ];
        for (field, value) in submitted {
            if let Some(value) = value {
                *current.get_mut(field) = value;
            }
        }
        current
    }
}

async fn apply_filters(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FilterForm>,
) -> impl IntoResponse {
    {
        let mut session = state.session.lock().await;
        let next = form.merge_into(session.filters.state());
        session.filters.replace(next);
    }
    sync_list(&state).await;
    Redirect::to("/")
}

async fn reset_filters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.session.lock().await.filters.reset();
    sync_list(&state).await;
    Redirect::to("/")
}

async fn clear_filter(
    State(state): State<Arc<AppState>>,
    Path(field): Path<String>,
) -> Result<Redirect, WebError> {
    let field: FilterField = field.parse().map_err(WebError::BadRequest)?;
    state.session.lock().await.filters.clear(field);
    sync_list(&state).await;
    Ok(Redirect::to("/"))
}

async fn toggle_advanced(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.session.lock().await.filters.toggle_advanced();
    Redirect::to("/")
}

async fn job_new(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.session.lock().await.start_add();
    Redirect::to("/")
}

async fn job_edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, WebError> {
    let mut session = state.session.lock().await;
    let job = session.list.open_edit(id).await?;
    session.start_edit(&job);
    Ok(Redirect::to("/"))
}

async fn back_to_list(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.session.lock().await.back_to_list();
    Redirect::to("/")
}

#[derive(Deserialize)]
struct JobFormInput {
    title: String,
    company: String,
    location: String,
    job_type: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    posting_date: String,
}

impl JobFormInput {
    fn fields(self) -> [(FormField, String); 6] {
        [
            (FormField::Title, self.title),
            (FormField::Company, self.company),
            (FormField::Location, self.location),
            (FormField::JobType, self.job_type),
            (FormField::Tags, self.tags),
            (FormField::PostingDate, self.posting_date),
        ]
    }
}

async fn create_job(
    State(state): State<Arc<AppState>>,
    Form(input): Form<JobFormInput>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    if !matches!(
        session.form.as_ref().map(|f| f.mode()),
        Some(FormMode::Create)
    ) {
        session.start_add();
    }
    submit_form(&mut session, input).await;
    Redirect::to("/")
}

async fn update_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(input): Form<JobFormInput>,
) -> Result<Redirect, WebError> {
    let mut session = state.session.lock().await;
    if session.form.as_ref().map(|f| f.mode()) != Some(FormMode::Edit { id }) {
        let job = session.list.open_edit(id).await?;
        session.start_edit(&job);
    }
    submit_form(&mut session, input).await;
    Ok(Redirect::to("/"))
}

async fn submit_form(session: &mut Session, input: JobFormInput) {
    let Some(form) = session.form.as_mut() else {
        return;
    };
    for (field, value) in input.fields() {
        form.set_field(field, value);
    }

    match form.submit().await {
        SubmitOutcome::Saved(job) => {
            let message = form.success_message().map(str::to_string);
            session.list.on_job_saved(job);
            session.form = None;
            if let Some(message) = message {
                session.set_notice(message);
            }
        }
        SubmitOutcome::Invalid => debug!("job form has validation errors"),
        SubmitOutcome::Failed(message) => warn!(error = %message, "failed to save job"),
        SubmitOutcome::Busy => debug!("job form submit already in flight"),
    }
}

/// Find a job in the loaded list, or fetch it.
async fn lookup_job(state: &AppState, session: &Session, id: i64) -> Result<Job, WebError> {
    match session.job(id) {
        Some(job) => Ok(job.clone()),
        None => Ok(state.client.get_job(id).await?),
    }
}

#[derive(Deserialize)]
struct PromptAnswer {
    #[serde(default)]
    confirmed: String,
}

async fn prompt_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(answer): Form<PromptAnswer>,
) -> Result<Redirect, WebError> {
    let mut session = state.session.lock().await;
    let job = lookup_job(&state, &session, id).await?;

    let mut control = PromptDelete::new(job, PreAnswered::new(answer.confirmed == "yes"));
    match control.activate(&state.client).await {
        DeleteOutcome::Deleted(id) => session.forget_job(id),
        DeleteOutcome::Failed(_) => {
            let alerts = control.confirmation().take_alerts();
            session.push_alerts(alerts);
        }
        outcome => debug!(?outcome, id, "delete not performed"),
    }
    Ok(Redirect::to("/"))
}

async fn delete_panel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let mut session = state.session.lock().await;
    if !session.inline_deletes.contains_key(&id) {
        let job = lookup_job(&state, &session, id).await?;
        session.inline_deletes.insert(id, InlineDelete::new(job));
    }

    let Some(panel) = session.inline_deletes.get_mut(&id) else {
        return Err(WebError::NotFound(format!("job {id}")));
    };
    if !panel.is_open() {
        panel.open();
    }
    let panel = panel.clone();

    Ok(Html(render::delete_panel_page(&session, &panel)))
}

async fn confirm_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    let Some(panel) = session.inline_deletes.get_mut(&id) else {
        return Redirect::to("/");
    };

    match panel.confirm(&state.client).await {
        DeleteOutcome::Deleted(id) => {
            session.forget_job(id);
            Redirect::to("/")
        }
        DeleteOutcome::Failed(_) | DeleteOutcome::Busy => {
            Redirect::to(&format!("/jobs/{id}/delete"))
        }
        _ => Redirect::to("/"),
    }
}

async fn cancel_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut session = state.session.lock().await;
    let outcome = session.inline_deletes.get_mut(&id).map(|panel| panel.cancel());
    if outcome == Some(DeleteOutcome::Busy) {
        return Redirect::to(&format!("/jobs/{id}/delete"));
    }
    session.inline_deletes.remove(&id);
    Redirect::to("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn job_json(id: i64, title: &str) -> Value {
        json!({
            "id": id,
            "title": title,
            "company": "Aon",
            "location": "Remote",
            "job_type": "Full-time",
            "tags": ["Life", "Pension"],
            "posting_date": "2024-01-15T00:00:00"
        })
    }

    /// Backend with a passing health check, empty lookups and the given list.
    async fn backend(jobs: Vec<Value>) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&server)
            .await;
        for lookup in ["job-types", "locations", "tags"] {
            Mock::given(method("GET"))
                .and(path(format!("/api/jobs/{lookup}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/api/jobs"))
            .and(query_param_is_missing("tag"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": jobs})))
            .mount(&server)
            .await;
        server
    }

    fn router(server: &MockServer) -> Router {
        create_router(JobsClient::new(format!("{}/api", server.uri())), None)
    }

    async fn get_page(router: &Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn post_form(router: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
        let response = router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        (response.status(), location)
    }

    #[tokio::test]
    async fn test_index_mounts_and_lists_jobs() {
        let server = backend(vec![job_json(1, "Senior Actuary"), job_json(2, "Pricing Analyst")]).await;
        let router = router(&server);

        let (status, html) = get_page(&router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Job Listings (2)"));
        assert!(html.contains("Senior Actuary"));
        assert!(html.contains("Posted: Jan 15, 2024"));
        assert!(html.contains("API: Connected"));
    }

    #[tokio::test]
    async fn test_index_shows_empty_state() {
        let server = backend(vec![]).await;
        let (_, html) = get_page(&router(&server), "/").await;

        assert!(html.contains("Job Listings (0)"));
        assert!(html.contains("No jobs found."));
    }

    #[tokio::test]
    async fn test_filters_trigger_filtered_fetch() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("GET"))
            .and(path("/api/jobs"))
            .and(query_param("tag", "Pension"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": [job_json(3, "Pension Actuary")]})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;

        let (status, location) = post_form(&router, "/filters", "tag=Pension").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/"));

        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Pension Actuary"));
        assert!(!html.contains("Senior Actuary"));
        assert!(html.contains("Tag: Pension"));
        assert!(html.contains("More Filters (1)"));

        // Clearing the chip goes back to the unfiltered list.
        post_form(&router, "/filters/clear/tag", "").await;
        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Senior Actuary"));
    }

    #[tokio::test]
    async fn test_filter_before_first_visit_is_kept() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("GET"))
            .and(path("/api/jobs"))
            .and(query_param("tag", "Pension"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": [job_json(3, "Pension Actuary")]})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let router = router(&server);

        let (status, _) = post_form(&router, "/filters", "tag=Pension").await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Pension Actuary"));
        assert!(!html.contains("Senior Actuary"));
        assert!(html.contains("Tag: Pension"));
    }

    #[tokio::test]
    async fn test_clear_unknown_filter_is_bad_request() {
        let server = backend(vec![]).await;
        let (status, _) = post_form(&router(&server), "/filters/clear/salary", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_job_form_shows_errors_without_request() {
        let server = backend(vec![]).await;
        Mock::given(method("POST"))
            .and(path("/api/jobs"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;
        get_page(&router, "/jobs/new").await;

        post_form(
            &router,
            "/jobs",
            "title=&company=Aon&location=&job_type=Full-time&tags=&posting_date=",
        )
        .await;

        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Add New Job"));
        assert!(html.contains("Job title is required"));
        assert!(html.contains("Location is required"));
        assert!(!html.contains("Company name is required"));
    }

    #[tokio::test]
    async fn test_create_job_prepends_and_returns_to_list() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("POST"))
            .and(path("/api/jobs"))
            .and(body_json(json!({
                "title": "Pricing Analyst",
                "company": "Aon",
                "location": "Remote",
                "job_type": "Contract",
                "tags": ["Life", "Health"]
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"data": job_json(9, "Pricing Analyst")})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;

        post_form(
            &router,
            "/jobs",
            "title=Pricing+Analyst&company=Aon&location=Remote&job_type=Contract&tags=Life%2C+Health&posting_date=",
        )
        .await;

        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Job created successfully!"));
        assert!(html.contains("Job Listings (2)"));
        let new_pos = html.find("Pricing Analyst").unwrap();
        let old_pos = html.find("Senior Actuary").unwrap();
        assert!(new_pos < old_pos);
    }

    #[tokio::test]
    async fn test_edit_and_back_leaves_list_unchanged() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        let router = router(&server);
        get_page(&router, "/").await;

        get_page(&router, "/jobs/1/edit").await;
        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Edit Job"));
        assert!(html.contains(r#"value="Life, Pension""#));
        assert!(html.contains(r#"value="2024-01-15""#));

        get_page(&router, "/back").await;
        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Job Listings (1)"));
    }

    #[tokio::test]
    async fn test_prompt_delete_declined_sends_nothing() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("DELETE"))
            .and(path("/api/jobs/1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;

        post_form(&router, "/jobs/1/delete", "confirmed=no").await;

        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Senior Actuary"));
    }

    #[tokio::test]
    async fn test_prompt_delete_failure_raises_alert() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("DELETE"))
            .and(path("/api/jobs/1"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Job not found"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;

        post_form(&router, "/jobs/1/delete", "confirmed=yes").await;

        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains(r#"window.alert("Failed to delete job: Job not found")"#));
        assert!(html.contains("Senior Actuary"));

        // The alert is raised once.
        let (_, html) = get_page(&router, "/").await;
        assert!(!html.contains("window.alert("));
    }

    #[tokio::test]
    async fn test_inline_delete_confirm_removes_job() {
        let server = backend(vec![job_json(1, "Senior Actuary"), job_json(2, "Pricing Analyst")]).await;
        Mock::given(method("DELETE"))
            .and(path("/api/jobs/1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;

        let (status, html) = get_page(&router, "/jobs/1/delete").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Confirm Delete"));
        assert!(html.contains("Yes, Delete"));

        let (_, location) = post_form(&router, "/jobs/1/delete/confirm", "").await;
        assert_eq!(location.as_deref(), Some("/"));

        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Job Listings (1)"));
        assert!(!html.contains("Senior Actuary"));
    }

    #[tokio::test]
    async fn test_inline_delete_failure_keeps_panel_open() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("DELETE"))
            .and(path("/api/jobs/1"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Database locked"})))
            .expect(1)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;
        get_page(&router, "/jobs/1/delete").await;

        let (_, location) = post_form(&router, "/jobs/1/delete/confirm", "").await;
        assert_eq!(location.as_deref(), Some("/jobs/1/delete"));

        let (_, html) = get_page(&router, "/jobs/1/delete").await;
        assert!(html.contains("Database locked"));
    }

    #[tokio::test]
    async fn test_prompt_delete_drops_open_panel() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("DELETE"))
            .and(path("/api/jobs/1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/jobs/1"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Job not found"})),
            )
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;
        get_page(&router, "/jobs/1/delete").await;

        post_form(&router, "/jobs/1/delete", "confirmed=yes").await;

        let (status, _) = get_page(&router, "/jobs/1/delete").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_leaving_delete_panel_resets_it() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("DELETE"))
            .and(path("/api/jobs/1"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Database locked"})))
            .expect(1)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;
        get_page(&router, "/jobs/1/delete").await;
        post_form(&router, "/jobs/1/delete/confirm", "").await;

        get_page(&router, "/").await;

        let (status, html) = get_page(&router, "/jobs/1/delete").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Confirm Delete"));
        assert!(!html.contains("Database locked"));
    }

    #[tokio::test]
    async fn test_inline_delete_cancel_sends_nothing() {
        let server = backend(vec![job_json(1, "Senior Actuary")]).await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let router = router(&server);
        get_page(&router, "/").await;
        get_page(&router, "/jobs/1/delete").await;

        let (_, location) = post_form(&router, "/jobs/1/delete/cancel", "").await;
        assert_eq!(location.as_deref(), Some("/"));

        let (_, html) = get_page(&router, "/").await;
        assert!(html.contains("Senior Actuary"));
    }

    #[tokio::test]
    async fn test_health_reports_version() {
        let server = backend(vec![]).await;
        let (status, body) = get_page(&router(&server), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
