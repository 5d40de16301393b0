//! Job listing and job detail endpoints.
//!
//! The detail endpoint is where summaries and details meet: both collections
//! are fetched for the locale and the detail is picked by the reconciler.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use jobboard_core::{reconcile, JobDetail, JobId, JobSummary, MatchStrategy};
use serde::Serialize;
use tracing::{debug, warn};

use crate::state::AppState;

use super::{api_error, cms_error, resolve_locale, ApiError, LocaleQuery};

#[derive(Debug, Serialize)]
pub struct JobSummaryView {
    #[serde(flatten)]
    pub summary: JobSummary,
    pub stack_tokens: Vec<String>,
}

impl From<JobSummary> for JobSummaryView {
    fn from(summary: JobSummary) -> Self {
        let stack_tokens = summary.stack_tokens().into_iter().map(String::from).collect();
        Self { summary, stack_tokens }
    }
}

#[derive(Debug, Serialize)]
pub struct JobDetailView {
    #[serde(flatten)]
    pub detail: JobDetail,
    pub stack_tokens: Vec<String>,
    pub requirement_lines: Vec<String>,
    pub benefit_lines: Vec<String>,
}

impl From<&JobDetail> for JobDetailView {
    fn from(detail: &JobDetail) -> Self {
        let owned = |lines: Vec<&str>| -> Vec<String> { lines.into_iter().map(String::from).collect() };
        Self {
            stack_tokens: owned(detail.stack_tokens()),
            requirement_lines: owned(detail.requirement_lines()),
            benefit_lines: owned(detail.benefit_lines()),
            detail: detail.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub requested_id: JobId,
    pub matched_by: MatchStrategy,
    pub job: JobDetailView,
}

pub async fn jobs_list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Vec<JobSummaryView>>, ApiError> {
    let locale = resolve_locale(&state, &query)?;
    let summaries = state.source.summaries(&locale).await.map_err(cms_error)?;
    debug!(%locale, count = summaries.len(), "job list served");
    Ok(Json(summaries.into_iter().map(JobSummaryView::from).collect()))
}

pub async fn job_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<JobId>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<JobDetailResponse>, ApiError> {
    let locale = resolve_locale(&state, &query)?;

    let (summaries, details) = tokio::join!(
        state.source.summaries(&locale),
        state.source.details(&locale)
    );
    let summaries = summaries.map_err(cms_error)?;
    let details = details.map_err(cms_error)?;

    let Some(matched) = reconcile(id, &summaries, &details) else {
        return Err(api_error(
            StatusCode::NOT_FOUND,
            format!("no job details available for locale {locale}"),
        ));
    };

    if matched.strategy.is_heuristic() {
        warn!(
            requested_id = id,
            detail_id = matched.detail.id,
            strategy = %matched.strategy,
            %locale,
            "job detail matched heuristically"
        );
    }
    if state.strict_matching && matched.strategy == MatchStrategy::Fallback {
        return Err(api_error(
            StatusCode::NOT_FOUND,
            format!("job {id} not found"),
        ));
    }

    Ok(Json(JobDetailResponse {
        requested_id: id,
        matched_by: matched.strategy,
        job: JobDetailView::from(matched.detail),
    }))
}
