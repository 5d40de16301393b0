//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! Shared error types and locale resolution live here in mod.rs.

mod applications;
mod health;
mod jobs;

use axum::http::StatusCode;
use axum::Json;
use jobboard_cms::CmsError;
use jobboard_core::Locale;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ── Shared types ─────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            details: Vec::new(),
        }),
    )
}

/// Map a CMS failure to the status a client should see.
pub(crate) fn cms_error(err: CmsError) -> ApiError {
    tracing::error!(error = %err, "CMS request failed");
    match err {
        CmsError::UnknownLocale(locale) => {
            api_error(StatusCode::NOT_FOUND, format!("no content for locale {locale}"))
        }
        other => api_error(StatusCode::BAD_GATEWAY, other.to_string()),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

/// The requested locale, or the configured default when omitted.
pub(crate) fn resolve_locale(state: &AppState, query: &LocaleQuery) -> Result<Locale, ApiError> {
    match query.locale.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        Some(tag) => tag
            .parse()
            .map_err(|e: jobboard_core::JobBoardError| api_error(StatusCode::BAD_REQUEST, e.to_string())),
        None => Ok(state.default_locale.clone()),
    }
}

// ── Re-exports ───────────────────────────────────────────────────
// Flat `api::foo` paths used by router.rs.

pub use applications::submit_application;
pub use health::{config, health};
pub use jobs::{job_detail, jobs_list};
