use std::sync::Arc;

use jobboard_cms::JobSource;
use jobboard_core::Locale;

use crate::applications::ApplicationForwarder;

pub type SharedSource = Arc<dyn JobSource>;

pub struct AppState {
    pub source: SharedSource,
    /// `None` when no application webhook is configured.
    pub applications: Option<ApplicationForwarder>,
    pub default_locale: Locale,
    /// Refuse to serve a first-record fallback as a job detail.
    pub strict_matching: bool,
    /// Redacted config for `GET /config`.
    pub config_summary: serde_json::Value,
}
