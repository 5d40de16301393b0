//! Server startup: shared state initialization.

use std::sync::Arc;

use tracing::{info, warn};

use jobboard_cms::CmsClient;
use jobboard_core::Config;

use crate::applications::ApplicationForwarder;
use crate::state::AppState;

/// Build `AppState` from config: CMS client, application webhook, matching policy.
pub fn build_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = CmsClient::new(&config.cms)?;
    info!(
        "CMS client ready (url: {}, collections: {} / {})",
        config.cms.base_url, config.cms.summaries_collection, config.cms.details_collection
    );

    let applications = ApplicationForwarder::from_config(&config.applications)?;
    if applications.is_none() {
        warn!("APPLICATION_WEBHOOK_URL not set; POST /api/applications will return 503");
    }

    if config.matching.strict {
        info!("Strict matching enabled: fallback matches are reported as 404");
    }

    Ok(Arc::new(AppState {
        source: Arc::new(client),
        applications,
        default_locale: config.cms.default_locale.clone(),
        strict_matching: config.matching.strict,
        config_summary: config.redacted_summary(),
    }))
}
