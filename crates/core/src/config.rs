use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{JobBoardError, Result};
use crate::locale::Locale;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u16(profile: &str, key: &str, default: u16) -> u16 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key) {
        Some(v) => matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub server: ServerConfig,
    pub cms: CmsConfig,
    pub applications: ApplicationsConfig,
    pub matching: MatchingConfig,
}

/// Well-known env keys that identify a profile when prefixed.
const PROFILE_MARKER_KEYS: &[&str] = &["CMS_URL", "CMS_TOKEN", "APPLICATION_WEBHOOK_URL"];

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `JOBBOARD_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Result<Self> {
        let profile = env_or("JOBBOARD_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Result<Self> {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Ok(Self {
            profile: p.to_string(),
            server: ServerConfig::from_env_profiled(p),
            cms: CmsConfig::from_env_profiled(p)?,
            applications: ApplicationsConfig::from_env_profiled(p),
            matching: MatchingConfig::from_env_profiled(p),
        })
    }

    /// Discover available profiles by scanning env vars for `{PREFIX}_{MARKER_KEY}` patterns.
    /// Always includes "default" (the unprefixed config).
    pub fn available_profiles() -> Vec<String> {
        let mut profiles = std::collections::BTreeSet::new();
        profiles.insert("default".to_string());

        for (key, _) in env::vars() {
            for marker in PROFILE_MARKER_KEYS {
                if let Some(prefix) = key.strip_suffix(&format!("_{}", marker)) {
                    if !prefix.is_empty()
                        && prefix.chars().all(|c| c.is_ascii_uppercase() || c == '_')
                    {
                        profiles.insert(prefix.to_string());
                    }
                }
            }
        }

        profiles.into_iter().collect()
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  server:       {}:{}", self.server.host, self.server.port);
        tracing::info!(
            "  cms:          url={}, locale={}, token={}",
            self.cms.base_url,
            self.cms.default_locale,
            if self.cms.token.is_some() { "set" } else { "(none)" }
        );
        tracing::info!(
            "  applications: webhook={}",
            if self.applications.is_configured() { "configured" } else { "(none)" }
        );
        tracing::info!("  matching:     strict={}", self.matching.strict);
    }

    /// Return a redacted view safe for API responses (no secrets).
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "server": { "host": self.server.host, "port": self.server.port },
            "cms": {
                "base_url": self.cms.base_url,
                "summaries_collection": self.cms.summaries_collection,
                "details_collection": self.cms.details_collection,
                "default_locale": self.cms.default_locale,
                "page_size": self.cms.page_size,
                "max_pages": self.cms.max_pages,
                "timeout_secs": self.cms.timeout_secs,
                "authenticated": self.cms.token.is_some(),
            },
            "applications": {
                "configured": self.applications.is_configured(),
                "timeout_secs": self.applications.timeout_secs,
            },
            "matching": { "strict": self.matching.strict },
        })
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            host: profiled_env_or(p, "HOST", "0.0.0.0"),
            port: profiled_env_u16(p, "PORT", 3001),
            cors_origin: profiled_env_or(p, "CORS_ORIGIN", "*"),
        }
    }
}

// ── CMS ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    pub base_url: String,
    /// API token sent as `Authorization: Bearer`.
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub summaries_collection: String,
    pub details_collection: String,
    pub default_locale: Locale,
    pub page_size: u32,
    pub max_pages: u32,
    pub timeout_secs: u32,
}

impl CmsConfig {
    fn from_env_profiled(p: &str) -> Result<Self> {
        let default_locale = profiled_env_or(p, "DEFAULT_LOCALE", "en")
            .parse()
            .map_err(|e| JobBoardError::Config(format!("DEFAULT_LOCALE: {e}")))?;
        Ok(Self {
            base_url: profiled_env_or(p, "CMS_URL", "http://localhost:1337")
                .trim_end_matches('/')
                .to_string(),
            token: profiled_env_opt(p, "CMS_TOKEN"),
            summaries_collection: profiled_env_or(p, "CMS_SUMMARIES_COLLECTION", "jobs"),
            details_collection: profiled_env_or(p, "CMS_DETAILS_COLLECTION", "job-details"),
            default_locale,
            page_size: profiled_env_u32(p, "CMS_PAGE_SIZE", 100).max(1),
            max_pages: profiled_env_u32(p, "CMS_MAX_PAGES", 20).max(1),
            timeout_secs: profiled_env_u32(p, "CMS_TIMEOUT_SECS", 10),
        })
    }
}

// ── Applications ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationsConfig {
    /// Workflow-automation webhook that receives submitted applications.
    pub webhook_url: Option<String>,
    #[serde(skip_serializing)]
    pub webhook_token: Option<String>,
    pub timeout_secs: u32,
}

impl ApplicationsConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            webhook_url: profiled_env_opt(p, "APPLICATION_WEBHOOK_URL"),
            webhook_token: profiled_env_opt(p, "APPLICATION_WEBHOOK_TOKEN"),
            timeout_secs: profiled_env_u32(p, "APPLICATION_WEBHOOK_TIMEOUT_SECS", 10),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }
}

// ── Matching ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Treat a first-record fallback as "not found" instead of serving it.
    pub strict: bool,
}

impl MatchingConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            strict: profiled_env_bool(p, "STRICT_MATCHING", false),
        }
    }
}
