//! Job applications: validation and forwarding to the workflow webhook.
//!
//! Applications are not stored here. A validated application is stamped
//! with an id and a timestamp and POSTed as JSON to the configured
//! workflow-automation endpoint, which owns everything after that.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jobboard_cms::truncate_body;
use jobboard_core::config::ApplicationsConfig;
use jobboard_core::JobId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw application form as submitted by the browser.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationInput {
    pub job_id: JobId,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// A validated application, as delivered to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub job_id: JobId,
    pub job_title: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub locale: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ApplicationInput {
    /// Check required fields and normalize whitespace. Returns every problem
    /// found, not just the first.
    pub fn validate(self) -> Result<Application, Vec<String>> {
        let mut problems = Vec::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            problems.push("name is required".to_string());
        }

        let email = self.email.trim().to_string();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => problems.push(format!("email {email:?} is not a valid address")),
        }

        let resume_url = non_blank(self.resume_url);
        if let Some(resume) = &resume_url {
            match url::Url::parse(resume) {
                Ok(u) if matches!(u.scheme(), "http" | "https") => {}
                _ => problems.push(format!("resume_url {resume:?} must be an http(s) URL")),
            }
        }

        let locale = non_blank(self.locale);
        if let Some(tag) = &locale {
            if tag.parse::<jobboard_core::Locale>().is_err() {
                problems.push(format!("locale {tag:?} is not a valid locale"));
            }
        }

        if !problems.is_empty() {
            return Err(problems);
        }

        Ok(Application {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            job_id: self.job_id,
            job_title: non_blank(self.job_title),
            name,
            email,
            phone: non_blank(self.phone),
            cover_letter: non_blank(self.cover_letter),
            resume_url,
            locale,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Delivers applications as JSON to the workflow webhook.
#[derive(Debug)]
pub struct ApplicationForwarder {
    url: url::Url,
    token: Option<String>,
    client: reqwest::Client,
}

impl ApplicationForwarder {
    /// Returns `Ok(None)` when no webhook is configured.
    pub fn from_config(config: &ApplicationsConfig) -> Result<Option<Self>, ForwardError> {
        let Some(raw) = &config.webhook_url else {
            return Ok(None);
        };
        let url = url::Url::parse(raw)
            .map_err(|e| ForwardError::Config(format!("invalid webhook URL {raw:?}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()?;
        Ok(Some(Self {
            url,
            token: config.webhook_token.clone(),
            client,
        }))
    }

    pub async fn forward(&self, application: &Application) -> Result<(), ForwardError> {
        let mut request = self.client.post(self.url.clone()).json(application);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = truncate_body(
                response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<unreadable body>".to_string()),
            );
            tracing::warn!(
                url = %self.url,
                %status,
                application_id = %application.id,
                "application webhook returned non-2xx status"
            );
            return Err(ForwardError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            application_id = %application.id,
            job_id = application.job_id,
            "application forwarded"
        );
        Ok(())
    }
}
