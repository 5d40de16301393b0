//! reqwest client for a Strapi-style CMS.
//!
//! Each collection is read with
//! `GET {base_url}/api/{collection}?locale=..&pagination[page]=N&pagination[pageSize]=M`,
//! one page at a time, until the pagination metadata says we're done or
//! `max_pages` is reached.

use std::time::Duration;

use async_trait::async_trait;
use jobboard_core::config::CmsConfig;
use jobboard_core::{JobDetail, JobSummary, Locale};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::envelope::{decode_items, Envelope};
use crate::error::{truncate_body, CmsError};
use crate::source::JobSource;

pub struct CmsClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    summaries_collection: String,
    details_collection: String,
    page_size: u32,
    max_pages: u32,
}

impl CmsClient {
    pub fn new(config: &CmsConfig) -> Result<Self, CmsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            summaries_collection: config.summaries_collection.clone(),
            details_collection: config.details_collection.clone(),
            page_size: config.page_size.max(1),
            max_pages: config.max_pages.max(1),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/api/{}", self.base_url, collection)
    }

    async fn fetch_page(
        &self,
        collection: &str,
        locale: &Locale,
        page: u32,
    ) -> Result<Envelope, CmsError> {
        let url = self.collection_url(collection);
        debug!(%url, %locale, page, "CMS page request");

        let page_param = page.to_string();
        let size_param = self.page_size.to_string();
        let mut request = self.client.get(&url).query(&[
            ("locale", locale.as_str()),
            ("pagination[page]", page_param.as_str()),
            ("pagination[pageSize]", size_param.as_str()),
        ]);
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
            warn!(%url, %status, "CMS returned non-2xx status");
            return Err(CmsError::Status {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| CmsError::Parse(format!("{url}: {e}")))
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
        locale: &Locale,
    ) -> Result<Vec<T>, CmsError> {
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let envelope = self.fetch_page(collection, locale, page).await?;
            let received = envelope.data.len();
            let page_count = envelope.pagination().and_then(|p| p.page_count);
            records.extend(decode_items::<T>(envelope.data)?);

            let done = match page_count {
                Some(count) => page >= count,
                None => received < self.page_size as usize,
            };
            if done {
                break;
            }
            if page >= self.max_pages {
                warn!(
                    collection,
                    %locale,
                    max_pages = self.max_pages,
                    "CMS collection truncated at page limit"
                );
                break;
            }
            page += 1;
        }

        debug!(collection, %locale, count = records.len(), "CMS collection fetched");
        Ok(records)
    }
}

#[async_trait]
impl JobSource for CmsClient {
    async fn summaries(&self, locale: &Locale) -> Result<Vec<JobSummary>, CmsError> {
        self.fetch_collection(&self.summaries_collection, locale).await
    }

    async fn details(&self, locale: &Locale) -> Result<Vec<JobDetail>, CmsError> {
        self.fetch_collection(&self.details_collection, locale).await
    }

    fn source_name(&self) -> &str {
        "cms"
    }
}
