use std::collections::HashMap;

use async_trait::async_trait;
use jobboard_core::{JobDetail, JobSummary, Locale};

use crate::error::CmsError;

/// Anything that can serve the per-locale job collections.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// The summary collection (list/card view records) for `locale`.
    async fn summaries(&self, locale: &Locale) -> Result<Vec<JobSummary>, CmsError>;

    /// The detail collection (job page records) for `locale`.
    async fn details(&self, locale: &Locale) -> Result<Vec<JobDetail>, CmsError>;

    /// Human-readable name for logs (e.g., "cms", "static").
    fn source_name(&self) -> &str;
}

/// In-memory collections keyed by locale.
#[derive(Debug, Default, Clone)]
pub struct StaticSource {
    collections: HashMap<Locale, (Vec<JobSummary>, Vec<JobDetail>)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(
        mut self,
        locale: Locale,
        summaries: Vec<JobSummary>,
        details: Vec<JobDetail>,
    ) -> Self {
        self.collections.insert(locale, (summaries, details));
        self
    }

    fn get(&self, locale: &Locale) -> Result<&(Vec<JobSummary>, Vec<JobDetail>), CmsError> {
        self.collections
            .get(locale)
            .ok_or_else(|| CmsError::UnknownLocale(locale.to_string()))
    }
}

#[async_trait]
impl JobSource for StaticSource {
    async fn summaries(&self, locale: &Locale) -> Result<Vec<JobSummary>, CmsError> {
        Ok(self.get(locale)?.0.clone())
    }

    async fn details(&self, locale: &Locale) -> Result<Vec<JobDetail>, CmsError> {
        Ok(self.get(locale)?.1.clone())
    }

    fn source_name(&self) -> &str {
        "static"
    }
}
