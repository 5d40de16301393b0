//! Summary → detail reconciliation.
//!
//! The CMS stores summaries and details as separate per-locale collections
//! whose ids and ordering drift apart as editors translate and rework
//! content. [`reconcile`] picks the detail record that best represents a
//! summary by trying, in order: same id, same normalized title, same
//! position, title containment, and finally the first detail record.
//!
//! The last rule means a non-empty detail list always yields *something*.
//! Callers that care about correctness should inspect [`Reconciled::strategy`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::job::{JobDetail, JobId, JobSummary};


/// Which rule selected the detail record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Id,
    Title,
    Position,
    Substring,
    Fallback,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::Id => "id",
            MatchStrategy::Title => "title",
            MatchStrategy::Position => "position",
            MatchStrategy::Substring => "substring",
            MatchStrategy::Fallback => "fallback",
        }
    }

    /// `true` for every rule other than a direct id hit.
    pub fn is_heuristic(self) -> bool {
        self != MatchStrategy::Id
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chosen detail record and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciled<'a> {
    pub detail: &'a JobDetail,
    pub strategy: MatchStrategy,
}

/// Find the detail record for `target_id`.
///
/// Returns `None` only when `details` is empty.
pub fn reconcile<'a>(
    target_id: JobId,
    summaries: &[JobSummary],
    details: &'a [JobDetail],
) -> Option<Reconciled<'a>> {
    let hit = |detail: &'a JobDetail, strategy| Some(Reconciled { detail, strategy });

    if let Some(detail) = details.iter().find(|d| d.id == target_id) {
        return hit(detail, MatchStrategy::Id);
    }

    let Some(position) = summaries.iter().position(|s| s.id == target_id) else {
        return details.first().and_then(|d| hit(d, MatchStrategy::Fallback));
    };
    let title = normalize_title(&summaries[position].title);

    // An empty title is contained in every other title.
    if !title.is_empty() {
        if let Some(detail) = details.iter().find(|d| normalize_title(&d.title) == title) {
            return hit(detail, MatchStrategy::Title);
        }
    }

    if let Some(detail) = details.get(position) {
        return hit(detail, MatchStrategy::Position);
    }

    if !title.is_empty() {
        let contains = details.iter().find(|d| {
            let other = normalize_title(&d.title);
            !other.is_empty() && (other.contains(&title) || title.contains(&other))
        });
        if let Some(detail) = contains {
            return hit(detail, MatchStrategy::Substring);
        }
    }

    details.first().and_then(|d| hit(d, MatchStrategy::Fallback))
}

/// Trim and lowercase a title for comparison.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}
