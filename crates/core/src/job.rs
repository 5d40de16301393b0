//! Job records as served by the CMS.
//!
//! Two independently edited collections describe the same jobs: a lightweight
//! summary list for card views and a detail list for the job page. Both are
//! read-only snapshots for the lifetime of one request.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the CMS.
pub type JobId = i64;

/// A job as shown in list/card views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Category or seniority label ("Senior", "Design", ...).
    #[serde(default, alias = "category", deserialize_with = "null_as_empty")]
    pub level: String,
    /// Location or employment type ("Remote", "Berlin / Hybrid", ...).
    #[serde(default, alias = "type", deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub salary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hours: String,
    /// Space-delimited technology tokens.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stack: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Full job content for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: JobId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(default, alias = "type", deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stack: String,
    #[serde(default, alias = "category", deserialize_with = "null_as_empty")]
    pub level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Newline-delimited requirement bullets.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requirements: String,
    /// Newline-delimited benefit bullets.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub benefits: String,
}

impl JobSummary {
    pub fn stack_tokens(&self) -> Vec<&str> {
        stack_tokens(&self.stack)
    }
}

impl JobDetail {
    pub fn stack_tokens(&self) -> Vec<&str> {
        stack_tokens(&self.stack)
    }

    pub fn requirement_lines(&self) -> Vec<&str> {
        bullet_lines(&self.requirements)
    }

    pub fn benefit_lines(&self) -> Vec<&str> {
        bullet_lines(&self.benefits)
    }
}

/// Split a space-delimited stack string into its tokens.
pub fn stack_tokens(stack: &str) -> Vec<&str> {
    stack.split_ascii_whitespace().collect()
}

/// Split newline-delimited text into trimmed, non-empty lines with any leading
/// bullet marker removed.
pub fn bullet_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix(['-', '*', '•'])
                .map(str::trim_start)
                .unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// CMS fields are frequently `null` rather than absent.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_tokens_ignores_extra_whitespace() {
        assert_eq!(stack_tokens("  Rust  Go\tSQL "), vec!["Rust", "Go", "SQL"]);
        assert!(stack_tokens("   ").is_empty());
    }

    #[test]
    fn bullet_lines_strip_markers_and_blanks() {
        let text = "- Five years of Rust\n\n* Async experience  \n•Kubernetes\nPlain line\n-\n";
        assert_eq!(
            bullet_lines(text),
            vec!["Five years of Rust", "Async experience", "Kubernetes", "Plain line"]
        );
    }

    #[test]
    fn summary_accepts_nulls_and_aliases() {
        let json = serde_json::json!({
            "id": 3,
            "title": "Backend Engineer",
            "category": "Senior",
            "type": "Remote",
            "salary": null,
            "stack": "Rust Postgres"
        });
        let summary: JobSummary = serde_json::from_value(json).unwrap();
        assert_eq!(summary.level, "Senior");
        assert_eq!(summary.location, "Remote");
        assert_eq!(summary.salary, "");
        assert_eq!(summary.hours, "");
        assert_eq!(summary.description, None);
        assert_eq!(summary.stack_tokens(), vec!["Rust", "Postgres"]);
    }

    #[test]
    fn detail_lines_split_requirements_and_benefits() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Platform Engineer",
            "company": "Acme",
            "requirements": "Rust\nLinux",
            "benefits": "- Remote\r\n- Budget"
        });
        let detail: JobDetail = serde_json::from_value(json).unwrap();
        assert_eq!(detail.requirement_lines(), vec!["Rust", "Linux"]);
        assert_eq!(detail.benefit_lines(), vec!["Remote", "Budget"]);
        assert_eq!(detail.description, "");
    }
}
