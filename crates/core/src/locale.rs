use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JobBoardError;

/// A CMS content locale such as `en`, `de` or `pt-BR`.
///
/// The CMS keeps one collection per locale, so the tag is passed through to
/// every collection request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locale {
    type Err = JobBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut parts = s.split('-');
        let language_ok = parts
            .next()
            .map(|lang| (2..=3).contains(&lang.len()) && lang.chars().all(|c| c.is_ascii_alphabetic()))
            .unwrap_or(false);
        let subtags_ok = parts.all(|tag| {
            (2..=8).contains(&tag.len()) && tag.chars().all(|c| c.is_ascii_alphanumeric())
        });
        if language_ok && subtags_ok {
            Ok(Self(s.to_string()))
        } else {
            Err(JobBoardError::InvalidLocale(s.to_string()))
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = JobBoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
