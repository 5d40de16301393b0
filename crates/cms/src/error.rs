/// Errors raised while fetching or decoding CMS collections.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS returned {status} for {url}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("failed to parse CMS response: {0}")]
    Parse(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

impl From<serde_json::Error> for CmsError {
    fn from(err: serde_json::Error) -> Self {
        CmsError::Parse(err.to_string())
    }
}

/// Upper bound on how much of an upstream error body is kept for errors and logs.
pub const MAX_ERROR_BODY: usize = 512;

/// Cut `body` to at most [`MAX_ERROR_BODY`] bytes on a char boundary.
pub fn truncate_body(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    body
}
