//! Save handoff via the `research://` custom scheme
//!
//! Builds a `research://save?...` URI carrying a page URL, provider,
//! tags and a database path, then hands it to the operating system so
//! the external application registered for the scheme takes over. The
//! inverse parse exists so inbound URIs can be inspected and the format
//! stays round-trippable.

use clap::ValueEnum;
use std::fmt;
use tracing::debug;
use url::Url;

/// Custom URI scheme consumed by the external save handler
pub const SCHEME: &str = "research";

/// Action segment of a save URI
const SAVE_ACTION: &str = "save";

/// Handoff error type
pub type Result<T> = std::result::Result<T, HandoffError>;

/// Errors that can occur while building, parsing or dispatching a handoff
#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    #[error("Invalid URI: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("Not a {SCHEME}:// URI: {0}")]
    WrongScheme(String),

    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),

    #[error("Missing query parameter: {0}")]
    MissingParam(&'static str),

    #[error("Failed to launch handler: {0}")]
    Launch(#[from] std::io::Error),
}

/// Backend the external application should store the item with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Provider {
    /// Local database
    #[default]
    Local,
    /// Pocket account
    Pocket,
}

impl Provider {
    /// Wire name used in the URI query string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Pocket => "pocket",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One save request, convertible to and from a `research://save` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// Page URL to save
    pub url: String,
    /// Storage backend
    pub provider: Provider,
    /// Tags to attach, comma-joined on the wire
    pub tags: Vec<String>,
    /// Database path the handler should write to
    pub db_path: String,
}

impl SaveRequest {
    /// Render the request as a `research://save?...` URI
    ///
    /// All components are percent-encoded by the url crate; tags travel
    /// as one comma-separated parameter.
    #[must_use]
    pub fn to_uri(&self) -> String {
        // The base is a constant, so parsing it cannot fail
        let mut uri =
            Url::parse(&format!("{SCHEME}://{SAVE_ACTION}")).expect("constant base URI");

        uri.query_pairs_mut()
            .append_pair("url", &self.url)
            .append_pair("provider", self.provider.as_str())
            .append_pair("tags", &self.tags.join(","))
            .append_pair("db_path", &self.db_path);

        uri.to_string()
    }

    /// Parse an inbound save URI back into its components
    ///
    /// # Errors
    /// Rejects URIs with the wrong scheme or action, and URIs missing the
    /// `url` parameter. `provider` defaults to local and `tags`/`db_path`
    /// to empty when absent, mirroring how lenient the handler side is.
    pub fn parse(uri: &str) -> Result<Self> {
        let parsed = Url::parse(uri)?;

        if parsed.scheme() != SCHEME {
            return Err(HandoffError::WrongScheme(uri.to_string()));
        }
        if parsed.host_str() != Some(SAVE_ACTION) {
            return Err(HandoffError::UnsupportedAction(
                parsed.host_str().unwrap_or_default().to_string(),
            ));
        }

        let mut url = None;
        let mut provider = Provider::Local;
        let mut tags = Vec::new();
        let mut db_path = String::new();

        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                "url" => url = Some(value.into_owned()),
                "provider" if value == "pocket" => provider = Provider::Pocket,
                "tags" => {
                    tags = value
                        .split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "db_path" => db_path = value.into_owned(),
                _ => {}
            }
        }

        Ok(Self {
            url: url.ok_or(HandoffError::MissingParam("url"))?,
            provider,
            tags,
            db_path,
        })
    }

    /// Hand the URI to the operating system's scheme handler
    ///
    /// # Errors
    /// Returns [`HandoffError::Launch`] if the handler cannot be started.
    pub fn dispatch(&self) -> Result<()> {
        let uri = self.to_uri();
        debug!(%uri, "dispatching save handoff");
        open::that(&uri)?;
        Ok(())
    }
}

/// Prompt interactively for comma-separated tags
///
/// Returns `None` when the prompt is cancelled, in which case the caller
/// must abort silently; nothing gets dispatched. An empty entry is a
/// valid answer meaning "no tags".
#[must_use]
pub fn prompt_tags() -> Option<Vec<String>> {
    let entry: String = dialoguer::Input::new()
        .with_prompt("Enter tags (comma-separated)")
        .allow_empty(true)
        .interact_text()
        .ok()?;

    Some(split_tags(&entry))
}

/// Split a comma-separated tag entry into trimmed, non-empty tags
#[must_use]
pub fn split_tags(entry: &str) -> Vec<String> {
    entry
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SaveRequest {
        SaveRequest {
            url: "https://www.rust-lang.org/learn?from=a&b=c".to_string(),
            provider: Provider::Local,
            tags: vec!["rust".to_string(), "systems programming".to_string()],
            db_path: "/home/user/research.sqlite".to_string(),
        }
    }

    #[test]
    fn test_uri_shape() {
        let uri = request().to_uri();
        assert!(uri.starts_with("research://save?url="));
        assert!(uri.contains("provider=local"));
        assert!(uri.contains("db_path="));
    }

    #[test]
    fn test_components_are_percent_encoded() {
        let uri = request().to_uri();
        // The embedded URL's query must not leak into our query string
        assert!(uri.contains("url=https%3A%2F%2Fwww.rust-lang.org%2Flearn%3Ffrom%3Da%26b%3Dc"));
        // Space in a tag
        assert!(uri.contains("systems+programming") || uri.contains("systems%20programming"));
    }

    #[test]
    fn test_round_trip() {
        let original = request();
        let parsed = SaveRequest::parse(&original.to_uri()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_round_trip_pocket_no_tags() {
        let original = SaveRequest {
            url: "https://example.com".to_string(),
            provider: Provider::Pocket,
            tags: Vec::new(),
            db_path: String::new(),
        };
        let parsed = SaveRequest::parse(&original.to_uri()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_rejects_wrong_scheme() {
        let err = SaveRequest::parse("https://save?url=x").unwrap_err();
        assert!(matches!(err, HandoffError::WrongScheme(_)));
    }

    #[test]
    fn test_rejects_unknown_action() {
        let err = SaveRequest::parse("research://delete?url=x").unwrap_err();
        assert!(matches!(err, HandoffError::UnsupportedAction(_)));
    }

    #[test]
    fn test_rejects_missing_url() {
        let err = SaveRequest::parse("research://save?provider=local").unwrap_err();
        assert!(matches!(err, HandoffError::MissingParam("url")));
    }

    #[test]
    fn test_split_tags_trims_and_drops_empties() {
        assert_eq!(split_tags(" rust , , memory,"), ["rust", "memory"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,").is_empty());
    }
}
