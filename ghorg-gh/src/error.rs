//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
  /// The request never produced a usable response (connection refused, TLS,
  /// body read failure).
  #[error("GitHub request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// A success response carried a body that is not the JSON we expected.
  #[error("Failed to parse GitHub response: {0}")]
  Decode(#[from] serde_json::Error),

  /// GitHub answered with a non-success status. The message format is shared
  /// with callers that match on it, keep it stable.
  #[error("Error: {status}, {body}")]
  Api { status: u16, body: String },

  /// An organization or repository name that would not address a single
  /// path segment (empty, `.` or `..`).
  #[error("Invalid path segment '{segment}'")]
  InvalidPathSegment { segment: String },

  #[error("Invalid GitHub API base URL '{url}': {source}")]
  InvalidBaseUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },
}

impl GitHubError {
  /// HTTP status of a [`GitHubError::Api`] error, if that is what this is.
  pub const fn status(&self) -> Option<u16> {
    match self {
      Self::Api { status, .. } => Some(*status),
      _ => None,
    }
  }
}

pub type Result<T> = std::result::Result<T, GitHubError>;
