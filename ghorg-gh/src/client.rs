//! # GitHub HTTP Client
//!
//! HTTP client shared by the repository and team endpoints. Holds the
//! reqwest client, the API base URL and the token, and builds authenticated
//! requests against them.

use std::fmt;

use reqwest::{Client, Method, RequestBuilder, header};
use url::Url;

use crate::consts::{ACCEPT, API_BASE, API_BASE_URL, USER_AGENT};
use crate::error::{GitHubError, Result};
use crate::models::GitHubAuth;

/// Connection settings for a [`GitHubClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubClientConfig {
  /// Root of the REST API, e.g. `https://api.github.com` or a GitHub
  /// Enterprise `https://ghe.example.com/api/v3`
  pub base_url: String,
  pub user_agent: String,
}

impl Default for GitHubClientConfig {
  fn default() -> Self {
    Self {
      base_url: API_BASE_URL.to_string(),
      user_agent: USER_AGENT.to_string(),
    }
  }
}

impl GitHubClientConfig {
  /// Default settings pointed at a different API root
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      ..Self::default()
    }
  }
}

/// Represents a GitHub API client
///
/// Cloning is cheap: the underlying reqwest client shares its connection pool
/// between clones.
#[derive(Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: Url,
  pub(crate) user_agent: String,
  pub(crate) auth: GitHubAuth,
}

// Keep the token out of debug output
impl fmt::Debug for GitHubClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GitHubClient")
      .field("base_url", &self.base_url.as_str())
      .field("user_agent", &self.user_agent)
      .finish_non_exhaustive()
  }
}

impl GitHubClient {
  /// Create a new GitHub client against the public API
  pub fn new(auth: GitHubAuth) -> Self {
    Self {
      client: Client::new(),
      base_url: API_BASE.clone(),
      user_agent: USER_AGENT.to_string(),
      auth,
    }
  }

  /// Create a GitHub client with explicit connection settings
  pub fn with_config(auth: GitHubAuth, config: GitHubClientConfig) -> Result<Self> {
    let base_url = Url::parse(&config.base_url).map_err(|source| GitHubError::InvalidBaseUrl {
      url: config.base_url.clone(),
      source,
    })?;

    if base_url.cannot_be_a_base() {
      return Err(GitHubError::InvalidBaseUrl {
        url: config.base_url,
        source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
      });
    }

    Ok(Self {
      client: Client::new(),
      base_url,
      user_agent: config.user_agent,
      auth,
    })
  }

  /// The API root this client talks to
  pub fn base_url(&self) -> &str {
    self.base_url.as_str()
  }

  /// The token requests are authorized with
  pub fn token(&self) -> &str {
    &self.auth.token
  }

  /// Build the URL for an API path, percent-encoding each segment.
  ///
  /// Empty, `.` and `..` segments are rejected: URL normalization would drop
  /// or collapse them (even percent-encoded) and address another endpoint.
  pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
    if let Some(segment) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
      return Err(GitHubError::InvalidPathSegment {
        segment: (*segment).to_string(),
      });
    }

    let mut url = self.base_url.clone();
    // with_config rejects cannot-be-a-base URLs, so this always succeeds
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    Ok(url)
  }

  /// Start a request carrying the GitHub headers and token authorization
  pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
    self
      .client
      .request(method, url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, &self.user_agent)
      .header(header::AUTHORIZATION, format!("token {}", self.auth.token))
  }
}

/// Create a GitHub client from a personal access token
pub fn create_github_client(token: &str) -> GitHubClient {
  GitHubClient::new(GitHubAuth::new(token))
}
