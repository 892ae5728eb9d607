//! # GitHub Repository Endpoints
//!
//! Fetch, create and rename organization repositories. Rejected requests
//! (non-success status or a "Bad credentials" body) come back as `None` or
//! `false` rather than errors, as do names such as `..` that cannot address a
//! repository.

use reqwest::Method;
use tracing::{debug, info, instrument, trace, warn};
use url::Url;

use crate::client::GitHubClient;
use crate::error::Result;
use crate::models::{
  CreateRepositoryRequest, GitHubAuth, RenameRepositoryRequest, Repository, RepositoryPayload, RepositorySettings,
};
use crate::response::ApiResponse;

/// Repository operations against `/repos` and `/orgs/{org}/repos`
#[derive(Debug, Clone)]
pub struct RepositoryAccess {
  client: GitHubClient,
}

impl GitHubClient {
  /// Repository operations sharing this client's connection pool
  pub fn repositories(&self) -> RepositoryAccess {
    RepositoryAccess::with_client(self.clone())
  }
}

impl RepositoryAccess {
  /// Repository access against the public API
  pub fn new(token: impl Into<String>) -> Self {
    Self::with_client(GitHubClient::new(GitHubAuth::new(token)))
  }

  pub const fn with_client(client: GitHubClient) -> Self {
    Self { client }
  }

  /// The token requests are authorized with
  pub fn token(&self) -> &str {
    self.client.token()
  }

  /// Fetch a repository.
  ///
  /// Returns `Ok(None)` when GitHub does not answer 200/201 or rejects the
  /// token.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent or a success response is
  /// not a repository JSON object.
  #[instrument(skip(self), level = "debug")]
  pub async fn fetch(&self, org: &str, name: &str) -> Result<Option<Repository>> {
    info!("Fetching repository {}/{}", org, name);

    let Some(url) = self.repo_endpoint(&["repos", org, name], "fetch", org, name) else {
      return Ok(None);
    };
    trace!("GitHub API URL: {}", url);

    let response = self.client.request(Method::GET, url).send().await?;
    let response = ApiResponse::read(response).await?;

    if !response.is_success() {
      warn_rejected(&response, "fetch", org, name);
      return Ok(None);
    }

    let payload = response.json::<RepositoryPayload>()?;
    trace!("Repository payload: {:?}", payload);
    Ok(Some(Repository::from_response(org, name, payload)))
  }

  /// Create a repository in an organization.
  ///
  /// On success the returned repository reflects `settings` as sent, not the
  /// server's response body, so any value GitHub adjusted server-side is not
  /// visible here. Use [`RepositoryAccess::fetch`] for the stored state.
  ///
  /// # Errors
  ///
  /// Returns an error if the request cannot be sent.
  #[instrument(skip(self, settings), level = "debug")]
  pub async fn create(&self, org: &str, name: &str, settings: RepositorySettings) -> Result<Option<Repository>> {
    info!("Creating repository {}/{}", org, name);

    let Some(url) = self.repo_endpoint(&["orgs", org, "repos"], "create", org, name) else {
      return Ok(None);
    };
    trace!("GitHub API URL: {}", url);

    let payload = CreateRepositoryRequest::new(name, &settings);
    let response = self.client.request(Method::POST, url).json(&payload).send().await?;
    let response = ApiResponse::read(response).await?;

    if !response.is_success() {
      warn_rejected(&response, "create", org, name);
      return Ok(None);
    }

    info!("Created repository {}/{}", org, name);
    Ok(Some(Repository::new(org, name, settings)))
  }

  /// Rename a repository. True only when GitHub accepted the rename; any
  /// failure, including an unreachable API, is `false`.
  #[instrument(skip(self), level = "debug")]
  pub async fn rename_to(&self, org: &str, name: &str, new_name: &str) -> bool {
    info!("Renaming repository {}/{} to {}", org, name, new_name);

    match self.try_rename(org, name, new_name).await {
      Ok(response) if response.is_success() => {
        info!("Renamed repository {}/{} to {}", org, name, new_name);
        true
      }
      Ok(response) => {
        warn_rejected(&response, "rename", org, name);
        false
      }
      Err(e) => {
        warn!("Failed to rename {}/{}: {}", org, name, e);
        false
      }
    }
  }

  /// Endpoint URL, or `None` (logged) when a name cannot address a single
  /// path segment. Such a repository cannot exist, so nothing is sent.
  fn repo_endpoint(&self, segments: &[&str], action: &str, org: &str, name: &str) -> Option<Url> {
    match self.client.endpoint(segments) {
      Ok(url) => Some(url),
      Err(e) => {
        warn!("Could not {} {}/{}: {}", action, org, name, e);
        None
      }
    }
  }

  async fn try_rename(&self, org: &str, name: &str, new_name: &str) -> Result<ApiResponse> {
    let url = self.client.endpoint(&["repos", org, name])?;
    trace!("GitHub API URL: {}", url);

    let payload = RenameRepositoryRequest { name: new_name };
    let response = self.client.request(Method::PATCH, url).json(&payload).send().await?;
    ApiResponse::read(response).await
  }
}

fn warn_rejected(response: &ApiResponse, action: &str, org: &str, name: &str) {
  if response.is_bad_credentials() {
    warn!("GitHub rejected the token for {} of {}/{}", action, org, name);
  } else {
    warn!(
      "Could not {} {}/{}: HTTP {} - {}",
      action,
      org,
      name,
      response.status,
      response.message().unwrap_or_default()
    );
  }
}

impl Repository {
  /// Whether this repository is now reachable as `org/new_name`.
  ///
  /// Always asks GitHub; nothing is cached on the value itself.
  ///
  /// # Errors
  ///
  /// Returns an error if the lookup cannot be sent.
  pub async fn renamed_to(&self, access: &RepositoryAccess, new_name: &str) -> Result<bool> {
    debug!("Checking whether {} was renamed to {}", self.full_name(), new_name);
    Ok(access.fetch(self.org(), new_name).await?.is_some())
  }

  /// Ask GitHub to rename this repository to `new_name`.
  ///
  /// The value itself keeps its old name; fetch the repository again to see
  /// the result.
  pub async fn rename_to(&self, access: &RepositoryAccess, new_name: &str) -> bool {
    access.rename_to(self.org(), self.name(), new_name).await
  }
}
