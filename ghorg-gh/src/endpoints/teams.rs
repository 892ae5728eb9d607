//! GitHub organization teams endpoint.

use reqwest::{Method, StatusCode};
use tracing::{info, instrument, trace, warn};

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};
use crate::models::{GitHubAuth, Team};
use crate::response::ApiResponse;

/// Lists the teams of an organization
#[derive(Debug, Clone)]
pub struct TeamLister {
  client: GitHubClient,
}

impl GitHubClient {
  /// Team operations sharing this client's connection pool
  pub fn teams(&self) -> TeamLister {
    TeamLister::with_client(self.clone())
  }
}

impl TeamLister {
  /// Team listing against the public API
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

  /// List an organization's teams as the raw decoded JSON GitHub returned.
  ///
  /// # Errors
  ///
  /// Any status other than 200 becomes [`GitHubError::Api`] carrying the
  /// status code and the response body text. Transport failures, non-JSON
  /// success bodies and an `org` of `.`/`..`/empty
  /// ([`GitHubError::InvalidPathSegment`]) are also errors.
  #[instrument(skip(self), level = "debug")]
  pub async fn list(&self, org: &str) -> Result<serde_json::Value> {
    info!("Listing teams for {}", org);

    let url = self.client.endpoint(&["orgs", org, "teams"])?;
    trace!("GitHub API URL: {}", url);

    let response = self.client.request(Method::GET, url).send().await?;
    let response = ApiResponse::read(response).await?;

    if response.status != StatusCode::OK {
      warn!("Unexpected GitHub API error: HTTP {} - {}", response.status, response.body);
      return Err(GitHubError::Api {
        status: response.status.as_u16(),
        body: response.body,
      });
    }

    response.json()
  }

  /// Same request as [`TeamLister::list`], decoded into [`Team`] values.
  ///
  /// # Errors
  ///
  /// Fails as [`TeamLister::list`] does, or when an entry is not a team
  /// object.
  pub async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
    let teams = self.list(org).await?;
    Ok(serde_json::from_value(teams)?)
  }
}
