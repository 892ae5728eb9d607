//! Mock GitHub API for tests
//!
//! Starts a wiremock server and a [`GitHubClient`] pointed at it, so tests
//! exercise the real request building and response handling.

use anyhow::{Context, Result};
use ghorg_gh::{GitHubAuth, GitHubClient, GitHubClientConfig, RepositoryAccess, TeamLister};
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token every client built by the guard authenticates with
pub const TEST_TOKEN: &str = "test_token";

/// A running mock GitHub API and a client configured against it.
///
/// The server shuts down when the guard is dropped, and any `expect`ations
/// set on mounted mocks are verified at that point.
pub struct GitHubMockGuard {
  server: MockServer,
  client: GitHubClient,
}

impl GitHubMockGuard {
  /// Start a mock server and a client authenticating with [`TEST_TOKEN`]
  pub async fn start() -> Result<Self> {
    let server = MockServer::start().await;
    let client = GitHubClient::with_config(
      GitHubAuth::new(TEST_TOKEN),
      GitHubClientConfig::with_base_url(server.uri()),
    )
    .context("Failed to create client for mock GitHub server")?;

    Ok(Self { server, client })
  }

  pub fn server(&self) -> &MockServer {
    &self.server
  }

  pub fn client(&self) -> &GitHubClient {
    &self.client
  }

  pub fn repositories(&self) -> RepositoryAccess {
    self.client.repositories()
  }

  pub fn teams(&self) -> TeamLister {
    self.client.teams()
  }

  /// Answer `method` requests on `route` with `status` and a JSON body
  pub async fn mock_json(&self, http_method: &str, route: &str, status: u16, body: Value) {
    Mock::given(method(http_method))
      .and(path(route))
      .respond_with(ResponseTemplate::new(status).set_body_json(body))
      .mount(&self.server)
      .await;
  }

  /// Answer `GET /repos/{org}/{name}` with 200 and `body`
  pub async fn mock_repository(&self, org: &str, name: &str, body: Value) {
    self.mock_json("GET", &format!("/repos/{org}/{name}"), 200, body).await;
  }
}
