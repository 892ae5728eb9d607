use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::{GitHubClient, GitHubClientConfig};
use crate::endpoints::repos::RepositoryAccess;
use crate::models::{GitHubAuth, Repository, RepositorySettings};

async fn setup() -> (MockServer, RepositoryAccess) {
  let mock_server = MockServer::start().await;
  let client = GitHubClient::with_config(
    GitHubAuth::new("test_token"),
    GitHubClientConfig::with_base_url(mock_server.uri()),
  )
  .unwrap();
  (mock_server, client.repositories())
}

#[tokio::test]
async fn test_fetch_repository() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("GET"))
    .and(path("/repos/acme/widgets"))
    .and(header("Authorization", "token test_token"))
    .and(header("Accept", "application/vnd.github.v3+json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "id": 1296269,
        "name": "widgets",
        "full_name": "acme/widgets",
        "description": "Widgets for everyone",
        "homepage": "https://widgets.example.com",
        "private": false,
        "visibility": "public",
        "has_issues": true,
        "has_wiki": false,
        "has_downloads": true,
        "has_projects": false,
        "allow_squash_merge": true,
        "allow_merge_commit": false,
        "allow_rebase_merge": true,
        "allow_auto_merge": false,
        "delete_branch_on_merge": true,
        "use_squash_pr_title_as_default": true,
        "squash_merge_commit_title": "PR_TITLE",
        "squash_merge_commit_message": "PR_BODY",
        "merge_commit_title": "MERGE_MESSAGE",
        "merge_commit_message": "PR_TITLE",
        "custom_properties": {"environment": "production"}
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let repo = access.fetch("acme", "widgets").await?.expect("repository should be returned");

  assert_eq!(repo.org(), "acme");
  assert_eq!(repo.name(), "widgets");
  assert_eq!(repo.description(), Some("Widgets for everyone"));
  assert_eq!(repo.homepage(), Some("https://widgets.example.com"));
  assert!(!repo.private());
  assert_eq!(repo.visibility(), Some("public"));
  assert!(repo.has_issues());
  assert!(!repo.has_wiki());
  assert!(repo.has_downloads());
  assert!(!repo.has_projects());
  assert!(repo.allow_squash_merge());
  assert!(!repo.allow_merge_commit());
  assert!(repo.allow_rebase_merge());
  assert!(!repo.allow_auto_merge());
  assert_eq!(repo.delete_branch_on_merge(), Some(true));
  assert_eq!(repo.use_squash_pr_title_as_default(), Some(true));
  assert_eq!(repo.squash_merge_commit_title(), Some("PR_TITLE"));
  assert_eq!(repo.squash_merge_commit_message(), Some("PR_BODY"));
  assert_eq!(repo.merge_commit_title(), Some("MERGE_MESSAGE"));
  assert_eq!(repo.merge_commit_message(), Some("PR_TITLE"));
  assert_eq!(
    repo.custom_properties().get("environment").map(String::as_str),
    Some("production")
  );
  // Not part of the GET response
  assert_eq!(repo.team_id(), None);
  assert_eq!(repo.auto_init(), None);
  assert_eq!(repo.license_template(), None);

  Ok(())
}

#[tokio::test]
async fn test_fetch_repository_created_status() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("GET"))
    .and(path("/repos/acme/widgets"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
        "name": "widgets",
        "description": "Widgets for everyone",
        "private": true
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let repo = access.fetch("acme", "widgets").await?.expect("201 is a success");

  assert_eq!(repo.full_name(), "acme/widgets");
  assert_eq!(repo.description(), Some("Widgets for everyone"));
  assert!(repo.private());
  assert!(!repo.has_issues());

  Ok(())
}

#[tokio::test]
async fn test_fetch_dot_segment_name_sends_nothing() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  // `/repos/acme/..` would normalize to `/repos/acme`
  Mock::given(any())
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "acme"})))
    .expect(0)
    .mount(&mock_server)
    .await;

  assert!(access.fetch("acme", "..").await?.is_none());
  assert!(access.fetch("acme", ".").await?.is_none());
  assert!(access.fetch("..", "widgets").await?.is_none());
  assert!(access.create("..", "widgets", RepositorySettings::default()).await?.is_none());
  assert!(!access.rename_to("acme", "..", "gadgets").await);

  Ok(())
}

#[test]
fn test_token_accessor() {
  let access = RepositoryAccess::new("ghp_example");
  assert_eq!(access.token(), "ghp_example");
}

#[tokio::test]
async fn test_fetch_bad_credentials_with_ok_status() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("GET"))
    .and(path("/repos/acme/widgets"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "message": "Bad credentials",
        "documentation_url": "https://docs.github.com/rest"
    })))
    .mount(&mock_server)
    .await;

  assert!(access.fetch("acme", "widgets").await?.is_none());
  Ok(())
}

#[tokio::test]
async fn test_fetch_bad_credentials_with_unauthorized_status() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("GET"))
    .and(path("/repos/acme/widgets"))
    .respond_with(ResponseTemplate::new(401).set_body_json(json!({
        "message": "Bad credentials",
        "documentation_url": "https://docs.github.com/rest"
    })))
    .mount(&mock_server)
    .await;

  assert!(access.fetch("acme", "widgets").await?.is_none());
  Ok(())
}

#[tokio::test]
async fn test_fetch_not_found() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("GET"))
    .and(path("/repos/acme/missing"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
    .mount(&mock_server)
    .await;

  assert!(access.fetch("acme", "missing").await?.is_none());
  Ok(())
}

#[tokio::test]
async fn test_fetch_malformed_success_body_is_an_error() {
  let (mock_server, access) = setup().await;

  Mock::given(method("GET"))
    .and(path("/repos/acme/widgets"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
    .mount(&mock_server)
    .await;

  let result = access.fetch("acme", "widgets").await;
  assert!(matches!(result, Err(crate::error::GitHubError::Decode(_))));
}

#[tokio::test]
async fn test_fetch_transport_failure_is_an_error() {
  // Nothing listens on the discard port
  let client = GitHubClient::with_config(
    GitHubAuth::new("test_token"),
    GitHubClientConfig::with_base_url("http://127.0.0.1:9"),
  )
  .unwrap();

  let result = client.repositories().fetch("acme", "widgets").await;
  assert!(matches!(result, Err(crate::error::GitHubError::Transport(_))));
}

#[tokio::test]
async fn test_create_repository_returns_input_settings() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("POST"))
    .and(path("/orgs/acme/repos"))
    .and(header("Authorization", "token test_token"))
    .and(body_json(json!({
        "name": "widgets",
        "description": "",
        "private": false,
        "visibility": "public",
        "hasIssues": true,
        "hasWiki": true,
        "hasDownloads": true,
        "hasProjects": true,
        "teamId": null,
        "autoInit": true,
        "licenseTemplate": "gpl-3.0",
        "gitignoreTemplate": "",
        "allowSquashMerge": true,
        "allowMergeCommit": true,
        "allowRebaseMerge": true,
        "allowAutoMerge": true,
        "deleteBranchOnMerge": true,
        "useSquashPrTitleAsDefault": true,
        "squashMergeCommitTitle": "",
        "squashMergeCommitMessage": "",
        "mergeCommitTitle": "",
        "mergeCommitMessage": "",
        "customProperties": {}
    })))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({
        "name": "widgets",
        "full_name": "acme/widgets",
        "private": true,
        "visibility": "private",
        "has_issues": false,
        "license_template": "mit"
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let repo = access
    .create("acme", "widgets", RepositorySettings::default())
    .await?
    .expect("repository should be created");

  assert_eq!(repo, Repository::new("acme", "widgets", RepositorySettings::default()));
  // The response disagreed; the input wins
  assert!(!repo.private());
  assert_eq!(repo.visibility(), Some("public"));
  assert!(repo.has_issues());
  assert_eq!(repo.license_template(), Some("gpl-3.0"));
  assert_eq!(repo.description(), Some(""));
  assert_eq!(repo.homepage(), Some(""));

  Ok(())
}

#[tokio::test]
async fn test_create_repository_rejected() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("POST"))
    .and(path("/orgs/acme/repos"))
    .respond_with(ResponseTemplate::new(422).set_body_json(json!({
        "message": "Repository creation failed.",
        "errors": [{"resource": "Repository", "code": "custom", "field": "name", "message": "name already exists on this account"}]
    })))
    .mount(&mock_server)
    .await;

  assert!(access.create("acme", "widgets", RepositorySettings::default()).await?.is_none());
  Ok(())
}

#[tokio::test]
async fn test_create_repository_bad_credentials() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("POST"))
    .and(path("/orgs/acme/repos"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Bad credentials"})))
    .mount(&mock_server)
    .await;

  assert!(access.create("acme", "widgets", RepositorySettings::default()).await?.is_none());
  Ok(())
}

#[tokio::test]
async fn test_rename_repository() {
  let (mock_server, access) = setup().await;

  Mock::given(method("PATCH"))
    .and(path("/repos/acme/widgets"))
    .and(header("Authorization", "token test_token"))
    .and(body_json(json!({"name": "gadgets"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "name": "gadgets",
        "full_name": "acme/gadgets"
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  assert!(access.rename_to("acme", "widgets", "gadgets").await);
}

#[tokio::test]
async fn test_rename_repository_not_found() {
  let (mock_server, access) = setup().await;

  Mock::given(method("PATCH"))
    .and(path("/repos/acme/widgets"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
    .mount(&mock_server)
    .await;

  assert!(!access.rename_to("acme", "widgets", "gadgets").await);
}

#[tokio::test]
async fn test_rename_repository_bad_credentials() {
  let (mock_server, access) = setup().await;

  Mock::given(method("PATCH"))
    .and(path("/repos/acme/widgets"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Bad credentials"})))
    .mount(&mock_server)
    .await;

  assert!(!access.rename_to("acme", "widgets", "gadgets").await);
}

#[tokio::test]
async fn test_rename_repository_transport_failure_is_false() {
  let client = GitHubClient::with_config(
    GitHubAuth::new("test_token"),
    GitHubClientConfig::with_base_url("http://127.0.0.1:9"),
  )
  .unwrap();

  assert!(!client.repositories().rename_to("acme", "widgets", "gadgets").await);
}

#[tokio::test]
async fn test_repository_renamed_to_looks_up_new_name() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  Mock::given(method("GET"))
    .and(path("/repos/acme/gadgets"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "gadgets"})))
    .expect(1)
    .mount(&mock_server)
    .await;

  Mock::given(method("GET"))
    .and(path("/repos/acme/doohickeys"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
    .expect(1)
    .mount(&mock_server)
    .await;

  let repo = Repository::new("acme", "widgets", RepositorySettings::default());
  assert!(repo.renamed_to(&access, "gadgets").await?);
  assert!(!repo.renamed_to(&access, "doohickeys").await?);

  Ok(())
}

#[tokio::test]
async fn test_repository_rename_to_delegates() {
  let (mock_server, access) = setup().await;

  Mock::given(method("PATCH"))
    .and(path("/repos/acme/widgets"))
    .and(body_json(json!({"name": "gadgets"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "gadgets"})))
    .expect(1)
    .mount(&mock_server)
    .await;

  let repo = Repository::new("acme", "widgets", RepositorySettings::default());
  assert!(repo.rename_to(&access, "gadgets").await);
  assert_eq!(repo.name(), "widgets");
}

#[tokio::test]
async fn test_concurrent_fetches_are_independent() -> anyhow::Result<()> {
  let (mock_server, access) = setup().await;

  for name in ["alpha", "beta"] {
    Mock::given(method("GET"))
      .and(path(format!("/repos/acme/{name}")))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": name, "description": name})))
      .mount(&mock_server)
      .await;
  }

  let (alpha, beta) = tokio::join!(access.fetch("acme", "alpha"), access.fetch("acme", "beta"));

  assert_eq!(alpha?.and_then(|r| r.description().map(str::to_string)), Some("alpha".to_string()));
  assert_eq!(beta?.and_then(|r| r.description().map(str::to_string)), Some("beta".to_string()));
  Ok(())
}
