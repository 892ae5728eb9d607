//! Canned GitHub API response bodies

use serde_json::{Value, json};

/// A `GET /repos/{org}/{name}` body with every mapped field present
pub fn repository_json(org: &str, name: &str) -> Value {
  json!({
      "id": 1296269,
      "name": name,
      "full_name": format!("{org}/{name}"),
      "owner": {"login": org, "type": "Organization"},
      "description": "This your first repo!",
      "homepage": "https://github.com",
      "private": false,
      "visibility": "public",
      "has_issues": true,
      "has_wiki": true,
      "has_downloads": true,
      "has_projects": true,
      "allow_squash_merge": true,
      "allow_merge_commit": true,
      "allow_rebase_merge": true,
      "allow_auto_merge": false,
      "delete_branch_on_merge": true,
      "use_squash_pr_title_as_default": true,
      "squash_merge_commit_title": "PR_TITLE",
      "squash_merge_commit_message": "PR_BODY",
      "merge_commit_title": "MERGE_MESSAGE",
      "merge_commit_message": "PR_TITLE",
      "custom_properties": {"environment": "production"}
  })
}

/// A `GET /orgs/{org}/teams` body with two teams
pub fn teams_json(org: &str) -> Value {
  json!([
      {
          "id": 1,
          "name": "Justice League",
          "slug": "justice-league",
          "description": "A great team.",
          "privacy": "closed",
          "permission": "admin",
          "html_url": format!("https://github.com/orgs/{org}/teams/justice-league")
      },
      {
          "id": 2,
          "name": "Platform",
          "slug": "platform",
          "description": null,
          "privacy": "secret",
          "permission": "pull",
          "html_url": format!("https://github.com/orgs/{org}/teams/platform")
      }
  ])
}

/// The body GitHub sends for an invalid or expired token
pub fn bad_credentials_json() -> Value {
  json!({
      "message": "Bad credentials",
      "documentation_url": "https://docs.github.com/rest"
  })
}

pub fn not_found_json() -> Value {
  json!({
      "message": "Not Found",
      "documentation_url": "https://docs.github.com/rest"
  })
}
