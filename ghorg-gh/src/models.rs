use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LICENSE_TEMPLATE, VISIBILITY_PUBLIC};

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

impl GitHubAuth {
  pub fn new(token: impl Into<String>) -> Self {
    Self { token: token.into() }
  }
}

/// Configuration attributes of a repository, everything except its identity.
///
/// `Default` yields the settings used when creating a repository: empty
/// description and homepage, public, issues/wiki/downloads/projects enabled, an initial commit, the GPL-3.0
/// license template and every merge strategy allowed. Fetched repositories
/// fill missing attributes with `false`/`None` instead, see
/// [`Repository::from_response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySettings {
  pub description: Option<String>,
  pub homepage: Option<String>,
  pub private: bool,
  /// Expected to be `"public"` or `"private"`; not validated
  pub visibility: Option<String>,
  pub has_issues: bool,
  pub has_wiki: bool,
  pub has_downloads: bool,
  pub has_projects: bool,
  /// Team granted access to the repository (organization repositories only)
  pub team_id: Option<u64>,
  pub auto_init: Option<bool>,
  pub license_template: Option<String>,
  pub gitignore_template: Option<String>,
  pub allow_squash_merge: bool,
  pub allow_merge_commit: bool,
  pub allow_rebase_merge: bool,
  pub allow_auto_merge: bool,
  pub delete_branch_on_merge: Option<bool>,
  pub use_squash_pr_title_as_default: Option<bool>,
  pub squash_merge_commit_title: Option<String>,
  pub squash_merge_commit_message: Option<String>,
  pub merge_commit_title: Option<String>,
  pub merge_commit_message: Option<String>,
  pub custom_properties: BTreeMap<String, String>,
}

impl Default for RepositorySettings {
  fn default() -> Self {
    Self {
      description: Some(String::new()),
      homepage: Some(String::new()),
      private: false,
      visibility: Some(VISIBILITY_PUBLIC.to_string()),
      has_issues: true,
      has_wiki: true,
      has_downloads: true,
      has_projects: true,
      team_id: None,
      auto_init: Some(true),
      license_template: Some(DEFAULT_LICENSE_TEMPLATE.to_string()),
      gitignore_template: Some(String::new()),
      allow_squash_merge: true,
      allow_merge_commit: true,
      allow_rebase_merge: true,
      allow_auto_merge: true,
      delete_branch_on_merge: Some(true),
      use_squash_pr_title_as_default: Some(true),
      squash_merge_commit_title: Some(String::new()),
      squash_merge_commit_message: Some(String::new()),
      merge_commit_title: Some(String::new()),
      merge_commit_message: Some(String::new()),
      custom_properties: BTreeMap::new(),
    }
  }
}

/// A hosted repository, identified by organization and name.
///
/// Immutable once built; a fresh fetch or create yields a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
  org: String,
  name: String,
  settings: RepositorySettings,
}

impl Repository {
  pub fn new(org: impl Into<String>, name: impl Into<String>, settings: RepositorySettings) -> Self {
    Self {
      org: org.into(),
      name: name.into(),
      settings,
    }
  }

  /// Build a repository from a decoded `GET /repos/{org}/{name}` body.
  ///
  /// Missing or null flags become `false`, everything else missing becomes
  /// `None` (or an empty property map).
  pub fn from_response(org: impl Into<String>, name: impl Into<String>, payload: RepositoryPayload) -> Self {
    let settings = RepositorySettings {
      description: payload.description,
      homepage: payload.homepage,
      private: payload.private.unwrap_or(false),
      visibility: payload.visibility,
      has_issues: payload.has_issues.unwrap_or(false),
      has_wiki: payload.has_wiki.unwrap_or(false),
      has_downloads: payload.has_downloads.unwrap_or(false),
      has_projects: payload.has_projects.unwrap_or(false),
      team_id: payload.team_id,
      auto_init: payload.auto_init,
      license_template: payload.license_template,
      gitignore_template: payload.gitignore_template,
      allow_squash_merge: payload.allow_squash_merge.unwrap_or(false),
      allow_merge_commit: payload.allow_merge_commit.unwrap_or(false),
      allow_rebase_merge: payload.allow_rebase_merge.unwrap_or(false),
      allow_auto_merge: payload.allow_auto_merge.unwrap_or(false),
      delete_branch_on_merge: payload.delete_branch_on_merge,
      use_squash_pr_title_as_default: payload.use_squash_pr_title_as_default,
      squash_merge_commit_title: payload.squash_merge_commit_title,
      squash_merge_commit_message: payload.squash_merge_commit_message,
      merge_commit_title: payload.merge_commit_title,
      merge_commit_message: payload.merge_commit_message,
      custom_properties: payload
        .custom_properties
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| property_value(value).map(|value| (key, value)))
        .collect(),
    };

    Self::new(org, name, settings)
  }

  pub fn org(&self) -> &str {
    &self.org
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// `org/name`
  pub fn full_name(&self) -> String {
    format!("{}/{}", self.org, self.name)
  }

  pub const fn settings(&self) -> &RepositorySettings {
    &self.settings
  }

  pub fn description(&self) -> Option<&str> {
    self.settings.description.as_deref()
  }

  pub fn homepage(&self) -> Option<&str> {
    self.settings.homepage.as_deref()
  }

  pub const fn private(&self) -> bool {
    self.settings.private
  }

  pub fn visibility(&self) -> Option<&str> {
    self.settings.visibility.as_deref()
  }

  pub const fn has_issues(&self) -> bool {
    self.settings.has_issues
  }

  pub const fn has_wiki(&self) -> bool {
    self.settings.has_wiki
  }

  pub const fn has_downloads(&self) -> bool {
    self.settings.has_downloads
  }

  pub const fn has_projects(&self) -> bool {
    self.settings.has_projects
  }

  pub const fn team_id(&self) -> Option<u64> {
    self.settings.team_id
  }

  pub const fn auto_init(&self) -> Option<bool> {
    self.settings.auto_init
  }

  pub fn license_template(&self) -> Option<&str> {
    self.settings.license_template.as_deref()
  }

  pub fn gitignore_template(&self) -> Option<&str> {
    self.settings.gitignore_template.as_deref()
  }

  pub const fn allow_squash_merge(&self) -> bool {
    self.settings.allow_squash_merge
  }

  pub const fn allow_merge_commit(&self) -> bool {
    self.settings.allow_merge_commit
  }

  pub const fn allow_rebase_merge(&self) -> bool {
    self.settings.allow_rebase_merge
  }

  pub const fn allow_auto_merge(&self) -> bool {
    self.settings.allow_auto_merge
  }

  pub const fn delete_branch_on_merge(&self) -> Option<bool> {
    self.settings.delete_branch_on_merge
  }

  pub const fn use_squash_pr_title_as_default(&self) -> Option<bool> {
    self.settings.use_squash_pr_title_as_default
  }

  pub fn squash_merge_commit_title(&self) -> Option<&str> {
    self.settings.squash_merge_commit_title.as_deref()
  }

  pub fn squash_merge_commit_message(&self) -> Option<&str> {
    self.settings.squash_merge_commit_message.as_deref()
  }

  pub fn merge_commit_title(&self) -> Option<&str> {
    self.settings.merge_commit_title.as_deref()
  }

  pub fn merge_commit_message(&self) -> Option<&str> {
    self.settings.merge_commit_message.as_deref()
  }

  pub const fn custom_properties(&self) -> &BTreeMap<String, String> {
    &self.settings.custom_properties
  }
}

/// Custom property values arrive as strings, string arrays (multi-select) or
/// null. Null means unset.
fn property_value(value: serde_json::Value) -> Option<String> {
  match value {
    serde_json::Value::Null => None,
    serde_json::Value::String(s) => Some(s),
    serde_json::Value::Array(items) => Some(
      items
        .iter()
        .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_string))
        .collect::<Vec<_>>()
        .join(","),
    ),
    other => Some(other.to_string()),
  }
}

/// Repository fields as returned by `GET /repos/{org}/{name}`.
///
/// Every field is optional because GitHub omits or nulls several of them
/// depending on the token's permissions.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RepositoryPayload {
  pub description: Option<String>,
  pub homepage: Option<String>,
  pub private: Option<bool>,
  pub visibility: Option<String>,
  pub has_issues: Option<bool>,
  pub has_wiki: Option<bool>,
  pub has_downloads: Option<bool>,
  pub has_projects: Option<bool>,
  pub team_id: Option<u64>,
  pub auto_init: Option<bool>,
  pub license_template: Option<String>,
  pub gitignore_template: Option<String>,
  pub allow_squash_merge: Option<bool>,
  pub allow_merge_commit: Option<bool>,
  pub allow_rebase_merge: Option<bool>,
  pub allow_auto_merge: Option<bool>,
  pub delete_branch_on_merge: Option<bool>,
  pub use_squash_pr_title_as_default: Option<bool>,
  pub squash_merge_commit_title: Option<String>,
  pub squash_merge_commit_message: Option<String>,
  pub merge_commit_title: Option<String>,
  pub merge_commit_message: Option<String>,
  pub custom_properties: Option<BTreeMap<String, serde_json::Value>>,
}

/// Body of `POST /orgs/{org}/repos`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryRequest<'a> {
  pub name: &'a str,
  pub description: Option<&'a str>,
  pub private: bool,
  pub visibility: Option<&'a str>,
  pub has_issues: bool,
  pub has_wiki: bool,
  pub has_downloads: bool,
  pub has_projects: bool,
  pub team_id: Option<u64>,
  pub auto_init: Option<bool>,
  pub license_template: Option<&'a str>,
  pub gitignore_template: Option<&'a str>,
  pub allow_squash_merge: bool,
  pub allow_merge_commit: bool,
  pub allow_rebase_merge: bool,
  pub allow_auto_merge: bool,
  pub delete_branch_on_merge: Option<bool>,
  pub use_squash_pr_title_as_default: Option<bool>,
  pub squash_merge_commit_title: Option<&'a str>,
  pub squash_merge_commit_message: Option<&'a str>,
  pub merge_commit_title: Option<&'a str>,
  pub merge_commit_message: Option<&'a str>,
  pub custom_properties: &'a BTreeMap<String, String>,
}

impl<'a> CreateRepositoryRequest<'a> {
  pub fn new(name: &'a str, settings: &'a RepositorySettings) -> Self {
    Self {
      name,
      description: settings.description.as_deref(),
      private: settings.private,
      visibility: settings.visibility.as_deref(),
      has_issues: settings.has_issues,
      has_wiki: settings.has_wiki,
      has_downloads: settings.has_downloads,
      has_projects: settings.has_projects,
      team_id: settings.team_id,
      auto_init: settings.auto_init,
      license_template: settings.license_template.as_deref(),
      gitignore_template: settings.gitignore_template.as_deref(),
      allow_squash_merge: settings.allow_squash_merge,
      allow_merge_commit: settings.allow_merge_commit,
      allow_rebase_merge: settings.allow_rebase_merge,
      allow_auto_merge: settings.allow_auto_merge,
      delete_branch_on_merge: settings.delete_branch_on_merge,
      use_squash_pr_title_as_default: settings.use_squash_pr_title_as_default,
      squash_merge_commit_title: settings.squash_merge_commit_title.as_deref(),
      squash_merge_commit_message: settings.squash_merge_commit_message.as_deref(),
      merge_commit_title: settings.merge_commit_title.as_deref(),
      merge_commit_message: settings.merge_commit_message.as_deref(),
      custom_properties: &settings.custom_properties,
    }
  }
}

/// Body of `PATCH /repos/{org}/{name}` when renaming
#[derive(Debug, Serialize)]
pub struct RenameRepositoryRequest<'a> {
  pub name: &'a str,
}

/// Represents a GitHub organization team
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
  pub id: u64,
  pub name: String,
  pub slug: String,
  pub description: Option<String>,
  pub privacy: Option<String>,
  pub permission: Option<String>,
  pub html_url: Option<String>,
}
