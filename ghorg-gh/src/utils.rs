//! # Repository References
//!
//! Parse the organization and repository name out of the forms users paste:
//! `org/name`, HTTPS clone or browser URLs, and SSH remotes.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static GITHUB_REPO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?:^|[/@.])github\.com[/:]([^/]+)/([^/]+?)(?:\.git)?(?:[/?#].*)?$")
    .expect("Failed to compile GitHub repo regex")
});

static REPO_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*)/([A-Za-z0-9._-]+)$").expect("Failed to compile repo slug regex")
});

/// An `org/name` pair identifying a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
  pub org: String,
  pub name: String,
}

/// The input was neither an `org/name` slug nor a GitHub URL
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Could not extract organization and repository from '{0}'")]
pub struct RepoRefParseError(pub String);

impl RepoRef {
  pub fn new(org: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      org: org.into(),
      name: name.into(),
    }
  }

  /// Parse a slug or GitHub URL.
  ///
  /// Accepts e.g. `acme/widgets`, `https://github.com/acme/widgets`,
  /// `https://github.com/acme/widgets.git`,
  /// `https://github.com/acme/widgets/pull/123` and
  /// `git@github.com:acme/widgets.git`.
  pub fn parse(input: &str) -> Result<Self, RepoRefParseError> {
    let input = input.trim();

    let captures = REPO_SLUG_REGEX
      .captures(input)
      .or_else(|| GITHUB_REPO_REGEX.captures(input))
      .ok_or_else(|| RepoRefParseError(input.to_string()))?;

    match (captures.get(1), captures.get(2)) {
      (Some(org), Some(name)) => Ok(Self::new(org.as_str(), name.as_str())),
      _ => Err(RepoRefParseError(input.to_string())),
    }
  }
}

impl FromStr for RepoRef {
  type Err = RepoRefParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for RepoRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.org, self.name)
  }
}
