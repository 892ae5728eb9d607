//! Constants for the ghorg-gh client

use std::sync::LazyLock;

use url::Url;

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// [`API_BASE_URL`], parsed
pub static API_BASE: LazyLock<Url> =
  LazyLock::new(|| Url::parse(API_BASE_URL).expect("Failed to parse GitHub API base URL"));

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("ghorg/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// The `message` GitHub returns when the token is invalid or expired
pub const BAD_CREDENTIALS: &str = "Bad credentials";

/// Visibility value for public repositories
pub const VISIBILITY_PUBLIC: &str = "public";

/// Visibility value for private repositories
pub const VISIBILITY_PRIVATE: &str = "private";

/// License template applied to newly created repositories unless overridden
pub const DEFAULT_LICENSE_TEMPLATE: &str = "gpl-3.0";
