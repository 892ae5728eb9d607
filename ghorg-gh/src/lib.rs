//! # GitHub API Client
//!
//! Provides GitHub REST API integration for organization repositories and
//! teams: fetching, creating and renaming repositories, and listing an
//! organization's teams.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
mod response;
pub mod utils;

// Re-export the client
pub use client::{GitHubClient, GitHubClientConfig, create_github_client};
// Re-export endpoints structs
pub use endpoints::repos::RepositoryAccess;
pub use endpoints::teams::TeamLister;
pub use error::{GitHubError, Result};
// Re-export models
pub use models::{GitHubAuth, Repository, RepositoryPayload, RepositorySettings, Team};
pub use utils::{RepoRef, RepoRefParseError};
