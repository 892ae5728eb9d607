//! # ghorg
//!
//! Client for GitHub organization repositories and teams. The HTTP work lives
//! in [`ghorg_gh`]; this crate re-exports it and wires up logging.

pub mod logging;

pub use ghorg_gh as github;
pub use ghorg_gh::{
  GitHubAuth, GitHubClient, GitHubClientConfig, GitHubError, RepoRef, Repository, RepositoryAccess, RepositorySettings,
  Team, TeamLister, create_github_client,
};
pub use logging::init_tracing;
