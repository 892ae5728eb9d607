//! # GitHub API Endpoints
//!
//! Endpoint implementations grouped by GitHub resource: organization
//! repositories and organization teams.

pub mod repos;
pub mod teams;
