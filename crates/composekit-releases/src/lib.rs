//! Release source client for Composekit
//!
//! Provides:
//! - Release listing against the GitHub releases API (most recent first)
//! - Platform-specific asset resolution for compose binaries
//! - Streamed downloads that fail atomically (temp write, then rename)

pub mod client;
pub mod download;

pub use client::{Release, ReleaseAsset, ReleaseClient, ReleaseDescriptor};
pub use download::AssetDownloader;

/// GitHub API base URL
pub const GITHUB_API: &str = "https://api.github.com";

/// Upstream repository owner hosting compose releases
pub const REPO_OWNER: &str = "docker";

/// Upstream repository name hosting compose releases
pub const REPO_NAME: &str = "compose";
