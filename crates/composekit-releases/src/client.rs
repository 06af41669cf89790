//! Compose release listing and asset resolution

use composekit_core::{Arch, Error, Os, Result};
use serde::Deserialize;
use tracing::debug;

use crate::{GITHUB_API, REPO_NAME, REPO_OWNER};

/// Timeout for release listing requests
const LIST_TIMEOUT_SECS: u64 = 30;

/// User agent sent to the release source
const USER_AGENT: &str = concat!("composekit/", env!("CARGO_PKG_VERSION"));

/// Release information as returned by the release source
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag (e.g., "v2.24.5")
    pub tag_name: String,

    /// Release name
    pub name: Option<String>,

    /// Whether this is a prerelease
    pub prerelease: bool,

    /// Whether this is a draft
    pub draft: bool,

    /// Release assets
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// Human-readable label for this release
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.tag_name)
    }

    /// Project this release onto the descriptor shown to the user
    pub fn descriptor(&self) -> ReleaseDescriptor {
        ReleaseDescriptor {
            id: self.tag_name.clone(),
            label: self.label().to_string(),
        }
    }
}

/// Release asset
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset name (e.g., "docker-compose-linux-x86_64")
    pub name: String,

    /// Download URL
    pub browser_download_url: String,

    /// Asset size in bytes
    pub size: u64,
}

/// Identity of a downloadable compose version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
    /// Release id (the tag)
    pub id: String,

    /// Label presented to the user
    pub label: String,
}

/// Client for the compose release source
pub struct ReleaseClient {
    /// HTTP client
    client: reqwest::Client,

    /// API base URL (overridable for tests)
    api_base: String,

    /// Include prereleases in listings
    include_prerelease: bool,
}

impl ReleaseClient {
    /// Create a new release client
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(LIST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: GITHUB_API.to_string(),
            include_prerelease: false,
        })
    }

    /// Override the API base URL
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Include prerelease versions in listings
    pub fn with_prerelease(mut self, include: bool) -> Self {
        self.include_prerelease = include;
        self
    }

    /// List compose releases, most recent first
    ///
    /// Drafts are always filtered out; prereleases unless opted in.
    /// An empty result after filtering is a `NotFound` error, not an
    /// empty list, because the install flow has nothing to offer.
    pub async fn list_releases(&self, limit: usize) -> Result<Vec<Release>> {
        let url = format!(
            "{}/repos/{}/{}/releases?per_page={}",
            self.api_base, REPO_OWNER, REPO_NAME, limit
        );

        debug!("Listing compose releases from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network(format!("Failed to reach release source: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::network(format!(
                "Release source returned {}",
                response.status()
            )));
        }

        let mut releases: Vec<Release> = response
            .json()
            .await
            .map_err(|e| Error::network(format!("Invalid release listing: {e}")))?;

        releases.retain(|r| !r.draft && (self.include_prerelease || !r.prerelease));

        if releases.is_empty() {
            return Err(Error::not_found("compose releases"));
        }

        Ok(releases)
    }

    /// Resolve the asset for a given OS/architecture combination
    ///
    /// Upstream compose assets are named
    /// `docker-compose-<os>-<arch>[.exe]`; no match means the platform
    /// is unsupported by that release.
    pub fn resolve_asset<'a>(
        &self,
        release: &'a Release,
        os: Os,
        arch: Arch,
    ) -> Result<&'a ReleaseAsset> {
        let (os_seg, arch_seg) = match (os.asset_segment(), arch.asset_segment()) {
            (Some(o), Some(a)) => (o, a),
            _ => return Err(Error::unsupported_platform(os.to_string(), arch.to_string())),
        };

        let expected = format!("docker-compose-{}-{}{}", os_seg, arch_seg, os.exe_suffix());

        debug!("Resolving asset {} in release {}", expected, release.tag_name);

        release
            .assets
            .iter()
            .find(|a| a.name == expected)
            .ok_or_else(|| Error::unsupported_platform(os.to_string(), arch.to_string()))
    }
}
