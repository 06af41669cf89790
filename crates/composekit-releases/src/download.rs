//! Atomic asset download
//!
//! Streams release asset bytes to a `.partial` sibling of the final
//! destination and renames into place only after the stream completes.
//! A failed transfer never leaves a file at the destination path, so a
//! half-written binary can never look installed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use composekit_core::{Error, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::client::ReleaseAsset;

/// Timeout for a whole asset transfer
const DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// User agent sent to the release source
const USER_AGENT: &str = concat!("composekit/", env!("CARGO_PKG_VERSION"));

/// Downloader for release assets
pub struct AssetDownloader {
    /// HTTP client
    client: reqwest::Client,

    /// Enable progress bars
    show_progress: bool,
}

impl AssetDownloader {
    /// Create a new downloader
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::download(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            show_progress: true,
        })
    }

    /// Enable or disable progress bars
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Download an asset to `destination`
    ///
    /// The destination's parent directory must already exist.
    pub async fn download(&self, asset: &ReleaseAsset, destination: &Path) -> Result<()> {
        let partial = partial_path(destination);

        info!("Downloading {} ({} bytes)", asset.name, asset.size);

        let result = self.stream_to(asset, &partial).await;

        if let Err(err) = result {
            // Leave nothing behind on failure
            let _ = fs::remove_file(&partial);
            return Err(err);
        }

        fs::rename(&partial, destination)?;
        debug!("Asset moved into place: {}", destination.display());
        Ok(())
    }

    async fn stream_to(&self, asset: &ReleaseAsset, partial: &Path) -> Result<()> {
        let response = self
            .client
            .get(&asset.browser_download_url)
            .send()
            .await
            .map_err(|e| Error::download(format!("Failed to send download request: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::download(format!(
                "Download failed with status: {}",
                response.status()
            )));
        }

        let progress = if self.show_progress {
            let pb = ProgressBar::new(asset.size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg}\n[{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})")
                    .expect("Invalid progress bar template")
                    .progress_chars("#>-"),
            );
            pb.set_message(format!("Downloading {}", asset.name));
            Some(pb)
        } else {
            None
        };

        let mut file = fs::File::create(partial)?;
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk: bytes::Bytes = chunk_result
                .map_err(|e| Error::download(format!("Failed to read download chunk: {e}")))?;
            file.write_all(&chunk)?;

            downloaded += chunk.len() as u64;
            if let Some(pb) = &progress {
                pb.set_position(downloaded);
            }
        }

        file.flush()?;
        file.sync_all()?;

        if let Some(pb) = progress {
            pb.finish_with_message(format!("Downloaded {}", asset.name));
        }

        Ok(())
    }
}

/// Sibling path the transfer streams into before the final rename
fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    destination.with_file_name(name)
}
