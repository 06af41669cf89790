//! `composekit install` - download and install a compose release

use std::path::Path;

use anyhow::Result;
use composekit_releases::{AssetDownloader, ReleaseClient};

use crate::cli::InstallArgs;
use crate::commands::build_coordinator;
use crate::host::TerminalVersionPicker;

pub async fn run(args: InstallArgs, storage_root: Option<&Path>, quiet: bool) -> Result<()> {
    let mut coordinator = build_coordinator(storage_root)?;

    let releases = ReleaseClient::new()?.with_prerelease(args.prerelease);
    let downloader = AssetDownloader::new()?.with_progress(!quiet);
    let picker = TerminalVersionPicker::new(args.latest);

    coordinator.install(&releases, &downloader, &picker).await
}
