//! Command implementations

pub mod check;
pub mod install;

use std::path::Path;

use anyhow::{anyhow, Result};
use composekit_core::{current_platform, StorageLayout};
use composekit_lifecycle::{Coordinator, DetectionService};

use crate::host::{DockerContextProvider, TerminalMessageSink, TerminalStatusSink};

/// Build a coordinator wired to the terminal host
pub fn build_coordinator(storage_root: Option<&Path>) -> Result<Coordinator> {
    let layout = match storage_root {
        Some(root) => StorageLayout::new(root),
        None => StorageLayout::default_for_user()
            .ok_or_else(|| anyhow!("Could not determine a storage root; pass --storage-root"))?,
    };

    let detection = DetectionService::new(layout.bin_dir());

    Ok(Coordinator::new(
        layout,
        current_platform(),
        Box::new(detection),
        Box::new(DockerContextProvider::new()),
        Box::new(TerminalStatusSink),
        Box::new(TerminalMessageSink),
    ))
}
