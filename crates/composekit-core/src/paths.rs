//! Private storage layout
//!
//! The lifecycle manager persists exactly two artifacts, both under a
//! private storage root's `bin/` subfolder: the downloaded compose
//! binary (`docker-compose[.exe]`) and the generated wrapper script
//! (`compose` / `compose.bat`). Nothing else is persisted.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::platform::Os;

/// Name stem of the downloaded compose binary
pub const COMPOSE_BINARY_STEM: &str = "docker-compose";

/// Storage layout rooted at the extension's private folder
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    /// Create a layout rooted at an explicit path
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a layout under the user's data directory
    pub fn default_for_user() -> Option<Self> {
        dirs::data_dir().map(|d| Self::new(d.join("composekit")))
    }

    /// The storage root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `bin/` subfolder holding both artifacts
    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    /// Destination path for the downloaded compose binary
    pub fn compose_binary_path(&self, os: Os) -> PathBuf {
        self.bin_dir()
            .join(format!("{}{}", COMPOSE_BINARY_STEM, os.exe_suffix()))
    }

    /// Destination path for the generated wrapper script
    pub fn wrapper_path(&self, os: Os) -> PathBuf {
        self.bin_dir().join(os.wrapper_file_name())
    }

    /// Create the bin folder if absent
    ///
    /// Idempotent: succeeds without error when the folder already exists.
    pub fn ensure_bin_dir(&self) -> Result<PathBuf> {
        let bin = self.bin_dir();
        if !bin.exists() {
            debug!("Creating bin folder: {}", bin.display());
        }
        fs::create_dir_all(&bin)?;
        Ok(bin)
    }
}

/// Grant execute permission on platforms that require it explicitly
///
/// Unix: owner read/write/execute, group/other read/execute. Windows:
/// no-op, executability is extension-based.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

/// Grant execute permission on platforms that require it explicitly
#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
