//! Detection probes
//!
//! Three independent questions, each side-effect-free: is a
//! compose-capable binary resolvable on the execution path, is the
//! default engine socket reachable without extra configuration, and is
//! the private bin folder on the execution path. Absence is a boolean
//! result, never an error; only probe-execution faults propagate.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use composekit_core::{Error, Result};
use tokio::process::Command;
use tracing::debug;

/// Standalone compose binary name looked up on the path
const STANDALONE_COMPOSE: &str = "docker-compose";

/// Engine CLI probed for the native compose subcommand
const ENGINE_CLI: &str = "docker";

/// Default engine socket on Unix hosts
#[cfg(unix)]
const DEFAULT_SOCKET: &str = "/var/run/docker.sock";

/// Default engine named pipe on Windows hosts
#[cfg(windows)]
const DEFAULT_PIPE: &str = r"\\.\pipe\docker_engine";

/// Detection seam the coordinator reconciles over
#[async_trait]
pub trait Detection {
    /// Is a compose-capable binary resolvable via the execution path?
    async fn has_compose(&self) -> Result<bool>;

    /// Does the default (unconfigured) engine endpoint respond?
    async fn has_reachable_default_socket(&self) -> Result<bool>;

    /// Is the private bin folder present on the execution path?
    fn has_wrapper_on_path(&self) -> Result<bool>;
}

/// Probe implementation backed by the real host
pub struct DetectionService {
    /// The private bin folder checked for path membership
    bin_dir: PathBuf,

    /// Timeout applied to subprocess probes
    probe_timeout: Duration,

    /// Unix socket probed for default reachability
    #[cfg(unix)]
    default_socket: PathBuf,
}

impl DetectionService {
    /// Create a detection service for the given private bin folder
    pub fn new(bin_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
            probe_timeout: Duration::from_secs(5),
            #[cfg(unix)]
            default_socket: PathBuf::from(DEFAULT_SOCKET),
        }
    }

    /// Override the probe timeout
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Override the default socket path (Unix only; used by tests)
    #[cfg(unix)]
    pub fn with_default_socket(mut self, socket: impl Into<PathBuf>) -> Self {
        self.default_socket = socket.into();
        self
    }

    /// Probe the engine CLI for a native `compose` subcommand
    async fn native_subcommand_responds(&self) -> Result<bool> {
        let result = tokio::time::timeout(self.probe_timeout, async {
            Command::new(ENGINE_CLI)
                .args(["compose", "version"])
                .output()
                .await
        })
        .await;

        match result {
            Ok(Ok(output)) => Ok(output.status.success()),
            Ok(Err(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Ok(Err(err)) => Err(Error::probe(format!(
                "Failed to execute {ENGINE_CLI} compose probe: {err}"
            ))),
            Err(_) => {
                debug!("Native compose probe timed out after {:?}", self.probe_timeout);
                Ok(false)
            }
        }
    }
}

#[async_trait]
impl Detection for DetectionService {
    async fn has_compose(&self) -> Result<bool> {
        if which::which(STANDALONE_COMPOSE).is_ok() {
            debug!("Found standalone {} on path", STANDALONE_COMPOSE);
            return Ok(true);
        }
        self.native_subcommand_responds().await
    }

    #[cfg(unix)]
    async fn has_reachable_default_socket(&self) -> Result<bool> {
        let connect = tokio::net::UnixStream::connect(&self.default_socket);
        match tokio::time::timeout(self.probe_timeout, connect).await {
            Ok(Ok(_)) => Ok(true),
            Ok(Err(err)) => {
                debug!(
                    "Default socket {} not reachable: {}",
                    self.default_socket.display(),
                    err
                );
                Ok(false)
            }
            Err(_) => Ok(false),
        }
    }

    #[cfg(windows)]
    async fn has_reachable_default_socket(&self) -> Result<bool> {
        // Pipe presence is the practical reachability signal on Windows
        Ok(Path::new(DEFAULT_PIPE).exists())
    }

    #[cfg(not(any(unix, windows)))]
    async fn has_reachable_default_socket(&self) -> Result<bool> {
        Ok(false)
    }

    fn has_wrapper_on_path(&self) -> Result<bool> {
        let Some(path_var) = std::env::var_os("PATH") else {
            return Ok(false);
        };
        Ok(path_contains_dir(&path_var, &self.bin_dir))
    }
}

/// Check whether a search-path variable contains a directory
fn path_contains_dir(path_var: &OsStr, dir: &Path) -> bool {
    std::env::split_paths(path_var).any(|entry| entry == dir)
}
