//! Wrapper script generation
//!
//! The wrapper exports `DOCKER_HOST` to the active connection's
//! endpoint and delegates to the downloaded compose binary with all
//! arguments and the exit code forwarded. Generation is
//! overwrite-idempotent: regenerating against a different connection
//! deterministically replaces the previous script.

use std::fs;
use std::path::Path;

use composekit_core::{Os, Result};
use tracing::debug;

use crate::connection::EngineConnection;

/// Generate the wrapper script at `destination`
///
/// `compose_binary` is the path the script delegates to. Only
/// filesystem errors propagate.
pub fn generate_wrapper(
    connection: &EngineConnection,
    compose_binary: &Path,
    destination: &Path,
    os: Os,
) -> Result<()> {
    let content = match os {
        Os::Windows => batch_script(connection, compose_binary),
        _ => shell_script(connection, compose_binary),
    };

    fs::write(destination, content)?;
    if os.needs_exec_bit() {
        composekit_core::paths::make_executable(destination)?;
    }

    debug!(
        "Wrapper generated at {} for connection '{}' ({})",
        destination.display(),
        connection.name,
        connection.endpoint
    );
    Ok(())
}

fn shell_script(connection: &EngineConnection, compose_binary: &Path) -> String {
    format!(
        "#!/bin/sh\n\
         # Generated by composekit; regenerated on every check cycle.\n\
         export DOCKER_HOST='{}'\n\
         exec \"{}\" \"$@\"\n",
        connection.endpoint,
        compose_binary.display()
    )
}

fn batch_script(connection: &EngineConnection, compose_binary: &Path) -> String {
    format!(
        "@echo off\r\n\
         rem Generated by composekit; regenerated on every check cycle.\r\n\
         set DOCKER_HOST={}\r\n\
         \"{}\" %*\r\n\
         exit /b %ERRORLEVEL%\r\n",
        connection.endpoint,
        compose_binary.display()
    )
}
