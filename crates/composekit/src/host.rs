//! Terminal implementations of the coordinator's collaborator seams
//!
//! The coordinator itself is UI-free; this module adapts it to a
//! terminal host: colored status output, one-shot notifications on
//! stdout, a docker-context-backed engine provider, and a dialoguer
//! version picker.

use std::io::IsTerminal;
use std::time::Duration;

use async_trait::async_trait;
use composekit_core::{Error, Result};
use composekit_lifecycle::{
    ConnectionStatus, EngineConnection, EngineProvider, MessageSink, StatusIcon,
    StatusPresentation, StatusSink, VersionPicker,
};
use composekit_releases::ReleaseDescriptor;
use owo_colors::OwoColorize;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

/// Prints the status indicator line
pub struct TerminalStatusSink;

impl StatusSink for TerminalStatusSink {
    fn push(&mut self, presentation: StatusPresentation) {
        let icon = match presentation.icon {
            StatusIcon::Check => "✔".green().to_string(),
            StatusIcon::Download => "↓".blue().to_string(),
            StatusIcon::Warning => "⚠".yellow().to_string(),
        };
        let hint = match presentation.action {
            composekit_lifecycle::StatusAction::Install => "run `composekit install`",
            composekit_lifecycle::StatusAction::ShowChecks => "run `composekit check`",
        };
        println!("{} {} ({})", icon, presentation.tooltip, hint.dimmed());
    }
}

/// Prints one-shot messages
pub struct TerminalMessageSink;

impl MessageSink for TerminalMessageSink {
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// One entry of `docker context ls --format json`
#[derive(Debug, Deserialize)]
struct DockerContext {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "DockerEndpoint")]
    docker_endpoint: String,
}

/// Engine provider backed by the docker CLI's context list
///
/// A context counts as started when its daemon answers a version query
/// within the probe timeout.
pub struct DockerContextProvider {
    probe_timeout: Duration,
}

impl DockerContextProvider {
    pub fn new() -> Self {
        Self {
            probe_timeout: Duration::from_secs(5),
        }
    }

    async fn context_is_started(&self, name: &str) -> bool {
        let result = tokio::time::timeout(self.probe_timeout, async {
            Command::new("docker")
                .args(["--context", name, "version", "--format", "{{.Server.Version}}"])
                .output()
                .await
        })
        .await;

        matches!(result, Ok(Ok(output)) if output.status.success())
    }
}

impl Default for DockerContextProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EngineProvider for DockerContextProvider {
    async fn list_connections(&self) -> Result<Vec<EngineConnection>> {
        let output = match Command::new("docker")
            .args(["context", "ls", "--format", "json"])
            .output()
            .await
        {
            Ok(output) if output.status.success() => output,
            Ok(_) => return Ok(vec![]),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(err) => {
                return Err(Error::probe(format!(
                    "Failed to list docker contexts: {err}"
                )))
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut connections = Vec::new();

        // One JSON object per line
        for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
            let context: DockerContext = match serde_json::from_str(line) {
                Ok(ctx) => ctx,
                Err(err) => {
                    debug!("Skipping unparseable context entry: {}", err);
                    continue;
                }
            };

            let status = if self.context_is_started(&context.name).await {
                ConnectionStatus::Started
            } else {
                ConnectionStatus::Stopped
            };

            connections.push(EngineConnection {
                name: context.name,
                status,
                endpoint: context.docker_endpoint,
            });
        }

        Ok(connections)
    }
}

/// Interactive version picker
///
/// Falls back to the default selection (most recent) when prompting is
/// disabled or stdout is not a terminal.
pub struct TerminalVersionPicker {
    assume_latest: bool,
}

impl TerminalVersionPicker {
    pub fn new(assume_latest: bool) -> Self {
        Self { assume_latest }
    }
}

impl VersionPicker for TerminalVersionPicker {
    fn pick(&self, choices: &[ReleaseDescriptor]) -> Result<Option<usize>> {
        if self.assume_latest || !std::io::stdout().is_terminal() {
            return Ok(None);
        }

        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let selection = dialoguer::Select::new()
            .with_prompt("Select a compose version")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| Error::probe(format!("Version prompt failed: {e}")))?;

        Ok(selection)
    }
}
