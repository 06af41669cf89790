//! Engine connection types
//!
//! Connections are supplied by the host's engine provider; the core
//! only reads them, never mutates or persists them.

/// Lifecycle state of an engine connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// The engine behind this connection is running
    Started,
    /// Any non-running state
    Stopped,
}

/// A running (or configured) container-engine instance
#[derive(Debug, Clone)]
pub struct EngineConnection {
    /// Connection name (e.g., the docker context name)
    pub name: String,

    /// Whether the engine is running
    pub status: ConnectionStatus,

    /// Endpoint address the wrapper script will export as `DOCKER_HOST`
    /// (e.g., `unix:///var/run/docker.sock`)
    pub endpoint: String,
}

impl EngineConnection {
    /// Convenience constructor for a started connection
    pub fn started(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ConnectionStatus::Started,
            endpoint: endpoint.into(),
        }
    }
}
