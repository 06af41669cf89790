//! Collaborator seams between the coordinator and its host
//!
//! The host registers two commands (install, run checks), renders
//! whatever presentation the coordinator pushes, and supplies the list
//! of engine connections. Everything crosses these traits so the
//! coordinator has no dependency on any particular UI toolkit.

use async_trait::async_trait;
use composekit_core::Result;
use composekit_releases::ReleaseDescriptor;

use crate::connection::EngineConnection;
use crate::coordinator::StatusPresentation;

/// Receives the single active status presentation each cycle
pub trait StatusSink {
    /// Replace the visible status indicator
    fn push(&mut self, presentation: StatusPresentation);
}

/// Receives one-shot informational strings
///
/// Implementations must display without blocking the coordinator.
pub trait MessageSink {
    /// Show a one-shot message to the user
    fn notify(&mut self, message: &str);
}

/// Supplies the currently known engine connections
#[async_trait]
pub trait EngineProvider {
    /// List connections; the coordinator filters on started status
    async fn list_connections(&self) -> Result<Vec<EngineConnection>>;
}

/// Presents release choices to the user
pub trait VersionPicker {
    /// Return the chosen index, or `None` to default to the most
    /// recent release (index 0)
    fn pick(&self, choices: &[ReleaseDescriptor]) -> Result<Option<usize>>;
}
