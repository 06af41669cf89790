//! Composekit lifecycle - compose-tool detection and reconciliation
//!
//! This crate is the core of the lifecycle manager. It provides:
//!
//! - **Detection**: is a compose binary resolvable on the execution
//!   path, is the default engine socket reachable, is the private bin
//!   folder on the path
//! - **Wrapper generation**: an executable script that injects
//!   `DOCKER_HOST` before delegating to the downloaded binary
//! - **Coordination**: the state machine that reconciles detection
//!   results into one user-visible status and drives the install flow
//!
//! The coordinator talks to its host exclusively through the traits in
//! [`sinks`], so it carries no dependency on any particular UI.

pub mod connection;
pub mod coordinator;
pub mod detect;
pub mod sinks;
pub mod wrapper;

pub use connection::{ConnectionStatus, EngineConnection};
pub use coordinator::{
    Coordinator, InstallationStatus, StatusAction, StatusIcon, StatusPresentation,
};
pub use detect::{Detection, DetectionService};
pub use sinks::{EngineProvider, MessageSink, StatusSink, VersionPicker};
pub use wrapper::generate_wrapper;
