//! Lifecycle coordinator
//!
//! Reconciles the detection probes, the engine connection list, and the
//! wrapper script into a single user-visible status, and drives the
//! explicit install flow. The coordinator is stateless across check
//! cycles except for the advisory message; the first-cycle distinction
//! is a caller-supplied parameter, which keeps `run_check` a pure
//! function of its inputs plus that one piece of carried state.
//!
//! Failures during the automatic check cycle degrade to a warning
//! presentation; failures during the explicit install flow propagate
//! as user-visible errors and leave prior installation state untouched.

use std::path::Path;

use anyhow::{anyhow, Context};
use composekit_core::{PlatformInfo, Result, StorageLayout};
use composekit_releases::{AssetDownloader, ReleaseClient};
use tracing::{debug, info, warn};

use crate::connection::ConnectionStatus;
use crate::detect::Detection;
use crate::sinks::{EngineProvider, MessageSink, StatusSink, VersionPicker};
use crate::wrapper::generate_wrapper;

/// Number of releases offered by the install flow
const RELEASE_LIMIT: usize = 20;

/// Reconciled installation state, derived fresh on every check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationStatus {
    /// No compose-capable binary resolvable on the path
    NotInstalled,
    /// Compose works as-is (default socket, or via the wrapper)
    InstalledAndReachable,
    /// Wrapper generated but the bin folder is not on the path
    InstalledNeedsPathSetup,
    /// Compose present but a wrapper is required and absent
    ///
    /// Reconciliation never emits this: the regeneration branch always
    /// self-heals. Retained for hosts that detect without regenerating.
    InstalledNeedsWrapper,
    /// No engine connection with started status
    NoRunningEngine,
}

/// Icon shown by the status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Download,
    Warning,
}

/// Command the host dispatches when the indicator is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    /// Trigger the install flow
    Install,
    /// Trigger a non-first-run check cycle
    ShowChecks,
}

/// Externally visible projection of the installation status
///
/// Exactly one presentation is active at a time; it fully determines
/// the visible status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPresentation {
    pub icon: StatusIcon,
    pub tooltip: String,
    pub action: StatusAction,
}

impl StatusPresentation {
    /// Degraded presentation used when a check cycle faults
    pub fn warning(tooltip: impl Into<String>) -> Self {
        Self {
            icon: StatusIcon::Warning,
            tooltip: tooltip.into(),
            action: StatusAction::ShowChecks,
        }
    }
}

impl InstallationStatus {
    /// The deterministic presentation for this status
    ///
    /// `wrapper_path` is provided when the reachable state was obtained
    /// through the wrapper, so the tooltip can name it.
    pub fn presentation(self, wrapper_path: Option<&Path>) -> StatusPresentation {
        match self {
            Self::NotInstalled => StatusPresentation {
                icon: StatusIcon::Download,
                tooltip: "Install Compose".to_string(),
                action: StatusAction::Install,
            },
            Self::InstalledAndReachable => StatusPresentation {
                icon: StatusIcon::Check,
                tooltip: match wrapper_path {
                    Some(path) => format!("Compose is installed (wrapper at {})", path.display()),
                    None => "Compose is installed and the engine is reachable".to_string(),
                },
                action: StatusAction::ShowChecks,
            },
            Self::InstalledNeedsPathSetup => StatusPresentation {
                icon: StatusIcon::Warning,
                tooltip: "Compose is installed but the wrapper folder is not on PATH".to_string(),
                action: StatusAction::ShowChecks,
            },
            Self::InstalledNeedsWrapper => StatusPresentation {
                icon: StatusIcon::Warning,
                tooltip: "Compose requires a wrapper for the active engine connection".to_string(),
                action: StatusAction::ShowChecks,
            },
            Self::NoRunningEngine => StatusPresentation {
                icon: StatusIcon::Warning,
                tooltip: "No running container engine".to_string(),
                action: StatusAction::ShowChecks,
            },
        }
    }
}

/// The lifecycle coordinator
///
/// Check and install both take `&mut self`, so two cycles can never
/// interleave against the same instance.
pub struct Coordinator {
    layout: StorageLayout,
    platform: PlatformInfo,
    detection: Box<dyn Detection + Send + Sync>,
    engines: Box<dyn EngineProvider + Send + Sync>,
    status_sink: Box<dyn StatusSink + Send>,
    messages: Box<dyn MessageSink + Send>,

    /// Set only when status is `InstalledNeedsPathSetup`; cleared at
    /// the start of every cycle
    advisory: Option<String>,
}

impl Coordinator {
    /// Create a coordinator over the given collaborators
    pub fn new(
        layout: StorageLayout,
        platform: PlatformInfo,
        detection: Box<dyn Detection + Send + Sync>,
        engines: Box<dyn EngineProvider + Send + Sync>,
        status_sink: Box<dyn StatusSink + Send>,
        messages: Box<dyn MessageSink + Send>,
    ) -> Self {
        Self {
            layout,
            platform,
            detection,
            engines,
            status_sink,
            messages,
            advisory: None,
        }
    }

    /// The advisory message carried out of the last cycle, if any
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Run one check cycle and push the resulting presentation
    ///
    /// `first_run` suppresses the advisory notification on the first
    /// cycle after activation; the advisory is still recorded so a
    /// subsequent cycle can surface it. Probe faults degrade to a
    /// warning presentation instead of propagating to the host.
    pub async fn run_check(&mut self, first_run: bool) -> StatusPresentation {
        self.advisory = None;

        let presentation = match self.evaluate().await {
            Ok((status, presentation)) => {
                debug!("Check cycle resolved to {:?}", status);
                presentation
            }
            Err(err) => {
                warn!("Check cycle degraded to warning: {}", err);
                StatusPresentation::warning(format!("Compose check failed: {err}"))
            }
        };

        self.status_sink.push(presentation.clone());

        if !first_run {
            if let Some(advisory) = &self.advisory {
                self.messages.notify(advisory);
            }
        }

        presentation
    }

    /// The reconciliation transition function
    ///
    /// Evaluated top-to-bottom, first match wins.
    async fn evaluate(&mut self) -> Result<(InstallationStatus, StatusPresentation)> {
        if !self.detection.has_compose().await? {
            let status = InstallationStatus::NotInstalled;
            return Ok((status, status.presentation(None)));
        }

        if self.detection.has_reachable_default_socket().await? {
            let status = InstallationStatus::InstalledAndReachable;
            return Ok((status, status.presentation(None)));
        }

        let connections = self.engines.list_connections().await?;
        let Some(connection) = connections
            .iter()
            .find(|c| c.status == ConnectionStatus::Started)
        else {
            let status = InstallationStatus::NoRunningEngine;
            return Ok((status, status.presentation(None)));
        };

        // Regenerate unconditionally once this branch is reached:
        // idempotent self-healing covers endpoint rotation.
        let bin_dir = self.layout.ensure_bin_dir()?;
        let wrapper_path = self.layout.wrapper_path(self.platform.os);
        let compose_binary = self.layout.compose_binary_path(self.platform.os);
        generate_wrapper(connection, &compose_binary, &wrapper_path, self.platform.os)?;

        if self.detection.has_wrapper_on_path()? {
            let status = InstallationStatus::InstalledAndReachable;
            Ok((status, status.presentation(Some(&wrapper_path))))
        } else {
            self.advisory = Some(format!(
                "A compose wrapper was generated at {}. Add {} to your PATH so compose \
                 invocations reach the running engine.",
                wrapper_path.display(),
                bin_dir.display()
            ));
            let status = InstallationStatus::InstalledNeedsPathSetup;
            Ok((status, status.presentation(None)))
        }
    }

    /// Run the explicit install flow
    ///
    /// Lists releases, lets the picker choose one (`None` defaults to
    /// the most recent), resolves the platform asset, downloads it
    /// atomically, grants execute permission where required, notifies
    /// success, and immediately re-runs the check cycle.
    pub async fn install(
        &mut self,
        releases: &ReleaseClient,
        downloader: &AssetDownloader,
        picker: &dyn VersionPicker,
    ) -> anyhow::Result<()> {
        let listing = releases
            .list_releases(RELEASE_LIMIT)
            .await
            .context("Failed to list compose releases")?;

        let descriptors: Vec<_> = listing.iter().map(|r| r.descriptor()).collect();
        let index = picker
            .pick(&descriptors)
            .context("Version selection failed")?
            .unwrap_or(0);
        let release = listing
            .get(index)
            .ok_or_else(|| anyhow!("Selected release index {index} out of range"))?;

        info!("Installing compose {}", release.label());

        let asset = releases.resolve_asset(release, self.platform.os, self.platform.arch)?;

        self.layout
            .ensure_bin_dir()
            .context("Failed to create bin folder")?;
        let destination = self.layout.compose_binary_path(self.platform.os);

        downloader
            .download(asset, &destination)
            .await
            .context("Failed to download compose binary")?;

        if self.platform.os.needs_exec_bit() {
            composekit_core::paths::make_executable(&destination)
                .context("Failed to grant execute permission")?;
        }

        let size = std::fs::metadata(&destination)
            .context("Installed binary missing after download")?
            .len();
        info!(
            "Compose binary installed at {} ({} bytes)",
            destination.display(),
            size
        );

        self.messages
            .notify(&format!("Compose {} installed", release.label()));

        // Refresh status right away, with non-first-run semantics
        self.run_check(false).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use composekit_core::{current_platform, Error};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::connection::EngineConnection;
    use crate::sinks::VersionPicker;

    struct StaticDetection {
        compose: bool,
        socket: bool,
        wrapper_on_path: bool,
    }

    #[async_trait]
    impl Detection for StaticDetection {
        async fn has_compose(&self) -> Result<bool> {
            Ok(self.compose)
        }

        async fn has_reachable_default_socket(&self) -> Result<bool> {
            Ok(self.socket)
        }

        fn has_wrapper_on_path(&self) -> Result<bool> {
            Ok(self.wrapper_on_path)
        }
    }

    #[derive(Clone, Default)]
    struct StaticEngines {
        connections: Arc<Mutex<Vec<EngineConnection>>>,
    }

    impl StaticEngines {
        fn with(connections: Vec<EngineConnection>) -> Self {
            Self {
                connections: Arc::new(Mutex::new(connections)),
            }
        }

        fn set(&self, connections: Vec<EngineConnection>) {
            *self.connections.lock().unwrap() = connections;
        }
    }

    #[async_trait]
    impl EngineProvider for StaticEngines {
        async fn list_connections(&self) -> Result<Vec<EngineConnection>> {
            Ok(self.connections.lock().unwrap().clone())
        }
    }

    struct FailingEngines;

    #[async_trait]
    impl EngineProvider for FailingEngines {
        async fn list_connections(&self) -> Result<Vec<EngineConnection>> {
            Err(Error::probe("engine provider unavailable"))
        }
    }

    #[derive(Clone, Default)]
    struct Recorder {
        statuses: Arc<Mutex<Vec<StatusPresentation>>>,
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl StatusSink for Recorder {
        fn push(&mut self, presentation: StatusPresentation) {
            self.statuses.lock().unwrap().push(presentation);
        }
    }

    impl MessageSink for Recorder {
        fn notify(&mut self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    struct NoSelection;

    impl VersionPicker for NoSelection {
        fn pick(&self, _choices: &[composekit_releases::ReleaseDescriptor]) -> Result<Option<usize>> {
            Ok(None)
        }
    }

    fn started(endpoint: &str) -> EngineConnection {
        EngineConnection::started("test", endpoint)
    }

    fn stopped() -> EngineConnection {
        EngineConnection {
            name: "stopped".to_string(),
            status: ConnectionStatus::Stopped,
            endpoint: "unix:///run/stopped.sock".to_string(),
        }
    }

    struct Fixture {
        coordinator: Coordinator,
        recorder: Recorder,
        engines: StaticEngines,
        layout: StorageLayout,
        _tmp: tempfile::TempDir,
    }

    fn fixture(detection: StaticDetection, connections: Vec<EngineConnection>) -> Fixture {
        let tmp = tempfile::tempdir().unwrap();
        let layout = StorageLayout::new(tmp.path().join("store"));
        let recorder = Recorder::default();
        let engines = StaticEngines::with(connections);

        let coordinator = Coordinator::new(
            layout.clone(),
            current_platform(),
            Box::new(detection),
            Box::new(engines.clone()),
            Box::new(recorder.clone()),
            Box::new(recorder.clone()),
        );

        Fixture {
            coordinator,
            recorder,
            engines,
            layout,
            _tmp: tmp,
        }
    }

    fn detection(compose: bool, socket: bool, wrapper_on_path: bool) -> StaticDetection {
        StaticDetection {
            compose,
            socket,
            wrapper_on_path,
        }
    }

    /// Expected status for one input combination, per the transition table
    fn expected_status(
        compose: bool,
        socket: bool,
        has_started: bool,
        wrapper_on_path: bool,
    ) -> InstallationStatus {
        if !compose {
            InstallationStatus::NotInstalled
        } else if socket {
            InstallationStatus::InstalledAndReachable
        } else if !has_started {
            InstallationStatus::NoRunningEngine
        } else if wrapper_on_path {
            InstallationStatus::InstalledAndReachable
        } else {
            InstallationStatus::InstalledNeedsPathSetup
        }
    }

    #[tokio::test]
    async fn test_full_transition_table() {
        for bits in 0..16u8 {
            let compose = bits & 1 != 0;
            let socket = bits & 2 != 0;
            let has_started = bits & 4 != 0;
            let wrapper_on_path = bits & 8 != 0;

            let connections = if has_started {
                vec![stopped(), started("unix:///run/engine.sock")]
            } else {
                vec![stopped()]
            };

            let mut fx = fixture(detection(compose, socket, wrapper_on_path), connections);
            let presentation = fx.coordinator.run_check(true).await;

            let expected = expected_status(compose, socket, has_started, wrapper_on_path);
            let wrapper = fx.layout.wrapper_path(current_platform().os);
            let via_wrapper = compose && !socket && has_started && wrapper_on_path;
            assert_eq!(
                presentation,
                expected.presentation(via_wrapper.then(|| wrapper.as_path())),
                "combination compose={compose} socket={socket} \
                 started={has_started} wrapper={wrapper_on_path}"
            );

            // Exactly one presentation pushed per cycle
            assert_eq!(fx.recorder.statuses.lock().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_scenario_a_not_installed() {
        let mut fx = fixture(detection(false, true, true), vec![]);
        let presentation = fx.coordinator.run_check(true).await;

        assert_eq!(presentation.icon, StatusIcon::Download);
        assert_eq!(presentation.tooltip, "Install Compose");
        assert_eq!(presentation.action, StatusAction::Install);
    }

    #[tokio::test]
    async fn test_scenario_b_reachable_without_wrapper_write() {
        let mut fx = fixture(
            detection(true, true, false),
            vec![started("unix:///run/engine.sock")],
        );
        let presentation = fx.coordinator.run_check(true).await;

        assert_eq!(presentation.icon, StatusIcon::Check);
        assert_eq!(presentation.action, StatusAction::ShowChecks);

        // Control never reached the regeneration branch
        let wrapper = fx.layout.wrapper_path(current_platform().os);
        assert!(!wrapper.exists());
    }

    #[tokio::test]
    async fn test_scenario_c_needs_path_setup() {
        let mut fx = fixture(
            detection(true, false, false),
            vec![started("unix:///run/engine.sock")],
        );

        // First cycle: advisory suppressed
        let presentation = fx.coordinator.run_check(true).await;
        assert_eq!(presentation.icon, StatusIcon::Warning);
        assert!(fx.recorder.messages.lock().unwrap().is_empty());

        // Wrapper was regenerated
        let wrapper = fx.layout.wrapper_path(current_platform().os);
        assert!(wrapper.exists());

        // Second cycle: advisory emitted, naming bin folder and wrapper
        fx.coordinator.run_check(false).await;
        let messages = fx.recorder.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains(&wrapper.display().to_string()));
        assert!(messages[0].contains(&fx.layout.bin_dir().display().to_string()));
    }

    #[tokio::test]
    async fn test_no_running_engine() {
        let mut fx = fixture(detection(true, false, false), vec![stopped()]);
        let presentation = fx.coordinator.run_check(true).await;

        assert_eq!(presentation.icon, StatusIcon::Warning);
        assert_eq!(presentation.tooltip, "No running container engine");

        let wrapper = fx.layout.wrapper_path(current_platform().os);
        assert!(!wrapper.exists());
    }

    #[tokio::test]
    async fn test_advisory_cleared_when_condition_resolves() {
        let mut fx = fixture(
            detection(true, false, false),
            vec![started("unix:///run/engine.sock")],
        );

        fx.coordinator.run_check(false).await;
        assert!(fx.coordinator.advisory().is_some());

        // Engine goes away: cycle re-runs, advisory cleared, no new message
        fx.engines.set(vec![]);
        fx.coordinator.run_check(false).await;
        assert!(fx.coordinator.advisory().is_none());
        assert_eq!(fx.recorder.messages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_advisory_repeats_while_condition_persists() {
        let mut fx = fixture(
            detection(true, false, false),
            vec![started("unix:///run/engine.sock")],
        );

        fx.coordinator.run_check(false).await;
        fx.coordinator.run_check(false).await;
        fx.coordinator.run_check(false).await;
        assert_eq!(fx.recorder.messages.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_wrapper_regeneration_tracks_endpoint_rotation() {
        let mut fx = fixture(
            detection(true, false, true),
            vec![started("unix:///run/first.sock")],
        );

        fx.coordinator.run_check(true).await;
        let wrapper = fx.layout.wrapper_path(current_platform().os);
        let first = std::fs::read_to_string(&wrapper).unwrap();
        assert!(first.contains("unix:///run/first.sock"));

        fx.engines.set(vec![started("tcp://10.0.0.9:2375")]);
        fx.coordinator.run_check(false).await;
        let second = std::fs::read_to_string(&wrapper).unwrap();
        assert!(second.contains("tcp://10.0.0.9:2375"));
        assert!(!second.contains("unix:///run/first.sock"));
    }

    #[tokio::test]
    async fn test_wrapper_variant_tooltip_names_wrapper_path() {
        let mut fx = fixture(
            detection(true, false, true),
            vec![started("unix:///run/engine.sock")],
        );

        let presentation = fx.coordinator.run_check(true).await;
        let wrapper = fx.layout.wrapper_path(current_platform().os);

        assert_eq!(presentation.icon, StatusIcon::Check);
        assert!(presentation
            .tooltip
            .contains(&wrapper.display().to_string()));
    }

    #[tokio::test]
    async fn test_probe_fault_degrades_to_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let recorder = Recorder::default();
        let mut coordinator = Coordinator::new(
            StorageLayout::new(tmp.path().join("store")),
            current_platform(),
            Box::new(detection(true, false, false)),
            Box::new(FailingEngines),
            Box::new(recorder.clone()),
            Box::new(recorder.clone()),
        );

        let presentation = coordinator.run_check(true).await;
        assert_eq!(presentation.icon, StatusIcon::Warning);
        assert_eq!(presentation.action, StatusAction::ShowChecks);
        assert!(presentation.tooltip.contains("Compose check failed"));
    }

    #[test]
    fn test_presentation_table_is_total() {
        // Every status maps to a deterministic presentation, including
        // the variant reconciliation never emits
        let needs_wrapper = InstallationStatus::InstalledNeedsWrapper.presentation(None);
        assert_eq!(needs_wrapper.icon, StatusIcon::Warning);
        assert_eq!(needs_wrapper.action, StatusAction::ShowChecks);

        let not_installed = InstallationStatus::NotInstalled.presentation(None);
        assert_eq!(not_installed.action, StatusAction::Install);
    }

    fn compose_release_json(server_uri: &str, tag: &str, label: &str) -> serde_json::Value {
        let assets: Vec<_> = [
            "docker-compose-linux-x86_64",
            "docker-compose-linux-aarch64",
            "docker-compose-darwin-x86_64",
            "docker-compose-darwin-aarch64",
            "docker-compose-windows-x86_64.exe",
            "docker-compose-windows-aarch64.exe",
        ]
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "browser_download_url": format!("{server_uri}/assets/{tag}/{name}"),
                "size": 12u64
            })
        })
        .collect();

        json!({
            "tag_name": tag,
            "name": label,
            "draft": false,
            "prerelease": false,
            "assets": assets
        })
    }

    async fn mock_release_source(server: &MockServer) {
        let listing = json!([
            compose_release_json(&server.uri(), "v2", "2.0"),
            compose_release_json(&server.uri(), "v1", "1.0"),
        ]);
        Mock::given(method("GET"))
            .and(path("/repos/docker/compose/releases"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_scenario_d_install_defaults_to_most_recent() {
        let server = MockServer::start().await;
        mock_release_source(&server).await;

        let binary = b"fake binary\n";
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(binary.as_slice()))
            .mount(&server)
            .await;

        let mut fx = fixture(detection(true, true, false), vec![]);
        let releases = ReleaseClient::new().unwrap().with_api_base(server.uri());
        let downloader = AssetDownloader::new().unwrap().with_progress(false);

        fx.coordinator
            .install(&releases, &downloader, &NoSelection)
            .await
            .unwrap();

        // Notification names the most recent release's label
        let messages = fx.recorder.messages.lock().unwrap();
        assert!(messages.iter().any(|m| m.contains("2.0")));

        // Binary at the OS-correct path, executable where required
        let platform = current_platform();
        let destination = fx.layout.compose_binary_path(platform.os);
        assert_eq!(std::fs::read(&destination).unwrap(), binary);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&destination)
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o755);
        }

        // Install re-runs the check cycle
        assert_eq!(fx.recorder.statuses.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_install_aborts_on_download_failure() {
        let server = MockServer::start().await;
        mock_release_source(&server).await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut fx = fixture(detection(true, true, false), vec![]);
        let releases = ReleaseClient::new().unwrap().with_api_base(server.uri());
        let downloader = AssetDownloader::new().unwrap().with_progress(false);

        let result = fx
            .coordinator
            .install(&releases, &downloader, &NoSelection)
            .await;
        assert!(result.is_err());

        // No artifact at the destination, no success message, no re-check
        let destination = fx.layout.compose_binary_path(current_platform().os);
        assert!(!destination.exists());
        assert!(fx.recorder.messages.lock().unwrap().is_empty());
        assert!(fx.recorder.statuses.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_install_aborts_when_listing_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/docker/compose/releases"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let mut fx = fixture(detection(true, true, false), vec![]);
        let releases = ReleaseClient::new().unwrap().with_api_base(server.uri());
        let downloader = AssetDownloader::new().unwrap().with_progress(false);

        let result = fx
            .coordinator
            .install(&releases, &downloader, &NoSelection)
            .await;
        assert!(result.is_err());
        assert!(!fx.layout.bin_dir().exists());
    }
}
