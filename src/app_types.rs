use std::sync::Mutex;

use crate::{
    env_config::EnvConfig, startup_coordinator::StartupCoordinator,
    tauri_window_host::TauriWindowHost,
};

pub(crate) type DesktopCoordinator = StartupCoordinator<TauriWindowHost>;

/// Managed shell state: the coordinator behind one mutex (all orchestration
/// is sequential; the async update task re-enters through this lock) plus
/// the immutable startup configuration.
pub(crate) struct ShellState {
    pub(crate) coordinator: Mutex<DesktopCoordinator>,
    pub(crate) config: EnvConfig,
}

impl ShellState {
    pub(crate) fn new(coordinator: DesktopCoordinator, config: EnvConfig) -> Self {
        Self {
            coordinator: Mutex::new(coordinator),
            config,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl BridgeResult {
    pub(crate) fn succeeded() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StartupStateSnapshot {
    pub(crate) phase: String,
    pub(crate) update_phase: String,
    pub(crate) shell_version: String,
    pub(crate) entry_url: String,
    pub(crate) dev_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::{BridgeResult, StartupStateSnapshot};

    #[test]
    fn bridge_result_helpers_carry_the_reason() {
        let ok = BridgeResult::succeeded();
        assert!(ok.ok);
        assert!(ok.reason.is_none());

        let failed = BridgeResult::failed("no handler");
        assert!(!failed.ok);
        assert_eq!(failed.reason.as_deref(), Some("no handler"));
    }

    #[test]
    fn startup_snapshot_serializes_camel_case_for_the_web_content() {
        let snapshot = StartupStateSnapshot {
            phase: "PrimaryVisible".to_string(),
            update_phase: "NoAction".to_string(),
            shell_version: "1.4.2".to_string(),
            entry_url: "http://localhost:3000/".to_string(),
            dev_mode: false,
        };

        let json = serde_json::to_value(&snapshot).expect("serialize snapshot");
        assert_eq!(json["updatePhase"], "NoAction");
        assert_eq!(json["shellVersion"], "1.4.2");
        assert_eq!(json["entryUrl"], "http://localhost:3000/");
        assert_eq!(json["devMode"], false);
    }
}
