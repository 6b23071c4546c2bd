use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log,
    app_types::{BridgeResult, ShellState, StartupStateSnapshot},
    navigation_policy,
};

#[tauri::command]
pub(crate) fn shell_bridge_is_desktop_runtime() -> bool {
    true
}

/// Web content never navigates out of the shell itself; external targets go
/// through here and land in the system browser.
#[tauri::command]
pub(crate) fn shell_bridge_open_external_url(app_handle: AppHandle, url: String) -> BridgeResult {
    let parsed = match navigation_policy::parse_openable_url(&url) {
        Ok(parsed) => parsed,
        Err(error) => return BridgeResult::failed(error),
    };

    let state = app_handle.state::<ShellState>();
    let coordinator = match state.coordinator.lock() {
        Ok(coordinator) => coordinator,
        Err(_) => return BridgeResult::failed("Shell state lock poisoned."),
    };

    match coordinator.on_external_navigation(parsed.as_ref(), append_desktop_log) {
        Ok(()) => BridgeResult::succeeded(),
        Err(error) => BridgeResult::failed(error),
    }
}

#[tauri::command]
pub(crate) fn shell_bridge_get_startup_state(app_handle: AppHandle) -> StartupStateSnapshot {
    let state = app_handle.state::<ShellState>();
    let (phase, update_phase) = state
        .coordinator
        .lock()
        .map(|coordinator| {
            (
                format!("{:?}", coordinator.phase()),
                format!("{:?}", coordinator.update_phase()),
            )
        })
        .unwrap_or_else(|_| ("Unknown".to_string(), "Unknown".to_string()));

    StartupStateSnapshot {
        phase,
        update_phase,
        shell_version: app_handle.package_info().version.to_string(),
        entry_url: state.config.entry_url.to_string(),
        dev_mode: state.config.dev_mode,
    }
}
