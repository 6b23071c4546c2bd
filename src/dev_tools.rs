use std::{
    fs,
    path::{Path, PathBuf},
};

use tauri::{AppHandle, Manager};

use crate::{env_config::EnvConfig, logging, PRIMARY_WINDOW_LABEL};

fn devtools_profile_dir(root_dir: Option<PathBuf>) -> Option<PathBuf> {
    root_dir.map(|root| root.join("cache").join("devtools"))
}

fn refresh_devtools_profile<F>(profile_dir: &Path, log: F)
where
    F: Fn(&str),
{
    match fs::remove_dir_all(profile_dir) {
        Ok(()) => log(&format!(
            "cleared cached devtools profile {}",
            profile_dir.display()
        )),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
        Err(error) => log(&format!(
            "failed to clear devtools profile {}: {}",
            profile_dir.display(),
            error
        )),
    }
}

/// Development-only tooling: optionally drop the cached tooling profile so
/// it is re-installed from scratch, then open devtools on the primary
/// window. Best-effort on every step.
pub(crate) fn install_dev_tools<F>(app_handle: &AppHandle, config: &EnvConfig, log: F)
where
    F: Fn(&str),
{
    if !config.dev_mode {
        return;
    }

    if config.force_devtools_refresh {
        if let Some(profile_dir) = devtools_profile_dir(logging::default_shell_root_dir()) {
            refresh_devtools_profile(&profile_dir, &log);
        }
    }

    #[cfg(debug_assertions)]
    if let Some(window) = app_handle.get_webview_window(PRIMARY_WINDOW_LABEL) {
        window.open_devtools();
    }
    #[cfg(not(debug_assertions))]
    let _ = app_handle;
}
