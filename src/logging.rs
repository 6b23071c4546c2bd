use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{DESKTOP_LOG_FILE, SHELL_ROOT_ENV};

/// Per-user shell root, e.g. `~/.skylight`, overridable via `SKYLIGHT_ROOT`.
pub(crate) fn default_shell_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(SHELL_ROOT_ENV) {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(".skylight"))
}

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn append_log_line(log_path: &Path, tag: &str, message: &str) {
    if let Some(parent) = log_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path) else {
        return;
    };

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    // Logging is best-effort; a failed write must never disturb startup.
    let _ = writeln!(file, "[{timestamp}] [{tag}] {message}");
}

fn append_tagged(tag: &str, message: &str) {
    let log_path = resolve_desktop_log_path(default_shell_root_dir(), DESKTOP_LOG_FILE);
    append_log_line(&log_path, tag, message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_tagged("startup", message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_tagged("desktop", message);
}

pub(crate) fn append_update_log(message: &str) {
    append_tagged("update", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_tagged("shutdown", message);
}
