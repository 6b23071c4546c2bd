use tauri::{AppHandle, Emitter};

use crate::{
    append_update_log,
    update_orchestrator::{UpdateObserver, UpdateProgress},
    DOWNLOAD_PROGRESS_EVENT,
};

/// Production update observer: forwards progress to the splash page as a
/// shell event and mirrors the lifecycle into the desktop log.
pub(crate) struct EventUpdateObserver {
    app: AppHandle,
}

impl EventUpdateObserver {
    pub(crate) fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl UpdateObserver for EventUpdateObserver {
    fn on_progress(&self, progress: UpdateProgress) {
        if let Err(error) = self.app.emit(DOWNLOAD_PROGRESS_EVENT, progress.percent) {
            append_update_log(&format!("failed to emit download progress: {error}"));
        }
    }

    fn on_downloaded(&self) {
        // The orchestrator logs the download completion; here the splash
        // just gets its bar filled while install and restart proceed.
        if let Err(error) = self.app.emit(DOWNLOAD_PROGRESS_EVENT, 100.0_f64) {
            append_update_log(&format!("failed to emit download completion: {error}"));
        }
    }

    fn on_error(&self, cause: &str) {
        append_update_log(&format!("update flow error: {cause}"));
    }
}
