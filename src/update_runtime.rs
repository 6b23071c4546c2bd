use tauri::{AppHandle, Manager};
use tauri_plugin_updater::UpdaterExt;

use crate::{
    append_update_log,
    app_types::{DesktopCoordinator, ShellState},
    update_orchestrator::{UpdateCheckResult, UpdateDecision},
};

/// Bridge the updater plugin into the orchestrator. One task per launch,
/// spawned when the splash content finishes loading; every outcome is fed
/// back through the managed coordinator.
pub(crate) fn spawn_update_check(app_handle: AppHandle) {
    tauri::async_runtime::spawn(async move {
        run_update_flow(app_handle).await;
    });
}

/// The shell may already be tearing down when an async callback lands; a
/// missing state or coordinator turns the callback into a no-op.
fn with_coordinator<R>(
    app_handle: &AppHandle,
    f: impl FnOnce(&mut DesktopCoordinator) -> R,
) -> Option<R> {
    let state = app_handle.try_state::<ShellState>()?;
    let mut coordinator = state.coordinator.lock().ok()?;
    Some(f(&mut coordinator))
}

fn report_check_failure(app_handle: &AppHandle, cause: &str) {
    with_coordinator(app_handle, |coordinator| {
        coordinator.on_update_check_failed(cause, append_update_log)
    });
}

async fn run_update_flow(app_handle: AppHandle) {
    let local_version = app_handle.package_info().version.to_string();

    let updater = match app_handle.updater() {
        Ok(updater) => updater,
        Err(error) => {
            report_check_failure(&app_handle, &format!("failed to initialize updater: {error}"));
            return;
        }
    };

    append_update_log(&format!(
        "checking for updates, local version {local_version}"
    ));
    match updater.check().await {
        Ok(Some(update)) => {
            let in_flight = with_coordinator(&app_handle, |coordinator| {
                coordinator.is_update_download_in_flight()
            })
            .unwrap_or(false);
            let check = UpdateCheckResult {
                remote_version: update.version.to_string(),
                local_version,
                has_download_in_flight: in_flight,
            };
            let decision = with_coordinator(&app_handle, |coordinator| {
                coordinator.on_update_check_complete(Some(check), append_update_log)
            });
            if decision == Some(UpdateDecision::Download) {
                download_and_install(app_handle, update).await;
            }
        }
        Ok(None) => {
            with_coordinator(&app_handle, |coordinator| {
                coordinator.on_update_check_complete(None, append_update_log)
            });
        }
        Err(error) => {
            report_check_failure(&app_handle, &error.to_string());
        }
    }
}

async fn download_and_install(app_handle: AppHandle, update: tauri_plugin_updater::Update) {
    let progress_handle = app_handle.clone();
    let mut received: u64 = 0;

    let downloaded_bytes = match update
        .download(
            move |chunk_len, content_len| {
                received += chunk_len as u64;
                let percent = match content_len {
                    Some(total) if total > 0 => received as f64 * 100.0 / total as f64,
                    _ => 0.0,
                };
                with_coordinator(&progress_handle, |coordinator| {
                    coordinator.on_download_progress(percent)
                });
            },
            || {},
        )
        .await
    {
        Ok(bytes) => bytes,
        Err(error) => {
            with_coordinator(&app_handle, |coordinator| {
                coordinator.on_download_error(&error.to_string(), append_update_log)
            });
            return;
        }
    };

    let proceed = with_coordinator(&app_handle, |coordinator| {
        coordinator.on_update_downloaded(append_update_log)
    })
    .unwrap_or(false);
    if !proceed {
        // The launch that wanted this artifact is gone; drop it.
        append_update_log("download completed after the launch ended, skipping install");
        return;
    }

    if let Err(error) = update.install(&downloaded_bytes) {
        with_coordinator(&app_handle, |coordinator| {
            coordinator.on_download_error(&format!("install failed: {error}"), append_update_log)
        });
        return;
    }

    append_update_log("update installed, restarting application");
    app_handle.request_restart();
}
