use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log, app_types::ShellState, dev_tools,
    env_config::EnvConfig, logging, menu_actions, startup_coordinator::StartupCoordinator,
    tauri_window_host::TauriWindowHost, update_events::EventUpdateObserver, update_runtime,
    window_host::WindowKind, DESKTOP_LOG_FILE, PRIMARY_WINDOW_LABEL, SPLASH_WINDOW_LABEL,
};

fn window_kind_for_label(label: &str) -> Option<WindowKind> {
    match label {
        l if l == SPLASH_WINDOW_LABEL => Some(WindowKind::Splash),
        l if l == PRIMARY_WINDOW_LABEL => Some(WindowKind::Primary),
        _ => None,
    }
}

pub(crate) fn run() {
    let config = EnvConfig::from_env();

    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(logging::default_shell_root_dir(), DESKTOP_LOG_FILE)
            .display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_updater::Builder::new().build())
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            // A second launch hands control to the running instance.
            if let Some(window) = app_handle.get_webview_window(PRIMARY_WINDOW_LABEL) {
                let _ = window.show();
                let _ = window.set_focus();
            }
        }))
        .invoke_handler(tauri::generate_handler![
            crate::shell_bridge_commands::shell_bridge_is_desktop_runtime,
            crate::shell_bridge_commands::shell_bridge_open_external_url,
            crate::shell_bridge_commands::shell_bridge_get_startup_state,
        ])
        .on_page_load(|webview, payload| {
            let app_handle = webview.app_handle();
            let Some(state) = app_handle.try_state::<ShellState>() else {
                return;
            };
            let Ok(mut coordinator) = state.coordinator.lock() else {
                return;
            };

            match (webview.window().label(), payload.event()) {
                (SPLASH_WINDOW_LABEL, PageLoadEvent::Finished) => {
                    append_startup_log("splash content loaded");
                    if coordinator.on_splash_finished_loading() {
                        drop(coordinator);
                        update_runtime::spawn_update_check(app_handle.clone());
                    }
                }
                (PRIMARY_WINDOW_LABEL, PageLoadEvent::Started) => {
                    coordinator.on_primary_started_loading();
                }
                (PRIMARY_WINDOW_LABEL, PageLoadEvent::Finished) => {
                    append_startup_log("primary content loaded");
                    coordinator.on_primary_finished_loading(append_desktop_log);
                }
                _ => {}
            }
        })
        .on_window_event(|window, event| {
            if !matches!(event, WindowEvent::Destroyed) {
                return;
            }
            let Some(kind) = window_kind_for_label(window.label()) else {
                return;
            };
            let app_handle = window.app_handle();
            let Some(state) = app_handle.try_state::<ShellState>() else {
                return;
            };
            let Ok(mut coordinator) = state.coordinator.lock() else {
                return;
            };
            if coordinator.on_window_destroyed(kind, append_desktop_log) {
                drop(coordinator);
                app_handle.exit(0);
            }
        })
        .on_menu_event(|app_handle, event| {
            menu_actions::handle_menu_event(app_handle, event.id().as_ref())
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();

            let host = TauriWindowHost::new(app_handle.clone(), &config);
            let mut coordinator = StartupCoordinator::new(
                host,
                config.start_minimized,
                cfg!(target_os = "macos"),
            );
            coordinator.set_update_observer(Box::new(EventUpdateObserver::new(app_handle.clone())));
            app.manage(ShellState::new(coordinator, config.clone()));

            let state = app_handle.state::<ShellState>();
            {
                let Ok(mut coordinator) = state.coordinator.lock() else {
                    append_startup_log("shell state lock poisoned during setup");
                    app_handle.exit(1);
                    return Ok(());
                };
                if let Err(error) = coordinator.launch(append_startup_log) {
                    // Window creation refusal is the one fatal startup path.
                    append_startup_log(&format!("startup failed: {error}"));
                    coordinator.on_terminating();
                    drop(coordinator);
                    app_handle.exit(1);
                    return Ok(());
                }
            }

            dev_tools::install_dev_tools(&app_handle, &config, append_startup_log);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                let Some(state) = app_handle.try_state::<ShellState>() else {
                    return;
                };
                let Ok(mut coordinator) = state.coordinator.lock() else {
                    return;
                };
                match coordinator.on_reactivate(append_desktop_log) {
                    Ok(true) => append_desktop_log("relaunched after reactivation"),
                    Ok(false) => {}
                    Err(error) => {
                        append_desktop_log(&format!("reactivation failed: {error}"));
                        drop(coordinator);
                        app_handle.exit(1);
                    }
                }
            }
            RunEvent::ExitRequested { .. } => {
                if let Some(state) = app_handle.try_state::<ShellState>() {
                    if let Ok(mut coordinator) = state.coordinator.lock() {
                        coordinator.on_terminating();
                    }
                }
            }
            RunEvent::Exit => {
                append_shutdown_log("desktop process exiting");
            }
            _ => {}
        });
}
