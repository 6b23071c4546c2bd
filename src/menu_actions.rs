use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, append_shutdown_log, system_browser, HELP_URL, PRIMARY_WINDOW_LABEL,
};

pub(crate) const MENU_RELOAD: &str = "menu_reload";
pub(crate) const MENU_TOGGLE_DEVTOOLS: &str = "menu_toggle_devtools";
pub(crate) const MENU_DOCUMENTATION: &str = "menu_documentation";
pub(crate) const MENU_QUIT: &str = "menu_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Reload,
    ToggleDevtools,
    Documentation,
    Quit,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_RELOAD => Some(MenuAction::Reload),
        MENU_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevtools),
        MENU_DOCUMENTATION => Some(MenuAction::Documentation),
        MENU_QUIT => Some(MenuAction::Quit),
        _ => None,
    }
}

pub(crate) fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match action_from_menu_id(menu_id) {
        Some(MenuAction::Reload) => {
            let Some(window) = app_handle.get_webview_window(PRIMARY_WINDOW_LABEL) else {
                append_desktop_log("menu reload skipped: primary window not found");
                return;
            };
            if let Err(error) = window.eval("window.location.reload()") {
                append_desktop_log(&format!("failed to reload primary window: {error}"));
            }
        }
        Some(MenuAction::ToggleDevtools) => {
            #[cfg(debug_assertions)]
            if let Some(window) = app_handle.get_webview_window(PRIMARY_WINDOW_LABEL) {
                if window.is_devtools_open() {
                    window.close_devtools();
                } else {
                    window.open_devtools();
                }
            }
            #[cfg(not(debug_assertions))]
            append_desktop_log("devtools toggle ignored in release build");
        }
        Some(MenuAction::Documentation) => {
            if let Err(error) = system_browser::open_in_system_browser(HELP_URL) {
                append_desktop_log(&format!("failed to open documentation: {error}"));
            }
        }
        Some(MenuAction::Quit) => {
            append_shutdown_log("quit requested from application menu");
            app_handle.exit(0);
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(action_from_menu_id(MENU_RELOAD), Some(MenuAction::Reload));
        assert_eq!(
            action_from_menu_id(MENU_TOGGLE_DEVTOOLS),
            Some(MenuAction::ToggleDevtools)
        );
        assert_eq!(
            action_from_menu_id(MENU_DOCUMENTATION),
            Some(MenuAction::Documentation)
        );
        assert_eq!(action_from_menu_id(MENU_QUIT), Some(MenuAction::Quit));
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }
}
