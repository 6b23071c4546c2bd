use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle,
};

use crate::menu_actions;

/// Build and attach the custom application menu. The primary window itself
/// carries no window-manager menu chrome; this menu is the only one.
/// Failure here is non-fatal and only logged by the caller.
pub(crate) fn attach_app_menu(app_handle: &AppHandle) -> Result<(), String> {
    let reload_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_RELOAD,
        "Reload",
        true,
        Some("CmdOrCtrl+R"),
    )
    .map_err(|error| format!("Failed to create reload menu item: {error}"))?;
    let devtools_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_TOGGLE_DEVTOOLS,
        "Toggle Developer Tools",
        cfg!(debug_assertions),
        Some("CmdOrCtrl+Shift+I"),
    )
    .map_err(|error| format!("Failed to create devtools menu item: {error}"))?;
    let quit_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_QUIT,
        "Quit Skylight",
        true,
        Some("CmdOrCtrl+Q"),
    )
    .map_err(|error| format!("Failed to create quit menu item: {error}"))?;
    let documentation_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_DOCUMENTATION,
        "Documentation",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create documentation menu item: {error}"))?;
    let separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create separator menu item: {error}"))?;

    let view_menu = Submenu::with_items(
        app_handle,
        "View",
        true,
        &[&reload_item, &devtools_item, &separator, &quit_item],
    )
    .map_err(|error| format!("Failed to build view menu: {error}"))?;
    let help_menu = Submenu::with_items(app_handle, "Help", true, &[&documentation_item])
        .map_err(|error| format!("Failed to build help menu: {error}"))?;

    let menu = Menu::with_items(app_handle, &[&view_menu, &help_menu])
        .map_err(|error| format!("Failed to build application menu: {error}"))?;

    app_handle
        .set_menu(menu)
        .map(|_| ())
        .map_err(|error| format!("Failed to attach application menu: {error}"))
}
