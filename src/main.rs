#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod asset_resolver;
mod dev_tools;
mod env_config;
mod logging;
mod menu_actions;
mod menu_builder;
mod navigation_policy;
mod shell_bridge_commands;
mod startup_coordinator;
mod system_browser;
mod tauri_window_host;
mod update_events;
mod update_orchestrator;
mod update_runtime;
mod window_host;
mod window_lifecycle;

pub(crate) use app_constants::*;
pub(crate) use logging::{
    append_desktop_log, append_shutdown_log, append_startup_log, append_update_log,
};

fn main() {
    app_runtime::run();
}
