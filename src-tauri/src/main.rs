#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod desktop_bridge_commands;
mod host_platform;
mod lifecycle;
mod logging;
mod runtime_paths;
mod shell_config;
mod shell_host;
#[cfg(test)]
mod test_host;
mod window_actions;
mod window_bootstrap;

pub(crate) use app_constants::*;
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

pub(crate) type MainShellState = app_types::ShellState<tauri::WebviewWindow>;

fn main() {
    app_runtime::run();
}
