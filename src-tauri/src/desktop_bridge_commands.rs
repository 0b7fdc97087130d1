use tauri::{AppHandle, Manager};

use crate::{
    app_types::ShellInfo, shell_config::ShellConfig, window_bootstrap, MainShellState,
    MAIN_WINDOW_HEIGHT, MAIN_WINDOW_WIDTH,
};

pub(crate) fn shell_info_for_config(config: &ShellConfig) -> Result<ShellInfo, String> {
    let target = window_bootstrap::resolve_config_load_target(config)?;
    Ok(ShellInfo {
        packaged: config.packaged,
        load_target: target.to_string(),
        keeps_alive_without_windows: config.platform.keeps_alive_without_windows,
        window_width: MAIN_WINDOW_WIDTH,
        window_height: MAIN_WINDOW_HEIGHT,
    })
}

#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_shell_info(app_handle: AppHandle) -> Result<ShellInfo, String> {
    let state = app_handle
        .try_state::<MainShellState>()
        .ok_or_else(|| "Desktop shell state is not initialized.".to_string())?;
    shell_info_for_config(&state.config)
}
