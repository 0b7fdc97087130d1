use std::path::PathBuf;

use tauri::{webview::PageLoadEvent, AppHandle, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log,
    lifecycle::{self, ExitRequestAction},
    logging, runtime_paths,
    shell_config::ShellConfig,
    shell_host::TauriShellHost,
    window_actions,
    window_bootstrap::{self, ReadyOutcome},
    MainShellState, DESKTOP_LOG_FILE, MAIN_WINDOW_LABEL,
};

fn resolve_install_dir(app_handle: &AppHandle) -> PathBuf {
    runtime_paths::resolve_install_dir(
        runtime_paths::install_dir_override(),
        || app_handle.path().resource_dir().ok(),
        runtime_paths::executable_dir,
    )
}

fn handle_exit_requested(app_handle: &AppHandle, code: Option<i32>, api: &tauri::ExitRequestApi) {
    let Some(state) = app_handle.try_state::<MainShellState>() else {
        return;
    };

    let host = TauriShellHost::new(app_handle);
    if lifecycle::handle_exit_request(state.inner(), &host, code, append_shutdown_log)
        == ExitRequestAction::Prevent
    {
        api.prevent_exit();
    }
}

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(
            runtime_paths::default_desktop_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _args, _cwd| {
            append_desktop_log("second instance launched, focusing existing main window");
            window_actions::focus_main_window(app_handle, append_desktop_log);
        }))
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_is_desktop_runtime,
            crate::desktop_bridge_commands::desktop_bridge_get_shell_info,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::Destroyed = event {
                if let Some(state) = window.app_handle().try_state::<MainShellState>() {
                    lifecycle::handle_window_closed(state.inner(), append_desktop_log);
                }
            }
        })
        .on_page_load(|_webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            let config = ShellConfig::from_env(resolve_install_dir(&app_handle), !tauri::is_dev());
            append_startup_log(&format!(
                "shell config: packaged={} dev_server_url={} install_dir={} keeps_alive_without_windows={}",
                config.packaged,
                config.dev_server_url,
                config.install_dir.display(),
                config.platform.keeps_alive_without_windows
            ));
            app.manage(MainShellState::new(config));

            let state = app_handle.state::<MainShellState>();
            let host = TauriShellHost::new(&app_handle);
            match window_bootstrap::handle_ready(state.inner(), &host, append_startup_log) {
                Ok(ReadyOutcome::Launched(target)) => {
                    append_startup_log(&format!("main window launched: {target}"));
                }
                Ok(ReadyOutcome::AlreadyOpen | ReadyOutcome::ShuttingDown) => {}
                Err(error) => {
                    append_startup_log(&format!("failed to launch main window: {error}"));
                    return Err(error.into());
                }
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                handle_exit_requested(app_handle, code, &api);
            }
            RunEvent::Exit => {
                if let Some(state) = app_handle.try_state::<MainShellState>() {
                    lifecycle::handle_quit(state.inner(), append_shutdown_log);
                }
            }
            _ => {}
        });
}
