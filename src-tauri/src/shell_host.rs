use tauri::{
    ipc::CapabilityBuilder, AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};

use crate::{
    append_startup_log,
    window_bootstrap::{self, LoadTarget, WindowSpec},
};

const LOAD_TARGET_CAPABILITY: &str = "load-target";

/// The pieces of the native windowing host the shell drives.
pub trait ShellHost {
    type Window;

    fn create_window(&self, spec: &WindowSpec, target: &LoadTarget)
        -> Result<Self::Window, String>;

    fn terminate(&self, exit_code: i32);
}

pub struct TauriShellHost<'a, R: Runtime> {
    app_handle: &'a AppHandle<R>,
}

impl<'a, R: Runtime> TauriShellHost<'a, R> {
    pub fn new(app_handle: &'a AppHandle<R>) -> Self {
        Self { app_handle }
    }
}

impl<R: Runtime> TauriShellHost<'_, R> {
    /// Lets pages served from `target` reach the desktop bridge commands.
    fn allow_ipc_from(&self, spec: &WindowSpec, target: &LoadTarget) -> Result<(), String> {
        let pattern = window_bootstrap::ipc_remote_pattern(target)?;
        self.app_handle
            .add_capability(
                CapabilityBuilder::new(LOAD_TARGET_CAPABILITY)
                    .remote(pattern.clone())
                    .window(spec.label)
                    .permission("core:default"),
            )
            .map_err(|error| format!("Failed to allow IPC from {pattern}: {error}"))
    }
}

impl<R: Runtime> ShellHost for TauriShellHost<'_, R> {
    type Window = WebviewWindow<R>;

    fn create_window(
        &self,
        spec: &WindowSpec,
        target: &LoadTarget,
    ) -> Result<Self::Window, String> {
        if let Err(error) = self.allow_ipc_from(spec, target) {
            append_startup_log(&error);
        }

        WebviewWindowBuilder::new(
            self.app_handle,
            spec.label,
            WebviewUrl::External(target.url().clone()),
        )
        .title(spec.title)
        .inner_size(spec.width, spec.height)
        .build()
        .map_err(|error| format!("Failed to create {} window: {error}", spec.label))
    }

    fn terminate(&self, exit_code: i32) {
        self.app_handle.exit(exit_code);
    }
}
