use std::sync::Mutex;

use crate::shell_config::ShellConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    NoWindow,
    WindowOpen,
    Terminated,
}

/// Process-lifetime shell state handed to every lifecycle handler.
///
/// Holds at most one main window reference.
pub struct ShellState<W> {
    pub(crate) config: ShellConfig,
    main_window: Mutex<Option<W>>,
    phase: Mutex<LifecyclePhase>,
}

impl<W> ShellState<W> {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            main_window: Mutex::new(None),
            phase: Mutex::new(LifecyclePhase::NoWindow),
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
            .lock()
            .map(|guard| *guard)
            .unwrap_or(LifecyclePhase::Terminated)
    }

    pub fn has_main_window(&self) -> bool {
        self.main_window
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    pub(crate) fn set_phase(&self, phase: LifecyclePhase) -> Result<(), String> {
        *self
            .phase
            .lock()
            .map_err(|_| "Shell lifecycle lock poisoned.".to_string())? = phase;
        Ok(())
    }

    pub(crate) fn store_main_window(&self, window: W) -> Result<(), String> {
        *self
            .main_window
            .lock()
            .map_err(|_| "Main window lock poisoned.".to_string())? = Some(window);
        Ok(())
    }

    pub(crate) fn take_main_window(&self) -> Result<Option<W>, String> {
        Ok(self
            .main_window
            .lock()
            .map_err(|_| "Main window lock poisoned.".to_string())?
            .take())
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellInfo {
    pub(crate) packaged: bool,
    pub(crate) load_target: String,
    pub(crate) keeps_alive_without_windows: bool,
    pub(crate) window_width: f64,
    pub(crate) window_height: f64,
}
