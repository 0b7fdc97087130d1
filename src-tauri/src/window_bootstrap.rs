use std::{
    fmt,
    path::{Path, PathBuf},
};

use url::Url;

use crate::{
    app_types::{LifecyclePhase, ShellState},
    shell_config::ShellConfig,
    shell_host::ShellHost,
    MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
    PACKAGED_DIST_DIR, PACKAGED_ENTRY_DOCUMENT,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    pub label: &'static str,
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
}

pub fn main_window_spec() -> WindowSpec {
    WindowSpec {
        label: MAIN_WINDOW_LABEL,
        title: MAIN_WINDOW_TITLE,
        width: MAIN_WINDOW_WIDTH,
        height: MAIN_WINDOW_HEIGHT,
    }
}

/// What the main window loads: the live dev server or the packaged bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    DevServer(Url),
    PackagedEntry(Url),
}

impl LoadTarget {
    pub fn url(&self) -> &Url {
        match self {
            Self::DevServer(url) | Self::PackagedEntry(url) => url,
        }
    }
}

impl fmt::Display for LoadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `Url` always serializes a bare origin with a trailing slash.
            Self::DevServer(url)
                if url.path() == "/" && url.query().is_none() && url.fragment().is_none() =>
            {
                f.write_str(url.as_str().trim_end_matches('/'))
            }
            Self::DevServer(url) | Self::PackagedEntry(url) => f.write_str(url.as_str()),
        }
    }
}

pub fn packaged_entry_path(install_dir: &Path) -> PathBuf {
    install_dir
        .join(PACKAGED_DIST_DIR)
        .join(PACKAGED_ENTRY_DOCUMENT)
}

pub fn resolve_load_target(
    packaged: bool,
    dev_server_url: &Url,
    install_dir: &Path,
) -> Result<LoadTarget, String> {
    if !packaged {
        return Ok(LoadTarget::DevServer(dev_server_url.clone()));
    }

    let entry_path = packaged_entry_path(install_dir);
    Url::from_file_path(&entry_path)
        .map(LoadTarget::PackagedEntry)
        .map_err(|()| {
            format!(
                "Packaged entry path is not absolute: {}",
                entry_path.display()
            )
        })
}

pub fn resolve_config_load_target(config: &ShellConfig) -> Result<LoadTarget, String> {
    resolve_load_target(config.packaged, &config.dev_server_url, &config.install_dir)
}

/// URL pattern under which pages of `target` may call the desktop bridge.
pub fn ipc_remote_pattern(target: &LoadTarget) -> Result<String, String> {
    match target {
        LoadTarget::DevServer(url) => Ok(format!("{}/*", url.origin().ascii_serialization())),
        LoadTarget::PackagedEntry(url) => url
            .join(".")
            .map(|dist_dir| format!("{dist_dir}*"))
            .map_err(|error| format!("Failed to derive bundle directory from {url}: {error}")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadyOutcome {
    Launched(LoadTarget),
    AlreadyOpen,
    ShuttingDown,
}

/// Creates the single main window and points it at the configured target.
///
/// Window creation errors are returned as-is; nothing is retried.
pub fn handle_ready<H, F>(
    state: &ShellState<H::Window>,
    host: &H,
    log: F,
) -> Result<ReadyOutcome, String>
where
    H: ShellHost,
    F: Fn(&str),
{
    match state.phase() {
        LifecyclePhase::Terminated => {
            log("ready ignored: desktop shell is shutting down");
            return Ok(ReadyOutcome::ShuttingDown);
        }
        LifecyclePhase::WindowOpen if state.has_main_window() => {
            log("ready ignored: main window already open");
            return Ok(ReadyOutcome::AlreadyOpen);
        }
        _ => {}
    }

    log("launching desktop window...");
    let target = resolve_config_load_target(&state.config)?;
    let spec = main_window_spec();
    log(&format!(
        "creating {} window {}x{} loading {}",
        spec.label, spec.width, spec.height, target
    ));

    let window = host.create_window(&spec, &target)?;
    state.store_main_window(window)?;
    state.set_phase(LifecyclePhase::WindowOpen)?;
    Ok(ReadyOutcome::Launched(target))
}
