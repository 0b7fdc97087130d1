use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{runtime_paths, DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Desktop,
    Startup,
    Shutdown,
}

impl LogCategory {
    fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Startup => "startup",
            Self::Shutdown => "shutdown",
        }
    }
}

pub fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(|| env::temp_dir().join("trait-desktop"))
        .join("logs")
        .join(file_name)
}

pub(crate) fn format_log_line(category: LogCategory, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category.as_str(),
        message
    )
}

fn rotate_if_oversized(log_path: &Path, max_bytes: u64) -> Result<(), String> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(format!(
                "Failed to stat desktop log {}: {}",
                log_path.display(),
                error
            ))
        }
    };
    if size < max_bytes {
        return Ok(());
    }

    let mut rotated = log_path.as_os_str().to_owned();
    rotated.push(".1");
    fs::rename(log_path, PathBuf::from(&rotated)).map_err(|error| {
        format!(
            "Failed to rotate desktop log {}: {}",
            log_path.display(),
            error
        )
    })
}

pub(crate) fn append_log_line(
    log_path: &Path,
    max_bytes: u64,
    category: LogCategory,
    message: &str,
) -> Result<(), String> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create desktop log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }
    rotate_if_oversized(log_path, max_bytes)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open desktop log {}: {}", log_path.display(), error))?;
    file.write_all(format_log_line(category, message).as_bytes())
        .map_err(|error| format!("Failed to write desktop log {}: {}", log_path.display(), error))
}

fn append_log(category: LogCategory, message: &str) {
    eprintln!("[trait-desktop] [{}] {}", category.as_str(), message);

    let log_path = resolve_desktop_log_path(
        runtime_paths::default_desktop_root_dir(),
        DESKTOP_LOG_FILE,
    );
    if let Err(error) = append_log_line(&log_path, DESKTOP_LOG_MAX_BYTES, category, message) {
        eprintln!("[trait-desktop] {error}");
    }
}

pub fn append_desktop_log(message: &str) {
    append_log(LogCategory::Desktop, message);
}

pub fn append_startup_log(message: &str) {
    append_log(LogCategory::Startup, message);
}

pub fn append_shutdown_log(message: &str) {
    append_log(LogCategory::Shutdown, message);
}
