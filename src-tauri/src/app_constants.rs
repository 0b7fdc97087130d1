pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_TITLE: &str = "TRAIT";
pub const MAIN_WINDOW_WIDTH: f64 = 800.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 600.0;

pub const DEFAULT_DEV_SERVER_URL: &str = "http://localhost:5173";
pub const PACKAGED_DIST_DIR: &str = "dist";
pub const PACKAGED_ENTRY_DOCUMENT: &str = "index.html";

pub const DEV_SERVER_URL_ENV: &str = "TRAIT_DEV_SERVER_URL";
pub const PACKAGED_OVERRIDE_ENV: &str = "TRAIT_DESKTOP_PACKAGED";
pub const KEEP_ALIVE_OVERRIDE_ENV: &str = "TRAIT_DESKTOP_KEEP_ALIVE";
pub const INSTALL_DIR_ENV: &str = "TRAIT_INSTALL_DIR";
pub const DESKTOP_ROOT_ENV: &str = "TRAIT_DESKTOP_ROOT";

pub const DESKTOP_ROOT_DIR_NAME: &str = ".trait-desktop";
pub const DESKTOP_LOG_FILE: &str = "desktop.log";
pub const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
