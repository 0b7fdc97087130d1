use std::{env, path::PathBuf};

use url::Url;

use crate::{
    host_platform::HostPlatform, DEFAULT_DEV_SERVER_URL, DEV_SERVER_URL_ENV,
    KEEP_ALIVE_OVERRIDE_ENV, PACKAGED_OVERRIDE_ENV,
};

/// Startup configuration, resolved once before the main window is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub packaged: bool,
    pub dev_server_url: Url,
    pub install_dir: PathBuf,
    pub platform: HostPlatform,
}

impl ShellConfig {
    pub fn from_env(install_dir: PathBuf, default_packaged: bool) -> Self {
        Self::resolve(
            |key| env::var(key).ok(),
            install_dir,
            default_packaged,
            HostPlatform::current(),
        )
    }

    pub fn resolve<F>(
        lookup: F,
        install_dir: PathBuf,
        default_packaged: bool,
        default_platform: HostPlatform,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let packaged = lookup(PACKAGED_OVERRIDE_ENV)
            .as_deref()
            .and_then(parse_bool_flag)
            .unwrap_or(default_packaged);
        let dev_server_url = normalize_dev_server_url(
            &lookup(DEV_SERVER_URL_ENV).unwrap_or_else(|| DEFAULT_DEV_SERVER_URL.to_string()),
        );
        let platform = default_platform.with_keep_alive_override(
            lookup(KEEP_ALIVE_OVERRIDE_ENV)
                .as_deref()
                .and_then(parse_bool_flag),
        );

        Self {
            packaged,
            dev_server_url,
            install_dir,
            platform,
        }
    }
}

pub(crate) fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_dev_server_url() -> Url {
    Url::parse(DEFAULT_DEV_SERVER_URL).expect("DEFAULT_DEV_SERVER_URL is a valid URL")
}

pub(crate) fn normalize_dev_server_url(raw: &str) -> Url {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default_dev_server_url();
    }

    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => parsed,
        _ => default_dev_server_url(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn resolve_with(vars: &[(&str, &str)], default_packaged: bool) -> ShellConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ShellConfig::resolve(
            |key| vars.get(key).cloned(),
            PathBuf::from("/opt/trait"),
            default_packaged,
            HostPlatform::NON_PERSISTENT,
        )
    }

    #[test]
    fn resolve_uses_defaults_without_overrides() {
        let config = resolve_with(&[], false);
        assert!(!config.packaged);
        assert_eq!(config.dev_server_url.as_str(), "http://localhost:5173/");
        assert_eq!(config.install_dir, PathBuf::from("/opt/trait"));
        assert_eq!(config.platform, HostPlatform::NON_PERSISTENT);
    }

    #[test]
    fn resolve_applies_env_overrides() {
        let config = resolve_with(
            &[
                (PACKAGED_OVERRIDE_ENV, "yes"),
                (DEV_SERVER_URL_ENV, "http://127.0.0.1:3000"),
                (KEEP_ALIVE_OVERRIDE_ENV, "1"),
            ],
            false,
        );
        assert!(config.packaged);
        assert_eq!(config.dev_server_url.as_str(), "http://127.0.0.1:3000/");
        assert_eq!(config.platform, HostPlatform::PERSISTENT);
    }

    #[test]
    fn resolve_ignores_unrecognized_packaged_flag() {
        let config = resolve_with(&[(PACKAGED_OVERRIDE_ENV, "maybe")], true);
        assert!(config.packaged);
    }

    #[test]
    fn parse_bool_flag_accepts_common_spellings() {
        assert_eq!(parse_bool_flag(" TRUE "), Some(true));
        assert_eq!(parse_bool_flag("off"), Some(false));
        assert_eq!(parse_bool_flag(""), None);
    }

    #[test]
    fn normalize_dev_server_url_falls_back_for_invalid_input() {
        assert_eq!(
            normalize_dev_server_url("").as_str(),
            "http://localhost:5173/"
        );
        assert_eq!(
            normalize_dev_server_url("not a url").as_str(),
            "http://localhost:5173/"
        );
        assert_eq!(
            normalize_dev_server_url("file:///tmp/index.html").as_str(),
            "http://localhost:5173/"
        );
        assert_eq!(
            normalize_dev_server_url(" https://dev.example:8443/app ").as_str(),
            "https://dev.example:8443/app"
        );
    }
}
