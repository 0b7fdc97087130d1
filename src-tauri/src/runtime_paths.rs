use std::{env, path::PathBuf};

use crate::{DESKTOP_ROOT_DIR_NAME, DESKTOP_ROOT_ENV, INSTALL_DIR_ENV};

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

fn non_empty_env_path(key: &str) -> Option<PathBuf> {
    non_empty_path(env::var(key).ok())
}

/// Directory holding desktop shell logs, `~/.trait-desktop` unless overridden.
pub fn default_desktop_root_dir() -> Option<PathBuf> {
    non_empty_env_path(DESKTOP_ROOT_ENV)
        .or_else(|| home::home_dir().map(|home| home.join(DESKTOP_ROOT_DIR_NAME)))
}

pub fn install_dir_override() -> Option<PathBuf> {
    non_empty_env_path(INSTALL_DIR_ENV)
}

/// Directory next to the running executable, used when the host cannot report
/// a resource directory.
pub fn executable_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
}

/// Override first, then the host resource directory, then the executable's directory.
pub fn resolve_install_dir<R, E>(
    override_dir: Option<PathBuf>,
    resource_dir: R,
    executable_dir: E,
) -> PathBuf
where
    R: FnOnce() -> Option<PathBuf>,
    E: FnOnce() -> Option<PathBuf>,
{
    override_dir
        .or_else(resource_dir)
        .or_else(executable_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_path_rejects_blank_values() {
        assert_eq!(non_empty_path(None), None);
        assert_eq!(non_empty_path(Some(String::new())), None);
        assert_eq!(non_empty_path(Some("   ".to_string())), None);
        assert_eq!(
            non_empty_path(Some(" /opt/trait ".to_string())),
            Some(PathBuf::from("/opt/trait"))
        );
    }

    #[test]
    fn resolve_install_dir_prefers_override() {
        let resolved = resolve_install_dir(
            Some(PathBuf::from("/override")),
            || panic!("resource dir should not be consulted"),
            || panic!("executable dir should not be consulted"),
        );
        assert_eq!(resolved, PathBuf::from("/override"));
    }

    #[test]
    fn resolve_install_dir_falls_back_to_resource_dir() {
        let resolved = resolve_install_dir(
            None,
            || Some(PathBuf::from("/resources")),
            || panic!("executable dir should not be consulted"),
        );
        assert_eq!(resolved, PathBuf::from("/resources"));
    }

    #[test]
    fn resolve_install_dir_falls_back_to_executable_dir() {
        let resolved = resolve_install_dir(None, || None, || Some(PathBuf::from("/usr/bin")));
        assert_eq!(resolved, PathBuf::from("/usr/bin"));
    }

    #[test]
    fn resolve_install_dir_uses_current_dir_as_last_resort() {
        assert_eq!(resolve_install_dir(None, || None, || None), PathBuf::from("."));
    }
}
