/// Shutdown convention of the platform the shell runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPlatform {
    /// macOS keeps applications running after their last window closes.
    pub keeps_alive_without_windows: bool,
}

impl HostPlatform {
    pub const PERSISTENT: Self = Self {
        keeps_alive_without_windows: true,
    };
    pub const NON_PERSISTENT: Self = Self {
        keeps_alive_without_windows: false,
    };

    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::PERSISTENT
        } else {
            Self::NON_PERSISTENT
        }
    }

    pub fn with_keep_alive_override(self, keep_alive: Option<bool>) -> Self {
        match keep_alive {
            Some(keeps_alive_without_windows) => Self {
                keeps_alive_without_windows,
            },
            None => self,
        }
    }
}
