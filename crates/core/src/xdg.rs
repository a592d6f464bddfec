//! XDG base-directory lookup.
//!
//! [`BaseDirs`] is a snapshot of the XDG variables taken once, so handlers
//! and tests see a consistent view without touching the live process
//! environment. Empty values count as unset.

use std::path::PathBuf;

/// The XDG base-directory variables, in the order they are reported.
pub const XDG_VARS: [&str; 5] = [
    "XDG_CONFIG_HOME",
    "XDG_CACHE_HOME",
    "XDG_DATA_HOME",
    "XDG_STATE_HOME",
    "XDG_RUNTIME_DIR",
];

/// Shown when `XDG_CONFIG_HOME` is unset.
pub const DEFAULT_CONFIG_HOME: &str = "~/.config";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseDirs {
    pub config_home: Option<String>,
    pub cache_home: Option<String>,
    pub data_home: Option<String>,
    pub state_home: Option<String>,
    pub runtime_dir: Option<String>,
    /// User home directory, used for the `data_home` fallback.
    pub home: Option<PathBuf>,
}

impl BaseDirs {
    /// Snapshot the current process environment.
    ///
    /// Falls back to the platform home directory when `HOME` is unset.
    pub fn from_env() -> Self {
        let mut dirs = Self::from_lookup(|key| std::env::var(key).ok());
        if dirs.home.is_none() {
            dirs.home = dirs::home_dir();
        }
        dirs
    }

    /// Build a snapshot from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            config_home: get("XDG_CONFIG_HOME"),
            cache_home: get("XDG_CACHE_HOME"),
            data_home: get("XDG_DATA_HOME"),
            state_home: get("XDG_STATE_HOME"),
            runtime_dir: get("XDG_RUNTIME_DIR"),
            home: get("HOME").map(PathBuf::from),
        }
    }

    /// Raw variable values keyed by name, `None` when unset.
    pub fn variables(&self) -> [(&'static str, Option<&str>); 5] {
        [
            (XDG_VARS[0], self.config_home.as_deref()),
            (XDG_VARS[1], self.cache_home.as_deref()),
            (XDG_VARS[2], self.data_home.as_deref()),
            (XDG_VARS[3], self.state_home.as_deref()),
            (XDG_VARS[4], self.runtime_dir.as_deref()),
        ]
    }

    /// `XDG_DATA_HOME`, else `$HOME/.local/share`. `None` when neither is
    /// known.
    pub fn resolve_data_home(&self) -> Option<PathBuf> {
        match &self.data_home {
            Some(dir) => Some(PathBuf::from(dir)),
            None => self
                .home
                .as_ref()
                .map(|home| home.join(".local").join("share")),
        }
    }

    /// `XDG_CONFIG_HOME` for display, else the literal `~/.config`.
    pub fn display_config_home(&self) -> &str {
        self.config_home.as_deref().unwrap_or(DEFAULT_CONFIG_HOME)
    }
}
