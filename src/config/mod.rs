//! User settings loaded from `settings.conf`.
//!
//! The file lives under `$XDG_CONFIG_HOME/stockroom/` or `~/.config/stockroom/`.
//! Missing files and invalid values fall back to [`Settings::default`].

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::notify::DEFAULT_TOAST_DURATION;
use crate::state::{DEFAULT_ITEMS_PER_PAGE, ProductField, QueryState, SortOrder};
use crate::store::Latency;

mod parse;

pub use parse::parse_settings;

/// Application settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Rows per page in the list.
    pub items_per_page: usize,
    /// Initial sort field; `None` keeps dataset order.
    pub sort_by: Option<ProductField>,
    /// Initial sort direction.
    pub sort_order: SortOrder,
    /// How long toasts stay on screen.
    pub toast_duration: Duration,
    /// Simulated data source delays.
    pub latency: Latency,
    /// Dataset file; `None` uses the bundled one.
    pub dataset_path: Option<PathBuf>,
    /// Show the keybind hint line under the list.
    pub show_keybinds_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sort_by: Some(ProductField::Id),
            sort_order: SortOrder::Desc,
            toast_duration: DEFAULT_TOAST_DURATION,
            latency: Latency::default(),
            dataset_path: None,
            show_keybinds_footer: true,
        }
    }
}

impl Settings {
    /// Initial query state for a fresh store.
    #[must_use]
    pub fn query_defaults(&self) -> QueryState {
        QueryState {
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            items_per_page: self.items_per_page,
            ..QueryState::default()
        }
    }
}

/// What: Directory holding stockroom's config files.
///
/// Output:
/// - `$XDG_CONFIG_HOME/stockroom`, else `$HOME/.config/stockroom`, else `None`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var("HOME").ok().map(|h| Path::new(&h).join(".config")))
        .map(|base| base.join("stockroom"))
}

/// What: Directory for log files.
///
/// Output:
/// - `$XDG_STATE_HOME/stockroom/logs`, else `$HOME/.local/state/stockroom/logs`, else a
///   `stockroom/logs` folder under the system temp dir.
#[must_use]
pub fn logs_dir() -> PathBuf {
    env::var("XDG_STATE_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var("HOME")
                .ok()
                .map(|h| Path::new(&h).join(".local").join("state"))
        })
        .unwrap_or_else(env::temp_dir)
        .join("stockroom")
        .join("logs")
}

/// Path of `settings.conf` if it exists.
#[must_use]
pub fn resolve_settings_path() -> Option<PathBuf> {
    config_dir()
        .map(|d| d.join("settings.conf"))
        .filter(|p| p.is_file())
}

/// What: Load settings from the user's config directory.
///
/// Output:
/// - Parsed settings, or defaults when no file exists or it cannot be read.
#[must_use]
pub fn load_settings() -> Settings {
    resolve_settings_path().map_or_else(Settings::default, |p| load_settings_from(&p))
}

/// What: Load settings from an explicit file.
///
/// Inputs:
/// - `path`: `settings.conf` location
///
/// Output:
/// - Parsed settings; defaults on IO failure (logged).
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            debug!(path = %path.display(), "[Config] settings loaded");
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "[Config] failed to read settings; using defaults");
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Reading a real file applies its values
    ///
    /// - Input: temp settings.conf with per-page and sort
    /// - Output: Settings reflect the file; query defaults follow
    fn config_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(
            &path,
            "# stockroom\nitems_per_page = 8\nsort_by = price\nsort_order = asc\n",
        )
        .expect("write settings");
        let s = load_settings_from(&path);
        assert_eq!(s.items_per_page, 8);
        let q = s.query_defaults();
        assert_eq!(q.sort_by, Some(ProductField::Price));
        assert_eq!(q.sort_order, SortOrder::Asc);
        assert_eq!(q.items_per_page, 8);
        assert_eq!(q.current_page, 1);
    }

    #[test]
    /// What: Unreadable file falls back to defaults
    fn config_missing_file_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = load_settings_from(&dir.path().join("nope.conf"));
        assert_eq!(s, Settings::default());
    }
}
