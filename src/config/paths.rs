//! Where vocab-player keeps its two files.
//!
//! | File              | Holds                                   | Base dir (`dirs`)  |
//! |-------------------|-----------------------------------------|--------------------|
//! | `settings.toml`   | [`AppConfig`](super::AppConfig)         | `config_dir()`     |
//! | `word-pairs.json` | word pairs plus language/delay choices  | `data_local_dir()` |
//!
//! Settings are edited by hand and rarely change; the word pairs file is
//! rewritten after every edit, so it lives with local (non-roaming) data.

use std::path::PathBuf;

const APP_DIR: &str = "vocab-player";

/// Resolved locations of the settings and word pairs files.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub settings_file: PathBuf,
    pub preferences_file: PathBuf,
}

/// `base/vocab-player`, or `./vocab-player` when the platform has no such
/// directory.
fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

impl AppPaths {
    pub fn new() -> Self {
        Self {
            settings_file: app_dir(dirs::config_dir()).join("settings.toml"),
            preferences_file: app_dir(dirs::data_local_dir()).join("word-pairs.json"),
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_sit_in_the_app_directory() {
        let paths = AppPaths::new();
        for (file, name) in [
            (&paths.settings_file, "settings.toml"),
            (&paths.preferences_file, "word-pairs.json"),
        ] {
            assert!(file.file_name().is_some_and(|n| n == name));
            assert!(file
                .parent()
                .and_then(|p| p.file_name())
                .is_some_and(|d| d == APP_DIR));
        }
    }

    #[test]
    fn missing_platform_dir_falls_back_to_cwd() {
        assert_eq!(app_dir(None), PathBuf::from(".").join(APP_DIR));
    }
}
