//! Path utilities for locating Forkify's data directory.
//!
//! Bookmarks and log files live in a per-user data directory. The location is
//! resolved from the environment so it can be redirected in tests and scripts.

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "FORKIFY_DATA_DIR";

/// Returns the data directory for Forkify storage.
///
/// Resolution order:
/// 1. `$FORKIFY_DATA_DIR` if set and non-empty
/// 2. `$XDG_DATA_HOME/forkify`
/// 3. `$HOME/.local/share/forkify`
/// 4. `./.forkify` when no home directory is known
///
/// The directory is not created here; storage and logging create it lazily.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = non_empty_env(DATA_DIR_ENV) {
        return PathBuf::from(expand_tilde(&dir));
    }
    if let Some(xdg) = non_empty_env("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("forkify");
    }
    non_empty_env("HOME").map_or_else(
        || PathBuf::from(".forkify"),
        |home| PathBuf::from(home).join(".local").join("share").join("forkify"),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or a tilde when `$HOME` is unset, are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use forkify::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = non_empty_env("HOME") else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
