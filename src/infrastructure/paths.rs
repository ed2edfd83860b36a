//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the Zellij
//! plugin sandbox, where the host filesystem is mounted under `/host`. It handles
//! tilde expansion, display normalization, and the plugin's data and preview
//! cache locations.

use std::path::PathBuf;

/// Returns the data directory for Truth Lens state.
///
/// The directory is located at `/host/.local/share/zellij/truthlens` in the Zellij
/// sandbox. In Zellij's plugin environment, `/host` points to the cwd of the last
/// focused terminal, or the folder where Zellij was started if that's not available.
///
/// This typically resolves to the user's home directory when Zellij is started from
/// a home directory terminal, making the actual path `~/.local/share/zellij/truthlens`.
/// The tracing log file lives within this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("truthlens")
}

/// Returns the cache directory holding image preview copies.
///
/// Preview files are transient: one is created per attachment and deleted
/// when the attachment is cleared or replaced.
#[must_use]
pub fn get_cache_dir() -> PathBuf {
    get_data_dir().join("previews")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// In the Zellij sandbox environment, the host's home directory (`~`) maps to `/host`.
/// This function converts tilde-prefixed paths to their sandbox equivalents.
///
/// # Examples
///
/// ```
/// use truthlens::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/shots/article.png"), "/host/shots/article.png");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path.png"), "/absolute/path.png");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix from sandbox paths for display purposes.
///
/// When showing paths to users, it's often clearer to remove the sandbox prefix
/// so paths appear as they would on the host filesystem.
///
/// # Examples
///
/// ```
/// use truthlens::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/shots/article.png"), "/shots/article.png");
/// assert_eq!(strip_host_prefix("/absolute/path.png"), "/absolute/path.png");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~/a.png"), "/host/a.png");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/tmp/a.png"), "/tmp/a.png");
        assert_eq!(expand_tilde("relative.png"), "relative.png");
    }

    #[test]
    fn host_prefix_stripping() {
        assert_eq!(strip_host_prefix("/host/a/b"), "/a/b");
        assert_eq!(strip_host_prefix("/a/b"), "/a/b");
    }

    #[test]
    fn cache_dir_nests_under_data_dir() {
        assert!(get_cache_dir().starts_with(get_data_dir()));
    }
}
