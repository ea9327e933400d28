//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// File name of the OTLP trace export inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "donation-board-otlp.json";

/// Returns the plugin's data directory.
///
/// Located at `/host/.local/share/zellij/donation-board`. `/host` points to
/// the directory Zellij was started from, typically the user's home, so the
/// host path is usually `~/.local/share/zellij/donation-board`. Only trace
/// exports live here; the catalog itself is never written to disk.
///
/// ```
/// use donation_board::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/donation-board")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("donation-board")
}

/// Path of the OTLP JSON trace file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// ```
/// use donation_board::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/board.toml"), "/host/themes/board.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(trace_file().parent(), Some(get_data_dir().as_path()));
        assert!(trace_file().ends_with(TRACE_FILE_NAME));
    }

    #[test]
    fn tilde_inside_path_is_left_alone() {
        assert_eq!(expand_tilde("/tmp/~/x"), "/tmp/~/x");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }
}
