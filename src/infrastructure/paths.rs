//! Path manipulation utilities for Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`.
//! Configuration and theme paths written by the user refer to the host view,
//! so they are translated here before any file is opened.

use std::path::PathBuf;

/// Mount point of the host home directory inside the sandbox.
pub const HOST_ROOT: &str = "/host";

/// Returns the data directory used for the plugin's log files.
///
/// The directory is located at `/host/.local/share/zellij/zslideshow` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started if that's not available, which usually
/// makes the real path `~/.local/share/zellij/zslideshow`.
///
/// # Examples
///
/// ```
/// use zslideshow::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zslideshow");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/zslideshow")
}

/// Expands `~` to the sandbox mount of the host home directory.
///
/// Only a leading `~` on its own or followed by `/` is expanded; `~user`
/// forms are left untouched.
///
/// # Examples
///
/// ```
/// use zslideshow::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/slides/config.toml"), "/host/slides/config.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("~bob/x.png"), "~bob/x.png");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Turns a sandbox path back into the form the user wrote, for captions.
///
/// The inverse of [`expand_tilde`]. Paths outside `/host` are returned as is.
///
/// # Examples
///
/// ```
/// use zslideshow::infrastructure::display_path;
///
/// assert_eq!(display_path("/host/pictures/beach.jpg"), "~/pictures/beach.jpg");
/// assert_eq!(display_path("/hostile/beach.jpg"), "/hostile/beach.jpg");
/// assert_eq!(display_path("beach.jpg"), "beach.jpg");
/// ```
#[must_use]
pub fn display_path(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}
