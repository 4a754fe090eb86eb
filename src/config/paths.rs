use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG/HOME config base.
const APP_DIR: &str = "pixsea";

/// What: Resolve the config directory from explicit environment values.
///
/// Inputs:
/// - `xdg_config`: Value of `XDG_CONFIG_HOME`, if set.
/// - `home`: Value of `HOME`, if set.
///
/// Output: `<XDG_CONFIG_HOME>/pixsea` when non-empty, else `<HOME>/.config/pixsea`,
/// else `./.config/pixsea`.
pub(crate) fn config_dir_from(xdg_config: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(x) = xdg_config
        && !x.trim().is_empty()
    {
        return Path::new(x).join(APP_DIR);
    }
    let home = home.filter(|h| !h.trim().is_empty()).unwrap_or(".");
    Path::new(home).join(".config").join(APP_DIR)
}

/// XDG config directory for Pixsea (ensured to exist)
pub fn config_dir() -> PathBuf {
    let xdg = env::var("XDG_CONFIG_HOME").ok();
    let home = env::var("HOME").ok();
    let dir = config_dir_from(xdg.as_deref(), home.as_deref());
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/pixsea/logs" (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of `settings.conf` inside the config directory.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}
