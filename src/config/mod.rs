//! Configuration for Pixsea.
//!
//! Settings live in a key=value `settings.conf` under the XDG config directory.
//! Public re-exports keep the `crate::config::*` API stable.

/// Path resolution for config and log directories.
mod paths;
/// Settings parsing and loading.
mod settings;
/// Default settings file content.
mod skeleton;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{
    API_KEY_ENV, MAX_PER_PAGE, Settings, ensure_settings_file, load_settings_from, parse_settings,
    settings,
};
