use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::skeleton::SETTINGS_SKELETON_CONTENT;
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

/// Environment variable that overrides `api_key` from the settings file.
pub const API_KEY_ENV: &str = "PIXSEA_API_KEY";

/// Largest page size the search service accepts.
pub const MAX_PER_PAGE: u32 = 200;

/// User-configurable application settings loaded from `settings.conf`.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Credential passed to the search service. Empty means unset.
    pub api_key: String,
    /// Search endpoint URL.
    pub endpoint: String,
    /// Results requested per page.
    pub per_page: u32,
    /// Image type filter (`all`, `photo`, `illustration`, `vector`).
    pub image_type: String,
    /// Orientation filter (`all`, `horizontal`, `vertical`).
    pub orientation: String,
    /// Ask the service to filter unsafe content.
    pub safe_search: bool,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: "https://pixabay.com/api/".to_string(),
            per_page: 12,
            image_type: "photo".to_string(),
            orientation: "horizontal".to_string(),
            safe_search: false,
            request_timeout_secs: 15,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("endpoint", &self.endpoint)
            .field("per_page", &self.per_page)
            .field("image_type", &self.image_type)
            .field("orientation", &self.orientation)
            .field("safe_search", &self.safe_search)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Settings {
    /// What: Replace the API key when `key` is present and non-blank.
    ///
    /// Inputs:
    /// - `key`: Candidate key from the environment or command line.
    pub fn override_api_key(&mut self, key: Option<&str>) {
        if let Some(k) = key.map(str::trim)
            && !k.is_empty()
        {
            self.api_key = k.to_string();
        }
    }
}

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings file.
/// - `settings`: Settings to populate in place.
///
/// Details:
/// - Unknown keys are ignored.
/// - Values that fail to parse or fall outside their range keep the current value.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_key" | "key" | "pixabay_api_key" => settings.api_key = val,
            "endpoint" | "api_url" => {
                if val.starts_with("http://") || val.starts_with("https://") {
                    settings.endpoint = val;
                } else {
                    warn!(value = %val, "ignoring endpoint without http(s) scheme");
                }
            }
            "per_page" | "page_size" => match val.parse::<u32>() {
                Ok(v) if (1..=MAX_PER_PAGE).contains(&v) => settings.per_page = v,
                _ => warn!(value = %val, "ignoring per_page outside 1..=200"),
            },
            "image_type" => {
                let lv = val.to_ascii_lowercase();
                if matches!(lv.as_str(), "all" | "photo" | "illustration" | "vector") {
                    settings.image_type = lv;
                }
            }
            "orientation" => {
                let lv = val.to_ascii_lowercase();
                if matches!(lv.as_str(), "all" | "horizontal" | "vertical") {
                    settings.orientation = lv;
                }
            }
            "safe_search" | "safesearch" => settings.safe_search = parse_bool(&val),
            "request_timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            other => debug!(key = other, "unknown settings key"),
        }
    }
}

/// What: Load settings from `path`, falling back to defaults.
///
/// Inputs:
/// - `path`: Settings file location.
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut settings = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut settings),
        Err(e) => debug!(path = %path.display(), error = %e, "settings file not read"),
    }
    settings
}

/// What: Load settings from the user's config directory and apply the env override.
///
/// Output:
/// - Settings with `PIXSEA_API_KEY` taking precedence over the file's `api_key`.
#[must_use]
pub fn settings() -> Settings {
    let mut settings = load_settings_from(&crate::config::paths::settings_path());
    settings.override_api_key(std::env::var(API_KEY_ENV).ok().as_deref());
    settings
}

/// What: Write the commented skeleton when the settings file is missing or empty.
///
/// Inputs:
/// - `path`: Settings file location.
///
/// Output:
/// - `Ok(true)` when the skeleton was written, `Ok(false)` when a file already existed.
///
/// # Errors
/// - Returns `Err` when the directory or file cannot be written.
pub fn ensure_settings_file(path: &Path) -> std::io::Result<bool> {
    let populated = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
    if populated {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, SETTINGS_SKELETON_CONTENT)?;
    Ok(true)
}
