//! Application settings: the service endpoint and the timetable header.
//!
//! Settings are stored as TOML in the platform-specific config folder:
//! - macOS: ~/Library/Application Support/edu.timetable-builder.Timetable Builder/
//! - Windows: %APPDATA%/timetable-builder/Timetable Builder/config/
//! - Linux: ~/.config/timetablebuilder/

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ttb_submit::{DEFAULT_ENDPOINT, Header};

const APP_QUALIFIER: &str = "edu";
const APP_ORG: &str = "timetable-builder";
const APP_NAME: &str = "Timetable Builder";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub service: ServiceSettings,
    pub header: Header,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub endpoint: String,
    /// Request timeout; unset means wait indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ServiceSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub university: Option<String>,
    pub department: Option<String>,
    pub academic: Option<String>,
}

impl Settings {
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(endpoint) = overrides.endpoint {
            self.service.endpoint = endpoint;
        }
        if let Some(university) = overrides.university {
            self.header.university = university;
        }
        if let Some(department) = overrides.department {
            self.header.department = department;
        }
        if let Some(academic) = overrides.academic {
            self.header.academic = academic;
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize settings")
    }
}

/// Settings together with the file they were read from.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// File consulted, whether or not it existed.
    pub path: Option<PathBuf>,
    /// Whether the values came from that file.
    pub from_file: bool,
}

/// Get the path to the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from `explicit`, or from the default location.
///
/// A missing file gives defaults. A file that cannot be read or parsed is an
/// error when named explicitly, and a warning plus defaults otherwise.
pub fn load_settings(explicit: Option<&Path>) -> Result<LoadedSettings> {
    if let Some(path) = explicit {
        let settings = read_settings(path)?;
        return Ok(LoadedSettings {
            from_file: settings.is_some(),
            settings: settings.unwrap_or_default(),
            path: Some(path.to_path_buf()),
        });
    }

    let Some(path) = settings_path() else {
        warn!("Could not determine settings path, using defaults");
        return Ok(LoadedSettings {
            settings: Settings::default(),
            path: None,
            from_file: false,
        });
    };

    let (settings, from_file) = match read_settings(&path) {
        Ok(Some(settings)) => (settings, true),
        Ok(None) => (Settings::default(), false),
        Err(e) => {
            warn!("{e:#}, using defaults");
            (Settings::default(), false)
        }
    };
    Ok(LoadedSettings {
        settings,
        path: Some(path),
        from_file,
    })
}

/// Read one settings file; `Ok(None)` when it does not exist.
pub fn read_settings(path: &Path) -> Result<Option<Settings>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let settings = toml::from_str(&content)
                .with_context(|| format!("failed to parse settings file {}", path.display()))?;
            info!("Loaded settings from {}", path.display());
            Ok(Some(settings))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No settings file found at {}, using defaults", path.display());
            Ok(None)
        }
        Err(e) => {
            Err(e).with_context(|| format!("failed to read settings file {}", path.display()))
        }
    }
}
