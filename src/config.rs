//! # Configuration
//!
//! Every path and prefix the resolver and the enumeration backends depend on
//! lives here instead of in literals, so the whole pipeline can be pointed at
//! a fake device tree (tests, chroots, containers with a bind-mounted `/sys`).
//!
//! Configuration is read from `<config dir>/joynode/config.toml`. Every field
//! has a default, so a partial file is fine and a missing default file simply
//! means "use the defaults".

use clap::ValueEnum;
use color_eyre::{eyre::eyre, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const CONFIG_DIR: &str = "joynode";
const CONFIG_FILE: &str = "config.toml";

/// Which enumeration backend supplies the joystick list.
#[derive(Deserialize, Serialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// gilrs gamepad enumeration. Does not report device paths.
    Gilrs,
    /// Direct enumeration of the event nodes in the device tree.
    #[default]
    Sysfs,
}

/// Layout of the device tree and the device node directory.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Directory holding one entry per input interface (`event5`, `js0`, ...)
    pub device_tree_root: PathBuf,
    /// Prefix of the generic event interface entries
    pub event_prefix: String,
    /// Prefix of the legacy joystick interface entries
    pub joystick_prefix: String,
    /// Name of the link inside each entry that points at the physical device
    pub device_link: String,
    /// Directory the device nodes live in
    pub device_node_dir: PathBuf,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            device_tree_root: PathBuf::from("/sys/class/input"),
            event_prefix: "event".to_string(),
            joystick_prefix: "js".to_string(),
            device_link: "device".to_string(),
            device_node_dir: PathBuf::from("/dev/input"),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceKind,
    pub resolver: ResolverConfig,
}

impl AppConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the configuration.
    ///
    /// An explicitly given file must exist. Without one, the default location
    /// is tried and a missing file falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                Some(path) => {
                    warn!(
                        "No config file at {}, using default configuration",
                        path.display()
                    );
                    Ok(Self::default())
                }
                None => {
                    warn!("No config directory available, using default configuration");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Reading config file {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Writes the default configuration to `path`, creating parent directories.
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| eyre!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| eyre!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| eyre!("Failed to write config file {}: {}", path.display(), e))?;

        info!("Default configuration written to {}", path.display());
        Ok(())
    }
}
