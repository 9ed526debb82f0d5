//! Host configuration.
//!
//! Controls which flag bits the front-end adds to every launch and how
//! launch commands for installed apps are written.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! launch:
//!   new_task: true
//!   grant_read_uri_permission: true
//! apps:
//!   user: 0
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use launch_intent_core::flags::{FLAG_ACTIVITY_NEW_TASK, FLAG_GRANT_READ_URI_PERMISSION};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Flag bits added to every launched descriptor.
///
/// # Examples
///
/// ```
/// # use launch_intent_host::LaunchConfig;
/// let launch = LaunchConfig {
///     new_task: true,
///     grant_read_uri_permission: false,
/// };
/// assert!(launch.new_task);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Start the activity in a new task.
    pub new_task: bool,
    /// Let the launched component read the data URI.
    pub grant_read_uri_permission: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            new_task: true,
            grant_read_uri_permission: true,
        }
    }
}

/// Settings for generated app launch commands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppsConfig {
    /// User id written as `--user` into launch commands.
    pub user: u32,
}

/// Top-level host configuration.
///
/// # Examples
///
/// ```no_run
/// use launch_intent_host::HostConfig;
///
/// let config = HostConfig::load("launcher.yml").unwrap();
/// println!("extra flags: {:#x}", config.launch_flags());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    pub launch: LaunchConfig,
    pub apps: AppsConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            launch: LaunchConfig::default(),
            apps: AppsConfig::default(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::HostError::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::HostError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::HostError::IoError) if the file cannot be
    /// written, or [`YamlError`](crate::HostError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Returns the OR of the enabled launch flag bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use launch_intent_core::flags::*;
    /// use launch_intent_host::HostConfig;
    ///
    /// let mut config = HostConfig::default();
    /// assert_eq!(
    ///     config.launch_flags(),
    ///     FLAG_ACTIVITY_NEW_TASK | FLAG_GRANT_READ_URI_PERMISSION
    /// );
    ///
    /// config.launch.grant_read_uri_permission = false;
    /// assert_eq!(config.launch_flags(), FLAG_ACTIVITY_NEW_TASK);
    /// ```
    pub fn launch_flags(&self) -> u32 {
        let mut flags = 0;
        if self.launch.new_task {
            flags |= FLAG_ACTIVITY_NEW_TASK;
        }
        if self.launch.grant_read_uri_permission {
            flags |= FLAG_GRANT_READ_URI_PERMISSION;
        }
        flags
    }
}
