//! Host side of launch descriptor handling.
//!
//! Bridges parsed descriptors to a platform:
//!
//! - [`run_am_command`] and [`run_am_line`] implement the `am start`
//!   front-end: parse, validate, add the configured flags, launch.
//! - [`HostContext`] carries the platform collaborators ([`Launcher`],
//!   [`AppDirectory`], [`IconSource`], [`StorageVolumes`],
//!   [`BatteryMonitor`]) explicitly; there is no global state.
//! - [`HostConfig`] is the YAML configuration.
//!
//! # Quick start
//!
//! ```
//! use launch_intent_host::{HostConfig, HostContext, RecordingLauncher, run_am_line};
//!
//! let launcher = RecordingLauncher::new();
//! let context = HostContext::new(&launcher);
//! let config = HostConfig::default();
//!
//! let d = run_am_line("am start -a android.intent.action.VIEW -d file:///sdcard/a.pdf", &context, &config)
//!     .unwrap();
//! assert_eq!(d.data.unwrap().as_str(), "file:///sdcard/a.pdf");
//! assert_eq!(launcher.launched().len(), 1);
//! ```

mod am;
mod config;
mod error;
mod platform;

pub use am::{launch_app, run_am_command, run_am_line};
pub use config::{AppsConfig, HostConfig, LaunchConfig};
pub use error::{HostError, Result};
pub use platform::{
    AppDirectory, AppEntry, BATTERY_STATUS_FULL, BATTERY_STATUS_UNKNOWN, BatteryInfo,
    BatteryMonitor, HostContext, IconSource, Launcher, RawBatteryStatus, RecordingLauncher,
    StorageVolumes,
};
