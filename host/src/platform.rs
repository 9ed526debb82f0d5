//! Platform collaborators.
//!
//! The host front-end never talks to the platform directly. Everything it
//! needs (launching, the installed app list, icons, storage volumes and
//! battery state) goes through the traits below, bundled into a
//! [`HostContext`] that callers construct and pass in explicitly.

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use launch_intent_core::{ComponentName, LaunchDescriptor};
use launch_intent_parser::output::join_command_line;

/// Starts the component a descriptor points at.
pub trait Launcher {
    /// Launches `descriptor`; failures are reported as opaque messages.
    fn launch(&self, descriptor: &LaunchDescriptor) -> Result<(), String>;
}

/// An installed, launchable application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    /// Display name.
    pub name: String,
    pub package: String,
    /// Action of the app's launcher entry point.
    pub launch_action: String,
    /// Component of the app's launcher entry point.
    pub launch_component: ComponentName,
}

impl AppEntry {
    /// Returns the `am start` command that launches this app as `user`.
    ///
    /// # Examples
    ///
    /// ```
    /// use launch_intent_core::ComponentName;
    /// use launch_intent_host::AppEntry;
    ///
    /// let app = AppEntry {
    ///     name: "Emulator".into(),
    ///     package: "com.emu".into(),
    ///     launch_action: "android.intent.action.MAIN".into(),
    ///     launch_component: ComponentName::new("com.emu", "com.emu.Main"),
    /// };
    /// assert_eq!(
    ///     app.launch_command(0),
    ///     "am start --user 0 -a android.intent.action.MAIN -n com.emu/com.emu.Main"
    /// );
    /// ```
    pub fn launch_command(&self, user: u32) -> String {
        join_command_line(&[
            "am".to_string(),
            "start".to_string(),
            "--user".to_string(),
            user.to_string(),
            "-a".to_string(),
            self.launch_action.clone(),
            "-n".to_string(),
            self.launch_component.flatten(),
        ])
    }
}

/// Lists installed applications that have a launcher entry point.
pub trait AppDirectory {
    fn apps(&self) -> Vec<AppEntry>;
}

/// Provides application icons as PNG bytes.
pub trait IconSource {
    /// Icon of `package`, or `None` when it cannot be loaded.
    fn icon_png(&self, package: &str) -> Option<Vec<u8>>;
    /// Generic icon used when an app has none.
    fn default_icon_png(&self) -> Vec<u8>;
}

/// Enumerates mounted storage volumes.
pub trait StorageVolumes {
    /// Mount point of each volume; `None` for volumes without one.
    fn mount_points(&self) -> Vec<Option<PathBuf>>;
}

/// Raw battery readings, as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBatteryStatus {
    /// Platform status code; see [`BATTERY_STATUS_UNKNOWN`] and
    /// [`BATTERY_STATUS_FULL`].
    pub status: i32,
    pub present: bool,
    /// Power source code; positive when plugged in.
    pub plugged: i32,
    /// Charge level, negative when unknown.
    pub level: i32,
    /// Level at full charge, non-positive when unknown.
    pub scale: i32,
}

pub const BATTERY_STATUS_UNKNOWN: i32 = 1;
pub const BATTERY_STATUS_FULL: i32 = 5;

/// Reads battery state.
pub trait BatteryMonitor {
    fn raw_status(&self) -> RawBatteryStatus;
}

/// Battery state summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryInfo {
    pub present: bool,
    pub plugged: bool,
    pub charged: bool,
    /// Charge as a fraction of full (`0.0..=1.0`), `None` when unknown.
    pub percent: Option<f32>,
}

impl BatteryInfo {
    /// Summarizes raw readings; an unknown status yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use launch_intent_host::{BatteryInfo, RawBatteryStatus};
    ///
    /// let raw = RawBatteryStatus { status: 2, present: true, plugged: 1, level: 50, scale: 100 };
    /// let info = BatteryInfo::from_raw(raw).unwrap();
    /// assert!(info.plugged);
    /// assert_eq!(info.percent, Some(0.5));
    /// ```
    pub fn from_raw(raw: RawBatteryStatus) -> Option<Self> {
        if raw.status == BATTERY_STATUS_UNKNOWN {
            return None;
        }
        let percent = (raw.level >= 0 && raw.scale > 0).then(|| raw.level as f32 / raw.scale as f32);
        Some(Self {
            present: raw.present,
            plugged: raw.plugged > 0,
            charged: raw.status == BATTERY_STATUS_FULL,
            percent,
        })
    }
}

/// Launcher that records descriptors instead of starting anything.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launched: Mutex<Vec<LaunchDescriptor>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptors launched so far, oldest first. A poisoned record is still
    /// read.
    pub fn launched(&self) -> Vec<LaunchDescriptor> {
        self.launched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, descriptor: &LaunchDescriptor) -> Result<(), String> {
        let mut launched = self
            .launched
            .lock()
            .map_err(|_| "launch record is poisoned".to_string())?;
        launched.push(descriptor.clone());
        Ok(())
    }
}

/// Explicit bundle of platform collaborators.
///
/// Only the launcher is mandatory; the query collaborators fall back to
/// empty answers when absent.
pub struct HostContext<'a> {
    launcher: &'a dyn Launcher,
    apps: Option<&'a dyn AppDirectory>,
    icons: Option<&'a dyn IconSource>,
    storage: Option<&'a dyn StorageVolumes>,
    battery: Option<&'a dyn BatteryMonitor>,
}

impl<'a> HostContext<'a> {
    pub fn new(launcher: &'a dyn Launcher) -> Self {
        Self {
            launcher,
            apps: None,
            icons: None,
            storage: None,
            battery: None,
        }
    }

    pub fn with_apps(mut self, apps: &'a dyn AppDirectory) -> Self {
        self.apps = Some(apps);
        self
    }

    pub fn with_icons(mut self, icons: &'a dyn IconSource) -> Self {
        self.icons = Some(icons);
        self
    }

    pub fn with_storage(mut self, storage: &'a dyn StorageVolumes) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_battery(mut self, battery: &'a dyn BatteryMonitor) -> Self {
        self.battery = Some(battery);
        self
    }

    pub fn launcher(&self) -> &'a dyn Launcher {
        self.launcher
    }

    /// Installed apps, or none without an app directory.
    pub fn apps(&self) -> Vec<AppEntry> {
        self.apps.map(|apps| apps.apps()).unwrap_or_default()
    }

    /// Icon of `package`, falling back to the default icon.
    pub fn app_icon(&self, package: &str) -> Option<Vec<u8>> {
        let icons = self.icons?;
        Some(
            icons
                .icon_png(package)
                .unwrap_or_else(|| icons.default_icon_png()),
        )
    }

    /// Storage roots to scan: every mounted volume, then `/`.
    pub fn storage_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self
            .storage
            .map(|storage| storage.mount_points())
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|path| path.to_string_lossy().into_owned())
            .collect();
        paths.push("/".to_string());
        paths
    }

    /// Current battery state, if known.
    pub fn battery(&self) -> Option<BatteryInfo> {
        self.battery
            .and_then(|battery| BatteryInfo::from_raw(battery.raw_status()))
    }
}
