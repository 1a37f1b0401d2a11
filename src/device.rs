// src/device.rs
//! Interface boundary for the platform collaborators
//!
//! The host platform collects these fields and performs the redirects; this
//! crate only fixes the shapes the scripted layer reads. Nothing here
//! touches platform APIs.

use serde::{Deserialize, Serialize};

use crate::enums::{EmulatorStatus, NetworkType};

/// Flat device report, serialized to the JSON document the scripted layer
/// consumes. Field names match the wire format of the legacy bridge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeviceInfo {
    pub manufacturer: String,
    pub brand: String,
    pub model: String,
    pub device: String,
    pub product: String,
    pub sdk_int: i32,
    pub net_type: NetworkType,
    pub lang: String,
    pub resolution: String,
    pub density: String,
    #[serde(rename = "freeDiskStorage")]
    pub free_disk_storage: i64,
    #[serde(rename = "batteryLevel")]
    pub battery_level: f32,
    #[serde(rename = "isBatteryCharging")]
    pub is_battery_charging: bool,
    #[serde(rename = "isEmulator")]
    pub is_emulator: EmulatorStatus,
    #[serde(rename = "isAV")]
    pub is_av: bool,
    pub abis: Vec<String>,
    /// Launchable package names. The collector omits the list for crowded
    /// devices and only reports the count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkgs: Option<Vec<String>>,
    #[serde(rename = "pkgsSize")]
    pub pkgs_size: usize,
}

impl DeviceInfo {
    /// Render the flat JSON document handed across the bridge.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Collects the device report from platform APIs.
pub trait DeviceInfoSource {
    fn collect(&self) -> DeviceInfo;
}

/// Classifies the active data connection.
pub trait ConnectivityProbe {
    fn network_type(&self) -> NetworkType;
}

/// Opens an external app-store listing by package identifier.
pub trait StoreRedirect {
    /// Whether a store app is installed that can handle the listing.
    fn is_store_resolvable(&self) -> bool;

    /// Open the listing for `package_id`. Best effort; platform failures
    /// stay on the platform side.
    fn launch_listing(&self, package_id: &str);
}
