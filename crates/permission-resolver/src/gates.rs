//! # Version Gates
//!
//! The resolution table: one rule per permission group, with every platform
//! version threshold kept as data in [`VersionGates`].

use permission_taxonomy::PermissionGroup;
use serde::{Deserialize, Serialize};

use crate::manifest::{
    ACCESS_BACKGROUND_LOCATION, ACCESS_COARSE_LOCATION, ACCESS_FINE_LOCATION, BLUETOOTH_ADVERTISE,
    BLUETOOTH_CONNECT, BLUETOOTH_SCAN, CALL_PHONE, POST_NOTIFICATIONS, READ_PHONE_STATE,
    RECORD_AUDIO,
};

/// Platform version that introduced background location (Android 10, "Q").
pub const SDK_BACKGROUND_LOCATION: u32 = 29;
/// Platform version that made Bluetooth a runtime permission (Android 12, "S").
pub const SDK_BLUETOOTH_RUNTIME: u32 = 31;
/// Platform version that introduced runtime notification permission (Android 13).
pub const SDK_NOTIFICATION: u32 = 33;

const NOTIFICATION_NAMES: &[&str] = &[POST_NOTIFICATIONS];
const LOCATION_NAMES: &[&str] = &[ACCESS_FINE_LOCATION, ACCESS_COARSE_LOCATION];
const BACKGROUND_LOCATION_NAMES: &[&str] = &[ACCESS_BACKGROUND_LOCATION];
const MICROPHONE_NAMES: &[&str] = &[RECORD_AUDIO];
const BLUETOOTH_NAMES: &[&str] = &[BLUETOOTH_CONNECT, BLUETOOTH_SCAN, BLUETOOTH_ADVERTISE];
const PHONE_NAMES: &[&str] = &[CALL_PHONE, READ_PHONE_STATE];

/// Minimum platform versions for the version-gated rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VersionGates {
    /// First version with a runtime notification permission.
    pub notification: u32,
    /// First version with a separate background location permission.
    pub background_location: u32,
    /// First version where Bluetooth is requested at runtime.
    pub bluetooth_runtime: u32,
}

impl VersionGates {
    /// Thresholds of the Android platform.
    pub const ANDROID: VersionGates = VersionGates {
        notification: SDK_NOTIFICATION,
        background_location: SDK_BACKGROUND_LOCATION,
        bluetooth_runtime: SDK_BLUETOOTH_RUNTIME,
    };

    /// Get the minimum version gating a group, if its rule is gated.
    pub fn min_version_for(&self, group: PermissionGroup) -> Option<u32> {
        match self.rule_for(group) {
            ResolutionRule::Gated { min_version, .. } => Some(min_version),
            _ => None,
        }
    }

    /// Look up the resolution rule for a group.
    pub fn rule_for(&self, group: PermissionGroup) -> ResolutionRule {
        match group {
            PermissionGroup::Notification => ResolutionRule::Gated {
                min_version: self.notification,
                names: NOTIFICATION_NAMES,
                below: BelowGate::NotApplicable,
            },
            PermissionGroup::Location | PermissionGroup::LocationWhenInUse => {
                ResolutionRule::Always(LOCATION_NAMES)
            }
            PermissionGroup::LocationAlways => ResolutionRule::Gated {
                min_version: self.background_location,
                names: BACKGROUND_LOCATION_NAMES,
                below: BelowGate::Empty,
            },
            PermissionGroup::Microphone => ResolutionRule::Always(MICROPHONE_NAMES),
            PermissionGroup::Bluetooth
            | PermissionGroup::BluetoothConnect
            | PermissionGroup::BluetoothScan
            | PermissionGroup::BluetoothAdvertise => ResolutionRule::Gated {
                min_version: self.bluetooth_runtime,
                names: BLUETOOTH_NAMES,
                below: BelowGate::NotApplicable,
            },
            PermissionGroup::Phone => ResolutionRule::Always(PHONE_NAMES),
            PermissionGroup::IgnoreBatteryOptimizations
            | PermissionGroup::ManageExternalStorage
            | PermissionGroup::SystemAlertWindow
            | PermissionGroup::RequestInstallPackages
            | PermissionGroup::AccessNotificationPolicy
            | PermissionGroup::ScheduleExactAlarm => ResolutionRule::SettingsIntent,
            PermissionGroup::Unknown | PermissionGroup::Speech => ResolutionRule::Unsupported,
        }
    }
}

impl Default for VersionGates {
    fn default() -> Self {
        Self::ANDROID
    }
}

/// How a permission group resolves to platform identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionRule {
    /// The identifiers are required on every version.
    Always(&'static [&'static str]),

    /// The identifiers are required from `min_version` on.
    Gated {
        /// First version requiring the identifiers.
        min_version: u32,
        /// Identifiers, in request order.
        names: &'static [&'static str],
        /// Outcome on older versions.
        below: BelowGate,
    },

    /// Granted through a settings screen, never through the request dialog.
    SettingsIntent,

    /// No platform counterpart.
    Unsupported,
}

/// Outcome of a gated rule below its minimum version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BelowGate {
    /// Nothing can be requested at runtime.
    NotApplicable,
    /// The group exists but needs no extra identifiers.
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_thresholds() {
        let gates = VersionGates::default();
        assert_eq!(gates.notification, 33);
        assert_eq!(gates.background_location, 29);
        assert_eq!(gates.bluetooth_runtime, 31);
    }

    #[test]
    fn test_min_version_for() {
        let gates = VersionGates::ANDROID;
        assert_eq!(gates.min_version_for(PermissionGroup::Notification), Some(33));
        assert_eq!(gates.min_version_for(PermissionGroup::LocationAlways), Some(29));
        assert_eq!(gates.min_version_for(PermissionGroup::BluetoothScan), Some(31));
        assert_eq!(gates.min_version_for(PermissionGroup::Location), None);
        assert_eq!(gates.min_version_for(PermissionGroup::SystemAlertWindow), None);
    }

    #[test]
    fn test_every_group_has_a_rule() {
        let gates = VersionGates::ANDROID;
        for group in PermissionGroup::all() {
            let rule = gates.rule_for(group);
            match rule {
                ResolutionRule::Always(names) | ResolutionRule::Gated { names, .. } => {
                    assert!(!names.is_empty(), "{group} has an empty runtime rule");
                }
                ResolutionRule::SettingsIntent => assert!(group.is_settings_intent()),
                ResolutionRule::Unsupported => assert!(matches!(
                    group,
                    PermissionGroup::Unknown | PermissionGroup::Speech
                )),
            }
        }
    }

    #[test]
    fn test_custom_gates_move_thresholds() {
        let gates = VersionGates {
            notification: 40,
            ..VersionGates::ANDROID
        };
        assert_eq!(gates.min_version_for(PermissionGroup::Notification), Some(40));
    }
}
