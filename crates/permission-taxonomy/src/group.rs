//! # Permission Groups
//!
//! Abstract permission categories, independent of how the platform names the
//! individual grantable capabilities. Integer codes are part of the wire
//! contract with external callers and must never be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TaxonomyError;

/// Abstract permission categories.
///
/// Groups fall into three families:
/// - **Runtime**: granted through the platform's standard request dialog
///   (Notification, Location*, Bluetooth*, Microphone, Phone)
/// - **Settings-intent**: granted on a system settings screen
///   (IgnoreBatteryOptimizations, ManageExternalStorage, SystemAlertWindow,
///   RequestInstallPackages, AccessNotificationPolicy, ScheduleExactAlarm)
/// - **Unmapped**: Unknown and Speech, which resolve to nothing on this platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum PermissionGroup {
    /// Unrecognized or absent permission.
    Unknown = 0,
    /// Posting notifications.
    Notification = 1,
    /// Location while the app is in use (fine and coarse).
    Location = 2,
    /// Location in the background.
    LocationAlways = 3,
    /// Location while in use; resolves exactly like `Location`.
    LocationWhenInUse = 4,
    /// Any Bluetooth access.
    Bluetooth = 5,
    /// Connecting to paired Bluetooth devices.
    BluetoothConnect = 6,
    /// Scanning for Bluetooth devices.
    BluetoothScan = 7,
    /// Advertising to Bluetooth devices.
    BluetoothAdvertise = 8,
    /// Recording audio.
    Microphone = 9,
    /// Speech recognition.
    Speech = 10,
    /// Placing calls and reading phone state.
    Phone = 11,
    /// Exemption from battery optimizations (settings-intent).
    IgnoreBatteryOptimizations = 12,
    /// All-files storage access (settings-intent).
    ManageExternalStorage = 13,
    /// Drawing over other apps (settings-intent).
    SystemAlertWindow = 14,
    /// Installing packages (settings-intent).
    RequestInstallPackages = 15,
    /// Do-not-disturb policy access (settings-intent).
    AccessNotificationPolicy = 16,
    /// Scheduling exact alarms (settings-intent).
    ScheduleExactAlarm = 17,
}

impl PermissionGroup {
    const KIND: &'static str = "permission group";

    /// Get the stable integer wire code.
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Decode a wire code.
    ///
    /// # Returns
    ///
    /// `Some(PermissionGroup)` if the code is defined, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use permission_taxonomy::PermissionGroup;
    ///
    /// assert_eq!(PermissionGroup::from_code(11), Some(PermissionGroup::Phone));
    /// assert_eq!(PermissionGroup::from_code(18), None);
    /// ```
    pub fn from_code(code: i32) -> Option<Self> {
        Self::all().into_iter().find(|group| group.code() == code)
    }

    /// Get the snake_case symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionGroup::Unknown => "unknown",
            PermissionGroup::Notification => "notification",
            PermissionGroup::Location => "location",
            PermissionGroup::LocationAlways => "location_always",
            PermissionGroup::LocationWhenInUse => "location_when_in_use",
            PermissionGroup::Bluetooth => "bluetooth",
            PermissionGroup::BluetoothConnect => "bluetooth_connect",
            PermissionGroup::BluetoothScan => "bluetooth_scan",
            PermissionGroup::BluetoothAdvertise => "bluetooth_advertise",
            PermissionGroup::Microphone => "microphone",
            PermissionGroup::Speech => "speech",
            PermissionGroup::Phone => "phone",
            PermissionGroup::IgnoreBatteryOptimizations => "ignore_battery_optimizations",
            PermissionGroup::ManageExternalStorage => "manage_external_storage",
            PermissionGroup::SystemAlertWindow => "system_alert_window",
            PermissionGroup::RequestInstallPackages => "request_install_packages",
            PermissionGroup::AccessNotificationPolicy => "access_notification_policy",
            PermissionGroup::ScheduleExactAlarm => "schedule_exact_alarm",
        }
    }

    /// Parse a group from its symbolic name (case-insensitive).
    ///
    /// This parses the abstract vocabulary, not platform identifiers; use the
    /// resolver's classifier for `android.permission.*` strings.
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.to_lowercase();
        Self::all()
            .into_iter()
            .find(|group| group.as_str() == lowered)
    }

    /// Get all groups in wire-code order.
    pub fn all() -> Vec<Self> {
        vec![
            PermissionGroup::Unknown,
            PermissionGroup::Notification,
            PermissionGroup::Location,
            PermissionGroup::LocationAlways,
            PermissionGroup::LocationWhenInUse,
            PermissionGroup::Bluetooth,
            PermissionGroup::BluetoothConnect,
            PermissionGroup::BluetoothScan,
            PermissionGroup::BluetoothAdvertise,
            PermissionGroup::Microphone,
            PermissionGroup::Speech,
            PermissionGroup::Phone,
            PermissionGroup::IgnoreBatteryOptimizations,
            PermissionGroup::ManageExternalStorage,
            PermissionGroup::SystemAlertWindow,
            PermissionGroup::RequestInstallPackages,
            PermissionGroup::AccessNotificationPolicy,
            PermissionGroup::ScheduleExactAlarm,
        ]
    }

    /// Check if the group is granted through a system settings screen
    /// instead of the runtime request dialog.
    pub fn is_settings_intent(&self) -> bool {
        matches!(
            self,
            PermissionGroup::IgnoreBatteryOptimizations
                | PermissionGroup::ManageExternalStorage
                | PermissionGroup::SystemAlertWindow
                | PermissionGroup::RequestInstallPackages
                | PermissionGroup::AccessNotificationPolicy
                | PermissionGroup::ScheduleExactAlarm
        )
    }

    /// Check if the group is one of the Bluetooth groups.
    pub fn is_bluetooth(&self) -> bool {
        matches!(
            self,
            PermissionGroup::Bluetooth
                | PermissionGroup::BluetoothConnect
                | PermissionGroup::BluetoothScan
                | PermissionGroup::BluetoothAdvertise
        )
    }

    /// Check if the group is one of the location groups.
    pub fn is_location(&self) -> bool {
        matches!(
            self,
            PermissionGroup::Location
                | PermissionGroup::LocationAlways
                | PermissionGroup::LocationWhenInUse
        )
    }
}

impl fmt::Display for PermissionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PermissionGroup> for i32 {
    fn from(group: PermissionGroup) -> Self {
        group.code()
    }
}

impl TryFrom<i32> for PermissionGroup {
    type Error = TaxonomyError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| TaxonomyError::unknown_code(Self::KIND, code))
    }
}

impl FromStr for PermissionGroup {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| TaxonomyError::unknown_name(Self::KIND, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_codes_are_stable() {
        assert_eq!(PermissionGroup::Unknown.code(), 0);
        assert_eq!(PermissionGroup::Notification.code(), 1);
        assert_eq!(PermissionGroup::Location.code(), 2);
        assert_eq!(PermissionGroup::LocationAlways.code(), 3);
        assert_eq!(PermissionGroup::LocationWhenInUse.code(), 4);
        assert_eq!(PermissionGroup::Bluetooth.code(), 5);
        assert_eq!(PermissionGroup::BluetoothConnect.code(), 6);
        assert_eq!(PermissionGroup::BluetoothScan.code(), 7);
        assert_eq!(PermissionGroup::BluetoothAdvertise.code(), 8);
        assert_eq!(PermissionGroup::Microphone.code(), 9);
        assert_eq!(PermissionGroup::Speech.code(), 10);
        assert_eq!(PermissionGroup::Phone.code(), 11);
        assert_eq!(PermissionGroup::IgnoreBatteryOptimizations.code(), 12);
        assert_eq!(PermissionGroup::ManageExternalStorage.code(), 13);
        assert_eq!(PermissionGroup::SystemAlertWindow.code(), 14);
        assert_eq!(PermissionGroup::RequestInstallPackages.code(), 15);
        assert_eq!(PermissionGroup::AccessNotificationPolicy.code(), 16);
        assert_eq!(PermissionGroup::ScheduleExactAlarm.code(), 17);
    }

    #[test]
    fn test_all_groups_in_code_order() {
        let all = PermissionGroup::all();
        assert_eq!(all.len(), 18);
        for (index, group) in all.iter().enumerate() {
            assert_eq!(group.code(), index as i32);
        }
    }

    #[test]
    fn test_from_code() {
        for group in PermissionGroup::all() {
            assert_eq!(PermissionGroup::from_code(group.code()), Some(group));
        }
        assert_eq!(PermissionGroup::from_code(-1), None);
        assert_eq!(PermissionGroup::from_code(18), None);
    }

    #[test]
    fn test_try_from_rejects_unknown_code() {
        let err = PermissionGroup::try_from(42).unwrap_err();
        assert_eq!(
            err,
            TaxonomyError::UnknownCode {
                kind: "permission group",
                code: 42
            }
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(PermissionGroup::parse("phone"), Some(PermissionGroup::Phone));
        assert_eq!(
            PermissionGroup::parse("LOCATION_ALWAYS"),
            Some(PermissionGroup::LocationAlways)
        );
        assert_eq!(PermissionGroup::parse("camera"), None);
        assert!("nope".parse::<PermissionGroup>().is_err());
        assert_eq!(
            "schedule_exact_alarm".parse::<PermissionGroup>(),
            Ok(PermissionGroup::ScheduleExactAlarm)
        );
    }

    #[test]
    fn test_settings_intent_groups() {
        let special: Vec<_> = PermissionGroup::all()
            .into_iter()
            .filter(|g| g.is_settings_intent())
            .collect();
        assert_eq!(
            special,
            vec![
                PermissionGroup::IgnoreBatteryOptimizations,
                PermissionGroup::ManageExternalStorage,
                PermissionGroup::SystemAlertWindow,
                PermissionGroup::RequestInstallPackages,
                PermissionGroup::AccessNotificationPolicy,
                PermissionGroup::ScheduleExactAlarm,
            ]
        );
    }

    #[test]
    fn test_family_predicates() {
        assert!(PermissionGroup::BluetoothScan.is_bluetooth());
        assert!(!PermissionGroup::Microphone.is_bluetooth());
        assert!(PermissionGroup::LocationWhenInUse.is_location());
        assert!(!PermissionGroup::Phone.is_location());
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&PermissionGroup::Phone).unwrap();
        assert_eq!(json, "11");

        let group: PermissionGroup = serde_json::from_str("13").unwrap();
        assert_eq!(group, PermissionGroup::ManageExternalStorage);

        assert!(serde_json::from_str::<PermissionGroup>("99").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PermissionGroup::BluetoothAdvertise.to_string(), "bluetooth_advertise");
    }
}
