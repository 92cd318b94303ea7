//! # Platform Identifiers
//!
//! Platform-native permission identifiers and the reverse lookup from an
//! identifier to the abstract group it belongs to.

use permission_taxonomy::PermissionGroup;

/// Runtime notification permission.
pub const POST_NOTIFICATIONS: &str = "android.permission.POST_NOTIFICATIONS";
/// Precise location.
pub const ACCESS_FINE_LOCATION: &str = "android.permission.ACCESS_FINE_LOCATION";
/// Approximate location.
pub const ACCESS_COARSE_LOCATION: &str = "android.permission.ACCESS_COARSE_LOCATION";
/// Location while the app is in the background.
pub const ACCESS_BACKGROUND_LOCATION: &str = "android.permission.ACCESS_BACKGROUND_LOCATION";
/// Audio recording.
pub const RECORD_AUDIO: &str = "android.permission.RECORD_AUDIO";
/// Legacy install-time Bluetooth permission.
pub const BLUETOOTH: &str = "android.permission.BLUETOOTH";
/// Connecting to paired Bluetooth devices.
pub const BLUETOOTH_CONNECT: &str = "android.permission.BLUETOOTH_CONNECT";
/// Discovering Bluetooth devices.
pub const BLUETOOTH_SCAN: &str = "android.permission.BLUETOOTH_SCAN";
/// Advertising to Bluetooth devices.
pub const BLUETOOTH_ADVERTISE: &str = "android.permission.BLUETOOTH_ADVERTISE";
/// Placing phone calls.
pub const CALL_PHONE: &str = "android.permission.CALL_PHONE";
/// Reading phone state.
pub const READ_PHONE_STATE: &str = "android.permission.READ_PHONE_STATE";

/// Classify a platform permission identifier into its abstract group.
///
/// Matching is exact and case-sensitive. Absent, empty and unrecognized
/// identifiers all classify as [`PermissionGroup::Unknown`].
///
/// # Example
///
/// ```
/// use permission_resolver::manifest::{classify_platform_name, BLUETOOTH_SCAN};
/// use permission_taxonomy::PermissionGroup;
///
/// assert_eq!(classify_platform_name(BLUETOOTH_SCAN), PermissionGroup::Bluetooth);
/// assert_eq!(classify_platform_name(None), PermissionGroup::Unknown);
/// assert_eq!(classify_platform_name("android.permission.CAMERA"), PermissionGroup::Unknown);
/// ```
pub fn classify_platform_name<'a>(name: impl Into<Option<&'a str>>) -> PermissionGroup {
    let Some(name) = name.into() else {
        return PermissionGroup::Unknown;
    };

    match name {
        POST_NOTIFICATIONS => PermissionGroup::Notification,
        ACCESS_FINE_LOCATION | ACCESS_COARSE_LOCATION => PermissionGroup::Location,
        ACCESS_BACKGROUND_LOCATION => PermissionGroup::LocationAlways,
        RECORD_AUDIO => PermissionGroup::Microphone,
        BLUETOOTH_SCAN | BLUETOOTH_CONNECT | BLUETOOTH_ADVERTISE | BLUETOOTH => {
            PermissionGroup::Bluetooth
        }
        CALL_PHONE | READ_PHONE_STATE => PermissionGroup::Phone,
        _ => PermissionGroup::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_identifiers() {
        let table = [
            (POST_NOTIFICATIONS, PermissionGroup::Notification),
            (ACCESS_FINE_LOCATION, PermissionGroup::Location),
            (ACCESS_COARSE_LOCATION, PermissionGroup::Location),
            (ACCESS_BACKGROUND_LOCATION, PermissionGroup::LocationAlways),
            (RECORD_AUDIO, PermissionGroup::Microphone),
            (BLUETOOTH_SCAN, PermissionGroup::Bluetooth),
            (BLUETOOTH_CONNECT, PermissionGroup::Bluetooth),
            (BLUETOOTH_ADVERTISE, PermissionGroup::Bluetooth),
            (BLUETOOTH, PermissionGroup::Bluetooth),
            (CALL_PHONE, PermissionGroup::Phone),
            (READ_PHONE_STATE, PermissionGroup::Phone),
        ];

        for (name, expected) in table {
            assert_eq!(classify_platform_name(name), expected, "{name}");
        }
    }

    #[test]
    fn test_classify_unrecognized_is_unknown() {
        assert_eq!(classify_platform_name(None), PermissionGroup::Unknown);
        assert_eq!(classify_platform_name(""), PermissionGroup::Unknown);
        assert_eq!(classify_platform_name("android.permission.CAMERA"), PermissionGroup::Unknown);
        assert_eq!(
            classify_platform_name("android.permission.SYSTEM_ALERT_WINDOW"),
            PermissionGroup::Unknown
        );
        assert_eq!(classify_platform_name("RECORD_AUDIO"), PermissionGroup::Unknown);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(
            classify_platform_name("android.permission.record_audio"),
            PermissionGroup::Unknown
        );
        assert_eq!(
            classify_platform_name(" android.permission.RECORD_AUDIO"),
            PermissionGroup::Unknown
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let inputs = [
            Some(POST_NOTIFICATIONS),
            Some(ACCESS_BACKGROUND_LOCATION),
            Some(BLUETOOTH),
            Some(READ_PHONE_STATE),
            Some(""),
            Some("android.permission.CAMERA"),
            None,
        ];
        for name in inputs {
            assert_eq!(classify_platform_name(name), classify_platform_name(name), "{name:?}");
        }
    }

    #[test]
    fn test_classify_accepts_optional_input() {
        let present: Option<&str> = Some(CALL_PHONE);
        assert_eq!(classify_platform_name(present), PermissionGroup::Phone);
    }
}
