//! # Request Codes
//!
//! Integer identifiers attached to a platform permission request so the
//! result callback can be routed back to the flow that issued it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TaxonomyError;
use crate::group::PermissionGroup;

/// Request codes for the platform permission flows.
///
/// Every ordinary runtime permission shares `Default`. Each settings-intent
/// group has a dedicated code because its result arrives through a separate
/// activity-result path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum RequestCode {
    /// Runtime permission dialog.
    Default = 200,
    /// Battery optimization exemption screen.
    IgnoreBatteryOptimizations = 201,
    /// All-files access screen.
    ManageExternalStorage = 202,
    /// Overlay permission screen.
    SystemAlertWindow = 203,
    /// Unknown sources screen.
    RequestInstallPackages = 204,
    /// Do-not-disturb access screen.
    AccessNotificationPolicy = 205,
    /// Exact alarm screen.
    ScheduleExactAlarm = 206,
}

impl RequestCode {
    const KIND: &'static str = "request code";

    /// Get the stable integer wire code.
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Decode a wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::all().into_iter().find(|rc| rc.code() == code)
    }

    /// Get the request code used to ask for a group.
    ///
    /// # Example
    ///
    /// ```
    /// use permission_taxonomy::{PermissionGroup, RequestCode};
    ///
    /// assert_eq!(RequestCode::for_group(PermissionGroup::Phone), RequestCode::Default);
    /// assert_eq!(
    ///     RequestCode::for_group(PermissionGroup::SystemAlertWindow).code(),
    ///     203
    /// );
    /// ```
    pub fn for_group(group: PermissionGroup) -> Self {
        match group {
            PermissionGroup::IgnoreBatteryOptimizations => RequestCode::IgnoreBatteryOptimizations,
            PermissionGroup::ManageExternalStorage => RequestCode::ManageExternalStorage,
            PermissionGroup::SystemAlertWindow => RequestCode::SystemAlertWindow,
            PermissionGroup::RequestInstallPackages => RequestCode::RequestInstallPackages,
            PermissionGroup::AccessNotificationPolicy => RequestCode::AccessNotificationPolicy,
            PermissionGroup::ScheduleExactAlarm => RequestCode::ScheduleExactAlarm,
            _ => RequestCode::Default,
        }
    }

    /// Get the group a dedicated code belongs to.
    ///
    /// Returns `None` for `Default`, which is shared by all runtime groups.
    pub fn group(&self) -> Option<PermissionGroup> {
        match self {
            RequestCode::Default => None,
            RequestCode::IgnoreBatteryOptimizations => Some(PermissionGroup::IgnoreBatteryOptimizations),
            RequestCode::ManageExternalStorage => Some(PermissionGroup::ManageExternalStorage),
            RequestCode::SystemAlertWindow => Some(PermissionGroup::SystemAlertWindow),
            RequestCode::RequestInstallPackages => Some(PermissionGroup::RequestInstallPackages),
            RequestCode::AccessNotificationPolicy => Some(PermissionGroup::AccessNotificationPolicy),
            RequestCode::ScheduleExactAlarm => Some(PermissionGroup::ScheduleExactAlarm),
        }
    }

    /// Get all request codes.
    pub fn all() -> Vec<Self> {
        vec![
            RequestCode::Default,
            RequestCode::IgnoreBatteryOptimizations,
            RequestCode::ManageExternalStorage,
            RequestCode::SystemAlertWindow,
            RequestCode::RequestInstallPackages,
            RequestCode::AccessNotificationPolicy,
            RequestCode::ScheduleExactAlarm,
        ]
    }
}

impl fmt::Display for RequestCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<RequestCode> for i32 {
    fn from(code: RequestCode) -> Self {
        code.code()
    }
}

impl TryFrom<i32> for RequestCode {
    type Error = TaxonomyError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| TaxonomyError::unknown_code(Self::KIND, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_code_values() {
        assert_eq!(RequestCode::Default.code(), 200);
        assert_eq!(RequestCode::IgnoreBatteryOptimizations.code(), 201);
        assert_eq!(RequestCode::ManageExternalStorage.code(), 202);
        assert_eq!(RequestCode::SystemAlertWindow.code(), 203);
        assert_eq!(RequestCode::RequestInstallPackages.code(), 204);
        assert_eq!(RequestCode::AccessNotificationPolicy.code(), 205);
        assert_eq!(RequestCode::ScheduleExactAlarm.code(), 206);
    }

    #[test]
    fn test_dedicated_codes_only_for_settings_groups() {
        for group in PermissionGroup::all() {
            let code = RequestCode::for_group(group);
            if group.is_settings_intent() {
                assert_ne!(code, RequestCode::Default, "{group}");
                assert_eq!(code.group(), Some(group));
            } else {
                assert_eq!(code, RequestCode::Default, "{group}");
            }
        }
        assert_eq!(RequestCode::Default.group(), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(RequestCode::from_code(206), Some(RequestCode::ScheduleExactAlarm));
        assert_eq!(RequestCode::from_code(207), None);
        assert!(RequestCode::try_from(0).is_err());
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&RequestCode::Default).unwrap(), "200");
        assert_eq!(
            serde_json::from_str::<RequestCode>("205").unwrap(),
            RequestCode::AccessNotificationPolicy
        );
    }
}
