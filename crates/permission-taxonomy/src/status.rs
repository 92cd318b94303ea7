//! # Statuses
//!
//! Abstract outcomes reported back to callers: the status of a permission
//! group and the status of the service behind it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TaxonomyError;

/// Status of a permission group.
///
/// `Restricted` exists for API completeness. The resolver collapses every
/// non-grant platform outcome to `Denied` and never produces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum PermissionStatus {
    /// The user granted access.
    Granted = 0,
    /// Access was denied (or not granted for any other reason).
    Denied = 1,
    /// The OS restricts access (e.g. parental controls).
    Restricted = 2,
}

impl PermissionStatus {
    const KIND: &'static str = "permission status";

    /// Get the stable integer wire code.
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Decode a wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PermissionStatus::Granted),
            1 => Some(PermissionStatus::Denied),
            2 => Some(PermissionStatus::Restricted),
            _ => None,
        }
    }

    /// Get the snake_case symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionStatus::Granted => "granted",
            PermissionStatus::Denied => "denied",
            PermissionStatus::Restricted => "restricted",
        }
    }

    /// Parse a status from its symbolic name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "granted" => Some(PermissionStatus::Granted),
            "denied" => Some(PermissionStatus::Denied),
            "restricted" => Some(PermissionStatus::Restricted),
            _ => None,
        }
    }

    /// Get all statuses.
    pub fn all() -> Vec<Self> {
        vec![
            PermissionStatus::Granted,
            PermissionStatus::Denied,
            PermissionStatus::Restricted,
        ]
    }

    /// Check if access is granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PermissionStatus> for i32 {
    fn from(status: PermissionStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i32> for PermissionStatus {
    type Error = TaxonomyError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| TaxonomyError::unknown_code(Self::KIND, code))
    }
}

/// Status of the service backing a permission group (e.g. location services).
///
/// Only the vocabulary lives here; computing it is up to the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum ServiceStatus {
    /// The service is switched on.
    Enabled = 0,
    /// The service is switched off.
    Disabled = 1,
    /// The group has no backing service.
    NotApplicable = 2,
}

impl ServiceStatus {
    const KIND: &'static str = "service status";

    /// Get the stable integer wire code.
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Decode a wire code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ServiceStatus::Enabled),
            1 => Some(ServiceStatus::Disabled),
            2 => Some(ServiceStatus::NotApplicable),
            _ => None,
        }
    }

    /// Get the snake_case symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Enabled => "enabled",
            ServiceStatus::Disabled => "disabled",
            ServiceStatus::NotApplicable => "not_applicable",
        }
    }

    /// Parse a service status from its symbolic name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "enabled" => Some(ServiceStatus::Enabled),
            "disabled" => Some(ServiceStatus::Disabled),
            "not_applicable" | "n/a" => Some(ServiceStatus::NotApplicable),
            _ => None,
        }
    }

    /// Get all service statuses.
    pub fn all() -> Vec<Self> {
        vec![
            ServiceStatus::Enabled,
            ServiceStatus::Disabled,
            ServiceStatus::NotApplicable,
        ]
    }

    /// Check if the service is enabled.
    pub fn is_enabled(&self) -> bool {
        matches!(self, ServiceStatus::Enabled)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ServiceStatus> for i32 {
    fn from(status: ServiceStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i32> for ServiceStatus {
    type Error = TaxonomyError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| TaxonomyError::unknown_code(Self::KIND, code))
    }
}
