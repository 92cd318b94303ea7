//! Resolver configuration.
//!
//! Holds the version threshold table and an optional pinned platform version.
//! Configuration is loaded from environment variables with the Android
//! thresholds as defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::gates::VersionGates;

/// Overrides the notification threshold.
pub const ENV_NOTIFICATION_MIN_SDK: &str = "PERMISSION_NOTIFICATION_MIN_SDK";
/// Overrides the background location threshold.
pub const ENV_BACKGROUND_LOCATION_MIN_SDK: &str = "PERMISSION_BACKGROUND_LOCATION_MIN_SDK";
/// Overrides the Bluetooth runtime threshold.
pub const ENV_BLUETOOTH_RUNTIME_MIN_SDK: &str = "PERMISSION_BLUETOOTH_RUNTIME_MIN_SDK";
/// Pins the platform version instead of asking the gateway.
pub const ENV_PLATFORM_VERSION: &str = "PERMISSION_PLATFORM_VERSION";

/// Resolver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Minimum versions for the gated rules.
    #[serde(default)]
    pub gates: VersionGates,

    /// Platform version to use instead of the gateway's report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<u32>,
}

impl ResolverConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PERMISSION_NOTIFICATION_MIN_SDK`: notification threshold (default: 33)
    /// - `PERMISSION_BACKGROUND_LOCATION_MIN_SDK`: background location threshold (default: 29)
    /// - `PERMISSION_BLUETOOTH_RUNTIME_MIN_SDK`: Bluetooth runtime threshold (default: 31)
    /// - `PERMISSION_PLATFORM_VERSION`: pinned platform version (default: unset)
    ///
    /// Unparsable or zero thresholds fall back to the defaults; use
    /// [`Self::try_from_env`] to reject them.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from environment variables, rejecting invalid values.
    pub fn try_from_env() -> ConfigResult<Self> {
        Self::try_from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, leniently.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let read = |key: &str, fallback: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .filter(|threshold: &u32| *threshold > 0)
                .unwrap_or(fallback)
        };

        Self {
            gates: VersionGates {
                notification: read(ENV_NOTIFICATION_MIN_SDK, default.gates.notification),
                background_location: read(
                    ENV_BACKGROUND_LOCATION_MIN_SDK,
                    default.gates.background_location,
                ),
                bluetooth_runtime: read(
                    ENV_BLUETOOTH_RUNTIME_MIN_SDK,
                    default.gates.bluetooth_runtime,
                ),
            },
            platform_version: lookup(ENV_PLATFORM_VERSION).and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Build configuration from an arbitrary key lookup, strictly.
    pub fn try_from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let read = |key: &str| -> ConfigResult<Option<u32>> {
            match lookup(key) {
                None => Ok(None),
                Some(raw) => raw
                    .trim()
                    .parse::<u32>()
                    .map(Some)
                    .map_err(|e| ConfigError::invalid_value(key, format!("{raw:?}: {e}"))),
            }
        };

        let config = Self {
            gates: VersionGates {
                notification: read(ENV_NOTIFICATION_MIN_SDK)?
                    .unwrap_or(default.gates.notification),
                background_location: read(ENV_BACKGROUND_LOCATION_MIN_SDK)?
                    .unwrap_or(default.gates.background_location),
                bluetooth_runtime: read(ENV_BLUETOOTH_RUNTIME_MIN_SDK)?
                    .unwrap_or(default.gates.bluetooth_runtime),
            },
            platform_version: read(ENV_PLATFORM_VERSION)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the threshold table.
    ///
    /// A threshold of zero would gate nothing and almost certainly comes from
    /// a misconfigured environment.
    pub fn validate(&self) -> ConfigResult<()> {
        let thresholds = [
            (ENV_NOTIFICATION_MIN_SDK, self.gates.notification),
            (ENV_BACKGROUND_LOCATION_MIN_SDK, self.gates.background_location),
            (ENV_BLUETOOTH_RUNTIME_MIN_SDK, self.gates.bluetooth_runtime),
        ];
        for (key, value) in thresholds {
            if value == 0 {
                return Err(ConfigError::invalid_value(key, "threshold must be positive"));
            }
        }
        Ok(())
    }

    /// Pin the platform version.
    pub fn with_platform_version(mut self, version: u32) -> Self {
        self.platform_version = Some(version);
        self
    }
}
