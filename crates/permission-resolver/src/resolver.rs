//! # Resolver
//!
//! Resolves an abstract permission group to the ordered platform identifiers
//! that must be requested for it on a given platform version.
//!
//! All operations are pure over their inputs. A [`Resolver`] only carries an
//! immutable [`ResolverConfig`], so it is `Send + Sync` and can be shared or
//! cloned freely; the module-level functions use the default configuration.

use permission_taxonomy::PermissionGroup;
use serde::Serialize;

use crate::config::ResolverConfig;
use crate::gates::{BelowGate, ResolutionRule};
use crate::gateway::PlatformGateway;
use crate::routing::RequestRoute;

/// Platform identifiers required for a group.
///
/// `Required(vec![])` and `NotApplicable` are different outcomes: the former
/// means the group exists on this version but needs nothing extra, the latter
/// means no runtime request can be made for the group at all.
///
/// Serializes as an array of identifiers, or `null` when not applicable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlatformNames {
    /// Identifiers to request, in order.
    Required(Vec<&'static str>),
    /// Do not attempt a runtime request for this group.
    NotApplicable,
}

impl PlatformNames {
    /// Check if no runtime request applies.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, PlatformNames::NotApplicable)
    }

    /// Get the identifiers, or `None` when not applicable.
    pub fn names(&self) -> Option<&[&'static str]> {
        match self {
            PlatformNames::Required(names) => Some(names),
            PlatformNames::NotApplicable => None,
        }
    }

    /// Get the first identifier, if any.
    pub fn first(&self) -> Option<&'static str> {
        self.names().and_then(|names| names.first().copied())
    }

    /// Convert into an optional list, `None` meaning not applicable.
    pub fn into_option(self) -> Option<Vec<&'static str>> {
        match self {
            PlatformNames::Required(names) => Some(names),
            PlatformNames::NotApplicable => None,
        }
    }
}

/// Resolver over a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create a resolver configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ResolverConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a group to platform identifiers for a platform version.
    ///
    /// # Example
    ///
    /// ```
    /// use permission_resolver::{PlatformNames, Resolver};
    /// use permission_taxonomy::PermissionGroup;
    ///
    /// let resolver = Resolver::default();
    /// assert_eq!(
    ///     resolver.group_to_platform_names(PermissionGroup::Microphone, 21),
    ///     PlatformNames::Required(vec!["android.permission.RECORD_AUDIO"])
    /// );
    /// assert!(resolver
    ///     .group_to_platform_names(PermissionGroup::Notification, 32)
    ///     .is_not_applicable());
    /// ```
    pub fn group_to_platform_names(
        &self,
        group: PermissionGroup,
        platform_version: u32,
    ) -> PlatformNames {
        let names = match self.config.gates.rule_for(group) {
            ResolutionRule::Always(names) => PlatformNames::Required(names.to_vec()),
            ResolutionRule::Gated {
                min_version,
                names,
                below,
            } => {
                if platform_version >= min_version {
                    PlatformNames::Required(names.to_vec())
                } else {
                    match below {
                        BelowGate::NotApplicable => PlatformNames::NotApplicable,
                        BelowGate::Empty => PlatformNames::Required(Vec::new()),
                    }
                }
            }
            ResolutionRule::SettingsIntent | ResolutionRule::Unsupported => {
                PlatformNames::NotApplicable
            }
        };

        tracing::trace!(
            target: "permission_handler",
            group = group.as_str(),
            platform_version,
            names = ?names,
            "Resolved permission group"
        );
        names
    }

    /// The platform version to resolve against.
    ///
    /// A version pinned in the configuration wins over the gateway's report.
    pub fn platform_version<G: PlatformGateway + ?Sized>(&self, gateway: &G) -> u32 {
        self.config
            .platform_version
            .unwrap_or_else(|| gateway.current_platform_version())
    }

    /// Resolve a group against the gateway's platform version.
    pub fn names_for_gateway<G: PlatformGateway + ?Sized>(
        &self,
        group: PermissionGroup,
        gateway: &G,
    ) -> PlatformNames {
        self.group_to_platform_names(group, self.platform_version(gateway))
    }

    /// Decide how a group must be requested on a platform version.
    pub fn plan_request(&self, group: PermissionGroup, platform_version: u32) -> RequestRoute {
        RequestRoute::plan(group, self.group_to_platform_names(group, platform_version))
    }

    /// Query the gateway's rationale hint for a group.
    ///
    /// Resolves the group's first identifier and asks the gateway whether a
    /// rationale should be shown for it. Does nothing when the group has no
    /// identifier. The answer is neither stored nor returned; callers that
    /// need it must ask the gateway directly.
    pub fn update_rationale_visibility<G: PlatformGateway + ?Sized>(
        &self,
        group: PermissionGroup,
        gateway: &G,
    ) {
        let Some(name) = self.names_for_gateway(group, gateway).first() else {
            return;
        };

        let should_show = gateway.should_show_rationale(name);
        tracing::debug!(
            target: "permission_handler",
            group = group.as_str(),
            name,
            should_show,
            "Queried rationale visibility"
        );
    }
}

/// Resolve a group to platform identifiers with the default thresholds.
pub fn group_to_platform_names(group: PermissionGroup, platform_version: u32) -> PlatformNames {
    Resolver::default().group_to_platform_names(group, platform_version)
}

/// Decide how a group must be requested, with the default thresholds.
pub fn plan_request(group: PermissionGroup, platform_version: u32) -> RequestRoute {
    Resolver::default().plan_request(group, platform_version)
}

/// Query the gateway's rationale hint for a group, with the default thresholds.
pub fn update_rationale_visibility<G: PlatformGateway + ?Sized>(
    group: PermissionGroup,
    gateway: &G,
) {
    Resolver::default().update_rationale_visibility(group, gateway)
}
