//! Request routing.
//!
//! Turns a resolution into the flow a caller has to take: the runtime
//! request dialog, a system settings screen, or nothing at all.

use permission_taxonomy::{PermissionGroup, RequestCode};

use crate::gateway::PlatformGateway;
use crate::resolver::PlatformNames;

/// How a permission group has to be requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestRoute {
    /// Ask through the platform's runtime dialog.
    Runtime {
        /// Identifiers to request, in order (never empty).
        names: Vec<&'static str>,
        /// Code identifying the result callback.
        request_code: RequestCode,
    },

    /// Send the user to a system settings screen.
    SettingsIntent {
        /// Dedicated code for the group's settings screen.
        request_code: RequestCode,
    },

    /// Nothing to request on this platform version.
    NothingToRequest,
}

impl RequestRoute {
    /// Choose the route for a group given its resolved identifiers.
    pub fn plan(group: PermissionGroup, names: PlatformNames) -> Self {
        if group.is_settings_intent() {
            return RequestRoute::SettingsIntent {
                request_code: RequestCode::for_group(group),
            };
        }

        match names {
            PlatformNames::Required(names) if !names.is_empty() => RequestRoute::Runtime {
                names,
                request_code: RequestCode::Default,
            },
            _ => RequestRoute::NothingToRequest,
        }
    }

    /// Get the request code, if the route issues a request.
    pub fn request_code(&self) -> Option<RequestCode> {
        match self {
            RequestRoute::Runtime { request_code, .. }
            | RequestRoute::SettingsIntent { request_code } => Some(*request_code),
            RequestRoute::NothingToRequest => None,
        }
    }

    /// Check if the route uses the runtime dialog.
    pub fn is_runtime(&self) -> bool {
        matches!(self, RequestRoute::Runtime { .. })
    }

    /// Hand a runtime route to the gateway.
    ///
    /// Settings-intent routes are left to the host's intent flow and nothing
    /// routes are no-ops.
    ///
    /// # Returns
    ///
    /// `true` if the gateway was asked to show the runtime dialog
    pub fn dispatch<G: PlatformGateway + ?Sized>(&self, gateway: &G) -> bool {
        match self {
            RequestRoute::Runtime {
                names,
                request_code,
            } => {
                tracing::debug!(
                    target: "permission_handler",
                    count = names.len(),
                    request_code = request_code.code(),
                    "Requesting runtime permissions"
                );
                gateway.request_permissions(names, *request_code);
                true
            }
            RequestRoute::SettingsIntent { .. } | RequestRoute::NothingToRequest => false,
        }
    }
}
