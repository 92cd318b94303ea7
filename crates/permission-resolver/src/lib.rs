//! # Permission Resolver
//!
//! This crate translates abstract permission groups into the platform
//! permission identifiers that have to be requested, and maps platform grant
//! results back into abstract statuses.
//!
//! ## Overview
//!
//! The permission-resolver crate handles:
//! - **Classification**: platform identifier -> permission group
//! - **Resolution**: permission group + platform version -> identifiers
//! - **Grant Mapping**: platform grant outcome -> permission status
//! - **Routing**: runtime dialog, settings screen, or nothing
//! - **Rationale**: best-effort rationale query through the gateway
//!
//! ## Data Flow
//!
//! ```text
//! group ──group_to_platform_names(group, version)──> [identifiers] | NotApplicable
//!                                                         │
//!                                     PlatformGateway::request_permissions
//!                                                         │
//! status <──────────result_to_status(grant_result)─── grant results
//! ```
//!
//! Every operation is total and free of shared mutable state, so the resolver
//! can be called from any thread. Only the gateway may impose a thread.
//!
//! ## Usage
//!
//! ```rust
//! use permission_resolver::{
//!     classify_platform_name, group_to_platform_names, result_to_status, PlatformNames,
//!     GRANT_RESULT_GRANTED,
//! };
//! use permission_taxonomy::{PermissionGroup, PermissionStatus};
//!
//! let names = group_to_platform_names(PermissionGroup::Phone, 30);
//! assert_eq!(
//!     names,
//!     PlatformNames::Required(vec![
//!         "android.permission.CALL_PHONE",
//!         "android.permission.READ_PHONE_STATE",
//!     ])
//! );
//!
//! assert_eq!(
//!     classify_platform_name("android.permission.READ_PHONE_STATE"),
//!     PermissionGroup::Phone
//! );
//! assert_eq!(result_to_status(GRANT_RESULT_GRANTED), PermissionStatus::Granted);
//!
//! assert!(group_to_platform_names(PermissionGroup::ManageExternalStorage, 30).is_not_applicable());
//! ```
//!
//! ## Configuration
//!
//! Version thresholds default to the Android values and can be overridden via
//! [`ResolverConfig::from_env`]. Logging goes through `tracing` under the
//! `permission_handler` target; no subscriber is installed here.

pub mod config;
pub mod error;
pub mod gates;
pub mod gateway;
pub mod grant;
pub mod manifest;
pub mod resolver;
pub mod routing;

// Re-export main types for convenience
pub use config::ResolverConfig;
pub use error::{ConfigError, ConfigResult};
pub use gates::{ResolutionRule, VersionGates};
pub use gateway::PlatformGateway;
pub use grant::{collect_statuses, result_to_status, GRANT_RESULT_DENIED, GRANT_RESULT_GRANTED};
pub use manifest::classify_platform_name;
pub use resolver::{
    group_to_platform_names, plan_request, update_rationale_visibility, PlatformNames, Resolver,
};
pub use routing::RequestRoute;

// The vocabulary is part of this crate's API
pub use permission_taxonomy::{
    PermissionGroup, PermissionStatus, RequestCode, ServiceStatus, TaxonomyError,
};
