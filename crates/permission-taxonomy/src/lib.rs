//! # Permission Taxonomy
//!
//! This crate provides the stable vocabulary shared by the permission
//! resolver and the bridge layer that calls it.
//!
//! ## Overview
//!
//! The permission-taxonomy crate defines:
//! - **Permission Groups**: Abstract access categories (location, bluetooth, ...)
//! - **Permission Statuses**: Granted, Denied, Restricted
//! - **Service Statuses**: Enabled, Disabled, NotApplicable
//! - **Request Codes**: Identifiers routing platform results back to a flow
//!
//! ## Wire Codes
//!
//! Every enumeration has a fixed integer code. Callers serialize these codes
//! across the bridge boundary, so they are a compatibility contract:
//!
//! ```text
//! PermissionGroup   Unknown=0 .. ScheduleExactAlarm=17
//! PermissionStatus  Granted=0, Denied=1, Restricted=2
//! ServiceStatus     Enabled=0, Disabled=1, NotApplicable=2
//! RequestCode       Default=200, settings-intent groups 201..=206
//! ```
//!
//! Serde serializes all of them as their integer code.
//!
//! ## Usage
//!
//! ```rust
//! use permission_taxonomy::{PermissionGroup, PermissionStatus, RequestCode};
//!
//! let group = PermissionGroup::try_from(13).unwrap();
//! assert_eq!(group, PermissionGroup::ManageExternalStorage);
//! assert!(group.is_settings_intent());
//! assert_eq!(RequestCode::for_group(group).code(), 202);
//!
//! assert_eq!(PermissionStatus::Denied.code(), 1);
//! ```

pub mod error;
pub mod group;
pub mod request_code;
pub mod status;

// Re-export main types for convenience
pub use error::{TaxonomyError, TaxonomyResult};
pub use group::PermissionGroup;
pub use request_code::RequestCode;
pub use status::{PermissionStatus, ServiceStatus};
