//! # Grant Results
//!
//! Maps raw platform grant outcomes to abstract permission statuses.

use std::collections::HashMap;

use permission_taxonomy::{PermissionGroup, PermissionStatus};

use crate::manifest::classify_platform_name;

/// Platform outcome for a granted identifier.
pub const GRANT_RESULT_GRANTED: i32 = 0;
/// Platform outcome for a denied identifier.
pub const GRANT_RESULT_DENIED: i32 = -1;

/// Map a platform grant outcome to a status.
///
/// Only [`GRANT_RESULT_GRANTED`] maps to `Granted`. Every other value,
/// including out-of-range ones, collapses to `Denied`; `Restricted` is never
/// produced here.
pub fn result_to_status(grant_result: i32) -> PermissionStatus {
    if grant_result == GRANT_RESULT_GRANTED {
        PermissionStatus::Granted
    } else {
        PermissionStatus::Denied
    }
}

/// Fold a platform request-result callback into one status per group.
///
/// Each reported identifier is classified and paired with its outcome.
/// Identifiers classified as `Unknown` are skipped. A group is `Granted`
/// only if every identifier reported for it was granted.
///
/// # Arguments
///
/// * `names` - Identifiers reported by the callback, in request order
/// * `grant_results` - Outcomes, index-aligned with `names`
///
/// # Example
///
/// ```
/// use permission_resolver::grant::{collect_statuses, GRANT_RESULT_DENIED, GRANT_RESULT_GRANTED};
/// use permission_resolver::manifest::{ACCESS_COARSE_LOCATION, ACCESS_FINE_LOCATION};
/// use permission_taxonomy::{PermissionGroup, PermissionStatus};
///
/// let statuses = collect_statuses(
///     &[ACCESS_FINE_LOCATION, ACCESS_COARSE_LOCATION],
///     &[GRANT_RESULT_DENIED, GRANT_RESULT_GRANTED],
/// );
/// assert_eq!(statuses[&PermissionGroup::Location], PermissionStatus::Denied);
/// ```
pub fn collect_statuses<S: AsRef<str>>(
    names: &[S],
    grant_results: &[i32],
) -> HashMap<PermissionGroup, PermissionStatus> {
    if names.len() != grant_results.len() {
        tracing::warn!(
            target: "permission_handler",
            names = names.len(),
            results = grant_results.len(),
            "Mismatched request results; extra entries ignored"
        );
    }

    let mut statuses = HashMap::new();
    for (name, &result) in names.iter().zip(grant_results) {
        let name: &str = name.as_ref();
        let group = classify_platform_name(name);
        if group == PermissionGroup::Unknown {
            tracing::debug!(
                target: "permission_handler",
                name,
                "Skipping unrecognized permission in results"
            );
            continue;
        }

        let status = result_to_status(result);
        statuses
            .entry(group)
            .and_modify(|current: &mut PermissionStatus| {
                if !status.is_granted() {
                    *current = status;
                }
            })
            .or_insert(status);
    }

    statuses
}
