//! Platform permission gateway.
//!
//! The host side of the resolver: whatever talks to the operating system
//! implements [`PlatformGateway`]. The resolver never issues a request itself;
//! it only asks the gateway for the platform version and for rationale hints.

use permission_taxonomy::RequestCode;

/// Access to the operating system's permission machinery.
///
/// Implementations must be called on whatever thread the platform demands
/// (usually the main thread); the resolver adds no threading requirement of
/// its own.
pub trait PlatformGateway {
    /// The running platform's version number (e.g. Android SDK level).
    fn current_platform_version(&self) -> u32;

    /// Whether an explanatory prompt should precede a repeat request
    /// for `name`.
    fn should_show_rationale(&self, name: &str) -> bool;

    /// Show the platform grant dialog for `names`.
    ///
    /// Results arrive asynchronously through the host's callback carrying
    /// `(request_code, names, grant_results)`.
    fn request_permissions(&self, names: &[&str], request_code: RequestCode);
}
