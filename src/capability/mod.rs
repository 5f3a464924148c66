//! Delegated capability endpoints.
//!
//! Async tool categories don't run anything locally: they post a structured
//! request to a remote function and await its structured response. The
//! function names below are the deployed endpoints of the managed backend.

pub mod http;
pub mod traits;

pub use http::HttpCapability;
pub use traits::Capability;

pub const FN_PASSWORD_GENERATOR: &str = "security-password-generator";
pub const FN_BREACH_CHECKER: &str = "security-breach-checker";
pub const FN_HEADER_ANALYZER: &str = "security-header-analyzer";
pub const FN_SSL_CHECKER: &str = "security-ssl-checker";
pub const FN_VULNERABILITY_SCANNER: &str = "security-vulnerability-scanner";
pub const FN_PORT_SCANNER: &str = "security-port-scanner";
