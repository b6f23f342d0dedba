//! Core types for the acme.sh SDK
//!
//! This module contains the data model shared by every operation:
//! - Configuration ([`Config`]) and its builder
//! - The crate error type ([`Error`]) and [`Result`] alias
//! - Per-operation options records ([`options`])
//! - Per-operation result records ([`results`])
//! - The RFC 5280 revocation-reason enumeration ([`RevokeReason`])

pub mod config;
pub mod error;
pub mod options;
pub mod results;
pub mod revoke_reason;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use options::{
    GetCertificateOptions, InfoOptions, InstallCertOptions, IssueOptions, ListOptions,
    RemoveOptions, RenewAllOptions, RenewOptions, RevokeOptions,
};
pub use results::{
    CertificateInfo, GetCertificateResult, InfoResult, InstallCertResult, IssueResult, ListResult,
    RemoveResult, RenewAllResult, RenewResult, RevokeResult,
};
pub use revoke_reason::RevokeReason;
