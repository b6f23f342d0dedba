//! # acmesh-rs
//!
//! Type-safe, async Rust SDK for the [acme.sh](https://github.com/acmesh-official/acme.sh)
//! certificate manager.
//!
//! acme.sh is a shell program with no machine-readable protocol: it talks in
//! free-form log lines, tables, and `key=value` dumps, and its exit code is
//! not always a trustworthy signal of outcome. This crate drives it as a
//! subprocess and translates that output into typed results:
//!
//! - **Argument building**: each operation's options record maps to an
//!   ordered argument vector ([`runtime::args`]).
//! - **Output parsing**: per-operation extraction of file paths, timestamps,
//!   counts, and certificate metadata from the captured text ([`parse`]).
//! - **Success classification**: per-operation heuristics that decide the
//!   success flag from textual markers, independent of the exit code.
//!
//! # Examples
//!
//! ```rust,no_run
//! use acmesh_rs::{AcmeClient, Config, IssueOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> acmesh_rs::Result<()> {
//! let client = AcmeClient::new(Config::default());
//!
//! let options = IssueOptions::new(["example.com", "www.example.com"])
//!     .webroot("/var/www/html")
//!     .staging(true);
//!
//! let result = client.issue(&options).await?;
//! if result.is_success {
//!     println!("cert: {:?}", result.certificate_file);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every operation is an independent, stateless request/response call. The
//! engine performs no retries and no cross-call coordination; concurrent
//! renewals are the caller's choice (and risk, since the underlying
//! certificate store is a shared external resource).

pub mod core;
pub mod parse;
pub mod runtime;

pub use crate::core::{
    CertificateInfo, Config, ConfigBuilder, Error, GetCertificateOptions, GetCertificateResult,
    InfoOptions, InfoResult, InstallCertOptions, InstallCertResult, IssueOptions, IssueResult,
    ListOptions, ListResult, RemoveOptions, RemoveResult, RenewAllOptions, RenewAllResult,
    RenewOptions, RenewResult, Result, RevokeOptions, RevokeReason, RevokeResult,
};
pub use crate::runtime::client::AcmeClient;
pub use crate::runtime::process::{CommandRunner, TokioRunner};

/// Crate version, from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
