//! Per-operation result records
//!
//! Every operation produces one of these records, sharing a common base
//! shape: `is_success`, the full captured stdout in `raw_output`, and the
//! captured stderr lines in `error_output` when the process itself failed.
//! Operation-specific fields are populated only on success, with one
//! exception: the per-domain outcome lists on [`RenewAllResult`] fill in
//! progressively as the output is scanned, regardless of the overall verdict.
//!
//! Results are produced once per call and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::revoke_reason::RevokeReason;

/// One row of the `--list` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateInfo {
    /// Main domain of the certificate
    pub main_domain: Option<String>,
    /// Key length, as acme.sh prints it (e.g. `"4096"`, `"ec-256"`)
    pub key_length: Option<String>,
    /// SAN domains covered by the certificate
    pub san_domains: Option<String>,
    /// Issuing CA name
    pub ca: Option<String>,
    /// Creation timestamp, verbatim from the listing
    pub created: Option<String>,
    /// Next renewal timestamp, verbatim from the listing
    pub renew: Option<String>,
}

/// Result of `--list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Parsed certificate rows, in the order they appear in the listing
    pub certificates: Vec<CertificateInfo>,
}

/// Result of `--issue`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Path of the issued certificate
    pub certificate_file: Option<String>,
    /// Path of the private key
    pub key_file: Option<String>,
    /// Path of the intermediate CA certificate
    pub ca_file: Option<String>,
    /// Path of the full chain
    pub full_chain_file: Option<String>,
}

/// Result of `--renew`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenewResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Path of the renewed certificate
    pub certificate_path: Option<String>,
    /// Path of the private key
    pub key_path: Option<String>,
    /// Path of the intermediate CA certificate
    pub ca_path: Option<String>,
    /// Path of the full chain
    pub full_chain_path: Option<String>,
    /// When the renewal completed; unset for skipped or failed renewals
    pub renewed_at: Option<DateTime<Utc>>,
}

/// Result of `--renew-all`
///
/// The per-domain lists are populated progressively while the output is
/// scanned, so a partially failed run still reports which domains renewed,
/// skipped, or failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenewAllResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Number of certificates the run looked at
    pub total_certificates: usize,
    /// Number of successful renewals
    pub successful_renewals: usize,
    /// Number of failed renewals
    pub failed_renewals: usize,
    /// Number of renewals skipped as not yet due
    pub skipped_renewals: usize,
    /// Domains that renewed successfully
    pub renewed_domains: Vec<String>,
    /// Domains whose renewal failed, deduplicated
    pub failed_domains: Vec<String>,
    /// Domains skipped as not yet due
    pub skipped_domains: Vec<String>,
    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,
}

/// Result of `--install-cert`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallCertResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Where the certificate was installed
    pub installed_cert_file: Option<String>,
    /// Where the private key was installed
    pub installed_key_file: Option<String>,
    /// Where the intermediate CA certificate was installed
    pub installed_ca_file: Option<String>,
    /// Where the full chain was installed
    pub installed_full_chain_file: Option<String>,
    /// Whether the reload command was run
    pub reload_command_executed: bool,
    /// Output segment of the reload command, when one ran
    pub reload_command_output: Option<String>,
    /// When the installation completed
    pub installed_at: Option<DateTime<Utc>>,
}

/// Result of `--revoke`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevokeResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Domain the revocation was requested for, echoed from the options
    pub domain: Option<String>,
    /// Revocation reason, echoed from the options
    pub reason: Option<RevokeReason>,
    /// Whether the ECC variant was targeted, echoed from the options
    pub was_ecc: bool,
    /// Thumbprint of the revoked certificate, when acme.sh reports one
    pub certificate_thumbprint: Option<String>,
    /// When the revocation completed
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Result of `--remove`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Domain the removal was requested for, echoed from the options
    pub domain: Option<String>,
    /// Whether the ECC variant was targeted; flipped to true when acme.sh
    /// reports the domain already had an ECC cert
    pub was_ecc: bool,
    /// Directory where the key and cert files remain after removal
    pub certificate_path: Option<String>,
    /// When the removal completed
    pub removed_at: Option<DateTime<Utc>>,
}

/// Result of `--info`
///
/// Field names mirror the `key=value` dump acme.sh prints from the domain
/// configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfoResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Path of the domain configuration file (`DOMAIN_CONF`)
    pub domain_config_path: Option<String>,
    /// Main domain (`Le_Domain`)
    pub domain: Option<String>,
    /// Alternative names (`Le_Alt`)
    pub alt_names: Option<String>,
    /// Webroot used for validation (`Le_Webroot`)
    pub webroot: Option<String>,
    /// Pre hook command (`Le_PreHook`)
    pub pre_hook: Option<String>,
    /// Post hook command (`Le_PostHook`)
    pub post_hook: Option<String>,
    /// Renew hook command (`Le_RenewHook`)
    pub renew_hook: Option<String>,
    /// ACME API endpoint (`Le_API`)
    pub api_endpoint: Option<String>,
    /// Key length (`Le_Keylength`)
    pub key_length: Option<String>,
    /// Order finalize URL (`Le_OrderFinalize`)
    pub order_finalize_url: Option<String>,
    /// Order link URL (`Le_LinkOrder`)
    pub link_order_url: Option<String>,
    /// Certificate link URL (`Le_LinkCert`)
    pub link_cert_url: Option<String>,
    /// Creation time as a Unix timestamp (`Le_CertCreateTime`)
    pub cert_create_time: Option<i64>,
    /// Creation time, human-readable (`Le_CertCreateTimeStr`)
    pub cert_create_time_str: Option<String>,
    /// Next renewal time as a Unix timestamp (`Le_NextRenewTime`)
    pub next_renew_time: Option<i64>,
    /// Next renewal time, human-readable (`Le_NextRenewTimeStr`)
    pub next_renew_time_str: Option<String>,
}

/// Result of the composed get-certificate operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetCertificateResult {
    pub is_success: bool,
    pub raw_output: Option<String>,
    pub error_output: Option<Vec<String>>,
    /// Derived path of the certificate file
    pub certificate_path: Option<String>,
    /// Certificate contents, when the file exists
    pub certificate: Option<String>,
    /// Derived path of the private key file
    pub key_path: Option<String>,
    /// Private key contents, when requested and present
    pub private_key: Option<String>,
    /// Derived path of the full chain file
    pub full_chain_path: Option<String>,
    /// Full chain contents, when requested and present
    pub full_chain: Option<String>,
    /// Derived path of the CA bundle file
    pub ca_path: Option<String>,
    /// CA bundle contents, when requested and present
    pub ca_bundle: Option<String>,
}

macro_rules! impl_process_failure {
    ($($ty:ty),+ $(,)?) => {
        $(impl $ty {
            /// Failure result for a non-zero process exit, carrying the
            /// captured stderr lines
            pub(crate) fn process_failure(stderr: Vec<String>) -> Self {
                Self {
                    is_success: false,
                    error_output: Some(stderr),
                    ..Self::default()
                }
            }
        })+
    };
}

impl_process_failure!(
    ListResult,
    IssueResult,
    RenewResult,
    RenewAllResult,
    InstallCertResult,
    RevokeResult,
    RemoveResult,
    InfoResult,
);
