//! Marker phrases recognized in acme.sh output
//!
//! acme.sh has no machine-readable protocol; these literal phrases are the
//! wire format. They are grouped per operation so an upstream wording change
//! touches exactly one table. Every phrase must be reproduced verbatim.

/// Markers for `--issue` output
pub mod issue {
    pub const CERT_FILE: &str = "Your cert is in:";
    pub const KEY_FILE: &str = "Your cert key is in:";
    pub const CA_FILE: &str = "The intermediate CA cert is in:";
    pub const FULL_CHAIN_FILE: &str = "And the full chain certs is in:";
}

/// Markers for `--renew` output
///
/// Path lines use the same phrases as issuance.
pub mod renew {
    pub const SKIP: &str = "Skip, Next renewal time is";
    pub const CERT_SUCCESS: &str = "Cert success";
}

/// Markers for `--renew-all` output
pub mod renew_all {
    /// Opens a per-domain section; the domain name follows in single quotes
    pub const PROCESSING: &str = "Renew: '";
    pub const SKIP: &str = "Skip, Next renewal time is:";
    pub const CERT_SUCCESS: &str = "Cert success";
    /// First of two failure phrasings acme.sh uses
    pub const RENEW_ERROR: &str = "Renew error for";
    /// Second failure phrasing
    pub const ERROR_RENEW: &str = "Error renew";
}

/// Markers for `--install-cert` output
pub mod install {
    pub const CERT_TO: &str = "Installing cert to:";
    pub const KEY_TO: &str = "Installing key to:";
    pub const CA_TO: &str = "Installing CA to:";
    pub const FULL_CHAIN_TO: &str = "Installing full chain to:";
    pub const RUN_RELOAD: &str = "[Info] Run reload cmd:";
    pub const RELOAD_SUCCESS: &str = "[Info] Reload success";
    pub const COMPLETED: &str = "Certificate installation completed";
}

/// Markers for `--revoke` output
pub mod revoke {
    pub const REVOKE_SUCCESS: &str = "Revoke success";
    pub const CERT_REVOKED: &str = "Cert revoked";
    /// Matched case-insensitively; the value is an uppercase hex string
    pub const THUMBPRINT: &str = "certificate thumbprint:";
}

/// Markers for `--remove` output
pub mod remove {
    /// Follows the domain name, quoted or bare
    pub const REMOVED: &str = "has been removed";
    pub const FILES_IN: &str = "The key and cert files are in";
    pub const ECC_HINT: &str = "seems to already have an ECC cert";
}

/// Recognized column names in the `--list` table header
pub mod list {
    pub const MAIN_DOMAIN: &str = "Main_Domain";
    pub const KEY_LENGTH: &str = "KeyLength";
    pub const SAN_DOMAINS: &str = "SAN_Domains";
    pub const CA: &str = "CA";
    pub const CREATED: &str = "Created";
    pub const RENEW: &str = "Renew";
}

/// Recognized keys in the `--info` key=value dump
pub mod info {
    pub const DOMAIN_CONF: &str = "DOMAIN_CONF";
    pub const DOMAIN: &str = "Le_Domain";
    pub const ALT: &str = "Le_Alt";
    pub const WEBROOT: &str = "Le_Webroot";
    pub const PRE_HOOK: &str = "Le_PreHook";
    pub const POST_HOOK: &str = "Le_PostHook";
    pub const RENEW_HOOK: &str = "Le_RenewHook";
    pub const API: &str = "Le_API";
    pub const KEYLENGTH: &str = "Le_Keylength";
    pub const ORDER_FINALIZE: &str = "Le_OrderFinalize";
    pub const LINK_ORDER: &str = "Le_LinkOrder";
    pub const LINK_CERT: &str = "Le_LinkCert";
    pub const CERT_CREATE_TIME: &str = "Le_CertCreateTime";
    pub const CERT_CREATE_TIME_STR: &str = "Le_CertCreateTimeStr";
    pub const NEXT_RENEW_TIME: &str = "Le_NextRenewTime";
    pub const NEXT_RENEW_TIME_STR: &str = "Le_NextRenewTimeStr";
}

/// Generic error substrings checked by several classifiers
pub mod common {
    pub const ERROR: &str = "error";
    pub const FAILED: &str = "failed";
    pub const ERROR_CAPITALIZED: &str = "Error";
}
