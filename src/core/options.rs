//! Per-operation option records
//!
//! Each acme.sh operation takes a plain options record. Fields map one-to-one
//! onto command-line tokens: booleans to the presence of a fixed flag, strings
//! to a flag/value pair that is omitted when unset. No validation happens
//! here beyond what the types express; acme.sh itself is the source of truth
//! for malformed domains or paths, surfaced via its stderr.

use crate::core::revoke_reason::RevokeReason;
use serde::{Deserialize, Serialize};

/// Options for listing managed certificates (`--list`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOptions {
    /// Emit the raw listing (`--raw`)
    pub raw: bool,
}

impl ListOptions {
    /// Create list options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the raw listing format
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }
}

/// Options for issuing a new certificate (`--issue`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueOptions {
    /// Domains to include, in order; the first becomes the main domain
    pub domains: Vec<String>,
    /// Webroot path for http-01 validation (`-w`)
    pub webroot: Option<String>,
    /// DNS provider hook name for dns-01 validation (`--dns`)
    pub dns_provider: Option<String>,
    /// Key length, always passed (`--keylength`); acme.sh accepts RSA bit
    /// sizes and `ec-256`-style curve names alike
    pub key_length: String,
    /// Use the staging CA (`--staging`)
    pub staging: bool,
    /// Custom ACME server URL (`--server`)
    pub server: Option<String>,
}

impl IssueOptions {
    /// Create issue options for the given domains, with a 4096-bit RSA key
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
            webroot: None,
            dns_provider: None,
            key_length: "4096".to_string(),
            staging: false,
            server: None,
        }
    }

    /// Set the webroot path for http-01 validation
    pub fn webroot(mut self, webroot: impl Into<String>) -> Self {
        self.webroot = Some(webroot.into());
        self
    }

    /// Set the DNS provider hook for dns-01 validation
    pub fn dns_provider(mut self, provider: impl Into<String>) -> Self {
        self.dns_provider = Some(provider.into());
        self
    }

    /// Set the key length (e.g. `"2048"`, `"4096"`, `"ec-256"`)
    pub fn key_length(mut self, key_length: impl Into<String>) -> Self {
        self.key_length = key_length.into();
        self
    }

    /// Use the staging CA
    pub fn staging(mut self, staging: bool) -> Self {
        self.staging = staging;
        self
    }

    /// Set a custom ACME server URL
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }
}

/// Options for renewing a single certificate (`--renew`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewOptions {
    /// Main domain of the certificate to renew
    pub domain: String,
    /// Renew even if not yet due (`--force`)
    pub force: bool,
    /// Operate on the ECC variant of the certificate (`--ecc`)
    pub ecc: bool,
    /// Custom ACME server URL (`--server`)
    pub server: Option<String>,
}

impl RenewOptions {
    /// Create renew options for the given domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            force: false,
            ecc: false,
            server: None,
        }
    }

    /// Renew even if not yet due
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Operate on the ECC certificate variant
    pub fn ecc(mut self, ecc: bool) -> Self {
        self.ecc = ecc;
        self
    }

    /// Set a custom ACME server URL
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }
}

/// Options for renewing every due certificate (`--renew-all`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenewAllOptions {
    /// Stop at the first renewal error instead of continuing
    /// (`--stop-renew-on-error`)
    pub stop_renew_on_error: bool,
    /// Custom ACME server URL (`--server`)
    pub server: Option<String>,
}

impl RenewAllOptions {
    /// Create renew-all options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop at the first renewal error
    pub fn stop_renew_on_error(mut self, stop: bool) -> Self {
        self.stop_renew_on_error = stop;
        self
    }

    /// Set a custom ACME server URL
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }
}

/// Options for installing certificate files (`--install-cert`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallCertOptions {
    /// Main domain of the certificate to install
    pub domain: String,
    /// Operate on the ECC variant (`--ecc`)
    pub ecc: bool,
    /// Destination for the certificate (`--cert-file`)
    pub cert_file: Option<String>,
    /// Destination for the private key (`--key-file`)
    pub key_file: Option<String>,
    /// Destination for the intermediate CA cert (`--ca-file`)
    pub ca_file: Option<String>,
    /// Destination for the full chain (`--fullchain-file`)
    pub fullchain_file: Option<String>,
    /// Command to run after installation, typically a service reload
    /// (`--reloadcmd`)
    pub reload_cmd: Option<String>,
}

impl InstallCertOptions {
    /// Create install options for the given domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ecc: false,
            cert_file: None,
            key_file: None,
            ca_file: None,
            fullchain_file: None,
            reload_cmd: None,
        }
    }

    /// Operate on the ECC certificate variant
    pub fn ecc(mut self, ecc: bool) -> Self {
        self.ecc = ecc;
        self
    }

    /// Set the certificate destination path
    pub fn cert_file(mut self, path: impl Into<String>) -> Self {
        self.cert_file = Some(path.into());
        self
    }

    /// Set the private key destination path
    pub fn key_file(mut self, path: impl Into<String>) -> Self {
        self.key_file = Some(path.into());
        self
    }

    /// Set the intermediate CA destination path
    pub fn ca_file(mut self, path: impl Into<String>) -> Self {
        self.ca_file = Some(path.into());
        self
    }

    /// Set the full chain destination path
    pub fn fullchain_file(mut self, path: impl Into<String>) -> Self {
        self.fullchain_file = Some(path.into());
        self
    }

    /// Set the post-install reload command
    pub fn reload_cmd(mut self, cmd: impl Into<String>) -> Self {
        self.reload_cmd = Some(cmd.into());
        self
    }
}

/// Options for revoking a certificate (`--revoke`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokeOptions {
    /// Main domain of the certificate to revoke
    pub domain: String,
    /// Operate on the ECC variant (`--ecc`)
    pub ecc: bool,
    /// Revocation reason code (`--revoke-reason`)
    pub reason: Option<RevokeReason>,
}

impl RevokeOptions {
    /// Create revoke options for the given domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ecc: false,
            reason: None,
        }
    }

    /// Operate on the ECC certificate variant
    pub fn ecc(mut self, ecc: bool) -> Self {
        self.ecc = ecc;
        self
    }

    /// Set the revocation reason
    pub fn reason(mut self, reason: RevokeReason) -> Self {
        self.reason = Some(reason);
        self
    }
}

/// Options for removing a certificate from acme.sh management (`--remove`)
///
/// Removal only stops renewals; the key and cert files stay on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveOptions {
    /// Main domain of the certificate to remove
    pub domain: String,
    /// Operate on the ECC variant (`--ecc`)
    pub ecc: bool,
}

impl RemoveOptions {
    /// Create remove options for the given domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ecc: false,
        }
    }

    /// Operate on the ECC certificate variant
    pub fn ecc(mut self, ecc: bool) -> Self {
        self.ecc = ecc;
        self
    }
}

/// Options for querying stored certificate metadata (`--info`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoOptions {
    /// Main domain of the certificate
    pub domain: String,
    /// Operate on the ECC variant (`--ecc`)
    pub ecc: bool,
}

impl InfoOptions {
    /// Create info options for the given domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ecc: false,
        }
    }

    /// Operate on the ECC certificate variant
    pub fn ecc(mut self, ecc: bool) -> Self {
        self.ecc = ecc;
        self
    }
}

/// Options for reading certificate files off disk
///
/// Backed by an `--info` call to locate the certificate directory; the
/// certificate itself is always read, the other files only when requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCertificateOptions {
    /// Main domain of the certificate
    pub domain: String,
    /// Operate on the ECC variant
    pub ecc: bool,
    /// Also read the private key
    pub include_key: bool,
    /// Also read the full chain
    pub include_full_chain: bool,
    /// Also read the CA bundle
    pub include_ca: bool,
}

impl GetCertificateOptions {
    /// Create get-certificate options for the given domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ecc: false,
            include_key: false,
            include_full_chain: false,
            include_ca: false,
        }
    }

    /// Operate on the ECC certificate variant
    pub fn ecc(mut self, ecc: bool) -> Self {
        self.ecc = ecc;
        self
    }

    /// Also read the private key
    pub fn include_key(mut self, include: bool) -> Self {
        self.include_key = include;
        self
    }

    /// Also read the full chain
    pub fn include_full_chain(mut self, include: bool) -> Self {
        self.include_full_chain = include;
        self
    }

    /// Also read the CA bundle
    pub fn include_ca(mut self, include: bool) -> Self {
        self.include_ca = include;
        self
    }
}
