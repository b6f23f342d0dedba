use serde::{Deserialize, Serialize};

/// Reason for certificate revocation, per RFC 5280
///
/// Passed to acme.sh as the numeric code following `--revoke-reason`.
/// Value 7 is unassigned in the standard and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevokeReason {
    /// No reason specified (0)
    Unspecified = 0,
    /// The subject's private key is suspected to be compromised (1)
    KeyCompromise = 1,
    /// The CA's private key is suspected to be compromised (2)
    CaCompromise = 2,
    /// The subject's affiliation has changed (3)
    AffiliationChanged = 3,
    /// The certificate has been superseded by a new one (4)
    Superseded = 4,
    /// The certificate is no longer needed for its original purpose (5)
    CessationOfOperation = 5,
    /// The certificate should be temporarily suspended (6)
    CertificateHold = 6,
    /// Request to remove the certificate from the CRL (8)
    RemoveFromCrl = 8,
    /// The privileges granted to the subject have been withdrawn (9)
    PrivilegeWithdrawn = 9,
    /// The attribute-authority certificate has been compromised (10)
    AaCompromise = 10,
}

impl RevokeReason {
    /// The numeric code acme.sh expects after `--revoke-reason`
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for RevokeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_rfc_5280() {
        assert_eq!(RevokeReason::Unspecified.code(), 0);
        assert_eq!(RevokeReason::KeyCompromise.code(), 1);
        assert_eq!(RevokeReason::CertificateHold.code(), 6);
        // 7 is skipped by the standard
        assert_eq!(RevokeReason::RemoveFromCrl.code(), 8);
        assert_eq!(RevokeReason::PrivilegeWithdrawn.code(), 9);
        assert_eq!(RevokeReason::AaCompromise.code(), 10);
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(RevokeReason::Superseded.to_string(), "4");
    }
}
