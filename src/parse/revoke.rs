//! Parser and classifier for `--revoke` output

use chrono::Utc;

use crate::core::options::RevokeOptions;
use crate::core::results::RevokeResult;
use crate::parse::markers::revoke as markers;
use crate::parse::has_error_markers;

/// Parse `--revoke` output into a [`RevokeResult`]
///
/// Success needs a "Revoke success" or "Cert revoked" marker; literal
/// "error"/"failed" substrings downgrade the verdict and clear the
/// revocation timestamp. Domain, reason, and the ECC flag are echoed back
/// from the options so the result is self-describing.
pub fn parse_revoke(output: &str, options: &RevokeOptions) -> RevokeResult {
    let mut result = RevokeResult {
        is_success: false,
        raw_output: Some(output.to_string()),
        domain: Some(options.domain.clone()),
        reason: options.reason,
        was_ecc: options.ecc,
        ..RevokeResult::default()
    };

    if output.contains(markers::REVOKE_SUCCESS) || output.contains(markers::CERT_REVOKED) {
        result.is_success = true;
        result.revoked_at = Some(Utc::now());
    }
    if has_error_markers(output) {
        result.is_success = false;
        result.revoked_at = None;
    }

    result.certificate_thumbprint = extract_thumbprint(output);
    result
}

/// Hex thumbprint following the (case-insensitive) thumbprint marker
fn extract_thumbprint(output: &str) -> Option<String> {
    for line in output.lines() {
        let lower = line.to_ascii_lowercase();
        if let Some(idx) = lower.find(markers::THUMBPRINT) {
            let value: String = line[idx + markers::THUMBPRINT.len()..]
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_hexdigit())
                .collect();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::revoke_reason::RevokeReason;

    fn options() -> RevokeOptions {
        RevokeOptions::new("example.com")
            .ecc(true)
            .reason(RevokeReason::KeyCompromise)
    }

    #[test]
    fn test_revoke_success_marker() {
        let result = parse_revoke("[Mon] Revoke success!", &options());
        assert!(result.is_success);
        assert!(result.revoked_at.is_some());
        assert_eq!(result.domain.as_deref(), Some("example.com"));
        assert_eq!(result.reason, Some(RevokeReason::KeyCompromise));
        assert!(result.was_ecc);
    }

    #[test]
    fn test_cert_revoked_marker() {
        let result = parse_revoke("[Mon] Cert revoked.", &options());
        assert!(result.is_success);
    }

    #[test]
    fn test_error_clears_timestamp() {
        let result = parse_revoke("[Mon] Revoke success!\n[Mon] cleanup error", &options());
        assert!(!result.is_success);
        assert_eq!(result.revoked_at, None);
    }

    #[test]
    fn test_no_marker_is_failure() {
        let result = parse_revoke("[Mon] nothing conclusive", &options());
        assert!(!result.is_success);
        assert_eq!(result.revoked_at, None);
    }

    #[test]
    fn test_thumbprint_extraction_case_insensitive() {
        let output = "[Mon] Cert revoked.\n[Mon] CERTIFICATE THUMBPRINT: A1B2C3D4E5F6";
        let result = parse_revoke(output, &options());
        assert_eq!(result.certificate_thumbprint.as_deref(), Some("A1B2C3D4E5F6"));
    }

    #[test]
    fn test_thumbprint_stops_at_non_hex() {
        let output = "Certificate thumbprint: ABC123 (sha1)";
        let result = parse_revoke(output, &options());
        assert_eq!(result.certificate_thumbprint.as_deref(), Some("ABC123"));
    }
}
