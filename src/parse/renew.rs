//! Parser and classifier for `--renew` output

use chrono::Utc;

use crate::core::results::RenewResult;
use crate::parse::markers::{issue as path_markers, renew as markers};
use crate::parse::{first_value_after, has_error_markers};

/// Parse `--renew` output into a [`RenewResult`]
///
/// A renewal that acme.sh skips as not yet due is a successful no-op, even
/// though no paths are printed. Otherwise success needs the "Cert success"
/// marker plus an extracted certificate path, and any literal "error" or
/// "failed" in the output downgrades the verdict to failure.
pub fn parse_renew(output: &str) -> RenewResult {
    let mut result = RenewResult {
        is_success: false,
        raw_output: Some(output.to_string()),
        ..RenewResult::default()
    };

    if output.contains(markers::SKIP) {
        result.is_success = true;
        return result;
    }

    result.certificate_path = first_value_after(output, path_markers::CERT_FILE);
    result.key_path = first_value_after(output, path_markers::KEY_FILE);
    result.ca_path = first_value_after(output, path_markers::CA_FILE);
    result.full_chain_path = first_value_after(output, path_markers::FULL_CHAIN_FILE);

    if output.contains(markers::CERT_SUCCESS) && result.certificate_path.is_some() {
        result.is_success = true;
        result.renewed_at = Some(Utc::now());
    }
    if has_error_markers(output) {
        result.is_success = false;
        result.renewed_at = None;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const RENEWED_OUTPUT: &str = "\
[Mon] Renew: 'example.com'
[Mon] Verifying: example.com
[Mon] Cert success.
[Mon] Your cert is in: /root/.acme.sh/example.com/example.com.cer
[Mon] Your cert key is in: /root/.acme.sh/example.com/example.com.key
[Mon] The intermediate CA cert is in: /root/.acme.sh/example.com/ca.cer
[Mon] And the full chain certs is in: /root/.acme.sh/example.com/fullchain.cer";

    #[test]
    fn test_successful_renewal() {
        let result = parse_renew(RENEWED_OUTPUT);
        assert!(result.is_success);
        assert!(result.renewed_at.is_some());
        assert_eq!(
            result.certificate_path.as_deref(),
            Some("/root/.acme.sh/example.com/example.com.cer")
        );
        assert_eq!(
            result.full_chain_path.as_deref(),
            Some("/root/.acme.sh/example.com/fullchain.cer")
        );
    }

    #[test]
    fn test_skip_is_success_with_no_paths() {
        let result = parse_renew("[Mon] Skip, Next renewal time is: 2024-03-15");
        assert!(result.is_success);
        assert_eq!(result.certificate_path, None);
        assert_eq!(result.key_path, None);
        assert_eq!(result.ca_path, None);
        assert_eq!(result.full_chain_path, None);
        assert_eq!(result.renewed_at, None);
    }

    #[test]
    fn test_cert_success_without_path_is_failure() {
        let result = parse_renew("[Mon] Cert success.\n[Mon] but nothing was written");
        assert!(!result.is_success);
    }

    #[test]
    fn test_error_substring_overrides_success() {
        let output = format!("{}\n[Mon] Run reload error", RENEWED_OUTPUT);
        let result = parse_renew(&output);
        assert!(!result.is_success);
        assert_eq!(result.renewed_at, None);
        // Extraction still happened; only the verdict flipped
        assert!(result.certificate_path.is_some());
    }

    #[test]
    fn test_failed_substring_is_failure() {
        let result = parse_renew("[Mon] Renew: 'example.com'\n[Mon] Verify failed");
        assert!(!result.is_success);
    }
}
