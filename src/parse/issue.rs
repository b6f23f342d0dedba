//! Parser and classifier for `--issue` output

use crate::core::results::IssueResult;
use crate::parse::markers::issue as markers;
use crate::parse::first_value_after;

/// Parse `--issue` output into an [`IssueResult`]
///
/// Success requires all four file paths (cert, key, intermediate CA, full
/// chain) to be present in the output. acme.sh prints them together at the
/// end of a successful issuance; a partial set means the run did not finish,
/// whatever the exit code claimed.
pub fn parse_issue(output: &str) -> IssueResult {
    let mut result = IssueResult {
        is_success: false,
        raw_output: Some(output.to_string()),
        ..IssueResult::default()
    };

    result.certificate_file = first_value_after(output, markers::CERT_FILE);
    result.key_file = first_value_after(output, markers::KEY_FILE);
    result.ca_file = first_value_after(output, markers::CA_FILE);
    result.full_chain_file = first_value_after(output, markers::FULL_CHAIN_FILE);

    result.is_success = result.certificate_file.is_some()
        && result.key_file.is_some()
        && result.ca_file.is_some()
        && result.full_chain_file.is_some();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_OUTPUT: &str = "\
[Mon] Verifying: example.com
[Mon] Success
[Mon] Verify finished, beginning signing.
[Mon] Cert success.
[Mon] Your cert is in: /root/.acme.sh/example.com/example.com.cer
[Mon] Your cert key is in: /root/.acme.sh/example.com/example.com.key
[Mon] The intermediate CA cert is in: /root/.acme.sh/example.com/ca.cer
[Mon] And the full chain certs is in: /root/.acme.sh/example.com/fullchain.cer";

    #[test]
    fn test_all_four_paths_extracted() {
        let result = parse_issue(SUCCESS_OUTPUT);
        assert!(result.is_success);
        assert_eq!(
            result.certificate_file.as_deref(),
            Some("/root/.acme.sh/example.com/example.com.cer")
        );
        assert_eq!(
            result.key_file.as_deref(),
            Some("/root/.acme.sh/example.com/example.com.key")
        );
        assert_eq!(
            result.ca_file.as_deref(),
            Some("/root/.acme.sh/example.com/ca.cer")
        );
        assert_eq!(
            result.full_chain_file.as_deref(),
            Some("/root/.acme.sh/example.com/fullchain.cer")
        );
    }

    #[test]
    fn test_partial_extraction_is_failure() {
        // Only the cert line; the tool stopped before writing the rest
        let output = "[Mon] Processing example.com\nYour cert is in: /a/b.cer\n[Mon] More chatter";
        let result = parse_issue(output);
        assert!(!result.is_success);
        assert_eq!(result.certificate_file.as_deref(), Some("/a/b.cer"));
        assert_eq!(result.key_file, None);
        assert_eq!(result.ca_file, None);
        assert_eq!(result.full_chain_file, None);
    }

    #[test]
    fn test_no_paths_is_failure() {
        let result = parse_issue("[Mon] Verifying: example.com\n[Mon] Pending");
        assert!(!result.is_success);
        assert_eq!(result.certificate_file, None);
    }

    #[test]
    fn test_raw_output_preserved() {
        let result = parse_issue(SUCCESS_OUTPUT);
        assert_eq!(result.raw_output.as_deref(), Some(SUCCESS_OUTPUT));
    }
}
