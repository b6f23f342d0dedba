//! Parser and classifier for `--install-cert` output

use chrono::Utc;

use crate::core::results::InstallCertResult;
use crate::parse::markers::install as markers;
use crate::parse::{first_value_after, has_error_markers};

/// Parse `--install-cert` output into an [`InstallCertResult`]
///
/// Success needs a completion or reload-success marker, or at least one
/// installed file path; literal "error"/"failed" substrings downgrade the
/// verdict to failure. When a reload command ran, its output segment is
/// captured from the "Run reload cmd:" marker through "Reload success" when
/// present, else to the end of the text.
pub fn parse_install_cert(output: &str) -> InstallCertResult {
    let mut result = InstallCertResult {
        is_success: false,
        raw_output: Some(output.to_string()),
        ..InstallCertResult::default()
    };

    result.installed_cert_file = first_value_after(output, markers::CERT_TO);
    result.installed_key_file = first_value_after(output, markers::KEY_TO);
    result.installed_ca_file = first_value_after(output, markers::CA_TO);
    result.installed_full_chain_file = first_value_after(output, markers::FULL_CHAIN_TO);

    if let Some(start) = output.find(markers::RUN_RELOAD) {
        result.reload_command_executed = true;
        let segment = match output[start..].find(markers::RELOAD_SUCCESS) {
            Some(rel) => &output[start..start + rel + markers::RELOAD_SUCCESS.len()],
            None => &output[start..],
        };
        result.reload_command_output = Some(segment.trim().to_string());
    }

    let any_path_installed = result.installed_cert_file.is_some()
        || result.installed_key_file.is_some()
        || result.installed_ca_file.is_some()
        || result.installed_full_chain_file.is_some();

    if output.contains(markers::COMPLETED)
        || output.contains(markers::RELOAD_SUCCESS)
        || any_path_installed
    {
        result.is_success = true;
    }
    if has_error_markers(output) {
        result.is_success = false;
    }
    if result.is_success {
        result.installed_at = Some(Utc::now());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTALL_OUTPUT: &str = "\
[Mon] Installing cert to: /etc/nginx/ssl/example.com.cer
[Mon] Installing key to: /etc/nginx/ssl/example.com.key
[Mon] Installing CA to: /etc/nginx/ssl/ca.cer
[Mon] Installing full chain to: /etc/nginx/ssl/fullchain.cer
[Mon] [Info] Run reload cmd: systemctl reload nginx
[Mon] [Info] Reload success";

    #[test]
    fn test_all_destinations_extracted() {
        let result = parse_install_cert(INSTALL_OUTPUT);
        assert!(result.is_success);
        assert!(result.installed_at.is_some());
        assert_eq!(
            result.installed_cert_file.as_deref(),
            Some("/etc/nginx/ssl/example.com.cer")
        );
        assert_eq!(
            result.installed_key_file.as_deref(),
            Some("/etc/nginx/ssl/example.com.key")
        );
        assert_eq!(result.installed_ca_file.as_deref(), Some("/etc/nginx/ssl/ca.cer"));
        assert_eq!(
            result.installed_full_chain_file.as_deref(),
            Some("/etc/nginx/ssl/fullchain.cer")
        );
    }

    #[test]
    fn test_reload_segment_captured() {
        let result = parse_install_cert(INSTALL_OUTPUT);
        assert!(result.reload_command_executed);
        let segment = result.reload_command_output.unwrap();
        assert!(segment.starts_with("[Info] Run reload cmd: systemctl reload nginx"));
        assert!(segment.ends_with("[Info] Reload success"));
    }

    #[test]
    fn test_reload_segment_without_success_marker_runs_to_end() {
        let output = "[Mon] Installing cert to: /etc/ssl/a.cer\n[Info] Run reload cmd: svc reload\ntrailing line";
        let result = parse_install_cert(output);
        assert!(result.reload_command_executed);
        assert_eq!(
            result.reload_command_output.as_deref(),
            Some("[Info] Run reload cmd: svc reload\ntrailing line")
        );
    }

    #[test]
    fn test_single_path_is_success() {
        let result = parse_install_cert("[Mon] Installing key to: /etc/ssl/k.key");
        assert!(result.is_success);
        assert!(!result.reload_command_executed);
    }

    #[test]
    fn test_no_markers_is_failure() {
        let result = parse_install_cert("[Mon] nothing relevant here");
        assert!(!result.is_success);
        assert_eq!(result.installed_at, None);
    }

    #[test]
    fn test_error_substring_overrides() {
        let output = format!("{}\n[Mon] reload failed", INSTALL_OUTPUT);
        let result = parse_install_cert(&output);
        assert!(!result.is_success);
        assert_eq!(result.installed_at, None);
    }
}
