//! Aggregate parser for `--renew-all` output
//!
//! A renew-all run interleaves per-domain sections. The scan keeps a cursor
//! for the domain currently being processed, set by the `Renew: '<name>'`
//! marker and closed by whichever outcome marker arrives first: skip,
//! success, or one of the two failure phrasings. Outcome markers with no
//! open domain are ignored.

use chrono::Utc;

use crate::core::results::RenewAllResult;
use crate::parse::markers::renew_all as markers;
use crate::parse::value_after;

/// Parse `--renew-all` output into a [`RenewAllResult`]
///
/// The overall verdict is success iff no domain failed; an empty run with no
/// markers at all is therefore a success. The per-domain lists fill in
/// regardless of the final verdict.
pub fn parse_renew_all(output: &str) -> RenewAllResult {
    let mut result = RenewAllResult {
        is_success: true,
        raw_output: Some(output.to_string()),
        completed_at: Some(Utc::now()),
        ..RenewAllResult::default()
    };

    let mut current_domain: Option<String> = None;

    for line in output.lines() {
        if let Some(rest) = value_after(line, markers::PROCESSING) {
            if let Some(end) = rest.find('\'') {
                current_domain = Some(rest[..end].to_string());
                result.total_certificates += 1;
                continue;
            }
        }

        if line.contains(markers::SKIP) {
            if let Some(domain) = current_domain.take() {
                result.skipped_domains.push(domain);
                result.skipped_renewals += 1;
            }
            continue;
        }

        if line.contains(markers::CERT_SUCCESS) {
            if let Some(domain) = current_domain.take() {
                result.renewed_domains.push(domain);
                result.successful_renewals += 1;
            }
            continue;
        }

        if line.contains(markers::RENEW_ERROR) || line.contains(markers::ERROR_RENEW) {
            if let Some(domain) = current_domain.take() {
                if !result.failed_domains.contains(&domain) {
                    result.failed_domains.push(domain);
                    result.failed_renewals += 1;
                }
            }
            continue;
        }
    }

    result.is_success = result.failed_renewals == 0;
    result
}
