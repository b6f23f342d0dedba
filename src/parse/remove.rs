//! Parser and classifier for `--remove` output

use chrono::Utc;

use crate::core::options::RemoveOptions;
use crate::core::results::RemoveResult;
use crate::parse::markers::{common, remove as markers};
use crate::parse::first_value_after;

/// Parse `--remove` output into a [`RemoveResult`]
///
/// Success requires the exact confirmation phrase `<domain> has been
/// removed`, with or without quotes around the domain. Removal leaves the
/// key and cert files on disk; the directory acme.sh names is captured in
/// `certificate_path`. The ECC flag is echoed from the options but flips to
/// true when the output says the domain already had an ECC cert.
pub fn parse_remove(output: &str, options: &RemoveOptions) -> RemoveResult {
    let mut result = RemoveResult {
        is_success: false,
        raw_output: Some(output.to_string()),
        domain: Some(options.domain.clone()),
        was_ecc: options.ecc,
        ..RemoveResult::default()
    };

    let quoted = format!("'{}' {}.", options.domain, markers::REMOVED);
    let bare = format!("{} {}", options.domain, markers::REMOVED);

    if output.contains(&quoted) || output.contains(&bare) {
        result.is_success = true;
        result.removed_at = Some(Utc::now());
        result.certificate_path = first_value_after(output, markers::FILES_IN);
    } else if output.contains(common::ERROR)
        || output.contains(common::FAILED)
        || output.contains(common::ERROR_CAPITALIZED)
    {
        result.is_success = false;
        result.removed_at = None;
    }

    if output.contains(markers::ECC_HINT) {
        result.was_ecc = true;
    }

    result
}
