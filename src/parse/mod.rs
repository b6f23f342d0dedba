//! Output parsing and success classification
//!
//! acme.sh speaks three dialects: a two-or-more-space-delimited table
//! (`--list`), a `key=value` dump (`--info`), and free-form log lines with
//! fixed marker phrases (everything else). Each operation gets one parser
//! that extracts every recognizable field into its result record and decides
//! the success flag from the same text.
//!
//! Parsing is line-oriented and tolerant: unmatched lines are ignored and
//! fields default to absent instead of raising. The classifiers deliberately
//! do not trust the exit code alone; a not-yet-due renewal exits cleanly and
//! must count as a successful no-op, while an issuance that printed only some
//! of its file paths must not count as success at all.

pub mod info;
pub mod install;
pub mod issue;
pub mod list;
pub mod markers;
pub mod remove;
pub mod renew;
pub mod renew_all;
pub mod revoke;

pub use info::parse_info;
pub use install::parse_install_cert;
pub use issue::parse_issue;
pub use list::parse_list;
pub use remove::parse_remove;
pub use renew::parse_renew;
pub use renew_all::parse_renew_all;
pub use revoke::parse_revoke;

/// Remainder of `line` after `marker`, trimmed, if the marker occurs in it
pub(crate) fn value_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker)
        .map(|idx| line[idx + marker.len()..].trim())
}

/// Value anchored by `marker` on the first line that carries one
///
/// A marker line with nothing after it does not count as a match; the scan
/// keeps going until a line yields a non-empty value.
pub(crate) fn first_value_after(output: &str, marker: &str) -> Option<String> {
    output.lines().find_map(|line| {
        value_after(line, marker)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    })
}

/// Whether the text contains either generic error substring
pub(crate) fn has_error_markers(output: &str) -> bool {
    output.contains(markers::common::ERROR) || output.contains(markers::common::FAILED)
}
