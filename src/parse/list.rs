//! Tabular parser for `--list` output
//!
//! The listing is a header line plus one row per certificate. Columns are
//! separated by runs of two or more whitespace characters; single spaces can
//! occur inside values (SAN lists, timestamps), so splitting on single
//! whitespace would shred them.

use crate::core::results::{CertificateInfo, ListResult};
use crate::parse::markers::list as columns;

/// Parse `--list` output into a [`ListResult`]
///
/// Header names are matched exactly against the recognized set; unknown
/// columns are ignored. Rows with fewer value tokens than headers are
/// tolerated, leaving the trailing fields absent.
pub fn parse_list(output: &str) -> ListResult {
    let mut result = ListResult {
        is_success: true,
        raw_output: Some(output.to_string()),
        ..ListResult::default()
    };

    let mut lines = output.lines();
    let headers = match lines.next() {
        Some(header_line) => split_columns(header_line),
        None => return result,
    };

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let values = split_columns(line);
        let mut cert = CertificateInfo::default();

        for (header, value) in headers.iter().zip(values) {
            let field = match header.as_str() {
                columns::MAIN_DOMAIN => &mut cert.main_domain,
                columns::KEY_LENGTH => &mut cert.key_length,
                columns::SAN_DOMAINS => &mut cert.san_domains,
                columns::CA => &mut cert.ca,
                columns::CREATED => &mut cert.created,
                columns::RENEW => &mut cert.renew,
                _ => continue,
            };
            *field = Some(value);
        }

        result.certificates.push(cert);
    }

    result
}

/// Split a line on runs of two or more whitespace characters, trimming each
/// token and stripping surrounding quote characters
fn split_columns(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut whitespace_run = String::new();

    for ch in line.chars() {
        if ch.is_whitespace() {
            whitespace_run.push(ch);
            continue;
        }
        if whitespace_run.chars().count() >= 2 && !current.is_empty() {
            tokens.push(current.clone());
            current.clear();
        } else {
            current.push_str(&whitespace_run);
        }
        whitespace_run.clear();
        current.push(ch);
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
        .into_iter()
        .map(|t| t.trim().trim_matches('"').to_string())
        .collect()
}
