//! Key=value parser for `--info` output
//!
//! `--info` dumps the domain configuration file: one `key=value` pair per
//! line, values often wrapped in single quotes. Recognized keys map onto
//! [`InfoResult`] fields; everything else is ignored.

use crate::core::results::InfoResult;
use crate::parse::markers::info as keys;

/// Parse `--info` output into an [`InfoResult`]
///
/// Success is the default outcome of any invocation that did not signal
/// process failure; there is no further text heuristic for this operation.
pub fn parse_info(output: &str) -> InfoResult {
    let mut result = InfoResult {
        is_success: true,
        raw_output: Some(output.to_string()),
        ..InfoResult::default()
    };

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, raw_value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = unquote(raw_value.trim()).to_string();

        match key {
            keys::DOMAIN_CONF => result.domain_config_path = Some(value),
            keys::DOMAIN => result.domain = Some(value),
            keys::ALT => result.alt_names = Some(value),
            keys::WEBROOT => result.webroot = Some(value),
            keys::PRE_HOOK => result.pre_hook = Some(value),
            keys::POST_HOOK => result.post_hook = Some(value),
            keys::RENEW_HOOK => result.renew_hook = Some(value),
            keys::API => result.api_endpoint = Some(value),
            keys::KEYLENGTH => result.key_length = Some(value),
            keys::ORDER_FINALIZE => result.order_finalize_url = Some(value),
            keys::LINK_ORDER => result.link_order_url = Some(value),
            keys::LINK_CERT => result.link_cert_url = Some(value),
            // The numeric timestamps stay absent if they fail to parse;
            // a malformed value never fails the whole operation.
            keys::CERT_CREATE_TIME => result.cert_create_time = value.parse().ok(),
            keys::CERT_CREATE_TIME_STR => result.cert_create_time_str = Some(value),
            keys::NEXT_RENEW_TIME => result.next_renew_time = value.parse().ok(),
            keys::NEXT_RENEW_TIME_STR => result.next_renew_time_str = Some(value),
            _ => {}
        }
    }

    result
}

/// Strip one layer of surrounding single or double quotes
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO_OUTPUT: &str = "\
DOMAIN_CONF=/root/.acme.sh/example.com/example.com.conf
Le_Domain='example.com'
Le_Alt='www.example.com,api.example.com'
Le_Webroot='/var/www/html'
Le_PreHook=''
Le_PostHook='systemctl reload nginx'
Le_RenewHook=''
Le_API='https://acme-v02.api.letsencrypt.org/directory'
Le_Keylength='2048'
Le_OrderFinalize='https://acme-v02.api.letsencrypt.org/acme/finalize/123/456'
Le_LinkOrder='https://acme-v02.api.letsencrypt.org/acme/order/123/456'
Le_LinkCert='https://acme-v02.api.letsencrypt.org/acme/cert/abc'
Le_CertCreateTime='1705312800'
Le_CertCreateTimeStr='Mon Jan 15 10:00:00 UTC 2024'
Le_NextRenewTimeStr='Fri Mar 15 10:00:00 UTC 2024'
Le_NextRenewTime='1710496800'";

    #[test]
    fn test_parse_full_dump() {
        let result = parse_info(INFO_OUTPUT);
        assert!(result.is_success);
        assert_eq!(
            result.domain_config_path.as_deref(),
            Some("/root/.acme.sh/example.com/example.com.conf")
        );
        assert_eq!(result.domain.as_deref(), Some("example.com"));
        assert_eq!(
            result.alt_names.as_deref(),
            Some("www.example.com,api.example.com")
        );
        assert_eq!(result.webroot.as_deref(), Some("/var/www/html"));
        assert_eq!(result.post_hook.as_deref(), Some("systemctl reload nginx"));
        assert_eq!(
            result.api_endpoint.as_deref(),
            Some("https://acme-v02.api.letsencrypt.org/directory")
        );
        assert_eq!(result.key_length.as_deref(), Some("2048"));
        assert_eq!(result.cert_create_time, Some(1705312800));
        assert_eq!(result.next_renew_time, Some(1710496800));
        assert_eq!(
            result.cert_create_time_str.as_deref(),
            Some("Mon Jan 15 10:00:00 UTC 2024")
        );
    }

    #[test]
    fn test_empty_quoted_value_becomes_empty_string() {
        let result = parse_info("Le_PreHook=''");
        assert_eq!(result.pre_hook.as_deref(), Some(""));
    }

    #[test]
    fn test_unparseable_timestamp_left_absent() {
        let result = parse_info("Le_CertCreateTime='not-a-number'\nLe_Domain='example.com'");
        assert_eq!(result.cert_create_time, None);
        assert_eq!(result.domain.as_deref(), Some("example.com"));
        assert!(result.is_success);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let result = parse_info("Le_Unknown='x'\nLe_Domain='example.com'");
        assert_eq!(result.domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_only_first_equals_splits() {
        let result = parse_info("Le_Webroot='/srv/a=b'");
        assert_eq!(result.webroot.as_deref(), Some("/srv/a=b"));
    }

    #[test]
    fn test_double_quotes_stripped_one_layer() {
        let result = parse_info("Le_Domain=\"'example.com'\"");
        assert_eq!(result.domain.as_deref(), Some("'example.com'"));
    }

    #[test]
    fn test_lines_without_equals_ignored() {
        let result = parse_info("[Mon] some log line\nLe_Domain='example.com'");
        assert_eq!(result.domain.as_deref(), Some("example.com"));
    }
}
