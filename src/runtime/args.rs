//! Argument vectors for acme.sh subcommands
//!
//! Pure functions: one options record in, one ordered token list out. The
//! subcommand flag always comes first. Tokens are passed to the process as
//! discrete array elements, so no shell quoting or escaping is needed here.
//! Nothing is validated beyond presence; acme.sh is the source of truth for
//! malformed domains and paths.

use crate::core::options::{
    InfoOptions, InstallCertOptions, IssueOptions, ListOptions, RemoveOptions, RenewAllOptions,
    RenewOptions, RevokeOptions,
};

/// `--list [--raw]`
pub fn list_args(options: &ListOptions) -> Vec<String> {
    let mut args = vec!["--list".to_string()];
    if options.raw {
        args.push("--raw".to_string());
    }
    args
}

/// `--issue -d <domain>... [-w <webroot>] [--dns <provider>] --keylength <n>
/// [--staging] [--server <url>]`
pub fn issue_args(options: &IssueOptions) -> Vec<String> {
    let mut args = vec!["--issue".to_string()];

    for domain in &options.domains {
        args.push("-d".to_string());
        args.push(domain.clone());
    }

    push_opt(&mut args, "-w", options.webroot.as_deref());
    push_opt(&mut args, "--dns", options.dns_provider.as_deref());

    args.push("--keylength".to_string());
    args.push(options.key_length.clone());

    if options.staging {
        args.push("--staging".to_string());
    }
    push_opt(&mut args, "--server", options.server.as_deref());

    args
}

/// `--renew -d <domain> [--force] [--ecc] [--server <url>]`
pub fn renew_args(options: &RenewOptions) -> Vec<String> {
    let mut args = vec!["--renew".to_string(), "-d".to_string(), options.domain.clone()];
    if options.force {
        args.push("--force".to_string());
    }
    if options.ecc {
        args.push("--ecc".to_string());
    }
    push_opt(&mut args, "--server", options.server.as_deref());
    args
}

/// `--renew-all [--stop-renew-on-error] [--server <url>]`
pub fn renew_all_args(options: &RenewAllOptions) -> Vec<String> {
    let mut args = vec!["--renew-all".to_string()];
    if options.stop_renew_on_error {
        args.push("--stop-renew-on-error".to_string());
    }
    push_opt(&mut args, "--server", options.server.as_deref());
    args
}

/// `--install-cert -d <domain> [--ecc] [--cert-file <p>] [--key-file <p>]
/// [--ca-file <p>] [--fullchain-file <p>] [--reloadcmd <cmd>]`
pub fn install_cert_args(options: &InstallCertOptions) -> Vec<String> {
    let mut args = vec![
        "--install-cert".to_string(),
        "-d".to_string(),
        options.domain.clone(),
    ];
    if options.ecc {
        args.push("--ecc".to_string());
    }
    push_opt(&mut args, "--cert-file", options.cert_file.as_deref());
    push_opt(&mut args, "--key-file", options.key_file.as_deref());
    push_opt(&mut args, "--ca-file", options.ca_file.as_deref());
    push_opt(&mut args, "--fullchain-file", options.fullchain_file.as_deref());
    push_opt(&mut args, "--reloadcmd", options.reload_cmd.as_deref());
    args
}

/// `--revoke -d <domain> [--ecc] [--revoke-reason <code>]`
pub fn revoke_args(options: &RevokeOptions) -> Vec<String> {
    let mut args = vec![
        "--revoke".to_string(),
        "-d".to_string(),
        options.domain.clone(),
    ];
    if options.ecc {
        args.push("--ecc".to_string());
    }
    if let Some(reason) = options.reason {
        args.push("--revoke-reason".to_string());
        args.push(reason.code().to_string());
    }
    args
}

/// `--remove -d <domain> [--ecc]`
pub fn remove_args(options: &RemoveOptions) -> Vec<String> {
    let mut args = vec![
        "--remove".to_string(),
        "-d".to_string(),
        options.domain.clone(),
    ];
    if options.ecc {
        args.push("--ecc".to_string());
    }
    args
}

/// `--info -d <domain> [--ecc]`
pub fn info_args(options: &InfoOptions) -> Vec<String> {
    let mut args = vec![
        "--info".to_string(),
        "-d".to_string(),
        options.domain.clone(),
    ];
    if options.ecc {
        args.push("--ecc".to_string());
    }
    args
}

/// Push a flag/value pair, skipping unset and empty values
fn push_opt(args: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            args.push(flag.to_string());
            args.push(value.to_string());
        }
    }
}
