use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{
    Config, Error, GetCertificateOptions, GetCertificateResult, InfoOptions, InfoResult,
    InstallCertOptions, InstallCertResult, IssueOptions, IssueResult, ListOptions, ListResult,
    RemoveOptions, RemoveResult, RenewAllOptions, RenewAllResult, RenewOptions, RenewResult,
    Result, RevokeOptions, RevokeResult,
};
use crate::parse;
use crate::runtime::args;
use crate::runtime::process::{CommandRunner, TokioRunner};

/// High-level client for driving acme.sh
///
/// One method per acme.sh operation. Each call builds the argument vector,
/// runs the subprocess, and translates the captured text into a typed
/// result. Calls are independent and stateless; the client holds no mutable
/// state and is cheap to clone.
///
/// A non-zero exit never surfaces as an error: it becomes a failure result
/// with `error_output` carrying the captured stderr lines. The errors a
/// caller can actually see are timeouts and I/O problems outside the
/// subprocess.
///
/// # Examples
///
/// ```rust,no_run
/// use acmesh_rs::{AcmeClient, Config, RenewOptions};
///
/// # #[tokio::main]
/// # async fn main() -> acmesh_rs::Result<()> {
/// let client = AcmeClient::new(Config::default());
/// let result = client.renew(&RenewOptions::new("example.com").force(true)).await?;
/// if result.is_success {
///     println!("renewed, cert at {:?}", result.certificate_path);
/// } else if let Some(stderr) = &result.error_output {
///     eprintln!("renewal failed: {}", stderr.join("\n"));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AcmeClient {
    config: Arc<Config>,
    runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for AcmeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcmeClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AcmeClient {
    /// Create a client with the given configuration
    pub fn new(config: Config) -> Self {
        let runner = TokioRunner::new(config.timeout_secs);
        Self {
            config: Arc::new(config),
            runner: Arc::new(runner),
        }
    }

    /// Create a client with a custom process runner
    ///
    /// The seam used by tests to substitute canned output for a real
    /// acme.sh invocation.
    pub fn with_runner(config: Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config: Arc::new(config),
            runner,
        }
    }

    /// Run acme.sh with the given arguments, returning joined stdout
    async fn execute(&self, arguments: &[String]) -> Result<String> {
        let lines = self.runner.run(&self.config.acme_sh_path, arguments).await?;
        debug!(lines = lines.len(), "captured acme.sh output");
        Ok(lines.join("\n"))
    }

    /// List the certificates acme.sh manages (`--list`)
    pub async fn list(&self, options: &ListOptions) -> Result<ListResult> {
        match self.execute(&args::list_args(options)).await {
            Ok(output) => Ok(parse::parse_list(&output)),
            Err(Error::ProcessFailed { stderr, .. }) => Ok(ListResult::process_failure(stderr)),
            Err(e) => Err(e),
        }
    }

    /// Issue a new certificate (`--issue`)
    ///
    /// The result is successful only when all four output files (cert, key,
    /// intermediate CA, full chain) were reported; acme.sh can exit zero on
    /// a run that produced none of them.
    pub async fn issue(&self, options: &IssueOptions) -> Result<IssueResult> {
        match self.execute(&args::issue_args(options)).await {
            Ok(output) => {
                let result = parse::parse_issue(&output);
                if !result.is_success {
                    warn!(domains = ?options.domains, "issue output missing expected file paths");
                }
                Ok(result)
            }
            Err(Error::ProcessFailed { stderr, .. }) => Ok(IssueResult::process_failure(stderr)),
            Err(e) => Err(e),
        }
    }

    /// Renew a single certificate (`--renew`)
    ///
    /// A renewal skipped as not yet due counts as a successful no-op.
    pub async fn renew(&self, options: &RenewOptions) -> Result<RenewResult> {
        match self.execute(&args::renew_args(options)).await {
            Ok(output) => Ok(parse::parse_renew(&output)),
            Err(Error::ProcessFailed { stderr, .. }) => Ok(RenewResult::process_failure(stderr)),
            Err(e) => Err(e),
        }
    }

    /// Renew every certificate that is due (`--renew-all`)
    ///
    /// The result reports per-domain outcomes; the overall verdict is
    /// success iff no domain failed.
    pub async fn renew_all(&self, options: &RenewAllOptions) -> Result<RenewAllResult> {
        match self.execute(&args::renew_all_args(options)).await {
            Ok(output) => Ok(parse::parse_renew_all(&output)),
            Err(Error::ProcessFailed { stderr, .. }) => Ok(RenewAllResult::process_failure(stderr)),
            Err(e) => Err(e),
        }
    }

    /// Install certificate files to their destinations (`--install-cert`)
    pub async fn install_cert(&self, options: &InstallCertOptions) -> Result<InstallCertResult> {
        match self.execute(&args::install_cert_args(options)).await {
            Ok(output) => Ok(parse::parse_install_cert(&output)),
            Err(Error::ProcessFailed { stderr, .. }) => {
                Ok(InstallCertResult::process_failure(stderr))
            }
            Err(e) => Err(e),
        }
    }

    /// Revoke a certificate (`--revoke`)
    pub async fn revoke(&self, options: &RevokeOptions) -> Result<RevokeResult> {
        match self.execute(&args::revoke_args(options)).await {
            Ok(output) => Ok(parse::parse_revoke(&output, options)),
            Err(Error::ProcessFailed { stderr, .. }) => Ok(RevokeResult {
                domain: Some(options.domain.clone()),
                reason: options.reason,
                was_ecc: options.ecc,
                ..RevokeResult::process_failure(stderr)
            }),
            Err(e) => Err(e),
        }
    }

    /// Remove a certificate from acme.sh management (`--remove`)
    ///
    /// The key and cert files stay on disk; only renewals stop.
    pub async fn remove(&self, options: &RemoveOptions) -> Result<RemoveResult> {
        match self.execute(&args::remove_args(options)).await {
            Ok(output) => Ok(parse::parse_remove(&output, options)),
            Err(Error::ProcessFailed { stderr, .. }) => Ok(RemoveResult {
                domain: Some(options.domain.clone()),
                was_ecc: options.ecc,
                ..RemoveResult::process_failure(stderr)
            }),
            Err(e) => Err(e),
        }
    }

    /// Query stored metadata for a certificate (`--info`)
    pub async fn info(&self, options: &InfoOptions) -> Result<InfoResult> {
        match self.execute(&args::info_args(options)).await {
            Ok(output) => Ok(parse::parse_info(&output)),
            Err(Error::ProcessFailed { stderr, .. }) => Ok(InfoResult::process_failure(stderr)),
            Err(e) => Err(e),
        }
    }

    /// Read certificate files off disk for a domain
    ///
    /// Composes two steps: an `--info` call locates the certificate
    /// directory from the domain configuration path, then the fixed file
    /// names inside it are derived (`<domain>.cer` / `<domain>_ecc.cer`,
    /// matching key, `ca.cer`, `fullchain.cer`) and each file is read only
    /// when the corresponding inclusion flag asks for it. A missing file
    /// leaves its field absent; any other read error turns the whole result
    /// into a failure with a one-line `error_output`.
    pub async fn get_certificate(
        &self,
        options: &GetCertificateOptions,
    ) -> Result<GetCertificateResult> {
        let info_options = InfoOptions::new(&options.domain).ecc(options.ecc);
        let info = self.info(&info_options).await?;

        let mut result = GetCertificateResult {
            is_success: info.is_success,
            raw_output: info.raw_output,
            error_output: info.error_output,
            ..GetCertificateResult::default()
        };

        if !result.is_success {
            return Ok(result);
        }
        let Some(config_path) = info.domain_config_path.filter(|p| !p.is_empty()) else {
            return Ok(result);
        };

        let config_dir = Path::new(&config_path).parent().filter(|d| !d.as_os_str().is_empty());
        let Some(dir) = config_dir else {
            result.is_success = false;
            result.error_output = Some(vec![
                "Unable to determine certificate directory from domain config path".to_string(),
            ]);
            return Ok(result);
        };

        let (cert_name, key_name) = if options.ecc {
            (
                format!("{}_ecc.cer", options.domain),
                format!("{}_ecc.key", options.domain),
            )
        } else {
            (
                format!("{}.cer", options.domain),
                format!("{}.key", options.domain),
            )
        };

        let cert_path = dir.join(cert_name);
        let key_path = dir.join(key_name);
        let ca_path = dir.join("ca.cer");
        let full_chain_path = dir.join("fullchain.cer");

        result.certificate_path = Some(cert_path.to_string_lossy().into_owned());
        result.key_path = Some(key_path.to_string_lossy().into_owned());
        result.ca_path = Some(ca_path.to_string_lossy().into_owned());
        result.full_chain_path = Some(full_chain_path.to_string_lossy().into_owned());

        let read = async {
            // The certificate itself is always read; the rest on request
            result.certificate = read_if_present(&cert_path).await?;
            if options.include_key {
                result.private_key = read_if_present(&key_path).await?;
            }
            if options.include_full_chain {
                result.full_chain = read_if_present(&full_chain_path).await?;
            }
            if options.include_ca {
                result.ca_bundle = read_if_present(&ca_path).await?;
            }
            Ok::<(), std::io::Error>(())
        };

        match read.await {
            Ok(()) => result.is_success = true,
            Err(e) => {
                warn!(domain = %options.domain, error = %e, "certificate file read failed");
                result.is_success = false;
                result.error_output =
                    Some(vec![format!("Error reading certificate files: {}", e)]);
            }
        }

        Ok(result)
    }
}

/// Read a file to a string, treating absence as "not populated"
async fn read_if_present(path: &Path) -> std::io::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
