// src/checker/probe.rs
// =============================================================================
// This module probes a single URL with one HTTP GET request.
//
// Key functionality:
// - One GET per URL, bounded by a per-request timeout, no retries
// - Any response at all becomes StatusCode(code), whatever the code is
// - Transport errors (DNS, refused, timeout, TLS, bad URL) become Failure
//   and are logged, but never stop the run
//
// Rust concepts:
// - Traits: Probe lets the dispatcher work with any prober (real or fake)
// - async-trait: async fn inside a trait, boxed behind the scenes
// - Enums with data: ProbeOutcome carries either a code or an error
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ConfigError;

/// Coarse category of a transport failure, used in the diagnostic log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request did not finish within the timeout
    Timeout,
    /// Could not connect (refused, unreachable, DNS, TLS handshake)
    Connect,
    /// The client gave up following redirects
    Redirect,
    /// The URL could not be turned into a request
    InvalidUrl,
    /// Anything else reqwest reports
    Other,
}

/// What happened when we probed a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A response arrived; holds the numeric HTTP status
    StatusCode { code: u16 },
    /// No response: transport-level error
    Failure { kind: FailureKind, message: String },
}

impl ProbeOutcome {
    /// True only for an HTTP 200 response
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeOutcome::StatusCode { code: 200 })
    }
}

/// The URL together with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

// Anything that can check one URL.
//
// Send + Sync because the dispatcher shares one prober between many
// in-flight futures.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: String) -> ProbeResult;
}

/// Probes URLs over the network with reqwest.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
    timeout: Duration,
}

impl HttpProber {
    // Builds one HTTP client for the whole run.
    //
    // Every probe clones this client (cheap: it's reference counted), so all
    // requests share a connection pool. Redirects use reqwest's default policy.
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn probe(&self, url: String) -> ProbeResult {
        match self.client.get(&url).send().await {
            // We only care about the status line, the body is never read
            Ok(response) => {
                let code = response.status().as_u16();
                tracing::debug!(url = %url, status = code, "received response");
                ProbeResult {
                    url,
                    outcome: ProbeOutcome::StatusCode { code },
                }
            }
            Err(e) => {
                let kind = categorize_error(&e);
                let message = e.to_string();
                tracing::error!(url = %url, kind = ?kind, error = %message, "error checking url");
                ProbeResult {
                    url,
                    outcome: ProbeOutcome::Failure { kind, message },
                }
            }
        }
    }
}

// Sorts reqwest errors into our FailureKind buckets.
//
// Order matters: a timed-out connect attempt reports both is_timeout() and
// is_connect(), and we'd rather call it a timeout.
fn categorize_error(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_builder() {
        FailureKind::InvalidUrl
    } else if error.is_redirect() {
        FailureKind::Redirect
    } else if error.is_connect() {
        FailureKind::Connect
    } else {
        FailureKind::Other
    }
}
