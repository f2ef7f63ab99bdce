//! Breach lookup over a k-anonymity range API.
//!
//! The password is hashed with SHA-1 and only the first five hex characters
//! of the digest are sent. The service answers with every `SUFFIX:COUNT`
//! sharing that prefix and the match is found locally.
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_API_URL`: base URL of the range API
//!   (default: `https://api.pwnedpasswords.com`)
//! - `PWD_BREACH_TIMEOUT_SECS`: request timeout in seconds (default: `10`)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};

use crate::error::PolicyError;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const PREFIX_LEN: usize = 5;

/// Connection settings for the breach service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BreachConfig {
    /// Reads the configuration from the environment.
    ///
    /// Priority:
    /// 1. `PWD_BREACH_API_URL` / `PWD_BREACH_TIMEOUT_SECS`
    /// 2. Defaults. A timeout that is not a positive integer is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("PWD_BREACH_API_URL") {
            config = config.with_base_url(url);
        }
        if let Some(secs) = std::env::var("PWD_BREACH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0)
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    /// The digest suffix was not in the returned range.
    Clean,
    /// Number of times the password appears in the corpus.
    Breached(u64),
}

impl BreachStatus {
    pub fn is_breached(&self) -> bool {
        matches!(self, BreachStatus::Breached(_))
    }

    pub fn count(&self) -> u64 {
        match self {
            BreachStatus::Clean => 0,
            BreachStatus::Breached(count) => *count,
        }
    }
}

/// SHA-1 digest of a password split into the part that is sent and the part
/// that is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeQuery {
    prefix: String,
    suffix: String,
}

impl RangeQuery {
    pub fn for_password(password: &SecretString) -> Self {
        let digest = format!("{:X}", Sha1::digest(password.expose_secret().as_bytes()));
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// The five uppercase hex characters sent to the service.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Finds this query's suffix in a range response body.
    pub fn find_in(&self, body: &str) -> BreachStatus {
        match parse_range_count(body, &self.suffix) {
            Some(count) if count > 0 => BreachStatus::Breached(count),
            _ => BreachStatus::Clean,
        }
    }
}

/// Returns the count on the first well-formed `SUFFIX:COUNT` line matching
/// `suffix`. Malformed lines are skipped.
pub fn parse_range_count(body: &str, suffix: &str) -> Option<u64> {
    body.lines()
        .filter_map(|line| line.trim().split_once(':'))
        .filter(|(candidate, _)| candidate.trim().eq_ignore_ascii_case(suffix))
        .find_map(|(_, count)| count.trim().parse().ok())
}

/// Fetches the raw range response for a digest prefix.
#[cfg_attr(test, mockall::automock)]
pub trait RangeClient {
    fn fetch_range(&self, prefix: &str) -> Result<String, PolicyError>;
}

/// Blocking HTTP client for the range API.
///
/// A fresh `reqwest::blocking::Client` is built for every request. Inside a
/// tokio runtime the whole request runs on a separate OS thread, since the
/// blocking client must not be created or dropped in an async context.
#[derive(Debug, Clone)]
pub struct HttpRangeClient {
    base_url: String,
    timeout: Duration,
}

impl HttpRangeClient {
    pub fn new(config: &BreachConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            timeout: config.timeout(),
        }
    }

    fn fetch_blocking(&self, prefix: &str) -> Result<String, PolicyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let url = format!("{}/range/{}", self.base_url, prefix);
        let response = client.get(&url).header("Add-Padding", "true").send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PolicyError::ServiceUnavailable(format!(
                "breach service returned {}",
                status
            )));
        }

        Ok(response.text()?)
    }
}

impl RangeClient for HttpRangeClient {
    fn fetch_range(&self, prefix: &str) -> Result<String, PolicyError> {
        #[cfg(feature = "async")]
        if tokio::runtime::Handle::try_current().is_ok() {
            return std::thread::scope(|scope| {
                scope
                    .spawn(|| self.fetch_blocking(prefix))
                    .join()
                    .map_err(|_| {
                        PolicyError::ServiceUnavailable("breach lookup thread panicked".to_string())
                    })?
            });
        }

        self.fetch_blocking(prefix)
    }
}

/// Runs breach lookups through a [`RangeClient`].
#[derive(Debug, Clone)]
pub struct BreachChecker<C = HttpRangeClient> {
    client: C,
}

impl BreachChecker<HttpRangeClient> {
    pub fn from_config(config: &BreachConfig) -> Self {
        Self::new(HttpRangeClient::new(config))
    }
}

impl<C: RangeClient> BreachChecker<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Looks up a password in the breach corpus.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::ServiceUnavailable`] if the service cannot be
    /// reached or answers with a non-success status.
    ///
    /// # Blocking
    ///
    /// Blocks the calling thread for the duration of the request, also when
    /// called from async code. Use [`check_breach_tx`] there to keep the
    /// executor free and to support cancellation.
    pub fn check(&self, password: &SecretString) -> Result<BreachStatus, PolicyError> {
        let query = RangeQuery::for_password(password);

        #[cfg(feature = "tracing")]
        tracing::debug!("Querying breach range {}", query.prefix());

        let body = match self.client.fetch_range(query.prefix()) {
            Ok(body) => body,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Breach lookup failed: {}", e);
                return Err(e);
            }
        };

        let status = query.find_in(&body);

        #[cfg(feature = "tracing")]
        tracing::info!("Breach lookup for range {} finished: {:?}", query.prefix(), status);

        Ok(status)
    }
}

/// Checks a password using the configuration from the environment.
///
/// Blocking, see [`BreachChecker::check`].
pub fn check_breach(password: &SecretString) -> Result<BreachStatus, PolicyError> {
    BreachChecker::from_config(&BreachConfig::from_env()).check(password)
}

/// Async version that sends the lookup outcome via channel.
///
/// The lookup runs on the blocking pool. If `token` is cancelled first,
/// nothing is sent.
#[cfg(feature = "async")]
pub async fn check_breach_tx<C>(
    checker: Arc<BreachChecker<C>>,
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<BreachStatus, PolicyError>>,
) where
    C: RangeClient + Send + Sync + 'static,
{
    let lookup = tokio::task::spawn_blocking(move || checker.check(&password));

    let outcome = tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("Breach lookup cancelled");
            return;
        }
        joined = lookup => joined
            .map_err(|e| PolicyError::ServiceUnavailable(e.to_string()))
            .and_then(|status| status),
    };

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send breach lookup result: {}", _e);
    }
}
