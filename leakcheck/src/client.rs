use tracing::debug;

use crate::digest::HexDigest;
use crate::error::{Error, ServiceUnavailable};
use crate::range::{LookupResult, scan_range};

/// Client for the k-anonymity range endpoint.
///
/// Holds a [`reqwest::Client`] so connection pooling and timeout policy stay
/// with the caller. Each lookup issues exactly one GET request; there are no
/// retries.
pub struct RangeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RangeClient {
    /// The public Pwned Passwords range endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.pwnedpasswords.com/range";

    /// Creates a client against [`Self::DEFAULT_BASE_URL`].
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, Self::DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom range endpoint.
    ///
    /// The prefix is appended as a single path segment, so trailing slashes
    /// on `base_url` are stripped.
    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// Checks whether the password appears in the breach corpus.
    ///
    /// Only the first 5 hex characters of the SHA1 digest are sent to the
    /// service; the remaining 35 are matched against the response locally.
    /// An empty password fails with [`Error::InvalidInput`] before any
    /// request is made. A non-success status or a transport failure fails
    /// with [`Error::ServiceUnavailable`]; a missing suffix in the response
    /// is not an error, it means the password was not found.
    #[tracing::instrument(skip_all)]
    pub async fn lookup(&self, password: &str) -> Result<LookupResult, Error> {
        if password.is_empty() {
            return Err(Error::InvalidInput);
        }

        let digest = HexDigest::of(password);
        let url = format!("{}/{}", self.base_url, digest.prefix());

        debug!(prefix = digest.prefix(), "querying range endpoint");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ServiceUnavailable::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceUnavailable::Status(status.as_u16()).into());
        }

        let body = response
            .text()
            .await
            .map_err(ServiceUnavailable::Transport)?;

        let result = scan_range(&body, digest.suffix());
        debug!(found = result.found, "range scan complete");

        Ok(result)
    }
}

impl Default for RangeClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}
