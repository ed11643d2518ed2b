/// Error returned by a breach lookup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The password was empty. No request is made in this case.
    #[error("password must not be empty")]
    InvalidInput,

    /// The range endpoint could not answer the query.
    #[error(transparent)]
    ServiceUnavailable(#[from] ServiceUnavailable),
}

/// Why the breach service could not answer.
///
/// Both variants are the same failure from the caller's point of view; they
/// are kept apart so the underlying cause stays available for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum ServiceUnavailable {
    /// The range endpoint answered with a non-success status.
    #[error("breach service returned HTTP {0}")]
    Status(u16),

    /// The request never completed (DNS, connect, timeout, or body read).
    #[error("breach service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}
