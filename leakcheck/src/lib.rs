//! Breached password checker using the k-anonymity range API.
//!
//! This library checks whether a password appears in a known breach corpus
//! without ever revealing the password, or even its full hash, to the remote
//! service. Only the first 5 hex characters of the SHA1 digest are sent; the
//! service answers with every suffix it knows under that prefix and the
//! remaining 35 characters are matched locally.
//!
//! # Example
//!
//! ```rust,no_run
//! use leakcheck::RangeClient;
//!
//! # async fn check() -> Result<(), leakcheck::Error> {
//! let client = RangeClient::default();
//! let result = client.lookup("password123").await?;
//! if result.found {
//!     println!("seen {} times in breaches", result.occurrences);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The [`score`] heuristic is independent of the lookup: it is a pure 0-5
//! rating over length and character classes, with no network I/O.

mod client;
mod digest;
mod error;
mod range;
mod score;

pub use client::RangeClient;
pub use digest::{DIGEST_LEN, HexDigest, PREFIX_LEN, SUFFIX_LEN};
pub use error::{Error, ServiceUnavailable};
pub use range::{LookupResult, scan_range};
pub use score::{MAX_SCORE, score};
