use sha1::{Digest, Sha1};

/// The length of a SHA1 digest in hex characters.
pub const DIGEST_LEN: usize = 40;

/// The length of the hash prefix sent to the range endpoint (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the hash suffix matched locally (35 hex characters).
pub const SUFFIX_LEN: usize = DIGEST_LEN - PREFIX_LEN;

/// Hex lookup table for digest encoding.
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex SHA1 digest of a password, split for a range query.
///
/// The prefix is the only part that ever goes over the wire; the suffix is
/// compared against the response body locally.
pub struct HexDigest([u8; DIGEST_LEN]);

impl HexDigest {
    /// Hashes the password and encodes it as uppercase hex.
    pub fn of(password: &str) -> Self {
        let hash: [u8; 20] = Sha1::digest(password.as_bytes()).into();

        let mut hex = [0u8; DIGEST_LEN];
        for (i, byte) in hash.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }

        Self(hex)
    }

    /// The first 5 hex characters, used to parameterize the range query.
    #[inline]
    pub fn prefix(&self) -> &str {
        // SAFETY: the buffer is built exclusively from HEX_CHARS, so every
        // byte is ASCII.
        unsafe { std::str::from_utf8_unchecked(&self.0[..PREFIX_LEN]) }
    }

    /// The remaining 35 hex characters, never transmitted.
    #[inline]
    pub fn suffix(&self) -> &str {
        // SAFETY: same as prefix(), the buffer is ASCII hex.
        unsafe { std::str::from_utf8_unchecked(&self.0[PREFIX_LEN..]) }
    }

    /// The full 40-character digest.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: same as prefix(), the buffer is ASCII hex.
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}
