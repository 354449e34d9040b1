//! Random, URL-safe identifiers for newly stored objects

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use tracing::error;

use crate::types::{AssetError, AssetResult};

/// Number of random bytes behind each identifier
pub const IDENTIFIER_BYTES: usize = 32;

/// Length of an encoded identifier
pub const IDENTIFIER_LEN: usize = 43;

/// Generates a fresh identifier from the operating system's CSPRNG.
///
/// Identifiers are 32 random bytes in unpadded URL-safe base64, so they can sit in a path
/// segment unescaped. No uniqueness check is made against existing objects.
///
/// # Errors
///
/// Returns `AssetError::RandomSource` if the OS entropy source fails. Only the current
/// operation is aborted; no weaker source is substituted.
pub fn generate() -> AssetResult<String> {
    generate_from(&mut OsRng)
}

/// Generates an identifier from the given random source
///
/// # Errors
///
/// Returns `AssetError::RandomSource` if `rng` cannot fill the buffer
pub fn generate_from<R: RngCore + ?Sized>(rng: &mut R) -> AssetResult<String> {
    let mut bytes = [0u8; IDENTIFIER_BYTES];

    rng.try_fill_bytes(&mut bytes).map_err(|e| {
        error!("Random source failed while generating identifier: {e}");
        AssetError::RandomSource(e.to_string())
    })?;

    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Whether `candidate` has the shape of a generated identifier
#[must_use]
pub fn is_identifier(candidate: &str) -> bool {
    candidate.len() == IDENTIFIER_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
