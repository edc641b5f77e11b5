//! Random alias generation.

use base64::Engine as _;

/// Entropy bytes used for an alias when the caller does not supply one.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Generates a random alias from `length` bytes of OS entropy.
///
/// The bytes are encoded as URL-safe base64 without padding, so the result
/// is `ceil(4 * length / 3)` characters long (8 for the default of 6 bytes)
/// and only contains `A-Z`, `a-z`, `0-9`, `-` and `_`.
///
/// No uniqueness is promised; a collision is reported by the store when the
/// alias is saved.
///
/// # Panics
///
/// Panics if `length` is zero, or if the system random number generator
/// fails. A failing entropy source is not something to keep serving with;
/// release builds abort on panic.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 8);
/// ```
pub fn generate_alias(length: usize) -> String {
    assert!(length > 0, "alias length must be positive");

    let mut buffer = vec![0u8; length];

    getrandom::fill(&mut buffer).expect("system random number generator failed");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Number of characters [`generate_alias`] produces for `length` bytes.
pub fn encoded_len(length: usize) -> usize {
    (length * 4).div_ceil(3)
}
