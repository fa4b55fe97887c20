//! Random path token generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates a random path token of `length` characters.
///
/// Every character is drawn uniformly from `[A-Za-z0-9]` using the thread-local
/// CSPRNG.
///
/// # Examples
///
/// ```ignore
/// let path = generate_path(6);
/// assert_eq!(path.len(), 6);
/// assert!(path.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_path(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
