//! Run identifiers for pipeline log sessions.
//!
//! Each pipeline run gets a short random id so interleaved or repeated runs
//! can be told apart in `pipeline.log`.

use rand::Rng;

/// Lowercase letters and digits.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated run ids.
const ID_LEN: usize = 6;

/// Generate a 6-character lowercase alphanumeric run id.
///
/// # Examples
/// ```
/// use prdflow::run_id::generate_run_id;
///
/// let id = generate_run_id();
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_run_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
