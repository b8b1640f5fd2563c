//! Shortcode generation and validation.

use rand::Rng;
use rand::distr::Alphanumeric;

use crate::domain::error::RegistryError;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Maximum length of a caller-supplied code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 10;

/// Codes that would be shadowed by service routes and can never resolve.
const RESERVED_CODES: &[&str] = &["health", "shorturls"];

/// Samples a uniformly random code over the 62-character alphanumeric
/// alphabet (upper and lower letters plus digits).
///
/// Uniqueness is not checked here; the registry's atomic insert is the
/// authority on collisions.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied custom shortcode.
///
/// # Rules
///
/// - 1 to [`MAX_CUSTOM_CODE_LENGTH`] characters
/// - ASCII letters and digits only
/// - Not a reserved route word
///
/// # Errors
///
/// Returns [`RegistryError::InvalidShortcode`] naming the violated rule.
pub fn validate_custom_code(code: &str) -> Result<(), RegistryError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(RegistryError::InvalidShortcode {
            code: code.to_string(),
            reason: format!("must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
        });
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(RegistryError::InvalidShortcode {
            code: code.to_string(),
            reason: "only letters and digits are allowed".to_string(),
        });
    }

    if RESERVED_CODES.contains(&code) {
        return Err(RegistryError::InvalidShortcode {
            code: code.to_string(),
            reason: "this code is reserved".to_string(),
        });
    }

    Ok(())
}
