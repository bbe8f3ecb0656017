use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty, does not hold exactly
/// `expected_len` characters, or contains any non-ASCII-digit characters.
pub fn validate_digit_string(digit_string: &str, expected_len: usize) -> Result<(), UtilsError> {
    debug!("Validating digit string: '{}'", digit_string);

    if digit_string.is_empty() {
        warn!("Digit string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    let actual = digit_string.chars().count();
    if actual != expected_len {
        warn!(
            "Digit string '{}' has {} characters, expected {}",
            digit_string, actual, expected_len
        );
        return Err(UtilsError::WrongLength {
            expected: expected_len,
            actual,
        });
    }

    if !digit_string.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Digit string contains non-digit characters: '{}'",
            digit_string
        );
        return Err(UtilsError::InvalidDigitString(digit_string.to_string()));
    }

    debug!("Digit string validation successful");
    Ok(())
}
