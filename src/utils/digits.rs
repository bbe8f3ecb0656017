use log::debug;

use crate::utils::errors::UtilsError;

/// Convert a digit string into one leaf value per character.
///
/// # Errors
///
/// Returns an error if the string is empty or any character is not an ASCII digit.
pub fn parse_digits(digits: &str) -> Result<Vec<u8>, UtilsError> {
    if digits.is_empty() {
        return Err(UtilsError::EmptyDigitString);
    }

    let leaves = digits
        .chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or_else(|| UtilsError::InvalidDigitString(digits.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed '{}' into leaves {:?}", digits, leaves);
    Ok(leaves)
}

/// Every digit string of length `len` whose digits never decrease, in
/// ascending order. Each multiset of digits appears exactly once.
pub fn nondecreasing_digit_strings(len: usize) -> Vec<String> {
    if len == 0 {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut stack = vec![(String::with_capacity(len), 0u8)];

    while let Some((prefix, min_digit)) = stack.pop() {
        if prefix.len() == len {
            result.push(prefix);
            continue;
        }

        for digit in (min_digit..=9).rev() {
            let mut next = prefix.clone();
            next.push(char::from(b'0' + digit));
            stack.push((next, digit));
        }
    }

    debug!("Generated {} digit multisets of length {}", result.len(), len);
    result
}
