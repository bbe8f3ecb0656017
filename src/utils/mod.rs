//! Utils module split into submodules

mod digits;
mod errors;
mod masks;
mod validation;

pub use digits::{nondecreasing_digit_strings, parse_digits};
pub use errors::UtilsError;
pub use masks::{Mask, full_mask, generate_splits, single_leaf};
pub use validation::validate_digit_string;
