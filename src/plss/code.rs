//! Fixed-field PLSS identifier decoder.
//!
//! PLSS codes arrive as fixed-width strings where each component occupies an
//! exact character range (0-indexed):
//!
//! | offsets | component                      |
//! |---------|--------------------------------|
//! | 2..4    | principal meridian (digits)    |
//! | 5..7    | township number (digits)       |
//! | 8       | township direction (letter)    |
//! | 10..12  | range number (digits)          |
//! | 13      | range direction (letter)       |
//! | 17..19  | section number (digits)        |
//!
//! The whole string is validated up front; a malformed code fails with the
//! raw input captured for diagnostics, never a partial record.

use thiserror::Error;

use super::record::LegalDescription;

/// Minimum length of a well-formed PLSS code.
pub const MIN_CODE_LEN: usize = 19;

const MERIDIAN: core::ops::Range<usize> = 2..4;
const TOWNSHIP_NUM: core::ops::Range<usize> = 5..7;
const TOWNSHIP_DIR: usize = 8;
const RANGE_NUM: core::ops::Range<usize> = 10..12;
const RANGE_DIR: usize = 13;
const SECTION: core::ops::Range<usize> = 17..19;

/// Error type for PLSS code decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedCodeError {
    /// The code is shorter than the fixed format requires.
    #[error("PLSS code '{code}' is {length} characters, expected at least 19")]
    TooShort { code: String, length: usize },

    /// The code contains non-ASCII bytes, so fixed offsets are meaningless.
    #[error("PLSS code '{code}' contains non-ASCII characters")]
    NotAscii { code: String },

    /// A numeric component slice contains non-digit characters.
    #[error("PLSS code '{code}': {component} slice '{slice}' is not numeric")]
    NonNumeric {
        code: String,
        component: &'static str,
        slice: String,
    },

    /// A direction offset holds something other than a letter.
    #[error("PLSS code '{code}': {component} direction '{found}' is not a letter")]
    BadDirection {
        code: String,
        component: &'static str,
        found: char,
    },
}

/// Decode a fixed-format PLSS identifier into a [`LegalDescription`].
///
/// Pure and deterministic: the same input always yields the same record or
/// the same error.
///
/// # Errors
///
/// [`MalformedCodeError`] when the code is too short, non-ASCII, has
/// non-digit characters in a numeric slice, or a non-letter at a direction
/// offset. No silent coercion is performed.
///
/// # Example
///
/// ```
/// use mapsheet::plss::parse_plss_code;
///
/// let record = parse_plss_code("T0020020N0030W00014").unwrap();
/// assert_eq!(record.meridian, 2);
/// assert_eq!(record.township, "02N");
/// assert_eq!(record.range, "03W");
/// assert_eq!(record.section, 14);
/// ```
pub fn parse_plss_code(code: &str) -> Result<LegalDescription, MalformedCodeError> {
    if !code.is_ascii() {
        return Err(MalformedCodeError::NotAscii {
            code: code.to_string(),
        });
    }
    if code.len() < MIN_CODE_LEN {
        return Err(MalformedCodeError::TooShort {
            code: code.to_string(),
            length: code.len(),
        });
    }

    let meridian = numeric_slice(code, MERIDIAN, "meridian")?;
    let township_num = digit_slice(code, TOWNSHIP_NUM, "township")?;
    let township_dir = direction(code, TOWNSHIP_DIR, "township")?;
    let range_num = digit_slice(code, RANGE_NUM, "range")?;
    let range_dir = direction(code, RANGE_DIR, "range")?;
    let section = numeric_slice(code, SECTION, "section")?;

    Ok(LegalDescription {
        meridian: meridian as u16,
        township: format!("{}{}", township_num, township_dir),
        range: format!("{}{}", range_num, range_dir),
        section: section as u8,
    })
}

/// Validate a digit-only slice and return it as text.
fn digit_slice<'a>(
    code: &'a str,
    offsets: core::ops::Range<usize>,
    component: &'static str,
) -> Result<&'a str, MalformedCodeError> {
    let slice = &code[offsets];
    if slice.bytes().all(|b| b.is_ascii_digit()) {
        Ok(slice)
    } else {
        Err(MalformedCodeError::NonNumeric {
            code: code.to_string(),
            component,
            slice: slice.to_string(),
        })
    }
}

/// Validate a digit-only slice and parse it as an integer.
fn numeric_slice(
    code: &str,
    offsets: core::ops::Range<usize>,
    component: &'static str,
) -> Result<u32, MalformedCodeError> {
    let slice = digit_slice(code, offsets, component)?;
    slice.parse().map_err(|_| MalformedCodeError::NonNumeric {
        code: code.to_string(),
        component,
        slice: slice.to_string(),
    })
}

/// Validate a single direction letter at a fixed offset.
fn direction(
    code: &str,
    offset: usize,
    component: &'static str,
) -> Result<char, MalformedCodeError> {
    let found = code.as_bytes()[offset] as char;
    if found.is_ascii_alphabetic() {
        Ok(found)
    } else {
        Err(MalformedCodeError::BadDirection {
            code: code.to_string(),
            component,
            found,
        })
    }
}
