//! Digit-string conversion between positional notation and integer values.
//!
//! One shared uppercase alphabet covers every supported radix; a digit
//! string in radix `r` may only use the first `r` symbols.

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use crate::error::KaratsubaError;

/// Digit symbols in value order. Radix `r` uses the first `r` entries.
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest radix with a meaningful positional representation.
pub const MIN_RADIX: u32 = 2;
/// Largest radix the alphabet can express.
pub const MAX_RADIX: u32 = 36;

/// Parses a textual radix selector into a validated radix.
pub fn parse_radix(s: &str) -> Result<u32, KaratsubaError> {
    s.trim()
        .parse::<u32>()
        .ok()
        .filter(|r| (MIN_RADIX..=MAX_RADIX).contains(r))
        .ok_or_else(|| KaratsubaError::InvalidRadix(s.to_string()))
}

fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        _ => None,
    }
}

/// Decodes a digit string in the given radix.
///
/// Input is case-insensitive; leading zeros are permitted and do not
/// affect the value. The radix must already be validated, see
/// [`parse_radix`].
pub fn decode(s: &str, radix: u32) -> Result<BigUint, KaratsubaError> {
    assert!(
        (MIN_RADIX..=MAX_RADIX).contains(&radix),
        "radix must be between 2 and 36"
    );
    if s.is_empty() {
        return Err(KaratsubaError::EmptyInput);
    }

    let big_radix = BigUint::from(radix);
    let mut value = BigUint::zero();
    for (position, c) in s.chars().enumerate() {
        let digit = digit_value(c)
            .filter(|&d| d < radix)
            .ok_or(KaratsubaError::InvalidDigit {
                digit: c,
                position,
                radix,
            })?;
        value = value * &big_radix + BigUint::from(digit);
    }
    Ok(value)
}

/// Encodes a value as its canonical uppercase digit string.
///
/// No leading zeros; zero itself encodes to `"0"`.
pub fn encode(value: &BigUint, radix: u32) -> String {
    assert!(
        (MIN_RADIX..=MAX_RADIX).contains(&radix),
        "radix must be between 2 and 36"
    );
    if value.is_zero() {
        return "0".to_string();
    }

    let big_radix = BigUint::from(radix);
    let mut digits = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        let digit = (&rest % &big_radix)
            .to_usize()
            .expect("remainder is below the radix");
        digits.push(ALPHABET[digit] as char);
        rest /= &big_radix;
    }
    digits.iter().rev().collect()
}

/// Encodes a signed value, rejecting negatives.
///
/// The multiplication engine only ever encodes unsigned intermediates;
/// this entry point guards independently so the codec stays safe to
/// reuse on values of unknown sign.
pub fn encode_signed(value: &BigInt, radix: u32) -> Result<String, KaratsubaError> {
    match value.to_biguint() {
        Some(magnitude) => Ok(encode(&magnitude, radix)),
        None => Err(KaratsubaError::NegativeValue(value.clone())),
    }
}

/// Number of digits needed to represent `value` in `radix`.
///
/// Zero takes one digit.
pub fn digit_length(value: &BigUint, radix: u32) -> usize {
    assert!(
        (MIN_RADIX..=MAX_RADIX).contains(&radix),
        "radix must be between 2 and 36"
    );
    if value.is_zero() {
        return 1;
    }
    let big_radix = BigUint::from(radix);
    let mut rest = value.clone();
    let mut count = 0;
    while !rest.is_zero() {
        rest /= &big_radix;
        count += 1;
    }
    count
}
