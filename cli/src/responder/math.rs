//! # Arithmetic
//!
//! File: cli/src/responder/math.rs
//!
//! ## Overview
//!
//! Solves one-operator arithmetic written in plain text. Attempts run in a
//! fixed order and the first one that produces an answer wins:
//!
//! 1. `+`: sum of every numeric whitespace token
//! 2. exactly one `-`: left minus right
//! 3. `*`: exactly two operands
//! 4. `/`: exactly two operands, zero divisor refused
//! 5. `square`: first numeric token squared
//! 6. `sqrt` / `square root`: first numeric token's root
//!
//! An attempt whose operands are not numbers falls through to the next one.
//! The exceptions are `*` and `/` with two non-numeric operands, and a square
//! too large for a float: both yield the generic "couldn't solve that" reply.
//!
use crate::core::error::CodepalError;

pub const USAGE_HINT: &str = "I can help with: addition (+), subtraction (-), multiplication (*), division (/), square, square root. Example: '5 + 3'";
pub const FALLBACK: &str = "Sorry, I couldn't solve that. Try: '5 + 3' or '10 * 2'";
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero!";
pub const NEGATIVE_ROOT: &str = "Cannot find square root of negative number!";

/// `compute_math(text)`: the reply for an arithmetic request.
pub fn compute_math(text: &str) -> String {
    match solve(text) {
        Ok(Some(reply)) => reply,
        Ok(None) => USAGE_HINT.to_string(),
        Err(_) => FALLBACK.to_string(),
    }
}

type Attempt = fn(&str) -> Result<Option<String>, CodepalError>;

const ATTEMPTS: &[Attempt] = &[
    try_add,
    try_subtract,
    try_multiply,
    try_divide,
    try_square,
    try_square_root,
];

fn solve(text: &str) -> Result<Option<String>, CodepalError> {
    for attempt in ATTEMPTS {
        if let Some(reply) = attempt(text)? {
            return Ok(Some(reply));
        }
    }
    Ok(None)
}

fn try_add(text: &str) -> Result<Option<String>, CodepalError> {
    if !text.contains('+') {
        return Ok(None);
    }
    let numbers: Vec<f64> = text
        .replace('+', " ")
        .split_whitespace()
        .filter_map(parse_number)
        .collect();
    if numbers.is_empty() {
        // An empty sum stays an integer.
        return Ok(Some("Result: 0".to_string()));
    }
    Ok(Some(format!("Result: {}", format_number(numbers.iter().sum()))))
}

fn try_subtract(text: &str) -> Result<Option<String>, CodepalError> {
    if text.matches('-').count() != 1 {
        return Ok(None);
    }
    let Some((left, right)) = text.split_once('-') else {
        return Ok(None);
    };
    match (parse_number(left.trim()), parse_number(right.trim())) {
        (Some(a), Some(b)) => Ok(Some(format!("Result: {}", format_number(a - b)))),
        _ => Ok(None),
    }
}

fn try_multiply(text: &str) -> Result<Option<String>, CodepalError> {
    let Some((a, b)) = two_operands(text, '*')? else {
        return Ok(None);
    };
    Ok(Some(format!("Result: {}", format_number(a * b))))
}

fn try_divide(text: &str) -> Result<Option<String>, CodepalError> {
    let Some((a, b)) = two_operands(text, '/')? else {
        return Ok(None);
    };
    if b == 0.0 {
        return Ok(Some(DIVIDE_BY_ZERO.to_string()));
    }
    Ok(Some(format!("Result: {}", format_number(a / b))))
}

fn try_square(text: &str) -> Result<Option<String>, CodepalError> {
    if !text.contains("square") {
        return Ok(None);
    }
    let Some(n) = first_number(text) else {
        return Ok(None);
    };
    let squared = n * n;
    if n.is_finite() && squared.is_infinite() {
        return Err(CodepalError::Overflow(format_number(n)));
    }
    Ok(Some(format!(
        "Square of {} is {}",
        format_number(n),
        format_number(squared)
    )))
}

fn try_square_root(text: &str) -> Result<Option<String>, CodepalError> {
    if !text.contains("sqrt") && !text.contains("square root") {
        return Ok(None);
    }
    Ok(first_number(text).map(|n| {
        if n >= 0.0 {
            format!("Square root of {} is {}", format_number(n), format_number(n.sqrt()))
        } else {
            NEGATIVE_ROOT.to_string()
        }
    }))
}

/// Splits on `op` into exactly two parsed operands. `Ok(None)` when `op` is
/// absent or splits into another number of parts.
fn two_operands(text: &str, op: char) -> Result<Option<(f64, f64)>, CodepalError> {
    let parts: Vec<&str> = text.split(op).collect();
    if parts.len() != 2 {
        return Ok(None);
    }
    Ok(Some((require_number(parts[0])?, require_number(parts[1])?)))
}

fn require_number(part: &str) -> Result<f64, CodepalError> {
    let part = part.trim();
    parse_number(part).ok_or_else(|| CodepalError::NotANumber(part.to_string()))
}

fn first_number(text: &str) -> Option<f64> {
    text.split_whitespace().find_map(parse_number)
}

/// Accepts the same spellings as a float literal read from user input:
/// `5`, `-4`, `2.5`, `1e3`, `inf`, `nan`, and `1_000` with single
/// underscores between digits.
pub fn parse_number(token: &str) -> Option<f64> {
    if !token.contains('_') {
        return token.parse::<f64>().ok();
    }
    let bytes = token.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separated {
        return None;
    }
    token.replace('_', "").parse::<f64>().ok()
}

/// Renders a float the way the chat replies always have: integral values keep
/// a trailing `.0` (`8.0`), others print in shortest round-trip form.
/// Exponents carry a sign and at least two digits (`1e+16`, `1e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_sums_numeric_tokens() {
        assert_eq!(compute_math("5 + 3"), "Result: 8.0");
        assert_eq!(compute_math("add 1+2+3.5 please"), "Result: 6.5");
        assert_eq!(compute_math("what is + ?"), "Result: 0");
    }

    #[test]
    fn test_subtraction_needs_exactly_one_minus() {
        assert_eq!(compute_math("10 - 2"), "Result: 8.0");
        assert_eq!(compute_math("10 - 2 - 1"), USAGE_HINT);
    }

    #[test]
    fn test_multiplication_and_division() {
        assert_eq!(compute_math("5 * 4"), "Result: 20.0");
        assert_eq!(compute_math("20 / 8"), "Result: 2.5");
        assert_eq!(compute_math("10 / 0"), DIVIDE_BY_ZERO);
        assert_eq!(compute_math("2 * 3 * 4"), USAGE_HINT);
    }

    #[test]
    fn test_unparsable_operands_use_the_fallback() {
        assert_eq!(compute_math("multiply two * three"), FALLBACK);
        assert_eq!(compute_math("a / b"), FALLBACK);
    }

    #[test]
    fn test_square_and_square_root() {
        assert_eq!(compute_math("square 9"), "Square of 9.0 is 81.0");
        assert_eq!(compute_math("sqrt 16"), "Square root of 16.0 is 4.0");
        assert_eq!(compute_math("sqrt -4"), NEGATIVE_ROOT);
        // "square" is tried before "square root".
        assert_eq!(compute_math("square root 16"), "Square of 16.0 is 256.0");
    }

    #[test]
    fn test_nothing_applicable_gives_usage() {
        assert_eq!(compute_math("hello"), USAGE_HINT);
        assert_eq!(compute_math("square of nothing"), USAGE_HINT);
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number(8.0), "8.0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-3.5), "-3.5");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn test_exponents_are_signed_and_padded() {
        assert_eq!(compute_math("10000000000000000 + 1"), "Result: 1e+16");
        assert_eq!(compute_math("0.00001 + 0"), "Result: 1e-05");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(2.5e123), "2.5e+123");
        assert_eq!(format_number(123456.0), "123456.0");
    }

    #[test]
    fn test_squaring_past_the_float_range_fails() {
        assert_eq!(compute_math("square 1e200"), FALLBACK);
        assert_eq!(compute_math("square inf"), "Square of inf is inf");
    }

    #[test]
    fn test_underscore_digit_separators() {
        assert_eq!(compute_math("1_000 + 1"), "Result: 1001.0");
        assert_eq!(parse_number("1_000.5"), Some(1000.5));
        assert_eq!(parse_number("1__000"), None);
        assert_eq!(parse_number("_1"), None);
        assert_eq!(parse_number("1_"), None);
    }
}
