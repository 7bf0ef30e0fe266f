/// Number of bits in the integer value type; shift counts must stay below it.
pub const INTEGER_BITS: i64 = 64;

/// Converts an integer operand to a float for mixed arithmetic.
///
/// Integers beyond `2^53` lose their low bits, the same as a C `(double)`
/// cast; register-sized values are still worth comparing against floats.
///
/// ## Example
/// ```
/// use asmrepl::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Parses the text of an integer token.
///
/// Accepts plain decimal digits and the `0x`, `0b` and `0o` prefixes (either
/// case). Values that do not fit in an `i64` yield `None`, except that hex,
/// binary and octal literals may spell any 64-bit pattern, so
/// `0xffffffffffffffff` is `-1`.
///
/// ## Example
/// ```
/// use asmrepl::util::num::parse_integer_literal;
///
/// assert_eq!(parse_integer_literal("42"), Some(42));
/// assert_eq!(parse_integer_literal("0x1F"), Some(31));
/// assert_eq!(parse_integer_literal("0b101"), Some(5));
/// assert_eq!(parse_integer_literal("0o17"), Some(15));
/// assert_eq!(parse_integer_literal("0xffffffffffffffff"), Some(-1));
/// assert_eq!(parse_integer_literal("9223372036854775808"), None);
/// ```
#[must_use]
pub fn parse_integer_literal(text: &str) -> Option<i64> {
    let (digits, radix) = match text.get(..2) {
        Some("0x" | "0X") => (&text[2..], 16),
        Some("0b" | "0B") => (&text[2..], 2),
        Some("0o" | "0O") => (&text[2..], 8),
        _ => return text.parse().ok(),
    };

    u64::from_str_radix(digits, radix).ok().map(u64::cast_signed)
}

/// Validates a shift count, returning it as the type the shift methods take.
///
/// ## Example
/// ```
/// use asmrepl::util::num::shift_amount;
///
/// assert_eq!(shift_amount(3), Some(3));
/// assert_eq!(shift_amount(64), None);
/// assert_eq!(shift_amount(-1), None);
/// ```
#[must_use]
pub fn shift_amount(amount: i64) -> Option<u32> {
    if (0..INTEGER_BITS).contains(&amount) {
        u32::try_from(amount).ok()
    } else {
        None
    }
}
