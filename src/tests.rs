use crate::convert;
use crate::parser::scan::scan_number;
use crate::profile::FormattingProfile;
use crate::types::{DigitBuffer, FixedDecimal};

fn digit_str(buf: &DigitBuffer) -> String {
    String::from_utf8(buf.digits().to_vec()).unwrap()
}

#[test]
fn test_round_truncates_and_trims() {
    let mut buf = convert::i32_to_digits(123456789);
    buf.round(7);
    assert_eq!(digit_str(&buf), "1234568");
    assert_eq!(buf.scale, 9);

    let mut buf = convert::i32_to_digits(120000000);
    buf.round(7);
    assert_eq!(digit_str(&buf), "12");
    assert_eq!(buf.scale, 9);
}

#[test]
fn test_round_carry_through_nines() {
    let mut buf = convert::i32_to_digits(999);
    buf.round(2);
    assert_eq!(digit_str(&buf), "1");
    assert_eq!(buf.scale, 4);
}

#[test]
fn test_round_half_fraction_carries_into_scale() {
    // 0.005 rounded at position zero becomes 0.01.
    let mut buf = convert::f64_to_digits(0.005, 15);
    assert_eq!(digit_str(&buf), "5");
    assert_eq!(buf.scale, -2);
    buf.round(0);
    assert_eq!(digit_str(&buf), "1");
    assert_eq!(buf.scale, -1);
}

#[test]
fn test_round_to_zero_clears_sign_and_scale() {
    let mut buf = convert::f64_to_digits(-0.004, 15);
    assert!(buf.sign);
    buf.round(0);
    assert!(buf.is_zero());
    assert!(!buf.sign);
    assert_eq!(buf.scale, 0);
}

#[test]
fn test_integer_conversion() {
    let buf = convert::i32_to_digits(100);
    assert_eq!(digit_str(&buf), "100");
    assert_eq!(buf.scale, 3);
    assert!(!buf.sign);

    let buf = convert::i32_to_digits(-12345);
    assert_eq!(digit_str(&buf), "12345");
    assert_eq!(buf.scale, 5);
    assert!(buf.sign);

    let buf = convert::i32_to_digits(0);
    assert!(buf.is_zero());
    assert_eq!(buf.scale, 0);
}

#[test]
fn test_i64_min_conversion() {
    let buf = convert::i64_to_digits(i64::MIN);
    assert_eq!(digit_str(&buf), "9223372036854775808");
    assert_eq!(buf.scale, 19);
    assert!(buf.sign);
}

#[test]
fn test_u64_max_conversion() {
    let buf = convert::u64_to_digits(u64::MAX);
    assert_eq!(digit_str(&buf), "18446744073709551615");
    assert_eq!(buf.scale, 20);
}

#[test]
fn test_decimal_conversion() {
    // 1234.56 as mantissa 123456 with two fraction digits.
    let value = FixedDecimal::from_parts(123_456, 0, 0, false, 2).unwrap();
    let buf = convert::decimal_to_digits(&value);
    assert_eq!(digit_str(&buf), "123456");
    assert_eq!(buf.scale, 4);

    // A zero mantissa keeps its fraction scale for general formatting.
    let zero = FixedDecimal::from_parts(0, 0, 0, true, 2).unwrap();
    let buf = convert::decimal_to_digits(&zero);
    assert!(buf.is_zero());
    assert_eq!(buf.scale, -2);
    assert!(!buf.sign);
}

#[test]
fn test_decimal_wide_mantissa() {
    // 2^64 = 18446744073709551616 needs the high word chunk loop.
    let value = FixedDecimal::from_parts(0, 0, 1, false, 0).unwrap();
    let buf = convert::decimal_to_digits(&value);
    assert_eq!(digit_str(&buf), "18446744073709551616");
    assert_eq!(buf.scale, 20);
}

#[test]
fn test_double_expansion() {
    let buf = convert::f64_to_digits(0.1, 15);
    assert_eq!(digit_str(&buf), "1");
    assert_eq!(buf.scale, 0);

    let buf = convert::f64_to_digits(123456789.0, 15);
    assert_eq!(digit_str(&buf), "123456789");
    assert_eq!(buf.scale, 9);

    let buf = convert::f64_to_digits(12345.6789, 15);
    assert_eq!(digit_str(&buf), "123456789");
    assert_eq!(buf.scale, 5);

    let buf = convert::f64_to_digits(-0.0, 15);
    assert!(buf.is_zero());
    assert!(!buf.sign);
}

#[test]
fn test_double_expansion_non_finite() {
    let buf = convert::f64_to_digits(f64::NAN, 15);
    assert!(buf.is_nan);
    assert!(!buf.is_inf);

    let buf = convert::f64_to_digits(f64::NEG_INFINITY, 15);
    assert!(buf.is_inf);
    assert!(buf.sign);
}

#[test]
fn test_decode_exact_integers() {
    let buf = convert::i32_to_digits(123456789);
    assert_eq!(convert::decode::digits_to_f64(&buf), 123456789.0);

    let buf = convert::i32_to_digits(-42);
    assert_eq!(convert::decode::digits_to_f64(&buf), -42.0);
}

#[test]
fn test_decode_fractions() {
    let buf = convert::f64_to_digits(0.1, 15);
    assert_eq!(convert::decode::digits_to_f64(&buf), 0.1);

    let buf = convert::f64_to_digits(12345.6789, 15);
    assert_eq!(convert::decode::digits_to_f64(&buf), 12345.6789);
}

#[test]
fn test_scan_grouped_number() {
    let profile = FormattingProfile::default();
    let buf = scan_number("12,345.678", &profile).unwrap();
    assert_eq!(digit_str(&buf), "12345678");
    assert_eq!(buf.scale, 5);
    assert!(!buf.sign);
}

#[test]
fn test_scan_leading_zeros_and_sign() {
    let profile = FormattingProfile::default();
    let buf = scan_number("-0.05", &profile).unwrap();
    assert_eq!(digit_str(&buf), "5");
    assert_eq!(buf.scale, -1);
    assert!(buf.sign);
}

#[test]
fn test_scan_exponent() {
    let profile = FormattingProfile::default();
    let buf = scan_number("1e3", &profile).unwrap();
    assert_eq!(digit_str(&buf), "1");
    assert_eq!(buf.scale, 4);

    let buf = scan_number("2.5E-2", &profile).unwrap();
    assert_eq!(digit_str(&buf), "25");
    assert_eq!(buf.scale, -1);
}

#[test]
fn test_scan_rejects_garbage() {
    let profile = FormattingProfile::default();
    assert!(scan_number("12x", &profile).is_none());
    assert!(scan_number("", &profile).is_none());
    assert!(scan_number("-", &profile).is_none());
    assert!(scan_number("..", &profile).is_none());
}

#[test]
fn test_scan_allows_surrounding_whitespace() {
    let profile = FormattingProfile::default();
    let buf = scan_number("  42  ", &profile).unwrap();
    assert_eq!(digit_str(&buf), "42");
    assert_eq!(buf.scale, 2);
}
