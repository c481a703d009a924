//! Scanner for numeric text.
//!
//! Accepts the shapes the formatter itself produces under the fixed,
//! number and general formats: optional surrounding whitespace, a profile
//! sign string, integer digits with optional group separators, a profile
//! decimal separator with fraction digits, and an `e`/`E` exponent. The
//! output is a [`DigitBuffer`] ready for the binary decoder.

use winnow::ModalResult;
use winnow::Parser;
use winnow::ascii::digit1;

use crate::profile::FormattingProfile;
use crate::types::{DigitBuffer, F64_PRECISION, MAX_DIGITS};

/// Exponents are capped here while scanning; anything at the cap is far
/// outside the finite double range and short-circuits in the decoder.
const EXPONENT_CAP: i32 = 9999;

fn strip(input: &mut &str, lit: &str) -> bool {
    if lit.is_empty() {
        return false;
    }
    if let Some(rest) = input.strip_prefix(lit) {
        *input = rest;
        true
    } else {
        false
    }
}

fn take_digits<'s>(input: &mut &'s str) -> Option<&'s str> {
    let run: ModalResult<&str> = digit1.parse_next(input);
    run.ok()
}

fn skip_whitespace(input: &mut &str) {
    *input = input.trim_start();
}

/// Scan `text` into a digit buffer, or `None` when the text is not a number
/// under this profile (including trailing garbage).
pub(crate) fn scan_number(text: &str, profile: &FormattingProfile) -> Option<DigitBuffer> {
    let mut input = text;
    skip_whitespace(&mut input);

    let sign = if strip(&mut input, &profile.negative_sign) {
        true
    } else {
        let _ = strip(&mut input, &profile.positive_sign);
        false
    };

    let mut int_runs: Vec<&str> = Vec::new();
    if let Some(run) = take_digits(&mut input) {
        int_runs.push(run);
        loop {
            let checkpoint = input;
            if strip(&mut input, &profile.group_separator) {
                if let Some(run) = take_digits(&mut input) {
                    int_runs.push(run);
                    continue;
                }
            }
            input = checkpoint;
            break;
        }
    }

    let mut frac_run: &str = "";
    {
        let checkpoint = input;
        if strip(&mut input, &profile.decimal_separator) {
            match take_digits(&mut input) {
                Some(run) => frac_run = run,
                // A bare trailing separator after digits is fine ("5.").
                None if int_runs.is_empty() => input = checkpoint,
                None => {}
            }
        }
    }

    if int_runs.is_empty() && frac_run.is_empty() {
        return None;
    }

    let mut exponent = 0i32;
    {
        let checkpoint = input;
        if strip(&mut input, "e") || strip(&mut input, "E") {
            let negative = if strip(&mut input, &profile.negative_sign) {
                true
            } else {
                let _ = strip(&mut input, &profile.positive_sign);
                false
            };
            match take_digits(&mut input) {
                Some(run) => {
                    let mut e = 0i32;
                    for b in run.bytes() {
                        e = (e * 10 + (b - b'0') as i32).min(EXPONENT_CAP);
                    }
                    exponent = if negative { -e } else { e };
                }
                None => input = checkpoint,
            }
        }
    }

    skip_whitespace(&mut input);
    if !input.is_empty() {
        return None;
    }

    let mut buf = DigitBuffer::new();
    buf.sign = sign;
    buf.precision = F64_PRECISION;

    // Integer digits: leading zeros are dropped, digits past the buffer
    // capacity still count toward the magnitude through the scale.
    for run in &int_runs {
        for b in run.bytes() {
            if buf.digits().is_empty() && b == b'0' {
                continue;
            }
            if buf.digits().len() < MAX_DIGITS {
                buf.push_digit(b);
            }
            buf.scale += 1;
        }
    }

    // Fraction digits: zeros before the first significant digit shift the
    // scale down, digits past the capacity are insignificant and dropped.
    for b in frac_run.bytes() {
        if buf.digits().is_empty() {
            if b == b'0' {
                buf.scale -= 1;
                continue;
            }
            buf.push_digit(b);
        } else if buf.digits().len() < MAX_DIGITS {
            buf.push_digit(b);
        }
    }

    buf.scale = buf.scale.saturating_add(exponent);
    if buf.is_zero() {
        buf.scale = 0;
    }
    Some(buf)
}
