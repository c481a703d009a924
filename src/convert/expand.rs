//! Decimal expansion of a finite double.
//!
//! Classic long-division digit extraction: the integer part is peeled off one
//! digit at a time by dividing by ten, the fraction by multiplying by ten,
//! until the requested number of significant digits is produced. The final
//! digit position is rounded half away from zero with leftward carry. The
//! extraction works in native double arithmetic; the small fudge term in the
//! integer-digit step absorbs the rounding drift of the repeated divisions.

use crate::types::DigitBuffer;

/// Enough slots for every integer digit of the largest double plus the
/// requested fraction digits.
const EXPANSION_SLOTS: usize = 350;

/// Expand `value` (finite, any sign) to `ndigits` significant decimal digits.
///
/// Fills `out.digits`, `out.scale` and `out.sign`; a zero value leaves the
/// digit sequence empty with a cleared sign. Trailing zero digits among the
/// significant run are trimmed.
pub(crate) fn expand(value: f64, ndigits: usize, out: &mut DigitBuffer) {
    let ndigits = ndigits.min(EXPANSION_SLOTS - 2);
    let mut buf = [b'0'; EXPANSION_SLOTS];
    let mut decpt: i32 = 0;

    let mut arg = value;
    if arg == 0.0 {
        out.scale = 0;
        out.sign = false;
        return;
    }
    if arg < 0.0 {
        out.sign = true;
        arg = -arg;
    }

    let mut fi = arg.trunc();
    arg = arg.fract();
    let mut p = 0usize;

    if fi != 0.0 {
        // Integer digits come out least significant first; collect them at
        // the back of the buffer, then slide them to the front.
        let mut p1 = EXPANSION_SLOTS;
        while fi != 0.0 {
            let q = fi / 10.0;
            let fj = q.fract();
            fi = q.trunc();
            p1 -= 1;
            buf[p1] = b'0' + ((fj + 0.03) * 10.0) as u8;
            decpt += 1;
        }
        buf.copy_within(p1.., 0);
        p = EXPANSION_SLOTS - p1;
    } else if arg > 0.0 {
        // Skip leading fractional zeros so the first stored digit is
        // significant.
        loop {
            let fj = arg * 10.0;
            if fj >= 1.0 {
                break;
            }
            arg = fj;
            decpt -= 1;
        }
    }
    out.scale = decpt;

    // Fraction digits, one past the requested count for the rounding step.
    while p <= ndigits && p < EXPANSION_SLOTS {
        arg *= 10.0;
        let fj = arg.trunc();
        arg -= fj;
        buf[p] = b'0' + fj as u8;
        p += 1;
    }

    // Round at the guard digit and carry left.
    let mut i = ndigits;
    buf[i] += 5;
    while buf[i] > b'9' {
        buf[i] = b'0';
        if i > 0 {
            i -= 1;
            buf[i] += 1;
        } else {
            buf[i] = b'1';
            out.scale += 1;
        }
    }

    if buf[0] != b'0' {
        for &digit in &buf[..ndigits] {
            out.push_digit(digit);
        }
    }
    out.trim_trailing_zeros();
}
