//! Two-pass rendering of custom picture patterns.
//!
//! The first pass scans the selected section for placeholder counts, the
//! decimal-point position, grouping versus scaling commas, percent/per-mille
//! scale adjustments and an exponent marker; rounding happens at the
//! position those counts dictate. The second pass walks the section again,
//! emitting digits into placeholder slots and copying everything else
//! through. A value that rounds to zero under a negative section restarts
//! against the zero section when the pattern has one.

use crate::parser::pattern::parse_sections;
use crate::profile::FormattingProfile;
use crate::types::{DigitBuffer, PatternToken};

use super::standard::{group_boundaries, write_exponent};

struct SectionScan {
    digit_count: i32,
    decimal_pos: i32,
    /// Placeholder index of the first `0` left of the decimal point,
    /// `i32::MAX` when the section has none.
    first_digit: i32,
    /// Placeholder index one past the last `0`; zero when there is none.
    last_digit: i32,
    scientific: bool,
    scale_adjust: i32,
    thousand_seps: bool,
}

fn scan_section(tokens: &[PatternToken]) -> SectionScan {
    let mut digit_count = 0i32;
    let mut decimal_pos = -1i32;
    let mut first_digit = i32::MAX;
    let mut last_digit = 0i32;
    let mut scientific = false;
    let mut thousand_pos = -1i32;
    let mut thousand_count = 0i32;
    let mut thousand_seps = false;
    let mut scale_adjust = 0i32;

    for token in tokens {
        match token {
            PatternToken::DigitIfPresent => digit_count += 1,
            PatternToken::DigitOrZero => {
                if first_digit == i32::MAX {
                    first_digit = digit_count;
                }
                digit_count += 1;
                last_digit = digit_count;
            }
            PatternToken::DecimalPoint => {
                if decimal_pos < 0 {
                    decimal_pos = digit_count;
                }
            }
            PatternToken::GroupOrScale => {
                // A comma run directly at the decimal point scales by 1000
                // per comma; anywhere else between digits it turns on
                // grouping. Which of the two applies is only known once the
                // decimal position is fixed, below.
                if digit_count > 0 && decimal_pos < 0 {
                    if thousand_pos >= 0 {
                        if thousand_pos == digit_count {
                            thousand_count += 1;
                            continue;
                        }
                        thousand_seps = true;
                    }
                    thousand_pos = digit_count;
                    thousand_count = 1;
                }
            }
            PatternToken::Percent => scale_adjust += 2,
            PatternToken::PerMille => scale_adjust += 3,
            PatternToken::Exponent { .. } => scientific = true,
            PatternToken::Quoted(_) | PatternToken::Literal(_) => {}
        }
    }

    if decimal_pos < 0 {
        decimal_pos = digit_count;
    }
    if thousand_pos >= 0 {
        if thousand_pos == decimal_pos {
            scale_adjust -= thousand_count * 3;
        } else {
            thousand_seps = true;
        }
    }

    SectionScan {
        digit_count,
        decimal_pos,
        first_digit,
        last_digit,
        scientific,
        scale_adjust,
        thousand_seps,
    }
}

/// Render `buf` with a custom picture pattern.
pub(super) fn render_pattern(
    buf: &mut DigitBuffer,
    pattern: &str,
    profile: &FormattingProfile,
) -> String {
    let sections = parse_sections(pattern);
    let resolve = |index: usize| -> usize {
        if index == 0 {
            return 0;
        }
        match sections.get(index) {
            Some(section) if !section.tokens.is_empty() => index,
            _ => 0,
        }
    };

    let mut section_index = resolve(if buf.is_zero() {
        2
    } else if buf.sign {
        1
    } else {
        0
    });

    let (tokens, scan) = loop {
        let tokens = &sections[section_index].tokens;
        let scan = scan_section(tokens);
        if !buf.is_zero() {
            buf.scale += scan.scale_adjust;
            let pos = if scan.scientific {
                scan.digit_count
            } else {
                buf.scale + scan.digit_count - scan.decimal_pos
            };
            buf.round(pos);
            if buf.is_zero() {
                // Rounded away to zero: a distinct zero section takes over.
                let zero_index = resolve(2);
                if zero_index != section_index {
                    section_index = zero_index;
                    continue;
                }
            }
        } else {
            buf.sign = false;
            buf.scale = 0;
        }
        break (tokens, scan);
    };

    emit_section(buf, tokens, &scan, section_index == 0, profile)
}

fn emit_section(
    buf: &DigitBuffer,
    tokens: &[PatternToken],
    scan: &SectionScan,
    is_first_section: bool,
    profile: &FormattingProfile,
) -> String {
    // Zero-padding ranges relative to the decimal point: `first_digit`
    // integer positions always emit, `last_digit` (non-positive) fraction
    // positions always emit.
    let first_digit = if scan.first_digit < scan.decimal_pos {
        scan.decimal_pos - scan.first_digit
    } else {
        0
    };
    let last_digit = if scan.last_digit > scan.decimal_pos {
        scan.decimal_pos - scan.last_digit
    } else {
        0
    };

    // `adjust` is the digit surplus over the integer placeholders: positive
    // means extra digits dump out before the first placeholder, negative
    // means placeholders pad from the zero range.
    let (mut dig_pos, mut adjust) = if scan.scientific {
        (scan.decimal_pos, 0)
    } else {
        (buf.scale.max(scan.decimal_pos), buf.scale - scan.decimal_pos)
    };

    let mut boundaries: Vec<i32> = Vec::new();
    if scan.thousand_seps && !profile.group_sizes.is_empty() {
        let total_digits = dig_pos + adjust.min(0);
        let num_digits = first_digit.max(total_digits);
        boundaries = group_boundaries(num_digits, &profile.group_sizes);
    }
    let mut sep_index = boundaries.len();

    let ds = buf.digits();
    let mut dig = 0usize;
    let mut out = String::new();

    if buf.sign && is_first_section {
        out.push_str(&profile.negative_sign);
    }

    let mut decimal_written = false;
    let mut exponent_rendered = false;

    for token in tokens {
        if adjust > 0
            && matches!(
                token,
                PatternToken::DigitOrZero
                    | PatternToken::DigitIfPresent
                    | PatternToken::DecimalPoint
            )
        {
            // More digits than integer placeholders: the surplus comes out
            // right before the first placeholder, grouped normally.
            while adjust > 0 {
                if dig < ds.len() {
                    out.push(ds[dig] as char);
                    dig += 1;
                } else {
                    out.push('0');
                }
                if scan.thousand_seps
                    && dig_pos > 1
                    && sep_index > 0
                    && dig_pos == boundaries[sep_index - 1] + 1
                {
                    out.push_str(&profile.group_separator);
                    sep_index -= 1;
                }
                dig_pos -= 1;
                adjust -= 1;
            }
        }

        match token {
            PatternToken::DigitOrZero | PatternToken::DigitIfPresent => {
                let emit: Option<char>;
                if adjust < 0 {
                    adjust += 1;
                    emit = if dig_pos <= first_digit {
                        Some('0')
                    } else {
                        None
                    };
                } else if dig < ds.len() {
                    let c = ds[dig] as char;
                    dig += 1;
                    emit = Some(c);
                } else if dig_pos > last_digit {
                    emit = Some('0');
                } else {
                    emit = None;
                }

                if let Some(c) = emit {
                    out.push(c);
                    if scan.thousand_seps
                        && dig_pos > 1
                        && sep_index > 0
                        && dig_pos == boundaries[sep_index - 1] + 1
                    {
                        out.push_str(&profile.group_separator);
                        sep_index -= 1;
                    }
                }
                dig_pos -= 1;
            }
            PatternToken::DecimalPoint => {
                if dig_pos == 0 && !decimal_written {
                    // Only when the fraction has forced zeros or digits
                    // remain to emit.
                    if last_digit < 0 || (scan.decimal_pos < scan.digit_count && dig < ds.len()) {
                        out.push_str(&profile.decimal_separator);
                        decimal_written = true;
                    }
                }
            }
            PatternToken::PerMille => out.push_str(&profile.per_mille_symbol),
            PatternToken::Percent => out.push_str(&profile.percent_symbol),
            PatternToken::GroupOrScale => {}
            PatternToken::Quoted(text) => out.push_str(text),
            PatternToken::Literal(c) => out.push(*c),
            PatternToken::Exponent {
                marker,
                sign,
                zeros,
            } => {
                if scan.scientific && !exponent_rendered {
                    let min_digits = (*zeros).min(10) as i32;
                    let positive_sign = if *sign == Some('+') {
                        Some(profile.positive_sign.as_str())
                    } else {
                        None
                    };
                    let exponent = if ds.is_empty() {
                        0
                    } else {
                        buf.scale - scan.decimal_pos
                    };
                    write_exponent(
                        &mut out,
                        exponent,
                        *marker,
                        positive_sign,
                        &profile.negative_sign,
                        min_digits,
                    );
                    exponent_rendered = true;
                } else {
                    // A second marker run renders as plain text.
                    out.push(*marker);
                    if let Some(s) = sign {
                        out.push(*s);
                    }
                    for _ in 0..*zeros {
                        out.push('0');
                    }
                }
            }
        }
    }

    out
}
