//! Tokenizer for custom picture patterns.
//!
//! A pattern is split on unquoted `;` into sections, and each section into
//! [`PatternToken`]s. The tokenizer never rejects input: anything that is
//! not a recognized placeholder copies through as a literal, and an
//! unterminated quote swallows the rest of the section rather than failing.

use winnow::combinator::{alt, opt};
use winnow::error::{ContextError, ErrMode, ParserError};
use winnow::token::{any, none_of, one_of, take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::types::{PatternSection, PatternToken};

pub fn parse_digit_or_zero(input: &mut &str) -> ModalResult<PatternToken> {
    one_of('0')
        .value(PatternToken::DigitOrZero)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_if_present(input: &mut &str) -> ModalResult<PatternToken> {
    one_of('#')
        .value(PatternToken::DigitIfPresent)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal_point(input: &mut &str) -> ModalResult<PatternToken> {
    one_of('.')
        .value(PatternToken::DecimalPoint)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_group_or_scale(input: &mut &str) -> ModalResult<PatternToken> {
    one_of(',')
        .value(PatternToken::GroupOrScale)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_percent(input: &mut &str) -> ModalResult<PatternToken> {
    one_of('%')
        .value(PatternToken::Percent)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_per_mille(input: &mut &str) -> ModalResult<PatternToken> {
    one_of('\u{2030}')
        .value(PatternToken::PerMille)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// `E`/`e` counts as an exponent marker only when an optional sign and at
/// least one `0` follow; otherwise the marker is an ordinary literal.
pub fn parse_exponent(input: &mut &str) -> ModalResult<PatternToken> {
    let start = *input;
    let marker = one_of(['E', 'e']).parse_next(input)?;
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let zeros: ModalResult<&str> = take_while(1.., '0').parse_next(input);
    match zeros {
        Ok(zeros) => Ok(PatternToken::Exponent {
            marker,
            sign,
            zeros: zeros.len(),
        }),
        Err(_) => {
            *input = start;
            Err(ErrMode::Backtrack(ContextError::from_input(&start)))
        }
    }
}

/// Quoted text copies through verbatim. A missing closing quote is
/// tolerated: the run extends to the end of the input.
pub fn parse_quoted(input: &mut &str) -> ModalResult<PatternToken> {
    let quote = one_of(['\'', '"']).parse_next(input)?;
    let content: &str = take_till(0.., quote).parse_next(input)?;
    let _: Option<char> = opt(one_of(quote)).parse_next(input)?;
    Ok(PatternToken::Quoted(content.to_string()))
}

/// A backslash escapes the next character; a trailing backslash at the end
/// of the pattern emits nothing.
pub fn parse_escaped(input: &mut &str) -> ModalResult<PatternToken> {
    let _ = one_of('\\').parse_next(input)?;
    let escaped: Option<char> = opt(any).parse_next(input)?;
    Ok(match escaped {
        Some(c) => PatternToken::Literal(c),
        None => PatternToken::Quoted(String::new()),
    })
}

/// Catch-all: any character except the section separator copies through.
pub fn parse_literal_char(input: &mut &str) -> ModalResult<PatternToken> {
    none_of(';')
        .map(PatternToken::Literal)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_pattern_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        parse_quoted,
        parse_escaped,
        parse_exponent,
        parse_digit_or_zero,
        parse_digit_if_present,
        parse_decimal_point,
        parse_group_or_scale,
        parse_percent,
        parse_per_mille,
        parse_literal_char,
    ))
    .parse_next(input)
}

/// Split a pattern into its `;`-separated sections and tokenize each one.
///
/// Separators inside quotes or behind a backslash do not split. A trailing
/// separator produces a trailing empty section, which section selection
/// later treats as "fall back to the first section".
pub fn parse_sections(pattern: &str) -> Vec<PatternSection> {
    let mut input = pattern;
    let mut sections = Vec::new();
    let mut current = PatternSection::default();
    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix(';') {
            input = rest;
            sections.push(std::mem::take(&mut current));
            continue;
        }
        match parse_pattern_token(&mut input) {
            Ok(token) => current.tokens.push(token),
            // Unreachable: the catch-all accepts any non-separator character.
            Err(_) => break,
        }
    }
    sections.push(current);
    sections
}
