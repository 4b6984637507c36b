//! Positional notation parser: glyph string → signed integer.
//!
//! The input is read most-significant digit first. A leading negative-sign
//! glyph negates the result, a leading positive-sign glyph is consumed with
//! no effect. Each remaining glyph contributes `value * base^i`, where `i`
//! counts from the rightmost glyph.

use std::collections::{HashMap, HashSet};

use super::invert::invert;
use super::table::{NEGATIVE_SIGN, POSITIVE_SIGN, single_char};
use super::{GlyphError, GlyphResult, GlyphTable};

/// Leading sign of a glyph string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Negative,
    ExplicitPositive,
    Implicit,
}

/// Parse `text` as a number written in `base` with the glyphs of `table`.
///
/// The table is validated on every call: each key must be one character and
/// no key may repeat. Keys are compared as exact strings, so distinct code
/// points that render alike (`K` and U+212A KELVIN SIGN) are separate glyphs.
/// Every glyph is resolved before any arithmetic, so an unknown glyph is
/// reported even when the digits before it would overflow. The base is not checked
/// against the table; a glyph whose value is outside `0..base` still
/// contributes its value.
///
/// An empty string, or one holding only a sign glyph, parses to `0`.
///
/// ```
/// use glyphnum::glyph::{parse, NamedTable};
///
/// assert_eq!(parse(NamedTable::Hexadecimal.table(), 16, "fF").unwrap(), 255);
/// assert_eq!(parse(NamedTable::Decimal.table(), 10, "-10").unwrap(), -10);
/// ```
pub fn parse(table: &GlyphTable, base: u32, text: &str) -> GlyphResult<i64> {
    let digits = digit_lookup(table)?;

    let signs = invert(table);
    let negative = signs.get(&NEGATIVE_SIGN).and_then(|g| single_char(g));
    let positive = signs.get(&POSITIVE_SIGN).and_then(|g| single_char(g));

    let first = text.chars().next();
    let sign = match first {
        Some(c) if Some(c) == negative => Sign::Negative,
        Some(c) if Some(c) == positive => Sign::ExplicitPositive,
        _ => Sign::Implicit,
    };
    let offset = match (sign, first) {
        (Sign::Implicit, _) | (_, None) => 0,
        (_, Some(c)) => c.len_utf8(),
    };

    tracing::trace!(
        glyphs = table.len(),
        base,
        len = text.len(),
        ?sign,
        "parsing glyph string"
    );

    let overflow = || GlyphError::ArithmeticOverflow {
        text: text.to_string(),
    };

    let values = text[offset..]
        .char_indices()
        .map(|(index, c)| {
            digits
                .get(&c)
                .copied()
                .ok_or_else(|| GlyphError::CharacterOutOfRange {
                    character: c,
                    text: text.to_string(),
                    span: (offset + index, c.len_utf8()).into(),
                })
        })
        .collect::<GlyphResult<Vec<i64>>>()?;

    // Horner's scheme: equal to the positional sum, but leading zero
    // glyphs never raise the running power.
    let base = i128::from(base);
    let mut acc: i128 = 0;
    for value in values {
        acc = acc
            .checked_mul(base)
            .and_then(|a| a.checked_add(i128::from(value)))
            .ok_or_else(overflow)?;
    }

    if sign == Sign::Negative {
        acc = acc.checked_neg().ok_or_else(overflow)?;
    }
    i64::try_from(acc).map_err(|_| overflow())
}

/// Validate `table` and index its glyphs by character.
fn digit_lookup(table: &GlyphTable) -> GlyphResult<HashMap<char, i64>> {
    let mut digits = HashMap::with_capacity(table.len());
    for (glyph, value) in table {
        let c = single_char(glyph).ok_or_else(|| GlyphError::MalformedGlyphSet {
            glyph: glyph.to_string(),
        })?;
        digits.insert(c, value);
    }

    let mut seen = HashSet::with_capacity(table.len());
    for (glyph, _) in table {
        if !seen.insert(glyph) {
            return Err(GlyphError::DuplicateGlyph {
                glyph: glyph.to_string(),
            });
        }
    }

    Ok(digits)
}
