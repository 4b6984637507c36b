//! Positional notation renderer: signed integer → glyph string.
//!
//! The inverse of [`parse`](super::parse). Digit glyphs are looked up through
//! [`invert`](super::invert), so when a table holds several glyphs for one
//! value (case-insensitive tables) the one inserted last is emitted.

use std::collections::BTreeMap;

use super::invert::invert;
use super::table::{NEGATIVE_SIGN, POSITIVE_SIGN};
use super::{GlyphError, GlyphResult, GlyphTable};

/// Options for rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Pad with the zero glyph up to this many digits (sign not counted).
    pub min_digits: usize,
    /// Prefix non-negative values with the table's positive-sign glyph.
    pub explicit_positive: bool,
}

/// Render `value` in `base` using the glyphs of `table`.
///
/// ```
/// use glyphnum::glyph::{render, NamedTable};
///
/// assert_eq!(render(NamedTable::Decimal.table(), 10, -42).unwrap(), "-42");
/// assert_eq!(render(NamedTable::Hexadecimal.table(), 16, 255).unwrap(), "FF");
/// ```
pub fn render(table: &GlyphTable, base: u32, value: i64) -> GlyphResult<String> {
    render_with(table, base, value, &RenderConfig::default())
}

/// Render with explicit [`RenderConfig`] options.
pub fn render_with(
    table: &GlyphTable,
    base: u32,
    value: i64,
    config: &RenderConfig,
) -> GlyphResult<String> {
    if base < 2 {
        return Err(GlyphError::InvalidBase { base });
    }

    let glyphs = invert(table);
    if let Some(digit) = (0..base).find(|d| !glyphs.contains_key(&i64::from(*d))) {
        return Err(GlyphError::MissingDigit { digit });
    }

    tracing::trace!(glyphs = table.len(), base, value, "rendering value");

    let mut digits = Vec::new();
    let mut magnitude = value.unsigned_abs();
    let wide_base = u64::from(base);
    while magnitude > 0 {
        digits.push((magnitude % wide_base) as u32);
        magnitude /= wide_base;
    }
    while digits.len() < config.min_digits.max(1) {
        digits.push(0);
    }

    let mut out = String::new();
    if value < 0 {
        out.push_str(sign_glyph(&glyphs, NEGATIVE_SIGN).ok_or(GlyphError::MissingSign)?);
    } else if config.explicit_positive {
        // Without a positive glyph the value is simply left unprefixed.
        if let Some(plus) = sign_glyph(&glyphs, POSITIVE_SIGN) {
            out.push_str(plus);
        }
    }
    for digit in digits.iter().rev() {
        // Presence of every digit below `base` was checked above.
        if let Some(glyph) = glyphs.get(&i64::from(*digit)) {
            out.push_str(glyph);
        }
    }
    Ok(out)
}

fn sign_glyph<'a>(glyphs: &BTreeMap<i64, &'a str>, sign: i64) -> Option<&'a str> {
    glyphs.get(&sign).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{NamedTable, parse};

    #[test]
    fn renders_decimal() {
        let decimal = NamedTable::Decimal.table();
        assert_eq!(render(decimal, 10, 0).unwrap(), "0");
        assert_eq!(render(decimal, 10, 12345).unwrap(), "12345");
        assert_eq!(render(decimal, 10, -10).unwrap(), "-10");
    }

    #[test]
    fn renders_extremes() {
        let decimal = NamedTable::Decimal.table();
        assert_eq!(render(decimal, 10, i64::MAX).unwrap(), "9223372036854775807");
        assert_eq!(render(decimal, 10, i64::MIN).unwrap(), "-9223372036854775808");
    }

    #[test]
    fn insensitive_tables_render_uppercase() {
        assert_eq!(render(NamedTable::Hexadecimal.table(), 16, 0xbeef).unwrap(), "BEEF");
    }

    #[test]
    fn pads_and_prefixes() {
        let config = RenderConfig {
            min_digits: 8,
            explicit_positive: true,
        };
        let out = render_with(NamedTable::Binary.table(), 2, 5, &config).unwrap();
        assert_eq!(out, "+00000101");
        assert_eq!(parse(NamedTable::Binary.table(), 2, &out).unwrap(), 5);
    }

    #[test]
    fn rejects_bases_below_two() {
        assert!(matches!(
            render(NamedTable::Decimal.table(), 1, 3),
            Err(GlyphError::InvalidBase { base: 1 })
        ));
    }

    #[test]
    fn rejects_base_larger_than_alphabet() {
        assert!(matches!(
            render(NamedTable::Octal.table(), 10, 3),
            Err(GlyphError::MissingDigit { digit: 8 })
        ));
    }

    #[test]
    fn negative_needs_sign_glyph() {
        let table = GlyphTable::from_entries([("0", 0), ("1", 1)]);
        assert_eq!(render(&table, 2, 2).unwrap(), "10");
        assert!(matches!(render(&table, 2, -2), Err(GlyphError::MissingSign)));
    }

    #[test]
    fn round_trips_through_parse() {
        for named in NamedTable::ALL {
            let table = named.table();
            for value in [0, 1, -1, 63, 64, 1_000_000, -987_654_321] {
                let text = render(table, named.base(), value).unwrap();
                assert_eq!(
                    parse(table, named.base(), &text).unwrap(),
                    value,
                    "{named} via {text:?}"
                );
            }
        }
    }
}
