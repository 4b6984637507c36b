//! Glyph tables and the builders that produce them.
//!
//! A [`GlyphTable`] keeps its entries in insertion order. Builders assign
//! each symbol its 0-based position as digit value and append the two sign
//! glyphs last. Literal tables ([`GlyphTable::from_entries`]) keep every entry
//! verbatim and are only validated when handed to [`parse`](super::parse).

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{GlyphError, GlyphResult};

/// Reserved value marking the negative-sign glyph.
pub const NEGATIVE_SIGN: i64 = -1;

/// Reserved value marking the explicit positive-sign glyph.
pub const POSITIVE_SIGN: i64 = -2;

/// Negative-sign glyph used when a builder is not given one.
pub const DEFAULT_NEGATIVE: &str = "-";

/// Positive-sign glyph used when a builder is not given one.
pub const DEFAULT_POSITIVE: &str = "+";

/// Mapping from single-character glyphs to digit values.
///
/// Iteration order is insertion order. Once built, a table is never mutated;
/// callers that need a variant build a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    entries: Vec<(String, i64)>,
}

impl GlyphTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from literal `(glyph, value)` pairs.
    ///
    /// Entries are kept exactly as given, duplicates and malformed keys
    /// included. Use this for hand-written tables that do not follow the
    /// position-as-value convention.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build a case-sensitive table with the default `-`/`+` sign glyphs.
    pub fn from_symbols<I, S>(symbols: I) -> GlyphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build_table(symbols, DEFAULT_NEGATIVE, DEFAULT_POSITIVE)
    }

    /// Build a case-insensitive table with the default `-`/`+` sign glyphs.
    pub fn from_insensitive_symbols<I, S>(symbols: I) -> GlyphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build_insensitive_table(symbols, DEFAULT_NEGATIVE, DEFAULT_POSITIVE)
    }

    /// [`build_table`] with custom sign glyphs.
    pub fn from_symbols_with_signs<I, S>(
        symbols: I,
        negative: &str,
        positive: &str,
    ) -> GlyphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build_table(symbols, negative, positive)
    }

    /// [`build_insensitive_table`] with custom sign glyphs.
    pub fn from_insensitive_symbols_with_signs<I, S>(
        symbols: I,
        negative: &str,
        positive: &str,
    ) -> GlyphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build_insensitive_table(symbols, negative, positive)
    }

    /// Value of `glyph`, if present.
    ///
    /// For a literal table with repeated keys the last entry wins.
    pub fn get(&self, glyph: &str) -> Option<i64> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == glyph)
            .map(|(_, v)| *v)
    }

    /// Whether `glyph` has an entry.
    pub fn contains(&self, glyph: &str) -> bool {
        self.get(glyph).is_some()
    }

    /// Number of entries, sign glyphs included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(glyph, value)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(entry_ref)
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for GlyphTable {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

impl<'a> IntoIterator for &'a GlyphTable {
    type Item = (&'a str, i64);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, i64)>,
        fn(&'a (String, i64)) -> (&'a str, i64),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_ref as fn(&'a (String, i64)) -> (&'a str, i64))
    }
}

fn entry_ref(entry: &(String, i64)) -> (&str, i64) {
    (entry.0.as_str(), entry.1)
}

/// Accumulates builder output with an index of entry positions.
#[derive(Default)]
struct TableBuilder {
    entries: Vec<(String, i64)>,
    positions: HashMap<String, usize>,
}

impl TableBuilder {
    /// Insert or replace a glyph. A replaced entry keeps its position.
    fn insert(&mut self, glyph: String, value: i64) {
        match self.positions.get(&glyph) {
            Some(&at) => self.entries[at].1 = value,
            None => {
                self.positions.insert(glyph.clone(), self.entries.len());
                self.entries.push((glyph, value));
            }
        }
    }

    /// Append the sign glyphs and hand out the table.
    fn finish(mut self, negative: &str, positive: &str) -> GlyphResult<GlyphTable> {
        require_glyph(negative)?;
        require_glyph(positive)?;
        self.insert(negative.to_string(), NEGATIVE_SIGN);
        self.insert(positive.to_string(), POSITIVE_SIGN);
        Ok(GlyphTable {
            entries: self.entries,
        })
    }
}

impl Serialize for GlyphTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (glyph, value) in &self.entries {
            map.serialize_entry(glyph, value)?;
        }
        map.end()
    }
}

/// Split an alphabet literal into one-character symbols.
pub fn chars(alphabet: &str) -> impl Iterator<Item = String> + '_ {
    alphabet.chars().map(String::from)
}

/// The single character making up `glyph`, or `None` if it has any other length.
pub(crate) fn single_char(glyph: &str) -> Option<char> {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn require_glyph(glyph: &str) -> GlyphResult<char> {
    single_char(glyph).ok_or_else(|| GlyphError::MalformedGlyphSet {
        glyph: glyph.to_string(),
    })
}

/// Build a case-sensitive table: `symbols[i]` maps to `i`.
///
/// `negative` and `positive` are inserted last and silently replace a data
/// glyph with the same key.
pub fn build_table<I, S>(symbols: I, negative: &str, positive: &str) -> GlyphResult<GlyphTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TableBuilder::default();
    for (position, symbol) in symbols.into_iter().enumerate() {
        let glyph = require_glyph(symbol.as_ref())?;
        builder.insert(glyph.to_string(), position as i64);
    }
    builder.finish(negative, positive)
}

/// Build a case-insensitive table.
///
/// Each symbol is inserted as its lowercase form, then its uppercase form,
/// both mapped to the symbol's position. A case mapping that expands to
/// several characters (`ß` → `SS`) is skipped. Only these two forms are
/// inserted, so a titlecase letter such as `ǅ` maps through `ǆ` and `Ǆ`
/// but is not a key itself. Sign glyphs are inserted once, unchanged.
pub fn build_insensitive_table<I, S>(
    symbols: I,
    negative: &str,
    positive: &str,
) -> GlyphResult<GlyphTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TableBuilder::default();
    for (position, symbol) in symbols.into_iter().enumerate() {
        let glyph = require_glyph(symbol.as_ref())?;
        let value = position as i64;

        let lower: String = glyph.to_lowercase().collect();
        let upper: String = glyph.to_uppercase().collect();
        for form in [lower, upper] {
            if single_char(&form).is_some() {
                builder.insert(form, value);
            }
        }
    }
    builder.finish(negative, positive)
}
