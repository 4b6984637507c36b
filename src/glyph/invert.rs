//! Key/value inversion.

use std::collections::BTreeMap;

/// Flip a mapping so that values become keys and keys become values.
///
/// Accepts anything that yields `(key, value)` pairs: a [`GlyphTable`](super::GlyphTable)
/// by reference, a `HashMap`, a `Vec` of tuples, ... When several keys share
/// a value, the one yielded last survives.
///
/// ```
/// use glyphnum::glyph::{chars, invert, GlyphTable};
///
/// let table = GlyphTable::from_symbols(chars("01")).unwrap();
/// let inverted = invert(&table);
/// assert_eq!(inverted[&-1], "-");
/// assert_eq!(inverted[&1], "1");
/// ```
pub fn invert<I, K, V>(pairs: I) -> BTreeMap<V, K>
where
    I: IntoIterator<Item = (K, V)>,
    V: Ord,
{
    let mut out = BTreeMap::new();
    for (key, value) in pairs {
        out.insert(value, key);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{GlyphTable, chars};

    #[test]
    fn swaps_keys_and_values() {
        let inverted = invert([("a", 'b'), ("c", 'd')]);
        assert_eq!(inverted.len(), 2);
        assert_eq!(inverted[&'b'], "a");
        assert_eq!(inverted[&'d'], "c");
    }

    #[test]
    fn last_key_wins_for_shared_values() {
        let inverted = invert([("first", 1), ("second", 1), ("third", 2)]);
        assert_eq!(inverted[&1], "second");
        assert_eq!(inverted[&2], "third");
    }

    #[test]
    fn finds_sign_glyphs_of_a_table() {
        let table = GlyphTable::from_symbols(chars("0123456789")).unwrap();
        let inverted = invert(&table);
        assert_eq!(inverted.get(&-1), Some(&"-"));
        assert_eq!(inverted.get(&-2), Some(&"+"));
    }

    #[test]
    fn insensitive_table_prefers_uppercase() {
        let table = GlyphTable::from_insensitive_symbols(chars("ab")).unwrap();
        let inverted = invert(&table);
        assert_eq!(inverted[&0], "A");
        assert_eq!(inverted[&1], "B");
    }

    #[test]
    fn double_inversion_recovers_sign_free_table() {
        let original = GlyphTable::from_entries([("x", 0), ("y", 1), ("z", 2)]);
        let twice = invert(invert(&original));
        let recovered: Vec<(&str, i64)> = twice.into_iter().collect();
        assert_eq!(recovered, [("x", 0), ("y", 1), ("z", 2)]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let inverted: BTreeMap<i64, &str> = invert(Vec::new());
        assert!(inverted.is_empty());
    }
}
