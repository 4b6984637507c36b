//! End-to-end tests for the public glyphnum API.
//!
//! These exercise table construction, parsing, rendering and the catalog
//! together, the way a caller outside the crate would.

use std::collections::HashMap;

use glyphnum::GlyphnumError;
use glyphnum::config::GlyphConfig;
use glyphnum::glyph::{
    self, GlyphError, GlyphTable, NamedTable, build_insensitive_table, build_table, chars,
    invert, parse, render,
};

#[test]
fn catalog_parses_reference_values() {
    assert_eq!(parse(NamedTable::Decimal.table(), 10, "12345").unwrap(), 12345);
    assert_eq!(parse(NamedTable::Hexadecimal.table(), 16, "fF").unwrap(), 0xff);
    assert_eq!(parse(NamedTable::Decimal.table(), 10, "-10").unwrap(), -10);
    assert_eq!(parse(NamedTable::Binary.table(), 2, "101010").unwrap(), 42);
    assert_eq!(parse(NamedTable::Octal.table(), 8, "755").unwrap(), 0o755);
}

#[test]
fn octal_rejects_digit_eight() {
    let err = parse(NamedTable::Octal.table(), 8, "128").unwrap_err();
    assert!(matches!(err, GlyphError::CharacterOutOfRange { character: '8', .. }));
}

#[test]
fn encodings_agree_on_the_same_value() {
    // 64^3 is the digit-1 glyph followed by three digit-0 glyphs.
    for named in [
        NamedTable::B64,
        NamedTable::EtcPasswd,
        NamedTable::Bcrypt,
        NamedTable::Bash64,
    ] {
        let text = render(named.table(), 64, 1 << 18).unwrap();
        assert_eq!(text.chars().count(), 4, "{named}");
        assert_eq!(parse(named.table(), 64, &text).unwrap(), 1 << 18, "{named}");
    }
}

#[test]
fn zbase32_is_case_insensitive() {
    let table = NamedTable::ZBase32.table();
    assert_eq!(
        parse(table, 32, "ybnd").unwrap(),
        parse(table, 32, "YBND").unwrap()
    );
    assert_eq!(parse(table, 32, "b").unwrap(), 1);
}

#[test]
fn ascii85_uses_circled_signs() {
    let table = NamedTable::Ascii85.table();
    assert_eq!(parse(table, 85, "\u{2296}10").unwrap(), -85);
    assert_eq!(parse(table, 85, "\u{2295}10").unwrap(), 85);
    // '-' is digit 71 in this alphabet.
    assert_eq!(parse(table, 85, "-").unwrap(), 71);
}

#[test]
fn builder_positions_and_signs() {
    let symbols = ["q", "w", "e", "r"];
    let table = build_table(symbols, "~", "^").unwrap();
    for (i, s) in symbols.iter().enumerate() {
        assert_eq!(table.get(s), Some(i as i64));
    }
    assert_eq!(parse(&table, 4, "~wq").unwrap(), -4);
    assert_eq!(parse(&table, 4, "^wq").unwrap(), 4);
}

#[test]
fn insensitive_builder_folds_case() {
    let table = build_insensitive_table(chars("xyz"), "-", "+").unwrap();
    for c in ["x", "y", "z"] {
        assert_eq!(table.get(c), table.get(&c.to_uppercase()));
    }
    assert_eq!(parse(&table, 3, "Zx").unwrap(), 6);
}

#[test]
fn empty_and_sign_only_inputs_are_zero() {
    for named in NamedTable::ALL {
        let (negative, positive) = named.signs();
        assert_eq!(parse(named.table(), named.base(), "").unwrap(), 0, "{named}");
        assert_eq!(parse(named.table(), named.base(), negative).unwrap(), 0, "{named}");
        assert_eq!(parse(named.table(), named.base(), positive).unwrap(), 0, "{named}");
    }
}

#[test]
fn invert_works_on_plain_maps() {
    let map: HashMap<&str, i32> = [("one", 1), ("two", 2)].into_iter().collect();
    let inverted = invert(map);
    assert_eq!(inverted[&1], "one");
    assert_eq!(inverted[&2], "two");
}

#[test]
fn double_inversion_is_consistent_with_symbol_order() {
    let symbols = "mnop";
    let table = GlyphTable::from_entries(chars(symbols).enumerate().map(|(i, s)| (s, i as i64)));
    let once = invert(&table);
    let ordered: Vec<&str> = once.values().copied().collect();
    assert_eq!(ordered, ["m", "n", "o", "p"]);
    let twice = invert(once);
    for (i, s) in chars(symbols).enumerate() {
        assert_eq!(twice[s.as_str()], i as i64);
    }
}

#[test]
fn literal_tables_are_checked_at_parse_time() {
    let malformed = GlyphTable::from_entries([("0", 0), ("ab", 1)]);
    assert!(matches!(
        parse(&malformed, 2, "0"),
        Err(GlyphError::MalformedGlyphSet { .. })
    ));

    let duplicated: GlyphTable = [("0", 0), ("1", 1), ("1", 2)].into_iter().collect();
    assert!(matches!(
        parse(&duplicated, 2, "0"),
        Err(GlyphError::DuplicateGlyph { .. })
    ));
}

#[test]
fn errors_carry_diagnostic_codes() {
    use miette::Diagnostic;

    let err = parse(NamedTable::Decimal.table(), 10, "12a").unwrap_err();
    assert_eq!(
        err.code().map(|c| c.to_string()).as_deref(),
        Some("glyphnum::glyph::out_of_range")
    );
    let labels: Vec<_> = err.labels().into_iter().flatten().collect();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].offset(), 2);

    let wrapped: GlyphnumError = err.into();
    assert_eq!(
        wrapped.code().map(|c| c.to_string()).as_deref(),
        Some("glyphnum::glyph::out_of_range")
    );
}

#[test]
fn tables_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = glyph::render(NamedTable::B32.table(), 32, i * 1000).unwrap();
                glyph::parse(NamedTable::B32.table(), 32, &text).unwrap()
            })
        })
        .collect();
    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [0, 1000, 2000, 3000]);
}

#[test]
fn config_tables_resolve_alongside_catalog() {
    let config = GlyphConfig::from_toml_str(
        r#"
[tables.roman-ish]
symbols = "IVX"
"#,
        "inline",
    )
    .unwrap();

    let custom = config.resolve("roman-ish").unwrap();
    assert_eq!(custom.base(), 3);
    assert_eq!(parse(custom.table(), custom.base(), "VX").unwrap(), 5);

    let builtin = config.resolve("hexadecimal").unwrap();
    assert_eq!(parse(builtin.table(), builtin.base(), "10").unwrap(), 16);
}
