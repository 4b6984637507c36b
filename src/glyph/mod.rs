//! Glyph tables and positional notation.
//!
//! A glyph table maps single-character symbols to digit values. Two values
//! are reserved: `-1` marks the negative-sign glyph and `-2` the explicit
//! positive-sign glyph. Tables are built once and then handed, read-only, to
//! any number of parse or render calls.
//!
//! ## Components
//!
//! - [`table`] — [`GlyphTable`] and the case-sensitive/insensitive builders
//! - [`invert`] — value → key inversion with last-wins tie-breaking
//! - [`notation`] — glyph string → signed integer
//! - [`render`] — signed integer → glyph string
//! - [`catalog`] — 13 named tables for common encodings (decimal, hex, base64, ...)

pub mod catalog;
pub mod invert;
pub mod notation;
pub mod render;
pub mod table;

pub use catalog::{Catalog, NamedTable, catalog};
pub use invert::invert;
pub use notation::parse;
pub use render::render;
pub use table::{
    DEFAULT_NEGATIVE, DEFAULT_POSITIVE, GlyphTable, NEGATIVE_SIGN, POSITIVE_SIGN,
    build_insensitive_table, build_table, chars,
};

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors that can occur during glyph operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GlyphError {
    #[error("all glyphs must be one character long, got \"{glyph}\"")]
    #[diagnostic(
        code(glyphnum::glyph::malformed),
        help(
            "Every table key, including the sign glyphs, must be a single Unicode \
             scalar value. Split multi-character symbols with `glyph::chars`."
        )
    )]
    MalformedGlyphSet { glyph: String },

    #[error("all glyphs must appear exactly once, \"{glyph}\" repeats")]
    #[diagnostic(
        code(glyphnum::glyph::duplicate),
        help("Remove the repeated key from the table.")
    )]
    DuplicateGlyph { glyph: String },

    #[error("character '{character}' is out of range for this glyph table")]
    #[diagnostic(
        code(glyphnum::glyph::out_of_range),
        help("Check that the input uses the same alphabet as the selected table.")
    )]
    CharacterOutOfRange {
        character: char,
        #[source_code]
        text: String,
        #[label("not a glyph of this table")]
        span: SourceSpan,
    },

    #[error("value of \"{text}\" does not fit in a 64-bit signed integer")]
    #[diagnostic(
        code(glyphnum::glyph::overflow),
        help("Results are limited to i64::MIN..=i64::MAX. Shorten the input.")
    )]
    ArithmeticOverflow { text: String },

    #[error("cannot render in base {base}")]
    #[diagnostic(
        code(glyphnum::glyph::invalid_base),
        help("Rendering needs a base of at least 2.")
    )]
    InvalidBase { base: u32 },

    #[error("table has no glyph for digit value {digit}")]
    #[diagnostic(
        code(glyphnum::glyph::missing_digit),
        help("The table must provide a glyph for every digit in 0..base.")
    )]
    MissingDigit { digit: u32 },

    #[error("table has no negative-sign glyph")]
    #[diagnostic(
        code(glyphnum::glyph::missing_sign),
        help("Map a glyph to -1 to render negative values.")
    )]
    MissingSign,

    #[error("unknown glyph table: \"{name}\"")]
    #[diagnostic(
        code(glyphnum::glyph::unknown_table),
        help("Run `glyphnum tables` to see the available tables.")
    )]
    UnknownTable { name: String },
}

/// Result type for glyph operations.
pub type GlyphResult<T> = Result<T, GlyphError>;
