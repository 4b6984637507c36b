// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # glyphnum
//!
//! Parse strings of arbitrary digit glyphs into signed integers under any
//! positional numeral system, and build the glyph tables that drive parsing.
//!
//! ## Architecture
//!
//! - **Glyph tables** (`glyph::table`): ordered glyph → digit maps with reserved sign glyphs
//! - **Parsing** (`glyph::notation`): positional summation with checked `i64` arithmetic
//! - **Rendering** (`glyph::render`): the inverse, integer → glyph string
//! - **Catalog** (`glyph::catalog`): decimal, hex, base64 variants, base32 variants, base85, ...
//! - **Configuration** (`config`): user tables from TOML
//!
//! ## Library usage
//!
//! ```
//! use glyphnum::glyph::{self, NamedTable, GlyphTable};
//!
//! assert_eq!(glyph::parse(NamedTable::Decimal.table(), 10, "12345").unwrap(), 12345);
//!
//! let dozenal = GlyphTable::from_symbols(glyph::chars("0123456789XE")).unwrap();
//! assert_eq!(glyph::parse(&dozenal, 12, "-1E").unwrap(), -23);
//! ```

pub mod config;
pub mod error;
pub mod glyph;

pub use error::{GlyphnumError, GlyphnumResult};
