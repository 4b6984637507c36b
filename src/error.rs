//! Crate-level error type.
//!
//! Each subsystem defines its own error enum with miette `#[diagnostic]`
//! derives. [`GlyphnumError`] wraps them transparently so codes and help text
//! reach the user unchanged.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;
use crate::glyph::GlyphError;

/// Top-level error type for glyphnum.
#[derive(Debug, Error, Diagnostic)]
pub enum GlyphnumError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Glyph(#[from] GlyphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias.
pub type GlyphnumResult<T> = std::result::Result<T, GlyphnumError>;
