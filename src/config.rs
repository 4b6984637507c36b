//! User-defined glyph tables, persisted as TOML.
//!
//! The default location is `$XDG_CONFIG_HOME/glyphnum/tables.toml`
//! (`~/.config/glyphnum/tables.toml` when the variable is unset):
//!
//! ```toml
//! [tables.dozenal]
//! symbols = "0123456789XE"
//! case_insensitive = true
//!
//! [tables.balanced]
//! symbols = "01"
//! base = 3
//! negative = "~"
//! positive = "^"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GlyphnumResult;
use crate::glyph::{
    DEFAULT_NEGATIVE, DEFAULT_POSITIVE, GlyphError, GlyphTable, NamedTable,
    build_insensitive_table, build_table, chars,
};

/// Errors from loading or saving table configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read table config: {path}")]
    #[diagnostic(
        code(glyphnum::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse table config: {path}: {message}")]
    #[diagnostic(
        code(glyphnum::config::parse),
        help("Check the TOML syntax. Each table lives under `[tables.<name>]` with a `symbols` string.")
    )]
    Parse { path: String, message: String },

    #[error("failed to write table config: {path}")]
    #[diagnostic(
        code(glyphnum::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid table definition \"{name}\"")]
    #[diagnostic(
        code(glyphnum::config::invalid_table),
        help("Symbols and sign glyphs must each be a single character.")
    )]
    InvalidTable {
        name: String,
        #[source]
        #[diagnostic_source]
        source: GlyphError,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// One user-defined table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Data glyphs in digit order.
    pub symbols: String,
    /// Numeric base. Defaults to the number of symbols.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<u32>,
    /// Map both cases of each symbol.
    #[serde(default)]
    pub case_insensitive: bool,
    /// Negative-sign glyph.
    #[serde(default = "default_negative")]
    pub negative: String,
    /// Positive-sign glyph.
    #[serde(default = "default_positive")]
    pub positive: String,
}

fn default_negative() -> String {
    DEFAULT_NEGATIVE.into()
}
fn default_positive() -> String {
    DEFAULT_POSITIVE.into()
}

impl TableDef {
    /// A case-sensitive definition with default sign glyphs.
    pub fn new(symbols: impl Into<String>) -> Self {
        Self {
            symbols: symbols.into(),
            base: None,
            case_insensitive: false,
            negative: default_negative(),
            positive: default_positive(),
        }
    }

    /// Numeric base for this table.
    pub fn base(&self) -> u32 {
        self.base
            .unwrap_or_else(|| self.symbols.chars().count() as u32)
    }

    /// Build the glyph table.
    pub fn build(&self) -> Result<GlyphTable, GlyphError> {
        if self.case_insensitive {
            build_insensitive_table(chars(&self.symbols), &self.negative, &self.positive)
        } else {
            build_table(chars(&self.symbols), &self.negative, &self.positive)
        }
    }
}

/// A built table together with its base.
#[derive(Debug, Clone)]
pub struct ConfiguredTable {
    pub table: GlyphTable,
    pub base: u32,
}

/// A table selected by name, from the config or the built-in catalog.
#[derive(Debug, Clone)]
pub enum ResolvedTable {
    Builtin(NamedTable),
    Configured(ConfiguredTable),
}

impl ResolvedTable {
    pub fn table(&self) -> &GlyphTable {
        match self {
            ResolvedTable::Builtin(named) => named.table(),
            ResolvedTable::Configured(configured) => &configured.table,
        }
    }

    pub fn base(&self) -> u32 {
        match self {
            ResolvedTable::Builtin(named) => named.base(),
            ResolvedTable::Configured(configured) => configured.base,
        }
    }
}

/// The set of user-defined tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphConfig {
    #[serde(default)]
    pub tables: BTreeMap<String, TableDef>,
}

impl GlyphConfig {
    /// `$XDG_CONFIG_HOME/glyphnum/tables.toml`, or `None` without a home directory.
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(config_dir.join("glyphnum").join("tables.toml"))
    }

    /// Parse from a TOML string. `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            tables = config.tables.len(),
            "loaded table config"
        );
        Ok(config)
    }

    /// Save to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Add or replace a definition. Returns the previous one, if any.
    pub fn define(&mut self, name: impl Into<String>, def: TableDef) -> Option<TableDef> {
        let name = name.into();
        if name.parse::<NamedTable>().is_ok() {
            tracing::warn!(%name, "config table shadows a built-in table");
        }
        self.tables.insert(name, def)
    }

    /// Build the table called `name`, if it is defined.
    pub fn build_table(&self, name: &str) -> Option<ConfigResult<ConfiguredTable>> {
        self.tables.get(name).map(|def| build_configured(name, def))
    }

    /// Resolve `name` against the config first, then the built-in catalog.
    pub fn resolve(&self, name: &str) -> GlyphnumResult<ResolvedTable> {
        if let Some(configured) = self.build_table(name) {
            return Ok(ResolvedTable::Configured(configured?));
        }
        let named: NamedTable = name.parse()?;
        Ok(ResolvedTable::Builtin(named))
    }

    /// Build every defined table, keyed by name.
    pub fn tables(&self) -> ConfigResult<BTreeMap<String, ConfiguredTable>> {
        self.tables
            .iter()
            .map(|(name, def)| build_configured(name, def).map(|built| (name.clone(), built)))
            .collect()
    }
}

fn build_configured(name: &str, def: &TableDef) -> ConfigResult<ConfiguredTable> {
    let table = def.build().map_err(|source| ConfigError::InvalidTable {
        name: name.to_string(),
        source,
    })?;
    Ok(ConfiguredTable {
        table,
        base: def.base(),
    })
}
