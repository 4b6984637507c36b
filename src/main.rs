//! glyphnum CLI: parse and render numbers written with arbitrary glyphs.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use glyphnum::config::{GlyphConfig, TableDef};
use glyphnum::glyph::render::{RenderConfig, render_with};
use glyphnum::glyph::{self, NamedTable};

#[derive(Parser)]
#[command(name = "glyphnum", version, about = "Positional numbers over arbitrary glyph tables")]
struct Cli {
    /// Table config file (defaults to $XDG_CONFIG_HOME/glyphnum/tables.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse glyph strings into integers.
    Parse {
        /// Table name (built-in or from the config).
        #[arg(long, short, default_value = "decimal")]
        table: String,

        /// Numeric base (defaults to the table's base).
        #[arg(long, short)]
        base: Option<u32>,

        /// Glyph strings to parse.
        #[arg(required = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Render integers as glyph strings.
    #[command(alias = "format")]
    Render {
        /// Table name (built-in or from the config).
        #[arg(long, short, default_value = "decimal")]
        table: String,

        /// Numeric base (defaults to the table's base).
        #[arg(long, short)]
        base: Option<u32>,

        /// Pad with the zero glyph to at least this many digits.
        #[arg(long, default_value = "0")]
        min_digits: usize,

        /// Prefix non-negative values with the positive-sign glyph.
        #[arg(long)]
        plus: bool,

        /// Values to render.
        #[arg(required = true, allow_hyphen_values = true)]
        value: Vec<i64>,
    },

    /// List built-in and configured tables.
    Tables,

    /// Print a table as JSON.
    Show {
        /// Table name.
        name: String,
    },

    /// Add a table to the config file.
    Define {
        /// Name of the new table.
        name: String,

        /// Data glyphs in digit order.
        #[arg(long)]
        symbols: String,

        /// Numeric base (defaults to the number of symbols).
        #[arg(long)]
        base: Option<u32>,

        /// Map both cases of each symbol.
        #[arg(long)]
        case_insensitive: bool,

        /// Negative-sign glyph.
        #[arg(long, default_value = glyph::DEFAULT_NEGATIVE)]
        negative: String,

        /// Positive-sign glyph.
        #[arg(long, default_value = glyph::DEFAULT_POSITIVE)]
        positive: String,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(1)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().or_else(GlyphConfig::default_path);
    let config = load_config(config_path.as_deref())?;

    match cli.command {
        Commands::Parse { table, base, text } => {
            let resolved = config.resolve(&table)?;
            let base = base.unwrap_or_else(|| resolved.base());
            for input in &text {
                let value = glyph::parse(resolved.table(), base, input)?;
                println!("{value}");
            }
        }

        Commands::Render {
            table,
            base,
            min_digits,
            plus,
            value,
        } => {
            let resolved = config.resolve(&table)?;
            let base = base.unwrap_or_else(|| resolved.base());
            let options = RenderConfig {
                min_digits,
                explicit_positive: plus,
            };
            for v in value {
                println!("{}", render_with(resolved.table(), base, v, &options)?);
            }
        }

        Commands::Tables => {
            println!("Built-in tables ({}):", NamedTable::ALL.len());
            for named in NamedTable::ALL {
                let case = if named.case_insensitive() { " [i]" } else { "" };
                println!(
                    "  {:<12} base {:<3}{case} - {}",
                    named.name(),
                    named.base(),
                    named.description()
                );
            }

            let configured = config.tables()?;
            if !configured.is_empty() {
                println!("\nConfigured tables ({}):", configured.len());
                for (name, entry) in &configured {
                    println!(
                        "  {:<12} base {:<3} - {} glyphs",
                        name,
                        entry.base,
                        entry.table.len()
                    );
                }
            }
        }

        Commands::Show { name } => {
            let resolved = config.resolve(&name)?;
            let json = serde_json::to_string_pretty(resolved.table()).into_diagnostic()?;
            println!("{json}");
        }

        Commands::Define {
            name,
            symbols,
            base,
            case_insensitive,
            negative,
            positive,
        } => {
            let Some(path) = config_path else {
                miette::bail!("no config path: pass --config or set XDG_CONFIG_HOME/HOME");
            };
            let def = TableDef {
                symbols,
                base,
                case_insensitive,
                negative,
                positive,
            };
            // Reject bad definitions before they reach the file.
            def.build()?;

            let mut config = config;
            if config.define(name.clone(), def).is_some() {
                println!("Replaced table \"{name}\"");
            } else {
                println!("Defined table \"{name}\"");
            }
            config.save(&path)?;
            println!("Saved {}", path.display());
        }
    }

    Ok(())
}

/// A config file that does not exist yet holds no tables.
fn load_config(path: Option<&Path>) -> Result<GlyphConfig> {
    match path {
        Some(p) if p.exists() => Ok(GlyphConfig::load(p)?),
        Some(p) => {
            tracing::debug!(path = %p.display(), "no table config yet");
            Ok(GlyphConfig::default())
        }
        None => Ok(GlyphConfig::default()),
    }
}
