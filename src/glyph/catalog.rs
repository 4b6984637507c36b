//! Named glyph tables for common encodings.
//!
//! The alphabets are static data. Every table is built from them in one
//! pass the first time the catalog is touched and is read-only afterwards.
//! Tables whose alphabet already uses `-` or `+` as digits get other sign
//! glyphs (see [`NamedTable::signs`]).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::table::{build_insensitive_table, build_table, chars};
use super::{GlyphError, GlyphResult, GlyphTable};

/// U+2296 CIRCLED MINUS, for alphabets that occupy `-`.
const CIRCLED_MINUS: &str = "\u{2296}";
/// U+2295 CIRCLED PLUS, for alphabets that occupy `+`.
const CIRCLED_PLUS: &str = "\u{2295}";

/// One of the built-in glyph tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedTable {
    Decimal,
    Hexadecimal,
    Octal,
    Binary,
    B64,
    Uuencoding,
    EtcPasswd,
    Bcrypt,
    Bash64,
    Ascii85,
    B32,
    ZBase32,
    B32AsHex,
}

/// Static description of a built-in table.
#[derive(Debug)]
struct Alphabet {
    name: &'static str,
    symbols: &'static str,
    case_insensitive: bool,
    negative: &'static str,
    positive: &'static str,
    description: &'static str,
}

/// Indexed by `NamedTable as usize`.
static ALPHABETS: [Alphabet; 13] = [
    Alphabet {
        name: "DECIMAL",
        symbols: "0123456789",
        case_insensitive: false,
        negative: "-",
        positive: "+",
        description: "Decimal digits",
    },
    Alphabet {
        name: "HEXADECIMAL",
        symbols: "0123456789abcdef",
        case_insensitive: true,
        negative: "-",
        positive: "+",
        description: "Hexadecimal digits",
    },
    Alphabet {
        name: "OCTAL",
        symbols: "01234567",
        case_insensitive: false,
        negative: "-",
        positive: "+",
        description: "Octal digits",
    },
    Alphabet {
        name: "BINARY",
        symbols: "01",
        case_insensitive: false,
        negative: "-",
        positive: "+",
        description: "Binary digits",
    },
    Alphabet {
        name: "B64",
        symbols: "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        case_insensitive: false,
        negative: "-",
        positive: "!",
        description: "Standard base64 alphabet (positive sign is !)",
    },
    Alphabet {
        name: "UUENCODING",
        symbols: " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_",
        case_insensitive: false,
        negative: CIRCLED_MINUS,
        positive: CIRCLED_PLUS,
        description: "uuencoding alphabet (signs are \u{2296} and \u{2295})",
    },
    Alphabet {
        name: "ETCPASSWD",
        symbols: "./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
        case_insensitive: false,
        negative: "-",
        positive: "+",
        description: "crypt(3) /etc/passwd alphabet",
    },
    Alphabet {
        name: "BCRYPT",
        symbols: "./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        case_insensitive: false,
        negative: "-",
        positive: "+",
        description: "bcrypt alphabet",
    },
    Alphabet {
        name: "BASH64",
        symbols: "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ@_",
        case_insensitive: false,
        negative: "-",
        positive: "+",
        description: "bash base-64 arithmetic alphabet",
    },
    Alphabet {
        name: "ASCII85",
        symbols: "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~",
        case_insensitive: false,
        negative: CIRCLED_MINUS,
        positive: CIRCLED_PLUS,
        description: "Z85-style base-85 alphabet (signs are \u{2296} and \u{2295})",
    },
    Alphabet {
        name: "B32",
        symbols: "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
        case_insensitive: true,
        negative: "-",
        positive: "+",
        description: "RFC 4648 base32 alphabet",
    },
    Alphabet {
        name: "ZBASE32",
        symbols: "ybndrfg8ejkmcpqxot1uwisza345h769",
        case_insensitive: true,
        negative: "-",
        positive: "+",
        description: "Human-oriented z-base-32 alphabet",
    },
    Alphabet {
        name: "B32ASHEX",
        symbols: "0123456789abcdefghijklmnopqrstuv",
        case_insensitive: true,
        negative: "-",
        positive: "+",
        description: "RFC 4648 base32hex alphabet",
    },
];

impl NamedTable {
    /// Every built-in table, in catalog order.
    pub const ALL: [NamedTable; 13] = [
        NamedTable::Decimal,
        NamedTable::Hexadecimal,
        NamedTable::Octal,
        NamedTable::Binary,
        NamedTable::B64,
        NamedTable::Uuencoding,
        NamedTable::EtcPasswd,
        NamedTable::Bcrypt,
        NamedTable::Bash64,
        NamedTable::Ascii85,
        NamedTable::B32,
        NamedTable::ZBase32,
        NamedTable::B32AsHex,
    ];

    fn alphabet_def(self) -> &'static Alphabet {
        &ALPHABETS[self as usize]
    }

    /// Catalog name, e.g. `"HEXADECIMAL"`.
    pub fn name(self) -> &'static str {
        self.alphabet_def().name
    }

    /// Data glyphs in digit order.
    pub fn alphabet(self) -> &'static str {
        self.alphabet_def().symbols
    }

    /// Numeric base: the number of data glyphs.
    pub fn base(self) -> u32 {
        self.alphabet().chars().count() as u32
    }

    pub fn case_insensitive(self) -> bool {
        self.alphabet_def().case_insensitive
    }

    /// `(negative, positive)` sign glyphs.
    pub fn signs(self) -> (&'static str, &'static str) {
        let def = self.alphabet_def();
        (def.negative, def.positive)
    }

    pub fn description(self) -> &'static str {
        self.alphabet_def().description
    }

    /// The built table.
    pub fn table(self) -> &'static GlyphTable {
        catalog().table(self)
    }

    fn build(self) -> GlyphResult<GlyphTable> {
        let (negative, positive) = self.signs();
        if self.case_insensitive() {
            build_insensitive_table(chars(self.alphabet()), negative, positive)
        } else {
            build_table(chars(self.alphabet()), negative, positive)
        }
    }
}

impl fmt::Display for NamedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedTable {
    type Err = GlyphError;

    /// Case-insensitive; `_` and `-` are ignored, so `b32-as-hex` and
    /// `etc_passwd` both resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_uppercase)
            .collect();
        NamedTable::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| GlyphError::UnknownTable {
                name: s.to_string(),
            })
    }
}

/// All built-in tables, built together.
#[derive(Debug)]
pub struct Catalog {
    tables: Vec<GlyphTable>,
}

impl Catalog {
    /// Build every table of [`NamedTable::ALL`].
    pub fn build() -> GlyphResult<Self> {
        let tables = NamedTable::ALL
            .into_iter()
            .map(NamedTable::build)
            .collect::<GlyphResult<Vec<_>>>()?;
        tracing::debug!(tables = tables.len(), "glyph catalog built");
        Ok(Self { tables })
    }

    pub fn table(&self, named: NamedTable) -> &GlyphTable {
        &self.tables[named as usize]
    }

    /// Look up a table by name (see [`NamedTable::from_str`]).
    pub fn get(&self, name: &str) -> GlyphResult<&GlyphTable> {
        name.parse().map(|named| self.table(named))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NamedTable, &GlyphTable)> {
        NamedTable::ALL.into_iter().zip(self.tables.iter())
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The process-wide catalog, built on first access.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        Catalog::build().expect("built-in alphabets hold single-character glyphs")
    })
}
