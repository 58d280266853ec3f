//! Grammar modes and their keyword/function dictionaries.
//!
//! QueryPad supports two grammars: a SQL-like query language and a
//! JSON-like structured-data language. A `Grammar` bundles the mode with
//! the dictionaries the tokenizer and completion engine consult, and the
//! capabilities derived from the mode (completion, bracket-aware indent,
//! highlighting strategy).

use serde::{Deserialize, Serialize};

/// Keywords recognized by the query grammar, in author-defined order.
///
/// The order matters: completion candidates are offered in exactly this
/// order, never re-sorted by relevance.
pub const QUERY_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "AND", "OR", "NOT", "IN", "LIKE", "BETWEEN", "JOIN", "LEFT",
    "RIGHT", "INNER", "OUTER", "ON", "AS", "DISTINCT", "ORDER", "BY", "ASC", "DESC", "GROUP",
    "HAVING", "LIMIT", "OFFSET", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE",
    "DROP", "TABLE", "INDEX", "ALTER", "ADD", "COLUMN", "PRIMARY", "KEY", "FOREIGN", "NULL", "IS",
    "TRUE", "FALSE", "CASE", "WHEN", "THEN", "ELSE", "END", "UNION", "ALL", "EXISTS", "IF",
    "USING", "CROSS", "NATURAL",
];

/// Built-in functions recognized by the query grammar, in author-defined order.
pub const QUERY_FUNCTIONS: &[&str] = &[
    "COUNT",
    "SUM",
    "AVG",
    "MAX",
    "MIN",
    "CONCAT",
    "SUBSTRING",
    "LENGTH",
    "UPPER",
    "LOWER",
    "TRIM",
    "COALESCE",
    "IFNULL",
    "NOW",
    "DATE",
    "YEAR",
    "MONTH",
    "DAY",
    "HOUR",
    "MINUTE",
    "SECOND",
    "CAST",
    "CONVERT",
    "ROUND",
    "FLOOR",
    "CEIL",
    "ABS",
    "MOD",
    "REPLACE",
    "LPAD",
    "RPAD",
    "DATE_FORMAT",
    "STR_TO_DATE",
    "DATEDIFF",
    "TIMESTAMPDIFF",
    "GROUP_CONCAT",
    "JSON_EXTRACT",
    "JSON_OBJECT",
    "JSON_ARRAY",
    "FIND_IN_SET",
    "INSTR",
];

/// The editing mode selected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrammarMode {
    /// Tokenizing highlighter, completion, bracket-aware indent
    Query,
    /// Substitution-based highlighter only
    StructuredData,
}

impl GrammarMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrammarMode::Query => "query",
            GrammarMode::StructuredData => "structured-data",
        }
    }
}

impl std::fmt::Display for GrammarMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GrammarMode {
    type Err = crate::QueryPadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(GrammarMode::Query),
            "structured-data" => Ok(GrammarMode::StructuredData),
            other => Err(crate::QueryPadError::Configuration(format!(
                "unknown grammar mode: {other:?}"
            ))),
        }
    }
}

/// A grammar: the mode plus the dictionaries consulted while scanning and
/// completing.
///
/// The two instances are static; obtain them through [`Grammar::for_mode`].
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    pub mode: GrammarMode,
    pub keywords: &'static [&'static str],
    pub functions: &'static [&'static str],
}

static QUERY_GRAMMAR: Grammar = Grammar {
    mode: GrammarMode::Query,
    keywords: QUERY_KEYWORDS,
    functions: QUERY_FUNCTIONS,
};

static STRUCTURED_DATA_GRAMMAR: Grammar = Grammar {
    mode: GrammarMode::StructuredData,
    keywords: &[],
    functions: &[],
};

impl Grammar {
    pub fn for_mode(mode: GrammarMode) -> &'static Grammar {
        match mode {
            GrammarMode::Query => &QUERY_GRAMMAR,
            GrammarMode::StructuredData => &STRUCTURED_DATA_GRAMMAR,
        }
    }

    /// Whether the completion engine runs in this grammar.
    pub fn completion_enabled(&self) -> bool {
        self.mode == GrammarMode::Query
    }

    /// Whether an opening bracket before the cursor adds an indent level
    /// on newline.
    pub fn bracket_indent(&self) -> bool {
        self.mode == GrammarMode::Query
    }

    /// Case-insensitive keyword lookup. The tokenizer emits the original
    /// casing; only classification is case-insensitive.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(word))
    }

    /// Case-insensitive function-name lookup.
    pub fn is_function(&self, word: &str) -> bool {
        self.functions.iter().any(|f| f.eq_ignore_ascii_case(word))
    }
}
