//! Literal normalization
//!
//! Strips enclosing quotes and line breaks from identifier, string-literal and
//! default-value text. Interior characters are never unescaped.

/// Quote characters that may enclose a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Backtick,
    Double,
    Single,
}

impl Quote {
    pub fn as_char(self) -> char {
        match self {
            Quote::Backtick => '`',
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// Quotes stripped from table names and column identifiers
pub const IDENTIFIER_QUOTES: &[Quote] = &[Quote::Backtick, Quote::Single];

/// Quotes stripped from comments and ENUM/SET values
pub const STRING_QUOTES: &[Quote] = &[Quote::Backtick, Quote::Double, Quote::Single];

/// Remove one leading and one trailing occurrence of each quote in `trims`,
/// in order, then drop every `\r` and `\n` if `strip_line_breaks` is set.
///
/// Leading and trailing quotes are stripped independently, so an unbalanced
/// quote is removed as well.
pub fn normalize(text: &str, trims: &[Quote], strip_line_breaks: bool) -> String {
    let mut trimmed = text;
    for quote in trims {
        let q = quote.as_char();
        trimmed = trimmed.strip_prefix(q).unwrap_or(trimmed);
        trimmed = trimmed.strip_suffix(q).unwrap_or(trimmed);
    }

    if strip_line_breaks {
        trimmed.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
    } else {
        trimmed.to_string()
    }
}

/// Normalize a table name or uid
pub fn normalize_identifier(text: &str) -> String {
    normalize(text, IDENTIFIER_QUOTES, true)
}

/// Normalize a comment or ENUM/SET value
pub fn normalize_string(text: &str) -> String {
    normalize(text, STRING_QUOTES, true)
}

/// Normalize a default value or a string-literal index column name
///
/// Double quotes are kept: `DEFAULT ""` is a real default.
pub fn normalize_value(text: &str) -> String {
    normalize(text, IDENTIFIER_QUOTES, true)
}

/// Normalize a type-name token for keyword lookup
pub fn normalize_type_name(text: &str) -> String {
    normalize(text, &[Quote::Backtick], false).to_uppercase()
}
