use serde::{Deserialize, Serialize};

use crate::parser::{ast::{Comparer, Connective}, ParseError, ParseErrorKind, QueryParser};

/// One `field <op> value` predicate of a WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Comparer,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connective: Option<Connective>,
}

impl Condition {
    pub fn parse_single(text: &str, connective: Option<Connective>) -> Result<Self, ParseError> {
        let text = text.trim();
        let parser = QueryParser::new(text);

        if let Some(like) = parser.find(&[&parser.comparers.like], 0) {
            let field = parser.text_from_range(0, like.start).trim().to_string();
            let pattern = parser.text_from_range(like.end, parser.length).trim().to_string();
            if pattern.is_empty() {
                return Self::invalid(text);
            }
            // `''` is a valid pattern, so the stripped value may be empty.
            let value = Self::strip_quotes(&pattern).to_string();
            return Self::build(text, field, Comparer::Like, value, connective);
        }

        let Some((start, symbol)) = Self::find_operator(&parser) else {
            return Self::invalid(text);
        };
        let operator = Comparer::try_from(symbol).map_err(|_| Self::invalid_error(text))?;

        let field = parser.text_from_range(0, start).trim().to_string();
        let value = parser.text_from_range(start + symbol.len(), parser.length).trim().to_string();

        Self::build(text, field, operator, value, connective)
    }

    /// Earliest operator outside quoted literals. At each position the
    /// longest symbol wins.
    fn find_operator(parser: &QueryParser) -> Option<(usize, &'static str)> {
        let mut quote: Option<char> = None;
        for index in 0..parser.length {
            let ch = parser.char_at(index);
            if let Some(open) = quote {
                if ch == open {
                    quote = None;
                }
                continue;
            }
            if QueryParser::is_quote(ch) {
                quote = Some(ch);
                continue;
            }

            for symbol in Comparer::SYMBOLS {
                let matches = symbol.chars().enumerate().all(|(offset, expected)| parser.char_at(index + offset) == expected);
                if matches {
                    return Some((index, symbol));
                }
            }
        }

        None
    }

    fn strip_quotes(pattern: &str) -> &str {
        if pattern.len() >= 2 && pattern.starts_with('\'') && pattern.ends_with('\'') {
            return &pattern[1..pattern.len() - 1];
        }
        pattern
    }

    /// Both sides must be present: `a =` and `= 5` are rejected rather than
    /// read as empty strings. A LIKE pattern is checked before its quotes
    /// are stripped.
    fn build(text: &str, field: String, operator: Comparer, value: String, connective: Option<Connective>) -> Result<Self, ParseError> {
        if field.is_empty() || (value.is_empty() && operator != Comparer::Like) {
            return Self::invalid(text);
        }

        Ok(Self { field, operator, value, connective })
    }

    fn invalid_error(text: &str) -> ParseError {
        ParseError::new(ParseErrorKind::WhereSyntax, "Invalid WHERE clause format", text)
    }

    fn invalid<T>(text: &str) -> Result<T, ParseError> {
        Self::invalid_error(text).err()
    }
}
