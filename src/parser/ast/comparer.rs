use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparer {
    #[default]
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    Different,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = "LIKE")]
    Like,
}

impl Comparer {
    /// Symbolic operators, multi-char first so `>=` never reads as `>`.
    pub const SYMBOLS: [&'static str; 7] = [">=", "<=", "!=", "<>", "=", ">", "<"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparer::Equal => "=",
            Comparer::Different => "!=",
            Comparer::GreaterThan => ">",
            Comparer::GreaterThanOrEqual => ">=",
            Comparer::LessThan => "<",
            Comparer::LessThanOrEqual => "<=",
            Comparer::Like => "LIKE",
        }
    }
}

impl TryFrom<&str> for Comparer {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "=" => Ok(Comparer::Equal),
            "!=" | "<>" => Ok(Comparer::Different),
            ">" => Ok(Comparer::GreaterThan),
            ">=" => Ok(Comparer::GreaterThanOrEqual),
            "<" => Ok(Comparer::LessThan),
            "<=" => Ok(Comparer::LessThanOrEqual),
            "LIKE" => Ok(Comparer::Like),
            _ => Err(format!("Invalid comparer operator: '{}'", value)),
        }
    }
}

impl fmt::Display for Comparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boolean keyword that joined a condition to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    And,
    Or,
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => write!(f, "AND"),
            Connective::Or => write!(f, "OR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::Comparer;

    #[test]
    pub fn test_try_from() {
        assert_eq!(Comparer::try_from(">=").unwrap(), Comparer::GreaterThanOrEqual);
        assert_eq!(Comparer::try_from("<>").unwrap(), Comparer::Different);
        assert_eq!(Comparer::try_from("like").unwrap(), Comparer::Like);
        assert!(Comparer::try_from("=>").is_err());
    }

    #[test]
    pub fn test_symbols_round_trip() {
        for symbol in Comparer::SYMBOLS {
            let comparer = Comparer::try_from(symbol).expect("Failed to read comparer");
            if symbol == "<>" {
                assert_eq!(comparer.to_string(), "!=");
            } else {
                assert_eq!(comparer.to_string(), symbol);
            }
        }
    }
}
