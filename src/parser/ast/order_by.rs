use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{parser::{ParseError, ParseErrorKind, QueryParser}, DirectionPolicy, ParserConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderDirection {
    Asc,
    Desc,
    /// Any other token, upper-cased. Only produced by the permissive policy.
    Other(String),
}

impl From<String> for OrderDirection {
    fn from(value: String) -> Self {
        match value.to_uppercase().as_str() {
            "ASC" => OrderDirection::Asc,
            "DESC" => OrderDirection::Desc,
            other => OrderDirection::Other(other.to_string()),
        }
    }
}

impl From<OrderDirection> for String {
    fn from(value: OrderDirection) -> Self {
        value.to_string()
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "ASC"),
            OrderDirection::Desc => write!(f, "DESC"),
            OrderDirection::Other(token) => write!(f, "{}", token),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderByField {
    pub field_name: String,
    pub order: OrderDirection,
}

impl OrderByField {
    pub fn parse_single(text: &str, config: &ParserConfig) -> Result<Self, ParseError> {
        let mut tokens = text.split_whitespace();
        let Some(field_name) = tokens.next() else {
            return ParseError::new(ParseErrorKind::OrderBySyntax, "Invalid ORDER BY field", text).err();
        };

        let order = match tokens.next() {
            Some(token) => OrderDirection::from(token.to_string()),
            None => OrderDirection::Asc,
        };

        if let OrderDirection::Other(token) = &order {
            if config.direction_policy == DirectionPolicy::Strict {
                return ParseError::new(ParseErrorKind::OrderBySyntax, &format!("Invalid ORDER BY direction '{}'", token), text).err();
            }
        }

        Ok(Self { field_name: field_name.to_string(), order })
    }
}

pub struct OrderBy;

impl OrderBy {
    /// Removes `ORDER BY ...` through the end of the remainder.
    pub fn extract(text: &str, config: &ParserConfig) -> Result<(Option<Vec<OrderByField>>, String), ParseError> {
        let parser = QueryParser::new(text);
        let Some(found) = parser.find(&[&parser.comparers.order_by], 0) else {
            return Ok((None, text.to_string()));
        };

        let list = QueryParser::new(parser.text_from_range(found.end, parser.length).trim());
        let fields = list
            .split_top_level()
            .iter()
            .map(|field| OrderByField::parse_single(field, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((Some(fields), parser.cut(found.start, parser.length)))
    }
}
