use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{parser::{ParseError, ParseErrorKind, QueryParser, TokenPosition}, JoinPolicy, ParserConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    Inner,
    Left,
    Right,
}

impl JoinType {
    /// Order matches [`QueryComparers::joins`](crate::parser::QueryComparers::joins).
    fn from_comparer(index: usize) -> Option<Self> {
        match index {
            0 => Some(JoinType::Inner),
            1 => Some(JoinType::Left),
            2 => Some(JoinType::Right),
            _ => None,
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER"),
            JoinType::Left => write!(f, "LEFT"),
            JoinType::Right => write!(f, "RIGHT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinCondition {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinClause {
    pub join_type: JoinType,
    pub join_table: String,
    pub join_condition: JoinCondition,
}

/// A join found in a fragment, with the char span it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinMatch {
    pub clause: JoinClause,
    pub start: usize,
    pub end: usize,
}

pub struct Join;

impl Join {
    /// First `INNER|LEFT|RIGHT JOIN <table> ON <left> = <right>` in `text`.
    pub fn find(text: &str) -> Option<JoinMatch> {
        let parser = QueryParser::new(text);
        Self::find_from(&parser, 0)
    }

    fn find_from(parser: &QueryParser, from: usize) -> Option<JoinMatch> {
        let mut from = from;
        while let Some(keyword) = parser.find(&parser.comparers.joins(), from) {
            if let Some(found) = Self::match_at(parser, keyword) {
                return Some(found);
            }
            from = keyword.end;
        }

        None
    }

    fn match_at(parser: &QueryParser, keyword: TokenPosition) -> Option<JoinMatch> {
        // The table needs at least one char, so `ON` is looked up past it.
        let join_type = JoinType::from_comparer(keyword.comparer)?;
        let table_start = keyword.end + 1;
        let mut from = table_start + 1;
        while let Some(on) = parser.find(&[&parser.comparers.on], from) {
            if let Some((join_condition, end)) = Self::read_condition(parser, on.end) {
                let join_table = parser.text_from_range(table_start, on.start).trim().to_string();
                if !join_table.is_empty() {
                    let clause = JoinClause {
                        join_type,
                        join_table,
                        join_condition,
                    };
                    return Some(JoinMatch { clause, start: keyword.start, end });
                }
            }
            from = on.end;
        }

        None
    }

    fn read_condition(parser: &QueryParser, at: usize) -> Option<(JoinCondition, usize)> {
        let mut cursor = QueryParser::new(&parser.text_from_range(at, parser.length));
        cursor.next_non_whitespace();
        let left = cursor.read_identifier()?;

        cursor.next_non_whitespace();
        if cursor.current() != '=' {
            return None;
        }
        cursor.next();
        cursor.next_non_whitespace();
        let right = cursor.read_identifier()?;

        Some((JoinCondition { left, right }, at + cursor.position))
    }

    /// Splits the join out of the pre-WHERE fragment. The text before the
    /// join keyword is returned as the remainder.
    pub fn extract(text: &str, config: &ParserConfig) -> Result<(Option<JoinClause>, String), ParseError> {
        let parser = QueryParser::new(text);
        let Some(found) = Self::find_from(&parser, 0) else {
            return Ok((None, text.to_string()));
        };

        if let Some(extra) = parser.find(&parser.comparers.joins(), found.end) {
            let trailing = parser.text_from_range(extra.start, parser.length);
            match config.join_policy {
                JoinPolicy::RejectMultiple => {
                    return ParseError::new(ParseErrorKind::JoinSyntax, "Multiple JOIN clauses are not supported", &trailing).err();
                },
                JoinPolicy::FirstOnly => {
                    tracing::warn!(target: "sqlshape::parser", ignored = %trailing, "only the first JOIN is kept");
                },
            }
        }

        Ok((Some(found.clause), parser.text_from_range(0, found.start).trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{parser::{ast::{Join, JoinType}, ParseErrorKind}, JoinPolicy, ParserConfig};

    #[test]
    pub fn test_join_type_follows_comparer_order() {
        assert_eq!(JoinType::from_comparer(0), Some(JoinType::Inner));
        assert_eq!(JoinType::from_comparer(1), Some(JoinType::Left));
        assert_eq!(JoinType::from_comparer(2), Some(JoinType::Right));
        assert_eq!(JoinType::from_comparer(3), None);
    }

    #[test]
    pub fn test_inner_join() {
        let text = "SELECT a FROM t1 INNER JOIN t2 ON t1.id = t2.id";

        let found = Join::find(text).expect("Failed to parse join");

        assert_eq!(found.clause.join_type, JoinType::Inner);
        assert_eq!(found.clause.join_table, "t2");
        assert_eq!(found.clause.join_condition.left, "t1.id");
        assert_eq!(found.clause.join_condition.right, "t2.id");
        assert_eq!(found.start, 17);
        assert_eq!(found.end, text.len());
    }

    #[test]
    pub fn test_join_lowercase_without_spaces_around_equal() {
        let found = Join::find("SELECT * FROM a left join b ON a.x=b.y").expect("Failed to parse join");

        assert_eq!(found.clause.join_type, JoinType::Left);
        assert_eq!(found.clause.join_table, "b");
        assert_eq!(found.clause.join_condition.left, "a.x");
        assert_eq!(found.clause.join_condition.right, "b.y");
    }

    #[test]
    pub fn test_join_with_alias() {
        let found = Join::find("SELECT o.id FROM customers c RIGHT JOIN orders o ON o.customer_id = c.id").expect("Failed to parse join");

        assert_eq!(found.clause.join_type, JoinType::Right);
        assert_eq!(found.clause.join_table, "orders o");
    }

    #[test]
    pub fn test_join_table_named_like_on() {
        let found = Join::find("SELECT * FROM a INNER JOIN onions ON onions.id = a.id").expect("Failed to parse join");

        assert_eq!(found.clause.join_table, "onions");
    }

    #[test]
    pub fn test_join_unsupported_type() {
        assert!(Join::find("SELECT * FROM a FULL JOIN b ON a.id = b.id").is_none());
    }

    #[test]
    pub fn test_join_without_condition() {
        assert!(Join::find("SELECT * FROM a INNER JOIN b").is_none());
    }

    #[test]
    pub fn test_extract_keeps_select_part() {
        let (join, rest) = Join::extract("SELECT a FROM t1 INNER JOIN t2 ON t1.id = t2.id", &ParserConfig::default()).expect("Failed to parse join");

        assert!(join.is_some());
        assert_eq!(rest, "SELECT a FROM t1");
    }

    #[test]
    pub fn test_extract_first_only() {
        let text = "SELECT * FROM a INNER JOIN b ON a.id = b.id LEFT JOIN c ON c.id = b.id";

        let (join, rest) = Join::extract(text, &ParserConfig::default()).expect("Failed to parse join");
        let join = join.expect("Missing join");

        assert_eq!(join.join_type, JoinType::Inner);
        assert_eq!(join.join_table, "b");
        assert_eq!(rest, "SELECT * FROM a");
    }

    #[test]
    pub fn test_extract_reject_multiple() {
        let text = "SELECT * FROM a INNER JOIN b ON a.id = b.id LEFT JOIN c ON c.id = b.id";
        let config = ParserConfig::new().with_join_policy(JoinPolicy::RejectMultiple);

        match Join::extract(text, &config) {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.kind, ParseErrorKind::JoinSyntax);
                assert_eq!(err.text, "LEFT JOIN c ON c.id = b.id");
            },
        }
    }
}
