use crate::parser::{ast::{Condition, Connective}, ParseError, QueryParser};

pub struct WhereParser;

impl WhereParser {
    /// Splits the remainder on its first `WHERE`. Returns the text after the
    /// keyword, if any, and the text before it.
    pub fn extract(text: &str) -> (Option<String>, String) {
        let parser = QueryParser::new(text);

        match parser.find(&[&parser.comparers.r#where], 0) {
            Some(found) => {
                let criteria = parser.text_from_range(found.end, parser.length).trim().to_string();
                let rest = parser.text_from_range(0, found.start).trim().to_string();
                ((!criteria.is_empty()).then_some(criteria), rest)
            },
            None => (None, text.to_string()),
        }
    }

    /// Flat split on `AND` / `OR`; no grouping or precedence. Each condition
    /// after the first remembers the keyword that preceded it.
    pub fn parse_conditions(text: &str) -> Result<Vec<Condition>, ParseError> {
        let parser = QueryParser::new(text);
        let connectives = parser.comparers.connectives();

        let mut conditions = vec![];
        let mut connective = None;
        let mut pivot = 0;
        while let Some(found) = parser.find(&connectives, pivot) {
            let segment = parser.text_from_range(pivot, found.start);
            conditions.push(Condition::parse_single(&segment, connective)?);

            connective = Some(if found.comparer == 0 { Connective::And } else { Connective::Or });
            pivot = found.end;
        }
        let segment = parser.text_from_range(pivot, parser.length);
        conditions.push(Condition::parse_single(&segment, connective)?);

        Ok(conditions)
    }
}
