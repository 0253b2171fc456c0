use crate::parser::{ParseError, ParseErrorKind, QueryParser};

pub struct GroupBy;

impl GroupBy {
    /// Removes `GROUP BY ...` through the end of the remainder.
    pub fn extract(text: &str) -> Result<(Option<Vec<String>>, String), ParseError> {
        let parser = QueryParser::new(text);
        let Some(found) = parser.find(&[&parser.comparers.group_by], 0) else {
            return Ok((None, text.to_string()));
        };

        let list = QueryParser::new(parser.text_from_range(found.end, parser.length).trim());
        let groups = list.split_top_level();
        if groups.iter().any(|group| group.is_empty()) {
            return ParseError::new(ParseErrorKind::GroupBySyntax, "Invalid GROUP BY field", &list.rest()).err();
        }

        Ok((Some(groups), parser.cut(found.start, parser.length)))
    }
}
