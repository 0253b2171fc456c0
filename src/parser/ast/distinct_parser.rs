use crate::parser::QueryParser;

pub struct DistinctParser;

impl DistinctParser {
    /// Rewrites a leading `SELECT DISTINCT` into `SELECT`.
    pub fn extract(text: &str) -> (bool, String) {
        let mut parser = QueryParser::new(text);
        if !parser.comparers.select.compare(&parser) {
            return (false, text.to_string());
        }
        parser.jump(parser.comparers.select.keyword.len());
        parser.next_non_whitespace();

        if !parser.comparers.distinct.compare(&parser) {
            return (false, text.to_string());
        }
        parser.jump(parser.comparers.distinct.keyword.len());
        parser.next_non_whitespace();

        (true, format!("SELECT {}", parser.rest()))
    }
}
