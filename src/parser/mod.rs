pub mod query_parser;
pub use query_parser::*;

pub mod ast;

pub mod parse_error;
pub use parse_error::*;

pub mod phase;
pub use phase::*;

pub mod word_comparer;
pub use word_comparer::*;

pub mod query_comparers;
pub use query_comparers::*;


use crate::{parser::ast::{Join, JoinClause, ParsedQuery}, ParserConfig};

/// Parses `query` with the default [`ParserConfig`].
pub fn parse_query(query: &str) -> Result<ParsedQuery, ParseError> {
    ParsedQuery::try_from(query)
}

pub fn parse_query_with(query: &str, config: &ParserConfig) -> Result<ParsedQuery, ParseError> {
    ParsedQuery::parse(query, config)
}

/// Looks for the first supported join anywhere in `query`. Never fails;
/// `None` covers both "no join" and unsupported join syntax.
pub fn parse_join_clause(query: &str) -> Option<JoinClause> {
    Join::find(query).map(|found| found.clause)
}
