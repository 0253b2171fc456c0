pub mod parser;
pub use parser::{parse_join_clause, parse_query, parse_query_with, ParseError, ParseErrorKind};
pub use parser::ast::{AggregateGuard, Comparer, Condition, Connective, JoinClause, JoinCondition, JoinType, OrderByField, OrderDirection, ParsedQuery, WhereParser};

pub mod config;
pub use config::*;
