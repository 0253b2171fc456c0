// SELECT DISTINCT a.name, COUNT(*)
// FROM TableA a
// INNER JOIN TableB b ON a.id = b.a_id
// WHERE a.age >= 16 AND b.city LIKE '%Porto%'
// GROUP BY a.name
// ORDER BY a.name DESC
// LIMIT 20

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{parser::{ast::{AggregateGuard, Condition, DistinctParser, GroupBy, Join, JoinClause, JoinCondition, JoinType, LimitParser, OrderBy, OrderByField, ProjectionParser, WhereParser}, ParseError, Phase}, ParserConfig};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub fields: Vec<String>,
    pub table: String,
    pub where_clauses: Vec<Condition>,
    #[serde(flatten)]
    pub join: Option<JoinClause>,
    pub group_by_fields: Option<Vec<String>>,
    pub has_aggregate_without_group_by: bool,
    pub order_by_fields: Option<Vec<OrderByField>>,
    pub limit: Option<u64>,
    pub is_distinct: bool,
}

impl ParsedQuery {
    /// Runs every [`Phase`] in order. Each stage takes the remainder left by
    /// the previous one and hands back a shorter one.
    pub fn parse(text: &str, config: &ParserConfig) -> Result<Self, ParseError> {
        let mut query = ParsedQuery::default();
        let mut remainder = text.trim().to_string();
        let mut aggregate_fragment = String::new();
        let mut criteria: Option<String> = None;

        let mut phase = Phase::default();
        loop {
            match phase {
                Phase::Distinct => {
                    let (is_distinct, rest) = DistinctParser::extract(&remainder);
                    query.is_distinct = is_distinct;
                    remainder = rest;
                },
                Phase::Limit => {
                    let (limit, rest) = LimitParser::extract(&remainder)?;
                    query.limit = limit;
                    remainder = rest;
                },
                Phase::OrderBy => {
                    let (order_by, rest) = OrderBy::extract(&remainder, config)?;
                    query.order_by_fields = order_by;
                    remainder = rest;
                },
                Phase::GroupBy => {
                    let (group_by, rest) = GroupBy::extract(&remainder)?;
                    query.group_by_fields = group_by;
                    remainder = rest;
                    aggregate_fragment = remainder.clone();
                },
                Phase::Criteria => {
                    let (found, rest) = WhereParser::extract(&remainder);
                    criteria = found;
                    remainder = rest;
                },
                Phase::Joins => {
                    let (join, rest) = Join::extract(&remainder, config)?;
                    query.join = join;
                    remainder = rest;
                },
                Phase::Projection => {
                    let projection = ProjectionParser::parse(&remainder)?;
                    query.fields = projection.fields;
                    query.table = projection.table;
                    remainder.clear();
                },
                Phase::Conditions => {
                    if let Some(criteria) = &criteria {
                        query.where_clauses = WhereParser::parse_conditions(criteria)?;
                    }
                },
                Phase::Aggregates => {
                    query.has_aggregate_without_group_by = AggregateGuard::check(&aggregate_fragment, query.group_by_fields.as_deref());
                },
                Phase::EOF => break,
            }

            debug!(target: "sqlshape::parser", ?phase, remainder = %remainder, "phase done");
            phase = phase.next();
        }

        Ok(query)
    }

    pub fn join_type(&self) -> Option<JoinType> {
        self.join.as_ref().map(|join| join.join_type)
    }

    pub fn join_table(&self) -> Option<&str> {
        self.join.as_ref().map(|join| join.join_table.as_str())
    }

    pub fn join_condition(&self) -> Option<&JoinCondition> {
        self.join.as_ref().map(|join| &join.join_condition)
    }
}

impl TryFrom<&str> for ParsedQuery {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ParsedQuery::parse(value, &ParserConfig::default())
    }
}
