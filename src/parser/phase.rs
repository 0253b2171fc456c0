/// Pipeline stages, in the order they run. Each stage consumes the
/// remainder left by the previous one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    Distinct = 0,
    Limit = 1,
    OrderBy = 2,
    GroupBy = 3,
    Criteria = 4,
    Joins = 5,
    Projection = 6,
    Conditions = 7,
    Aggregates = 8,
    EOF = 9,
}

impl Phase {
    pub fn next(self) -> Self {
        match self {
            Phase::Distinct => Phase::Limit,
            Phase::Limit => Phase::OrderBy,
            Phase::OrderBy => Phase::GroupBy,
            Phase::GroupBy => Phase::Criteria,
            Phase::Criteria => Phase::Joins,
            Phase::Joins => Phase::Projection,
            Phase::Projection => Phase::Conditions,
            Phase::Conditions => Phase::Aggregates,
            Phase::Aggregates => Phase::EOF,
            Phase::EOF => Phase::EOF,
        }
    }
}
