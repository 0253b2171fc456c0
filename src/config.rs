/// How ORDER BY direction tokens are treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DirectionPolicy {
    /// Any token after the field name is kept, upper-cased.
    #[default]
    Permissive,
    /// Only `ASC` and `DESC` are accepted.
    Strict,
}

/// What to do when a query carries more than one JOIN.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum JoinPolicy {
    /// Keep the first join, ignore the rest.
    #[default]
    FirstOnly,
    /// Fail the parse.
    RejectMultiple,
}

/// Parser configuration.
///
/// - `direction_policy` controls validation of ORDER BY directions.
/// - `join_policy` controls queries with several JOIN clauses.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParserConfig {
    pub direction_policy: DirectionPolicy,
    pub join_policy: JoinPolicy,
}

impl ParserConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with explicit policies.
    pub fn from(direction_policy: DirectionPolicy, join_policy: JoinPolicy) -> Self {
        Self {
            direction_policy,
            join_policy,
        }
    }

    /// Convenience: reject unknown ORDER BY directions and extra joins.
    pub fn strict() -> Self {
        Self::from(DirectionPolicy::Strict, JoinPolicy::RejectMultiple)
    }

    pub fn with_direction_policy(mut self, direction_policy: DirectionPolicy) -> Self {
        self.direction_policy = direction_policy;
        self
    }

    pub fn with_join_policy(mut self, join_policy: JoinPolicy) -> Self {
        self.join_policy = join_policy;
        self
    }
}
