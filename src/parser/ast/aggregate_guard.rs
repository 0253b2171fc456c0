use once_cell::sync::Lazy;
use regex::Regex;

static AGGREGATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(COUNT|AVG|SUM|MIN|MAX)\b\s*\(\s*(\*|\w+)\s*\)").unwrap()
});

/// Heuristic check for an aggregate call in a query that has no GROUP BY.
/// Works on raw text: nested expressions and the field list are not
/// inspected.
pub struct AggregateGuard;

impl AggregateGuard {
    pub fn check(fragment: &str, group_by: Option<&[String]>) -> bool {
        group_by.is_none() && AGGREGATE_RE.is_match(fragment)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::AggregateGuard;

    #[test]
    pub fn test_count_star_without_group_by() {
        assert!(AggregateGuard::check("SELECT COUNT(*) FROM t", None));
    }

    #[test]
    pub fn test_with_group_by() {
        let groups = vec!["id".to_string()];

        assert!(!AggregateGuard::check("SELECT COUNT(*) FROM t", Some(&groups)));
    }

    #[test]
    pub fn test_lowercase_and_spacing() {
        assert!(AggregateGuard::check("SELECT avg ( age ) FROM t", None));
        assert!(AggregateGuard::check("SELECT name, max(score) FROM t WHERE x = 1", None));
    }

    #[test]
    pub fn test_no_aggregate() {
        assert!(!AggregateGuard::check("SELECT amount, counter FROM t", None));
        assert!(!AggregateGuard::check("SELECT MAXIMUM(a) FROM t", None));
        assert!(!AggregateGuard::check("SELECT SUM(a + b) FROM t", None));
    }
}
