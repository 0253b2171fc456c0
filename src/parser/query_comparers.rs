use crate::parser::WordComparer;

#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub distinct: WordComparer,
    pub from: WordComparer,
    pub inner_join: WordComparer,
    pub left_join: WordComparer,
    pub right_join: WordComparer,
    pub on: WordComparer,
    pub r#where: WordComparer,
    pub group_by: WordComparer,
    pub order_by: WordComparer,
    pub limit: WordComparer,
    pub and: WordComparer,
    pub or: WordComparer,
    pub like: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT").with_whitespace_postfix(),
            distinct: WordComparer::new("DISTINCT").with_whitespace_postfix(),
            from: WordComparer::bounded("FROM"),
            inner_join: WordComparer::bounded("INNER JOIN"),
            left_join: WordComparer::bounded("LEFT JOIN"),
            right_join: WordComparer::bounded("RIGHT JOIN"),
            on: WordComparer::bounded("ON"),
            r#where: WordComparer::bounded("WHERE"),
            group_by: WordComparer::bounded("GROUP BY"),
            order_by: WordComparer::bounded("ORDER BY"),
            limit: WordComparer::bounded("LIMIT"),
            and: WordComparer::bounded("AND"),
            or: WordComparer::bounded("OR"),
            like: WordComparer::bounded("LIKE"),
        }
    }

    pub fn joins(&self) -> [&WordComparer; 3] {
        [&self.inner_join, &self.left_join, &self.right_join]
    }

    pub fn connectives(&self) -> [&WordComparer; 2] {
        [&self.and, &self.or]
    }
}
