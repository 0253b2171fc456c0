use crate::parser::{QueryComparers, WordComparer};

/// Keyword hit reported by [`QueryParser::find`]: char offsets of the
/// keyword and the index of the comparer that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPosition {
    pub start: usize,
    pub end: usize,
    pub comparer: usize,
}

/// Char cursor over one fragment of a query.
#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(text: &str) -> Self {
        let text_v: Vec<char> = text.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            comparers: QueryComparers::new(),
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn char_at(&self, index: usize) -> char {
        if index < self.length {
            return self.text_v[index];
        }

        '\0'
    }

    pub fn current(&self) -> char {
        self.char_at(self.position)
    }

    pub fn next(&mut self) {
        if self.position < self.length {
            self.position += 1;
        }
    }

    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    pub fn rest(&self) -> String {
        self.text_from_range(self.position, self.length)
    }

    /// Reads a run of identifier chars (`[A-Za-z0-9_.]`) at the cursor.
    pub fn read_identifier(&mut self) -> Option<String> {
        let pivot = self.position;
        while !self.eof() && Self::is_identifier_char(self.current()) {
            self.next();
        }

        if pivot == self.position {
            return None;
        }
        Some(self.text_from_pivot(pivot))
    }

    /// Reads a run of ASCII digits at the cursor.
    pub fn read_digits(&mut self) -> Option<String> {
        let pivot = self.position;
        while !self.eof() && self.current().is_ascii_digit() {
            self.next();
        }

        if pivot == self.position {
            return None;
        }
        Some(self.text_from_pivot(pivot))
    }

    pub fn is_identifier_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '.'
    }

    pub fn is_quote(ch: char) -> bool {
        ch == '\'' || ch == '"'
    }

    /// First occurrence, at or after `from`, of any of `comparers`. Text inside
    /// quoted literals is never matched.
    pub fn find(&self, comparers: &[&WordComparer], from: usize) -> Option<TokenPosition> {
        let mut quote: Option<char> = None;
        let mut index = from;
        while index < self.length {
            let ch = self.text_v[index];
            match quote {
                Some(open) => {
                    if ch == open {
                        quote = None;
                    }
                },
                None if Self::is_quote(ch) => quote = Some(ch),
                None => {
                    for (comparer, word) in comparers.iter().enumerate() {
                        if let Some(length) = word.match_at(self, index) {
                            tracing::trace!(target: "sqlshape::parser", keyword = %word.keyword, start = index, "keyword found");
                            return Some(TokenPosition { start: index, end: index + length, comparer });
                        }
                    }
                },
            }
            index += 1;
        }

        None
    }

    /// Splits on commas that sit outside parentheses and quoted literals.
    /// Pieces are trimmed.
    pub fn split_top_level(&self) -> Vec<String> {
        let mut pieces = vec![];
        let mut quote: Option<char> = None;
        let mut depth = 0usize;
        let mut pivot = 0;

        for (index, &ch) in self.text_v.iter().enumerate() {
            match quote {
                Some(open) => {
                    if ch == open {
                        quote = None;
                    }
                },
                None => match ch {
                    '\'' | '"' => quote = Some(ch),
                    '(' => depth += 1,
                    ')' => depth = depth.saturating_sub(1),
                    ',' if depth == 0 => {
                        pieces.push(self.text_from_range(pivot, index).trim().to_string());
                        pivot = index + 1;
                    },
                    _ => {},
                },
            }
        }
        pieces.push(self.text_from_range(pivot, self.length).trim().to_string());

        pieces
    }

    /// Joins the text before `start` and after `end`, dropping the span.
    pub fn cut(&self, start: usize, end: usize) -> String {
        let before = self.text_from_range(0, start);
        let after = self.text_from_range(end, self.length);
        let before = before.trim_end();
        let after = after.trim_start();

        if before.is_empty() || after.is_empty() {
            return format!("{}{}", before, after);
        }
        format!("{} {}", before, after)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::QueryParser;

    #[test]
    pub fn test_find_skips_literals() {
        let parser = QueryParser::new("a = 'x WHERE y' WHERE b = 1");

        let found = parser.find(&[&parser.comparers.r#where], 0).expect("Failed to find where");

        assert_eq!(found.start, 16);
        assert_eq!(found.end, 21);
        assert_eq!(found.comparer, 0);
    }

    #[test]
    pub fn test_find_reports_comparer() {
        let parser = QueryParser::new("SELECT a FROM t LEFT JOIN u ON t.id = u.id");

        let found = parser.find(&parser.comparers.joins(), 0).expect("Failed to find join");

        assert_eq!(found.comparer, 1);
        assert_eq!(parser.text_from_range(found.start, found.end), "LEFT JOIN");
    }

    #[test]
    pub fn test_find_none() {
        let parser = QueryParser::new("SELECT a FROM t");

        assert!(parser.find(&[&parser.comparers.r#where], 0).is_none());
    }

    #[test]
    pub fn test_split_top_level() {
        let parser = QueryParser::new("a, COUNT(b, c), f(g(h, i), j), 'x, y'");

        let pieces = parser.split_top_level();

        assert_eq!(pieces, vec!["a", "COUNT(b, c)", "f(g(h, i), j)", "'x, y'"]);
    }

    #[test]
    pub fn test_cut() {
        let parser = QueryParser::new("SELECT * FROM t LIMIT 10 OFFSET 5");

        assert_eq!(parser.cut(16, 24), "SELECT * FROM t OFFSET 5");
        assert_eq!(parser.cut(15, 33), "SELECT * FROM t");
    }

    #[test]
    pub fn test_read_identifier() {
        let mut parser = QueryParser::new("t1.id= t2.id");

        assert_eq!(parser.read_identifier().as_deref(), Some("t1.id"));
        assert_eq!(parser.current(), '=');
        assert!(parser.read_identifier().is_none());
    }
}
