use crate::parser::QueryParser;

/// Case-insensitive keyword matcher used by the scanner.
///
/// A keyword may span several words (`ORDER BY`, `INNER JOIN`); any run of
/// whitespace is accepted between them. Prefix and postfix rules decide what
/// must surround the keyword for it to count as a match.
#[derive(Debug, Default)]
pub struct WordComparer {
    pub keyword: String,
    words: Vec<Vec<char>>,
    whitespace_prefix: bool,
    whitespace_postfix: bool,
    eof: bool,
}

impl WordComparer {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_uppercase(),
            words: keyword
                .split_whitespace()
                .map(|word| word.to_uppercase().chars().collect())
                .collect(),
            whitespace_prefix: false,
            whitespace_postfix: false,
            eof: false,
        }
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_whitespace()
    }

    /// Length in chars of the keyword occurrence starting at `at`, postfix
    /// excluded.
    pub fn match_at(&self, parser: &QueryParser, at: usize) -> Option<usize> {
        if self.whitespace_prefix && (at == 0 || !Self::is_block_delimiter(parser.char_at(at - 1))) {
            return None;
        }

        let mut position = at;
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                let gap = position;
                while Self::is_block_delimiter(parser.char_at(position)) {
                    position += 1;
                }
                if gap == position {
                    return None;
                }
            }

            for expected in word {
                if position >= parser.length || *expected != parser.char_at(position).to_ascii_uppercase() {
                    return None;
                }
                position += 1;
            }
        }

        if position >= parser.length {
            return if self.eof { Some(position - at) } else { None };
        }

        if self.whitespace_postfix && !Self::is_block_delimiter(parser.char_at(position)) {
            return None;
        }

        Some(position - at)
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        self.match_at(parser, parser.position).is_some()
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_whitespace_prefix(mut self) -> Self { self.whitespace_prefix = true; self }
    pub fn with_whitespace_postfix(mut self) -> Self { self.whitespace_postfix = true; self }

    /// Keyword surrounded by whitespace on both sides, as used for clause
    /// boundaries inside a query.
    pub fn bounded(keyword: &str) -> Self {
        Self::new(keyword).with_whitespace_prefix().with_whitespace_postfix()
    }
}
