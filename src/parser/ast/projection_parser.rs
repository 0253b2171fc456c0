use crate::parser::{ParseError, ParseErrorKind, QueryParser};

/// Fields and table read from `SELECT <fields> FROM <table>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub fields: Vec<String>,
    pub table: String,
}

pub struct ProjectionParser;

impl ProjectionParser {
    pub fn parse(text: &str) -> Result<Projection, ParseError> {
        let text = text.trim();
        let mut parser = QueryParser::new(text);

        if !parser.comparers.select.compare(&parser) {
            return Self::invalid(text);
        }
        parser.jump(parser.comparers.select.keyword.len());
        let select_end = parser.position;

        let Some(from) = parser.find(&[&parser.comparers.from], select_end + 1) else {
            return Self::invalid(text);
        };

        let fields_text = parser.text_from_range(select_end, from.start);
        let table = parser.text_from_range(from.end, parser.length).trim().to_string();
        if fields_text.trim().is_empty() || table.is_empty() {
            return Self::invalid(text);
        }

        let fields = QueryParser::new(fields_text.trim()).split_top_level();

        Ok(Projection { fields, table })
    }

    fn invalid<T>(text: &str) -> Result<T, ParseError> {
        ParseError::new(ParseErrorKind::SelectSyntax, "Invalid SELECT format", text).err()
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::ProjectionParser, ParseErrorKind};

    #[test]
    pub fn test_projection() {
        let result = ProjectionParser::parse("SELECT f1, f2 FROM t").expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["f1", "f2"]);
        assert_eq!(result.table, "t");
    }

    #[test]
    pub fn test_projection_function_args() {
        let result = ProjectionParser::parse("select COUNT(a,b), name from orders o").expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["COUNT(a,b)", "name"]);
        assert_eq!(result.table, "orders o");
    }

    #[test]
    pub fn test_projection_nested_function_args() {
        let result = ProjectionParser::parse("SELECT COALESCE(MAX(a, b), c), d FROM t").expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["COALESCE(MAX(a, b), c)", "d"]);
    }

    #[test]
    pub fn test_projection_multiline() {
        let result = ProjectionParser::parse("SELECT\n  a,\n  b\nFROM\n  t").expect("Failed to parse projection");

        assert_eq!(result.fields, vec!["a", "b"]);
        assert_eq!(result.table, "t");
    }

    #[test]
    pub fn test_projection_invalid() {
        for text in ["FROM t SELECT a", "SELECT a", "SELECT FROM t", "SELECTa FROM t", "SELECT a FROM"] {
            match ProjectionParser::parse(text) {
                Ok(_) => panic!(),
                Err(err) => {
                    assert_eq!(err.kind, ParseErrorKind::SelectSyntax);
                    assert_eq!(err.message, "Invalid SELECT format");
                },
            }
        }
    }
}
