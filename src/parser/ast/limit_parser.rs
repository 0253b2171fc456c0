use crate::parser::{ParseError, ParseErrorKind, QueryParser};

pub struct LimitParser;

impl LimitParser {
    /// Removes the first `LIMIT <digits>`. Only the digit run is consumed, so
    /// `LIMIT 10abc` yields 10 and leaves `abc` in the remainder. A `LIMIT`
    /// keyword not followed by a number is left where it is.
    pub fn extract(text: &str) -> Result<(Option<u64>, String), ParseError> {
        let mut parser = QueryParser::new(text);

        let mut from = 0;
        loop {
            let Some(found) = parser.find(&[&parser.comparers.limit], from) else {
                break;
            };
            parser.position = found.end;
            parser.next_non_whitespace();

            if let Some(digits) = parser.read_digits() {
                let limit = digits.parse::<u64>().map_err(|_| {
                    ParseError::new(ParseErrorKind::LimitSyntax, "Invalid LIMIT value", &digits)
                })?;
                return Ok((Some(limit), parser.cut(found.start, parser.position)));
            }
            from = found.end;
        }

        Ok((None, text.to_string()))
    }
}
