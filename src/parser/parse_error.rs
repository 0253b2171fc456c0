use thiserror::Error;

/// Which stage of the pipeline rejected the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    SelectSyntax,
    WhereSyntax,
    JoinSyntax,
    OrderBySyntax,
    GroupBySyntax,
    LimitSyntax,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Query parsing error: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// Fragment the failing stage was looking at.
    pub text: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: &str, text: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            text: text.to_string(),
        }
    }

    pub fn err<T>(self) -> Result<T, ParseError> {
        Err(self)
    }
}
