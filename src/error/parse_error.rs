#[derive(Debug, PartialEq, Eq)]
/// Represents all errors caused by a token sequence of the wrong shape.
pub enum ParseError {
    /// A parenthesized expression was not closed.
    ExpectedClosingParen {
        /// The token found where `)` should have been.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A number, identifier, `(` or unary sign was expected.
    PrimaryExpected {
        /// The token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Parentheses, unary signs or assignments were nested deeper than the
    /// configured limit.
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedClosingParen { found, line } => {
                write!(f, "Error on line {line}: ')' expected, found {found}.")
            },
            Self::PrimaryExpected { found, line } => {
                write!(f, "Error on line {line}: primary expected, found {found}.")
            },
            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: expression nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
