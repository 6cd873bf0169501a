/// Lexing errors.
///
/// Raised while turning raw input into tokens: unrecognized characters,
/// malformed numeric literals, misuse of the pushback slot and failures of the
/// underlying reader.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token sequence does not have the shape the grammar
/// requires, such as a missing `)` or a missing primary.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised while computing a value: undefined variables, division or modulo by
/// zero and illegal use of the quit identifier.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Result type shared by the lexer, evaluator and session loop.
pub type CalcResult<T> = Result<T, CalcError>;

/// Exit code used for errors that abort a statement.
pub const EXIT_RUNTIME_ERROR: u8 = 1;
/// Exit code used for every other failure.
pub const EXIT_UNEXPECTED_ERROR: u8 = 2;

#[derive(Debug)]
/// Any failure that can end the evaluation of a statement.
pub enum CalcError {
    /// The input could not be split into tokens.
    Lex(LexError),
    /// The tokens did not form a valid expression.
    Parse(ParseError),
    /// The expression was well formed but could not be evaluated.
    Eval(EvalError),
    /// Writing output failed, or a source could not be opened.
    Io(std::io::Error),
}

impl CalcError {
    /// Returns `true` when the session may report this error and carry on with
    /// the next statement.
    ///
    /// Failures of the underlying input or output streams are never
    /// recoverable, because the next statement would hit the same stream.
    ///
    /// # Example
    /// ```
    /// use infixcalc::error::{CalcError, EvalError};
    ///
    /// let err = CalcError::from(EvalError::DivideByZero { line: 1 });
    /// assert!(err.is_recoverable());
    ///
    /// let err = CalcError::from(std::io::Error::other("closed"));
    /// assert!(!err.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Lex(LexError::Input(_)) | Self::Io(_) => false,
            Self::Lex(_) | Self::Parse(_) | Self::Eval(_) => true,
        }
    }

    /// Returns the process exit code for this error when it reaches the top
    /// level.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_recoverable() {
            EXIT_RUNTIME_ERROR
        } else {
            EXIT_UNEXPECTED_ERROR
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl From<std::io::Error> for CalcError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
