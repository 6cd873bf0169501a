#[derive(Debug)]
/// Represents all errors that can occur while producing tokens.
pub enum LexError {
    /// A character that does not start any token.
    BadToken {
        /// The offending input.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Something that started like a number but is not a valid `f64` literal.
    MalformedNumber {
        /// The literal as it appeared in the input.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A token was pushed back while another one was still buffered.
    PutbackIntoFullBuffer {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from the underlying input failed.
    Input(std::io::Error),
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken { token, line } => {
                write!(f, "Error on line {line}: bad token '{token}'.")
            },
            Self::MalformedNumber { literal, line } => {
                write!(f, "Error on line {line}: malformed number '{literal}'.")
            },
            Self::PutbackIntoFullBuffer { line } => {
                write!(f, "Error on line {line}: putback into full buffer.")
            },
            Self::Input(e) => write!(f, "Failed to read input: {e}"),
        }
    }
}

impl std::error::Error for LexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            _ => None,
        }
    }
}
