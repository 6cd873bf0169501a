#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while computing a value.
pub enum EvalError {
    /// Looked up a name that was never assigned and is not a constant.
    NotDefined {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right operand of `/` was exactly zero.
    DivideByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The right operand of `%` truncated to zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand of `%` cannot be truncated to a 64-bit integer.
    ModuloOperandOutOfRange {
        /// The operand as a float.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The quit identifier `q` was used inside an expression.
    UnexpectedQuit {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotDefined { name, line } => {
                write!(f, "Error on line {line}: {name} not defined.")
            },
            Self::DivideByZero { line } => write!(f, "Error on line {line}: divide by zero."),
            Self::ModuloByZero { line } => write!(f, "Error on line {line}: modulo by zero."),
            Self::ModuloOperandOutOfRange { value, line } => write!(f,
                                                                    "Error on line {line}: {value} cannot be truncated to an integer for '%'."),
            Self::UnexpectedQuit { line } => {
                write!(f, "Error on line {line}: unexpected quit token.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
