use std::io::BufRead;

use crate::{
    error::{CalcError, ParseError},
    interpreter::{lexer::Lexer, symbols::SymbolTable},
};

/// Result type used by the evaluator.
///
/// Evaluation pulls tokens while it computes, so a failure may come from the
/// lexer, the grammar or the arithmetic itself.
pub type EvalResult<T> = Result<T, CalcError>;

/// Default limit on how deeply parentheses, unary signs and assignments may
/// nest inside one statement.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Stores the runtime evaluation context.
///
/// The context owns the symbol table for the whole session. Expressions are
/// evaluated in a single pass straight from the token stream: nothing but the
/// values bound by assignments outlives a statement.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::core::Context, lexer::Lexer};
///
/// let mut context = Context::new();
/// let mut lexer = Lexer::new("x = 2 + 3 * 4;".as_bytes());
///
/// assert_eq!(context.expression(&mut lexer).unwrap(), 14.0);
/// assert_eq!(context.symbols.get("x"), Some(14.0));
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    /// Variables and constants visible to every statement.
    pub symbols:   SymbolTable,
    /// Deepest nesting accepted before evaluation gives up.
    pub max_depth: usize,
}

impl Context {
    /// Creates a context with the seeded constants and the default nesting
    /// limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_symbols(SymbolTable::new())
    }

    /// Creates a context around an existing symbol table.
    #[must_use]
    pub const fn with_symbols(symbols: SymbolTable) -> Self {
        Self { symbols,
               max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Evaluates one expression from `lexer` and returns its value.
    ///
    /// This is the entry point of the recursive descent. The token that ends
    /// the expression, usually the statement terminator, is left in the
    /// lexer's pushback slot for the caller.
    ///
    /// Assignments made before a failure stay committed; the failing
    /// assignment itself is not.
    ///
    /// # Errors
    /// Propagates any `LexError`, `ParseError` or `EvalError` raised while
    /// evaluating.
    pub fn expression<R: BufRead>(&mut self, lexer: &mut Lexer<R>) -> EvalResult<f64> {
        self.eval_expression(lexer, 0)
    }

    /// Fails once `depth` exceeds the configured nesting limit.
    pub(in crate::interpreter::evaluator) fn check_depth<R: BufRead>(&self,
                                                                     lexer: &Lexer<R>,
                                                                     depth: usize)
                                                                     -> EvalResult<()> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    line:  lexer.line_number(), }.into());
        }
        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
