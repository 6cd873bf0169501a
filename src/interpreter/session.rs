use std::io::{BufRead, Write};

use crate::{
    error::CalcResult,
    interpreter::{
        evaluator::core::Context,
        lexer::{Lexer, Token},
        symbols::SymbolTable,
    },
};

/// Printed before reading a fresh line of interactive input.
pub const PROMPT: &str = "> ";
/// Printed when the session ends on the quit token.
pub const GOODBYE: &str = "Quitting program.";

/// What happens to a statement that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Report the error, skip the rest of the statement and keep going.
    #[default]
    Recover,
    /// Stop the session and return the error.
    Abort,
}

/// Presentation and error handling switches for [`Session::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Print the banner listing the constants before the first prompt.
    pub banner:   bool,
    /// Print [`PROMPT`] whenever a new line of input is needed.
    pub prompt:   bool,
    /// What [`Session::run`] does when a statement fails.
    pub on_error: ErrorPolicy,
}

impl SessionOptions {
    /// Options for an unattended run: no banner, no prompts, errors recovered.
    #[must_use]
    pub const fn quiet() -> Self {
        Self { banner:   false,
               prompt:   false,
               on_error: ErrorPolicy::Recover, }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { banner:   true,
               prompt:   true,
               on_error: ErrorPolicy::Recover, }
    }
}

/// The result of driving the session up to the next observable event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A statement was closed by a terminator. An empty statement yields `0`.
    Value(f64),
    /// The quit token was read.
    Quit,
    /// The input ran out with no statement in progress.
    EndOfInput,
}

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The quit token was read; the goodbye line has been written.
    Quit,
    /// The input ran out.
    EndOfInput,
}

/// Drives repeated statement evaluation over one input stream.
///
/// A session owns the lexer and the evaluation context, so variables assigned
/// by one statement are visible to every later one.
///
/// # Example
/// ```
/// use infixcalc::interpreter::session::{Outcome, Session};
///
/// let mut session = Session::new("x = 5; x + 1; q".as_bytes());
///
/// assert_eq!(session.next_outcome().unwrap(), Outcome::Value(5.0));
/// assert_eq!(session.next_outcome().unwrap(), Outcome::Value(6.0));
/// assert_eq!(session.next_outcome().unwrap(), Outcome::Quit);
/// ```
pub struct Session<R> {
    lexer:   Lexer<R>,
    context: Context,
    options: SessionOptions,
}

impl<R: BufRead> Session<R> {
    /// Creates a session over `input` with a fresh context and default
    /// options.
    pub fn new(input: R) -> Self {
        Self::with_context(input, Context::new())
    }

    /// Creates a session over `input` that evaluates in `context`.
    pub fn with_context(input: R, context: Context) -> Self {
        Self { lexer: Lexer::new(input),
               context,
               options: SessionOptions::default() }
    }

    /// Replaces the session options.
    #[must_use]
    pub fn options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// The symbol table as the statements evaluated so far have left it.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.context.symbols
    }

    /// Evaluates statements until a terminator, the quit token or the end of
    /// input.
    ///
    /// Each expression read replaces the pending value, so `2 3;` yields `3`.
    /// The quit token ends the session at once, discarding any pending value.
    ///
    /// # Errors
    /// Returns the first error raised by the lexer or the evaluator. The
    /// session is left usable; call [`Session::recover`] before continuing.
    pub fn next_outcome(&mut self) -> CalcResult<Outcome> {
        let mut pending = None;
        loop {
            match self.lexer.next_token()? {
                Token::Quit => return Ok(Outcome::Quit),
                Token::Terminator => {
                    if pending.is_none() && self.lexer.is_exhausted() {
                        return Ok(Outcome::EndOfInput);
                    }
                    return Ok(Outcome::Value(pending.unwrap_or_default()));
                },
                token => {
                    self.lexer.push_back(token)?;
                    pending = Some(self.context.expression(&mut self.lexer)?);
                },
            }
        }
    }

    /// Skips the remainder of a statement that failed.
    pub fn recover(&mut self) {
        self.lexer.recover();
    }

    /// Runs the interactive loop until quit or end of input.
    ///
    /// Results are written to `out` as `= <value>`, one per statement. Errors
    /// in a statement are written to `err` and, under
    /// [`ErrorPolicy::Recover`], evaluation resumes with the next statement.
    ///
    /// # Errors
    /// - Any statement error under [`ErrorPolicy::Abort`].
    /// - Failures to read input or write output, under either policy.
    ///
    /// # Example
    /// ```
    /// use infixcalc::interpreter::session::{Session, SessionEnd, SessionOptions};
    ///
    /// let mut out = Vec::new();
    /// let mut err = Vec::new();
    /// let end = Session::new("1 - 2 - 3;\ny;\n(2 + 3) * 4;\nq\n".as_bytes())
    ///     .options(SessionOptions::quiet())
    ///     .run(&mut out, &mut err)
    ///     .unwrap();
    ///
    /// assert_eq!(end, SessionEnd::Quit);
    /// assert_eq!(String::from_utf8(out).unwrap(), "= -4\n= 20\nQuitting program.\n");
    /// assert_eq!(String::from_utf8(err).unwrap(), "Error on line 2: y not defined.\n");
    /// ```
    pub fn run<W: Write, E: Write>(&mut self, out: &mut W, err: &mut E) -> CalcResult<SessionEnd> {
        if self.options.banner {
            writeln!(out, "{}", banner())?;
        }

        loop {
            if self.options.prompt && self.lexer.needs_input() {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            match self.next_outcome() {
                Ok(Outcome::Value(value)) => writeln!(out, "= {value}")?,
                Ok(Outcome::Quit) => {
                    writeln!(out, "{GOODBYE}")?;
                    return Ok(SessionEnd::Quit);
                },
                Ok(Outcome::EndOfInput) => return Ok(SessionEnd::EndOfInput),
                Err(e) if self.options.on_error == ErrorPolicy::Recover && e.is_recoverable() => {
                    writeln!(err, "{e}")?;
                    self.recover();
                },
                Err(e) => return Err(e),
            }
        }
    }
}

/// The startup line listing the seeded constants.
///
/// # Example
/// ```
/// use infixcalc::interpreter::session::banner;
///
/// assert!(banner().contains("pi, e, tau, phi, sqrt2, sqrt3"));
/// ```
#[must_use]
pub fn banner() -> String {
    let names = SymbolTable::constant_names().collect::<Vec<_>>().join(", ");
    format!("Enter equations to calculate. For mathematical constants {names} type as listed \
             here, type 'q' to quit. Each equation must end with ';'")
}
