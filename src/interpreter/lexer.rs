use std::{fmt, io::BufRead};

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace, including newlines, separates tokens and is never returned.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = TokenFault)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]*([eE][+-]?[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or constant names such as `x` or `sqrt2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// Arithmetic operators and parentheses.
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Star)]
    #[token("/", |_| Operator::Slash)]
    #[token("%", |_| Operator::Percent)]
    #[token("(", |_| Operator::LParen)]
    #[token(")", |_| Operator::RParen)]
    Operator(Operator),
    /// `=`
    #[token("=")]
    Assign,
    /// `;`, and the implicit end of a statement when input runs out.
    #[token(";")]
    Terminator,
    /// `q`, which ends the session.
    #[token("q", priority = 3)]
    Quit,
}

/// Single-character operators and grouping symbols.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Operator {
    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Percent => '%',
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Assign => write!(f, "'='"),
            Self::Terminator => write!(f, "end of statement"),
            Self::Quit => write!(f, "'q'"),
        }
    }
}

/// Failure reported by the generated scanner before the lexer attaches a
/// line number.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum TokenFault {
    /// No token starts with this input.
    #[default]
    Unrecognized,
    /// The slice matched the number pattern but is not a valid `f64`.
    MalformedNumber,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(TokenFault::MalformedNumber)`: If the slice is not a valid float,
///   such as a lone `.`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, TokenFault> {
    lex.slice().parse().map_err(|_| TokenFault::MalformedNumber)
}

/// Pulls tokens from a line-oriented input stream on demand.
///
/// The lexer reads one line at a time and only when everything before it has
/// been consumed, so an interactive session never blocks on input it does not
/// need yet. A single token may be pushed back and is returned by the next
/// call to [`Lexer::next_token`].
///
/// # Example
/// ```
/// use infixcalc::interpreter::lexer::{Lexer, Operator, Token};
///
/// let mut lexer = Lexer::new("x = 2 * .5;".as_bytes());
///
/// assert_eq!(lexer.next_token().unwrap(), Token::Identifier("x".to_string()));
/// assert_eq!(lexer.next_token().unwrap(), Token::Assign);
/// assert_eq!(lexer.next_token().unwrap(), Token::Number(2.0));
/// assert_eq!(lexer.next_token().unwrap(), Token::Operator(Operator::Star));
/// assert_eq!(lexer.next_token().unwrap(), Token::Number(0.5));
/// assert_eq!(lexer.next_token().unwrap(), Token::Terminator);
/// ```
pub struct Lexer<R> {
    input:           R,
    line:            String,
    offset:          usize,
    line_number:     usize,
    buffer:          Option<Token>,
    exhausted:       bool,
    statement_ended: bool,
}

impl<R: BufRead> Lexer<R> {
    /// Creates a lexer over `input`. Nothing is read until the first token is
    /// requested.
    pub const fn new(input: R) -> Self {
        Self { input,
               line: String::new(),
               offset: 0,
               line_number: 0,
               buffer: None,
               exhausted: false,
               statement_ended: false }
    }

    /// Returns the next token.
    ///
    /// A buffered token is returned first. Otherwise leading whitespace is
    /// skipped, reading further lines as needed, and one token is scanned.
    /// When the input is exhausted, `Token::Terminator` is returned so the
    /// statement in progress ends normally.
    ///
    /// # Errors
    /// - `LexError::BadToken` for a character that starts no token.
    /// - `LexError::MalformedNumber` for an invalid numeric literal.
    /// - `LexError::Input` if reading the underlying stream fails.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let token = match self.buffer.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        self.statement_ended = token == Token::Terminator;
        Ok(token)
    }

    /// Buffers `token` so that the next call to [`Lexer::next_token`] returns
    /// it unchanged.
    ///
    /// # Errors
    /// Returns `LexError::PutbackIntoFullBuffer` if a token is already
    /// buffered; the buffered token is kept.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{
    ///     error::LexError,
    ///     interpreter::lexer::{Lexer, Token},
    /// };
    ///
    /// let mut lexer = Lexer::new("".as_bytes());
    /// lexer.push_back(Token::Number(1.0)).unwrap();
    ///
    /// let err = lexer.push_back(Token::Assign).unwrap_err();
    /// assert!(matches!(err, LexError::PutbackIntoFullBuffer { .. }));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Number(1.0));
    /// ```
    pub fn push_back(&mut self, token: Token) -> Result<(), LexError> {
        if self.buffer.is_some() {
            return Err(LexError::PutbackIntoFullBuffer { line: self.line_number });
        }
        self.buffer = Some(token);
        Ok(())
    }

    /// The 1-based number of the line most recently read, or 0 before any
    /// input has been read.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns `true` once the input stream has reported end of file.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns `true` if the next token will have to come from a fresh line of
    /// input.
    #[must_use]
    pub fn needs_input(&self) -> bool {
        self.buffer.is_none() && self.line[self.offset..].trim().is_empty()
    }

    /// Discards what is left of a statement that failed to evaluate.
    ///
    /// The pushback slot is cleared and input is skipped up to and including
    /// the next `;`, reading further lines as needed. Skipping stops early
    /// when the input runs out. Nothing is skipped when the failure happened
    /// on the statement terminator itself, since the next statement has not
    /// started yet.
    ///
    /// A read failure while skipping is not reported here; the next call to
    /// [`Lexer::next_token`] reads again and surfaces it.
    pub fn recover(&mut self) {
        let pending = self.buffer.take();
        if self.statement_ended || self.exhausted || pending == Some(Token::Terminator) {
            return;
        }

        loop {
            if let Some(i) = self.line[self.offset..].find(';') {
                self.offset += i + 1;
                self.statement_ended = true;
                return;
            }

            match self.read_line() {
                Ok(true) => {},
                Ok(false) => {
                    self.exhausted = true;
                    return;
                },
                Err(_) => return,
            }
        }
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        loop {
            let scanned = {
                let mut lex = Token::lexer(&self.line[self.offset..]);
                lex.next()
                   .map(|result| (result, lex.span().end, lex.slice().to_owned()))
            };

            if let Some((result, consumed, slice)) = scanned {
                self.offset += consumed;
                return result.map_err(|fault| match fault {
                                 TokenFault::Unrecognized => {
                                     LexError::BadToken { token: slice,
                                                          line:  self.line_number, }
                                 },
                                 TokenFault::MalformedNumber => {
                                     LexError::MalformedNumber { literal: slice,
                                                                 line:    self.line_number, }
                                 },
                             });
            }

            if !self.read_line()? {
                self.exhausted = true;
                return Ok(Token::Terminator);
            }
        }
    }

    fn read_line(&mut self) -> Result<bool, LexError> {
        self.line.clear();
        self.offset = 0;
        let read = self.input.read_line(&mut self.line).map_err(LexError::Input)?;
        if read == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }
}
