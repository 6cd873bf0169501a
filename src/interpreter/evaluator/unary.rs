use std::io::BufRead;

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Lexer, Operator, Token},
    },
};

/// The name reserved for ending a session.
pub const QUIT_NAME: &str = "q";

impl Context {
    /// Evaluates a primary expression.
    ///
    /// Unary signs are right-associative and may be stacked, so `--5` is `5`.
    ///
    /// Grammar:
    /// ```text
    ///     primary := number
    ///              | "(" expression ")"
    ///              | "-" primary
    ///              | "+" primary
    ///              | identifier ("=" expression)?
    /// ```
    /// # Parameters
    /// - `lexer`: Token source positioned at the start of a primary.
    /// - `depth`: Current nesting depth; groups, signs and assignments each
    ///   add one.
    ///
    /// # Errors
    /// - `ParseError::ExpectedClosingParen` if a group is not closed.
    /// - `ParseError::PrimaryExpected` for any other leading token.
    /// - `ParseError::NestingTooDeep` past the nesting limit.
    /// - `EvalError::UnexpectedQuit` if `q` appears inside an expression.
    pub(crate) fn eval_primary<R: BufRead>(&mut self,
                                           lexer: &mut Lexer<R>,
                                           depth: usize)
                                           -> EvalResult<f64> {
        self.check_depth(lexer, depth)?;

        match lexer.next_token()? {
            Token::Number(value) => Ok(value),
            Token::Operator(Operator::LParen) => {
                let value = self.eval_expression(lexer, depth + 1)?;
                match lexer.next_token()? {
                    Token::Operator(Operator::RParen) => Ok(value),
                    token => Err(ParseError::ExpectedClosingParen { found: token.to_string(),
                                                                    line:  lexer.line_number(), }.into()),
                }
            },
            Token::Operator(Operator::Minus) => Ok(-self.eval_primary(lexer, depth + 1)?),
            Token::Operator(Operator::Plus) => self.eval_primary(lexer, depth + 1),
            Token::Identifier(name) => self.eval_identifier(lexer, name, depth),
            Token::Quit => Err(EvalError::UnexpectedQuit { line: lexer.line_number() }.into()),
            token => Err(ParseError::PrimaryExpected { found: token.to_string(),
                                                       line:  lexer.line_number(), }.into()),
        }
    }

    /// Evaluates an identifier, which is either a lookup or an assignment.
    ///
    /// The token after the name decides: `=` assigns the value of the whole
    /// following expression, which makes assignment right-associative
    /// (`a = b = 2` sets both). Anything else is pushed back and the name is
    /// looked up.
    ///
    /// # Errors
    /// - `EvalError::UnexpectedQuit` when assigning to the quit name.
    /// - `EvalError::NotDefined` when looking up an unbound name.
    fn eval_identifier<R: BufRead>(&mut self,
                                   lexer: &mut Lexer<R>,
                                   name: String,
                                   depth: usize)
                                   -> EvalResult<f64> {
        let next = lexer.next_token()?;
        if next == Token::Assign {
            if name == QUIT_NAME {
                return Err(EvalError::UnexpectedQuit { line: lexer.line_number() }.into());
            }
            let value = self.eval_expression(lexer, depth + 1)?;
            self.symbols.set(&name, value);
            return Ok(value);
        }

        lexer.push_back(next)?;
        self.symbols
            .get(&name)
            .ok_or_else(|| EvalError::NotDefined { name, line: lexer.line_number() }.into())
    }
}
