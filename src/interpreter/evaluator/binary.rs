use std::io::BufRead;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Lexer, Operator, Token},
    },
    util::num::f64_to_i64_truncated,
};

impl Context {
    /// Evaluates addition and subtraction.
    ///
    /// Operators are applied left to right as they are read, so `1 - 2 - 3`
    /// is `(1 - 2) - 3`. The first token that is not `+` or `-` is pushed back
    /// and the running total returned.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// # Parameters
    /// - `lexer`: Token source.
    /// - `depth`: Current nesting depth.
    pub(crate) fn eval_expression<R: BufRead>(&mut self,
                                              lexer: &mut Lexer<R>,
                                              depth: usize)
                                              -> EvalResult<f64> {
        let mut left = self.eval_term(lexer, depth)?;
        loop {
            match lexer.next_token()? {
                Token::Operator(Operator::Plus) => left += self.eval_term(lexer, depth)?,
                Token::Operator(Operator::Minus) => left -= self.eval_term(lexer, depth)?,
                token => {
                    lexer.push_back(token)?;
                    return Ok(left);
                },
            }
        }
    }

    /// Evaluates multiplication, division and modulo.
    ///
    /// Like [`Context::eval_expression`], but one precedence level higher.
    ///
    /// The rule is: `term := primary (("*" | "/" | "%") primary)*`
    ///
    /// # Parameters
    /// - `lexer`: Token source.
    /// - `depth`: Current nesting depth.
    ///
    /// # Errors
    /// Fails on division or modulo by zero, besides anything raised by the
    /// operands.
    pub(crate) fn eval_term<R: BufRead>(&mut self,
                                        lexer: &mut Lexer<R>,
                                        depth: usize)
                                        -> EvalResult<f64> {
        let mut left = self.eval_primary(lexer, depth)?;
        loop {
            match lexer.next_token()? {
                Token::Operator(Operator::Star) => left *= self.eval_primary(lexer, depth)?,
                Token::Operator(Operator::Slash) => {
                    let right = self.eval_primary(lexer, depth)?;
                    left = Self::divide(left, right, lexer.line_number())?;
                },
                Token::Operator(Operator::Percent) => {
                    let right = self.eval_primary(lexer, depth)?;
                    left = Self::modulo(left, right, lexer.line_number())?;
                },
                token => {
                    lexer.push_back(token)?;
                    return Ok(left);
                },
            }
        }
    }

    /// Divides `left` by `right`.
    ///
    /// # Errors
    /// Returns `EvalError::DivideByZero` if `right` is zero (of either sign).
    ///
    /// # Example
    /// ```
    /// use infixcalc::{error::EvalError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::divide(7.0, 2.0, 1).unwrap(), 3.5);
    /// assert_eq!(Context::divide(1.0, -0.0, 3).unwrap_err(),
    ///            EvalError::DivideByZero { line: 3 });
    /// ```
    pub fn divide(left: f64, right: f64, line: usize) -> Result<f64, EvalError> {
        if right == 0.0 {
            return Err(EvalError::DivideByZero { line });
        }
        Ok(left / right)
    }

    /// Computes the integer remainder of `left` and `right`.
    ///
    /// Both operands are truncated toward zero before the remainder is taken,
    /// and the sign of the result follows `left`. A divisor such as `0.5`
    /// truncates to zero and is rejected even though it is not zero itself.
    ///
    /// # Errors
    /// - `EvalError::ModuloByZero` if `right` truncates to zero.
    /// - `EvalError::ModuloOperandOutOfRange` if an operand does not fit in an
    ///   `i64`.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{error::EvalError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::modulo(7.9, 2.0, 1).unwrap(), 1.0);
    /// assert_eq!(Context::modulo(-7.0, 3.0, 1).unwrap(), -1.0);
    /// assert_eq!(Context::modulo(5.0, 0.5, 2).unwrap_err(),
    ///            EvalError::ModuloByZero { line: 2 });
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn modulo(left: f64, right: f64, line: usize) -> Result<f64, EvalError> {
        let divisor = f64_to_i64_truncated(right, line)?;
        if divisor == 0 {
            return Err(EvalError::ModuloByZero { line });
        }
        let dividend = f64_to_i64_truncated(left, line)?;
        Ok(dividend.wrapping_rem(divisor) as f64)
    }
}
