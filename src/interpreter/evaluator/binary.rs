use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{number::Number, numeric::Numeric},
    },
    util::position::Span,
};

impl Interpreter {
    /// Evaluates `left <op> right`.
    ///
    /// The left operand is evaluated completely, errors included, before the
    /// right one is touched. Both operands are always evaluated: `aur` and
    /// `ya` do not short-circuit. The result is anchored at `span`, the span
    /// of the whole operation.
    pub(crate) fn visit_binary_op(&mut self,
                                  left: &Node,
                                  op: BinaryOperator,
                                  right: &Node,
                                  span: Span)
                                  -> EvalResult<Number> {
        let lhs = self.visit_value(left)?;
        let rhs = self.visit_value(right)?;
        let value = self.eval_binary(op, &lhs, &rhs)?;
        Ok(Number::new(value, span))
    }

    /// Applies a binary operator to two numbers.
    ///
    /// Comparison operators yield `1` for true and `0` for false. `aur` and
    /// `ya` yield the operand that decides the result, truncated to an
    /// integer: `2 aur 3` is `3`, `0 ya 5` is `5` and `2.5 ya 0` is `2`. Any
    /// non-zero number counts as true.
    ///
    /// # Errors
    /// [`RuntimeErrorKind::DivisionByZero`] when dividing by zero. The error
    /// is attributed to the right operand.
    ///
    /// # Example
    /// ```
    /// use soch::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::core::Interpreter,
    ///         value::{number::Number, numeric::Numeric},
    ///     },
    ///     util::position::Span,
    /// };
    ///
    /// let interpreter = Interpreter::new();
    /// let three = Number::new(3, Span::default());
    /// let four = Number::new(4, Span::default());
    ///
    /// let sum = interpreter.eval_binary(BinaryOperator::Add, &three, &four);
    /// assert_eq!(sum.unwrap(), Numeric::Int(7));
    ///
    /// let less = interpreter.eval_binary(BinaryOperator::Less, &three, &four);
    /// assert_eq!(less.unwrap(), Numeric::Int(1));
    ///
    /// let and = interpreter.eval_binary(BinaryOperator::And, &three, &four);
    /// assert_eq!(and.unwrap(), Numeric::Int(4));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       lhs: &Number,
                       rhs: &Number)
                       -> EvalResult<Numeric> {
        use BinaryOperator::{
            Add, And, Divide, Equal, Greater, GreaterEqual, Less, LessEqual, Multiply, NotEqual,
            Or, Power, Subtract,
        };

        let (a, b) = (lhs.value, rhs.value);
        let ordering = || a.numeric_cmp(b);

        Ok(match op {
               Add => a.plus(b),
               Subtract => a.subtract(b),
               Multiply => a.multiply(b),
               Divide => a.divide(b)
                          .ok_or_else(|| self.error(RuntimeErrorKind::DivisionByZero, rhs.span))?,
               Power => a.power(b),
               Equal => a.numeric_eq(b).into(),
               NotEqual => (!a.numeric_eq(b)).into(),
               Less => (ordering() == Some(Ordering::Less)).into(),
               LessEqual => matches!(ordering(), Some(Ordering::Less | Ordering::Equal)).into(),
               Greater => (ordering() == Some(Ordering::Greater)).into(),
               GreaterEqual => {
                   matches!(ordering(), Some(Ordering::Greater | Ordering::Equal)).into()
               },
               And => Numeric::Int((if a.is_true() { b } else { a }).truncated()),
               Or => Numeric::Int((if a.is_true() { a } else { b }).truncated()),
           })
    }
}
