use std::fmt;

use crate::{interpreter::value::numeric::Numeric, util::position::Span};

/// A binary operator.
///
/// Arithmetic operators produce a new number; comparison operators produce
/// `1` for true and `0` for false; `aur` and `ya` produce the deciding
/// operand as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `aur`
    And,
    /// `ya`
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::And => "aur",
            Self::Or => "ya",
        };
        write!(f, "{symbol}")
    }
}

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+`, the identity.
    Plus,
    /// `-`, numeric negation.
    Negate,
    /// `ulta`, logical negation.
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "ulta"),
        }
    }
}

/// One `condition then result` arm of an `if` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalCase {
    pub condition: Node,
    pub result:    Node,
}

/// A node of the abstract syntax tree.
///
/// Every variant records the span it was parsed from. Spans are used for
/// error reporting only and never influence evaluation. A parent's span
/// always covers the spans of its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An integer or float literal.
    Number {
        /// The literal value.
        value: Numeric,
        /// Source span of the literal.
        span:  Span,
    },
    /// An infix operation such as `a + b` or `a aur b`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Span from the start of `left` to the end of `right`.
        span:  Span,
    },
    /// A prefix operation such as `-a` or `ulta a`.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Span from the operator to the end of the operand.
        span:    Span,
    },
    /// A variable read.
    VarAccess {
        /// Name of the variable.
        name: String,
        /// Span of the identifier.
        span: Span,
    },
    /// `soch <name> <value> hai`.
    VarAssign {
        /// Name of the variable being bound.
        name:  String,
        /// Expression whose value is bound.
        value: Box<Self>,
        /// Span from `soch` to `hai`.
        span:  Span,
    },
    /// `if .. then .. (elif .. then ..)* (else ..)?`.
    Conditions {
        /// The `if` and `elif` arms, in source order. Never empty.
        cases:     Vec<ConditionalCase>,
        /// The `else` arm, if present.
        else_case: Option<Box<Self>>,
        /// Span from `if` to the end of the last arm.
        span:      Span,
    },
}

impl Node {
    /// Returns the source span of this node.
    ///
    /// # Example
    /// ```
    /// use soch::{
    ///     ast::Node,
    ///     interpreter::value::numeric::Numeric,
    ///     util::position::{Position, Span},
    /// };
    ///
    /// let span = Span::new(Position::new(0, 0, 0), Position::new(1, 0, 1));
    /// let node = Node::Number { value: Numeric::Int(1),
    ///                           span };
    /// assert_eq!(node.span(), span);
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::VarAccess { span, .. }
            | Self::VarAssign { span, .. }
            | Self::Conditions { span, .. } => *span,
        }
    }
}
