use std::fmt;

use crate::frontend::{
    lexer::Lexer,
    token::{Token, TokenKind},
};

/// Binding strength of an assignment, the loosest construct.
const ASSIGNMENT_PRECEDENCE: u8 = 0;
/// Binding strength of literals, variables and index expressions.
const PRIMARY_PRECEDENCE: u8 = 4;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children exclusively, so a tree is always acyclic and
/// every node except the root has exactly one parent. Nodes carry no source
/// positions; two trees are equal when they have the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// Assignment of a value to a variable or an indexed element.
    ///
    /// The target is always lvalue-shaped when produced by the parser.
    Assign {
        /// The variable or index expression being assigned to.
        target: Box<Self>,
        /// The assigned value.
        value:  Box<Self>,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Indexing expression (e.g., `arr[2]`).
    Index {
        /// The expression being indexed.
        base:  Box<Self>,
        /// The index to access.
        index: Box<Self>,
    },
}

impl Expr {
    /// Builds an integer literal.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal { value }
    }

    /// Builds a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds an assignment.
    ///
    /// The target is not checked; use [`Expr::is_lvalue`] to validate trees
    /// built by hand.
    #[must_use]
    pub fn assign(target: Self, value: Self) -> Self {
        Self::Assign { target: Box::new(target),
                       value:  Box::new(value), }
    }

    /// Builds a binary operation.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds an index expression.
    #[must_use]
    pub fn index(base: Self, index: Self) -> Self {
        Self::Index { base:  Box::new(base),
                      index: Box::new(index), }
    }

    /// Returns `true` if the expression may appear on the left of `=`.
    ///
    /// Only variables and index expressions can be assigned to.
    ///
    /// ## Example
    /// ```
    /// use runic::ast::Expr;
    ///
    /// assert!(Expr::variable("a").is_lvalue());
    /// assert!(Expr::index(Expr::variable("a"), Expr::literal(0)).is_lvalue());
    /// assert!(!Expr::literal(1).is_lvalue());
    /// ```
    #[must_use]
    pub const fn is_lvalue(&self) -> bool {
        matches!(self, Self::Variable { .. } | Self::Index { .. })
    }

    /// Returns `true` if the parser can produce this exact tree.
    ///
    /// The language has no parentheses, no unary minus and only indexes
    /// identifiers, so some hand-built trees have no source form. For every
    /// tree this accepts, printing it with `Display` and parsing the text again
    /// yields an equal tree.
    ///
    /// ## Example
    /// ```
    /// use runic::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(BinaryOperator::Add, Expr::literal(1), Expr::literal(2));
    /// let product = Expr::binary(BinaryOperator::Mul, sum.clone(), Expr::literal(3));
    ///
    /// assert!(sum.is_expressible());
    /// assert!(!product.is_expressible());
    /// ```
    #[must_use]
    pub fn is_expressible(&self) -> bool {
        self.fits(ASSIGNMENT_PRECEDENCE)
    }

    const fn precedence(&self) -> u8 {
        match self {
            Self::Assign { .. } => ASSIGNMENT_PRECEDENCE,
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::Literal { .. } | Self::Variable { .. } | Self::Index { .. } => PRIMARY_PRECEDENCE,
        }
    }

    /// Checks that the tree prints as an operand of the given binding strength.
    fn fits(&self, min_precedence: u8) -> bool {
        if self.precedence() < min_precedence {
            return false;
        }
        match self {
            Self::Literal { value } => *value >= 0,
            Self::Variable { name } => is_identifier(name),
            Self::Assign { target, value } => {
                target.is_lvalue()
                && target.fits(PRIMARY_PRECEDENCE)
                && value.fits(ASSIGNMENT_PRECEDENCE)
            },
            Self::BinaryOp { op, left, right } => {
                left.fits(op.precedence()) && right.fits(op.precedence() + 1)
            },
            Self::Index { base, index } => {
                base.is_lvalue()
                && base.fits(PRIMARY_PRECEDENCE)
                && index.fits(ASSIGNMENT_PRECEDENCE)
            },
        }
    }
}

/// Returns `true` if `name` lexes as exactly one identifier.
fn is_identifier(name: &str) -> bool {
    let mut lexer = Lexer::new(name);
    matches!((lexer.next(), lexer.next()),
             (Some(Ok(first)), Some(Ok(end)))
             if first.token == Token::Identifier(name.to_string()) && end.token.is_end())
}

impl fmt::Display for Expr {
    /// Writes the canonical source form: single spaces around operators and
    /// no spaces inside brackets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name } => f.write_str(name),
            Self::Assign { target, value } => write!(f, "{target} = {value}"),
            Self::BinaryOp { op, left, right } => write!(f, "{left} {op} {right}"),
            Self::Index { base, index } => write!(f, "{base}[{index}]"),
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Every operator, loosest binding first.
    pub const ALL: [Self; 9] = [Self::Equal,
                                Self::NotEqual,
                                Self::Greater,
                                Self::Less,
                                Self::GreaterEqual,
                                Self::LessEqual,
                                Self::Add,
                                Self::Sub,
                                Self::Mul];

    /// Binding strength: comparisons `1`, additive `2`, multiplicative `3`.
    ///
    /// Assignment binds looser than every binary operator and primaries bind
    /// tighter than all of them.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Equal
            | Self::NotEqual
            | Self::Greater
            | Self::Less
            | Self::GreaterEqual
            | Self::LessEqual => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul => 3,
        }
    }

    /// Returns `true` for the six comparison operators.
    ///
    /// ## Example
    /// ```
    /// use runic::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::LessEqual.is_comparison());
    /// assert!(!BinaryOperator::Mul.is_comparison());
    /// assert_eq!(BinaryOperator::ALL.iter().filter(|op| op.is_comparison()).count(), 6);
    /// ```
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        self.precedence() == 1
    }

    /// Maps a token kind to the binary operator it spells, if any.
    ///
    /// ## Example
    /// ```
    /// use runic::{ast::BinaryOperator, frontend::token::TokenKind};
    ///
    /// assert_eq!(BinaryOperator::from_token_kind(TokenKind::Lte),
    ///            Some(BinaryOperator::LessEqual));
    /// assert_eq!(BinaryOperator::from_token_kind(TokenKind::Equal), None);
    /// ```
    #[must_use]
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Multiply => Some(Self::Mul),
            TokenKind::CmpEq => Some(Self::Equal),
            TokenKind::CmpNeq => Some(Self::NotEqual),
            TokenKind::Gt => Some(Self::Greater),
            TokenKind::Lt => Some(Self::Less),
            TokenKind::Gte => Some(Self::GreaterEqual),
            TokenKind::Lte => Some(Self::LessEqual),
            TokenKind::EndOfInput
            | TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::Equal
            | TokenKind::LBracket
            | TokenKind::RBracket => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
