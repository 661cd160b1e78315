use thiserror::Error;

use crate::frontend::token::{Position, Token, TokenKind};

/// Represents all errors that can occur while building an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token where a different one was required.
    #[error("{position}: expected {}, found {found}", describe_expected(.expected))]
    UnexpectedToken {
        /// The kinds that would have been accepted.
        expected: Vec<TokenKind>,
        /// The token encountered.
        found:    Token,
        /// Where the token starts.
        position: Position,
    },
    /// Reached the end of input in the middle of an expression.
    #[error("{position}: unexpected end of input")]
    UnexpectedEndOfInput {
        /// The position of the end of input.
        position: Position,
    },
    /// The left side of `=` is neither a variable nor an index expression.
    #[error("{position}: invalid assignment target, expected a variable or an index expression")]
    InvalidAssignmentTarget {
        /// Where the left-hand side starts.
        position: Position,
    },
    /// The expression tree is taller than the configured limit.
    #[error("{position}: expression nesting exceeds the limit of {limit}")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Where the nesting limit was crossed.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::InvalidAssignmentTarget { position }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Joins expected token kinds into `a, b or c`.
fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.describe().to_string(),
        [init @ .., last] => {
            let init = init.iter()
                           .map(|kind| kind.describe())
                           .collect::<Vec<_>>()
                           .join(", ");
            format!("{init} or {}", last.describe())
        },
    }
}
