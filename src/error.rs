use thiserror::Error as ThisError;

use crate::frontend::token::Position;

/// Lexing errors.
///
/// Defines the errors raised while turning source text into tokens: characters
/// that start no token and integer literals that do not fit in 64 bits.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the errors raised while building the expression tree: missing or
/// unexpected tokens, premature end of input, assignments to expressions that
/// cannot be assigned to, and excessive nesting.
pub mod parse_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error produced while turning source text into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Tokenization failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Tree construction failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the source position the error refers to.
    ///
    /// ## Example
    /// ```
    /// use runic::parse;
    ///
    /// let error = parse("a +\n  $").unwrap_err();
    /// assert_eq!((error.position().line, error.position().column), (2, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(error) => error.position(),
            Self::Parse(error) => error.position(),
        }
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
