use thiserror::Error;

use crate::frontend::token::Position;

/// Represents all errors that can occur while tokenizing source text.
///
/// Lexical errors are fatal: the lexer stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("{position}: unexpected character {character:?}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// An integer literal too large for a signed 64-bit integer.
    #[error("{position}: integer literal {literal} does not fit in 64 bits")]
    NumericOverflow {
        /// The digits of the literal, as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Returns the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::NumericOverflow { position, .. } => {
                *position
            },
        }
    }
}
