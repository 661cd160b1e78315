use crate::{
    error::{Error, ParseError},
    frontend::token::{Spanned, TokenKind},
};

/// Builds the error for a token the grammar does not allow here.
///
/// Reaching the end of input is reported as `UnexpectedEndOfInput`, anything
/// else as `UnexpectedToken` listing the `expected` kinds.
pub(in crate::frontend::parser) fn unexpected(found: Spanned, expected: &[TokenKind]) -> Error {
    let Spanned { token, position } = found;
    if token.is_end() {
        ParseError::UnexpectedEndOfInput { position }.into()
    } else {
        ParseError::UnexpectedToken { expected: expected.to_vec(),
                                      found: token,
                                      position }.into()
    }
}
