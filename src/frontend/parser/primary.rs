use log::trace;

use crate::{
    ast::Expr,
    frontend::{
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::unexpected,
        },
        token::{Token, TokenKind},
    },
};

/// Parses a primary expression.
///
/// A primary is a number literal, or an identifier optionally followed by any
/// number of index suffixes.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER ("[" expression "]")*
/// ```
/// # Errors
/// Returns `UnexpectedToken` when the next token starts no primary, or
/// `UnexpectedEndOfInput` when the input has run out.
pub fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let spanned = tokens.advance()?;
    match spanned.token {
        Token::Number(value) => {
            tokens.settle(1, spanned.position)?;
            Ok(Expr::literal(value))
        },
        Token::Identifier(name) => {
            tokens.settle(1, spanned.position)?;
            parse_postfix(tokens, Expr::Variable { name })
        },
        _ => Err(unexpected(spanned, &[TokenKind::Identifier, TokenKind::Number])),
    }
}

/// Parses index suffixes applied to a variable.
///
/// Indexing chains to the left, so `a[i][j]` parses as `(a[i])[j]`, and binds
/// tighter than every operator. The expression inside brackets is a full
/// expression, assignments included, parsed one level deeper than the index
/// node holding it.
///
/// Grammar: `postfix := postfix "[" expression "]" | variable`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the identifier.
/// - `node`: The variable the suffixes apply to.
///
/// # Errors
/// Returns a `ParseError` if a `[` is not closed by `]` or the index
/// expression fails to parse.
fn parse_postfix(tokens: &mut TokenStream<'_>, mut node: Expr) -> ParseResult<Expr> {
    let mut height = tokens.height();
    while let Some(open) = tokens.eat(TokenKind::LBracket)? {
        tokens.descend();
        let index = parse_expression(tokens);
        tokens.ascend();
        let index = index?;
        tokens.expect(TokenKind::RBracket)?;

        height = height.max(tokens.height()) + 1;
        tokens.settle(height, open.position)?;
        trace!("reduce index at {}", open.position);
        node = Expr::index(node, index);
    }
    Ok(node)
}
