use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    frontend::{
        parser::{
            binary::parse_comparison,
            core::{ParseResult, TokenStream},
        },
        token::TokenKind,
    },
};

/// Parses an assignment or anything that binds tighter.
///
/// Assignment is right-associative, so `a = b = 1` parses as `a = (b = 1)`.
/// The left side is checked before the right side is read: only variables and
/// index expressions can be assigned to.
///
/// Grammar: `assignment := comparison ("=" assignment)?`
///
/// The assignment node sits one level above both of its sides; the right side
/// is parsed one level deeper.
///
/// # Errors
/// - `InvalidAssignmentTarget` if the left side of `=` is not lvalue-shaped,
///   reported at the start of the left side.
/// - `NestingTooDeep` if the nesting limit is exceeded.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_assignment(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let start = tokens.peek()?.position;
    let target = parse_comparison(tokens)?;

    let Some(equal) = tokens.eat(TokenKind::Equal)? else {
        return Ok(target);
    };
    if !target.is_lvalue() {
        return Err(ParseError::InvalidAssignmentTarget { position: start }.into());
    }
    let target_height = tokens.height();

    tokens.descend();
    let value = parse_assignment(tokens);
    tokens.ascend();
    let value = value?;

    tokens.settle(target_height.max(tokens.height()) + 1, equal.position)?;
    trace!("reduce assignment to {target} at {start}");
    Ok(Expr::assign(target, value))
}
