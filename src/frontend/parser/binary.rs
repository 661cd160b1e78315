use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    frontend::{
        parser::{
            core::{ParseResult, TokenStream},
            primary::parse_primary,
        },
        token::Token,
    },
};

/// Parses relational and equality operators.
///
/// All six comparison operators share one precedence tier and associate to
/// the left: `a < b < c` parses as `(a < b) < c`. Comparisons are not chained
/// in any other sense.
///
/// The rule is: `comparison := additive (("==" | "!=" | ">" | "<" | ">=" |
/// "<=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with one token of lookahead.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, 1, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, 2, parse_multiplicative)
}

/// Parses multiplication.
///
/// The grammar has no division or modulo, so `*` is the only operator here.
///
/// The rule is: `multiplicative := primary ("*" primary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_associative(tokens, 3, parse_primary)
}

/// Parses one left-associative tier of binary operators.
///
/// Operands are parsed with `parse_operand`; operators are accepted while they
/// belong to the tier with the given precedence. Each reduction makes the
/// left-deep tree one level taller, so a long chain runs into the nesting
/// limit just like deeply nested brackets do.
fn parse_left_associative(tokens: &mut TokenStream<'_>,
                          precedence: u8,
                          parse_operand: fn(&mut TokenStream<'_>) -> ParseResult<Expr>)
                          -> ParseResult<Expr> {
    let mut left = parse_operand(tokens)?;
    let mut height = tokens.height();
    loop {
        let (op, position) = {
            let next = tokens.peek()?;
            match token_to_binary_operator(&next.token) {
                Some(op) if op.precedence() == precedence => (op, next.position),
                _ => break,
            }
        };
        tokens.advance()?; // consume operator

        let right = parse_operand(tokens)?;
        height = height.max(tokens.height()) + 1;
        tokens.settle(height, position)?;
        trace!("reduce {op} at {position}");
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators, including `=`.
///
/// # Example
/// ```
/// use runic::{
///     ast::BinaryOperator,
///     frontend::{parser::binary::token_to_binary_operator, token::Token},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    BinaryOperator::from_token_kind(token.kind())
}
