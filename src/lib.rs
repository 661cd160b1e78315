//! # runic
//!
//! runic turns source text of a tiny expression language into a typed
//! expression tree. The language has identifiers, integer literals, the
//! arithmetic operators `+ - *`, the comparisons `== != > < >= <=`,
//! right-associative assignment `=` and chained indexing `a[i][j]`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type that
/// represent an expression as a tree. The tree is built by the parser and can
/// be printed back to canonical source text.
///
/// # Responsibilities
/// - Defines expression nodes for every language construct.
/// - Classifies assignable (lvalue-shaped) expressions.
/// - Prints trees so that parsing the output reproduces them.
pub mod ast;
/// Provides unified error types for lexing and parsing.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser).
/// - Attaches source positions for user feedback.
pub mod error;
/// Turns source text into an expression tree.
///
/// # Responsibilities
/// - Tokenizes source text lazily.
/// - Parses the token stream by precedence climbing.
pub mod frontend;
/// Parser configuration.
pub mod options;

pub use crate::{
    error::{Error, Result},
    frontend::{lexer::tokenize, parser::core::Parser},
    options::ParseOptions,
};

/// Parses `source` as a single expression using default options.
///
/// # Errors
/// Returns an error if lexing or parsing fails. The error carries the position
/// of the offending character or token.
///
/// # Examples
/// ```
/// use runic::{
///     ast::{BinaryOperator, Expr},
///     parse,
/// };
///
/// let tree = parse("1 + 2 * 3").unwrap();
/// assert_eq!(tree,
///            Expr::binary(BinaryOperator::Add,
///                         Expr::literal(1),
///                         Expr::binary(BinaryOperator::Mul,
///                                      Expr::literal(2),
///                                      Expr::literal(3))));
///
/// // A literal cannot be assigned to.
/// assert!(parse("1 = a").is_err());
/// ```
pub fn parse(source: &str) -> Result<ast::Expr> {
    Parser::new(source).parse()
}

/// Parses `source` as a single expression using the given options.
///
/// # Errors
/// Returns an error if lexing or parsing fails, or if the expression tree is
/// taller than `options.max_depth`.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<ast::Expr> {
    Parser::with_options(source, options).parse()
}
