/// Parser entry points and the token stream.
///
/// Holds the one-token lookahead over the lexer, the nesting guard, the
/// expression entry point and the [`core::Parser`] wrapper that requires the
/// whole input to be consumed.
pub mod core;

/// Assignment parsing.
///
/// Parses right-associative `=` and rejects targets that are not variables or
/// index expressions.
pub mod assignment;

/// Binary operator parsing.
///
/// Implements the comparison, additive and multiplicative precedence tiers.
pub mod binary;

/// Primary expressions: literals, variables and index chains.
pub mod primary;

mod utils;
