/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens,
/// each tagged with its position. It is the first stage of parsing.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Matches two-character comparison operators before their one-character
///   prefixes.
/// - Reports unexpected characters and oversized integer literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with one token
/// of lookahead and constructs an [`Expr`](crate::ast::Expr) by precedence
/// climbing, one function per tier.
///
/// # Responsibilities
/// - Converts tokens into expression nodes.
/// - Validates assignment targets while parsing.
/// - Reports syntax errors with their source position.
pub mod parser;
/// Token definitions shared by the lexer and the parser.
///
/// Declares tokens with their values, the payload-free token kinds with their
/// generated-parser codes, and source positions.
pub mod token;
