use log::debug;

use crate::{
    ast::Expr,
    error::{LexError, ParseError, Result},
    frontend::{
        lexer::Lexer,
        parser::{assignment::parse_assignment, utils::unexpected},
        token::{Position, Spanned, Token, TokenKind},
    },
    options::ParseOptions,
};

pub type ParseResult<T> = Result<T>;

/// A lexer with one token of lookahead.
///
/// Tokens are pulled from the lexer only when the parser asks for them, so a
/// lexical error surfaces exactly when the parser reaches it.
///
/// The stream also keeps the tree height in check. `depth` counts the
/// assignment and index nodes enclosing the subtree being parsed, and every
/// node built reports its own height through [`TokenStream::settle`]. The two
/// together never exceed the configured limit, so neither the parser nor any
/// walk over the finished tree recurses deeper than that.
pub struct TokenStream<'src> {
    lexer:     Lexer<'src>,
    lookahead: Option<Spanned>,
    depth:     usize,
    height:    usize,
    max_depth: usize,
}

impl<'src> TokenStream<'src> {
    /// Wraps `lexer`, enforcing the nesting limit from `options`.
    #[must_use]
    pub fn new(lexer: Lexer<'src>, options: &ParseOptions) -> Self {
        Self { lexer,
               lookahead: None,
               depth: 0,
               height: 0,
               max_depth: options.max_depth }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Returns the lexical error that stopped the lexer.
    pub fn peek(&mut self) -> std::result::Result<&Spanned, LexError> {
        let spanned = match self.lookahead.take() {
            Some(spanned) => spanned,
            None => self.pull()?,
        };
        Ok(self.lookahead.insert(spanned))
    }

    /// Consumes and returns the next token.
    ///
    /// Once the end of input is reached, every further call returns the
    /// end-of-input token again.
    ///
    /// # Errors
    /// Returns the lexical error that stopped the lexer.
    pub fn advance(&mut self) -> std::result::Result<Spanned, LexError> {
        match self.lookahead.take() {
            Some(spanned) => Ok(spanned),
            None => self.pull(),
        }
    }

    /// Consumes the next token if it has the given kind.
    ///
    /// # Errors
    /// Returns the lexical error that stopped the lexer.
    pub fn eat(&mut self, kind: TokenKind) -> std::result::Result<Option<Spanned>, LexError> {
        if self.peek()?.token.kind() == kind {
            self.advance().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Consumes the next token, which must have the given kind.
    ///
    /// # Errors
    /// Returns `UnexpectedToken`, or `UnexpectedEndOfInput` when the input
    /// ends instead.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Spanned> {
        let spanned = self.advance()?;
        if spanned.token.kind() == kind {
            Ok(spanned)
        } else {
            Err(unexpected(spanned, &[kind]))
        }
    }

    /// Enters the children of an assignment or index node.
    pub const fn descend(&mut self) {
        self.depth += 1;
    }

    /// Leaves the level entered by the matching [`TokenStream::descend`].
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Records a finished node of `height` levels built at `position`.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` if the node, together with the nodes enclosing
    /// it, is taller than the configured limit.
    pub fn settle(&mut self, height: usize, position: Position) -> ParseResult<()> {
        if self.depth + height > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    position }.into());
        }
        self.height = height;
        Ok(())
    }

    /// Height of the node most recently recorded by [`TokenStream::settle`].
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    fn pull(&mut self) -> std::result::Result<Spanned, LexError> {
        match self.lexer.next() {
            Some(result) => result,
            None => Ok(Spanned::new(Token::EndOfInput, self.lexer.position())),
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_assignment(tokens)
}

/// Parses one complete expression from source text.
///
/// ## Example
/// ```
/// use runic::{Parser, ast::Expr};
///
/// let tree = Parser::new("a[1][2]").parse().unwrap();
///
/// assert_eq!(tree,
///            Expr::index(Expr::index(Expr::variable("a"), Expr::literal(1)),
///                        Expr::literal(2)));
/// ```
pub struct Parser<'src> {
    tokens: TokenStream<'src>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` with default options.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, &ParseOptions::default())
    }

    /// Creates a parser over `source` with the given options.
    #[must_use]
    pub fn with_options(source: &'src str, options: &ParseOptions) -> Self {
        Self { tokens: TokenStream::new(Lexer::new(source), options) }
    }

    /// Parses the whole input as a single expression.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error. Tokens left over after a
    /// complete expression are reported as `UnexpectedToken`.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = parse_expression(&mut self.tokens)?;
        let end = self.tokens.advance()?;
        if !end.token.is_end() {
            return Err(ParseError::UnexpectedToken { expected: vec![TokenKind::EndOfInput],
                                                     found:    end.token,
                                                     position: end.position, }.into());
        }
        debug!("parsed {expr}");
        Ok(expr)
    }
}
