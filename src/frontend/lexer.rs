use std::iter::FusedIterator;

use log::trace;
use logos::Logos;

use crate::{
    error::LexError,
    frontend::token::{Position, Spanned, Token},
};

/// Raw lexemes recognized by the `logos` state machine.
///
/// Identifiers and numbers already carry their values. Newlines are matched
/// only to keep [`LexerExtras`] current and never leave [`Lexer`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\f\r]+")]
enum Lexeme {
    /// Identifier tokens such as `x`, `_tmp` or `ᚠᚢᚦ`.
    #[regex(r"[_\p{L}][_\p{L}\p{Nd}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// `==`
    #[token("==")]
    CmpEq,
    /// `!=`
    #[token("!=")]
    CmpNeq,
    /// `>=`
    #[token(">=")]
    Gte,
    /// `<=`
    #[token("<=")]
    Lte,
    /// `=`
    #[token("=")]
    Equal,
    /// `>`
    #[token(">")]
    Gt,
    /// `<`
    #[token("<")]
    Lt,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Multiply,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
    })]
    Newline,
}

/// Why the `logos` machine rejected a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexFault {
    /// No rule matches the input at this point.
    #[default]
    UnexpectedCharacter,
    /// A digit run does not fit in an `i64`.
    NumericOverflow,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and where it starts so every token can be given a
/// line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LexerExtras {
    /// The current line number in the source being tokenized.
    line:       usize,
    /// Byte offset of the first character of the current line.
    line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Parses an integer literal from the current token slice.
///
/// The slice only ever holds ASCII digits, so the only way parsing can fail is
/// a value above `i64::MAX`.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Result<i64, LexFault> {
    lex.slice()
       .parse()
       .map_err(|_| LexFault::NumericOverflow)
}

/// Converts source text into a lazy stream of positioned tokens.
///
/// The stream always finishes with exactly one [`Token::EndOfInput`], after
/// which the iterator is exhausted. A lexical error is yielded once and also
/// ends the stream.
///
/// ## Example
/// ```
/// use runic::frontend::{lexer::Lexer, token::Token};
///
/// let tokens: Vec<Token> = Lexer::new("a >= 10").map(|t| t.unwrap().token)
///                                               .collect();
///
/// assert_eq!(tokens,
///            vec![Token::Identifier("a".to_string()),
///                 Token::Gte,
///                 Token::Number(10),
///                 Token::EndOfInput]);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Lexeme>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    Lexeme::lexer_with_extras(source, LexerExtras::default()),
               finished: false, }
    }

    /// The complete input this lexer reads from.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }

    /// Rewinds the lexer to the start of its input.
    pub fn restart(&mut self) {
        *self = Self::new(self.source());
    }

    /// Returns the position just past the consumed input.
    ///
    /// Once the end-of-input token has been produced this is the end of the
    /// source.
    #[must_use]
    pub fn position(&self) -> Position {
        if self.finished {
            self.position_of(self.source().len())
        } else {
            self.position_of(self.inner.span().end)
        }
    }

    fn position_of(&self, offset: usize) -> Position {
        let LexerExtras { line, line_start } = self.inner.extras;
        let column = self.source()
                         .get(line_start..offset)
                         .map_or(0, |text| text.chars().count());
        Position { offset,
                   line,
                   column: column + 1 }
    }

    fn finish(&mut self, position: Position) -> Spanned {
        self.finished = true;
        trace!("lexed end of input at {position}");
        Spanned::new(Token::EndOfInput, position)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(lexeme) = self.inner.next() else {
                let end = self.position_of(self.source().len());
                return Some(Ok(self.finish(end)));
            };
            let position = self.position_of(self.inner.span().start);

            let token = match lexeme {
                Ok(Lexeme::Newline) => continue,
                Ok(Lexeme::Identifier(name)) => Token::Identifier(name),
                Ok(Lexeme::Number(value)) => Token::Number(value),
                Ok(Lexeme::CmpEq) => Token::CmpEq,
                Ok(Lexeme::CmpNeq) => Token::CmpNeq,
                Ok(Lexeme::Gte) => Token::Gte,
                Ok(Lexeme::Lte) => Token::Lte,
                Ok(Lexeme::Equal) => Token::Equal,
                Ok(Lexeme::Gt) => Token::Gt,
                Ok(Lexeme::Lt) => Token::Lt,
                Ok(Lexeme::Plus) => Token::Plus,
                Ok(Lexeme::Minus) => Token::Minus,
                Ok(Lexeme::Multiply) => Token::Multiply,
                Ok(Lexeme::LBracket) => Token::LBracket,
                Ok(Lexeme::RBracket) => Token::RBracket,
                Err(fault) => {
                    self.finished = true;
                    let slice = self.inner.slice();
                    trace!("lexer rejected {slice:?} at {position}");
                    return Some(Err(match fault {
                                        LexFault::NumericOverflow => {
                                            LexError::NumericOverflow { literal: slice.to_string(),
                                                                        position }
                                        },
                                        LexFault::UnexpectedCharacter => {
                                            LexError::UnexpectedCharacter {
                                                character: slice.chars()
                                                                .next()
                                                                .unwrap_or(char::REPLACEMENT_CHARACTER),
                                                position,
                                            }
                                        },
                                    }));
                },
            };

            trace!("lexed {token} at {position}");
            return Some(Ok(Spanned::new(token, position)));
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes the whole of `source`.
///
/// The returned vector ends with [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    Lexer::new(source).collect()
}
