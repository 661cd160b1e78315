use std::fmt;

/// A location in the source text.
///
/// Offsets are in bytes, lines and columns start at 1 and columns count
/// characters rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Self = Self { offset: 0,
                                   line:   1,
                                   column: 1, };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A lexical token.
///
/// Identifiers and numbers carry their value inside the variant, so the value
/// can never disagree with the kind of token it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A name such as `total` or `_tmp1`.
    Identifier(String),
    /// A non-negative integer literal such as `42`.
    Number(i64),
    /// `=`
    Equal,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `==`
    CmpEq,
    /// `!=`
    CmpNeq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// Marks the end of the token stream.
    EndOfInput,
}

impl Token {
    /// Returns the payload-free kind of this token.
    ///
    /// ## Example
    /// ```
    /// use runic::frontend::token::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Number(7).kind(), TokenKind::Number);
    /// assert_eq!(Token::Gte.kind().code(), 270);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Number(_) => TokenKind::Number,
            Self::Equal => TokenKind::Equal,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::CmpEq => TokenKind::CmpEq,
            Self::CmpNeq => TokenKind::CmpNeq,
            Self::Gt => TokenKind::Gt,
            Self::Lt => TokenKind::Lt,
            Self::Gte => TokenKind::Gte,
            Self::Lte => TokenKind::Lte,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the semantic value carried by identifiers and numbers.
    ///
    /// All other tokens carry no value and return `None`.
    #[must_use]
    pub fn value(&self) -> Option<TokenValue> {
        match self {
            Self::Identifier(name) => Some(TokenValue::Identifier(name.clone())),
            Self::Number(value) => Some(TokenValue::Number(*value)),
            _ => None,
        }
    }

    /// Returns `true` for the end-of-input marker.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Number(value) => write!(f, "number {value}"),
            other => f.write_str(other.kind().describe()),
        }
    }
}

/// The semantic value attached to a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// Value of a [`Token::Number`].
    Number(i64),
    /// Value of a [`Token::Identifier`].
    Identifier(String),
}

/// The kind of a token, without its value.
///
/// Kinds keep the numeric codes a yacc-style generated parser assigns to its
/// terminals, with `0` standing for end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// End of input, code `0`.
    EndOfInput,
    /// `IDENTIFIER`, code `258`.
    Identifier,
    /// `NUMBER`, code `259`.
    Number,
    /// `EQUAL`, code `260`.
    Equal,
    /// `PLUS`, code `261`.
    Plus,
    /// `MINUS`, code `262`.
    Minus,
    /// `MULTIPLY`, code `263`.
    Multiply,
    /// `LBRACKET`, code `264`.
    LBracket,
    /// `RBRACKET`, code `265`.
    RBracket,
    /// `CMP_EQ`, code `266`.
    CmpEq,
    /// `CMP_NEQ`, code `267`.
    CmpNeq,
    /// `GT`, code `268`.
    Gt,
    /// `LT`, code `269`.
    Lt,
    /// `GTE`, code `270`.
    Gte,
    /// `LTE`, code `271`.
    Lte,
}

impl TokenKind {
    /// Every kind, in code order.
    pub const ALL: [Self; 15] = [Self::EndOfInput,
                                 Self::Identifier,
                                 Self::Number,
                                 Self::Equal,
                                 Self::Plus,
                                 Self::Minus,
                                 Self::Multiply,
                                 Self::LBracket,
                                 Self::RBracket,
                                 Self::CmpEq,
                                 Self::CmpNeq,
                                 Self::Gt,
                                 Self::Lt,
                                 Self::Gte,
                                 Self::Lte];

    /// Returns the generated-parser code of this kind.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::EndOfInput => 0,
            Self::Identifier => 258,
            Self::Number => 259,
            Self::Equal => 260,
            Self::Plus => 261,
            Self::Minus => 262,
            Self::Multiply => 263,
            Self::LBracket => 264,
            Self::RBracket => 265,
            Self::CmpEq => 266,
            Self::CmpNeq => 267,
            Self::Gt => 268,
            Self::Lt => 269,
            Self::Gte => 270,
            Self::Lte => 271,
        }
    }

    /// Looks a kind up by its generated-parser code.
    ///
    /// ## Example
    /// ```
    /// use runic::frontend::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_code(266), Some(TokenKind::CmpEq));
    /// assert_eq!(TokenKind::from_code(1), None);
    /// ```
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Returns the symbolic terminal name, e.g. `"CMP_NEQ"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EndOfInput => "END",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::Equal => "EQUAL",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULTIPLY",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::CmpEq => "CMP_EQ",
            Self::CmpNeq => "CMP_NEQ",
            Self::Gt => "GT",
            Self::Lt => "LT",
            Self::Gte => "GTE",
            Self::Lte => "LTE",
        }
    }

    /// Returns a human readable description used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::EndOfInput => "end of input",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Equal => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Multiply => "'*'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::CmpEq => "'=='",
            Self::CmpNeq => "'!='",
            Self::Gt => "'>'",
            Self::Lt => "'<'",
            Self::Gte => "'>='",
            Self::Lte => "'<='",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// The token.
    pub token:    Token,
    /// Where the token starts.
    pub position: Position,
}

impl Spanned {
    /// Pairs a token with its position.
    #[must_use]
    pub const fn new(token: Token, position: Position) -> Self {
        Self { token, position }
    }
}
