mod common;

use common::init_logging;
use runic::{
    error::LexError,
    frontend::{
        lexer::Lexer,
        token::{Position, Token, TokenKind, TokenValue},
    },
    tokenize,
};

fn tokens(src: &str) -> Vec<Token> {
    init_logging();
    tokenize(src).unwrap_or_else(|e| panic!("failed to lex {src:?}: {e}"))
                 .into_iter()
                 .map(|spanned| spanned.token)
                 .collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn every_token_kind() {
    assert_eq!(tokens("x 1 = + - * [ ] == != > < >= <="),
               vec![ident("x"),
                    Token::Number(1),
                    Token::Equal,
                    Token::Plus,
                    Token::Minus,
                    Token::Multiply,
                    Token::LBracket,
                    Token::RBracket,
                    Token::CmpEq,
                    Token::CmpNeq,
                    Token::Gt,
                    Token::Lt,
                    Token::Gte,
                    Token::Lte,
                    Token::EndOfInput]);
}

#[test]
fn empty_input_is_just_end_of_input() {
    assert_eq!(tokens(""), vec![Token::EndOfInput]);
    assert_eq!(tokens(" \t\r\n\n "), vec![Token::EndOfInput]);
}

#[test]
fn two_character_operators_are_never_split() {
    assert_eq!(tokens(">="), vec![Token::Gte, Token::EndOfInput]);
    assert_eq!(tokens("<="), vec![Token::Lte, Token::EndOfInput]);
    assert_eq!(tokens("=="), vec![Token::CmpEq, Token::EndOfInput]);
    assert_eq!(tokens("!="), vec![Token::CmpNeq, Token::EndOfInput]);
    assert_eq!(tokens("a>=b"), vec![ident("a"), Token::Gte, ident("b"), Token::EndOfInput]);
}

#[test]
fn greedy_matching_pairs_up_runs_of_equals() {
    assert_eq!(tokens("==="), vec![Token::CmpEq, Token::Equal, Token::EndOfInput]);
    assert_eq!(tokens("> ="), vec![Token::Gt, Token::Equal, Token::EndOfInput]);
    assert_eq!(tokens("<=="), vec![Token::Lte, Token::Equal, Token::EndOfInput]);
}

#[test]
fn numbers_carry_their_value() {
    for value in [0_i64, 7, 42, 1_000_000, 9_223_372_036_854_775_807] {
        assert_eq!(tokens(&value.to_string()), vec![Token::Number(value), Token::EndOfInput]);
    }
    assert_eq!(tokens("007"), vec![Token::Number(7), Token::EndOfInput]);
}

#[test]
fn number_above_i64_max_overflows() {
    let err = tokenize("x + 9223372036854775808").unwrap_err();
    assert_eq!(err,
               LexError::NumericOverflow { literal:  "9223372036854775808".to_string(),
                                           position: Position { offset: 4,
                                                                line:   1,
                                                                column: 5, }, });
    assert!(matches!(tokenize("99999999999999999999"), Err(LexError::NumericOverflow { .. })));
}

#[test]
fn identifiers() {
    assert_eq!(tokens("_ a1 snake_case Ünïcode ᚠᚢᚦᛆᚱᚴ"),
               vec![ident("_"),
                    ident("a1"),
                    ident("snake_case"),
                    ident("Ünïcode"),
                    ident("ᚠᚢᚦᛆᚱᚴ"),
                    Token::EndOfInput]);
}

#[test]
fn digits_then_letters_split_into_number_and_identifier() {
    assert_eq!(tokens("12ab"), vec![Token::Number(12), ident("ab"), Token::EndOfInput]);
}

#[test]
fn unexpected_character_reports_position() {
    let err = tokenize("a +\n  b $ c").unwrap_err();
    assert_eq!(err,
               LexError::UnexpectedCharacter { character: '$',
                                               position:  Position { offset: 8,
                                                                     line:   2,
                                                                     column: 5, }, });
}

#[test]
fn lone_bang_is_unexpected() {
    assert!(matches!(tokenize("a ! b"),
                     Err(LexError::UnexpectedCharacter { character: '!', .. })));
}

#[test]
fn parentheses_are_not_tokens() {
    assert!(matches!(tokenize("(a)"),
                     Err(LexError::UnexpectedCharacter { character: '(', .. })));
}

#[test]
fn positions_count_characters_not_bytes() {
    let spanned = tokenize("ᚠ = 1").unwrap();
    let positions: Vec<(usize, usize, usize)> =
        spanned.iter()
               .map(|s| (s.position.offset, s.position.line, s.position.column))
               .collect();
    assert_eq!(positions, vec![(0, 1, 1), (4, 1, 3), (6, 1, 5), (7, 1, 6)]);
}

#[test]
fn positions_follow_newlines() {
    let spanned = tokenize("a\n  b\n\nc").unwrap();
    let lines: Vec<(usize, usize)> = spanned.iter()
                                            .map(|s| (s.position.line, s.position.column))
                                            .collect();
    assert_eq!(lines, vec![(1, 1), (2, 3), (4, 1), (4, 2)]);
}

#[test]
fn stream_ends_after_end_of_input() {
    init_logging();
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next().unwrap().unwrap().token, ident("a"));
    assert_eq!(lexer.next().unwrap().unwrap().token, Token::EndOfInput);
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn stream_ends_after_an_error() {
    init_logging();
    let mut lexer = Lexer::new("a # b");
    assert!(lexer.next().unwrap().is_ok());
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}

#[test]
fn tokens_are_produced_lazily() {
    init_logging();
    // The bad character is never reached.
    let mut lexer = Lexer::new("a + b @");
    let first: Vec<Token> = lexer.by_ref()
                                 .take(3)
                                 .map(|t| t.unwrap().token)
                                 .collect();
    assert_eq!(first, vec![ident("a"), Token::Plus, ident("b")]);
}

#[test]
fn restart_rewinds_to_the_start() {
    init_logging();
    let mut lexer = Lexer::new("a\n== 3");
    let first: Vec<_> = lexer.by_ref().collect();
    assert!(lexer.next().is_none());

    lexer.restart();
    let second: Vec<_> = lexer.collect();
    assert_eq!(first, second);
    assert_eq!(second.len(), 4);
}

#[test]
fn token_codes_match_the_generated_header() {
    let expected = [(TokenKind::Identifier, 258, "IDENTIFIER"),
                    (TokenKind::Number, 259, "NUMBER"),
                    (TokenKind::Equal, 260, "EQUAL"),
                    (TokenKind::Plus, 261, "PLUS"),
                    (TokenKind::Minus, 262, "MINUS"),
                    (TokenKind::Multiply, 263, "MULTIPLY"),
                    (TokenKind::LBracket, 264, "LBRACKET"),
                    (TokenKind::RBracket, 265, "RBRACKET"),
                    (TokenKind::CmpEq, 266, "CMP_EQ"),
                    (TokenKind::CmpNeq, 267, "CMP_NEQ"),
                    (TokenKind::Gt, 268, "GT"),
                    (TokenKind::Lt, 269, "LT"),
                    (TokenKind::Gte, 270, "GTE"),
                    (TokenKind::Lte, 271, "LTE"),
                    (TokenKind::EndOfInput, 0, "END")];
    for (kind, code, name) in expected {
        assert_eq!(kind.code(), code);
        assert_eq!(kind.name(), name);
        assert_eq!(TokenKind::from_code(code), Some(kind));
    }
    assert_eq!(TokenKind::from_code(257), None);
    assert_eq!(TokenKind::from_code(272), None);
}

#[test]
fn only_identifiers_and_numbers_carry_values() {
    assert_eq!(ident("n").value(), Some(TokenValue::Identifier("n".to_string())));
    assert_eq!(Token::Number(3).value(), Some(TokenValue::Number(3)));
    for token in [Token::Equal, Token::Lte, Token::LBracket, Token::EndOfInput] {
        assert_eq!(token.value(), None);
    }
}

#[test]
fn lex_errors_display_their_position() {
    let err = tokenize("\n  ?").unwrap_err();
    assert_eq!(err.to_string(), "2:3: unexpected character '?'");
}
