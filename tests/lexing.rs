use wisp::interpreter::lexer::{Lexer, Token};

/// Collects tokens until the first end-of-input marker, exclusive.
fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        if token == Token::Eof {
            return tokens;
        }
        tokens.push(token);
    }
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn int(literal: &str) -> Token {
    Token::Integer(literal.to_string())
}

#[test]
fn a_representative_program_tokenizes_as_expected() {
    let source = "let five = 5;\n\
                  let ten = 10;\n\
                  \n\
                  let add = fn(x, y) {\n\
                    x + y;\n\
                  };\n\
                  \n\
                  let result = add(five, ten);\n\
                  !-/*5;\n\
                  5 < 10 > 5;\n\
                  \n\
                  if (5 < 10) {\n\
                    return true;\n\
                  } else {\n\
                    return false;\n\
                  }\n\
                  \n\
                  10 == 10;\n\
                  10 != 9;\n\
                  \"foobar\"\n\
                  \"foo bar\"\n\
                  [1, 2];\n\
                  {\"foo\": \"bar\"}\n";

    let expected = vec![Token::Let,
                        ident("five"),
                        Token::Assign,
                        int("5"),
                        Token::Semicolon,
                        Token::Let,
                        ident("ten"),
                        Token::Assign,
                        int("10"),
                        Token::Semicolon,
                        Token::Let,
                        ident("add"),
                        Token::Assign,
                        Token::Function,
                        Token::LParen,
                        ident("x"),
                        Token::Comma,
                        ident("y"),
                        Token::RParen,
                        Token::LBrace,
                        ident("x"),
                        Token::Plus,
                        ident("y"),
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Semicolon,
                        Token::Let,
                        ident("result"),
                        Token::Assign,
                        ident("add"),
                        Token::LParen,
                        ident("five"),
                        Token::Comma,
                        ident("ten"),
                        Token::RParen,
                        Token::Semicolon,
                        Token::Bang,
                        Token::Minus,
                        Token::Slash,
                        Token::Asterisk,
                        int("5"),
                        Token::Semicolon,
                        int("5"),
                        Token::Lt,
                        int("10"),
                        Token::Gt,
                        int("5"),
                        Token::Semicolon,
                        Token::If,
                        Token::LParen,
                        int("5"),
                        Token::Lt,
                        int("10"),
                        Token::RParen,
                        Token::LBrace,
                        Token::Return,
                        Token::True,
                        Token::Semicolon,
                        Token::RBrace,
                        Token::Else,
                        Token::LBrace,
                        Token::Return,
                        Token::False,
                        Token::Semicolon,
                        Token::RBrace,
                        int("10"),
                        Token::Eq,
                        int("10"),
                        Token::Semicolon,
                        int("10"),
                        Token::NotEq,
                        int("9"),
                        Token::Semicolon,
                        Token::Str("foobar".to_string()),
                        Token::Str("foo bar".to_string()),
                        Token::LBracket,
                        int("1"),
                        Token::Comma,
                        int("2"),
                        Token::RBracket,
                        Token::Semicolon,
                        Token::LBrace,
                        Token::Str("foo".to_string()),
                        Token::Colon,
                        Token::Str("bar".to_string()),
                        Token::RBrace];

    assert_eq!(tokenize(source), expected);
}

#[test]
fn the_token_stream_terminates_and_stays_terminated() {
    let mut lexer = Lexer::new("let x = 5;");

    let mut steps = 0;
    while lexer.next_token() != Token::Eof {
        steps += 1;
        assert!(steps < 32, "lexer failed to reach end of input");
    }

    // Exhaustion is stable: asking again keeps producing the end
    // marker.
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn empty_input_is_immediately_exhausted() {
    assert_eq!(tokenize(""), vec![]);
    assert_eq!(tokenize("   \t \n "), vec![]);
}

#[test]
fn unknown_characters_become_illegal_tokens() {
    assert_eq!(tokenize("@"), vec![Token::Illegal("@".to_string())]);
    assert_eq!(tokenize("let ? = 1"),
               vec![Token::Let,
                    Token::Illegal("?".to_string()),
                    Token::Assign,
                    int("1")]);
    // Multi-byte characters come through whole.
    assert_eq!(tokenize("€"), vec![Token::Illegal("€".to_string())]);
}

#[test]
fn comparison_and_two_character_operators() {
    assert_eq!(tokenize("= == != ! < >"),
               vec![Token::Assign,
                    Token::Eq,
                    Token::NotEq,
                    Token::Bang,
                    Token::Lt,
                    Token::Gt]);
}

#[test]
fn strings_know_no_escapes() {
    assert_eq!(tokenize(r#""a\nb""#), vec![Token::Str(r"a\nb".to_string())]);
}

#[test]
fn an_unterminated_string_runs_to_the_end_of_input() {
    assert_eq!(tokenize("\"abc"), vec![Token::Str("abc".to_string())]);
    assert_eq!(tokenize("\""), vec![Token::Str(String::new())]);
}

#[test]
fn comments_are_skipped_to_the_end_of_the_line() {
    assert_eq!(tokenize("1 // two three\n4"), vec![int("1"), int("4")]);
    assert_eq!(tokenize("// only a comment"), vec![]);
    // A lone slash is still the division operator.
    assert_eq!(tokenize("1 / 2"), vec![int("1"), Token::Slash, int("2")]);
}

#[test]
fn identifiers_are_letters_and_underscores_only() {
    assert_eq!(tokenize("_foo bar_baz"), vec![ident("_foo"), ident("bar_baz")]);
    // A digit ends the identifier instead of joining it.
    assert_eq!(tokenize("foo1"), vec![ident("foo"), int("1")]);
    // Unicode letters are letters.
    assert_eq!(tokenize("über"), vec![ident("über")]);
}

#[test]
fn keywords_are_recognized_exactly() {
    assert_eq!(tokenize("fn let if else return true false"),
               vec![Token::Function,
                    Token::Let,
                    Token::If,
                    Token::Else,
                    Token::Return,
                    Token::True,
                    Token::False]);
    // A keyword prefix does not make an identifier a keyword.
    assert_eq!(tokenize("lets fnord iffy"),
               vec![ident("lets"), ident("fnord"), ident("iffy")]);
}

#[test]
fn a_nul_byte_ends_the_input_early() {
    let mut lexer = Lexer::new("5\0 6");

    assert_eq!(lexer.next_token(), int("5"));
    assert_eq!(lexer.next_token(), Token::Eof);
}
