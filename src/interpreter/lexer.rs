use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Identifier tokens; binding or parameter names such as `x` or
    /// `newAdder`. Identifiers are letters and underscores only; a digit
    /// ends the identifier.
    #[regex(r"[\p{L}_][\p{L}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. The raw lexeme is kept so
    /// the parser can report out-of-range literals itself.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens, such as `"hello"`. The literal excludes the
    /// surrounding quotes and knows no escape sequences. A string that is
    /// still open at the end of input runs to the end of input.
    #[regex(r#""[^"]*"?"#, string_contents)]
    Str(String),
    /// `// Comments.` Dropped during lexing; the parser never sees them.
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// A NUL byte ends the input wherever it appears.
    #[token("\0")]
    Eof,
    /// Any character no other rule recognizes. The lexer stays total;
    /// rejecting these is the parser's job.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 1)]
    Illegal(String),
}

impl Token {
    /// Returns the display name of the token's kind.
    ///
    /// Symbolic tokens print as their lexeme, everything else as an
    /// uppercase name. These names appear verbatim in parser error
    /// messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "IDENT",
            Self::Integer(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Comment => "COMMENT",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Eof => "EOF",
            Self::Illegal(_) => "ILLEGAL",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// A pull-based token source over an in-memory string.
///
/// The parser owns one of these and asks for one token at a time. The
/// stream is total: once the input is exhausted every further request
/// yields [`Token::Eof`].
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { inner: Token::lexer(input) }
    }

    /// Produces the next token.
    ///
    /// Skips whitespace and comments, classifies the next lexeme, and
    /// pads the end of input with an endless run of [`Token::Eof`].
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            None => Token::Eof,
        }
    }
}

/// Strips the surrounding quotes from a string literal lexeme.
///
/// The closing quote is optional so that a string cut off by the end of
/// input still produces its partial contents.
fn string_contents(lex: &logos::Lexer<Token>) -> String {
    let contents = &lex.slice()[1..];
    contents.strip_suffix('"').unwrap_or(contents).to_string()
}
