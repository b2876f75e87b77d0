use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Token kinds are recognized by a `logos` state machine. Two-character
/// operators are matched on their first character only and the character
/// after it is consumed without being checked, so `|x` lexes as `||` and `<>`
/// lexes as `<=`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `=`
    #[token("=")]
    Equals,
    /// `<=`
    #[token("<", consume_second)]
    LessEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `||`
    #[token("|", consume_second)]
    DoublePipe,
    /// `&&`
    #[token("&", consume_second)]
    DoubleAmpersand,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `skip`
    #[token("skip")]
    Skip,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `od`
    #[token("od")]
    Od,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `fi`
    #[token("fi")]
    Fi,
    /// `print`
    #[token("print")]
    Print,
    /// `:=`
    #[token(":", consume_second)]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Identifier tokens; a maximal run of ASCII letters such as `x` or `sum`.
    #[regex(r"[a-zA-Z]+")]
    Variable,
    /// Integer literal tokens, such as `42`. The text is kept as is and
    /// converted by the parser.
    #[regex(r"[0-9]+")]
    Int,
    /// Marks the end of the token stream. Never matched by the state machine;
    /// [`scan`] appends it once the input is exhausted.
    Eof,

    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns the fixed spelling of operator and keyword tokens.
    ///
    /// `Variable`, `Int` and `Eof` have no fixed spelling and return `None`.
    #[must_use]
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        let lexeme = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Equals => "=",
            Self::LessEqual => "<=",
            Self::Bang => "!",
            Self::DoublePipe => "||",
            Self::DoubleAmpersand => "&&",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::True => "true",
            Self::False => "false",
            Self::Skip => "skip",
            Self::While => "while",
            Self::Do => "do",
            Self::Od => "od",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Fi => "fi",
            Self::Print => "print",
            Self::Assign => ":=",
            Self::Semicolon => ";",
            Self::Variable | Self::Int | Self::Eof | Self::NewLine | Self::Ignored => {
                return None;
            },
        };
        Some(lexeme)
    }

    /// Describes the token kind for "expected ..." diagnostics.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::Variable => "a variable".to_string(),
            Self::Int => "an integer".to_string(),
            Self::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.fixed_lexeme().unwrap_or_default()),
        }
    }
}

/// A scanned token: its kind, the source text it stands for and its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The lexeme. Operators and keywords carry their fixed spelling,
    /// variables and integers the scanned text, `Eof` the empty string.
    pub lexeme: String,
    /// The source line the token starts on, counted from 1.
    pub line:   usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let lexeme = kind.fixed_lexeme().unwrap_or(lexeme).to_string();
        Self { kind, lexeme, line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input")
        } else {
            write!(f, "{}", self.lexeme)
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Consumes the character after the first character of a two-character
/// operator, whatever it is.
fn consume_second(lex: &mut logos::Lexer<TokenKind>) -> bool {
    if let Some(ch) = lex.remainder().chars().next() {
        if ch == '\n' {
            lex.extras.line += 1;
        }
        lex.bump(ch.len_utf8());
    }
    true
}

/// Converts source text into an ordered token sequence ending in `Eof`.
///
/// Whitespace is skipped and every `\n` advances the line counter. Scanning
/// stops at the first character no rule accepts.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] with the current line if the
/// source contains a character that does not start any token.
///
/// # Example
/// ```
/// use imp::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("x := 1").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Variable, TokenKind::Assign, TokenKind::Int, TokenKind::Eof]);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(kind) = lexer.next() {
        // A permissive operator may have swallowed a newline.
        let line = lexer.extras.line - lexer.slice().matches('\n').count();

        if let Ok(kind) = kind {
            tokens.push(Token::new(kind, lexer.slice(), line));
        } else {
            let character = source[lexer.span().start..].chars()
                                                         .next()
                                                         .unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { character, line });
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));
    debug!(tokens = tokens.len(), lines = lexer.extras.line, "scanned source");

    Ok(tokens)
}
