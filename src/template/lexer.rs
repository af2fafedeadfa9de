//! Lexer for template lines using logos

use logos::Logos;

/// Byte range in a template line
pub type Span = std::ops::Range<usize>;

/// Lexing never fails: every byte of a line lands in exactly one token.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// `$key`, carrying the identifier without the sigil
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Placeholder(String),

    /// `%name`, carrying the lowercase word without the sigil
    #[regex(r"%[a-z]+", |lex| lex.slice()[1..].to_string())]
    Tag(String),

    // Sigils not followed by a key or tag word, e.g. `$1` or `%@`
    #[token("$")]
    Dollar,
    #[token("%")]
    Percent,

    #[regex(r"[^$%]+")]
    Text,
}

/// Lex a line into tokens with spans
pub fn lex(line: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(line)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Text), span))
}
