//! PHP token scanner using the logos crate.
//!
//! This is not a full PHP lexer. It covers exactly enough of the lexical
//! grammar to find namespace and type declarations without being fooled by
//! keywords inside strings or comments. Whitespace and comments are kept as
//! real tokens; the declaration scan depends on their positions.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("<?php")]
    OpenTag,

    #[token("?>")]
    CloseTag,

    // Keywords (PHP keywords are case-insensitive)
    #[token("namespace", ignore(case))]
    Namespace,

    #[token("enum", ignore(case))]
    Enum,

    #[token("class", ignore(case))]
    Class,

    #[token("\\")]
    NsSeparator,

    // `#[` opens an attribute, not a comment
    #[token("#[")]
    AttributeStart,

    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,

    // Identifiers (must come after keywords)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    Number,

    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    #[regex(r"#([^\[\n][^\n]*)?")]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    // Punctuation
    #[token(";")]
    Semicolon,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,

    #[token(":")]
    Colon,

    #[token(".")]
    Dot,

    // Catch-all for anything the grammar above does not cover (operators,
    // stray bytes, unterminated literals)
    #[regex(r"[\s\S]", priority = 1)]
    Other,
}

/// A token with its span in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Tokenize a PHP source file. Never fails; input the grammar cannot match
/// comes back as [`Token::Other`].
pub fn tokenize(source: &str) -> Vec<SpannedToken> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        tokens.push(SpannedToken {
            token: result.unwrap_or(Token::Other),
            span: lexer.span(),
        });
    }
    tokens
}
