//! Fully-qualified type name recovery by lexical scan.
//!
//! This deliberately stays a token-offset heuristic rather than a parser:
//! one relevant declaration per file, name expected at a fixed distance
//! after the keyword. A comment or unusual spacing between keyword and name
//! captures the wrong text, the lookup then fails, and the file is skipped.
//! Upgrading this to a real parser would change which malformed files
//! succeed, so it stays as it is.

pub mod lexer;

use lexer::{SpannedToken, Token};

pub const NAMESPACE_SEPARATOR: &str = "\\";

/// Which declaration keyword a run looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Enum,
    Class,
}

impl DeclKind {
    fn keyword(self) -> Token {
        match self {
            DeclKind::Enum => Token::Enum,
            DeclKind::Class => Token::Class,
        }
    }
}

/// Recovers `Namespace\ShortName` from one source file's text.
///
/// A single linear scan: each namespace declaration overwrites the captured
/// namespace, the first matching declaration keyword ends the scan. Returns
/// `None` unless both a namespace and a declaration name were found.
pub fn qualified_type_name(source: &str, kind: DeclKind) -> Option<String> {
    let tokens = lexer::tokenize(source);
    let mut namespace: Option<String> = None;
    let mut short_name: Option<String> = None;

    for i in 0..tokens.len() {
        let token = tokens[i].token;
        if token == Token::Namespace {
            namespace = Some(token_string(&tokens, source, i + 2));
        } else if token == kind.keyword() {
            // name sits two tokens after the keyword: keyword, whitespace, name
            short_name = tokens.get(i + 2).map(|t| source[t.span.clone()].to_string());
            break;
        }
    }

    match (namespace, short_name) {
        (Some(ns), Some(name)) if !ns.is_empty() => {
            Some(format!("{ns}{NAMESPACE_SEPARATOR}{name}"))
        }
        _ => None,
    }
}

/// Concatenates wordlike token text starting at `start` until the first
/// punctuation token, then trims.
fn token_string(tokens: &[SpannedToken], source: &str, start: usize) -> String {
    let mut out = String::new();
    for spanned in tokens.iter().skip(start) {
        if !is_wordlike(spanned.token) {
            break;
        }
        out.push_str(&source[spanned.span.clone()]);
    }
    out.trim().to_string()
}

/// Wordlike tokens carry text the namespace capture keeps going over;
/// single-character punctuation and unknown input end it.
fn is_wordlike(token: Token) -> bool {
    !matches!(
        token,
        Token::Semicolon
            | Token::LBrace
            | Token::RBrace
            | Token::LParen
            | Token::RParen
            | Token::LBracket
            | Token::RBracket
            | Token::Comma
            | Token::Equals
            | Token::Colon
            | Token::Dot
            | Token::Other
    )
}
