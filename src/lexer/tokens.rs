use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::FUNCTION);
        map.insert("let", TokenKind::LET);
        map.insert("true", TokenKind::TRUE);
        map.insert("false", TokenKind::FALSE);
        map.insert("if", TokenKind::IF);
        map.insert("else", TokenKind::ELSE);
        map.insert("return", TokenKind::RETURN);
        map
    };
}

#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    ILLEGAL,
    EOF,

    // identifiers and literals
    IDENT,
    INT,

    // operators
    ASSIGN,   // =
    PLUS,     // +
    MINUS,    // -
    BANG,     // !
    ASTERISK, // *
    SLASH,    // /
    LT,       // <
    GT,       // >
    EQ,       // ==
    NOT_EQ,   // !=

    // delimiters
    COMMA,     // ,
    SEMICOLON, // ;

    LPAREN, // (
    RPAREN, // )
    LBRACE, // {
    RBRACE, // }

    // reserved
    FUNCTION,
    LET,
    TRUE,
    FALSE,
    IF,
    ELSE,
    RETURN,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn lookup_keyword(word: &str) -> TokenKind {
    if let Some(kind) = RESERVED_LOOKUP.get(word) {
        *kind
    } else {
        TokenKind::IDENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.literal)
    }
}
