use crate::MK_TOKEN;

use super::tokens::{lookup_keyword, Token, TokenKind};

pub struct Lexer {
    input: String,
    position: usize,      // index of the character just consumed
    read_position: usize, // index of the next character to consume
    ch: u8,
}

impl Lexer {
    pub fn new(input: String) -> Lexer {
        let mut lexer = Lexer {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        // End of input is decided by the bounds check, not by the 0 value
        // in `ch`, so a genuine NUL byte in the input stays ILLEGAL.
        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, "");
        }

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::EQ, "==")
                } else {
                    MK_TOKEN!(TokenKind::ASSIGN, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::NOT_EQ, "!=")
                } else {
                    MK_TOKEN!(TokenKind::BANG, "!")
                }
            }
            b'+' => MK_TOKEN!(TokenKind::PLUS, "+"),
            b'-' => MK_TOKEN!(TokenKind::MINUS, "-"),
            b'/' => MK_TOKEN!(TokenKind::SLASH, "/"),
            b'*' => MK_TOKEN!(TokenKind::ASTERISK, "*"),
            b'<' => MK_TOKEN!(TokenKind::LT, "<"),
            b'>' => MK_TOKEN!(TokenKind::GT, ">"),
            b',' => MK_TOKEN!(TokenKind::COMMA, ","),
            b';' => MK_TOKEN!(TokenKind::SEMICOLON, ";"),
            b'(' => MK_TOKEN!(TokenKind::LPAREN, "("),
            b')' => MK_TOKEN!(TokenKind::RPAREN, ")"),
            b'{' => MK_TOKEN!(TokenKind::LBRACE, "{"),
            b'}' => MK_TOKEN!(TokenKind::RBRACE, "}"),
            ch if is_letter(ch) => {
                let literal = self.read_identifier();
                return MK_TOKEN!(lookup_keyword(&literal), literal);
            }
            ch if is_digit(ch) => {
                return MK_TOKEN!(TokenKind::INT, self.read_number());
            }
            ch => MK_TOKEN!(TokenKind::ILLEGAL, ch as char),
        };

        self.read_char();
        token
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) || is_digit(self.ch) {
            self.read_char();
        }
        String::from(&self.input[start..self.position])
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        String::from(&self.input[start..self.position])
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        if self.read_position >= self.input.len() {
            self.ch = 0;
        } else {
            self.ch = self.input.as_bytes()[self.read_position];
        }
        self.position = self.read_position;
        self.read_position += 1;
    }

    // Pure read of the next character; never moves the cursor.
    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input.as_bytes()[self.read_position]
        }
    }

    fn at_eof(&self) -> bool {
        self.position >= self.input.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    // Yields every token up to, not including, the absorbing EOF token.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn tokenize(source: String) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
