//! Hand-rolled scanner for the query grammar.
//!
//! At every position a fixed-priority chain of classifiers is tried until
//! one matches: line comment, block comment, single-quoted string,
//! double-quoted string, number, identifier, then a single passthrough
//! character. The first match wins and there is no backtracking, so the
//! output is deterministic regardless of content.
//!
//! The scanner is total: unterminated strings and comments consume to the
//! end of the input instead of failing, and any character no classifier
//! claims becomes a one-character `Plain` token. The emitted tokens
//! exactly partition the input.

use querypad_core::{Grammar, Token, TokenKind};

/// Scanner over escaped source text.
pub struct Scanner {
    input: String,
    position: usize,
}

impl Scanner {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            position: 0,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(mut self, grammar: &Grammar) -> Vec<Token> {
        let mut tokens = Vec::new();
        while !self.is_eof() {
            tokens.push(self.next_token(grammar));
        }
        tokens
    }

    fn next_token(&mut self, grammar: &Grammar) -> Token {
        let start = self.position;
        let ch = self.current_char();

        if ch == '-' && self.peek_char(1) == '-' {
            return self.read_line_comment(start);
        }
        if ch == '/' && self.peek_char(1) == '*' {
            return self.read_block_comment(start);
        }
        if ch == '\'' || ch == '"' {
            return self.read_string(start);
        }
        if ch.is_ascii_digit() {
            return self.read_number(start);
        }
        if ch.is_ascii_alphabetic() || ch == '_' {
            return self.read_word(start, grammar);
        }

        self.advance();
        self.emit(TokenKind::Plain, start)
    }

    fn current_char(&self) -> char {
        self.input[self.position..].chars().next().unwrap_or('\0')
    }

    fn peek_char(&self, offset: usize) -> char {
        self.input[self.position..].chars().nth(offset).unwrap_or('\0')
    }

    fn advance(&mut self) {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
        }
    }

    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    fn emit(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, &self.input[start..self.position], start)
    }

    /// `--` to the end of the line, newline excluded.
    fn read_line_comment(&mut self, start: usize) -> Token {
        while !self.is_eof() && self.current_char() != '\n' {
            self.advance();
        }
        self.emit(TokenKind::Comment, start)
    }

    /// `/* ... */`, or to end of input when unterminated.
    fn read_block_comment(&mut self, start: usize) -> Token {
        self.advance(); // '/'
        self.advance(); // '*'
        while !self.is_eof() {
            if self.current_char() == '*' && self.peek_char(1) == '/' {
                self.advance();
                self.advance();
                break;
            }
            self.advance();
        }
        self.emit(TokenKind::Comment, start)
    }

    /// A quoted string with backslash escapes, or to end of input when
    /// unterminated. The quote characters stay part of the token text.
    fn read_string(&mut self, start: usize) -> Token {
        let quote = self.current_char();
        self.advance();
        while !self.is_eof() {
            let ch = self.current_char();
            if ch == '\\' {
                self.advance();
                if !self.is_eof() {
                    self.advance();
                }
            } else if ch == quote {
                self.advance();
                break;
            } else {
                self.advance();
            }
        }
        self.emit(TokenKind::Str, start)
    }

    /// Digits with an optional fractional part. A trailing dot is part of
    /// the number.
    fn read_number(&mut self, start: usize) -> Token {
        while !self.is_eof() && self.current_char().is_ascii_digit() {
            self.advance();
        }
        if self.current_char() == '.' {
            self.advance();
            while !self.is_eof() && self.current_char().is_ascii_digit() {
                self.advance();
            }
        }
        self.emit(TokenKind::Number, start)
    }

    /// An identifier-shaped run, classified case-insensitively against the
    /// grammar's dictionaries. The original casing is kept in the token.
    fn read_word(&mut self, start: usize, grammar: &Grammar) -> Token {
        while !self.is_eof() {
            let ch = self.current_char();
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
        let word = &self.input[start..self.position];
        let kind = if grammar.is_keyword(word) {
            TokenKind::Keyword
        } else if grammar.is_function(word) {
            TokenKind::Function
        } else {
            TokenKind::Plain
        };
        self.emit(kind, start)
    }
}
