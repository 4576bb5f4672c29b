//! Tokenizer for the header of a Go source file.
//!
//! Only the token classes that can appear in a package clause or an import
//! declaration are distinguished; everything else comes back as
//! [`TokenKind::Other`] so the parser can stop at the first declaration.

use crate::error::ParseError;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Identifier or keyword
    Ident(&'a str),
    /// String literal, quotes included
    String(&'a str),
    Semicolon,
    /// A line break, including one hidden inside a block comment
    Newline,
    LParen,
    RParen,
    Dot,
    Other(char),
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub line: usize,
}

pub struct Lexer<'a> {
    path: &'a Path,
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(path: &'a Path, src: &'a str) -> Self {
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        Self {
            path,
            src,
            pos: 0,
            line: 1,
        }
    }

    pub fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        loop {
            let Some(c) = self.peek() else {
                return Ok(self.token(TokenKind::Eof));
            };

            match c {
                '\n' => {
                    let token = self.token(TokenKind::Newline);
                    self.bump(c);
                    return Ok(token);
                }
                c if c.is_whitespace() => self.bump(c),
                '/' if self.rest().starts_with("//") => self.skip_line_comment(),
                '/' if self.rest().starts_with("/*") => {
                    let line = self.line;
                    if self.skip_block_comment()? {
                        return Ok(Token {
                            kind: TokenKind::Newline,
                            line,
                        });
                    }
                }
                '"' => return self.interpreted_string(),
                '`' => return self.raw_string(),
                c if is_letter(c) => return Ok(self.ident()),
                _ => {
                    let kind = match c {
                        ';' => TokenKind::Semicolon,
                        '(' => TokenKind::LParen,
                        ')' => TokenKind::RParen,
                        '.' => TokenKind::Dot,
                        other => TokenKind::Other(other),
                    };
                    let token = self.token(kind);
                    self.bump(c);
                    return Ok(token);
                }
            }
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
    }

    fn token(&self, kind: TokenKind<'a>) -> Token<'a> {
        Token {
            kind,
            line: self.line,
        }
    }

    fn skip_line_comment(&mut self) {
        // The newline itself is left in place; it still terminates the line.
        match self.rest().find('\n') {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Returns whether the comment spanned a line break.
    fn skip_block_comment(&mut self) -> Result<bool, ParseError> {
        let start_line = self.line;
        let body = &self.rest()[2..];
        let Some(end) = body.find("*/") else {
            return Err(ParseError::syntax(
                self.path,
                start_line,
                "comment not terminated",
            ));
        };

        let comment = &body[..end];
        let newlines = comment.matches('\n').count();
        self.pos += 2 + end + 2;
        self.line += newlines;
        Ok(newlines > 0)
    }

    fn ident(&mut self) -> Token<'a> {
        let start = self.pos;
        let line = self.line;
        while let Some(c) = self.peek() {
            if !is_letter(c) && !c.is_numeric() {
                break;
            }
            self.bump(c);
        }
        Token {
            kind: TokenKind::Ident(&self.src[start..self.pos]),
            line,
        }
    }

    fn interpreted_string(&mut self) -> Result<Token<'a>, ParseError> {
        let start = self.pos;
        let line = self.line;
        self.bump('"');

        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(ParseError::syntax(
                        self.path,
                        line,
                        "string literal not terminated",
                    ))
                }
                Some('"') => {
                    self.bump('"');
                    break;
                }
                Some('\\') => {
                    self.bump('\\');
                    // The escaped character is validated when the literal is
                    // decoded; here it only must not end the literal.
                    if let Some(escaped) = self.peek().filter(|&c| c != '\n') {
                        self.bump(escaped);
                    }
                }
                Some(c) => self.bump(c),
            }
        }

        Ok(Token {
            kind: TokenKind::String(&self.src[start..self.pos]),
            line,
        })
    }

    fn raw_string(&mut self) -> Result<Token<'a>, ParseError> {
        let start = self.pos;
        let line = self.line;
        self.bump('`');

        loop {
            match self.peek() {
                None => {
                    return Err(ParseError::syntax(
                        self.path,
                        line,
                        "raw string literal not terminated",
                    ))
                }
                Some('`') => {
                    self.bump('`');
                    break;
                }
                Some(c) => self.bump(c),
            }
        }

        Ok(Token {
            kind: TokenKind::String(&self.src[start..self.pos]),
            line,
        })
    }
}

fn is_letter(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}
