//! Go source header parsing
//!
//! Reads the package clause and import declarations of the non-test Go files
//! in a directory. Parsing stops at the first top-level declaration, so the
//! remainder of a file is never inspected and need not be valid Go.

mod lexer;
mod literal;

pub use literal::{import_path, unquote};

use crate::error::ParseError;
use crate::fs::FileSystem;
use anyhow::Result;
use lexer::{Lexer, Token, TokenKind};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::trace;

/// Import path cgo reserves for the foreign-function boundary.
pub const CGO_PSEUDO_IMPORT: &str = "C";

const GO_SOURCE_SUFFIX: &str = ".go";
const GO_TEST_SUFFIX: &str = "_test.go";

/// Package clause and imports of a single Go file, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub package_name: String,
    pub imports: Vec<String>,
}

/// Package identity and imports aggregated over one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPackage {
    pub package_name: String,
    pub imports: BTreeSet<String>,
}

impl ParsedPackage {
    fn ensure_package_name(&mut self, name: &str) -> Result<(), ParseError> {
        if self.package_name.is_empty() {
            self.package_name = name.to_string();
            return Ok(());
        }
        if self.package_name != name {
            return Err(ParseError::PackageNameMismatch {
                first: self.package_name.clone(),
                second: name.to_string(),
            });
        }
        Ok(())
    }

    fn add_imports(&mut self, imports: Vec<String>) {
        self.imports.extend(
            imports
                .into_iter()
                .filter(|path| path != CGO_PSEUDO_IMPORT),
        );
    }
}

/// Whether a file name denotes a Go source file compiled into the library.
pub fn is_library_source(file_name: &str) -> bool {
    file_name.ends_with(GO_SOURCE_SUFFIX) && !file_name.ends_with(GO_TEST_SUFFIX)
}

/// Parses every non-test Go file directly inside `dir`.
///
/// Returns `Ok(None)` when the directory holds no such file.
pub fn parse_dir(fs: &dyn FileSystem, dir: &Path) -> Result<Option<ParsedPackage>> {
    let mut entries = fs.read_dir(dir)?;
    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    let mut package = ParsedPackage::default();
    let mut files = 0usize;

    for entry in entries {
        if entry.is_dir() || !is_library_source(entry.file_name()) {
            continue;
        }

        // Only the header has to decode; invalid UTF-8 becomes U+FFFD.
        let bytes = fs.read(entry.path())?;
        let source = String::from_utf8_lossy(&bytes);
        let header = parse_header(entry.path(), &source)?;
        trace!(
            file = %entry.path().display(),
            package = %header.package_name,
            imports = header.imports.len(),
            "Parsed Go file header"
        );

        package.ensure_package_name(&header.package_name)?;
        package.add_imports(header.imports);
        files += 1;
    }

    if files == 0 {
        return Ok(None);
    }

    Ok(Some(package))
}

/// Parses the package clause and import declarations of one file.
pub fn parse_header(path: &Path, source: &str) -> Result<FileHeader, ParseError> {
    HeaderParser::new(path, source)?.parse()
}

struct HeaderParser<'a> {
    path: &'a Path,
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> HeaderParser<'a> {
    fn new(path: &'a Path, source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(path, source);
        let current = lexer.next_token()?;
        Ok(Self {
            path,
            lexer,
            current,
        })
    }

    fn parse(mut self) -> Result<FileHeader, ParseError> {
        self.skip_newlines()?;
        if self.current.kind != TokenKind::Ident("package") {
            return Err(self.error("expected 'package'"));
        }
        self.advance()?;

        let package_name = match self.current.kind {
            TokenKind::Ident("_") => return Err(self.error("invalid package name _")),
            TokenKind::Ident(name) if !is_keyword(name) => name.to_string(),
            _ => return Err(self.error("expected package name")),
        };
        self.advance()?;
        self.expect_terminator()?;

        let mut imports = Vec::new();
        loop {
            self.skip_separators()?;
            if self.current.kind != TokenKind::Ident("import") {
                break;
            }
            self.advance()?;
            self.skip_newlines()?;

            if self.current.kind == TokenKind::LParen {
                self.advance()?;
                loop {
                    self.skip_separators()?;
                    if self.current.kind == TokenKind::RParen {
                        self.advance()?;
                        break;
                    }
                    imports.push(self.import_spec()?);
                    match self.current.kind {
                        TokenKind::Semicolon | TokenKind::Newline | TokenKind::RParen => {}
                        _ => return Err(self.error("expected ';' or ')' after import")),
                    }
                }
            } else {
                imports.push(self.import_spec()?);
            }
            self.expect_terminator()?;
        }

        Ok(FileHeader {
            package_name,
            imports,
        })
    }

    fn import_spec(&mut self) -> Result<String, ParseError> {
        match self.current.kind {
            TokenKind::Dot => self.advance()?,
            TokenKind::Ident(name) if !is_keyword(name) => self.advance()?,
            _ => {}
        }

        let TokenKind::String(literal) = self.current.kind else {
            return Err(self.error("expected import path"));
        };
        let path = literal::import_path(literal)?;
        self.advance()?;
        Ok(path)
    }

    fn expect_terminator(&mut self) -> Result<(), ParseError> {
        match self.current.kind {
            TokenKind::Semicolon | TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(self.error("expected ';' or newline")),
        }
    }

    fn skip_newlines(&mut self) -> Result<(), ParseError> {
        while self.current.kind == TokenKind::Newline {
            self.advance()?;
        }
        Ok(())
    }

    fn skip_separators(&mut self) -> Result<(), ParseError> {
        while matches!(
            self.current.kind,
            TokenKind::Newline | TokenKind::Semicolon
        ) {
            self.advance()?;
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, message: &str) -> ParseError {
        let found = match self.current.kind {
            TokenKind::Ident(name) => format!("'{}'", name),
            TokenKind::String(literal) => literal.to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Newline => "newline".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::Other(c) => format!("'{}'", c),
            TokenKind::Eof => "EOF".to_string(),
        };
        ParseError::syntax(
            self.path,
            self.current.line,
            format!("{}, found {}", message, found),
        )
    }
}

fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "break"
            | "case"
            | "chan"
            | "const"
            | "continue"
            | "default"
            | "defer"
            | "else"
            | "fallthrough"
            | "for"
            | "func"
            | "go"
            | "goto"
            | "if"
            | "import"
            | "interface"
            | "map"
            | "package"
            | "range"
            | "return"
            | "select"
            | "struct"
            | "switch"
            | "type"
            | "var"
    )
}
