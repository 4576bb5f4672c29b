//! Decoding and validation of Go import path literals.

use crate::error::ParseError;

/// Characters Go rejects inside an import path.
const ILLEGAL_IMPORT_CHARS: &str = "!\"#$%&'()*,:;<=>?[\\]^{|}`\u{fffd}";

/// Decodes a Go string literal (interpreted or raw) into its value.
pub fn unquote(literal: &str) -> Result<String, ParseError> {
    let invalid = |reason: &str| ParseError::ImportLiteral {
        literal: literal.to_string(),
        reason: reason.to_string(),
    };

    if literal.len() < 2 {
        return Err(invalid("literal too short"));
    }

    if let Some(body) = literal
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    {
        if body.contains('`') {
            return Err(invalid("unexpected backquote"));
        }
        return Ok(body.replace('\r', ""));
    }

    let body = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| invalid("missing quotes"))?;

    if body.contains('\n') {
        return Err(invalid("newline in string"));
    }
    if !body.contains('\\') {
        if body.contains('"') {
            return Err(invalid("unescaped quote"));
        }
        return Ok(body.to_string());
    }

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(invalid("unescaped quote")),
            '\\' => {
                let escape = chars.next().ok_or_else(|| invalid("trailing backslash"))?;
                match escape {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => {
                        let value = take_digits(&mut chars, 2, 16).ok_or_else(|| invalid("invalid \\x escape"))?;
                        out.push(value as u8);
                    }
                    '0'..='7' => {
                        let rest = take_digits(&mut chars, 2, 8).ok_or_else(|| invalid("invalid octal escape"))?;
                        let value = (escape as u32 - '0' as u32) * 64 + rest;
                        if value > 0xff {
                            return Err(invalid("octal escape out of range"));
                        }
                        out.push(value as u8);
                    }
                    'u' | 'U' => {
                        let width = if escape == 'u' { 4 } else { 8 };
                        let value = take_digits(&mut chars, width, 16)
                            .ok_or_else(|| invalid("invalid unicode escape"))?;
                        let decoded = char::from_u32(value).ok_or_else(|| invalid("invalid unicode code point"))?;
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
                    }
                    _ => return Err(invalid("unknown escape sequence")),
                }
            }
            other => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    String::from_utf8(out).map_err(|_| invalid("invalid UTF-8"))
}

fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(radix)?;
        value = value * radix + digit;
    }
    Some(value)
}

/// Decodes an import path literal and checks it is a usable import path.
pub fn import_path(literal: &str) -> Result<String, ParseError> {
    let path = unquote(literal)?;

    if path.is_empty() {
        return Err(ParseError::ImportLiteral {
            literal: literal.to_string(),
            reason: "empty import path".to_string(),
        });
    }
    if let Some(bad) = path
        .chars()
        .find(|&c| c.is_control() || c.is_whitespace() || ILLEGAL_IMPORT_CHARS.contains(c))
    {
        return Err(ParseError::ImportLiteral {
            literal: literal.to_string(),
            reason: format!("invalid character {:?} in import path", bad),
        });
    }

    Ok(path)
}
