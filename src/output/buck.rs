//! `go_library` rule rendering
//!
//! The rendered text is byte-for-byte deterministic for a given package and
//! dependency list, so unchanged vendor trees regenerate identical files.

use crate::fs::FileSystem;
use crate::vendor::PackageUnit;
use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

const GO_LIBRARY_SRCS: &str = r#"glob(["*.go"], exclude = ["*_test.go"])"#;
const VISIBILITY: &str = r#"["PUBLIC"]"#;

/// A rendered build file and where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFile {
    pub path: PathBuf,
    /// Repository-relative, `/`-separated path used in logs
    pub display_path: String,
    pub contents: String,
}

/// The `go_library` rule of one package.
pub struct GoLibraryRule<'a> {
    pub unit: &'a PackageUnit,
    pub deps: &'a [String],
}

impl fmt::Display for GoLibraryRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "go_library(")?;
        writeln!(f, "    name = {},", GoQuoted(self.unit.target_name()))?;
        writeln!(f, "    srcs = {},", GO_LIBRARY_SRCS)?;
        writeln!(f, "    package_name = {},", GoQuoted(&self.unit.import_path))?;
        if !self.deps.is_empty() {
            writeln!(f, "    deps = [")?;
            for dep in self.deps {
                writeln!(f, "        {},", GoQuoted(dep))?;
            }
            writeln!(f, "    ],")?;
        }
        writeln!(f, "    visibility = {},", VISIBILITY)?;
        writeln!(f, ")")
    }
}

/// Renders the `go_library` rule for a package.
///
/// The `deps` attribute is left out entirely when `deps` is empty.
pub fn render_build_file(unit: &PackageUnit, deps: &[String]) -> String {
    GoLibraryRule { unit, deps }.to_string()
}

/// Displays a string quoted the way Go's `%q` verb does.
pub struct GoQuoted<'a>(pub &'a str);

impl fmt::Display for GoQuoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\x07' => f.write_str("\\a")?,
                '\x08' => f.write_str("\\b")?,
                '\x0c' => f.write_str("\\f")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\x0b' => f.write_str("\\v")?,
                c if is_go_printable(c) => write!(f, "{}", c)?,
                c if (c as u32) < 0x20 || c == '\x7f' => write!(f, "\\x{:02x}", c as u32)?,
                c if (c as u32) < 0x10000 => write!(f, "\\u{:04x}", c as u32)?,
                c => write!(f, "\\U{:08x}", c as u32)?,
            }
        }
        f.write_str("\"")
    }
}

/// Quotes a string the way Go's `%q` verb does.
pub fn go_quote(s: &str) -> String {
    GoQuoted(s).to_string()
}

/// Go's `strconv.IsPrint`: ASCII space plus every code point outside the
/// control, format, separator, private-use and noncharacter ranges.
///
/// Unassigned code points are treated as printable.
fn is_go_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let cp = c as u32;
    !(is_format(cp) || is_private_use(cp) || is_noncharacter(cp))
}

/// Unicode general category Cf.
fn is_format(cp: u32) -> bool {
    matches!(
        cp,
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x2028..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
    )
}

fn is_private_use(cp: u32) -> bool {
    matches!(cp, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}

fn is_noncharacter(cp: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&cp) || cp & 0xFFFE == 0xFFFE
}

/// Writes one build file per package into the vendor tree.
pub struct BuildFileEmitter<'a> {
    fs: &'a dyn FileSystem,
    vendor_dir: &'a Path,
    vendor_dir_name: &'a str,
    build_file_name: &'a str,
}

impl<'a> BuildFileEmitter<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        vendor_dir: &'a Path,
        vendor_dir_name: &'a str,
        build_file_name: &'a str,
    ) -> Self {
        Self {
            fs,
            vendor_dir,
            vendor_dir_name,
            build_file_name,
        }
    }

    /// Renders and writes the build file, replacing whatever was there.
    pub fn emit(&self, unit: &PackageUnit, deps: &[String]) -> Result<BuildFile> {
        let contents = render_build_file(unit, deps);

        let mut path = self.vendor_dir.to_path_buf();
        path.extend(unit.import_path.split('/'));
        path.push(self.build_file_name);

        self.fs.write(&path, &contents)?;

        Ok(BuildFile {
            path,
            display_path: format!(
                "{}/{}/{}",
                self.vendor_dir_name, unit.import_path, self.build_file_name
            ),
            contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use crate::parser::ParsedPackage;

    fn unit(import_path: &str, package_name: &str) -> PackageUnit {
        PackageUnit::new(
            import_path,
            ParsedPackage {
                package_name: package_name.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_render_with_deps() {
        let rendered = render_build_file(
            &unit("pkgs/alpha", "alpha"),
            &[
                "//vendor/pkgs/beta:beta".to_string(),
                "//vendor/pkgs/gamma:gamma".to_string(),
            ],
        );

        assert_eq!(
            rendered,
            r#"go_library(
    name = "alpha",
    srcs = glob(["*.go"], exclude = ["*_test.go"]),
    package_name = "pkgs/alpha",
    deps = [
        "//vendor/pkgs/beta:beta",
        "//vendor/pkgs/gamma:gamma",
    ],
    visibility = ["PUBLIC"],
)
"#
        );
    }

    #[test]
    fn test_render_without_deps_omits_block() {
        let rendered = render_build_file(&unit("github.com/pkg/errors", "errors"), &[]);

        assert_eq!(
            rendered,
            r#"go_library(
    name = "errors",
    srcs = glob(["*.go"], exclude = ["*_test.go"]),
    package_name = "github.com/pkg/errors",
    visibility = ["PUBLIC"],
)
"#
        );
        assert!(!rendered.contains("deps"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let u = unit("a/b", "b");
        let deps = vec!["//vendor/c:c".to_string()];
        assert_eq!(render_build_file(&u, &deps), render_build_file(&u, &deps));
    }

    #[test]
    fn test_go_quote() {
        assert_eq!(go_quote("plain"), r#""plain""#);
        assert_eq!(go_quote(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(go_quote("tab\there"), r#""tab\there""#);
        assert_eq!(go_quote("\x01"), r#""\x01""#);
        assert_eq!(go_quote("\u{85}"), r#""\u0085""#);
        assert_eq!(go_quote("héllo"), "\"héllo\"");
    }

    #[test]
    fn test_go_quote_escapes_non_printing_runes() {
        assert_eq!(go_quote("a\u{200b}b"), r#""a\u200bb""#);
        assert_eq!(go_quote("a\u{a0}b"), r#""a\u00a0b""#);
        assert_eq!(go_quote("\u{3000}"), r#""\u3000""#);
        assert_eq!(go_quote("\u{feff}x"), r#""\ufeffx""#);
        assert_eq!(go_quote("\u{2028}"), r#""\u2028""#);
        assert_eq!(go_quote("\u{e000}"), r#""\ue000""#);
        assert_eq!(go_quote("\u{e0001}"), r#""\U000e0001""#);
        assert_eq!(go_quote("\u{7f}"), r#""\x7f""#);
    }

    #[test]
    fn test_go_quote_keeps_printable_runes() {
        assert_eq!(go_quote("a b"), r#""a b""#);
        assert_eq!(go_quote("日本語"), "\"日本語\"");
        assert_eq!(go_quote("\u{1F600}"), "\"\u{1F600}\"");
        assert_eq!(go_quote("\u{fffd}"), "\"\u{fffd}\"");
    }

    #[test]
    fn test_render_quotes_unusual_import_path() {
        let rendered = render_build_file(&unit("example.com/a\u{200b}b", "ab"), &[]);
        assert!(rendered.contains(r#"package_name = "example.com/a\u200bb","#));
    }

    #[test]
    fn test_emit_writes_into_package_dir() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_dir("vendor/github.com/pkg/errors");
        let vendor_dir = PathBuf::from("/repo/vendor");
        let emitter = BuildFileEmitter::new(&fs, &vendor_dir, "vendor", "BUCK");

        let file = emitter
            .emit(&unit("github.com/pkg/errors", "errors"), &[])
            .unwrap();

        assert_eq!(file.path, PathBuf::from("/repo/vendor/github.com/pkg/errors/BUCK"));
        assert_eq!(file.display_path, "vendor/github.com/pkg/errors/BUCK");
        assert_eq!(
            fs.file_content("vendor/github.com/pkg/errors/BUCK"),
            Some(file.contents)
        );
    }

    #[test]
    fn test_emit_overwrites_existing_file() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_file("vendor/a/BUCK", "# hand edited\nload(\"//x.bzl\", \"y\")\n");
        let vendor_dir = PathBuf::from("/repo/vendor");
        let emitter = BuildFileEmitter::new(&fs, &vendor_dir, "vendor", "BUCK");

        emitter.emit(&unit("a", "a"), &[]).unwrap();

        let contents = fs.file_content("vendor/a/BUCK").unwrap();
        assert!(contents.starts_with("go_library(\n"));
        assert!(!contents.contains("hand edited"));
    }

    #[test]
    fn test_emit_propagates_write_errors() {
        let fs = MockFileSystem::with_root(PathBuf::from("/repo"));
        fs.add_dir("vendor/a");
        fs.deny_write("vendor/a/BUCK");
        let vendor_dir = PathBuf::from("/repo/vendor");
        let emitter = BuildFileEmitter::new(&fs, &vendor_dir, "vendor", "BUCK");

        assert!(emitter.emit(&unit("a", "a"), &[]).is_err());
    }
}
