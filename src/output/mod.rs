//! BUCK file rendering and writing

mod buck;

pub use buck::{go_quote, render_build_file, BuildFile, BuildFileEmitter, GoLibraryRule, GoQuoted};
