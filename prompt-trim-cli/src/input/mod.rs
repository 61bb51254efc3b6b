//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// One text to trim, with a label for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// File path, or `<stdin>`
    pub source: String,
    /// Document text
    pub text: String,
}

impl InputDocument {
    /// Label used for standard input
    pub const STDIN: &'static str = "<stdin>";
}
