//! SCSS language service.

use super::scanner::{scan_symbols, ScanOptions};
use super::{StyleSymbol, StylesheetService};

/// Symbol enumeration for SCSS: `//` comments, `#{…}` interpolation and
/// nested rules on top of the plain CSS grammar.
pub struct ScssService;

impl StylesheetService for ScssService {
    fn language(&self) -> &'static str {
        "scss"
    }

    fn document_symbols(&self, content: &str) -> Vec<StyleSymbol> {
        scan_symbols(content, ScanOptions { line_comments: true })
    }
}
