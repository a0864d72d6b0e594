//! LESS language service.

use super::scanner::{scan_symbols, ScanOptions};
use super::{StyleSymbol, StylesheetService};

/// Symbol enumeration for LESS. Shares the SCSS scanner configuration:
/// `//` comments and rule nesting behave the same for our purposes.
pub struct LessService;

impl StylesheetService for LessService {
    fn language(&self) -> &'static str {
        "less"
    }

    fn document_symbols(&self, content: &str) -> Vec<StyleSymbol> {
        scan_symbols(content, ScanOptions { line_comments: true })
    }
}
