//! Plain CSS language service.

use super::scanner::{scan_symbols, ScanOptions};
use super::{StyleSymbol, StylesheetService};

/// Symbol enumeration for plain CSS. Also the fallback for unknown dialects.
pub struct CssService;

impl StylesheetService for CssService {
    fn language(&self) -> &'static str {
        "css"
    }

    fn document_symbols(&self, content: &str) -> Vec<StyleSymbol> {
        scan_symbols(content, ScanOptions { line_comments: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::StyleSymbolKind;

    #[test]
    fn enumerates_classes_and_ids() {
        let symbols = CssService.document_symbols(".btn { }\n#app { }");
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].name, ".btn");
        assert_eq!(symbols[0].kind, StyleSymbolKind::Class);
        assert_eq!(symbols[1].name, "#app");
        assert_eq!(symbols[1].kind, StyleSymbolKind::Id);
    }
}
