//! Stylesheet language services
//!
//! One service per stylesheet dialect (CSS, SCSS, LESS). A service parses
//! raw block content and enumerates the selector symbols it declares. The
//! services are the seam between the completion logic and stylesheet
//! syntax: callers pick one by language tag and treat it as an oracle.

mod css;
mod less;
mod scanner;
mod scss;

pub use css::CssService;
pub use less::LessService;
pub use scss::ScssService;

/// Classification of a selector symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSymbolKind {
    /// A `.class` selector.
    Class,
    /// An `#id` selector.
    Id,
}

/// A named selector reported by a stylesheet service.
///
/// The name keeps its sigil (`.foo`, `#bar`) so callers can apply their own
/// admission policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSymbol {
    pub name: String,
    pub kind: StyleSymbolKind,
    /// 1-based line of the selector within the scanned content.
    pub line: usize,
}

/// A stylesheet dialect parser that can enumerate document symbols.
///
/// Implementations never fail: malformed content yields the symbols that
/// could still be recognized, or an empty list.
pub trait StylesheetService: Send + Sync {
    /// Language tag this service handles, e.g. `"scss"`.
    fn language(&self) -> &'static str;

    /// Enumerate the selector symbols declared in `content`.
    fn document_symbols(&self, content: &str) -> Vec<StyleSymbol>;
}

/// Select the service for a declared block language.
///
/// Unknown tags fall back to plain CSS, matching how editors treat a
/// `<style>` block without a recognized `lang`.
pub fn service_for_language(lang: &str) -> Box<dyn StylesheetService> {
    match lang {
        "scss" => Box::new(ScssService),
        "less" => Box::new(LessService),
        _ => Box::new(CssService),
    }
}
