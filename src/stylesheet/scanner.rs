//! Single-pass selector scanner shared by the dialect services.
//!
//! The scanner does not build a stylesheet AST. It strips comments and
//! string literals, splits the text at rule boundaries (`{`, `}`, `;`) and
//! reads selector symbols out of whatever text precedes a `{`. That is
//! enough to enumerate class and id selectors, including ones nested inside
//! at-rules or (for SCSS/LESS) inside other rules, and it never fails on
//! malformed input.

use super::{StyleSymbol, StyleSymbolKind};

#[derive(Debug, Clone, Copy)]
pub(super) struct ScanOptions {
    /// Recognize `//` line comments and `#{…}` interpolation (SCSS/LESS).
    pub line_comments: bool,
}

pub(super) fn scan_symbols(content: &str, opts: ScanOptions) -> Vec<StyleSymbol> {
    let mut symbols = Vec::new();
    let mut chars = content.chars().peekable();
    let mut line = 1usize;
    let mut selector = String::new();
    let mut selector_line = 1usize;

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                line += 1;
                selector.push(' ');
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                    }
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
                selector.push(' ');
            }
            '/' if opts.line_comments && chars.peek() == Some(&'/') => {
                while chars.peek().is_some_and(|&c| c != '\n') {
                    chars.next();
                }
            }
            '"' | '\'' => {
                // String literal: braces and semicolons inside are not
                // rule boundaries.
                let quote = c;
                let mut escaped = false;
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                    }
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == quote {
                        break;
                    }
                }
            }
            '#' if opts.line_comments && chars.peek() == Some(&'{') => {
                // Interpolated selector part is dynamic, drop it
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                    }
                    if c == '}' {
                        break;
                    }
                }
            }
            '{' => {
                flush_selector(&selector, selector_line, &mut symbols);
                selector.clear();
            }
            '}' | ';' => selector.clear(),
            _ => {
                if !c.is_whitespace() && selector.trim().is_empty() {
                    selector_line = line;
                }
                selector.push(c);
            }
        }
    }

    symbols
}

fn flush_selector(selector: &str, line: usize, symbols: &mut Vec<StyleSymbol>) {
    let text = selector.trim();
    if text.is_empty() || text.starts_with('@') {
        return;
    }
    for compound in text.split(is_compound_separator) {
        // `&`-compounds rename the parent selector, they declare no class
        if compound.is_empty() || compound.contains('&') {
            continue;
        }
        collect_selector_tokens(compound, line, symbols);
    }
}

fn is_compound_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '>' | '+' | '~' | '(' | ')')
}

fn collect_selector_tokens(compound: &str, line: usize, symbols: &mut Vec<StyleSymbol>) {
    let mut chars = compound.chars().peekable();
    while let Some(c) = chars.next() {
        let kind = match c {
            '.' => StyleSymbolKind::Class,
            '#' => StyleSymbolKind::Id,
            _ => continue,
        };
        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            let ok = if name.is_empty() {
                is_ident_start(next)
            } else {
                is_ident_char(next)
            };
            if !ok {
                break;
            }
            name.push(next);
            chars.next();
        }
        if !name.is_empty() {
            symbols.push(StyleSymbol {
                name: format!("{c}{name}"),
                kind,
                line,
            });
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
