//! CSS-module class completion for the LSP server
//!
//! Builds the completion list for one Vue component: module-flagged style
//! blocks are handed to the stylesheet service matching their dialect, and
//! the class symbols come back as a deduplicated flat list of bare names.

use indexmap::IndexMap;
use tower_lsp::lsp_types::CompletionItem;

use crate::sfc::extract_style_blocks;
use crate::stylesheet::{service_for_language, StyleSymbolKind};

use super::types::class_completion;

/// Rebuild the published completion list for one component source.
///
/// Only `<style module>` blocks contribute. A class symbol is admitted by
/// its bare name (leading `.` stripped); the first occurrence of a name
/// wins and the result keeps insertion order. Id symbols are not admitted —
/// inherited behavior, see DESIGN.md.
pub fn completions_for_source(text: &str) -> Vec<CompletionItem> {
    let mut by_name: IndexMap<String, CompletionItem> = IndexMap::new();

    let blocks = extract_style_blocks(text);
    for block in &blocks {
        if !block.is_module {
            continue;
        }
        let service = service_for_language(&block.lang);
        for symbol in service.document_symbols(&block.content) {
            if symbol.kind != StyleSymbolKind::Class {
                continue;
            }
            let Some(label) = symbol.name.strip_prefix('.') else {
                continue;
            };
            if !by_name.contains_key(label) {
                by_name.insert(label.to_string(), class_completion(label));
            }
        }
    }

    by_name.into_values().collect()
}
