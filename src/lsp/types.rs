//! LSP type definitions and utilities.

use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::*;

/// Settings accepted from the client, both as `initializationOptions` and
/// through `workspace/didChangeConfiguration`. Field names are camelCase on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VueModLspConfig {
    /// Kept for client compatibility; the completion rebuild does not
    /// consult it.
    pub max_number_of_problems: u32,
}

impl Default for VueModLspConfig {
    fn default() -> Self {
        Self {
            max_number_of_problems: 100,
        }
    }
}

/// Build the completion item for a bare CSS-module class name.
///
/// Items are uniformly classified as `Property`, mirroring how the class
/// appears at the use site (`$style.name`).
pub fn class_completion(label: &str) -> CompletionItem {
    CompletionItem {
        label: label.to_string(),
        kind: Some(CompletionItemKind::PROPERTY),
        ..Default::default()
    }
}
