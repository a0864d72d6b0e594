//! vuemod-ls: CSS-module class completion for Vue single-file components.
//!
//! The pipeline is small: [`sfc`] splits a component into its blocks,
//! [`stylesheet`] enumerates selector symbols per dialect, and [`lsp`]
//! serves the resulting class names as completion items over the Language
//! Server Protocol.

pub mod lsp;
pub mod sfc;
pub mod stylesheet;

pub use sfc::{extract_style_blocks, StyleBlock};
pub use stylesheet::{service_for_language, StyleSymbol, StyleSymbolKind, StylesheetService};
