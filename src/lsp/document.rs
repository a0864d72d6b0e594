//! Incremental text-document synchronization.
//!
//! The server advertises incremental sync, so `didChange` delivers ranged
//! edits against the stored text. LSP positions count UTF-16 code units;
//! they are converted to byte offsets here before splicing.

use thiserror::Error;
use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentEditError {
    #[error("edit position {0:?} is outside the document")]
    OutOfBounds(Position),
    #[error("edit range starts at {0:?}, after its end {1:?}")]
    Inverted(Position, Position),
}

/// Apply a `didChange` batch to the stored document text, in order.
///
/// A change without a range replaces the whole document (full sync); a
/// ranged change splices into the current text.
pub fn apply_content_changes(
    text: &mut String,
    changes: &[TextDocumentContentChangeEvent],
) -> Result<(), DocumentEditError> {
    for change in changes {
        match change.range {
            Some(range) => {
                let start = position_to_offset(text, range.start)
                    .ok_or(DocumentEditError::OutOfBounds(range.start))?;
                let end = position_to_offset(text, range.end)
                    .ok_or(DocumentEditError::OutOfBounds(range.end))?;
                if start > end {
                    return Err(DocumentEditError::Inverted(range.start, range.end));
                }
                text.replace_range(start..end, &change.text);
            }
            None => {
                text.clear();
                text.push_str(&change.text);
            }
        }
    }
    Ok(())
}

/// Convert an LSP position to a byte offset into `text`.
///
/// Returns `None` for a line past the end of the document. A character
/// count past the end of its line clamps to the line end, as the protocol
/// allows.
fn position_to_offset(text: &str, position: Position) -> Option<usize> {
    let mut offset = 0usize;
    for _ in 0..position.line {
        let newline = text[offset..].find('\n')?;
        offset += newline + 1;
    }

    let mut units = 0u32;
    for (i, c) in text[offset..].char_indices() {
        if units >= position.character || c == '\n' {
            return Some(offset + i);
        }
        units += c.len_utf16() as u32;
    }
    Some(text.len())
}
