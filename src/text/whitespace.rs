//! Whitespace collapsing.
//!
//! ODF collapses runs of whitespace the way HTML does: whitespace directly
//! after visible content survives as one space, further whitespace in the
//! same run disappears, and whitespace that nothing visible follows in the
//! paragraph disappears entirely. A paragraph holding only whitespace keeps
//! one space.
//!
//! Offsets are char offsets into a single text run.

use super::classify::{is_odf_whitespace, is_odf_whitespace_char};
use super::scan::{scan_left_for_any_character, scan_left_for_non_whitespace, scan_right_for_any_character};
use super::traverse::{next_node, previous_node};
use crate::dom::{NodeId, OdfDom};

fn char_at(text: &str, offset: usize) -> Option<char> {
    text.chars().nth(offset)
}

fn is_whitespace_at(text: &str, offset: usize) -> bool {
    char_at(text, offset).is_some_and(is_odf_whitespace_char)
}

/// Whether everything from `offset` to the end of the paragraph is whitespace.
///
/// The rest of the run must be non-empty ODF whitespace, and no character
/// may follow anywhere later in the paragraph.
pub fn is_trailing_whitespace(dom: &OdfDom, text_node: NodeId, offset: usize) -> bool {
    let Some(text) = dom.text_content(text_node) else {
        return false;
    };
    let rest = text
        .char_indices()
        .nth(offset)
        .map_or("", |(index, _)| &text[index..]);
    if !is_odf_whitespace(rest) {
        return false;
    }
    !scan_right_for_any_character(dom, next_node(dom, text_node))
}

/// Whether the whitespace char at `offset` survives collapsing.
///
/// Non-whitespace chars, offsets outside the run and non-text nodes are
/// never significant.
pub fn is_significant_whitespace(dom: &OdfDom, text_node: NodeId, offset: usize) -> bool {
    let Some(text) = dom.text_content(text_node) else {
        return false;
    };
    if !is_whitespace_at(text, offset) {
        return false;
    }

    // A run's first char never decides on its own
    if offset == 0 {
        return false;
    }

    let follows_character = if !is_whitespace_at(text, offset - 1) {
        true
    } else if offset > 1 {
        // Second or later whitespace of a sequence inside this run
        return false;
    } else {
        scan_left_for_non_whitespace(dom, previous_node(dom, text_node))
    };

    if follows_character {
        let trailing = is_trailing_whitespace(dom, text_node, offset);
        tracing::trace!(?text_node, offset, trailing, "whitespace after character");
        return !trailing;
    }

    // Leading whitespace: kept only while nothing visible precedes the run,
    // which also keeps one space in a whitespace-only paragraph.
    !scan_left_for_any_character(dom, previous_node(dom, text_node))
}

/// Offsets of all significant whitespace chars in a text run.
pub fn significant_whitespace_offsets(dom: &OdfDom, text_node: NodeId) -> Vec<usize> {
    let Some(text) = dom.text_content(text_node) else {
        return Vec::new();
    };
    text.chars()
        .enumerate()
        .filter(|&(offset, c)| {
            is_odf_whitespace_char(c) && is_significant_whitespace(dom, text_node, offset)
        })
        .map(|(offset, _)| offset)
        .collect()
}
