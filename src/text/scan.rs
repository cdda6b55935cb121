//! Character scans along a paragraph.
//!
//! "Character" means a non-whitespace char inside a text run, or a
//! character element (tab, line break, inline frame). Every scan stops at the
//! paragraph boundary.

use super::classify::{is_character_element, is_odf_whitespace, is_odf_whitespace_char};
use super::traverse::{first_child, last_child, next_node, previous_node};
use crate::dom::{NodeId, OdfDom};

/// What sits immediately to the left of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LeftCharacter {
    /// No character, or whitespace that is itself collapsible.
    Nothing = 0,
    /// A non-whitespace character or a character element.
    Character = 1,
    /// A single whitespace char directly preceded by a character.
    WhitespaceAfterCharacter = 2,
}

/// Walk left from `node` and report whether the first thing found is a
/// character rather than whitespace.
///
/// Empty text runs and non-character elements are stepped over. Only the
/// last char of the first non-empty run is inspected.
pub fn scan_left_for_non_whitespace(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> bool {
    let mut node = node.into();
    while let Some(id) = node {
        if let Some(text) = dom.text_content(id) {
            if let Some(last) = text.chars().next_back() {
                return !is_odf_whitespace_char(last);
            }
        } else if is_character_element(dom, id) {
            return true;
        }
        node = previous_node(dom, id);
    }
    false
}

/// Classify the left context at the end of `node`.
///
/// Decides from the last one or two chars of a text run, and only scans
/// further left when the run is a single whitespace char.
pub fn look_left_for_character(dom: &OdfDom, node: NodeId) -> LeftCharacter {
    if let Some(text) = dom.text_content(node) {
        let mut chars = text.chars().rev();
        let Some(last) = chars.next() else {
            return LeftCharacter::Nothing;
        };
        if !is_odf_whitespace_char(last) {
            return LeftCharacter::Character;
        }
        return match chars.next() {
            None if scan_left_for_non_whitespace(dom, previous_node(dom, node)) => {
                LeftCharacter::WhitespaceAfterCharacter
            }
            None => LeftCharacter::Nothing,
            Some(before) if is_odf_whitespace_char(before) => LeftCharacter::Nothing,
            Some(_) => LeftCharacter::WhitespaceAfterCharacter,
        };
    }
    if is_character_element(dom, node) {
        LeftCharacter::Character
    } else {
        LeftCharacter::Nothing
    }
}

/// Whether `node` starts with a character. Does not look past `node`.
pub fn look_right_for_character(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> bool {
    let Some(id) = node.into() else {
        return false;
    };
    match dom.text_content(id) {
        Some(text) => text.chars().next().is_some_and(|c| !is_odf_whitespace_char(c)),
        None => is_character_element(dom, id),
    }
}

/// Whether any character exists at or before `node` in its paragraph.
///
/// Unlike [`scan_left_for_non_whitespace`], whitespace at the end of a run
/// does not stop the scan.
pub fn scan_left_for_any_character(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> bool {
    let mut node = node.into().map(|id| last_child(dom, id));
    while let Some(id) = node {
        if is_character_atom(dom, id) {
            tracing::trace!(?id, "character found scanning left");
            return true;
        }
        node = previous_node(dom, id);
    }
    false
}

/// Whether any character exists at or after `node` in its paragraph.
pub fn scan_right_for_any_character(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> bool {
    let mut node = node.into().map(|id| first_child(dom, id));
    while let Some(id) = node {
        if is_character_atom(dom, id) {
            tracing::trace!(?id, "character found scanning right");
            return true;
        }
        node = next_node(dom, id);
    }
    false
}

/// A text run with a non-whitespace char, or a character element.
fn is_character_atom(dom: &OdfDom, id: NodeId) -> bool {
    match dom.text_content(id) {
        Some(text) => !text.is_empty() && !is_odf_whitespace(text),
        None => is_character_element(dom, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::QName;

    struct Para {
        dom: OdfDom,
        p: NodeId,
    }

    impl Para {
        fn new() -> Self {
            let mut dom = OdfDom::new();
            let p = dom.append_element(dom.document(), QName::text("p"), vec![]);
            Self { dom, p }
        }

        fn text(&mut self, s: &str) -> NodeId {
            self.dom.append_text(self.p, s)
        }

        fn element(&mut self, local: &str) -> NodeId {
            self.dom.append_element(self.p, QName::text(local), vec![])
        }
    }

    #[test]
    fn test_scan_left_for_non_whitespace_uses_last_char() {
        let mut para = Para::new();
        let a = para.text("x ");
        let b = para.text("");
        let c = para.text("y");
        assert!(!scan_left_for_non_whitespace(&para.dom, a));
        // Empty runs are skipped
        assert!(!scan_left_for_non_whitespace(&para.dom, b));
        assert!(scan_left_for_non_whitespace(&para.dom, c));
        assert!(!scan_left_for_non_whitespace(&para.dom, None));
    }

    #[test]
    fn test_scan_left_for_non_whitespace_character_element() {
        let mut para = Para::new();
        para.element("line-break");
        let empty = para.text("");
        let space = para.element("s");
        assert!(scan_left_for_non_whitespace(&para.dom, empty));
        // text:s is not a character element and is stepped over
        assert!(scan_left_for_non_whitespace(&para.dom, space));
    }

    #[test]
    fn test_scan_left_for_non_whitespace_through_span() {
        let mut para = Para::new();
        para.text("a");
        let span = para.element("span");
        let inner = para.dom.append_text(span, "");
        assert!(scan_left_for_non_whitespace(&para.dom, inner));
        assert!(!scan_left_for_non_whitespace(&para.dom, para.p));
    }

    #[test]
    fn test_look_left_for_character() {
        let mut para = Para::new();
        let word = para.text("ab");
        let one = para.text(" ");
        let two = para.text("  ");
        let after = para.text("c ");
        let tab = para.element("tab");
        let empty = para.text("");

        assert_eq!(look_left_for_character(&para.dom, word), LeftCharacter::Character);
        assert_eq!(
            look_left_for_character(&para.dom, one),
            LeftCharacter::WhitespaceAfterCharacter
        );
        assert_eq!(look_left_for_character(&para.dom, two), LeftCharacter::Nothing);
        assert_eq!(
            look_left_for_character(&para.dom, after),
            LeftCharacter::WhitespaceAfterCharacter
        );
        assert_eq!(look_left_for_character(&para.dom, tab), LeftCharacter::Character);
        assert_eq!(look_left_for_character(&para.dom, empty), LeftCharacter::Nothing);
        assert_eq!(look_left_for_character(&para.dom, para.p), LeftCharacter::Nothing);
    }

    #[test]
    fn test_look_left_single_space_at_paragraph_start() {
        let mut para = Para::new();
        let one = para.text(" ");
        assert_eq!(look_left_for_character(&para.dom, one), LeftCharacter::Nothing);
        assert_eq!(LeftCharacter::WhitespaceAfterCharacter as u8, 2);
    }

    #[test]
    fn test_look_right_for_character_is_shallow() {
        let mut para = Para::new();
        let ws = para.text(" a");
        let word = para.text("a ");
        let empty = para.text("");
        let br = para.element("line-break");
        let span = para.element("span");
        para.dom.append_text(span, "x");

        assert!(!look_right_for_character(&para.dom, ws));
        assert!(look_right_for_character(&para.dom, word));
        assert!(!look_right_for_character(&para.dom, empty));
        assert!(look_right_for_character(&para.dom, br));
        assert!(!look_right_for_character(&para.dom, span));
        assert!(!look_right_for_character(&para.dom, None));
    }

    #[test]
    fn test_scan_for_any_character_ignores_run_edges() {
        let mut para = Para::new();
        let left = para.text("  a  ");
        let middle = para.text(" \t ");
        let right = para.text("\nb");

        assert!(scan_left_for_any_character(&para.dom, middle));
        assert!(scan_right_for_any_character(&para.dom, middle));
        assert!(scan_left_for_any_character(&para.dom, left));
        assert!(scan_right_for_any_character(&para.dom, right));
    }

    #[test]
    fn test_scan_for_any_character_whitespace_only() {
        let mut para = Para::new();
        let first = para.text("  ");
        let span = para.element("span");
        para.dom.append_text(span, "\t");
        let last = para.text("");

        assert!(!scan_left_for_any_character(&para.dom, last));
        assert!(!scan_right_for_any_character(&para.dom, first));
        assert!(!scan_left_for_any_character(&para.dom, None));
        assert!(!scan_right_for_any_character(&para.dom, None));
    }

    #[test]
    fn test_scan_for_any_character_descends_start_node() {
        let mut para = Para::new();
        let span = para.element("span");
        para.dom.append_text(span, "x");
        para.dom.append_element(span, QName::text("tab"), vec![]);

        assert!(scan_left_for_any_character(&para.dom, span));
        assert!(scan_right_for_any_character(&para.dom, span));
        assert!(scan_right_for_any_character(&para.dom, para.p));
    }

    #[test]
    fn test_scans_stop_at_paragraph_boundary() {
        let mut dom = OdfDom::new();
        let p1 = dom.append_element(dom.document(), QName::text("p"), vec![]);
        dom.append_text(p1, "visible");
        dom.append_element(p1, QName::text("tab"), vec![]);
        let p2 = dom.append_element(dom.document(), QName::text("p"), vec![]);
        let start = dom.append_text(p2, "");

        assert!(!scan_left_for_non_whitespace(&dom, start));
        assert!(!scan_left_for_any_character(&dom, start));
        assert_eq!(look_left_for_character(&dom, start), LeftCharacter::Nothing);
    }
}
