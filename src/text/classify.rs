//! Node role predicates.
//!
//! Every predicate takes a possibly absent node; absence is never an error
//! and always classifies as `false`.

use crate::dom::{AttrKey, ElementKind, NodeId, OdfDom};

/// Value of `text:anchor-type` for objects laid out inline like a glyph.
const AS_CHAR: &str = "as-char";

fn kind_of(dom: &OdfDom, node: Option<NodeId>) -> Option<ElementKind> {
    node.and_then(|id| dom.element_kind(id))
}

/// `text:p` or `text:h`.
pub fn is_paragraph(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> bool {
    matches!(
        kind_of(dom, node.into()),
        Some(ElementKind::Paragraph | ElementKind::Heading)
    )
}

/// `text:list-item`.
pub fn is_list_item(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> bool {
    kind_of(dom, node.into()) == Some(ElementKind::ListItem)
}

/// Elements that traversal descends through: `text:span`, `text:p`, `text:h`.
pub fn is_grouping_element(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> bool {
    matches!(
        kind_of(dom, node.into()),
        Some(ElementKind::Span | ElementKind::Paragraph | ElementKind::Heading)
    )
}

/// Elements that count as exactly one non-whitespace character.
///
/// `text:tab`, `text:line-break`, and `draw:frame` anchored as a character.
/// `text:s` is not one: scans step over it like any other element, so an
/// explicit space never keeps neighbouring whitespace alive.
pub fn is_character_element(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> bool {
    let Some(id) = node.into() else {
        return false;
    };
    match dom.element_kind(id) {
        Some(ElementKind::Tab | ElementKind::LineBreak) => true,
        Some(ElementKind::Frame) => dom.attr(id, &AttrKey::AnchorType) == Some(AS_CHAR),
        _ => false,
    }
}

/// Space, tab, carriage return or line feed. No other Unicode whitespace.
pub fn is_odf_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Non-empty and made only of ODF whitespace.
pub fn is_odf_whitespace(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_odf_whitespace_char)
}

/// Nearest paragraph or heading that is `node` or one of its ancestors.
pub fn paragraph_element(dom: &OdfDom, node: impl Into<Option<NodeId>>) -> Option<NodeId> {
    let mut current = node.into();
    while let Some(id) = current {
        if is_paragraph(dom, id) {
            return Some(id);
        }
        current = dom.parent(id);
    }
    None
}

/// First child of `node` that is not a whitespace-only text run.
///
/// Whitespace here is any Unicode whitespace, as in pretty-printed markup
/// between block elements.
pub fn first_non_whitespace_child(dom: &OdfDom, node: NodeId) -> Option<NodeId> {
    dom.children(node).find(|&child| {
        dom.text_content(child)
            .is_none_or(|text| !text.trim().is_empty())
    })
}
