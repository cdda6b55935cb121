//! Text runs covered by a range.

use std::cmp::Ordering;

use crate::dom::{BoundaryComparison, FilterResult, NodeId, OdfDom, Range, TreeWalker};

/// Text runs intersecting `range`, in document order.
///
/// With `include_partial`, any run whose contents overlap the range's
/// interior is returned; touching a boundary is not enough. Without it, only
/// runs lying entirely inside the range (boundaries inclusive) are returned.
/// Elements are descended into when they overlap the range and pruned
/// otherwise.
pub fn get_text_nodes(dom: &OdfDom, range: &Range, include_partial: bool) -> Vec<NodeId> {
    let common = range.common_ancestor_container(dom);
    let root = if dom.is_text(common) {
        dom.parent(common).unwrap_or(common)
    } else {
        common
    };

    let filter = |node: NodeId| {
        let contents = Range::select_node_contents(dom, node);
        let is_text = dom.is_text(node);

        if !include_partial && is_text {
            let starts_inside = range.compare_boundary_points(
                dom,
                BoundaryComparison::StartToStart,
                &contents,
            ) != Ordering::Greater;
            let ends_inside =
                range.compare_boundary_points(dom, BoundaryComparison::EndToEnd, &contents)
                    != Ordering::Less;
            if starts_inside && ends_inside {
                return FilterResult::Accept;
            }
        } else {
            let starts_before_end =
                range.compare_boundary_points(dom, BoundaryComparison::EndToStart, &contents)
                    == Ordering::Less;
            let ends_after_start =
                range.compare_boundary_points(dom, BoundaryComparison::StartToEnd, &contents)
                    == Ordering::Greater;
            if starts_before_end && ends_after_start {
                return if is_text {
                    FilterResult::Accept
                } else {
                    FilterResult::Skip
                };
            }
        }
        FilterResult::Reject
    };

    let nodes: Vec<_> = TreeWalker::new(dom, root, filter).collect();
    tracing::trace!(count = nodes.len(), include_partial, "collected text runs");
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{BoundaryPoint, QName};

    /// `<p>abc<span>def</span>ghi</p>`
    fn sample() -> (OdfDom, NodeId, [NodeId; 3], NodeId) {
        let mut dom = OdfDom::new();
        let p = dom.append_element(dom.document(), QName::text("p"), vec![]);
        let abc = dom.append_text(p, "abc");
        let span = dom.append_element(p, QName::text("span"), vec![]);
        let def = dom.append_text(span, "def");
        let ghi = dom.append_text(p, "ghi");
        (dom, p, [abc, def, ghi], span)
    }

    #[test]
    fn test_partial_runs_included_by_default() {
        let (dom, _, [abc, def, ghi], _) = sample();
        let range = Range::between(abc, 1, ghi, 2);
        assert_eq!(get_text_nodes(&dom, &range, true), vec![abc, def, ghi]);
    }

    #[test]
    fn test_partial_runs_excluded() {
        let (dom, _, [abc, def, ghi], _) = sample();
        let range = Range::between(abc, 1, ghi, 2);
        assert_eq!(get_text_nodes(&dom, &range, false), vec![def]);

        let range = Range::between(abc, 0, ghi, 3);
        assert_eq!(get_text_nodes(&dom, &range, false), vec![abc, def, ghi]);
    }

    #[test]
    fn test_touching_boundary_is_not_overlap() {
        let (dom, _, [abc, def, _], _) = sample();
        // Ends exactly where "def" begins
        let range = Range::between(abc, 1, def, 0);
        assert_eq!(get_text_nodes(&dom, &range, true), vec![abc]);
    }

    #[test]
    fn test_range_inside_single_run() {
        let (dom, _, [_, def, _], _) = sample();
        let range = Range::between(def, 1, def, 2);
        assert_eq!(get_text_nodes(&dom, &range, true), vec![def]);
        assert!(get_text_nodes(&dom, &range, false).is_empty());
    }

    #[test]
    fn test_element_boundaries() {
        let (dom, p, [abc, def, ghi], span) = sample();
        let range = Range::new(BoundaryPoint::new(p, 1), BoundaryPoint::new(p, 3));
        assert_eq!(get_text_nodes(&dom, &range, true), vec![def, ghi]);
        assert_eq!(get_text_nodes(&dom, &range, false), vec![def, ghi]);

        let range = Range::select_node_contents(&dom, span);
        assert_eq!(get_text_nodes(&dom, &range, false), vec![def]);
        assert!(!get_text_nodes(&dom, &range, true).contains(&abc));
    }

    #[test]
    fn test_collapsed_range() {
        let (dom, _, [abc, ..], _) = sample();
        let inside = Range::collapsed(BoundaryPoint::new(abc, 1));
        assert_eq!(get_text_nodes(&dom, &inside, true), vec![abc]);
        assert!(get_text_nodes(&dom, &inside, false).is_empty());

        let at_end = Range::collapsed(BoundaryPoint::new(abc, 3));
        assert!(get_text_nodes(&dom, &at_end, true).is_empty());
    }
}
