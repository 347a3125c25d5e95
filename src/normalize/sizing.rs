//! Size and corner accessors for the layout stage

use crate::scene::{Corners, LayoutMode};

use super::tree::NormalizedTree;
use super::types::NormalizedNode;

/// One axis of a node's size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Fixed(f64),
    /// Stretch to the space the parent flow gives it
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSize {
    pub width: Dimension,
    pub height: Dimension,
}

/// Sizing of `node` as placed in `tree`.
///
/// Only nodes held by a frame and carrying their own flow direction stretch:
/// horizontal flow fills the width, vertical flow fills the height.
pub fn node_size(tree: &NormalizedTree, node: &NormalizedNode) -> NodeSize {
    let fixed = NodeSize {
        width: Dimension::Fixed(node.bounds.width),
        height: Dimension::Fixed(node.bounds.height),
    };

    let in_layout = tree
        .parent_of(node)
        .and_then(NormalizedNode::layout)
        .is_some_and(|layout| layout.layout_mode.is_some());
    if !in_layout {
        return fixed;
    }

    match node.layout().and_then(|layout| layout.layout_mode) {
        Some(LayoutMode::Horizontal) => NodeSize {
            width: Dimension::Fill,
            ..fixed
        },
        Some(LayoutMode::Vertical) => NodeSize {
            height: Dimension::Fill,
            ..fixed
        },
        Some(LayoutMode::None) | None => fixed,
    }
}

/// Corner rounding of a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    All(f64),
    Each {
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    },
}

/// Collapse the corner attributes into one radius where possible
pub fn common_radius(corners: &Corners) -> Radius {
    if let Some(radius) = corners.corner_radius.filter(|r| *r != 0.0) {
        return Radius::All(radius);
    }

    let Some(top_left) = corners.top_left_radius else {
        return Radius::All(0.0);
    };

    let others = [
        corners.top_right_radius,
        corners.bottom_right_radius,
        corners.bottom_left_radius,
    ];
    if others.iter().all(|r| *r == Some(top_left)) {
        return Radius::All(top_left);
    }

    Radius::Each {
        top_left,
        top_right: corners.top_right_radius.unwrap_or(0.0),
        bottom_right: corners.bottom_right_radius.unwrap_or(0.0),
        bottom_left: corners.bottom_left_radius.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::types::{BoundingBox, FrameContent, NodeContent, NodeId};
    use crate::scene::AutoLayout;

    fn frame(id: &str, mode: Option<LayoutMode>) -> NormalizedNode {
        NormalizedNode::new(
            Some(NodeId::new(id)),
            BoundingBox::new(0.0, 0.0, 200.0, 100.0),
            NodeContent::Frame(FrameContent {
                layout: AutoLayout {
                    layout_mode: mode,
                    ..AutoLayout::default()
                },
                children: Vec::new(),
            }),
        )
    }

    fn tree_with(child: NormalizedNode) -> NormalizedTree {
        let outer = frame("outer", Some(LayoutMode::Vertical));
        let child = child.reparented(Some(outer.as_parent()));
        NormalizedTree::new(vec![outer.with_children(vec![child])])
    }

    #[test]
    fn test_horizontal_child_fills_width() {
        let tree = tree_with(frame("row", Some(LayoutMode::Horizontal)));
        let row = tree.find("row").unwrap();
        assert_eq!(
            node_size(&tree, row),
            NodeSize {
                width: Dimension::Fill,
                height: Dimension::Fixed(100.0),
            }
        );
    }

    #[test]
    fn test_vertical_child_fills_height() {
        let tree = tree_with(frame("col", Some(LayoutMode::Vertical)));
        let col = tree.find("col").unwrap();
        assert_eq!(node_size(&tree, col).height, Dimension::Fill);
        assert_eq!(node_size(&tree, col).width, Dimension::Fixed(200.0));
    }

    #[test]
    fn test_fixed_outside_layout() {
        let tree = NormalizedTree::new(vec![frame("root", Some(LayoutMode::Horizontal))]);
        let root = tree.find("root").unwrap();
        assert_eq!(node_size(&tree, root).width, Dimension::Fixed(200.0));

        let leaf = NormalizedNode::new(
            Some(NodeId::new("leaf")),
            BoundingBox::new(0.0, 0.0, 5.0, 6.0),
            NodeContent::Rectangle,
        );
        let tree = tree_with(leaf);
        let leaf = tree.find("leaf").unwrap();
        assert_eq!(node_size(&tree, leaf).width, Dimension::Fixed(5.0));
        assert_eq!(node_size(&tree, leaf).height, Dimension::Fixed(6.0));
    }

    #[test]
    fn test_corner_radius_wins() {
        let corners = Corners {
            corner_radius: Some(8.0),
            top_left_radius: Some(2.0),
            ..Corners::default()
        };
        assert_eq!(common_radius(&corners), Radius::All(8.0));
    }

    #[test]
    fn test_equal_corners_collapse() {
        let corners = Corners {
            corner_radius: Some(0.0),
            top_left_radius: Some(4.0),
            top_right_radius: Some(4.0),
            bottom_right_radius: Some(4.0),
            bottom_left_radius: Some(4.0),
        };
        assert_eq!(common_radius(&corners), Radius::All(4.0));
    }

    #[test]
    fn test_mixed_corners() {
        let corners = Corners {
            corner_radius: None,
            top_left_radius: Some(4.0),
            top_right_radius: Some(0.0),
            bottom_right_radius: Some(4.0),
            bottom_left_radius: Some(2.0),
        };
        assert_eq!(
            common_radius(&corners),
            Radius::Each {
                top_left: 4.0,
                top_right: 0.0,
                bottom_right: 4.0,
                bottom_left: 2.0,
            }
        );
    }

    #[test]
    fn test_no_corners() {
        assert_eq!(common_radius(&Corners::default()), Radius::All(0.0));
    }
}
