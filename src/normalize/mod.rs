//! Scene-graph normalizer
//!
//! This module takes the raw source tree and produces a simplified,
//! layout-ready NormalizedTree: invisible nodes dropped, rotation folded into
//! the bounding box, shape-only containers exported as image leaves, trivial
//! groups unwrapped and siblings painted over a background re-parented into
//! a frame synthesized from that background.

pub mod config;
pub mod convert;
pub mod error;
pub mod regroup;
pub mod sizing;
pub mod transform;
pub mod tree;
pub mod types;

pub use config::NormalizeConfig;
pub use convert::convert;
pub use error::NormalizeError;
pub use regroup::{regroup, Regrouped};
pub use sizing::{common_radius, node_size, Dimension, NodeSize, Radius};
pub use tree::NormalizedTree;
pub use types::*;

use tracing::debug;

use crate::scene::SourceNode;

/// Normalize the top-level nodes of a document.
///
/// The top level itself is never regrouped; containment regrouping applies
/// to the children of every container below it.
pub fn normalize(
    roots: &[SourceNode],
    config: &NormalizeConfig,
) -> Result<NormalizedTree, NormalizeError> {
    let tree = NormalizedTree::new(convert(roots, None, config)?);
    debug!(roots = tree.roots.len(), nodes = tree.len(), "normalized tree");
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SourceKind;

    #[test]
    fn test_top_level_is_not_regrouped() {
        let roots = vec![
            SourceNode::new(SourceKind::Rectangle, "bg").sized(100.0, 100.0),
            SourceNode::new(SourceKind::Text, "t").at(10.0, 10.0).sized(20.0, 20.0),
        ];
        let tree = normalize(&roots, &NormalizeConfig::default()).unwrap();
        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.roots[0].kind(), NodeKind::Rectangle);
        assert!(tree.roots.iter().all(|n| n.parent.is_none()));
    }

    #[test]
    fn test_output_validates() {
        let card = SourceNode::new(SourceKind::Frame, "card")
            .sized(300.0, 200.0)
            .with_children(vec![
                SourceNode::new(SourceKind::Rectangle, "bg").sized(300.0, 200.0),
                SourceNode::new(SourceKind::Text, "title").at(20.0, 20.0).sized(100.0, 20.0),
                SourceNode::new(SourceKind::Text, "hidden").with_visible(false),
            ]);
        let tree = normalize(&[card], &NormalizeConfig::default()).unwrap();
        assert_eq!(tree.validate(), Ok(()));
        assert!(tree.find("hidden").is_none());
    }

    #[test]
    fn test_empty_document() {
        let tree = normalize(&[], &NormalizeConfig::default()).unwrap();
        assert!(tree.is_empty());
    }
}
