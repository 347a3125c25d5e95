//! Containment regrouping
//!
//! Within one sibling list, a rectangle or vector whose box encloses later
//! siblings is turned into a frame hosting them. Sibling order is paint
//! order (back to front), so a node can only be hosted by something painted
//! before it, and the earliest enclosing background wins.
//!
//! The scan is O(n²) in the sibling count of one level.

use tracing::{debug, trace};

use crate::scene::AutoLayout;

use super::error::NormalizeError;
use super::types::{FrameContent, NodeContent, NodeKind, NormalizedNode, ParentRef};

/// Result of regrouping one container's children
#[derive(Debug, Clone, PartialEq)]
pub enum Regrouped {
    /// The container keeps these children
    Children(Vec<NormalizedNode>),
    /// Only one node remained: it replaces the container and is already
    /// reparented to the container's own parent
    Collapsed(NormalizedNode),
}

/// Regroup the children of `container`.
///
/// `container` is only read for its identity and its parent reference; its
/// own child list is ignored. Lists shorter than two are returned untouched.
pub fn regroup(
    container: &NormalizedNode,
    children: Vec<NormalizedNode>,
) -> Result<Regrouped, NormalizeError> {
    if children.len() < 2 {
        return Ok(Regrouped::Children(children));
    }

    if container.id.is_none() {
        return Err(NormalizeError::missing_id(&container.name, container.kind()));
    }
    if let Some(orphan) = children.iter().find(|c| c.id.is_none()) {
        return Err(NormalizeError::missing_id(&orphan.name, orphan.kind()));
    }

    let owners = claim_owners(&children);
    let mut hosted: Vec<Vec<NormalizedNode>> = children.iter().map(|_| Vec::new()).collect();
    let mut remaining: Vec<Option<NormalizedNode>> = Vec::with_capacity(children.len());
    for (child, owner) in children.into_iter().zip(&owners) {
        match owner {
            Some(owner) => {
                hosted[*owner].push(child);
                remaining.push(None);
            }
            None => remaining.push(Some(child)),
        }
    }

    let mut frames = 0;
    let mut regrouped = Vec::with_capacity(remaining.len());
    for (node, on_top) in remaining.into_iter().zip(hosted) {
        let Some(node) = node else { continue };
        if on_top.is_empty() {
            regrouped.push(node);
        } else {
            frames += 1;
            regrouped.push(host_frame(node, on_top));
        }
    }

    debug!(
        container = container.id_str().unwrap_or("<anon>"),
        frames,
        remaining = regrouped.len(),
        "regrouped siblings"
    );

    if regrouped.len() == 1 {
        if let Some(only) = regrouped.pop() {
            return Ok(Regrouped::Collapsed(only.reparented(container.parent.clone())));
        }
    }
    Ok(Regrouped::Children(regrouped))
}

/// For every sibling, the index of the background that claims it.
///
/// Candidates are visited in paint order and claim every later, unclaimed
/// sibling their box encloses. A claimed node never claims anything itself.
fn claim_owners(children: &[NormalizedNode]) -> Vec<Option<usize>> {
    let mut owners: Vec<Option<usize>> = vec![None; children.len()];

    for (i, background) in children.iter().enumerate() {
        if owners[i].is_some() || !background.is_background_candidate() {
            continue;
        }
        for j in (i + 1)..children.len() {
            if owners[j].is_none() && background.bounds.contains_box(&children[j].bounds) {
                trace!(
                    background = background.id_str().unwrap_or("<anon>"),
                    on_top = children[j].id_str().unwrap_or("<anon>"),
                    "claimed"
                );
                owners[j] = Some(i);
            }
        }
    }

    owners
}

/// Turn a background into a frame hosting the nodes painted on top of it.
///
/// The frame keeps the background's id, name, geometry and corner radii. Its
/// opacity is dropped so it does not fade the hosted nodes, and an invisible
/// background keeps only its box: no fills, strokes or effects.
fn host_frame(background: NormalizedNode, on_top: Vec<NormalizedNode>) -> NormalizedNode {
    let frame_ref = ParentRef::new(background.id.clone(), NodeKind::Frame);
    let origin = background.bounds;

    let children = on_top
        .into_iter()
        .map(|child| {
            child
                .translated(-origin.x, -origin.y)
                .reparented(Some(frame_ref.clone()))
        })
        .collect();

    let invisible = background.visible == Some(false);
    debug!(
        frame = background.id_str().unwrap_or("<anon>"),
        invisible, "synthesized frame around background"
    );

    let mut paint = background.paint;
    paint.opacity = None;
    if invisible {
        paint = paint.without_fill_props();
    }

    NormalizedNode {
        id: background.id,
        name: background.name,
        parent: background.parent,
        visible: None,
        bounds: background.bounds,
        rotation: background.rotation,
        paint,
        corners: background.corners,
        content: NodeContent::Frame(FrameContent {
            layout: AutoLayout::fixed_frame(),
            children,
        }),
        extra: background.extra,
    }
}
