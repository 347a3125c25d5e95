//! Node classification and conversion
//!
//! Converts one sibling list of source nodes, recursing depth first into
//! containers. Per node, in order:
//!
//! 1. invisible nodes are dropped with their subtree
//! 2. rotated nodes get the origin of their rotated bounding box
//! 3. vector-like shapes become vector leaves
//! 4. lines become thin rectangles
//! 5. containers collapse, export as an image, unwrap, or recurse and
//!    regroup their children

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::scene::{AxisAlign, SourceKind, SourceNode, StrokeAlign};

use super::config::NormalizeConfig;
use super::error::NormalizeError;
use super::regroup::{regroup, Regrouped};
use super::transform::rotation_compensated_bounds;
use super::types::{BoundingBox, FrameContent, NodeContent, NodeId, NormalizedNode, ParentRef};

/// Convert a sibling list, in paint order, whose container is `parent`.
///
/// Surviving nodes keep their relative order.
pub fn convert(
    siblings: &[SourceNode],
    parent: Option<&ParentRef>,
    config: &NormalizeConfig,
) -> Result<Vec<NormalizedNode>, NormalizeError> {
    // Rectangles count as graphics only when nothing else shares the level
    let rectangles_as_assets = siblings.iter().all(|n| n.kind.is_asset_like());

    let mut converted = Vec::with_capacity(siblings.len());
    for node in siblings {
        if let Some(normalized) = convert_node(node, parent, rectangles_as_assets, config)? {
            converted.push(normalized);
        }
    }
    Ok(converted)
}

fn convert_node(
    node: &SourceNode,
    parent: Option<&ParentRef>,
    rectangles_as_assets: bool,
    config: &NormalizeConfig,
) -> Result<Option<NormalizedNode>, NormalizeError> {
    if !node.is_visible() {
        debug!(id = display_id(node), kind = %node.kind, "dropping invisible node");
        return Ok(None);
    }

    let bounds = rotation_compensated_bounds(&node.geometry);

    let normalized = match node.kind {
        SourceKind::Vector | SourceKind::Ellipse | SourceKind::Star | SourceKind::Polygon => {
            leaf(node, bounds, parent, vector(false))
        }
        SourceKind::Rectangle if rectangles_as_assets => leaf(node, bounds, parent, vector(false)),
        SourceKind::Rectangle => leaf(node, bounds, parent, NodeContent::Rectangle),
        SourceKind::Line => line_to_rectangle(node, bounds, parent),
        SourceKind::Text => leaf(
            node,
            bounds,
            parent,
            NodeContent::Text {
                characters: node.characters.clone(),
            },
        ),
        SourceKind::Group | SourceKind::Frame | SourceKind::Instance | SourceKind::Component => {
            convert_container(node, bounds, parent, config)?
        }
        SourceKind::Unknown => {
            warn!(id = display_id(node), "unknown node kind; keeping it as an opaque graphic");
            leaf(node, bounds, parent, vector(false))
        }
    };
    Ok(Some(normalized))
}

fn vector(export_as_image: bool) -> NodeContent {
    NodeContent::Vector { export_as_image }
}

fn display_id(node: &SourceNode) -> &str {
    node.id.as_deref().unwrap_or("<anon>")
}

/// Build a childless node carrying every non-layout attribute of `node`
fn leaf(
    node: &SourceNode,
    bounds: BoundingBox,
    parent: Option<&ParentRef>,
    content: NodeContent,
) -> NormalizedNode {
    NormalizedNode {
        id: node.id.clone().map(NodeId),
        name: node.name.clone(),
        parent: parent.cloned(),
        visible: node.visible,
        bounds,
        rotation: node.geometry.rotation,
        paint: node.paint.clone(),
        corners: node.corners,
        content,
        extra: passthrough_attributes(node),
    }
}

/// Output keys the normalizer writes itself. A stale copy in the source must
/// not be re-emitted next to them.
const MODEL_KEYS: [&str; 2] = ["parent", "exportAsImage"];

fn passthrough_attributes(node: &SourceNode) -> Map<String, Value> {
    node.extra
        .iter()
        .filter(|(key, _)| !MODEL_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// A line has no height; draw it as a 1-unit rectangle with the stroke
/// centered on it.
fn line_to_rectangle(
    node: &SourceNode,
    bounds: BoundingBox,
    parent: Option<&ParentRef>,
) -> NormalizedNode {
    let mut rect = leaf(node, bounds, parent, NodeContent::Rectangle);
    rect.bounds.height = 1.0;
    rect.paint.stroke_weight = node.paint.stroke_weight.map(|w| (w - 1.0).max(0.0));
    rect.paint.stroke_align = Some(StrokeAlign::Center);
    rect
}

fn convert_container(
    node: &SourceNode,
    bounds: BoundingBox,
    parent: Option<&ParentRef>,
    config: &NormalizeConfig,
) -> Result<NormalizedNode, NormalizeError> {
    if node.children.is_empty() {
        debug!(id = display_id(node), kind = %node.kind, "collapsing empty container into rectangle");
        return Ok(leaf(node, bounds, parent, NodeContent::Rectangle));
    }

    if config.export_vector_only_containers && node.children.iter().all(|c| c.kind.is_asset_like()) {
        debug!(
            id = display_id(node),
            children = node.children.len(),
            "exporting shape-only container as image"
        );
        return Ok(leaf(node, bounds, parent, vector(true)));
    }

    let is_group = node.kind == SourceKind::Group;
    let shell = if is_group {
        NodeContent::Group {
            children: Vec::new(),
        }
    } else {
        NodeContent::Frame(FrameContent {
            layout: node.layout.clone(),
            children: Vec::new(),
        })
    };
    let mut container = leaf(node, bounds, parent, shell);

    let self_ref = container.as_parent();
    let mut children = convert(&node.children, Some(&self_ref), config)?;

    if children.is_empty() {
        debug!(id = display_id(node), "every child hidden; collapsing container into rectangle");
        container.content = NodeContent::Rectangle;
        return Ok(container);
    }

    if is_group && children.len() == 1 && config.unwrap_single_child_groups {
        if let Some(only) = children.pop() {
            debug!(
                group = display_id(node),
                child = only.id_str().unwrap_or("<anon>"),
                "unwrapping single-child group"
            );
            return Ok(only.reparented(parent.cloned()));
        }
    }

    // space-between with one child renders inconsistently across layout engines
    if let NodeContent::Frame(frame) = &mut container.content {
        if children.len() == 1 && frame.layout.primary_axis_align_items == Some(AxisAlign::SpaceBetween) {
            frame.layout.primary_axis_align_items = Some(AxisAlign::Center);
        }
    }

    if !config.regroup_backgrounds {
        return Ok(container.with_children(children));
    }

    Ok(match regroup(&container, children)? {
        Regrouped::Children(children) => container.with_children(children),
        Regrouped::Collapsed(only) => only,
    })
}
