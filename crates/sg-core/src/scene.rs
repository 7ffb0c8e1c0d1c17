//! Scenegraph abstraction
//!
//! The grid never owns the scene. It holds node handles and receives the
//! scene as `&mut impl SceneGraph` on every call that touches it, so the
//! host editor decides what a node actually is.
//!
//! [`SceneTree`] is a small arena-backed implementation used by the
//! renderer integration and by tests.

use std::collections::HashSet;
use std::fmt;

use glam::Vec3;

/// Scenegraph operations the grid relies on
pub trait SceneGraph {
    /// Cheap, copyable node handle
    type Node: Copy + Eq + fmt::Debug;

    /// Non-rendered holding area for detached nodes.
    fn hidden(&self) -> Self::Node;

    /// Create an empty node under `parent`.
    fn attach_new_node(
        &mut self,
        parent: Self::Node,
        name: &str,
    ) -> Result<Self::Node, SceneError>;

    /// Load the model called `model` and attach it under `parent`.
    fn load_model(&mut self, parent: Self::Node, model: &str) -> Result<Self::Node, SceneError>;

    /// Move `node` (and its subtree) under `parent`.
    fn reparent(&mut self, node: Self::Node, parent: Self::Node) -> Result<(), SceneError>;

    fn set_name(&mut self, node: Self::Node, name: &str) -> Result<(), SceneError>;

    fn set_position(&mut self, node: Self::Node, position: Vec3) -> Result<(), SceneError>;

    fn set_scale(&mut self, node: Self::Node, scale: f32) -> Result<(), SceneError>;

    fn set_color(&mut self, node: Self::Node, color: [f32; 4]) -> Result<(), SceneError>;
}

/// Scene-related errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("Model not found: {0}")]
    ModelNotFound(String),
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("Reparenting would create a cycle")]
    WouldCreateCycle,
}

/// Index of a node in a [`SceneTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node stored in a [`SceneTree`]
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    /// Model the node was loaded from, if any
    pub model: Option<String>,
    pub position: Vec3,
    pub scale: f32,
    pub color: [f32; 4],
}

impl SceneNode {
    fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            parent,
            model: None,
            position: Vec3::ZERO,
            scale: 1.0,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// In-memory scenegraph with a rendered root and a hidden root
#[derive(Debug, Clone)]
pub struct SceneTree {
    nodes: Vec<SceneNode>,
    render: NodeId,
    hidden: NodeId,
    models: HashSet<String>,
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneTree {
    /// Create a tree containing only the `render` and `hidden` roots.
    pub fn new() -> Self {
        Self {
            nodes: vec![SceneNode::new("render", None), SceneNode::new("hidden", None)],
            render: NodeId(0),
            hidden: NodeId(1),
            models: HashSet::new(),
        }
    }

    /// Create a tree that can load the models the grid needs.
    pub fn with_grid_models() -> Self {
        let mut tree = Self::new();
        tree.register_model(crate::constants::GRID_BACK_MODEL);
        tree.register_model(crate::constants::SNAP_MARKER_MODEL);
        tree
    }

    /// Make `model` loadable.
    pub fn register_model(&mut self, model: impl Into<String>) {
        self.models.insert(model.into());
    }

    /// Root whose subtree is rendered
    pub fn render(&self) -> NodeId {
        self.render
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find the first node called `name`.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// Direct children of `id`
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent == Some(id))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Whether `node` has `ancestor` somewhere above it (or is it).
    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id.0).and_then(|n| n.parent);
        }
        false
    }

    /// Whether `node` is under the rendered root.
    pub fn is_visible(&self, node: NodeId) -> bool {
        self.is_descendant_of(node, self.render)
    }

    /// Position of `node` in world space (parent positions and scales applied).
    pub fn world_position(&self, node: NodeId) -> Option<Vec3> {
        let mut current = self.node(node)?;
        let mut position = current.position;
        while let Some(parent) = current.parent {
            current = self.node(parent)?;
            position = current.position + position * current.scale;
        }
        Some(position)
    }

    fn push(&mut self, node: SceneNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn check(&self, id: NodeId) -> Result<(), SceneError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(SceneError::NodeNotFound(id.to_string()))
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes.get_mut(id.0).ok_or_else(|| SceneError::NodeNotFound(id.to_string()))
    }
}

impl SceneGraph for SceneTree {
    type Node = NodeId;

    fn hidden(&self) -> NodeId {
        self.hidden
    }

    fn attach_new_node(&mut self, parent: NodeId, name: &str) -> Result<NodeId, SceneError> {
        self.check(parent)?;
        Ok(self.push(SceneNode::new(name, Some(parent))))
    }

    fn load_model(&mut self, parent: NodeId, model: &str) -> Result<NodeId, SceneError> {
        self.check(parent)?;
        if !self.models.contains(model) {
            return Err(SceneError::ModelNotFound(model.to_string()));
        }
        let name = model.rsplit('/').next().unwrap_or(model);
        let mut node = SceneNode::new(name, Some(parent));
        node.model = Some(model.to_string());
        Ok(self.push(node))
    }

    fn reparent(&mut self, node: NodeId, parent: NodeId) -> Result<(), SceneError> {
        self.check(node)?;
        self.check(parent)?;
        if self.is_descendant_of(parent, node) {
            return Err(SceneError::WouldCreateCycle);
        }
        self.node_mut(node)?.parent = Some(parent);
        Ok(())
    }

    fn set_name(&mut self, node: NodeId, name: &str) -> Result<(), SceneError> {
        self.node_mut(node)?.name = name.to_string();
        Ok(())
    }

    fn set_position(&mut self, node: NodeId, position: Vec3) -> Result<(), SceneError> {
        self.node_mut(node)?.position = position;
        Ok(())
    }

    fn set_scale(&mut self, node: NodeId, scale: f32) -> Result<(), SceneError> {
        self.node_mut(node)?.scale = scale;
        Ok(())
    }

    fn set_color(&mut self, node: NodeId, color: [f32; 4]) -> Result<(), SceneError> {
        self.node_mut(node)?.color = color;
        Ok(())
    }
}
