//! The block-diagram model: labeled nodes joined by directed edges.
//!
//! A [`Diagram`] is produced by [`DiagramBuilder::build`], which validates the
//! whole definition up front:
//!
//! - node identifiers are unique,
//! - every edge endpoint names an existing node,
//! - the shared node size is positive and finite.
//!
//! Once built, a diagram always resolves its edges, so rendering never has
//! to deal with a missing endpoint. The only mutation is moving a node with
//! [`Diagram::set_node_position`].
//!
//! # Example
//!
//! ```
//! use trestle_core::{diagram::DiagramBuilder, geometry::{Point, Size}};
//!
//! let diagram = DiagramBuilder::new()
//!     .with_node_size(Size::new(150.0, 60.0))
//!     .add_node("a", "A", Point::new(0.0, 0.0))
//!     .add_node("b", "B", Point::new(200.0, 0.0))
//!     .add_edge("a", "b")
//!     .build()
//!     .expect("valid diagram");
//!
//! assert_eq!(diagram.nodes().count(), 2);
//! assert_eq!(diagram.edges().len(), 1);
//! ```

use indexmap::{IndexMap, map::Entry};
use log::{debug, trace};
use thiserror::Error;

use crate::{
    geometry::{Bounds, Point, Size},
    identifier::NodeId,
};

/// Node size used when a builder is not given one.
pub const DEFAULT_NODE_SIZE: Size = Size::new(150.0, 60.0);

/// Errors raised while building or editing a [`Diagram`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagramError {
    #[error("duplicate node identifier `{0}`")]
    DuplicateNode(NodeId),

    #[error("edge `{from}` -> `{to}` references unknown node `{missing}`")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    #[error("unknown node `{0}`")]
    UnknownNode(NodeId),

    #[error("node size must be positive and finite, got {width}x{height}")]
    InvalidNodeSize { width: f32, height: f32 },
}

/// A rectangular, labeled diagram element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    label: String,
    position: Point,
    size: Size,
}

impl Node {
    /// Returns the node identifier
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the top-left corner of the node
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the node size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the rectangle covered by the node.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, self.size)
    }

    /// Returns the center of the node rectangle.
    pub fn center(&self) -> Point {
        self.position.add_point(self.size.half_extent())
    }
}

/// A directed connection from `source` to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Returns the identifier of the node the edge starts from
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the identifier of the node the edge points to
    pub fn target(&self) -> NodeId {
        self.target
    }
}

/// A validated set of nodes and edges.
///
/// Nodes and edges keep their definition order, which is also their
/// rendering and hit-testing order.
#[derive(Debug, Clone)]
pub struct Diagram {
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
    node_size: Size,
}

impl Diagram {
    /// Iterates nodes in definition order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns the edges in definition order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns the size shared by every node.
    pub fn node_size(&self) -> Size {
        self.node_size
    }

    /// Resolves the source and target nodes of `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` does not belong to this diagram and names a node the
    /// diagram does not contain. Edges returned by [`Diagram::edges`] always
    /// resolve.
    pub fn edge_endpoints(&self, edge: &Edge) -> (&Node, &Node) {
        let source = self
            .nodes
            .get(&edge.source)
            .expect("edge source validated at construction");
        let target = self
            .nodes
            .get(&edge.target)
            .expect("edge target validated at construction");
        (source, target)
    }

    /// Moves the node `id` so that its top-left corner is at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownNode`] if no node has that identifier.
    pub fn set_node_position(&mut self, id: NodeId, position: Point) -> Result<(), DiagramError> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(DiagramError::UnknownNode(id))?;
        trace!(node:% = id, x = position.x(), y = position.y(); "Moving node");
        node.position = position;
        Ok(())
    }

    /// Returns the first node, in definition order, whose rectangle contains
    /// `point`. Rectangle borders count as inside.
    pub fn node_at(&self, point: Point) -> Option<&Node> {
        self.nodes().find(|node| node.bounds().contains(point))
    }
}

/// Builder that collects nodes and edges and validates them into a [`Diagram`].
#[derive(Debug, Clone)]
pub struct DiagramBuilder {
    node_size: Size,
    nodes: Vec<(NodeId, String, Point)>,
    edges: Vec<Edge>,
}

impl Default for DiagramBuilder {
    fn default() -> Self {
        Self {
            node_size: DEFAULT_NODE_SIZE,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl DiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size shared by every node.
    pub fn with_node_size(mut self, size: Size) -> Self {
        self.node_size = size;
        self
    }

    /// Adds a node whose top-left corner is at `position`.
    pub fn add_node(mut self, id: &str, label: impl Into<String>, position: Point) -> Self {
        self.nodes.push((NodeId::new(id), label.into(), position));
        self
    }

    /// Adds a directed edge between two node identifiers.
    pub fn add_edge(mut self, source: &str, target: &str) -> Self {
        self.edges
            .push(Edge::new(NodeId::new(source), NodeId::new(target)));
        self
    }

    /// Validates the collected definition and builds the diagram.
    ///
    /// # Errors
    ///
    /// - [`DiagramError::InvalidNodeSize`] for a zero, negative or non-finite size
    /// - [`DiagramError::DuplicateNode`] when two nodes share an identifier
    /// - [`DiagramError::DanglingEdge`] when an edge names a missing node
    pub fn build(self) -> Result<Diagram, DiagramError> {
        let size = self.node_size;
        let valid_extent = |v: f32| v.is_finite() && v > 0.0;
        if !valid_extent(size.width()) || !valid_extent(size.height()) {
            return Err(DiagramError::InvalidNodeSize {
                width: size.width(),
                height: size.height(),
            });
        }

        let mut nodes = IndexMap::with_capacity(self.nodes.len());
        for (id, label, position) in self.nodes {
            match nodes.entry(id) {
                Entry::Occupied(_) => return Err(DiagramError::DuplicateNode(id)),
                Entry::Vacant(slot) => {
                    slot.insert(Node {
                        id,
                        label,
                        position,
                        size,
                    });
                }
            }
        }

        for edge in &self.edges {
            for endpoint in [edge.source, edge.target] {
                if !nodes.contains_key(&endpoint) {
                    return Err(DiagramError::DanglingEdge {
                        from: edge.source,
                        to: edge.target,
                        missing: endpoint,
                    });
                }
            }
        }

        debug!(nodes = nodes.len(), edges = self.edges.len(); "Diagram built");

        Ok(Diagram {
            nodes,
            edges: self.edges,
            node_size: size,
        })
    }
}
