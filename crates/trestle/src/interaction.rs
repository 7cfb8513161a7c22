//! Pointer-driven node dragging.
//!
//! [`DragController`] is a two-state machine:
//!
//! ```text
//!            press inside a node
//!   Idle ───────────────────────────▶ Dragging { node, offset }
//!    ▲                                    │  ▲
//!    │            release                 │  │ move: node.position = pointer - offset
//!    └────────────────────────────────────┘  └─┘
//! ```
//!
//! Hit-testing walks nodes in definition order and takes the first whose
//! rectangle (borders included) contains the press point. A press that
//! misses every node keeps the controller idle. A press while already
//! dragging is ignored. There is no cancel and no timeout.

use log::{debug, trace};

use trestle_core::{
    diagram::{Diagram, DiagramError},
    geometry::Point,
    identifier::NodeId,
};

/// Current drag state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// The node being dragged.
        node: NodeId,
        /// Press point minus the node's position at press time.
        offset: Point,
    },
}

impl DragState {
    /// Returns the dragged node, if any.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::Idle => None,
            Self::Dragging { node, .. } => Some(*node),
        }
    }
}

/// Turns pointer press/move/release into node position updates.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Handles a pointer press at `pointer`.
    ///
    /// Returns the node that started being dragged, or `None` if the press
    /// hit nothing (or a drag is already in progress).
    pub fn press(&mut self, diagram: &Diagram, pointer: Point) -> Option<NodeId> {
        if self.is_dragging() {
            trace!("Press ignored while dragging");
            return None;
        }

        let node = diagram.node_at(pointer)?;
        let offset = pointer.sub_point(node.position());
        self.state = DragState::Dragging {
            node: node.id(),
            offset,
        };
        debug!(node:% = node.id(), x = pointer.x(), y = pointer.y(); "Drag started");
        Some(node.id())
    }

    /// Handles a pointer move to `pointer`.
    ///
    /// While dragging, moves the captured node so that it keeps the press
    /// offset under the pointer and returns `Ok(true)`. When idle, nothing
    /// changes and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::UnknownNode`] if the captured node is not in
    /// `diagram`, which happens only when the controller is used with a
    /// different diagram than the one it was pressed on.
    pub fn move_to(&mut self, diagram: &mut Diagram, pointer: Point) -> Result<bool, DiagramError> {
        match self.state {
            DragState::Idle => Ok(false),
            DragState::Dragging { node, offset } => {
                diagram.set_node_position(node, pointer.sub_point(offset))?;
                Ok(true)
            }
        }
    }

    /// Handles a pointer release and returns the node that was being
    /// dragged, if any.
    pub fn release(&mut self) -> Option<NodeId> {
        let node = std::mem::take(&mut self.state).node();
        if let Some(node) = node {
            debug!(node:% = node; "Drag finished");
        }
        node
    }
}
