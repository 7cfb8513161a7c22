//! The built-in three-stage pipeline diagram.

use trestle_core::{
    diagram::{Diagram, DiagramBuilder, DiagramError},
    geometry::{Point, Size},
};

/// Builds `Input → Process → Output`: three 150×60 boxes on the line
/// y = 100, at x = 50, 300 and 550.
///
/// # Errors
///
/// Never fails in practice; the diagram goes through the same validation
/// as any other.
pub fn demo_diagram() -> Result<Diagram, DiagramError> {
    DiagramBuilder::new()
        .with_node_size(Size::new(150.0, 60.0))
        .add_node("node1", "Input", Point::new(50.0, 100.0))
        .add_node("node2", "Process", Point::new(300.0, 100.0))
        .add_node("node3", "Output", Point::new(550.0, 100.0))
        .add_edge("node1", "node2")
        .add_edge("node2", "node3")
        .build()
}
