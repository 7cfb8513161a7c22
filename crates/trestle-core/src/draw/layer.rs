//! Z-order layers for diagram rendering.

/// Defines the rendering layers of a diagram, bottom to top.
///
/// The `Ord` derive uses declaration order, so the first variant is painted
/// first (bottom), and the last variant is painted last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background fill
    Background,
    /// Edge segments and arrowheads
    Edge,
    /// Node rectangles, borders and labels
    Node,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Edge => "edge",
            Self::Node => "node",
        }
    }
}
