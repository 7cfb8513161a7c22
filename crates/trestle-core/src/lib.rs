//! Trestle Core Types and Definitions
//!
//! This crate provides the foundational types for Trestle block diagrams.
//! It includes:
//!
//! - **Identifiers**: String-interned node identifiers ([`identifier::NodeId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes and bounds ([`geometry`] module)
//! - **Diagram**: The node/edge model and its validation ([`diagram`] module)
//! - **Draw**: Drawing-surface abstraction and visual definitions ([`draw`] module)

pub mod color;
pub mod diagram;
pub mod draw;
pub mod geometry;
pub mod identifier;
