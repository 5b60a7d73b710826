//! Endpoint mobility seam
//!
//! The channel synthesizer needs very little from the positioning subsystem:
//! an endpoint identity for tagging the result, and a position. The
//! `MobilityModel` trait keeps that boundary explicit so the crate can be
//! driven by any external mobility source.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// An endpoint as seen by the channel synthesizer.
pub trait MobilityModel {
    /// Current position of the endpoint in meters.
    fn position(&self) -> Position;

    /// Identifier of the node that owns this endpoint.
    fn node_id(&self) -> u32;
}

/// A fixed endpoint: a node id pinned at a constant position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantPositionMobility {
    pub node_id: u32,
    pub position: Position,
}

impl ConstantPositionMobility {
    pub fn new(node_id: u32, position: Position) -> Self {
        Self { node_id, position }
    }

    /// A node sitting at the coordinate origin.
    pub fn at_origin(node_id: u32) -> Self {
        Self::new(node_id, Position::default())
    }
}

impl MobilityModel for ConstantPositionMobility {
    fn position(&self) -> Position {
        self.position
    }

    fn node_id(&self) -> u32 {
        self.node_id
    }
}
