//! # Ray-Cluster Channel Synthesis Library
//!
//! This crate synthesizes complex MIMO channel coefficient tensors from
//! ray-level (cluster/sub-path) propagation parameters: angles of departure
//! and arrival, per-cluster delay, phase shift, and path loss.
//!
//! ## Overview
//!
//! Ray-based channel models describe a radio link as a handful of discrete
//! propagation paths (clusters). Each cluster contributes one complex gain
//! per (rx element, tx element) pair, built from
//!
//! - the cluster's path loss and delay,
//! - its departure/arrival geometry against the element layout of each
//!   antenna array, and
//! - the arrays' co-polarized field patterns.
//!
//! ## Signal Flow
//!
//! ```text
//! RayClusterParams ──> ChannelSynthesizer ──> ChannelMatrix
//!   (per-cluster           (tensor               (H[rx][tx][cluster],
//!    angles, delay,         computation)          delays, angles,
//!    loss, phase)                                 link identity)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use raychan::prelude::*;
//!
//! let mut synth = ChannelSynthesizer::default();
//! let params = synth.params_mut();
//! params.set_frequency(28e9).unwrap();
//! params.set_delay(vec![0.0, 45e-9]);
//! params.set_aod_azimuth(vec![10.0, -35.0]);
//! params.set_aod_elevation(vec![88.0, 95.0]).unwrap();
//! params.set_aoa_azimuth(vec![190.0, 145.0]);
//! params.set_aoa_elevation(vec![92.0, 85.0]).unwrap();
//! params.set_phase_shift(vec![0.0, 1.3]);
//! params.set_path_loss(vec![-88.0, -94.0]);
//!
//! let gnb = ConstantPositionMobility::at_origin(0);
//! let ue = ConstantPositionMobility::new(1, Position::new(25.0, 0.0, -10.0));
//! let gnb_array = UniformPlanarArray::new(4, 4, 0.5);
//! let ue_array = UniformLinearArray::new(2, 0.5);
//!
//! let matrix = synth.channel(&gnb, &ue, &gnb_array, &ue_array).unwrap();
//! assert_eq!(matrix.num_rx_elements(), 2);
//! assert_eq!(matrix.num_tx_elements(), 16);
//! assert_eq!(matrix.num_clusters(), 2);
//! ```

pub mod antenna;
pub mod channel_matrix;
pub mod geometry;
pub mod mobility;
pub mod nr_tables;
pub mod observe;
pub mod ray_params;
pub mod types;

// Parallel synthesis (requires `parallel` feature)
#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export main types
pub use antenna::{AntennaArray, CustomArray, UniformLinearArray, UniformPlanarArray};
pub use channel_matrix::{AngleBundle, ChannelMatrix, ChannelSynthesizer};
pub use geometry::{Angles, Position};
pub use mobility::{ConstantPositionMobility, MobilityModel};
pub use nr_tables::{nr_table, McsTableVariant, NrTable};
pub use ray_params::RayClusterParams;
pub use types::{ChannelError, ChannelResult, Complex, LinkId};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::antenna::{AntennaArray, CustomArray, UniformLinearArray, UniformPlanarArray};
    pub use crate::channel_matrix::{ChannelMatrix, ChannelSynthesizer};
    pub use crate::geometry::{Angles, Position};
    pub use crate::mobility::{ConstantPositionMobility, MobilityModel};
    pub use crate::ray_params::RayClusterParams;
    pub use crate::types::{ChannelError, ChannelResult, Complex, LinkId};
}
