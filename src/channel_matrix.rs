//! Channel matrix synthesis
//!
//! Turns the ray-cluster parameters of a link into a complex channel
//! coefficient tensor. For every cluster *n* and every pair of a transmit
//! element *a* and a receive element *b*, the coefficient combines
//!
//! - the linear path gain `10^(pathLoss/20)`,
//! - the delay-induced phase `-2*pi * delay * frequency`,
//! - the configured per-cluster phase shift,
//! - the geometric phase offsets of the two elements toward the departure
//!   and arrival directions, and
//! - the co-polarized field-pattern gains of the two arrays,
//!
//! into `H[b][a][n] = p * gainA * gainB * exp(j * totalPhase)`.
//!
//! Every call recomputes the full tensor; the returned [`ChannelMatrix`] is
//! immutable and fully owned by the caller.
//!
//! # Example
//!
//! ```rust
//! use raychan::antenna::CustomArray;
//! use raychan::channel_matrix::ChannelSynthesizer;
//! use raychan::mobility::ConstantPositionMobility;
//!
//! let mut synth = ChannelSynthesizer::default();
//! synth.params_mut().set_frequency(0.0).unwrap();
//! synth.params_mut().set_delay(vec![0.0]);
//! synth.params_mut().set_aod_azimuth(vec![0.0]);
//! synth.params_mut().set_aod_elevation(vec![90.0]).unwrap();
//! synth.params_mut().set_aoa_azimuth(vec![0.0]);
//! synth.params_mut().set_aoa_elevation(vec![90.0]).unwrap();
//! synth.params_mut().set_phase_shift(vec![0.0]);
//! synth.params_mut().set_path_loss(vec![0.0]);
//!
//! let tx = ConstantPositionMobility::at_origin(0);
//! let rx = ConstantPositionMobility::at_origin(1);
//! let arr = CustomArray::single_element();
//! let matrix = synth.channel(&tx, &rx, &arr, &arr).unwrap();
//! assert_eq!(matrix.num_clusters(), 1);
//! assert!((matrix.coefficient(0, 0, 0).re - 1.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::antenna::AntennaArray;
use crate::geometry::Angles;
use crate::mobility::MobilityModel;
use crate::ray_params::RayClusterParams;
use crate::types::{ChannelResult, Complex, LinkId};

/// The four per-cluster angle sequences of a synthesized channel, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleBundle {
    pub aoa_azimuth_deg: Vec<f64>,
    pub aoa_elevation_deg: Vec<f64>,
    pub aod_azimuth_deg: Vec<f64>,
    pub aod_elevation_deg: Vec<f64>,
}

impl AngleBundle {
    /// The four rows in the fixed order
    /// {arrival azimuth, arrival elevation, departure azimuth, departure
    /// elevation}.
    pub fn rows(&self) -> [&[f64]; 4] {
        [
            &self.aoa_azimuth_deg,
            &self.aoa_elevation_deg,
            &self.aod_azimuth_deg,
            &self.aod_elevation_deg,
        ]
    }
}

/// An immutable synthesized channel: the coefficient tensor plus its
/// metadata.
///
/// Indexing is `[rx element][tx element][cluster]`. The struct is created
/// fresh on every synthesis call and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ChannelMatrix {
    coefficients: Vec<Vec<Vec<Complex>>>,
    delays_ns: Vec<f64>,
    angles: AngleBundle,
    generated_at: Duration,
    link: LinkId,
}

impl ChannelMatrix {
    /// Number of receive antenna elements (outer dimension).
    pub fn num_rx_elements(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of transmit antenna elements (middle dimension).
    pub fn num_tx_elements(&self) -> usize {
        self.coefficients.first().map_or(0, |row| row.len())
    }

    /// Number of clusters (inner dimension).
    pub fn num_clusters(&self) -> usize {
        self.delays_ns.len()
    }

    /// Coefficient for `(rx element, tx element, cluster)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn coefficient(&self, rx: usize, tx: usize, cluster: usize) -> Complex {
        self.coefficients[rx][tx][cluster]
    }

    /// The full tensor, indexed `[rx][tx][cluster]`.
    pub fn coefficients(&self) -> &[Vec<Vec<Complex>>] {
        &self.coefficients
    }

    /// Per-cluster delays in nanoseconds.
    pub fn delays_ns(&self) -> &[f64] {
        &self.delays_ns
    }

    /// The four per-cluster angle sequences.
    pub fn angles(&self) -> &AngleBundle {
        &self.angles
    }

    /// Simulation time at which this channel was generated.
    pub fn generated_at(&self) -> Duration {
        self.generated_at
    }

    /// The unordered endpoint pair this channel was synthesized for.
    pub fn link(&self) -> LinkId {
        self.link
    }
}

/// Synthesizes [`ChannelMatrix`] values from a [`RayClusterParams`] store.
///
/// The synthesizer owns its parameter store: configure through
/// [`params_mut`](Self::params_mut), then call [`channel`](Self::channel).
/// Synthesis borrows `&self`, so the store cannot change mid-computation.
#[derive(Debug, Clone, Default)]
pub struct ChannelSynthesizer {
    params: RayClusterParams,
    timestamp: Duration,
}

impl ChannelSynthesizer {
    pub fn new(params: RayClusterParams) -> Self {
        Self {
            params,
            timestamp: Duration::ZERO,
        }
    }

    /// Read access to the parameter store.
    pub fn params(&self) -> &RayClusterParams {
        &self.params
    }

    /// Mutable access to the parameter store for configuration.
    pub fn params_mut(&mut self) -> &mut RayClusterParams {
        &mut self.params
    }

    /// Set the simulation time stamped onto subsequent results. Defaults to
    /// zero, the single-shot reference point.
    pub fn set_timestamp(&mut self, timestamp: Duration) {
        self.timestamp = timestamp;
    }

    /// Synthesize the channel between endpoint `a` (tx side) and endpoint
    /// `b` (rx side).
    ///
    /// Fails with [`ChannelError::LengthMismatch`] before any coefficient is
    /// computed if the seven ray vectors disagree in length. An empty
    /// parameter set is valid and yields a tensor with zero-length cluster
    /// axes.
    ///
    /// [`ChannelError::LengthMismatch`]: crate::types::ChannelError::LengthMismatch
    pub fn channel(
        &self,
        a_mobility: &dyn MobilityModel,
        b_mobility: &dyn MobilityModel,
        a_antenna: &dyn AntennaArray,
        b_antenna: &dyn AntennaArray,
    ) -> ChannelResult<ChannelMatrix> {
        let num_clusters = self.params.validate()?;
        let num_tx = a_antenna.num_elements();
        let num_rx = b_antenna.num_elements();

        debug!(
            num_rx,
            num_tx,
            num_clusters,
            link = %LinkId::new(a_mobility.node_id(), b_mobility.node_id()),
            "synthesizing channel matrix"
        );

        let mut coefficients =
            vec![vec![vec![Complex::new(0.0, 0.0); num_clusters]; num_tx]; num_rx];

        for n in 0..num_clusters {
            let cluster = self.cluster_terms(n);
            for tx in 0..num_tx {
                let tx_phase = cluster.aod.phase_at(a_antenna.element_position(tx));
                for rx in 0..num_rx {
                    coefficients[rx][tx][n] = cluster_coefficient(
                        &cluster,
                        tx_phase,
                        a_antenna,
                        b_antenna,
                        b_antenna.element_position(rx),
                    );
                }
            }
        }

        Ok(self.package(coefficients, a_mobility, b_mobility))
    }

    /// Per-cluster quantities that do not depend on the element pair.
    pub(crate) fn cluster_terms(&self, n: usize) -> ClusterTerms {
        let aod = Angles::from_degrees(
            self.params.aod_azimuth()[n],
            self.params.aod_elevation()[n],
        );
        let aoa = Angles::from_degrees(
            self.params.aoa_azimuth()[n],
            self.params.aoa_elevation()[n],
        );
        ClusterTerms {
            aod,
            aoa,
            path_gain: 10f64.powf(self.params.path_loss()[n] / 20.0),
            delay_phase: -2.0 * PI * self.params.delay()[n] * self.params.frequency(),
            phase_shift: self.params.phase_shift()[n],
        }
    }

    /// Assemble the result object around a finished tensor.
    pub(crate) fn package(
        &self,
        coefficients: Vec<Vec<Vec<Complex>>>,
        a_mobility: &dyn MobilityModel,
        b_mobility: &dyn MobilityModel,
    ) -> ChannelMatrix {
        let delays_ns = self.params.delay().iter().map(|d| d * 1e9).collect();
        let angles = AngleBundle {
            aoa_azimuth_deg: self.params.aoa_azimuth().to_vec(),
            aoa_elevation_deg: self.params.aoa_elevation().to_vec(),
            aod_azimuth_deg: self.params.aod_azimuth().to_vec(),
            aod_elevation_deg: self.params.aod_elevation().to_vec(),
        };
        ChannelMatrix {
            coefficients,
            delays_ns,
            angles,
            generated_at: self.timestamp,
            link: LinkId::new(a_mobility.node_id(), b_mobility.node_id()),
        }
    }
}

/// Cluster-level terms shared by every element pair of one cluster.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClusterTerms {
    pub(crate) aod: Angles,
    pub(crate) aoa: Angles,
    pub(crate) path_gain: f64,
    pub(crate) delay_phase: f64,
    pub(crate) phase_shift: f64,
}

/// One tensor entry: combine the cluster terms with the element-pair phases
/// and the co-polarized field-pattern gains.
pub(crate) fn cluster_coefficient(
    cluster: &ClusterTerms,
    tx_phase: f64,
    a_antenna: &dyn AntennaArray,
    b_antenna: &dyn AntennaArray,
    rx_element: crate::geometry::Position,
) -> Complex {
    let rx_phase = cluster.aoa.phase_at(rx_element);
    let total_phase = cluster.delay_phase + cluster.phase_shift + tx_phase + rx_phase;

    // Only the vertical (co-polarized) component is used
    let a_gain = a_antenna.element_field_pattern(cluster.aod).1;
    let b_gain = b_antenna.element_field_pattern(cluster.aoa).1;

    (cluster.path_gain * a_gain * b_gain) * Complex::from_polar(1.0, total_phase)
}
