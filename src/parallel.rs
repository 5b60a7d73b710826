//! Parallel channel synthesis
//!
//! Data-parallel variant of the tensor computation using Rayon, enabled
//! with the `parallel` feature flag.
//!
//! ```toml
//! [dependencies]
//! raychan = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! Every `(rx, tx, cluster)` coefficient is independent, so the work fans
//! out over the receive-element dimension with no synchronization beyond
//! the final join. The output is bit-identical to the sequential
//! [`channel`](crate::channel_matrix::ChannelSynthesizer::channel) call.
//! Worthwhile for large arrays; for a handful of elements the sequential
//! loop is usually faster.

use rayon::prelude::*;

use crate::antenna::AntennaArray;
use crate::channel_matrix::{cluster_coefficient, ChannelMatrix, ChannelSynthesizer, ClusterTerms};
use crate::mobility::MobilityModel;
use crate::types::{ChannelResult, Complex};

impl ChannelSynthesizer {
    /// Synthesize the channel between endpoint `a` (tx side) and endpoint
    /// `b` (rx side), parallelized over receive elements.
    ///
    /// Same contract as [`channel`](Self::channel): the length precondition
    /// is checked before any compute, and a failed call produces no output.
    pub fn channel_par<A, B>(
        &self,
        a_mobility: &dyn MobilityModel,
        b_mobility: &dyn MobilityModel,
        a_antenna: &A,
        b_antenna: &B,
    ) -> ChannelResult<ChannelMatrix>
    where
        A: AntennaArray + Sync,
        B: AntennaArray + Sync,
    {
        let num_clusters = self.params().validate()?;
        let num_tx = a_antenna.num_elements();
        let num_rx = b_antenna.num_elements();

        // Cluster terms and tx-side element phases are shared read-only
        // across workers.
        let clusters: Vec<ClusterTerms> =
            (0..num_clusters).map(|n| self.cluster_terms(n)).collect();
        let tx_phases: Vec<Vec<f64>> = clusters
            .iter()
            .map(|c| {
                (0..num_tx)
                    .map(|tx| c.aod.phase_at(a_antenna.element_position(tx)))
                    .collect()
            })
            .collect();

        let coefficients: Vec<Vec<Vec<Complex>>> = (0..num_rx)
            .into_par_iter()
            .map(|rx| {
                let rx_element = b_antenna.element_position(rx);
                (0..num_tx)
                    .map(|tx| {
                        clusters
                            .iter()
                            .enumerate()
                            .map(|(n, cluster)| {
                                cluster_coefficient(
                                    cluster,
                                    tx_phases[n][tx],
                                    a_antenna,
                                    b_antenna,
                                    rx_element,
                                )
                            })
                            .collect()
                    })
                    .collect()
            })
            .collect();

        Ok(self.package(coefficients, a_mobility, b_mobility))
    }
}
