//! Ray-cluster parameter store
//!
//! Holds the per-cluster propagation parameters of a link: angles of
//! departure and arrival, phase shifts, path losses, delays, and the scalar
//! carrier frequency. One entry per cluster (ray group), all sequences
//! indexed in parallel.
//!
//! Setters validate ranges where a range exists (non-negative frequency,
//! elevations in [0, 180] degrees) and reject the whole call on the first
//! bad value, leaving the previously stored sequence untouched. Cross-field
//! length consistency is deliberately not checked at set time, since the
//! sequences may be configured in any order; it is checked once by
//! [`RayClusterParams::validate`] when a channel is synthesized.
//!
//! # Example
//!
//! ```rust
//! use raychan::ray_params::RayClusterParams;
//!
//! let mut params = RayClusterParams::default();
//! params.set_frequency(28e9).unwrap();
//! params.set_delay(vec![0.0, 50e-9]);
//! params.set_aod_azimuth(vec![10.0, -30.0]);
//! params.set_aod_elevation(vec![90.0, 80.0]).unwrap();
//! params.set_aoa_azimuth(vec![190.0, 150.0]);
//! params.set_aoa_elevation(vec![90.0, 100.0]).unwrap();
//! params.set_phase_shift(vec![0.0, 1.2]);
//! params.set_path_loss(vec![-90.0, -96.5]);
//! assert_eq!(params.validate().unwrap(), 2);
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{ChannelError, ChannelResult};

/// Per-cluster ray parameters plus the carrier frequency of the link.
///
/// Angles are stored in degrees exactly as supplied; conversion to radians
/// happens during synthesis. Azimuths accept any real value (no wrap-around
/// normalization), elevations are polar angles constrained to [0, 180].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayClusterParams {
    frequency_hz: f64,
    aod_azimuth_deg: Vec<f64>,
    aod_elevation_deg: Vec<f64>,
    aoa_azimuth_deg: Vec<f64>,
    aoa_elevation_deg: Vec<f64>,
    phase_shift_rad: Vec<f64>,
    path_loss_db: Vec<f64>,
    delay_s: Vec<f64>,
}

impl Default for RayClusterParams {
    fn default() -> Self {
        Self {
            frequency_hz: 500.0e6,
            aod_azimuth_deg: Vec::new(),
            aod_elevation_deg: Vec::new(),
            aoa_azimuth_deg: Vec::new(),
            aoa_elevation_deg: Vec::new(),
            phase_shift_rad: Vec::new(),
            path_loss_db: Vec::new(),
            delay_s: Vec::new(),
        }
    }
}

fn check_elevations(values: &[f64]) -> ChannelResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if !(0.0..=180.0).contains(&value) {
            return Err(ChannelError::ElevationOutOfRange { value, index });
        }
    }
    Ok(())
}

impl RayClusterParams {
    /// Set the carrier frequency in Hz. Rejects negative values.
    pub fn set_frequency(&mut self, frequency_hz: f64) -> ChannelResult<()> {
        if frequency_hz < 0.0 {
            return Err(ChannelError::NegativeFrequency(frequency_hz));
        }
        self.frequency_hz = frequency_hz;
        Ok(())
    }

    /// Carrier frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency_hz
    }

    /// Set the per-cluster azimuth of departure in degrees.
    pub fn set_aod_azimuth(&mut self, values: Vec<f64>) {
        trace!(clusters = values.len(), "set AoD azimuth");
        self.aod_azimuth_deg = values;
    }

    /// Per-cluster azimuth of departure in degrees.
    pub fn aod_azimuth(&self) -> &[f64] {
        &self.aod_azimuth_deg
    }

    /// Set the per-cluster elevation of departure in degrees.
    ///
    /// Every value must lie in [0, 180]; on the first violation the call
    /// fails and the stored sequence is left unchanged.
    pub fn set_aod_elevation(&mut self, values: Vec<f64>) -> ChannelResult<()> {
        check_elevations(&values)?;
        trace!(clusters = values.len(), "set AoD elevation");
        self.aod_elevation_deg = values;
        Ok(())
    }

    /// Per-cluster elevation of departure in degrees.
    pub fn aod_elevation(&self) -> &[f64] {
        &self.aod_elevation_deg
    }

    /// Set the per-cluster azimuth of arrival in degrees.
    pub fn set_aoa_azimuth(&mut self, values: Vec<f64>) {
        trace!(clusters = values.len(), "set AoA azimuth");
        self.aoa_azimuth_deg = values;
    }

    /// Per-cluster azimuth of arrival in degrees.
    pub fn aoa_azimuth(&self) -> &[f64] {
        &self.aoa_azimuth_deg
    }

    /// Set the per-cluster elevation of arrival in degrees.
    ///
    /// Every value must lie in [0, 180]; on the first violation the call
    /// fails and the stored sequence is left unchanged.
    pub fn set_aoa_elevation(&mut self, values: Vec<f64>) -> ChannelResult<()> {
        check_elevations(&values)?;
        trace!(clusters = values.len(), "set AoA elevation");
        self.aoa_elevation_deg = values;
        Ok(())
    }

    /// Per-cluster elevation of arrival in degrees.
    pub fn aoa_elevation(&self) -> &[f64] {
        &self.aoa_elevation_deg
    }

    /// Set the per-cluster phase shift in radians.
    pub fn set_phase_shift(&mut self, values: Vec<f64>) {
        self.phase_shift_rad = values;
    }

    /// Per-cluster phase shift in radians.
    pub fn phase_shift(&self) -> &[f64] {
        &self.phase_shift_rad
    }

    /// Set the per-cluster path loss in dB.
    pub fn set_path_loss(&mut self, values: Vec<f64>) {
        self.path_loss_db = values;
    }

    /// Per-cluster path loss in dB.
    pub fn path_loss(&self) -> &[f64] {
        &self.path_loss_db
    }

    /// Set the per-cluster propagation delay in seconds.
    pub fn set_delay(&mut self, values: Vec<f64>) {
        self.delay_s = values;
    }

    /// Per-cluster propagation delay in seconds.
    pub fn delay(&self) -> &[f64] {
        &self.delay_s
    }

    /// Check that all seven ray vectors share one length and return it.
    ///
    /// The delay sequence sets the expected length.
    pub fn validate(&self) -> ChannelResult<usize> {
        let expected = self.delay_s.len();
        let fields: [(&'static str, usize); 6] = [
            ("aodAzimuth", self.aod_azimuth_deg.len()),
            ("aodElevation", self.aod_elevation_deg.len()),
            ("aoaAzimuth", self.aoa_azimuth_deg.len()),
            ("aoaElevation", self.aoa_elevation_deg.len()),
            ("phaseShift", self.phase_shift_rad.len()),
            ("pathLoss", self.path_loss_db.len()),
        ];
        for (field, actual) in fields {
            if actual != expected {
                return Err(ChannelError::LengthMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }
        Ok(expected)
    }
}
