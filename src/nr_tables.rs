//! NR MCS/CQI constant tables
//!
//! Keyed registry of the 3GPP NR link-adaptation tables (TS 38.214): per-MCS
//! effective code rate, modulation order, and spectral efficiency, plus the
//! per-CQI spectral efficiency. Table 1 tops out at 64-QAM, Table 2 extends
//! to 256-QAM.
//!
//! The data is process-wide, read-only `'static` state selected by
//! [`McsTableVariant`] through [`nr_table`] — one keyed lookup instead of a
//! class hierarchy per table.
//!
//! # Example
//!
//! ```rust
//! use raychan::nr_tables::{nr_table, McsTableVariant};
//!
//! let t1 = nr_table(McsTableVariant::Table1);
//! assert_eq!(t1.modulation_order(10), Some(4)); // first 16-QAM entry
//! assert_eq!(t1.cqi_for_spectral_efficiency(2.5), 9);
//! ```

use serde::{Deserialize, Serialize};

/// Which TS 38.214 MCS/CQI table pair to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum McsTableVariant {
    /// Tables 5.1.3.1-1 / 5.2.2.1-2 (up to 64-QAM).
    Table1,
    /// Tables 5.1.3.1-2 / 5.2.2.1-3 (up to 256-QAM).
    Table2,
}

/// One coherent set of NR link-adaptation tables.
///
/// The three MCS-indexed slices share one length (the number of MCS
/// indices); the CQI slice has 16 entries with index 0 meaning
/// "out of range".
#[derive(Debug)]
pub struct NrTable {
    /// Effective code rate per MCS index (rate over 1024, as a fraction).
    pub mcs_ecr: &'static [f64],
    /// Modulation order Qm (bits per symbol) per MCS index.
    pub mcs_modulation_order: &'static [u8],
    /// Spectral efficiency (bit/s/Hz) per MCS index.
    pub spectral_efficiency_for_mcs: &'static [f64],
    /// Spectral efficiency (bit/s/Hz) per CQI index, 16 entries.
    pub spectral_efficiency_for_cqi: &'static [f64],
}

impl NrTable {
    /// Highest valid MCS index.
    pub fn max_mcs(&self) -> u8 {
        (self.mcs_ecr.len() - 1) as u8
    }

    /// Modulation order for an MCS index, if valid.
    pub fn modulation_order(&self, mcs: u8) -> Option<u8> {
        self.mcs_modulation_order.get(mcs as usize).copied()
    }

    /// Effective code rate for an MCS index, if valid.
    pub fn ecr(&self, mcs: u8) -> Option<f64> {
        self.mcs_ecr.get(mcs as usize).copied()
    }

    /// Spectral efficiency for an MCS index, if valid.
    pub fn spectral_efficiency(&self, mcs: u8) -> Option<f64> {
        self.spectral_efficiency_for_mcs.get(mcs as usize).copied()
    }

    /// Highest CQI index whose spectral efficiency does not exceed
    /// `achieved`. Returns 0 when even CQI 1 is out of reach.
    pub fn cqi_for_spectral_efficiency(&self, achieved: f64) -> u8 {
        let mut cqi = 0;
        for (index, &eff) in self.spectral_efficiency_for_cqi.iter().enumerate() {
            if eff <= achieved {
                cqi = index as u8;
            }
        }
        cqi
    }
}

/// Look up the table set for a variant.
pub fn nr_table(variant: McsTableVariant) -> &'static NrTable {
    match variant {
        McsTableVariant::Table1 => &TABLE1,
        McsTableVariant::Table2 => &TABLE2,
    }
}

// TS 38.214 Table 5.1.3.1-1 (MCS index table 1 for PDSCH)

static TABLE1_ECR: [f64; 29] = [
    120.0 / 1024.0,
    157.0 / 1024.0,
    193.0 / 1024.0,
    251.0 / 1024.0,
    308.0 / 1024.0,
    379.0 / 1024.0,
    449.0 / 1024.0,
    526.0 / 1024.0,
    602.0 / 1024.0,
    679.0 / 1024.0,
    340.0 / 1024.0,
    378.0 / 1024.0,
    434.0 / 1024.0,
    490.0 / 1024.0,
    553.0 / 1024.0,
    616.0 / 1024.0,
    658.0 / 1024.0,
    438.0 / 1024.0,
    466.0 / 1024.0,
    517.0 / 1024.0,
    567.0 / 1024.0,
    616.0 / 1024.0,
    666.0 / 1024.0,
    719.0 / 1024.0,
    772.0 / 1024.0,
    822.0 / 1024.0,
    873.0 / 1024.0,
    910.0 / 1024.0,
    948.0 / 1024.0,
];

static TABLE1_M: [u8; 29] = [
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, //
    4, 4, 4, 4, 4, 4, 4, //
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
];

static TABLE1_SE_MCS: [f64; 29] = [
    0.2344, 0.3066, 0.3770, 0.4902, 0.6016, 0.7402, 0.8770, 1.0273, 1.1758, 1.3262, //
    1.3281, 1.4766, 1.6953, 1.9141, 2.1602, 2.4063, 2.5703, //
    2.5664, 2.7305, 3.0293, 3.3223, 3.6094, 3.9023, 4.2129, 4.5234, 4.8164, 5.1152, 5.3320,
    5.5547,
];

// TS 38.214 Table 5.2.2.1-2 (CQI table 1); index 0 = out of range
static TABLE1_SE_CQI: [f64; 16] = [
    0.0, 0.1523, 0.2344, 0.3770, 0.6016, 0.8770, 1.1758, 1.4766, 1.9141, 2.4063, 2.7305,
    3.3223, 3.9023, 4.5234, 5.1152, 5.5547,
];

// TS 38.214 Table 5.1.3.1-2 (MCS index table 2 for PDSCH)

static TABLE2_ECR: [f64; 28] = [
    120.0 / 1024.0,
    193.0 / 1024.0,
    308.0 / 1024.0,
    449.0 / 1024.0,
    602.0 / 1024.0,
    378.0 / 1024.0,
    434.0 / 1024.0,
    490.0 / 1024.0,
    553.0 / 1024.0,
    616.0 / 1024.0,
    658.0 / 1024.0,
    466.0 / 1024.0,
    517.0 / 1024.0,
    567.0 / 1024.0,
    616.0 / 1024.0,
    666.0 / 1024.0,
    719.0 / 1024.0,
    772.0 / 1024.0,
    822.0 / 1024.0,
    873.0 / 1024.0,
    682.5 / 1024.0,
    711.0 / 1024.0,
    754.0 / 1024.0,
    797.0 / 1024.0,
    841.0 / 1024.0,
    885.0 / 1024.0,
    916.5 / 1024.0,
    948.0 / 1024.0,
];

static TABLE2_M: [u8; 28] = [
    2, 2, 2, 2, 2, //
    4, 4, 4, 4, 4, 4, //
    6, 6, 6, 6, 6, 6, 6, 6, 6, //
    8, 8, 8, 8, 8, 8, 8, 8,
];

static TABLE2_SE_MCS: [f64; 28] = [
    0.2344, 0.3770, 0.6016, 0.8770, 1.1758, //
    1.4766, 1.6953, 1.9141, 2.1602, 2.4063, 2.5703, //
    2.7305, 3.0293, 3.3223, 3.6094, 3.9023, 4.2129, 4.5234, 4.8164, 5.1152, //
    5.3320, 5.5547, 5.8906, 6.2266, 6.5703, 6.9141, 7.1602, 7.4063,
];

// TS 38.214 Table 5.2.2.1-3 (CQI table 2); index 0 = out of range
static TABLE2_SE_CQI: [f64; 16] = [
    0.0, 0.1523, 0.3770, 0.8770, 1.4766, 1.9141, 2.4063, 2.7305, 3.3223, 3.9023, 4.5234,
    5.1152, 5.5547, 6.2266, 6.9141, 7.4063,
];

static TABLE1: NrTable = NrTable {
    mcs_ecr: &TABLE1_ECR,
    mcs_modulation_order: &TABLE1_M,
    spectral_efficiency_for_mcs: &TABLE1_SE_MCS,
    spectral_efficiency_for_cqi: &TABLE1_SE_CQI,
};

static TABLE2: NrTable = NrTable {
    mcs_ecr: &TABLE2_ECR,
    mcs_modulation_order: &TABLE2_M,
    spectral_efficiency_for_mcs: &TABLE2_SE_MCS,
    spectral_efficiency_for_cqi: &TABLE2_SE_CQI,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        let t1 = nr_table(McsTableVariant::Table1);
        assert_eq!(t1.mcs_ecr.len(), 29);
        assert_eq!(t1.mcs_modulation_order.len(), 29);
        assert_eq!(t1.spectral_efficiency_for_mcs.len(), 29);
        assert_eq!(t1.spectral_efficiency_for_cqi.len(), 16);
        assert_eq!(t1.max_mcs(), 28);

        let t2 = nr_table(McsTableVariant::Table2);
        assert_eq!(t2.mcs_ecr.len(), 28);
        assert_eq!(t2.max_mcs(), 27);
    }

    #[test]
    fn test_modulation_order_bands() {
        let t1 = nr_table(McsTableVariant::Table1);
        assert_eq!(t1.modulation_order(0), Some(2));
        assert_eq!(t1.modulation_order(9), Some(2));
        assert_eq!(t1.modulation_order(10), Some(4));
        assert_eq!(t1.modulation_order(17), Some(6));
        assert_eq!(t1.modulation_order(28), Some(6));
        assert_eq!(t1.modulation_order(29), None);

        let t2 = nr_table(McsTableVariant::Table2);
        assert_eq!(t2.modulation_order(20), Some(8));
        assert_eq!(t2.modulation_order(27), Some(8));
    }

    #[test]
    fn test_spectral_efficiency_consistent_with_ecr() {
        // SE = Qm * ECR, up to the table's 4-decimal rounding
        for variant in [McsTableVariant::Table1, McsTableVariant::Table2] {
            let t = nr_table(variant);
            for mcs in 0..=t.max_mcs() {
                let qm = t.modulation_order(mcs).unwrap() as f64;
                let ecr = t.ecr(mcs).unwrap();
                let se = t.spectral_efficiency(mcs).unwrap();
                assert!(
                    (se - qm * ecr).abs() < 5e-4,
                    "{variant:?} MCS {mcs}: SE {se} vs Qm*ECR {}",
                    qm * ecr
                );
            }
        }
    }

    #[test]
    fn test_se_monotonic_within_modulation() {
        let t1 = nr_table(McsTableVariant::Table1);
        for mcs in 1..=t1.max_mcs() {
            let prev_qm = t1.modulation_order(mcs - 1).unwrap();
            let qm = t1.modulation_order(mcs).unwrap();
            if prev_qm == qm {
                assert!(
                    t1.spectral_efficiency(mcs).unwrap()
                        > t1.spectral_efficiency(mcs - 1).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_cqi_lookup() {
        let t1 = nr_table(McsTableVariant::Table1);
        assert_eq!(t1.cqi_for_spectral_efficiency(0.0), 0);
        assert_eq!(t1.cqi_for_spectral_efficiency(0.1523), 1);
        assert_eq!(t1.cqi_for_spectral_efficiency(2.5), 9);
        assert_eq!(t1.cqi_for_spectral_efficiency(100.0), 15);
    }

    #[test]
    fn test_cqi_table_monotonic() {
        for variant in [McsTableVariant::Table1, McsTableVariant::Table2] {
            let t = nr_table(variant);
            for i in 1..t.spectral_efficiency_for_cqi.len() {
                assert!(
                    t.spectral_efficiency_for_cqi[i] > t.spectral_efficiency_for_cqi[i - 1]
                );
            }
        }
    }
}
