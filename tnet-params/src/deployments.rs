//! Soft-fork activation windows
//!
//! Each deployment signals on one version bit between `start_time` and
//! `timeout` (median-time-past, Unix seconds). Counting the signals is the
//! consumer's job; this table only holds the windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Known deployments, used as indices into a [`DeploymentTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentPos {
    /// Dummy deployment exercised by tests
    TestDummy,
    /// BIP68, BIP112 and BIP113 (relative lock times)
    Csv,
}

impl DeploymentPos {
    /// Number of deployments.
    pub const COUNT: usize = 2;

    /// Every deployment, in table order.
    pub const ALL: [DeploymentPos; Self::COUNT] = [DeploymentPos::TestDummy, DeploymentPos::Csv];

    /// Deployment name as shown in RPC output
    pub const fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Csv => "csv",
        }
    }
}

/// One activation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Version bit, 0..=31
    pub bit: u8,
    /// Start of signalling, or one of the sentinels
    pub start_time: i64,
    /// End of signalling
    pub timeout: i64,
}

impl Deployment {
    /// `start_time` sentinel: the rule is active from genesis.
    pub const ALWAYS_ACTIVE: i64 = -1;

    /// `start_time` sentinel: the rule never activates.
    pub const NEVER_ACTIVE: i64 = -2;

    /// Highest usable version bit.
    pub const MAX_BIT: u8 = 31;

    /// Create a deployment window
    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Self {
            bit,
            start_time,
            timeout,
        }
    }

    /// Check if the window uses a sentinel instead of a real start time
    pub const fn is_sentinel(&self) -> bool {
        self.start_time == Self::ALWAYS_ACTIVE || self.start_time == Self::NEVER_ACTIVE
    }

    /// Bit in range, and start before timeout unless a sentinel is used.
    pub const fn is_well_formed(&self) -> bool {
        self.bit <= Self::MAX_BIT && (self.is_sentinel() || self.start_time < self.timeout)
    }

    /// Version-field mask for this deployment's bit, zero when out of range
    pub fn mask(&self) -> u32 {
        1u32.checked_shl(u32::from(self.bit)).unwrap_or(0)
    }

    /// Start time as a UTC date, when it is a real timestamp
    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        if self.is_sentinel() {
            return None;
        }
        DateTime::from_timestamp(self.start_time, 0)
    }

    /// Timeout as a UTC date, when representable
    pub fn timeout_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timeout, 0)
    }
}

/// Fixed-size table of activation windows, indexed by [`DeploymentPos`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTable([Deployment; DeploymentPos::COUNT]);

impl DeploymentTable {
    /// Build the table
    pub const fn new(test_dummy: Deployment, csv: Deployment) -> Self {
        Self([test_dummy, csv])
    }

    /// Iterate over `(position, window)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (DeploymentPos, &Deployment)> {
        DeploymentPos::ALL.into_iter().zip(self.0.iter())
    }

    pub(crate) fn set_window(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        let deployment = &mut self.0[pos as usize];
        deployment.start_time = start_time;
        deployment.timeout = timeout;
    }

    /// Check if no two deployments share a version bit.
    ///
    /// Consumers may only run deployments concurrently when this holds; the
    /// table itself does not enforce it.
    pub fn has_unique_bits(&self) -> bool {
        let mut seen = 0u32;
        for (_, deployment) in self.iter() {
            if seen & deployment.mask() != 0 {
                return false;
            }
            seen |= deployment.mask();
        }
        true
    }
}

impl Index<DeploymentPos> for DeploymentTable {
    type Output = Deployment;

    fn index(&self, pos: DeploymentPos) -> &Deployment {
        &self.0[pos as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DeploymentTable {
        DeploymentTable::new(
            Deployment::new(28, 1199145601, 1230767999),
            Deployment::new(0, 1462060800, 1493596800),
        )
    }

    #[test]
    fn test_index_by_position() {
        let table = table();
        assert_eq!(table[DeploymentPos::TestDummy].bit, 28);
        assert_eq!(table[DeploymentPos::Csv].start_time, 1462060800);
    }

    #[test]
    fn test_well_formed() {
        assert!(Deployment::new(0, 10, 20).is_well_formed());
        assert!(!Deployment::new(0, 20, 10).is_well_formed());
        assert!(!Deployment::new(32, 10, 20).is_well_formed());
        assert!(Deployment::new(1, Deployment::ALWAYS_ACTIVE, 0).is_well_formed());
        assert!(Deployment::new(1, Deployment::NEVER_ACTIVE, 0).is_well_formed());
    }

    #[test]
    fn test_unique_bits() {
        assert!(table().has_unique_bits());
        let clash = DeploymentTable::new(Deployment::new(3, 0, 1), Deployment::new(3, 0, 1));
        assert!(!clash.has_unique_bits());
    }

    #[test]
    fn test_datetimes() {
        let csv = table()[DeploymentPos::Csv];
        assert_eq!(
            csv.start_datetime().unwrap().to_rfc3339(),
            "2016-05-01T00:00:00+00:00"
        );
        assert!(Deployment::new(0, Deployment::ALWAYS_ACTIVE, 0)
            .start_datetime()
            .is_none());
    }

    #[test]
    fn test_set_window_keeps_bit() {
        let mut table = table();
        table.set_window(DeploymentPos::Csv, 5, 6);
        assert_eq!(table[DeploymentPos::Csv], Deployment::new(0, 5, 6));
        assert_eq!(table[DeploymentPos::TestDummy], Deployment::new(28, 1199145601, 1230767999));
    }

    #[test]
    fn test_iter_order() {
        let names: Vec<&str> = table().iter().map(|(pos, _)| pos.name()).collect();
        assert_eq!(names, vec!["testdummy", "csv"]);
    }
}
