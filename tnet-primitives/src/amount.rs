//! Monetary amounts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base units per coin.
pub const COIN: i64 = 100_000_000;

/// An amount in base units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Amount from base units.
    pub const fn from_sat(sat: i64) -> Self {
        Self(sat)
    }

    /// Amount from whole coins.
    pub const fn from_coins(coins: i64) -> Self {
        Self(coins * COIN)
    }

    /// Base units.
    pub const fn to_sat(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let coin = COIN as u64;
        write!(f, "{}{}.{:08}", sign, abs / coin, abs % coin)
    }
}
