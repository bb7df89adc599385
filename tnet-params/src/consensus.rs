//! Consensus parameters for TNET

use crate::deployments::{Deployment, DeploymentPos, DeploymentTable};
use serde::{Deserialize, Serialize};
use tnet_primitives::Hash256;

/// Seconds in the two-week retarget timespan shared by every network.
pub const TWO_WEEKS: u32 = 14 * 24 * 60 * 60;

/// Target spacing before the one-minute hard fork.
pub const TEN_MINUTES: u32 = 10 * 60;

/// Target spacing after the one-minute hard fork.
pub const ONE_MINUTE: u32 = 60;

/// Consensus parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Hash of the genesis block
    pub hash_genesis_block: Hash256,
    /// Block subsidy halving interval under ten-minute blocks
    pub subsidy_halving_interval: u32,
    /// Block subsidy halving interval under one-minute blocks
    pub subsidy_halving_interval_one_minute: Option<u32>,
    /// Blocks between the last ten-minute halving and the first one-minute
    /// halving. A fixed historical value, mainnet only.
    pub subsidy_halving_interval_one_minute_adjustment: Option<u32>,
    /// Block height at which BIP34 becomes active
    pub bip34_height: u32,
    /// Block hash at the BIP34 activation height
    pub bip34_hash: Hash256,
    /// Block height at which BIP65 becomes active
    pub bip65_height: u32,
    /// Block height at which BIP66 becomes active
    pub bip66_height: u32,
    /// Height from which the replay-protection marker is no longer enforced
    pub anti_replay_op_return_sunset_height: u32,
    /// Replay-protection marker bytes
    pub anti_replay_op_return_commitment: Vec<u8>,
    /// Proof-of-work limit (easiest allowed target)
    pub pow_limit: Hash256,
    /// Retarget timespan, seconds
    pub pow_target_timespan: u32,
    /// Target spacing under ten-minute blocks, seconds
    pub pow_target_spacing: u32,
    /// Target spacing under one-minute blocks, seconds
    pub pow_target_spacing_one_minute: u32,
    /// Whether minimum-difficulty blocks are allowed after a long gap
    pub pow_allow_min_difficulty_blocks: bool,
    /// Whether retargeting is disabled
    pub pow_no_retargeting: bool,
    /// Signalling blocks needed within a window to lock in a deployment
    pub rule_change_activation_threshold: u32,
    /// Blocks per signalling window
    pub miner_confirmation_window: u32,
    /// Soft-fork activation windows
    pub deployments: DeploymentTable,
    /// The best chain should have at least this much work
    pub minimum_chain_work: Hash256,
    /// Signatures in ancestors of this block are assumed valid by default
    pub default_assume_valid: Hash256,
    /// UAHF (August 1st 2017) hard fork height
    pub uahf_height: u32,
    /// Activation time of the May 2018 hard fork
    pub core_hard_fork_activation_time: i64,
    /// From this time peers older than protocol version 80050 are rejected
    pub enforce_protocol_version_80050_time: Option<i64>,
    /// Hard fork to one-minute blocks and the 30-period retarget
    pub one_minute_block_height: u32,
    /// Hard fork to the Blake2b proof-of-work function
    pub pow_blake2_height: u32,
}

impl ConsensusParams {
    /// Blocks between retargets under ten-minute blocks
    pub fn difficulty_adjustment_interval(&self) -> u32 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Check if the UAHF rules apply at `height`
    pub fn is_uahf_enabled(&self, height: u32) -> bool {
        height >= self.uahf_height
    }

    /// Check if one-minute blocks apply at `height`
    pub fn is_one_minute_block_enabled(&self, height: u32) -> bool {
        height >= self.one_minute_block_height
    }

    /// Check if Blake2b proof of work applies at `height`
    pub fn is_blake2_pow_enabled(&self, height: u32) -> bool {
        height >= self.pow_blake2_height
    }

    /// Check if the replay-protection marker has stopped being enforced
    pub fn is_anti_replay_sunset(&self, height: u32) -> bool {
        height >= self.anti_replay_op_return_sunset_height
    }

    /// Target block spacing in force at `height`
    pub fn pow_target_spacing_at(&self, height: u32) -> u32 {
        if self.is_one_minute_block_enabled(height) {
            self.pow_target_spacing_one_minute
        } else {
            self.pow_target_spacing
        }
    }

    /// Halving interval in force at `height`.
    ///
    /// Falls back to the ten-minute interval on networks without a
    /// one-minute interval.
    pub fn subsidy_halving_interval_at(&self, height: u32) -> u32 {
        match self.subsidy_halving_interval_one_minute {
            Some(interval) if self.is_one_minute_block_enabled(height) => interval,
            _ => self.subsidy_halving_interval,
        }
    }

    /// Check if `time` is at or past the protocol-version 80050 cut-over
    pub fn is_protocol_version_80050_enforced(&self, time: i64) -> bool {
        self.enforce_protocol_version_80050_time
            .map_or(false, |cutover| time >= cutover)
    }

    /// Activation window of a deployment
    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        &self.deployments[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ConsensusParams {
        ConsensusParams {
            hash_genesis_block: Hash256::ZERO,
            subsidy_halving_interval: 210_000,
            subsidy_halving_interval_one_minute: Some(2_100_000),
            subsidy_halving_interval_one_minute_adjustment: None,
            bip34_height: 0,
            bip34_hash: Hash256::ZERO,
            bip65_height: 0,
            bip66_height: 0,
            anti_replay_op_return_sunset_height: 500,
            anti_replay_op_return_commitment: Vec::new(),
            pow_limit: Hash256::ZERO,
            pow_target_timespan: TWO_WEEKS,
            pow_target_spacing: TEN_MINUTES,
            pow_target_spacing_one_minute: ONE_MINUTE,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            rule_change_activation_threshold: 1916,
            miner_confirmation_window: 2016,
            deployments: DeploymentTable::new(
                Deployment::new(28, 0, 1),
                Deployment::new(0, 0, 1),
            ),
            minimum_chain_work: Hash256::ZERO,
            default_assume_valid: Hash256::ZERO,
            uahf_height: 100,
            core_hard_fork_activation_time: 0,
            enforce_protocol_version_80050_time: Some(1_000),
            one_minute_block_height: 200,
            pow_blake2_height: 300,
        }
    }

    #[test]
    fn test_difficulty_adjustment_interval() {
        assert_eq!(params().difficulty_adjustment_interval(), 2016);
    }

    #[test]
    fn test_hard_fork_heights() {
        let params = params();
        assert!(!params.is_uahf_enabled(99));
        assert!(params.is_uahf_enabled(100));
        assert!(!params.is_blake2_pow_enabled(299));
        assert!(params.is_blake2_pow_enabled(300));
        assert!(!params.is_anti_replay_sunset(499));
        assert!(params.is_anti_replay_sunset(500));
    }

    #[test]
    fn test_spacing_switch() {
        let params = params();
        assert_eq!(params.pow_target_spacing_at(199), TEN_MINUTES);
        assert_eq!(params.pow_target_spacing_at(200), ONE_MINUTE);
        assert_eq!(params.subsidy_halving_interval_at(199), 210_000);
        assert_eq!(params.subsidy_halving_interval_at(200), 2_100_000);
    }

    #[test]
    fn test_halving_interval_without_one_minute_value() {
        let mut params = params();
        params.subsidy_halving_interval_one_minute = None;
        assert_eq!(params.subsidy_halving_interval_at(10_000), 210_000);
    }

    #[test]
    fn test_protocol_version_cutover() {
        let mut params = params();
        assert!(!params.is_protocol_version_80050_enforced(999));
        assert!(params.is_protocol_version_80050_enforced(1_000));
        params.enforce_protocol_version_80050_time = None;
        assert!(!params.is_protocol_version_80050_enforced(i64::MAX));
    }
}
