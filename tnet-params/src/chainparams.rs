//! Complete parameter sets for each TNET network
//!
//! Every set is built from literals and then checked: the genesis block is
//! rebuilt and must hash to the value hardcoded for that network. A set that
//! fails the check is never returned.

use crate::anti_replay::anti_replay_commitment;
use crate::checkpoints::CheckpointList;
use crate::consensus::{ConsensusParams, ONE_MINUTE, TEN_MINUTES, TWO_WEEKS};
use crate::deployments::{Deployment, DeploymentPos, DeploymentTable};
use crate::genesis::{create_default_genesis_block, verify_genesis};
use crate::network::{Base58Prefixes, Base58Type, DnsSeed, NetworkType, SeedSpec6};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tnet_primitives::{Amount, Block, Hash256};

/// Merkle root shared by every TNET genesis block.
pub const GENESIS_MERKLE_ROOT: &str =
    "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

/// Mainnet genesis block hash.
pub const MAINNET_GENESIS_HASH: &str =
    "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";

/// Testnet genesis block hash.
pub const TESTNET_GENESIS_HASH: &str =
    "0273ed223240099a339d351d46054156fb6f3855c5db1c00c0275c9b6f1d07de";

/// Regtest genesis block hash.
pub const REGTEST_GENESIS_HASH: &str =
    "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206";

/// Header literals a genesis block is rebuilt from.
#[derive(Debug, Clone, Copy)]
struct GenesisLiterals {
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
    hash: &'static str,
}

impl GenesisLiterals {
    fn build(&self, network: NetworkType) -> Result<(Block, Hash256)> {
        let block =
            create_default_genesis_block(self.time, self.nonce, self.bits, self.version, self.reward)?;
        let expected_hash = Hash256::from_hex(self.hash)?;
        let expected_merkle_root = Hash256::from_hex(GENESIS_MERKLE_ROOT)?;
        let hash = verify_genesis(network, &block, &expected_hash, &expected_merkle_root)?;
        Ok((block, hash))
    }
}

/// Transaction-count snapshot used to estimate sync progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainTxData {
    /// Unix time of the snapshot
    pub time: i64,
    /// Transactions between genesis and the snapshot
    pub tx_count: u64,
    /// Estimated transactions per second after the snapshot
    pub tx_rate: f64,
}

impl ChainTxData {
    /// Snapshot time as a UTC date
    pub fn snapshot_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    /// Extrapolated total transaction count at `time`
    pub fn estimated_tx_count_at(&self, time: i64) -> f64 {
        let elapsed = time.saturating_sub(self.time).max(0) as f64;
        self.tx_count as f64 + elapsed * self.tx_rate
    }
}

/// Everything that distinguishes one TNET network from another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainParams {
    /// Network identity
    pub network: NetworkType,
    /// Consensus rules
    pub consensus: ConsensusParams,
    /// Magic bytes of the legacy message envelope
    pub message_start: [u8; 4],
    /// Magic bytes of the newer message envelope
    pub cash_message_start: [u8; 4],
    /// Default P2P port
    pub default_port: u16,
    /// Blocks below this height are never pruned
    pub prune_after_height: u32,
    /// DNS seeds
    pub dns_seeds: Vec<DnsSeed>,
    /// Hardcoded fallback peers
    pub fixed_seeds: Vec<SeedSpec6>,
    /// Base58 version prefixes
    pub base58_prefixes: Base58Prefixes,
    /// Human-readable prefix of title addresses
    pub title_address_prefix: String,
    /// Mining waits for at least one connected peer
    pub mining_requires_peers: bool,
    /// Run expensive consistency checks by default
    pub default_consistency_checks: bool,
    /// Only relay and mine standard transactions
    pub require_standard: bool,
    /// Blocks are produced on request (generate RPC) rather than by mining
    pub mine_blocks_on_demand: bool,
    /// Pinned block hashes
    pub checkpoints: CheckpointList,
    /// Sync-progress snapshot
    pub chain_tx_data: ChainTxData,
    genesis: Block,
}

impl ChainParams {
    /// Get mainnet parameters
    pub fn mainnet() -> Result<Self> {
        let network = NetworkType::Main;
        let (genesis, genesis_hash) = GenesisLiterals {
            time: 1231006505,
            nonce: 2083236893,
            bits: 0x1d00ffff,
            version: 1,
            reward: Amount::from_coins(50),
            hash: MAINNET_GENESIS_HASH,
        }
        .build(network)?;

        let one_minute_block_height = 588_672;

        let consensus = ConsensusParams {
            hash_genesis_block: genesis_hash,
            subsidy_halving_interval: 210_000,
            subsidy_halving_interval_one_minute: Some(210_000 * 10),
            // (588672 - 210000 * 2) + (210000 * 3 - 588672) * 10
            subsidy_halving_interval_one_minute_adjustment: Some(581_952),
            bip34_height: 227_931,
            bip34_hash: Hash256::from_hex(
                "000000000000024b89b42a942fe0d9fea3bb44ab7bd1b19115dd6a759c0808b8",
            )?,
            // 000000000000000004c2b624ed5d7756c508d90fd0da2c7c679febfa6c4735f0
            bip65_height: 388_381,
            // 00000000000000000379eaa19dce8c9b722d46ae6a57c2f1a988119488b50931
            bip66_height: 363_725,
            anti_replay_op_return_sunset_height: 530_000,
            anti_replay_op_return_commitment: anti_replay_commitment(),
            pow_limit: Hash256::from_hex(
                "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_target_timespan: TWO_WEEKS,
            pow_target_spacing: TEN_MINUTES,
            pow_target_spacing_one_minute: ONE_MINUTE,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            // 95% of 2016
            rule_change_activation_threshold: 1916,
            miner_confirmation_window: 2016,
            deployments: DeploymentTable::new(
                // January 1, 2008 to December 31, 2008
                Deployment::new(28, 1199145601, 1230767999),
                // May 1st, 2016 to May 1st, 2017
                Deployment::new(0, 1462060800, 1493596800),
            ),
            minimum_chain_work: Hash256::from_hex(
                "0000000000000000000000000000000000000000007cb5f207557941bd9a6096",
            )?,
            // Block 631515
            default_assume_valid: Hash256::from_hex(
                "0000000000000020f1b468fb83467c927d3db9a436eec0bc2d6b6b27fb3c0904",
            )?,
            uahf_height: 478_559,
            // Monday, May 21, 2018 04:00:00 PM GMT; the fork landed 5 hours later
            core_hard_fork_activation_time: 1526852960,
            // Jun 06, 2019 14:00:00 GMT
            enforce_protocol_version_80050_time: Some(1559815200),
            one_minute_block_height,
            pow_blake2_height: 735_000,
        };

        let checkpoints = CheckpointList::from_literals(&[
            (11111, "0000000069e244f73d78e8fd29ba2fd2ed618bd6fa2ee92559f542fdb26e7c1d"),
            (33333, "000000002dd5588a74784eaa7ab0507a18ad16a236e7b1ce69f00d7ddfb5d0a6"),
            (74000, "0000000000573993a3c9e41ce34471c079dcf5f52a0e824a81e7f953b8661a20"),
            (105000, "00000000000291ce28027faea320c8d2b054b2e0fe44a773f3eefb151d6bdc97"),
            (134444, "00000000000005b12ffd4cd315cd34ffd4a594f430ac814c91184a0d42d2b0fe"),
            (168000, "000000000000099e61ea72015e79632f216fe6cb33d7899acb35b75c8303b763"),
            (193000, "000000000000059f452a5f7340de6682a977387c17010ff6e6c3bd83ca8b1317"),
            (210000, "000000000000048b95347e83192f69cf0366076336c639f9b7228e9ba171342e"),
            (216116, "00000000000001b4f4b433e81ee46494af945cf96014816a4e2370f11b23df4e"),
            (225430, "00000000000001c108384350f74090433e7fcf79a606b8e797f065b130575932"),
            (250000, "000000000000003887df1f29024b06fc2200b55f8af8f35453d7be294df2d214"),
            (279000, "0000000000000001ae8c72a0b0c301f67e3afca10e819efa9041e458e9bd7e40"),
            (295000, "00000000000000004d9b4ef50f0f9d686fd69db2e03af35a100370c64632a983"),
            // UAHF fork block
            (478559, "000000000000000000651ef99cb9fcbe0dadde1d424bd9f15ff20136191a5eec"),
            // Sept 30, 2017
            (490000, "0000000000000000018ade0e75b4c21db72f05db1e4fffb870c26d6c765dc6d1"),
            // May 18, 2018
            (575000, "000000000000000e507218030ced7824e0a6b84e6d243bc76d6590930fc88c82"),
            // May 23, 2018
            (576720, "00000000000000017de31d8e9a74ba7c50557d13e10290131dfa78202799faea"),
            // July 26, 2018
            (585550, "0000000000000004fb959c2bbabb38609bbe44fa4bb206b1a81849f9b10414cd"),
            // Sept 5, 2018
            (615385, "000000000000000f61a5f419643ce6c15a579f49289d6fd1b1ed521f899d44ee"),
            // Jan 17, 2019
            (734750, "000000000000000eea84db6a33adefff7cdb4ee87ec961a8640b0de8b0df363d"),
            // May 12, 2019
            (819300, "00000000000000921ef5597db254728192397d6a40eaf5b502da4a4538bedb5a"),
        ])?;

        Self {
            network,
            consensus,
            message_start: [0xf9, 0xbe, 0xb4, 0xd9],
            cash_message_start: [0xe3, 0xe1, 0xf3, 0xe8],
            default_port: 10333,
            prune_after_height: 100_000,
            dns_seeds: vec![
                // maintained by Clashicly
                DnsSeed::new("clashic.cash", "seeder.clashic.cash", true),
                DnsSeed::new("bitcoincore.zone", "seeder.bitcoincore.zone", true),
                DnsSeed::new("clashic.org", "seeder-mainnet.clashic.org", true),
            ],
            fixed_seeds: Vec::new(),
            base58_prefixes: Base58Prefixes::new(
                vec![0],
                vec![5],
                vec![128],
                vec![0x04, 0x88, 0xB2, 0x1E],
                vec![0x04, 0x88, 0xAD, 0xE4],
            ),
            title_address_prefix: "tnet".to_string(),
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            checkpoints,
            // As of block 000000000000000f61a5f419643ce6c15a579f49289d6fd1b1ed521f899d44ee (615385)
            chain_tx_data: ChainTxData {
                time: 1536198411,
                tx_count: 245_734_254,
                tx_rate: 0.01,
            },
            genesis,
        }
        .checked()
    }

    /// Get testnet parameters
    pub fn testnet() -> Result<Self> {
        let network = NetworkType::Test;
        let (genesis, genesis_hash) = GenesisLiterals {
            time: 1531239140,
            nonce: 28,
            bits: 0x20111111,
            version: 1,
            reward: Amount::from_coins(50),
            hash: TESTNET_GENESIS_HASH,
        }
        .build(network)?;

        let consensus = ConsensusParams {
            hash_genesis_block: genesis_hash,
            subsidy_halving_interval: 210_000,
            subsidy_halving_interval_one_minute: Some(210_000 * 10),
            subsidy_halving_interval_one_minute_adjustment: None,
            bip34_height: 0,
            bip34_hash: genesis_hash,
            bip65_height: 0,
            bip66_height: 0,
            anti_replay_op_return_sunset_height: 1,
            anti_replay_op_return_commitment: anti_replay_commitment(),
            pow_limit: Hash256::from_hex(
                "1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_target_timespan: TWO_WEEKS,
            pow_target_spacing: TEN_MINUTES,
            pow_target_spacing_one_minute: ONE_MINUTE,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: false,
            // 75% for testchains
            rule_change_activation_threshold: 1512,
            miner_confirmation_window: 2016,
            deployments: DeploymentTable::new(
                Deployment::new(28, 1199145601, 1230767999),
                // March 1st, 2016 to May 1st, 2017
                Deployment::new(0, 1456790400, 1493596800),
            ),
            minimum_chain_work: Hash256::from_hex("0x032f")?,
            default_assume_valid: Hash256::from_hex(
                "02b4614f9a5ddb8937835e4b871fccda4bcdd9741f349005444e8c84a8cfbcc8",
            )?,
            uahf_height: 1,
            core_hard_fork_activation_time: 1526860800,
            enforce_protocol_version_80050_time: Some(1532581620),
            one_minute_block_height: 160,
            pow_blake2_height: 250_000,
        };

        let checkpoints = CheckpointList::from_literals(&[
            (0, TESTNET_GENESIS_HASH),
            // Just past the second testnet halving
            (100, "16420994c95bcf9afa2fab4a45af3cfb5dc6ac6103a40e2ffa48e7d327bdd7f"),
        ])?;

        Self {
            network,
            consensus,
            message_start: [0x0b, 0x11, 0x09, 0x07],
            cash_message_start: [0xf4, 0xe5, 0xf3, 0xf4],
            default_port: 20333,
            prune_after_height: 1000,
            // Seeders with service-bit filtering first
            dns_seeds: vec![
                DnsSeed::new(
                    "truevisionofsatoshi.com",
                    "seeder-testnet.truevisionofsatoshi.com",
                    true,
                ),
                DnsSeed::new("clashic.cash", "testnet-seeder.clashic.cash", true),
                DnsSeed::new("bitcoincore.zone", "testnet-seeder.bitcoincore.zone", true),
            ],
            fixed_seeds: Vec::new(),
            base58_prefixes: test_base58_prefixes(),
            title_address_prefix: "tnettest".to_string(),
            mining_requires_peers: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            checkpoints,
            // As of block 02b4614f9a5ddb8937835e4b871fccda4bcdd9741f349005444e8c84a8cfbcc8 (421382)
            chain_tx_data: ChainTxData {
                time: 1531625001,
                tx_count: 421_382,
                tx_rate: 1.09,
            },
            genesis,
        }
        .checked()
    }

    /// Get regtest parameters
    pub fn regtest() -> Result<Self> {
        let network = NetworkType::Regtest;
        let (genesis, genesis_hash) = GenesisLiterals {
            time: 1296688602,
            nonce: 2,
            bits: 0x207fffff,
            version: 1,
            reward: Amount::from_coins(50),
            hash: REGTEST_GENESIS_HASH,
        }
        .build(network)?;

        let consensus = ConsensusParams {
            hash_genesis_block: genesis_hash,
            subsidy_halving_interval: 150,
            subsidy_halving_interval_one_minute: None,
            subsidy_halving_interval_one_minute_adjustment: None,
            // Far in the future so v1 blocks are not rejected in tests
            bip34_height: 100_000_000,
            bip34_hash: Hash256::ZERO,
            // Used in RPC activation tests
            bip65_height: 1351,
            bip66_height: 1251,
            anti_replay_op_return_sunset_height: 530_000,
            anti_replay_op_return_commitment: anti_replay_commitment(),
            pow_limit: Hash256::from_hex(
                "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            )?,
            pow_target_timespan: TWO_WEEKS,
            pow_target_spacing: TEN_MINUTES,
            pow_target_spacing_one_minute: ONE_MINUTE,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            // 75% of 144
            rule_change_activation_threshold: 108,
            miner_confirmation_window: 144,
            deployments: DeploymentTable::new(
                Deployment::new(28, 0, REGTEST_DEPLOYMENT_TIMEOUT),
                Deployment::new(0, 0, REGTEST_DEPLOYMENT_TIMEOUT),
            ),
            minimum_chain_work: Hash256::ZERO,
            default_assume_valid: Hash256::ZERO,
            // Every hard fork is live from genesis
            uahf_height: 0,
            core_hard_fork_activation_time: 0,
            enforce_protocol_version_80050_time: None,
            one_minute_block_height: 0,
            pow_blake2_height: 0,
        };

        let checkpoints = CheckpointList::from_literals(&[(0, REGTEST_GENESIS_HASH)])?;

        Self {
            network,
            consensus,
            message_start: [0xfa, 0xbf, 0xb5, 0xda],
            cash_message_start: [0xda, 0xb5, 0xbf, 0xfa],
            default_port: 20444,
            prune_after_height: 1000,
            dns_seeds: Vec::new(),
            fixed_seeds: Vec::new(),
            base58_prefixes: test_base58_prefixes(),
            title_address_prefix: "tnetreg".to_string(),
            mining_requires_peers: false,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            checkpoints,
            chain_tx_data: ChainTxData {
                time: 0,
                tx_count: 0,
                tx_rate: 0.0,
            },
            genesis,
        }
        .checked()
    }

    /// Get chain params by network type
    pub fn from_network(network_type: NetworkType) -> Result<Self> {
        match network_type {
            NetworkType::Main => Self::mainnet(),
            NetworkType::Test => Self::testnet(),
            NetworkType::Regtest => Self::regtest(),
        }
    }

    // Cross-field checks that need the assembled set.
    fn checked(self) -> Result<Self> {
        self.checkpoints
            .check_genesis(&self.consensus.hash_genesis_block)?;
        tracing::debug!(
            "Built {} chain parameters (genesis {}, {} checkpoints)",
            self.network,
            self.consensus.hash_genesis_block,
            self.checkpoints.len()
        );
        Ok(self)
    }

    /// The genesis block
    pub fn genesis(&self) -> &Block {
        &self.genesis
    }

    /// Hash of the genesis block
    pub fn genesis_hash(&self) -> &Hash256 {
        &self.consensus.hash_genesis_block
    }

    /// Base58 prefix bytes for `kind`
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Activation window of a deployment
    pub fn deployment(&self, pos: DeploymentPos) -> &Deployment {
        self.consensus.deployment(pos)
    }

    pub(crate) fn update_deployment_window(
        &mut self,
        pos: DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) {
        self.consensus
            .deployments
            .set_window(pos, start_time, timeout);
    }

    /// Render as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Regtest signalling windows stay open for practical purposes forever.
const REGTEST_DEPLOYMENT_TIMEOUT: i64 = 999_999_999_999;

fn test_base58_prefixes() -> Base58Prefixes {
    Base58Prefixes::new(
        vec![111],
        vec![196],
        vec![239],
        vec![0x04, 0x35, 0x87, 0xCF],
        vec![0x04, 0x35, 0x83, 0x94],
    )
}
