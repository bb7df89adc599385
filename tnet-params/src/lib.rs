//! TNET network parameters and constants
//!
//! This crate provides the genesis blocks, consensus parameters, soft-fork
//! deployment windows, checkpoints and peer-discovery data for the three
//! TNET networks, along with a registry that selects the active network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod anti_replay;
pub mod base;
pub mod chainparams;
pub mod checkpoints;
pub mod consensus;
pub mod deployments;
pub mod genesis;
pub mod network;
pub mod registry;

pub use anti_replay::{anti_replay_commitment, ANTI_REPLAY_COMMITMENT};
pub use base::BaseParams;
pub use chainparams::{ChainParams, ChainTxData};
pub use checkpoints::{Checkpoint, CheckpointList};
pub use consensus::ConsensusParams;
pub use deployments::{Deployment, DeploymentPos, DeploymentTable};
pub use genesis::{create_default_genesis_block, create_genesis_block};
pub use network::{Base58Prefixes, Base58Type, DnsSeed, NetworkType, SeedSpec6};
pub use registry::ParamsRegistry;

use tnet_primitives::Hash256;

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network name is not one of main, test, regtest
    #[error("Unknown network name: {0}")]
    InvalidNetworkName(String),

    /// Rebuilt genesis block does not hash to the hardcoded value
    #[error("{network} genesis hash mismatch: expected {expected}, built {actual}")]
    GenesisHashMismatch {
        /// Network being built
        network: NetworkType,
        /// Hardcoded hash
        expected: Hash256,
        /// Hash of the rebuilt block
        actual: Hash256,
    },

    /// Rebuilt genesis block has an unexpected merkle root
    #[error("{network} genesis merkle root mismatch: expected {expected}, built {actual}")]
    GenesisMerkleRootMismatch {
        /// Network being built
        network: NetworkType,
        /// Hardcoded merkle root
        expected: Hash256,
        /// Merkle root of the rebuilt block
        actual: Hash256,
    },

    /// Height-0 checkpoint disagrees with the genesis hash
    #[error("Checkpoint at height 0 is {actual}, genesis is {expected}")]
    CheckpointGenesisMismatch {
        /// Genesis hash
        expected: Hash256,
        /// Pinned hash
        actual: Hash256,
    },

    /// Two checkpoints for one height
    #[error("Duplicate checkpoint at height {0}")]
    DuplicateCheckpoint(u32),

    /// Checkpoint not found
    #[error("No checkpoint found for height {0}")]
    CheckpointNotFound(u32),

    /// Malformed hex or script literal
    #[error("Invalid literal: {0}")]
    InvalidLiteral(#[from] tnet_primitives::Error),

    /// JSON rendering failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Errors that mean the built-in parameter tables are corrupt.
    ///
    /// A node must not start after one of these.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::GenesisHashMismatch { .. }
                | Error::GenesisMerkleRootMismatch { .. }
                | Error::CheckpointGenesisMismatch { .. }
                | Error::DuplicateCheckpoint(_)
                | Error::InvalidLiteral(_)
        )
    }
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(!Error::InvalidNetworkName("x".into()).is_fatal());
        assert!(!Error::CheckpointNotFound(1).is_fatal());
        assert!(Error::DuplicateCheckpoint(1).is_fatal());
        assert!(Error::GenesisHashMismatch {
            network: NetworkType::Main,
            expected: Hash256::ZERO,
            actual: Hash256::ZERO,
        }
        .is_fatal());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidNetworkName("bogus".into());
        assert_eq!(err.to_string(), "Unknown network name: bogus");
        assert_eq!(
            Error::DuplicateCheckpoint(7).to_string(),
            "Duplicate checkpoint at height 7"
        );
    }
}
