//! Blockchain checkpoints
//!
//! A checkpoint pins the block hash at a height. Validation rejects any
//! history that disagrees with a pinned hash without evaluating it further.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tnet_primitives::Hash256;

/// A blockchain checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Block height
    pub height: u32,
    /// Block hash
    pub hash: Hash256,
}

/// List of checkpoints, strictly increasing by height
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointList {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointList {
    /// Create a new checkpoint list, sorted by height.
    ///
    /// Two entries for the same height are rejected.
    pub fn new(checkpoints: Vec<Checkpoint>) -> Result<Self> {
        let mut cp = Self { checkpoints };
        cp.sort();
        if let Some(pair) = cp.checkpoints.windows(2).find(|w| w[0].height == w[1].height) {
            return Err(Error::DuplicateCheckpoint(pair[0].height));
        }
        Ok(cp)
    }

    /// Build from `(height, hex hash)` literals
    pub fn from_literals(entries: &[(u32, &str)]) -> Result<Self> {
        let checkpoints = entries
            .iter()
            .map(|(height, hash)| {
                Ok(Checkpoint {
                    height: *height,
                    hash: Hash256::from_hex(hash)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(checkpoints)
    }

    /// Sort checkpoints by height
    fn sort(&mut self) {
        self.checkpoints.sort_by_key(|cp| cp.height);
    }

    /// Pinned hash at exactly `height`
    pub fn hash_at(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints
            .binary_search_by_key(&height, |cp| cp.height)
            .ok()
            .map(|i| &self.checkpoints[i].hash)
    }

    /// Get checkpoint at or before given height
    pub fn checkpoint_at_height(&self, height: u32) -> Result<&Checkpoint> {
        self.checkpoints
            .iter()
            .rev()
            .find(|cp| cp.height <= height)
            .ok_or(Error::CheckpointNotFound(height))
    }

    /// Check a candidate block hash against the pin at its height.
    ///
    /// Heights without a checkpoint always pass.
    pub fn matches(&self, height: u32, hash: &Hash256) -> bool {
        self.hash_at(height).map_or(true, |pinned| pinned == hash)
    }

    /// Ensure a height-0 entry, if present, pins the genesis hash
    pub fn check_genesis(&self, genesis_hash: &Hash256) -> Result<()> {
        match self.hash_at(0) {
            Some(pinned) if pinned != genesis_hash => Err(Error::CheckpointGenesisMismatch {
                expected: *genesis_hash,
                actual: *pinned,
            }),
            _ => Ok(()),
        }
    }

    /// Get all checkpoints
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Get latest checkpoint
    pub fn latest(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    /// Get checkpoint count
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
