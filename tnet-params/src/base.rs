//! Network identity shared by subsystems that need no consensus rules

use crate::network::NetworkType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lightweight per-network settings, selected together with [`ChainParams`].
///
/// [`ChainParams`]: crate::ChainParams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseParams {
    /// Network identity
    pub network: NetworkType,
    /// Subdirectory of the data directory, empty for mainnet
    pub data_dir: String,
}

impl BaseParams {
    /// Base parameters for a network
    pub fn for_network(network: NetworkType) -> Self {
        let data_dir = match network {
            NetworkType::Main => "",
            NetworkType::Test => "testnet3",
            NetworkType::Regtest => "regtest",
        };
        Self {
            network,
            data_dir: data_dir.to_string(),
        }
    }

    /// Resolve the network's data directory under `root`
    pub fn data_dir_under(&self, root: &Path) -> PathBuf {
        if self.data_dir.is_empty() {
            root.to_path_buf()
        } else {
            root.join(&self.data_dir)
        }
    }
}
