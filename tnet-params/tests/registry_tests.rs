//! Integration tests for network selection and the built-in parameter sets

use tnet_params::{
    ChainParams, DeploymentPos, Error, NetworkType, ParamsRegistry, ANTI_REPLAY_COMMITMENT,
};
use tnet_primitives::Hash256;

fn registry() -> ParamsRegistry {
    ParamsRegistry::new().expect("built-in parameters verify")
}

#[test]
fn test_lookup_returns_same_instance() {
    let registry = registry();
    for network in NetworkType::ALL {
        let first = registry.lookup_by_name(network.name()).unwrap();
        let second = registry.lookup_by_name(network.name()).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, registry.get(network)));
    }
}

#[test]
fn test_selected_matches_lookup() {
    let mut registry = registry();
    for network in NetworkType::ALL {
        registry.select_network(network.name()).unwrap();
        let looked_up = registry.lookup_by_name(network.name()).unwrap();
        assert!(std::ptr::eq(registry.current(), looked_up));
        assert_eq!(registry.base_params().network, network);
    }
}

#[test]
fn test_unknown_names_rejected_without_side_effects() {
    let mut registry = registry();
    registry.select_network("main").unwrap();

    for bogus in ["", "Main", "MAIN", "mainnet", "testnet", "regtest ", " test", "bogus"] {
        assert!(matches!(
            registry.lookup_by_name(bogus),
            Err(Error::InvalidNetworkName(_))
        ));
        assert!(registry.select_network(bogus).is_err());
        assert_eq!(registry.current().network, NetworkType::Main);
    }
}

#[test]
fn test_known_genesis_hashes() {
    let registry = registry();
    let expected = [
        (NetworkType::Main, "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"),
        (NetworkType::Test, "0273ed223240099a339d351d46054156fb6f3855c5db1c00c0275c9b6f1d07de"),
        (NetworkType::Regtest, "0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206"),
    ];
    for (network, hash) in expected {
        let params = registry.get(network);
        assert_eq!(params.genesis_hash().to_string(), hash);
        assert_eq!(params.genesis().hash(), *params.genesis_hash());
        assert!(params.genesis().has_valid_merkle_root());
    }
}

#[test]
fn test_checkpoint_invariants() {
    let registry = registry();
    for network in NetworkType::ALL {
        let params = registry.get(network);
        let heights: Vec<u32> = params
            .checkpoints
            .checkpoints()
            .iter()
            .map(|cp| cp.height)
            .collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]), "{} not ascending", network);
        if let Some(pinned) = params.checkpoints.hash_at(0) {
            assert_eq!(pinned, params.genesis_hash());
        }
    }
    // Mainnet has no height-0 checkpoint, the others pin genesis
    assert!(registry.get(NetworkType::Main).checkpoints.hash_at(0).is_none());
    assert!(registry.get(NetworkType::Test).checkpoints.hash_at(0).is_some());
    assert!(registry.get(NetworkType::Regtest).checkpoints.hash_at(0).is_some());
}

#[test]
fn test_deployments_well_formed() {
    let registry = registry();
    for network in NetworkType::ALL {
        let deployments = &registry.get(network).consensus.deployments;
        assert!(deployments.has_unique_bits(), "{} reuses a version bit", network);
        for (pos, deployment) in deployments.iter() {
            assert!(
                deployment.is_well_formed(),
                "{} deployment {} malformed",
                network,
                pos.name()
            );
        }
    }
}

#[test]
fn test_network_flags() {
    let registry = registry();
    let main = registry.get(NetworkType::Main);
    let test = registry.get(NetworkType::Test);
    let regtest = registry.get(NetworkType::Regtest);

    for params in [main, test] {
        assert!(params.mining_requires_peers);
        assert!(!params.mine_blocks_on_demand);
        assert!(params.require_standard);
        assert!(!params.default_consistency_checks);
        assert!(!params.dns_seeds.is_empty());
    }
    assert!(!regtest.mining_requires_peers);
    assert!(regtest.mine_blocks_on_demand);
    assert!(!regtest.require_standard);
    assert!(regtest.default_consistency_checks);
}

#[test]
fn test_ports_and_magic_distinct() {
    let registry = registry();
    let main = registry.get(NetworkType::Main);
    let test = registry.get(NetworkType::Test);
    let regtest = registry.get(NetworkType::Regtest);

    assert_ne!(main.default_port, test.default_port);
    assert_ne!(test.default_port, regtest.default_port);
    assert_ne!(main.message_start, test.message_start);
    assert_ne!(test.message_start, regtest.message_start);
    assert_ne!(main.cash_message_start, regtest.cash_message_start);
}

#[test]
fn test_anti_replay_commitment_everywhere() {
    let registry = registry();
    for network in NetworkType::ALL {
        assert_eq!(
            registry.get(network).consensus.anti_replay_op_return_commitment,
            ANTI_REPLAY_COMMITMENT.as_bytes()
        );
    }
}

#[test]
fn test_regtest_mutator_leaves_other_fields() {
    let mut registry = registry();
    registry.select_network("regtest").unwrap();
    let before = registry.current().clone();

    registry.update_regtest_deployment(DeploymentPos::TestDummy, 1_000, 2_000);

    let mut expected = before.consensus.clone();
    let after = registry.current();
    assert_ne!(after.consensus, expected);

    // Undo the change by hand and everything else must be identical
    let window = *after.deployment(DeploymentPos::TestDummy);
    assert_eq!((window.start_time, window.timeout), (1_000, 2_000));
    expected.deployments = after.consensus.deployments.clone();
    assert_eq!(after.consensus, expected);
    assert_eq!(after.checkpoints, before.checkpoints);
    assert_eq!(after.genesis(), before.genesis());
}

#[test]
fn test_regtest_mutator_does_not_touch_other_networks() {
    let mut registry = registry();
    registry.update_regtest_deployment(DeploymentPos::Csv, 0, 1);
    assert_eq!(registry.get(NetworkType::Main), &ChainParams::mainnet().unwrap());
    assert_eq!(registry.get(NetworkType::Test), &ChainParams::testnet().unwrap());
}

#[test]
fn test_pow_limits_cover_genesis_targets() {
    // The regtest and test limits are easier than the main limit
    let registry = registry();
    let main = registry.get(NetworkType::Main).consensus.pow_limit;
    let test = registry.get(NetworkType::Test).consensus.pow_limit;
    let regtest = registry.get(NetworkType::Regtest).consensus.pow_limit;
    assert!(main < test);
    assert!(test < regtest);
    assert!(regtest > Hash256::ZERO);
}

#[test]
fn test_chain_params_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChainParams>();
    assert_send_sync::<ParamsRegistry>();
}
