//! Selection of the active network
//!
//! The registry owns one [`ChainParams`] per network. Startup code builds it,
//! selects a network by name and then shares `&ParamsRegistry` read-only.

use crate::base::BaseParams;
use crate::chainparams::ChainParams;
use crate::deployments::DeploymentPos;
use crate::network::NetworkType;
use crate::Result;

/// The three parameter sets plus the current selection.
#[derive(Debug, Clone)]
pub struct ParamsRegistry {
    main: ChainParams,
    test: ChainParams,
    regtest: ChainParams,
    current: Option<NetworkType>,
    base: Option<BaseParams>,
}

impl ParamsRegistry {
    /// Build and verify every network's parameters. Nothing is selected yet.
    pub fn new() -> Result<Self> {
        Ok(Self {
            main: ChainParams::mainnet()?,
            test: ChainParams::testnet()?,
            regtest: ChainParams::regtest()?,
            current: None,
            base: None,
        })
    }

    /// Parameters of a network
    pub fn get(&self, network: NetworkType) -> &ChainParams {
        match network {
            NetworkType::Main => &self.main,
            NetworkType::Test => &self.test,
            NetworkType::Regtest => &self.regtest,
        }
    }

    /// Parameters for a network name. The selection is left untouched.
    pub fn lookup_by_name(&self, name: &str) -> Result<&ChainParams> {
        let network = NetworkType::from_name(name)?;
        Ok(self.get(network))
    }

    /// Make `name` the current network. On error the previous selection stays.
    pub fn select_network(&mut self, name: &str) -> Result<()> {
        let network = NetworkType::from_name(name)?;
        if let Some(previous) = self.current.filter(|previous| *previous != network) {
            tracing::warn!("Switching selected network from {} to {}", previous, network);
        }
        self.base = Some(BaseParams::for_network(network));
        self.current = Some(network);
        tracing::info!(
            "Selected {} network (genesis {})",
            network,
            self.get(network).genesis_hash()
        );
        Ok(())
    }

    /// Parameters of the selected network.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected.
    pub fn current(&self) -> &ChainParams {
        match self.try_current() {
            Some(params) => params,
            None => panic!("chain parameters read before a network was selected"),
        }
    }

    /// Parameters of the selected network, if any
    pub fn try_current(&self) -> Option<&ChainParams> {
        self.current.map(|network| self.get(network))
    }

    /// The selected network, if any
    pub fn selected_network(&self) -> Option<NetworkType> {
        self.current
    }

    /// Base parameters of the selected network.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected.
    pub fn base_params(&self) -> &BaseParams {
        match &self.base {
            Some(base) => base,
            None => panic!("base parameters read before a network was selected"),
        }
    }

    /// Override a regtest deployment window. Other networks cannot be changed.
    pub fn update_regtest_deployment(&mut self, pos: DeploymentPos, start_time: i64, timeout: i64) {
        tracing::debug!(
            "Regtest deployment {} window set to {}..{}",
            pos.name(),
            start_time,
            timeout
        );
        self.regtest.update_deployment_window(pos, start_time, timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn registry() -> ParamsRegistry {
        ParamsRegistry::new().unwrap()
    }

    #[test]
    fn test_nothing_selected_initially() {
        let registry = registry();
        assert!(registry.try_current().is_none());
        assert!(registry.selected_network().is_none());
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_current_panics_before_selection() {
        registry().current();
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_base_params_panics_before_selection() {
        registry().base_params();
    }

    #[test]
    fn test_select_network() {
        let mut registry = registry();
        registry.select_network("test").unwrap();
        assert_eq!(registry.current().network, NetworkType::Test);
        assert_eq!(registry.base_params().data_dir, "testnet3");
        assert_eq!(registry.selected_network(), Some(NetworkType::Test));
    }

    #[test]
    fn test_invalid_name_keeps_selection() {
        let mut registry = registry();
        registry.select_network("regtest").unwrap();

        let err = registry.select_network("Main").unwrap_err();
        assert!(matches!(err, Error::InvalidNetworkName(ref name) if name == "Main"));
        assert!(!err.is_fatal());
        assert_eq!(registry.current().network, NetworkType::Regtest);
        assert_eq!(registry.base_params().network, NetworkType::Regtest);
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = registry();
        assert_eq!(registry.lookup_by_name("main").unwrap().default_port, 10333);
        assert!(registry.lookup_by_name("mainnet").is_err());
        assert!(registry.lookup_by_name("").is_err());
        assert!(registry.try_current().is_none());
    }

    #[test]
    fn test_update_regtest_deployment() {
        let mut registry = registry();
        let before = registry.get(NetworkType::Regtest).clone();
        registry.update_regtest_deployment(DeploymentPos::Csv, 100, 200);

        let after = registry.get(NetworkType::Regtest);
        let csv = after.deployment(DeploymentPos::Csv);
        assert_eq!((csv.bit, csv.start_time, csv.timeout), (0, 100, 200));
        assert_eq!(
            after.deployment(DeploymentPos::TestDummy),
            before.deployment(DeploymentPos::TestDummy)
        );
        assert_eq!(after.genesis_hash(), before.genesis_hash());
        assert_eq!(registry.get(NetworkType::Main), &ChainParams::mainnet().unwrap());
    }
}
