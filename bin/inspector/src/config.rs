use ::config::NetworkConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level inspector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// L1 RPC endpoint url
    pub l1_rpc_url: String,

    /// L2 RPC endpoint url
    pub l2_rpc_url: String,

    /// Port for the Prometheus exporter, disabled when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,

    /// Chain ids and contract addresses
    pub network: NetworkConfig,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> eyre::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.network.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use ::config::{L2Contracts, NetworkType};

    const CONFIG: &str = r#"
        l1_rpc_url = "http://localhost:8545"
        l2_rpc_url = "http://localhost:28545"

        [network]
        network_type = "devnet"
        l1_chain_id = 31336
        l2_chain_id = 167001

        [network.l1]
        taiko_l1 = "0x1111111111111111111111111111111111111111"
        bridge = "0x2222222222222222222222222222222222222222"
        token_vault = "0x3333333333333333333333333333333333333333"
        signal_service = "0x4444444444444444444444444444444444444444"
        address_manager = "0x5555555555555555555555555555555555555555"
    "#;

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml(CONFIG).unwrap();

        assert_eq!(config.l1_rpc_url, "http://localhost:8545");
        assert_eq!(config.metrics_port, None);
        assert_eq!(config.network.network_type, NetworkType::Devnet);
        assert_eq!(
            config.network.l1.taiko_l1,
            address!("0x1111111111111111111111111111111111111111")
        );
        assert_eq!(config.network.l2, L2Contracts::predeploys());
    }

    #[test]
    fn test_invalid_network_is_rejected() {
        let config = CONFIG.replace(
            "0x1111111111111111111111111111111111111111",
            "0x0000000000000000000000000000000000000000",
        );

        let err = Config::from_toml(&config).unwrap_err();
        assert!(err.to_string().contains("l1.taiko_l1"));
    }
}
