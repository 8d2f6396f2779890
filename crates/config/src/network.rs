//! Network configuration for the protocol deployments.
//!
//! Provides chain ids and contract addresses on L1 and L2. L2 contracts are
//! predeploys at fixed addresses; L1 addresses depend on the deployment and
//! usually come from a config file.

use crate::error::ConfigError;
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Network type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Local devnet (L1 chain id 31336, L2 chain id 167001)
    Devnet,
    /// Public alpha testnet on Sepolia
    Testnet,
}

/// Contract addresses on L1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1Contracts {
    /// TaikoL1 rollup contract
    pub taiko_l1: Address,
    /// L1 Bridge
    pub bridge: Address,
    /// L1 TokenVault
    pub token_vault: Address,
    /// L1 SignalService
    pub signal_service: Address,
    /// AddressManager shared by the L1 contracts
    pub address_manager: Address,
    /// ProverPool, if deployed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prover_pool: Option<Address>,
    /// TaikoToken, if deployed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taiko_token: Option<Address>,
}

impl L1Contracts {
    /// All addresses zero; must be filled in before use.
    pub const fn unset() -> Self {
        Self {
            taiko_l1: Address::ZERO,
            bridge: Address::ZERO,
            token_vault: Address::ZERO,
            signal_service: Address::ZERO,
            address_manager: Address::ZERO,
            prover_pool: None,
            taiko_token: None,
        }
    }
}

/// Contract addresses on L2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct L2Contracts {
    /// TaikoL2 anchor contract
    pub taiko_l2: Address,
    /// L2 TokenVault
    pub token_vault: Address,
    /// EtherVault holding pre-minted Ether
    pub ether_vault: Address,
    /// L2 Bridge
    pub bridge: Address,
    /// L2 AddressManager
    pub address_manager: Address,
    /// L2 SignalService
    pub signal_service: Address,
}

impl L2Contracts {
    /// Predeploy addresses, identical on every network.
    pub const fn predeploys() -> Self {
        Self {
            taiko_l2: address!("0x0000777700000000000000000000000000000001"),
            token_vault: address!("0x0000777700000000000000000000000000000002"),
            ether_vault: address!("0x0000777700000000000000000000000000000003"),
            bridge: address!("0x0000777700000000000000000000000000000004"),
            address_manager: address!("0x0000777700000000000000000000000000000006"),
            signal_service: address!("0x0000777700000000000000000000000000000007"),
        }
    }
}

impl Default for L2Contracts {
    fn default() -> Self {
        Self::predeploys()
    }
}

/// Complete network configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network type
    pub network_type: NetworkType,
    /// L1 chain id
    pub l1_chain_id: u64,
    /// L2 chain id
    pub l2_chain_id: u64,
    /// L1 contract addresses
    pub l1: L1Contracts,
    /// L2 contract addresses (defaults to the predeploys)
    #[serde(default)]
    pub l2: L2Contracts,
}

impl NetworkConfig {
    /// Local devnet configuration, L1 addresses unset.
    pub const fn devnet() -> Self {
        Self {
            network_type: NetworkType::Devnet,
            l1_chain_id: 31336,
            l2_chain_id: 167001,
            l1: L1Contracts::unset(),
            l2: L2Contracts::predeploys(),
        }
    }

    /// Alpha testnet configuration, L1 addresses unset.
    pub const fn testnet() -> Self {
        Self {
            network_type: NetworkType::Testnet,
            l1_chain_id: 11155111,
            l2_chain_id: 167004,
            l1: L1Contracts::unset(),
            l2: L2Contracts::predeploys(),
        }
    }

    /// Create configuration from network type.
    pub const fn from_network_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Devnet => Self::devnet(),
            NetworkType::Testnet => Self::testnet(),
        }
    }

    /// Load and validate a network configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        contents.parse()
    }

    /// Check that every required contract address is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.l1_chain_id == self.l2_chain_id {
            return Err(ConfigError::SameChainId(self.l1_chain_id));
        }

        let required = [
            ("l1.taiko_l1", self.l1.taiko_l1),
            ("l1.bridge", self.l1.bridge),
            ("l1.token_vault", self.l1.token_vault),
            ("l1.signal_service", self.l1.signal_service),
            ("l1.address_manager", self.l1.address_manager),
            ("l2.taiko_l2", self.l2.taiko_l2),
            ("l2.bridge", self.l2.bridge),
        ];

        for (name, address) in required {
            if address.is_zero() {
                return Err(ConfigError::MissingAddress(name));
            }
        }

        Ok(())
    }
}

impl std::str::FromStr for NetworkConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }
}

/// Builder for custom network configurations.
#[derive(Debug, Clone)]
pub struct NetworkConfigBuilder {
    config: NetworkConfig,
}

impl NetworkConfigBuilder {
    /// Start with devnet defaults.
    pub const fn devnet() -> Self {
        Self {
            config: NetworkConfig::devnet(),
        }
    }

    /// Start with testnet defaults.
    pub const fn testnet() -> Self {
        Self {
            config: NetworkConfig::testnet(),
        }
    }

    /// Override the L1 chain id.
    pub const fn l1_chain_id(mut self, chain_id: u64) -> Self {
        self.config.l1_chain_id = chain_id;
        self
    }

    /// Override the L2 chain id.
    pub const fn l2_chain_id(mut self, chain_id: u64) -> Self {
        self.config.l2_chain_id = chain_id;
        self
    }

    /// Override the TaikoL1 address.
    pub const fn taiko_l1(mut self, address: Address) -> Self {
        self.config.l1.taiko_l1 = address;
        self
    }

    /// Override the L1 Bridge address.
    pub const fn l1_bridge(mut self, address: Address) -> Self {
        self.config.l1.bridge = address;
        self
    }

    /// Override the L1 TokenVault address.
    pub const fn l1_token_vault(mut self, address: Address) -> Self {
        self.config.l1.token_vault = address;
        self
    }

    /// Override the L1 SignalService address.
    pub const fn l1_signal_service(mut self, address: Address) -> Self {
        self.config.l1.signal_service = address;
        self
    }

    /// Override the L1 AddressManager address.
    pub const fn l1_address_manager(mut self, address: Address) -> Self {
        self.config.l1.address_manager = address;
        self
    }

    /// Set the ProverPool address.
    pub const fn prover_pool(mut self, address: Address) -> Self {
        self.config.l1.prover_pool = Some(address);
        self
    }

    /// Set the TaikoToken address.
    pub const fn taiko_token(mut self, address: Address) -> Self {
        self.config.l1.taiko_token = Some(address);
        self
    }

    /// Build the network configuration.
    pub const fn build(self) -> NetworkConfig {
        self.config
    }
}
