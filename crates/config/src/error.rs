use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required contract address is zero
    #[error("Missing contract address: {0}")]
    MissingAddress(&'static str),

    /// L1 and L2 share a chain id
    #[error("L1 and L2 chain id are both {0}")]
    SameChainId(u64),
}
