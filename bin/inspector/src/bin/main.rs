//! `inspector`: read, watch and poke a Taiko deployment through the contract bindings.

use alloy_primitives::{Address, B256};
use alloy_rpc_types_eth::BlockNumberOrTag;
use binding::address_manager::{registry_key, AddressManager};
use clap::{Parser, Subcommand};
use inspector::{
    config::Config,
    event::{EventKind, Layer},
    follow_state, init_tracing,
    metrics::{install_prometheus_exporter, Metrics},
    scan_kind, watch_kind,
};
use protocol::{ProtocolStateProvider, ProverPoolProvider, VotesProvider};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "inspector")]
#[command(about = "Inspect Taiko protocol contracts on L1 and L2")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the L1 RPC url from the config file
    #[arg(long, env = "L1_RPC_URL")]
    l1_rpc_url: Option<String>,

    /// Override the L2 RPC url from the config file
    #[arg(long, env = "L2_RPC_URL")]
    l2_rpc_url: Option<String>,

    /// Serve Prometheus metrics on this port
    #[arg(long)]
    metrics_port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the TaikoL1 protocol constants
    Config,

    /// Print the protocol state variables, or follow them with --interval
    State {
        /// Poll every N seconds and publish gauges instead of printing once
        #[arg(long)]
        interval: Option<u64>,
    },

    /// Print a proposed block
    Block { id: u64 },

    /// Print the fork choice of a block for a given parent hash
    ForkChoice { id: u64, parent_hash: B256 },

    /// Print the current block fee and, optionally, a proof reward
    Fee {
        /// Timestamp the block was proven at
        #[arg(long, requires = "proposed_at")]
        proven_at: Option<u64>,

        /// Timestamp the block was proposed at
        #[arg(long, requires = "proven_at")]
        proposed_at: Option<u64>,
    },

    /// List the provers in the ProverPool
    Provers,

    /// Print the vote checkpoints of an account
    Votes { account: Address },

    /// Resolve a name through the AddressManager
    Resolve {
        /// Registry name, e.g. `bridge` or `taiko`
        name: String,

        /// Chain id part of the registry key, defaults to the chain being queried
        #[arg(long)]
        chain_id: Option<u64>,

        /// Query the L2 AddressManager
        #[arg(long)]
        l2: bool,
    },

    /// Print a contract ABI as JSON
    Abi { contract: String },

    /// Log past events over a block range
    Scan {
        #[arg(value_enum)]
        event: EventKind,

        /// First block, defaults to genesis
        #[arg(long, default_value_t = 0)]
        from: u64,

        /// Last block, defaults to the latest block
        #[arg(long)]
        to: Option<u64>,

        /// Read from L2 instead of L1
        #[arg(long)]
        l2: bool,
    },

    /// Log new events until interrupted
    Watch {
        #[arg(value_enum)]
        event: EventKind,

        /// Read from L2 instead of L1
        #[arg(long)]
        l2: bool,
    },

    /// Send a `verifyBlocks` transaction
    VerifyBlocks {
        max_blocks: u64,

        /// Private key for signing (hex string, with or without 0x prefix)
        #[arg(short = 'k', long, env = "PRIVATE_KEY")]
        private_key: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_abi(contract: &str) -> eyre::Result<()> {
    let abi = binding::contract_abi(contract).ok_or_else(|| {
        eyre::eyre!(
            "Unknown contract {}, expected one of {:?}",
            contract,
            binding::CONTRACT_NAMES
        )
    })?;
    print_json(&abi)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    // Needs no config or RPC.
    if let Command::Abi { contract } = &cli.command {
        return print_abi(contract);
    }

    let mut config = Config::from_file(&cli.config)?;
    if let Some(url) = cli.l1_rpc_url {
        config.l1_rpc_url = url;
    }
    if let Some(url) = cli.l2_rpc_url {
        config.l2_rpc_url = url;
    }
    if cli.metrics_port.is_some() {
        config.metrics_port = cli.metrics_port;
    }

    let network = &config.network;
    info!(
        network = ?network.network_type,
        l1_chain_id = network.l1_chain_id,
        l2_chain_id = network.l2_chain_id,
        taiko_l1 = %network.l1.taiko_l1,
        "Loaded config"
    );

    if let Some(port) = config.metrics_port {
        install_prometheus_exporter(port)?;
        info!(port, "Prometheus exporter listening");
    }
    let metrics = Metrics::new();

    let l1_provider =
        client::create_checked_provider(&config.l1_rpc_url, network.l1_chain_id).await?;
    let state = ProtocolStateProvider::new(l1_provider.clone(), network.l1.taiko_l1);

    match cli.command {
        Command::Config => {
            let protocol_config = state.get_config().await?;
            println!("{protocol_config:#?}");
        }
        Command::State { interval: None } => {
            let vars = state.get_protocol_state_variables().await?;
            print_json(&vars)?;
            print_json(&protocol::L1State::from(&vars))?;
            println!("latest synced header: {}", state.get_latest_synced_header().await?);
            println!("halted: {}", state.is_halted().await?);
        }
        Command::State {
            interval: Some(secs),
        } => {
            follow_state(&state, Duration::from_secs(secs), &metrics).await?;
        }
        Command::Block { id } => {
            let block = state.get_proposed_block(id).await?;
            println!("{block:#?}");
        }
        Command::ForkChoice { id, parent_hash } => {
            match state.get_fork_choice(id, parent_hash).await? {
                Some(fork_choice) => println!("{fork_choice:#?}"),
                None => println!("No fork choice for block {id} with parent {parent_hash}"),
            }
        }
        Command::Fee {
            proven_at,
            proposed_at,
        } => {
            println!("block fee: {}", state.get_block_fee().await?);
            if let (Some(proven_at), Some(proposed_at)) = (proven_at, proposed_at) {
                let reward = state.get_proof_reward(proven_at, proposed_at).await?;
                println!("proof reward: {reward}");
            }
        }
        Command::Provers => {
            let prover_pool = network
                .l1
                .prover_pool
                .ok_or_else(|| eyre::eyre!("No ProverPool address configured"))?;
            let pool = ProverPoolProvider::new(l1_provider, prover_pool);

            print_json(&pool.get_provers().await?)?;
            println!("capacity: {}", pool.get_capacity().await?);
        }
        Command::Votes { account } => {
            let taiko_token = network
                .l1
                .taiko_token
                .ok_or_else(|| eyre::eyre!("No TaikoToken address configured"))?;
            let votes = VotesProvider::new(l1_provider, taiko_token);

            print_json(&votes.get_checkpoints(account).await?)?;
            println!("votes: {}", votes.get_votes(account).await?);
            println!("delegate: {}", votes.get_delegate(account).await?);
        }
        Command::Resolve { name, chain_id, l2 } => {
            let resolved = if l2 {
                let l2_provider =
                    client::create_checked_provider(&config.l2_rpc_url, network.l2_chain_id)
                        .await?;
                let key = registry_key(chain_id.unwrap_or(network.l2_chain_id), &name);
                AddressManager::new(network.l2.address_manager, &l2_provider)
                    .getAddress(key)
                    .call()
                    .await?
            } else {
                let key = registry_key(chain_id.unwrap_or(network.l1_chain_id), &name);
                AddressManager::new(network.l1.address_manager, &l1_provider)
                    .getAddress(key)
                    .call()
                    .await?
            };
            println!("{resolved}");
        }
        Command::Scan {
            event,
            from,
            to,
            l2,
        } => {
            let to = to.map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number);
            let from = BlockNumberOrTag::Number(from);
            if l2 {
                let l2_provider =
                    client::create_checked_provider(&config.l2_rpc_url, network.l2_chain_id)
                        .await?;
                scan_kind(l2_provider, network, event, Layer::L2, from, to, &metrics).await?;
            } else {
                scan_kind(l1_provider, network, event, Layer::L1, from, to, &metrics).await?;
            }
        }
        Command::Watch { event, l2 } => {
            if l2 {
                let l2_provider =
                    client::create_checked_provider(&config.l2_rpc_url, network.l2_chain_id)
                        .await?;
                watch_kind(l2_provider, network, event, Layer::L2, &metrics).await?;
            } else {
                watch_kind(l1_provider, network, event, Layer::L1, &metrics).await?;
            }
        }
        Command::VerifyBlocks {
            max_blocks,
            private_key,
        } => {
            let wallet_provider = client::create_wallet_provider(&config.l1_rpc_url, &private_key)?;
            client::ensure_chain_id(&wallet_provider, network.l1_chain_id).await?;

            let tx_hash =
                protocol::verify::verify_blocks(wallet_provider, network.l1.taiko_l1, max_blocks)
                    .await?;
            println!("{tx_hash}");
        }
        Command::Abi { contract } => print_abi(&contract)?,
    }

    Ok(())
}
