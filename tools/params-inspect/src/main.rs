//! CLI for inspecting TNET chain parameters
//!
//! This tool allows:
//! - Verifying every built-in parameter set at startup
//! - Dumping the selected network's parameters (text or JSON)
//! - Listing checkpoints and deployment windows
//! - Overriding regtest deployment windows

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tnet_params::{ChainParams, DeploymentPos, NetworkType, ParamsRegistry};
use tnet_primitives::Encodable;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "params-inspect")]
#[command(about = "TNET chain parameter inspector", long_about = None)]
struct Cli {
    /// Network to select (main, test, regtest)
    #[arg(short, long, env = "TNET_NETWORK", default_value = "main", global = true)]
    network: String,

    /// Override a regtest deployment window, as name:start:timeout
    #[arg(long = "vbparams", global = true)]
    vbparams: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the selected network's parameters
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the genesis block
    Genesis {
        /// Print the serialized block as hex
        #[arg(long)]
        raw: bool,
    },

    /// List checkpoints
    Checkpoints,

    /// List deployment windows
    Deployments,

    /// Rebuild and verify every network's parameters
    Verify,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut registry = match ParamsRegistry::new() {
        Ok(registry) => registry,
        Err(e) if e.is_fatal() => {
            error!("Built-in chain parameters are corrupt: {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to build chain parameters"),
    };

    registry
        .select_network(&cli.network)
        .with_context(|| format!("Cannot select network '{}'", cli.network))?;

    for value in &cli.vbparams {
        apply_vbparams(&mut registry, value)?;
    }

    let params = registry.current();

    match cli.command {
        Commands::Show { json } => {
            if json {
                println!("{}", params.to_json_pretty()?);
            } else {
                print_summary(params);
            }
        }
        Commands::Genesis { raw } => print_genesis(params, raw),
        Commands::Checkpoints => print_checkpoints(params),
        Commands::Deployments => print_deployments(params),
        Commands::Verify => run_verify(&registry)?,
    }

    Ok(())
}

fn apply_vbparams(registry: &mut ParamsRegistry, value: &str) -> anyhow::Result<()> {
    if registry.selected_network() != Some(NetworkType::Regtest) {
        bail!("Deployment windows may only be overridden on regtest");
    }

    let parts: Vec<&str> = value.split(':').collect();
    let [name, start, timeout] = parts.as_slice() else {
        bail!("Deployment override must be name:start:timeout, got '{}'", value);
    };

    let Some(pos) = DeploymentPos::ALL.into_iter().find(|pos| pos.name() == *name) else {
        bail!("Unknown deployment '{}'", name);
    };
    let start: i64 = start
        .parse()
        .with_context(|| format!("Invalid start time '{}'", start))?;
    let timeout: i64 = timeout
        .parse()
        .with_context(|| format!("Invalid timeout '{}'", timeout))?;

    registry.update_regtest_deployment(pos, start, timeout);
    info!(
        "Deployment {} window overridden: start {}, timeout {}",
        pos.name(),
        start,
        timeout
    );
    Ok(())
}

fn print_summary(params: &ChainParams) {
    let consensus = &params.consensus;
    println!("Network:            {}", params.network);
    println!("Genesis:            {}", params.genesis_hash());
    println!("Default port:       {}", params.default_port);
    println!("Message start:      {}", hex::encode(params.message_start));
    println!("Cash message start: {}", hex::encode(params.cash_message_start));
    println!("Halving interval:   {}", consensus.subsidy_halving_interval);
    println!("UAHF height:        {}", consensus.uahf_height);
    println!("One-minute height:  {}", consensus.one_minute_block_height);
    println!("Blake2b PoW height: {}", consensus.pow_blake2_height);
    println!("PoW limit:          {}", consensus.pow_limit);
    println!("Minimum chain work: {}", consensus.minimum_chain_work);
    println!("Checkpoints:        {}", params.checkpoints.len());
    println!("DNS seeds:          {}", params.dns_seeds.len());
    println!("Require standard:   {}", params.require_standard);
    println!("Mine on demand:     {}", params.mine_blocks_on_demand);
}

fn print_genesis(params: &ChainParams, raw: bool) {
    let genesis = params.genesis();
    if raw {
        println!("{}", hex::encode(genesis.consensus_bytes()));
        return;
    }
    println!("Hash:        {}", genesis.hash());
    println!("Merkle root: {}", genesis.header.merkle_root);
    println!("Time:        {}", genesis.header.time);
    println!("Nonce:       {}", genesis.header.nonce);
    println!("Bits:        {:#010x}", genesis.header.bits);
    println!("Version:     {}", genesis.header.version);
    println!("Reward:      {}", genesis.transactions[0].outputs[0].value);
}

fn print_checkpoints(params: &ChainParams) {
    for checkpoint in params.checkpoints.checkpoints() {
        println!("{:>8}  {}", checkpoint.height, checkpoint.hash);
    }
}

fn print_deployments(params: &ChainParams) {
    for (pos, deployment) in params.consensus.deployments.iter() {
        let start = deployment
            .start_datetime()
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| deployment.start_time.to_string());
        let timeout = deployment
            .timeout_datetime()
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| deployment.timeout.to_string());
        println!(
            "{:<10} bit {:>2}  {} -> {}",
            pos.name(),
            deployment.bit,
            start,
            timeout
        );
    }
}

fn run_verify(registry: &ParamsRegistry) -> anyhow::Result<()> {
    for network in NetworkType::ALL {
        let params = registry.get(network);
        verify_params(params).with_context(|| format!("{} parameters failed verification", network))?;
        info!(
            "{}: genesis {} rehashed, {} checkpoints, {} deployments well formed",
            network,
            params.genesis_hash(),
            params.checkpoints.len(),
            params.consensus.deployments.iter().count()
        );
    }
    Ok(())
}

fn verify_params(params: &ChainParams) -> anyhow::Result<()> {
    let genesis = params.genesis();
    if genesis.hash() != *params.genesis_hash() {
        bail!(
            "genesis block hashes to {}, expected {}",
            genesis.hash(),
            params.genesis_hash()
        );
    }
    if !genesis.has_valid_merkle_root() {
        bail!("genesis merkle root {} does not commit to its coinbase", genesis.header.merkle_root);
    }
    params.checkpoints.check_genesis(params.genesis_hash())?;

    let deployments = &params.consensus.deployments;
    if !deployments.has_unique_bits() {
        bail!("two deployments share a version bit");
    }
    for (pos, deployment) in deployments.iter() {
        if !deployment.is_well_formed() {
            bail!(
                "deployment {} is malformed: bit {}, start {}, timeout {}",
                pos.name(),
                deployment.bit,
                deployment.start_time,
                deployment.timeout
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_params_verify() {
        let registry = ParamsRegistry::new().unwrap();
        assert!(run_verify(&registry).is_ok());
    }

    #[test]
    fn test_malformed_deployment_fails_verify() {
        let mut registry = ParamsRegistry::new().unwrap();
        registry.select_network("regtest").unwrap();
        apply_vbparams(&mut registry, "csv:10:5").unwrap();

        let err = run_verify(&registry).unwrap_err();
        assert!(format!("{:#}", err).contains("deployment csv is malformed"));
    }

    #[test]
    fn test_vbparams_rejected_off_regtest() {
        let mut registry = ParamsRegistry::new().unwrap();
        registry.select_network("main").unwrap();
        assert!(apply_vbparams(&mut registry, "csv:0:1").is_err());
    }

    #[test]
    fn test_vbparams_parse_errors() {
        let mut registry = ParamsRegistry::new().unwrap();
        registry.select_network("regtest").unwrap();
        assert!(apply_vbparams(&mut registry, "csv:0").is_err());
        assert!(apply_vbparams(&mut registry, "segwit:0:1").is_err());
        assert!(apply_vbparams(&mut registry, "csv:zero:1").is_err());
    }
}
