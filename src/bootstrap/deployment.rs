/*!
   Bootstrapping of the two-chain deployment the scenario runs against.
*/

use tracing::info;

use crate::chain::driver::ChainDriver;
use crate::error::Error;
use crate::relayer::driver::RelayerDriver;
use crate::types::config::TestConfig;
use crate::types::registry::ProcessRegistry;

/// Minimum number of blocks each chain must have produced before the
/// scenario proceeds.
const MIN_BLOCK_HEIGHT: u64 = 3;

/**
   The running deployment: both chain drivers, the relayer driver, and
   the registry owning every spawned daemon.

   Dropping the deployment tears down all registered processes, so a
   run can never leak daemons regardless of how it ends.
*/
pub struct InterchainDeployment {
    pub chain_a: ChainDriver,
    pub chain_b: ChainDriver,
    pub relayer: RelayerDriver,
    pub processes: ProcessRegistry,
}

/**
   Start both chain daemons, wait for them to produce blocks, create
   the transfer channel between them, and start the relayer.

   Channel creation runs one-shot and is not retried; at that point
   both chains are known to be live, so a failure is fatal to the run.
   If bootstrapping fails midway, the partially filled registry is
   dropped and the daemons started so far are terminated.
*/
pub fn boot_interchain_deployment(config: &TestConfig) -> Result<InterchainDeployment, Error> {
    let chain_a = ChainDriver::new(
        &config.chain_a_command_path,
        &config.chain_a_id,
        config.chain_store_dir.clone(),
    );

    let chain_b = ChainDriver::new(
        &config.chain_b_command_path,
        &config.chain_b_id,
        config.chain_store_dir.clone(),
    );

    let relayer = RelayerDriver::new(
        &config.relayer_command_path,
        config.chain_store_dir.clone(),
    );

    let mut processes = ProcessRegistry::new();

    info!("starting chain {}", chain_a.chain_id);
    processes.register(chain_a.start()?);

    info!("starting chain {}", chain_b.chain_id);
    processes.register(chain_b.start()?);

    chain_a.wait_for_block_height(MIN_BLOCK_HEIGHT, &config.retry_policy)?;
    chain_b.wait_for_block_height(MIN_BLOCK_HEIGHT, &config.retry_policy)?;

    info!(
        "creating channel between {} and {}",
        chain_a.chain_id, chain_b.chain_id
    );

    relayer.create_channel(
        &chain_a.chain_id,
        &config.transfer_port,
        &chain_b.chain_id,
        &config.transfer_port,
    )?;

    info!("starting relayer");
    processes.register(relayer.start()?);

    Ok(InterchainDeployment {
        chain_a,
        chain_b,
        relayer,
        processes,
    })
}
