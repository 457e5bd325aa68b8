/*!
   The end-to-end scenario: bootstrap followed by the three ordered
   phases, each gated on the polled effects of the previous one.
*/

use std::path::Path;

use eyre::eyre;
use tracing::{error, info};

use crate::bootstrap::deployment::{boot_interchain_deployment, InterchainDeployment};
use crate::chain::driver::ChainDriver;
use crate::error::Error;
use crate::types::config::TestConfig;
use crate::types::proposal::{ProposalId, ProposalStatus};
use crate::util::retry::retry_until;
use crate::util::suspend::suspend;

pub mod fund;
pub mod register;
pub mod remote;

use fund::fund_interchain_account;
use register::register_interchain_account;
use remote::transfer_contract_ownership;

/**
   Run the whole scenario: bootstrap the deployment, register the
   interchain account, fund it through governance, and make it accept a
   contract ownership transfer through a second governance proposal.

   Every spawned daemon is terminated before this returns, on success
   and failure alike. The only exception is `hang_on_fail`: when a
   phase fails with it set, the harness suspends with the deployment
   alive so that the failure can be inspected.
*/
pub fn run_interchain_workflow(config: &TestConfig) -> Result<(), Error> {
    let mut deployment = boot_interchain_deployment(config)?;

    let result = run_phases(config, &deployment);

    if let Err(e) = &result {
        error!("scenario failed: {}", e);

        if config.hang_on_fail {
            suspend()
        }
    }

    deployment.processes.shutdown_all();

    result
}

fn run_phases(config: &TestConfig, deployment: &InterchainDeployment) -> Result<(), Error> {
    let account = register_interchain_account(config, deployment)?;

    fund_interchain_account(config, deployment, &account)?;

    transfer_contract_ownership(config, deployment, &account)?;

    info!("scenario completed successfully");

    Ok(())
}

/**
   Submit a governance proposal from the configured user wallet, wait
   for it to appear, vote yes on it from the validator wallet, and wait
   for it to pass.

   The proposal identifier is captured from the listing rather than
   assumed: the listing must grow past its pre-submission size, and the
   newest entry is the submitted proposal. Voting is a one-shot command
   since the proposal is known to exist by then.
*/
pub fn pass_gov_proposal(
    config: &TestConfig,
    chain: &ChainDriver,
    proposal_file: &Path,
) -> Result<ProposalId, Error> {
    let proposal_file = proposal_file
        .to_str()
        .ok_or_else(|| eyre!("proposal file path is not valid UTF-8"))?;

    // The listing command fails on a chain that has no proposals yet,
    // which counts as an empty listing here.
    let previous_count = chain
        .query_proposals()
        .map(|proposals| proposals.len())
        .unwrap_or(0);

    chain.submit_gov_proposal(&config.user_wallet, proposal_file)?;

    let proposals = retry_until(
        "submitted proposal appears in the listing",
        &config.retry_policy,
        || {
            let proposals = chain.query_proposals()?;
            if proposals.len() > previous_count {
                Ok(proposals)
            } else {
                Err(Error::assertion(format!(
                    "expected more than {} proposal(s), found {}",
                    previous_count,
                    proposals.len()
                )))
            }
        },
    )?;

    let proposal_id = proposals
        .last()
        .map(|proposal| proposal.id)
        .ok_or_else(|| eyre!("proposal listing is empty after growing"))?;

    info!("voting on proposal {}", proposal_id);

    chain.vote_proposal(&config.validator_wallet, proposal_id)?;

    chain.assert_eventual_proposal_status(
        proposal_id,
        ProposalStatus::Passed,
        &config.retry_policy,
    )?;

    Ok(proposal_id)
}
