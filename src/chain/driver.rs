/*!
   Implementation of [`ChainDriver`].
*/

use std::path::PathBuf;

use serde_json as json;

use crate::chain::cli::bootstrap::{query_block, start_chain};
use crate::chain::cli::ica::{
    query_interchain_account, query_interchain_accounts, register_interchain_account,
};
use crate::chain::cli::proposal::{
    query_proposal_status, query_proposals, submit_gov_proposal, vote_proposal,
};
use crate::chain::cli::query::{query_balances, query_denom_trace, query_escrow_address};
use crate::chain::cli::wasm::{execute_wasm_contract, query_wasm_contract_state};
use crate::error::{handle_generic_error, Error};
use crate::types::coin::Coin;
use crate::types::ica::InterchainAccount;
use crate::types::ownership::ContractOwnership;
use crate::types::process::ChildProcess;
use crate::types::proposal::{ProposalId, ProposalStatus, ProposalSummary};
use crate::util::retry::{retry_until, RetryPolicy};

/**
   A driver for interacting with one chain full node through its command
   line.

   The driver itself is stateless; it is used to spawn the full node
   daemon and to run one-shot transaction and query commands against it.
   All commands rely on the binary's pre-initialized home directory and
   default node address.
*/
#[derive(Debug, Clone)]
pub struct ChainDriver {
    /// The filesystem path to the chain CLI.
    pub command_path: String,

    /// The ID of the chain.
    pub chain_id: String,

    /// Directory receiving the daemon's log files.
    pub store_dir: PathBuf,
}

impl ChainDriver {
    pub fn new(command_path: &str, chain_id: &str, store_dir: PathBuf) -> Self {
        Self {
            command_path: command_path.to_string(),
            chain_id: chain_id.to_string(),
            store_dir,
        }
    }

    /**
       Start the full node by running `start` in the background.

       Returns a [`ChildProcess`] that terminates the full node when the
       value is dropped; callers hand it to the process registry.
    */
    pub fn start(&self) -> Result<ChildProcess, Error> {
        start_chain(&self.chain_id, &self.command_path, &self.store_dir)
    }

    /**
       Wait until the chain has produced at least the given number of
       blocks.
    */
    pub fn wait_for_block_height(&self, height: u64, policy: &RetryPolicy) -> Result<(), Error> {
        retry_until(
            &format!("chain {} reaches block height {}", self.chain_id, height),
            policy,
            || query_block(&self.chain_id, &self.command_path, height),
        )
    }

    pub fn register_interchain_account(
        &self,
        from: &str,
        connection_id: &str,
    ) -> Result<(), Error> {
        register_interchain_account(&self.chain_id, &self.command_path, from, connection_id)
    }

    pub fn query_interchain_accounts(&self) -> Result<Vec<InterchainAccount>, Error> {
        query_interchain_accounts(&self.chain_id, &self.command_path)
    }

    pub fn query_interchain_account(
        &self,
        connection_id: &str,
    ) -> Result<InterchainAccount, Error> {
        query_interchain_account(&self.chain_id, &self.command_path, connection_id)
    }

    pub fn submit_gov_proposal(&self, from: &str, proposal_file: &str) -> Result<(), Error> {
        submit_gov_proposal(&self.chain_id, &self.command_path, from, proposal_file)
    }

    pub fn vote_proposal(&self, from: &str, proposal_id: ProposalId) -> Result<(), Error> {
        vote_proposal(&self.chain_id, &self.command_path, from, proposal_id)
    }

    pub fn query_proposals(&self) -> Result<Vec<ProposalSummary>, Error> {
        query_proposals(&self.chain_id, &self.command_path)
    }

    pub fn query_proposal_status(&self, proposal_id: ProposalId) -> Result<ProposalStatus, Error> {
        query_proposal_status(&self.chain_id, &self.command_path, proposal_id)
    }

    /**
       Wait until the given proposal has reached the expected status.
    */
    pub fn assert_eventual_proposal_status(
        &self,
        proposal_id: ProposalId,
        expected: ProposalStatus,
        policy: &RetryPolicy,
    ) -> Result<(), Error> {
        retry_until(
            &format!(
                "proposal {} on chain {} reaches status {}",
                proposal_id, self.chain_id, expected
            ),
            policy,
            || {
                let status = self.query_proposal_status(proposal_id)?;
                crate::util::assert::assert_eq("proposal status", &status, &expected)
            },
        )
    }

    pub fn query_balances(&self, address: &str) -> Result<Vec<Coin>, Error> {
        query_balances(&self.chain_id, &self.command_path, address)
    }

    pub fn query_denom_trace(&self, denom_hash: &str) -> Result<String, Error> {
        query_denom_trace(&self.chain_id, &self.command_path, denom_hash)
    }

    pub fn query_escrow_address(&self, port_id: &str, channel_id: &str) -> Result<String, Error> {
        query_escrow_address(&self.chain_id, &self.command_path, port_id, channel_id)
    }

    pub fn execute_wasm_contract(
        &self,
        contract_address: &str,
        msg: &json::Value,
        from: &str,
    ) -> Result<(), Error> {
        let msg = json::to_string(msg).map_err(handle_generic_error)?;

        execute_wasm_contract(
            &self.chain_id,
            &self.command_path,
            contract_address,
            &msg,
            from,
        )
    }

    /// Query the ownership state of a contract on this chain.
    pub fn query_contract_ownership(
        &self,
        contract_address: &str,
        query: &json::Value,
    ) -> Result<ContractOwnership, Error> {
        let query = json::to_string(query).map_err(handle_generic_error)?;

        let data = query_wasm_contract_state(
            &self.chain_id,
            &self.command_path,
            contract_address,
            &query,
        )?;

        json::from_value(data).map_err(handle_generic_error)
    }
}
