/*!
   Scenario phase: transfer contract ownership to the interchain
   account through a governance-submitted remote message.
*/

use serde_json::json;
use tracing::info;

use crate::bootstrap::deployment::InterchainDeployment;
use crate::error::Error;
use crate::types::config::TestConfig;
use crate::types::ica::InterchainAccount;
use crate::types::ownership::ContractOwnership;
use crate::util::assert::{assert_eq, assert_not_eq};
use crate::util::retry::retry_until;
use crate::workflow::pass_gov_proposal;

/**
   Initiate a transfer of the contract's ownership to the interchain
   account on the host chain, then pass the governance proposal whose
   remote messages make the interchain account accept it.

   The contract's `pending_owner` field brackets the remote execution:
   it becomes the interchain account when the transfer is initiated and
   returns to null once the acceptance has been relayed and executed.
*/
pub fn transfer_contract_ownership(
    config: &TestConfig,
    deployment: &InterchainDeployment,
    account: &InterchainAccount,
) -> Result<(), Error> {
    let chain_a = &deployment.chain_a;
    let chain_b = &deployment.chain_b;
    let contract = &config.contract_address;

    let transfer_msg = json!({
        "update_ownership": {
            "transfer_ownership": {
                "new_owner": account.address,
            },
        },
    });

    let ownership_query = json!({ "ownership": {} });

    chain_b.execute_wasm_contract(contract, &transfer_msg, &config.user_wallet)?;

    retry_until(
        "contract ownership transfer is pending",
        &config.retry_policy,
        || {
            let ownership = chain_b.query_contract_ownership(contract, &ownership_query)?;
            assert_not_eq("pending owner is set", &ownership.pending_owner, &None)
        },
    )?;

    let pending: ContractOwnership =
        chain_b.query_contract_ownership(contract, &ownership_query)?;

    assert_eq(
        "ownership is pending for the interchain account",
        &pending.pending_owner,
        &Some(account.address.clone()),
    )?;

    pass_gov_proposal(config, chain_a, &config.messages_proposal_path)?;

    retry_until(
        "remote acceptance clears the pending owner",
        &config.retry_policy,
        || {
            let ownership = chain_b.query_contract_ownership(contract, &ownership_query)?;
            assert_eq("pending owner is cleared", &ownership.pending_owner, &None)
        },
    )?;

    let current = chain_b.query_contract_ownership(contract, &ownership_query)?;

    assert_eq(
        "the previous pending owner became the owner",
        &current.owner,
        &pending.pending_owner,
    )?;

    assert_eq(
        "the interchain account owns the contract",
        &current.owner,
        &Some(account.address.clone()),
    )?;

    assert_eq(
        "no transfer is left pending",
        &current.pending_owner,
        &None,
    )?;

    info!(
        "contract {} ownership transferred to interchain account {}",
        contract, account.address
    );

    Ok(())
}
