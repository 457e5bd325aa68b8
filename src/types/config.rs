/*!
   Immutable configuration for a harness run.
*/

use std::path::PathBuf;

use crate::util::retry::RetryPolicy;

/**
   Test configuration read from environment variables by
   [`init_test`](crate::bootstrap::init::init_test).

   The configuration is built once at the start of a run and shared
   read-only by every phase.
*/
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Path to the controller chain CLI. Defaults to `marsd`.
    pub chain_a_command_path: String,

    /// Path to the host chain CLI. Defaults to `wasmd`.
    pub chain_b_command_path: String,

    pub chain_a_id: String,

    pub chain_b_id: String,

    /// Path to the relayer CLI. Defaults to `hermes`.
    pub relayer_command_path: String,

    /// Directory holding the log files of this run's spawned processes.
    pub chain_store_dir: PathBuf,

    /// Connection on the controller chain over which the interchain
    /// account is registered.
    pub connection_id: String,

    /// Transfer channel between the two chains.
    pub channel_id: String,

    pub transfer_port: String,

    /// Key name used to vote on governance proposals.
    pub validator_wallet: String,

    /// Key name used to submit transactions and proposals.
    pub user_wallet: String,

    /// Address of the contract on the host chain whose ownership is
    /// transferred to the interchain account.
    pub contract_address: String,

    /// Governance proposal file sending funds to the interchain account.
    pub funds_proposal_path: PathBuf,

    /// Governance proposal file carrying the remote contract messages.
    pub messages_proposal_path: PathBuf,

    /// Retry policy shared by every polled expectation in the run.
    pub retry_policy: RetryPolicy,

    /// Suspend the harness instead of tearing down when a phase fails,
    /// keeping the chains and the relayer alive for inspection.
    pub hang_on_fail: bool,
}
