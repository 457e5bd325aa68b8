/*!
   Re-export of the types and functions a scenario writer needs.
*/

pub use eyre::eyre;
pub use tracing::{debug, error, info, warn};

pub use crate::bootstrap::deployment::{boot_interchain_deployment, InterchainDeployment};
pub use crate::bootstrap::init::init_test;
pub use crate::chain::driver::ChainDriver;
pub use crate::chain::exec::{exec_with_input, simple_exec, ExecOutput};
pub use crate::error::{handle_exec_error, handle_generic_error, Error};
pub use crate::relayer::driver::RelayerDriver;
pub use crate::types::coin::Coin;
pub use crate::types::config::TestConfig;
pub use crate::types::ica::InterchainAccount;
pub use crate::types::ownership::ContractOwnership;
pub use crate::types::process::ChildProcess;
pub use crate::types::proposal::{ProposalId, ProposalStatus, ProposalSummary};
pub use crate::types::registry::ProcessRegistry;
pub use crate::util::assert::{assert_eq, assert_gt, assert_non_empty, assert_not_eq};
pub use crate::util::retry::{retry_until, RetryPolicy};
pub use crate::util::suspend::suspend;
pub use crate::workflow::{pass_gov_proposal, run_interchain_workflow};
