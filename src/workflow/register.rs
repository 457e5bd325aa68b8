/*!
   Scenario phase: register the interchain account.
*/

use tracing::info;

use crate::bootstrap::deployment::InterchainDeployment;
use crate::error::Error;
use crate::types::config::TestConfig;
use crate::types::ica::InterchainAccount;
use crate::util::assert::{assert_eq, assert_non_empty};
use crate::util::retry::retry_until;

/**
   Submit the registration transaction over the configured connection
   and wait for the account to appear in the module's account listing.

   The address reported by the single-account query must agree with the
   first entry of the listing; the two query shapes serve the same data.
*/
pub fn register_interchain_account(
    config: &TestConfig,
    deployment: &InterchainDeployment,
) -> Result<InterchainAccount, Error> {
    let chain_a = &deployment.chain_a;

    chain_a.register_interchain_account(&config.user_wallet, &config.connection_id)?;

    let accounts = retry_until(
        "interchain account is registered",
        &config.retry_policy,
        || {
            let accounts = chain_a.query_interchain_accounts()?;
            assert_non_empty("registered interchain accounts", &accounts)?;
            Ok(accounts)
        },
    )?;

    let queried = chain_a.query_interchain_account(&config.connection_id)?;

    assert_eq(
        "single-account query agrees with the account listing",
        &queried.address,
        &accounts[0].address,
    )?;

    let account = InterchainAccount::new(&queried.address, &config.connection_id);

    info!("registered interchain account {}", account);

    Ok(account)
}
