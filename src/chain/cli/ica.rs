/*!
   Commands for registering and querying the interchain account of the
   controller chain's envoy module.
*/

use eyre::eyre;
use serde_json as json;

use crate::chain::cli::check_result_code;
use crate::chain::exec::simple_exec;
use crate::error::{handle_generic_error, Error};
use crate::types::ica::InterchainAccount;

/// Register a new interchain account over the given connection.
pub fn register_interchain_account(
    chain_id: &str,
    command_path: &str,
    from: &str,
    connection_id: &str,
) -> Result<(), Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &[
            "tx",
            "envoy",
            "register-account",
            connection_id,
            "--from",
            from,
            "--gas",
            "auto",
            "--gas-adjustment",
            "1.4",
            "--output",
            "json",
            "--yes",
        ],
    )?
    .stdout;

    check_result_code(&res)?;

    Ok(())
}

/// List every registered interchain account.
pub fn query_interchain_accounts(
    chain_id: &str,
    command_path: &str,
) -> Result<Vec<InterchainAccount>, Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &["q", "envoy", "accounts", "--output", "json"],
    )?
    .stdout;

    let json_res = json::from_str::<json::Value>(&res).map_err(handle_generic_error)?;

    let accounts = json_res
        .get("accounts")
        .and_then(|accounts| accounts.as_array())
        .ok_or_else(|| eyre!("expected `accounts` list field"))?;

    accounts.iter().map(parse_account).collect()
}

/**
   Query the single interchain account registered over the given
   connection.
*/
pub fn query_interchain_account(
    chain_id: &str,
    command_path: &str,
    connection_id: &str,
) -> Result<InterchainAccount, Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &["q", "envoy", "account", connection_id, "--output", "json"],
    )?
    .stdout;

    let json_res = json::from_str::<json::Value>(&res).map_err(handle_generic_error)?;

    let account = json_res
        .get("account")
        .ok_or_else(|| eyre!("expected `account` field"))?;

    parse_account(account)
}

fn parse_account(account: &json::Value) -> Result<InterchainAccount, Error> {
    let address = account
        .get("address")
        .and_then(|address| address.as_str())
        .ok_or_else(|| eyre!("expected `address` string field"))?;

    // The connection sits in the controller-side chain info of the
    // account entry.
    let connection_id = account
        .get("controller")
        .and_then(|controller| controller.get("connection_id"))
        .and_then(|connection_id| connection_id.as_str())
        .unwrap_or_default();

    Ok(InterchainAccount::new(address, connection_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_account_entry_with_controller_info() {
        let entry = json::json!({
            "address": "wasm1ica",
            "controller": { "client_id": "07-tendermint-0", "connection_id": "connection-0" },
            "host": { "client_id": "07-tendermint-0", "connection_id": "connection-0" },
        });

        let account = parse_account(&entry).unwrap();
        assert_eq!(account.address, "wasm1ica");
        assert_eq!(account.connection_id, "connection-0");
    }

    #[test]
    fn rejects_entry_without_address() {
        let entry = json::json!({ "controller": {} });
        assert!(parse_account(&entry).is_err());
    }
}
