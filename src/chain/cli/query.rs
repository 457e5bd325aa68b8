/*!
   Bank and IBC transfer queries.
*/

use eyre::eyre;
use serde_json as json;

use crate::chain::exec::simple_exec;
use crate::error::{handle_generic_error, Error};
use crate::types::coin::Coin;

/// Query all balances held by the given address.
pub fn query_balances(
    chain_id: &str,
    command_path: &str,
    address: &str,
) -> Result<Vec<Coin>, Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &["q", "bank", "balances", address, "--output", "json"],
    )?
    .stdout;

    let json_res = json::from_str::<json::Value>(&res).map_err(handle_generic_error)?;

    let balances = json_res
        .get("balances")
        .ok_or_else(|| eyre!("expected `balances` field"))?;

    json::from_value(balances.clone()).map_err(handle_generic_error)
}

/**
   Resolve the base denomination behind a hashed IBC voucher
   denomination.
*/
pub fn query_denom_trace(
    chain_id: &str,
    command_path: &str,
    denom_hash: &str,
) -> Result<String, Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &[
            "q",
            "ibc-transfer",
            "denom-trace",
            denom_hash,
            "--output",
            "json",
        ],
    )?
    .stdout;

    let json_res = json::from_str::<json::Value>(&res).map_err(handle_generic_error)?;

    let base_denom = json_res
        .get("denom_trace")
        .and_then(|denom_trace| denom_trace.get("base_denom"))
        .and_then(|base_denom| base_denom.as_str())
        .ok_or_else(|| eyre!("expected `denom_trace.base_denom` field"))?;

    Ok(base_denom.to_string())
}

/**
   Compute the escrow address holding the locked funds for the given
   transfer channel. The command prints the bare address.
*/
pub fn query_escrow_address(
    chain_id: &str,
    command_path: &str,
    port_id: &str,
    channel_id: &str,
) -> Result<String, Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &["q", "ibc-transfer", "escrow-address", port_id, channel_id],
    )?
    .stdout;

    Ok(res.trim().to_string())
}
