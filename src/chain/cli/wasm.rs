/*!
   Commands for executing and querying a CosmWasm contract on the host
   chain.
*/

use eyre::eyre;
use serde_json as json;

use crate::chain::cli::check_result_code;
use crate::chain::exec::simple_exec;
use crate::error::{handle_generic_error, Error};

/// Execute a contract call with the given JSON message.
pub fn execute_wasm_contract(
    chain_id: &str,
    command_path: &str,
    contract_address: &str,
    msg: &str,
    from: &str,
) -> Result<(), Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &[
            "tx",
            "wasm",
            "execute",
            contract_address,
            msg,
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

/**
   Run a read-only smart query against the contract and return the
   `data` payload of the response.
*/
pub fn query_wasm_contract_state(
    chain_id: &str,
    command_path: &str,
    contract_address: &str,
    query: &str,
) -> Result<json::Value, Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &[
            "q",
            "wasm",
            "contract-state",
            "smart",
            contract_address,
            query,
            "--output",
            "json",
        ],
    )?
    .stdout;

    let json_res = json::from_str::<json::Value>(&res).map_err(handle_generic_error)?;

    json_res
        .get("data")
        .cloned()
        .ok_or_else(|| Error::from(eyre!("expected `data` field in contract query response")))
}
