/*!
   Raw CLI invocations against the chain binaries. Each function maps
   to a single command of the daemon's command-line interface.
*/

use eyre::eyre;
use serde_json as json;

use crate::error::{handle_generic_error, Error};

pub mod bootstrap;
pub mod ica;
pub mod proposal;
pub mod query;
pub mod wasm;

/**
   Check that a broadcast command was accepted, by ensuring that the
   JSON emitted contains a `code` integer field set to 0. A rejected
   transaction surfaces its `raw_log`.
*/
pub(crate) fn check_result_code(res: &str) -> Result<(), Error> {
    let json_res = json::from_str::<json::Value>(res).map_err(handle_generic_error)?;

    let code = json_res
        .get("code")
        .ok_or_else(|| eyre!("expected `code` field"))?
        .as_i64()
        .ok_or_else(|| eyre!("expected integer field"))?;

    if code == 0 {
        Ok(())
    } else {
        let raw_log = json_res
            .get("raw_log")
            .ok_or_else(|| eyre!("expected `raw_log` field"))?
            .as_str()
            .ok_or_else(|| eyre!("expected string field"))?;

        Err(Error::generic(eyre!("{}", raw_log)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_result_code() {
        assert!(check_result_code(r#"{"code": 0, "txhash": "AB12"}"#).is_ok());
    }

    #[test]
    fn rejects_non_zero_result_code() {
        assert!(check_result_code(r#"{"code": 5, "raw_log": "out of gas"}"#).is_err());
    }

    #[test]
    fn rejects_output_without_code_field() {
        assert!(check_result_code(r#"{"txhash": "AB12"}"#).is_err());
    }
}
