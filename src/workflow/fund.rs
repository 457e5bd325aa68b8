/*!
   Scenario phase: fund the interchain account through governance.
*/

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::bootstrap::deployment::InterchainDeployment;
use crate::error::{handle_generic_error, Error};
use crate::types::coin::Coin;
use crate::types::config::TestConfig;
use crate::types::ica::InterchainAccount;
use crate::util::assert::{assert_eq, assert_non_empty};
use crate::util::retry::retry_until;
use crate::workflow::pass_gov_proposal;

/**
   Submit the funding proposal, vote it through, and wait for the
   transferred funds to arrive on the host chain. The arrived balances
   must reconstruct the proposal's requested funds exactly under
   denom-trace resolution, and the escrow account on the controller
   chain must hold the locked counterpart.
*/
pub fn fund_interchain_account(
    config: &TestConfig,
    deployment: &InterchainDeployment,
    account: &InterchainAccount,
) -> Result<(), Error> {
    let chain_a = &deployment.chain_a;
    let chain_b = &deployment.chain_b;

    pass_gov_proposal(config, chain_a, &config.funds_proposal_path)?;

    let delivered = retry_until(
        "funds arrive on the host chain",
        &config.retry_policy,
        || {
            let balances = chain_b.query_balances(&account.address)?;
            assert_non_empty("host chain balances of the interchain account", &balances)?;
            Ok(balances)
        },
    )?;

    let escrow_address =
        chain_a.query_escrow_address(&config.transfer_port, &config.channel_id)?;

    let escrow_balances = chain_a.query_balances(&escrow_address)?;

    assert_non_empty("escrow account balances on the controller chain", &escrow_balances)?;

    let requested = read_requested_funds(&config.funds_proposal_path)?;

    verify_transferred_funds(&requested, &delivered, |hash| {
        chain_b.query_denom_trace(hash)
    })?;

    info!(
        "interchain account {} funded with {} coin(s)",
        account.address,
        delivered.len()
    );

    Ok(())
}

/**
   Read the funds requested by the proposal file: the `amount` list of
   its first message.
*/
pub fn read_requested_funds(path: &Path) -> Result<Vec<Coin>, Error> {
    #[derive(Deserialize)]
    struct ProposalFile {
        messages: Vec<ProposalMessage>,
    }

    #[derive(Deserialize)]
    struct ProposalMessage {
        #[serde(default)]
        amount: Vec<Coin>,
    }

    let content = fs::read_to_string(path)?;

    let proposal: ProposalFile = serde_json::from_str(&content).map_err(handle_generic_error)?;

    Ok(proposal
        .messages
        .into_iter()
        .next()
        .map(|message| message.amount)
        .unwrap_or_default())
}

/**
   Check that the balances delivered on the host chain reconstruct the
   requested funds: same number of entries, and every delivered coin's
   base denomination and amount must match some requested coin.

   The base denomination behind a delivered `ibc/<hash>` voucher is
   recovered through `resolve_base_denom`, backed by a denom-trace
   query in the live scenario.
*/
pub fn verify_transferred_funds(
    requested: &[Coin],
    delivered: &[Coin],
    mut resolve_base_denom: impl FnMut(&str) -> Result<String, Error>,
) -> Result<(), Error> {
    assert_eq(
        "delivered balance count matches requested funds",
        &delivered.len(),
        &requested.len(),
    )?;

    for coin in delivered {
        let hash = coin.ibc_hash().ok_or_else(|| {
            Error::assertion(format!(
                "expected an ibc voucher denomination, got {}",
                coin.denom
            ))
        })?;

        let base_denom = resolve_base_denom(hash)?;

        let matched = requested
            .iter()
            .any(|requested| requested.denom == base_denom && requested.amount == coin.amount);

        if !matched {
            return Err(Error::assertion(format!(
                "delivered coin {} (base denomination {}) has no matching requested fund",
                coin, base_denom
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorDetail;

    fn resolver<'a>(coin_pairs: &'a [(&'a str, &'a str)]) -> impl FnMut(&str) -> Result<String, Error> + 'a {
        move |hash| {
            coin_pairs
                .iter()
                .find(|(h, _)| *h == hash)
                .map(|(_, denom)| denom.to_string())
                .ok_or_else(|| Error::assertion(format!("no trace for hash {hash}")))
        }
    }

    #[test]
    fn matches_delivered_funds_under_resolution() {
        let requested = vec![Coin::new("umars", "1000000")];
        let delivered = vec![Coin::new("ibc/27394FB0", "1000000")];

        verify_transferred_funds(&requested, &delivered, resolver(&[("27394FB0", "umars")]))
            .unwrap();
    }

    #[test]
    fn rejects_count_mismatch() {
        let requested = vec![
            Coin::new("umars", "1000000"),
            Coin::new("uusd", "500"),
        ];
        let delivered = vec![Coin::new("ibc/27394FB0", "1000000")];

        let err = verify_transferred_funds(
            &requested,
            &delivered,
            resolver(&[("27394FB0", "umars")]),
        )
        .unwrap_err();

        assert!(matches!(err.detail(), ErrorDetail::Assertion(_)));
    }

    #[test]
    fn rejects_amount_mismatch() {
        let requested = vec![Coin::new("umars", "1000000")];
        let delivered = vec![Coin::new("ibc/27394FB0", "999999")];

        assert!(verify_transferred_funds(
            &requested,
            &delivered,
            resolver(&[("27394FB0", "umars")]),
        )
        .is_err());
    }

    #[test]
    fn rejects_non_voucher_denomination() {
        let requested = vec![Coin::new("umars", "1000000")];
        let delivered = vec![Coin::new("umars", "1000000")];

        assert!(
            verify_transferred_funds(&requested, &delivered, resolver(&[])).is_err()
        );
    }

    #[test]
    fn reads_requested_funds_from_proposal_file() {
        let dir = std::env::temp_dir().join(format!(
            "ica-test-framework-{:x}",
            crate::util::random::random_u32()
        ));
        fs::create_dir_all(&dir).unwrap();

        let path = dir.join("send_funds.json");
        fs::write(
            &path,
            r#"{
                "title": "Send funds to the interchain account",
                "messages": [{
                    "@type": "/mars.envoy.v1beta1.MsgSendFunds",
                    "amount": [{"denom": "umars", "amount": "1000000"}]
                }],
                "deposit": "10000000umars"
            }"#,
        )
        .unwrap();

        let funds = read_requested_funds(&path).unwrap();
        assert_eq!(funds, vec![Coin::new("umars", "1000000")]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
