/*!
   Commands for submitting, voting on, and querying governance
   proposals.
*/

use eyre::eyre;
use serde_json as json;

use crate::chain::cli::check_result_code;
use crate::chain::exec::simple_exec;
use crate::error::{handle_generic_error, Error};
use crate::types::proposal::{ProposalId, ProposalStatus, ProposalSummary};

/**
   Submit a governance proposal loaded from the given file. The file is
   an external input to the harness and is passed through verbatim.
*/
pub fn submit_gov_proposal(
    chain_id: &str,
    command_path: &str,
    from: &str,
    proposal_file: &str,
) -> Result<(), Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &[
            "tx",
            "gov",
            "submit-proposal",
            proposal_file,
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

/// Vote yes on the given proposal.
pub fn vote_proposal(
    chain_id: &str,
    command_path: &str,
    from: &str,
    proposal_id: ProposalId,
) -> Result<(), Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &[
            "tx",
            "gov",
            "vote",
            &proposal_id.to_string(),
            "yes",
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

/// List all proposals known to the chain, oldest first.
pub fn query_proposals(
    chain_id: &str,
    command_path: &str,
) -> Result<Vec<ProposalSummary>, Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &["q", "gov", "proposals", "--output", "json"],
    )?
    .stdout;

    let json_res = json::from_str::<json::Value>(&res).map_err(handle_generic_error)?;

    let proposals = json_res
        .get("proposals")
        .and_then(|proposals| proposals.as_array())
        .ok_or_else(|| eyre!("expected `proposals` list field"))?;

    proposals.iter().map(parse_proposal).collect()
}

/// Query the status of a single proposal.
pub fn query_proposal_status(
    chain_id: &str,
    command_path: &str,
    proposal_id: ProposalId,
) -> Result<ProposalStatus, Error> {
    let res = simple_exec(
        chain_id,
        command_path,
        &[
            "q",
            "gov",
            "proposal",
            &proposal_id.to_string(),
            "--output",
            "json",
        ],
    )?
    .stdout;

    let json_res = json::from_str::<json::Value>(&res).map_err(handle_generic_error)?;

    // Depending on the gov API generation, the proposal is either the
    // top-level object or nested under a `proposal` field.
    let proposal = json_res.get("proposal").unwrap_or(&json_res);

    parse_status(proposal)
}

fn parse_proposal(proposal: &json::Value) -> Result<ProposalSummary, Error> {
    // `id` in gov v1, `proposal_id` in v1beta1; both string-encoded.
    let id = proposal
        .get("id")
        .or_else(|| proposal.get("proposal_id"))
        .and_then(|id| id.as_str())
        .ok_or_else(|| eyre!("expected `id` or `proposal_id` string field"))?
        .parse::<ProposalId>()
        .map_err(handle_generic_error)?;

    let status = parse_status(proposal)?;

    Ok(ProposalSummary { id, status })
}

fn parse_status(proposal: &json::Value) -> Result<ProposalStatus, Error> {
    proposal
        .get("status")
        .and_then(|status| status.as_str())
        .ok_or_else(|| eyre!("expected `status` string field"))?
        .parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_v1_proposal_listing() {
        let listing = json::json!({
            "id": "1",
            "status": "PROPOSAL_STATUS_VOTING_PERIOD",
        });

        assert_eq!(
            parse_proposal(&listing).unwrap(),
            ProposalSummary {
                id: 1,
                status: ProposalStatus::VotingPeriod,
            }
        );
    }

    #[test]
    fn parses_v1beta1_proposal_listing() {
        let listing = json::json!({
            "proposal_id": "2",
            "status": "PROPOSAL_STATUS_PASSED",
        });

        assert_eq!(
            parse_proposal(&listing).unwrap(),
            ProposalSummary {
                id: 2,
                status: ProposalStatus::Passed,
            }
        );
    }

    #[test]
    fn rejects_entry_without_id() {
        let listing = json::json!({ "status": "PROPOSAL_STATUS_PASSED" });
        assert!(parse_proposal(&listing).is_err());
    }
}
