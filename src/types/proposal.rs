/*!
   Governance proposal identifiers and statuses.
*/

use core::fmt::{self, Display};
use core::str::FromStr;

use eyre::eyre;

use crate::error::Error;

pub type ProposalId = u64;

/**
   Status of a governance proposal as reported by the gov query
   endpoints. Statuses only ever progress forward within a run.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalStatus {
    DepositPeriod,
    VotingPeriod,
    Passed,
    Rejected,
    Failed,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DepositPeriod => "PROPOSAL_STATUS_DEPOSIT_PERIOD",
            Self::VotingPeriod => "PROPOSAL_STATUS_VOTING_PERIOD",
            Self::Passed => "PROPOSAL_STATUS_PASSED",
            Self::Rejected => "PROPOSAL_STATUS_REJECTED",
            Self::Failed => "PROPOSAL_STATUS_FAILED",
        }
    }
}

impl FromStr for ProposalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "PROPOSAL_STATUS_DEPOSIT_PERIOD" => Ok(Self::DepositPeriod),
            "PROPOSAL_STATUS_VOTING_PERIOD" => Ok(Self::VotingPeriod),
            "PROPOSAL_STATUS_PASSED" => Ok(Self::Passed),
            "PROPOSAL_STATUS_REJECTED" => Ok(Self::Rejected),
            "PROPOSAL_STATUS_FAILED" => Ok(Self::Failed),
            _ => Err(Error::generic(eyre!("unknown proposal status: {}", s))),
        }
    }
}

impl Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

/**
   One entry of the proposal listing, as much of it as the harness needs.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalSummary {
    pub id: ProposalId,
    pub status: ProposalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_statuses() {
        assert_eq!(
            "PROPOSAL_STATUS_PASSED".parse::<ProposalStatus>().unwrap(),
            ProposalStatus::Passed
        );
        assert_eq!(
            "PROPOSAL_STATUS_VOTING_PERIOD"
                .parse::<ProposalStatus>()
                .unwrap(),
            ProposalStatus::VotingPeriod
        );
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("PROPOSAL_STATUS_BOGUS".parse::<ProposalStatus>().is_err());
    }

    #[test]
    fn round_trips_through_display() {
        let status = ProposalStatus::Passed;
        assert_eq!(status.to_string().parse::<ProposalStatus>().unwrap(), status);
    }
}
