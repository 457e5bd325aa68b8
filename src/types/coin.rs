/*!
   Denomination and amount pairs as they appear in bank queries and
   proposal files.
*/

use core::fmt::{self, Display};

use serde::Deserialize;

/**
   A single balance entry.

   The amount is kept as the decimal string reported by the chain, so
   comparisons are exact regardless of magnitude.
*/
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: &str, amount: &str) -> Self {
        Self {
            denom: denom.to_string(),
            amount: amount.to_string(),
        }
    }

    /**
       The hash part of an IBC voucher denomination of the form
       `ibc/<hash>`, or `None` for a base denomination.
    */
    pub fn ibc_hash(&self) -> Option<&str> {
        self.denom.split_once('/').map(|(_, hash)| hash)
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ibc_hash_of_voucher_denom() {
        let coin = Coin::new("ibc/27394FB092D2EC", "500");
        assert_eq!(coin.ibc_hash(), Some("27394FB092D2EC"));
    }

    #[test]
    fn base_denom_has_no_hash() {
        let coin = Coin::new("umars", "500");
        assert_eq!(coin.ibc_hash(), None);
    }

    #[test]
    fn deserializes_bank_balance_entries() {
        let balances: Vec<Coin> =
            serde_json::from_str(r#"[{"denom": "umars", "amount": "1000000"}]"#).unwrap();

        assert_eq!(balances, vec![Coin::new("umars", "1000000")]);
    }
}
