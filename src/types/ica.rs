/*!
   Identity of a registered interchain account.
*/

use core::fmt::{self, Display};

/**
   An account on the host chain controlled remotely through a connection
   on the controller chain. Created once by the registration phase and
   read-only afterwards.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterchainAccount {
    /// Bech32 address of the account on the host chain.
    pub address: String,

    /// Connection on the controller chain that controls the account.
    pub connection_id: String,
}

impl InterchainAccount {
    pub fn new(address: &str, connection_id: &str) -> Self {
        Self {
            address: address.to_string(),
            connection_id: connection_id.to_string(),
        }
    }
}

impl Display for InterchainAccount {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}@{}", self.address, self.connection_id)
    }
}
