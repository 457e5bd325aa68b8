/*!
   Ownership state of the contract targeted by the remote message phase.
*/

use serde::Deserialize;

/**
   Result of the contract's `{"ownership": {}}` query. Both fields are
   nullable on the wire; `pending_owner` is set while a transfer awaits
   acceptance by the new owner.
*/
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractOwnership {
    pub owner: Option<String>,
    pub pending_owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_pending_transfer() {
        let ownership: ContractOwnership = serde_json::from_str(
            r#"{"owner": "wasm1owner", "pending_owner": "wasm1next", "pending_expiry": null}"#,
        )
        .unwrap();

        assert_eq!(ownership.owner.as_deref(), Some("wasm1owner"));
        assert_eq!(ownership.pending_owner.as_deref(), Some("wasm1next"));
    }

    #[test]
    fn missing_pending_owner_is_null() {
        let ownership: ContractOwnership =
            serde_json::from_str(r#"{"owner": "wasm1owner", "pending_owner": null}"#).unwrap();

        assert_eq!(ownership.pending_owner, None);
    }
}
