use serde::Deserialize;

/// One cross-chain transfer event as reported by the transactions API.
///
/// `amount` stays a string in base units; it is only parsed when totals are
/// computed. Timestamps are opaque and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub nonce: i64,
    pub txn_type: String,
    pub burn_hash: String,
    pub mint_hash: Option<String>,
    pub transfer_hash: String,
    pub from: String,
    pub destination: String,
    pub minter: Option<String>,
    pub from_network: String,
    pub destination_network: String,
    pub amount: String,
    pub denom: String,
    pub status: String,
    pub timestamp: String,
    pub created_at: String,
    pub details: Option<String>,
    pub destination_timestamp: String,
}

/// Response body of one page request.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub resources: Vec<Transaction>,
    // Reported by the API but never used to decide when to stop paging.
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub count: Option<i64>,
}

/// Builds a fully populated transaction for tests.
#[cfg(test)]
pub(crate) fn sample_transaction(id: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        nonce: 7,
        txn_type: "MAINNET".to_string(),
        burn_hash: format!("0xburn-{id}"),
        mint_hash: Some(format!("0xmint-{id}")),
        transfer_hash: format!("0xtransfer-{id}"),
        from: "noble1sender".to_string(),
        destination: "0xreceiver".to_string(),
        minter: Some("0xminter".to_string()),
        from_network: "noble".to_string(),
        destination_network: "ethereum".to_string(),
        amount: "1000000".to_string(),
        denom: "uusdc".to_string(),
        status: "succeeded".to_string(),
        timestamp: "2024-03-04T10:00:00Z".to_string(),
        created_at: "2024-03-04T10:00:01Z".to_string(),
        details: Some("relayed, fee paid".to_string()),
        destination_timestamp: "2024-03-04T10:05:00Z".to_string(),
    }
}
