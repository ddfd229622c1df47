//! CSV persistence for fetched transactions.
//!
//! Absent optional fields (`MintHash`, `Minter`, `Details`) are written as empty
//! fields and empty fields read back as absent. An optional field that held an
//! empty string therefore comes back as `None`.

use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ReadError, WriteError};
use crate::models::Transaction;

/// Column order of the data file.
pub const COLUMNS: [&str; 18] = [
    "ID",
    "Nonce",
    "TxnType",
    "BurnHash",
    "MintHash",
    "TransferHash",
    "From",
    "Destination",
    "Minter",
    "FromNetwork",
    "DestinationNetwork",
    "Amount",
    "Denom",
    "Status",
    "Timestamp",
    "CreatedAt",
    "Details",
    "DestinationTimestamp",
];

/// Row as written. Field order must follow `COLUMNS`.
#[derive(Serialize)]
struct CsvRowOut<'a> {
    id: &'a str,
    nonce: i64,
    txn_type: &'a str,
    burn_hash: &'a str,
    mint_hash: Option<&'a str>,
    transfer_hash: &'a str,
    from: &'a str,
    destination: &'a str,
    minter: Option<&'a str>,
    from_network: &'a str,
    destination_network: &'a str,
    amount: &'a str,
    denom: &'a str,
    status: &'a str,
    timestamp: &'a str,
    created_at: &'a str,
    details: Option<&'a str>,
    destination_timestamp: &'a str,
}

impl<'a> From<&'a Transaction> for CsvRowOut<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            id: &tx.id,
            nonce: tx.nonce,
            txn_type: &tx.txn_type,
            burn_hash: &tx.burn_hash,
            mint_hash: tx.mint_hash.as_deref(),
            transfer_hash: &tx.transfer_hash,
            from: &tx.from,
            destination: &tx.destination,
            minter: tx.minter.as_deref(),
            from_network: &tx.from_network,
            destination_network: &tx.destination_network,
            amount: &tx.amount,
            denom: &tx.denom,
            status: &tx.status,
            timestamp: &tx.timestamp,
            created_at: &tx.created_at,
            details: tx.details.as_deref(),
            destination_timestamp: &tx.destination_timestamp,
        }
    }
}

/// Row as read, matched by position. Nonce stays text so a bad value can fall back to 0.
#[derive(Deserialize)]
struct CsvRowIn {
    id: String,
    nonce: String,
    txn_type: String,
    burn_hash: String,
    mint_hash: Option<String>,
    transfer_hash: String,
    from: String,
    destination: String,
    minter: Option<String>,
    from_network: String,
    destination_network: String,
    amount: String,
    denom: String,
    status: String,
    timestamp: String,
    created_at: String,
    details: Option<String>,
    destination_timestamp: String,
}

/// Create or truncate `path` and write the header followed by one row per transaction.
pub fn write_transactions(path: &Path, transactions: &[Transaction]) -> Result<(), WriteError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| WriteError::Create {
            path: path.to_path_buf(),
            source: e,
        })?;

    writer.write_record(COLUMNS)?;
    for tx in transactions {
        writer.serialize(CsvRowOut::from(tx))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read every row after the first back into transactions.
///
/// The first row is skipped without checking it against `COLUMNS`.
pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ReadError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut transactions = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.len() != COLUMNS.len() {
            return Err(ReadError::MalformedRow {
                line,
                expected: COLUMNS.len(),
                found: record.len(),
            });
        }

        let row: CsvRowIn = record.deserialize(None)?;
        let nonce = row.nonce.parse().unwrap_or_else(|_| {
            warn!("line {}: unparseable nonce {:?}, using 0", line, row.nonce);
            0
        });

        transactions.push(Transaction {
            id: row.id,
            nonce,
            txn_type: row.txn_type,
            burn_hash: row.burn_hash,
            mint_hash: row.mint_hash,
            transfer_hash: row.transfer_hash,
            from: row.from,
            destination: row.destination,
            minter: row.minter,
            from_network: row.from_network,
            destination_network: row.destination_network,
            amount: row.amount,
            denom: row.denom,
            status: row.status,
            timestamp: row.timestamp,
            created_at: row.created_at,
            details: row.details,
            destination_timestamp: row.destination_timestamp,
        });
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_transaction;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "ID,Nonce,TxnType,BurnHash,MintHash,TransferHash,From,Destination,Minter,FromNetwork,DestinationNetwork,Amount,Denom,Status,Timestamp,CreatedAt,Details,DestinationTimestamp";

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn round_trip_preserves_populated_records() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        let mut absent = sample_transaction("b");
        absent.mint_hash = None;
        absent.minter = None;
        absent.details = None;
        let records = vec![sample_transaction("a"), absent];

        write_transactions(file.path(), &records).unwrap();
        let read_back = read_transactions(file.path()).unwrap();

        assert_eq!(read_back, records);
    }

    #[test]
    fn empty_optional_string_comes_back_absent() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        let mut tx = sample_transaction("a");
        tx.details = Some(String::new());
        tx.minter = Some(String::new());

        write_transactions(file.path(), std::slice::from_ref(&tx)).unwrap();
        let read_back = read_transactions(file.path()).unwrap();

        assert_ne!(read_back[0], tx);
        assert_eq!(read_back[0].details, None);
        assert_eq!(read_back[0].minter, None);
        assert_eq!(read_back[0].mint_hash, tx.mint_hash);
    }

    #[test]
    fn writes_exact_header_and_decimal_nonce() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        let mut tx = sample_transaction("a");
        tx.nonce = 1234567;
        tx.mint_hash = None;

        write_transactions(file.path(), &[tx]).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = contents.lines();

        assert_eq!(lines.next(), Some(HEADER));
        let row: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(row[0], "a");
        assert_eq!(row[1], "1234567");
        assert_eq!(row[4], "");
        assert!(lines.next().is_none());
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        let tx = sample_transaction("a");

        write_transactions(file.path(), std::slice::from_ref(&tx)).unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();

        assert!(contents.contains("\"relayed, fee paid\""));
        assert_eq!(read_transactions(file.path()).unwrap()[0].details, tx.details);
    }

    #[test]
    fn write_truncates_previous_contents() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        let three: Vec<_> = ["a", "b", "c"].iter().map(|id| sample_transaction(id)).collect();

        write_transactions(file.path(), &three).unwrap();
        write_transactions(file.path(), &three[..1]).unwrap();

        assert_eq!(read_transactions(file.path()).unwrap().len(), 1);
    }

    #[test]
    fn empty_set_still_writes_header() {
        let file = NamedTempFile::with_suffix(".csv").unwrap();
        write_transactions(file.path(), &[]).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents.trim_end(), HEADER);
        assert!(read_transactions(file.path()).unwrap().is_empty());
    }

    #[test]
    fn first_row_is_skipped_without_validation() {
        let file = csv_file(
            "anything,at,all\n\
             id-1,5,MAINNET,0xb,,0xt,f,d,,noble,ethereum,100,uusdc,ok,t1,t2,,t3\n",
        );

        let records = read_transactions(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "id-1");
        assert_eq!(records[0].nonce, 5);
        assert_eq!(records[0].mint_hash, None);
        assert_eq!(records[0].destination_timestamp, "t3");
    }

    #[test]
    fn non_numeric_nonce_reads_as_zero() {
        let file = csv_file(&format!(
            "{HEADER}\nid-1,abc,MAINNET,0xb,0xm,0xt,f,d,m,noble,ethereum,100,uusdc,ok,t1,t2,x,t3\n"
        ));

        let records = read_transactions(file.path()).unwrap();
        assert_eq!(records[0].nonce, 0);
        assert_eq!(records[0].amount, "100");
    }

    #[test]
    fn short_row_is_malformed() {
        let file = csv_file(&format!("{HEADER}\nid-1,5,MAINNET\n"));

        let err = read_transactions(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::MalformedRow {
                line: 2,
                expected: 18,
                found: 3
            }
        ));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_transactions(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
    }
}
