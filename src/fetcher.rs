use std::path::Path;
use std::time::Duration;

use log::{debug, error, info};

use crate::client::TransactionSource;
use crate::error::WriteError;
use crate::models::Transaction;
use crate::store;

/// Walk every page of the source, starting at offset 0.
///
/// A page shorter than `limit` is the last one. A failed request ends the walk
/// and whatever was collected so far is returned.
pub async fn fetch_all<S: TransactionSource>(
    source: &S,
    limit: u64,
    delay: Duration,
) -> Vec<Transaction> {
    let mut offset = 0;
    let mut all = Vec::new();

    loop {
        let page = match source.fetch_page(offset, limit).await {
            Ok(page) => page,
            Err(e) => {
                error!(
                    "Error fetching transactions at offset {}: {:#}",
                    offset,
                    anyhow::Error::new(e)
                );
                break;
            }
        };

        let fetched = page.len() as u64;
        all.extend(page);
        debug!("offset {}: {} records, {} so far", offset, fetched, all.len());

        if fetched < limit {
            break;
        }

        offset += limit;
        tokio::time::sleep(delay).await;
    }

    all
}

/// Fetch everything and overwrite `data_file` with it. Returns the record count.
pub async fn run_fetch<S: TransactionSource>(
    source: &S,
    limit: u64,
    delay: Duration,
    data_file: &Path,
) -> Result<usize, WriteError> {
    let transactions = fetch_all(source, limit, delay).await;
    store::write_transactions(data_file, &transactions)?;
    info!("wrote {} transactions to {}", transactions.len(), data_file.display());
    Ok(transactions.len())
}
