use log::warn;

use crate::models::Transaction;

/// Flows out of and into one network, in base units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NetworkTotals {
    pub from_total: i128,
    pub to_total: i128,
    pub from_count: usize,
    pub to_count: usize,
}

impl NetworkTotals {
    /// Both totals divided by `scale`, truncating: `(to, from)`.
    pub fn display(&self, scale: u64) -> (i128, i128) {
        let scale = i128::from(scale);
        (self.to_total / scale, self.from_total / scale)
    }
}

/// Sum amounts leaving and entering `network`.
///
/// A transaction whose source is `network` counts only as outbound, even when
/// its destination is `network` as well. Amounts that do not parse add 0.
pub fn aggregate(transactions: &[Transaction], network: &str) -> NetworkTotals {
    let mut totals = NetworkTotals::default();

    for tx in transactions {
        if tx.from_network == network {
            totals.from_total = add_amount(totals.from_total, tx);
            totals.from_count += 1;
        } else if tx.destination_network == network {
            totals.to_total = add_amount(totals.to_total, tx);
            totals.to_count += 1;
        }
    }

    totals
}

/// Adds the transaction's amount, saturating instead of overflowing.
fn add_amount(total: i128, tx: &Transaction) -> i128 {
    let amount = parse_amount(tx);
    total.checked_add(amount).unwrap_or_else(|| {
        warn!("transaction {}: total overflowed adding {}, saturating", tx.id, amount);
        total.saturating_add(amount)
    })
}

fn parse_amount(tx: &Transaction) -> i128 {
    tx.amount.parse().unwrap_or_else(|_| {
        warn!("transaction {}: unparseable amount {:?}, using 0", tx.id, tx.amount);
        0
    })
}
