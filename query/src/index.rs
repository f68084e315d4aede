use anyhow::Result;

use crate::{
    filter::matches_all,
    query::{Query, Sort},
    transaction::Transaction,
};

/// A service that resolves a [`Query`] to its single most relevant match.
///
/// `Ok(None)` means nothing matched and is not a failure.
#[async_trait::async_trait]
pub trait TransactionIndex: Send + Sync {
    async fn first(&self, query: &Query) -> Result<Option<Transaction>>;
}

/// In-process index over a fixed set of transactions.
#[derive(Debug, Clone, Default)]
pub struct MemoryIndex {
    transactions: Vec<Transaction>,
}

impl MemoryIndex {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    fn is_match(query: &Query, transaction: &Transaction) -> bool {
        if !matches_all(query.tags(), &transaction.tags) {
            return false;
        }
        if let Some(ids) = query.ids() {
            if !ids.contains(&transaction.id) {
                return false;
            }
        }
        if let Some(owners) = query.owners() {
            match &transaction.owner {
                Some(owner) if owners.contains(owner) => {}
                _ => return false,
            }
        }
        if let Some(range) = query.block() {
            match transaction.height() {
                Some(height) if range.contains(height) => {}
                _ => return false,
            }
        }
        true
    }

    /// Every match, in the order the query's sort policy puts them.
    pub fn find(&self, query: &Query) -> Vec<&Transaction> {
        let mut matches: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| Self::is_match(query, t))
            .collect();
        // pending transactions sort as the newest
        let height = |t: &&Transaction| t.height().unwrap_or(u64::MAX);
        match query.sort() {
            Sort::HeightDesc => matches.sort_by(|a, b| height(b).cmp(&height(a))),
            Sort::HeightAsc => matches.sort_by_key(height),
        }
        matches
    }
}

#[async_trait::async_trait]
impl TransactionIndex for MemoryIndex {
    async fn first(&self, query: &Query) -> Result<Option<Transaction>> {
        let found = self.find(query).into_iter().next().cloned();
        tracing::debug!(
            network = %query.network(),
            found = found.is_some(),
            "resolved query against memory index"
        );
        Ok(found)
    }
}
