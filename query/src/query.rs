use std::{fmt, str::FromStr};

use crate::{errors::QueryError, filter::TagFilter, network::Network};

/// Kind of record a query searches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Transactions,
}

impl FromStr for Category {
    type Err = QueryError;

    /// Accepts `transactions` as well as the namespaced `arweave:transactions`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let category = match s.split_once(':') {
            Some(("arweave", category)) => category,
            Some(_) => return Err(QueryError::UnsupportedCategory(s.to_string())),
            None => s,
        };
        match category {
            "transactions" => Ok(Category::Transactions),
            _ => Err(QueryError::UnsupportedCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Transactions => f.write_str("transactions"),
        }
    }
}

/// Ordering used to pick the "first" record among several matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sort {
    /// Most recent block first; pending records come before mined ones.
    #[default]
    HeightDesc,
    /// Oldest block first; pending records come last.
    HeightAsc,
}

/// Inclusive block height bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl BlockRange {
    pub fn contains(&self, height: u64) -> bool {
        self.min.map_or(true, |min| height >= min) && self.max.map_or(true, |max| height <= max)
    }
}

/// A finished, immutable query descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    network: Network,
    category: Category,
    tags: Vec<TagFilter>,
    owners: Option<Vec<String>>,
    ids: Option<Vec<String>>,
    block: Option<BlockRange>,
    sort: Sort,
}

impl Query {
    pub fn builder(network: Network, category: Category) -> QueryBuilder {
        QueryBuilder::new(network, category)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tags(&self) -> &[TagFilter] {
        &self.tags
    }

    pub fn owners(&self) -> Option<&[String]> {
        self.owners.as_deref()
    }

    pub fn ids(&self) -> Option<&[String]> {
        self.ids.as_deref()
    }

    pub fn block(&self) -> Option<BlockRange> {
        self.block
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    network: Network,
    category: Category,
    tags: Vec<(String, Vec<String>)>,
    owners: Option<Vec<String>>,
    ids: Option<Vec<String>>,
    block: Option<BlockRange>,
    sort: Sort,
}

impl QueryBuilder {
    pub fn new(network: Network, category: Category) -> Self {
        Self {
            network,
            category,
            tags: vec![],
            owners: None,
            ids: None,
            block: None,
            sort: Sort::default(),
        }
    }

    /// Appends one tag filter. Validation is deferred to [`QueryBuilder::build`].
    pub fn tag<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags
            .push((name.into(), values.into_iter().map(Into::into).collect()));
        self
    }

    pub fn tags(mut self, filters: impl IntoIterator<Item = TagFilter>) -> Self {
        for filter in filters {
            self.tags
                .push((filter.name().to_string(), filter.values().to_vec()));
        }
        self
    }

    /// Restricts matches to transactions signed by one of `owners`.
    pub fn from<I, S>(mut self, owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owners = Some(owners.into_iter().map(Into::into).collect());
        self
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn block_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.block = Some(BlockRange { min, max });
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn build(self) -> Result<Query, QueryError> {
        let tags = self
            .tags
            .into_iter()
            .map(|(name, values)| TagFilter::new(name, values))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(BlockRange {
            min: Some(min),
            max: Some(max),
        }) = self.block
        {
            if min > max {
                return Err(QueryError::InvalidBlockRange(min, max));
            }
        }

        Ok(Query {
            network: self.network,
            category: self.category,
            tags,
            owners: self.owners,
            ids: self.ids,
            block: self.block,
            sort: self.sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("transactions".parse::<Category>(), Ok(Category::Transactions));
        assert_eq!("arweave:transactions".parse::<Category>(), Ok(Category::Transactions));
        assert_eq!(
            "irys:transactions".parse::<Category>(),
            Err(QueryError::UnsupportedCategory("irys:transactions".to_string()))
        );
        assert_eq!(
            "arweave:blocks".parse::<Category>(),
            Err(QueryError::UnsupportedCategory("arweave:blocks".to_string()))
        );
        assert_eq!(
            "solana:transactions".parse::<Category>(),
            Err(QueryError::UnsupportedCategory(
                "solana:transactions".to_string()
            ))
        );
    }

    #[test]
    fn test_build_keeps_filter_order() {
        let query = Query::builder(Network::Arweave, Category::Transactions)
            .tag("Content-Type", ["application/json"])
            .tags([TagFilter::new("App-Name", ["ArweavePH-Cohort-0"]).unwrap()])
            .tag("Title", ["Lesson 2"])
            .build()
            .unwrap();

        let names: Vec<_> = query.tags().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Content-Type", "App-Name", "Title"]);
        assert_eq!(query.sort(), Sort::HeightDesc);
        assert_eq!(query.owners(), None);
        assert_eq!(query.network(), Network::Arweave);
    }

    #[test]
    fn test_build_rejects_empty_values() {
        let query = Query::builder(Network::Arweave, Category::Transactions)
            .tag("Title", Vec::<String>::new())
            .build();
        assert_eq!(query, Err(QueryError::EmptyTagValues("Title".to_string())));
    }

    #[test]
    fn test_build_rejects_inverted_range() {
        let query = Query::builder(Network::Arweave, Category::Transactions)
            .block_range(Some(10), Some(5))
            .build();
        assert_eq!(query, Err(QueryError::InvalidBlockRange(10, 5)));
    }

    #[test]
    fn test_block_range_contains() {
        let range = BlockRange {
            min: Some(5),
            max: None,
        };
        assert!(!range.contains(4));
        assert!(range.contains(5));
        assert!(range.contains(u64::MAX));
    }
}
