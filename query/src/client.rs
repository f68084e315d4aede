use anyhow::Result;

use crate::{
    filter::TagFilter,
    graphql::GraphqlIndex,
    index::TransactionIndex,
    network::Network,
    query::{Category, Query, QueryBuilder, Sort},
    transaction::Transaction,
};

pub struct Client {
    pub network: Network,
    index: Box<dyn TransactionIndex>,
}

impl Client {
    pub fn new(network: Network) -> Result<Self> {
        Self::with_backend(network, None)
    }

    /// Remote client on `backend`, falling back to the network's default gateway.
    pub fn with_backend(network: Network, backend: Option<String>) -> Result<Self> {
        let index = match backend {
            Some(backend) => GraphqlIndex::new(&backend)?,
            None => GraphqlIndex::for_network(network)?,
        };
        Ok(Self::with_index(network, index))
    }

    pub fn with_index(network: Network, index: impl TransactionIndex + 'static) -> Self {
        Self {
            network,
            index: Box::new(index),
        }
    }

    pub fn search(&self, category: Category) -> Search<'_> {
        Search {
            client: self,
            builder: Query::builder(self.network, category),
        }
    }

    pub async fn first(&self, query: &Query) -> Result<Option<Transaction>> {
        self.index.first(query).await
    }
}

/// A query being assembled against one [`Client`].
pub struct Search<'a> {
    client: &'a Client,
    builder: QueryBuilder,
}

impl<'a> Search<'a> {
    pub fn tag<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builder = self.builder.tag(name, values);
        self
    }

    pub fn tags(mut self, filters: impl IntoIterator<Item = TagFilter>) -> Self {
        self.builder = self.builder.tags(filters);
        self
    }

    pub fn from<I, S>(mut self, owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builder = self.builder.from(owners);
        self
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builder = self.builder.ids(ids);
        self
    }

    pub fn block_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.builder = self.builder.block_range(min, max);
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.builder = self.builder.sort(sort);
        self
    }

    pub fn build(self) -> Result<Query> {
        Ok(self.builder.build()?)
    }

    /// Finalizes the query and fetches its single best match.
    pub async fn first(self) -> Result<Option<Transaction>> {
        let client = self.client;
        let query = self.build()?;
        client.first(&query).await
    }
}
