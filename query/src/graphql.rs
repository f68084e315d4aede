use anyhow::Result;
use graphql_client::{GraphQLQuery, QueryBody, Response};
use url::Url;

use crate::{
    errors::QueryError,
    filter::Tag,
    index::TransactionIndex,
    network::Network,
    query::{Query, Sort},
    transaction::{BlockInfo, Transaction},
};

// The paths are relative to the directory where your `Cargo.toml` is located.
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "gql/schema.graphql",
    query_path = "gql/query.graphql",
    response_derives = "Debug"
)]
pub struct FindTransactions;

type Node = find_transactions::FindTransactionsTransactionsEdgesNode;

/// Index backed by a gateway's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlIndex {
    backend: Url,
    remote: reqwest::Client,
}

impl GraphqlIndex {
    pub fn new(backend: &str) -> Result<Self> {
        Ok(Self {
            backend: Url::parse(backend)?,
            remote: reqwest::Client::new(),
        })
    }

    pub fn for_network(network: Network) -> Result<Self> {
        Self::new(network.graphql_endpoint())
    }

    pub fn backend(&self) -> &Url {
        &self.backend
    }
}

#[async_trait::async_trait]
impl TransactionIndex for GraphqlIndex {
    async fn first(&self, query: &Query) -> Result<Option<Transaction>> {
        let request_body = build_request(query);
        tracing::debug!(
            backend = %self.backend,
            network = %query.network(),
            tags = query.tags().len(),
            "querying transaction index"
        );

        let res = self
            .remote
            .post(self.backend.clone())
            .json(&request_body)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "transaction index rejected query");
            return Err(QueryError::Status(status.as_u16(), body).into());
        }

        let response_body: Response<find_transactions::ResponseData> = res.json().await?;
        first_transaction(response_body)
    }
}

/// GraphQL request body asking for the single best match of `query`.
pub fn build_request(query: &Query) -> QueryBody<find_transactions::Variables> {
    let tags = query
        .tags()
        .iter()
        .map(|filter| find_transactions::TagFilter {
            name: filter.name().to_string(),
            values: filter.values().to_vec(),
        })
        .collect::<Vec<_>>();

    let block = query.block().map(|range| find_transactions::BlockFilter {
        min: range.min.map(clamp_height),
        max: range.max.map(clamp_height),
    });

    let sort = match query.sort() {
        Sort::HeightDesc => find_transactions::SortOrder::HEIGHT_DESC,
        Sort::HeightAsc => find_transactions::SortOrder::HEIGHT_ASC,
    };

    FindTransactions::build_query(find_transactions::Variables {
        ids: query.ids().map(<[String]>::to_vec),
        owners: query.owners().map(<[String]>::to_vec),
        tags: (!tags.is_empty()).then_some(tags),
        block,
        first: 1,
        sort,
    })
}

/// Maps a GraphQL response to the first transaction it lists.
pub fn first_transaction(
    response: Response<find_transactions::ResponseData>,
) -> Result<Option<Transaction>> {
    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        tracing::warn!(errors = ?messages, "transaction index returned errors");
        return Err(QueryError::Index(messages).into());
    }
    let data = response.data.ok_or(QueryError::MissingResponseData)?;
    let found = data
        .transactions
        .edges
        .into_iter()
        .next()
        .map(|edge| Transaction::from(edge.node));
    tracing::info!(
        id = found.as_ref().map(|t| t.id.as_str()),
        "transaction index resolved query"
    );
    Ok(found)
}

fn clamp_height(height: u64) -> i64 {
    i64::try_from(height).unwrap_or(i64::MAX)
}

impl From<Node> for Transaction {
    fn from(node: Node) -> Self {
        Transaction {
            id: node.id,
            owner: Some(node.owner.address).filter(|a| !a.is_empty()),
            recipient: Some(node.recipient).filter(|r| !r.is_empty()),
            tags: node
                .tags
                .into_iter()
                .map(|t| Tag::new(t.name, t.value))
                .collect(),
            data_size: node.data.size.parse().ok(),
            media_type: node.data.media_type,
            block: node.block.map(|b| BlockInfo {
                id: b.id,
                height: u64::try_from(b.height).unwrap_or_default(),
                timestamp: b.timestamp,
            }),
        }
    }
}
