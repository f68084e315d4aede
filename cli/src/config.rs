use anyhow::Context;
use permaweb_query::Network;

pub const NETWORK_VAR: &str = "PERMAWEB_NETWORK";
pub const BACKEND_VAR: &str = "PERMAWEB_GRAPHQL_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub network: Network,
    /// Overrides the network's default GraphQL endpoint.
    pub backend: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let network = match lookup(NETWORK_VAR).filter(|v| !v.trim().is_empty()) {
            Some(network) => network
                .parse::<Network>()
                .with_context(|| format!("invalid {}", NETWORK_VAR))?,
            None => Network::default(),
        };
        let backend = lookup(BACKEND_VAR).filter(|v| !v.trim().is_empty());
        Ok(Self { network, backend })
    }
}
