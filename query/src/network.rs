use std::{fmt, str::FromStr};

use crate::errors::QueryError;

pub const ARWEAVE_GRAPHQL: &str = "https://arweave.net/graphql";

/// Which permaweb network a client queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
	/// Arweave gateway index
	#[default]
	Arweave,
}

impl Network {
	pub fn graphql_endpoint(&self) -> &'static str {
		match self {
			Network::Arweave => ARWEAVE_GRAPHQL,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Network::Arweave => "arweave",
		}
	}
}

impl FromStr for Network {
	type Err = QueryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"arweave" => Ok(Network::Arweave),
			_ => Err(QueryError::UnknownNetwork(s.to_string())),
		}
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_network() {
		assert_eq!("arweave".parse::<Network>(), Ok(Network::Arweave));
		assert_eq!(" Arweave ".parse::<Network>(), Ok(Network::Arweave));
		assert_eq!(
			"solana".parse::<Network>(),
			Err(QueryError::UnknownNetwork("solana".to_string()))
		);
		// irys nodes speak a different graphql dialect
		assert_eq!(
			"devnet".parse::<Network>(),
			Err(QueryError::UnknownNetwork("devnet".to_string()))
		);
	}

	#[test]
	fn test_network_roundtrips_through_display() {
		assert_eq!(Network::Arweave.to_string().parse::<Network>(), Ok(Network::Arweave));
	}

	#[test]
	fn test_graphql_endpoint() {
		assert_eq!(Network::default().graphql_endpoint(), "https://arweave.net/graphql");
		assert!(url::Url::parse(Network::Arweave.graphql_endpoint()).is_ok());
	}
}
