#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
	UnknownNetwork(String),
	UnsupportedCategory(String),
	EmptyTagName,
	EmptyTagValues(String),
	InvalidBlockRange(u64, u64),
	Status(u16, String),
	Index(Vec<String>),
	MissingResponseData,
}

impl std::fmt::Display for QueryError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnknownNetwork(network) => write!(f, "unknown network `{}`", network),
			Self::UnsupportedCategory(category) => {
				write!(f, "unsupported record category `{}`", category)
			}
			Self::EmptyTagName => write!(f, "tag filter name must not be empty"),
			Self::EmptyTagValues(name) => {
				write!(f, "tag filter `{}` must list at least one value", name)
			}
			Self::InvalidBlockRange(min, max) => {
				write!(f, "invalid block range: min {} is above max {}", min, max)
			}
			Self::Status(code, body) => write!(f, "index responded with status {}: {}", code, body),
			Self::Index(messages) => write!(f, "index error: {}", messages.join("; ")),
			Self::MissingResponseData => write!(f, "missing response data"),
		}
	}
}

impl std::error::Error for QueryError {}
