//! Tag-filtered lookups against permaweb transaction indexes.
mod client;
mod errors;
mod filter;
pub mod graphql;
mod index;
pub mod network;
mod query;
mod transaction;

pub use client::{Client, Search};
pub use errors::QueryError;
pub use filter::{matches_all, Tag, TagFilter};
pub use index::{MemoryIndex, TransactionIndex};
pub use network::Network;
pub use query::{BlockRange, Category, Query, QueryBuilder, Sort};
pub use transaction::{BlockInfo, Transaction};
