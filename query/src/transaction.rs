use crate::filter::Tag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    pub id: String,
    pub height: u64,
    pub timestamp: i64,
}

/// A transaction returned by an index.
///
/// Only `id` is guaranteed; everything else depends on what the index
/// reports and is left empty when missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    pub id: String,
    pub owner: Option<String>,
    pub recipient: Option<String>,
    pub tags: Vec<Tag>,
    pub data_size: Option<u64>,
    pub media_type: Option<String>,
    /// `None` while the transaction is still pending.
    pub block: Option<BlockInfo>,
}

impl Transaction {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name, value));
        self
    }

    pub fn with_block(mut self, id: impl Into<String>, height: u64, timestamp: i64) -> Self {
        self.block = Some(BlockInfo {
            id: id.into(),
            height,
            timestamp,
        });
        self
    }

    pub fn height(&self) -> Option<u64> {
        self.block.as_ref().map(|b| b.height)
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_str())
    }
}
