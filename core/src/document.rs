use crate::{deserialize_blocks, serialize_blocks, Block, Theme, WireUnit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The document shape the content API accepts and returns. `content` is the
/// wire-encoded block list; everything else is post metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PostDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub publish_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub content: Vec<WireUnit>,
    pub theme: Theme,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,
    #[error("author is required")]
    MissingAuthor,
}

impl PostDocument {
    /// Checked before any network call; a failure mutates nothing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::MissingAuthor);
        }
        Ok(())
    }

    /// Encode `blocks` into this document's wire content.
    pub fn set_body(&mut self, blocks: &[Block]) {
        self.content = serialize_blocks(blocks);
    }

    /// Decode the wire content back into editable blocks.
    pub fn body_blocks(&self) -> Vec<Block> {
        deserialize_blocks(&self.content)
    }
}
