use crate::BlockKind;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EditorError {
    #[error("block index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("block kind cannot change from {from} to {to}")]
    KindMismatch { from: BlockKind, to: BlockKind },
    #[error("block at index {0} is not a text block")]
    NotATextBlock(usize),
    #[error("block at index {0} does not hold media")]
    NotAMediaBlock(usize),
    #[error("no text block is being edited")]
    NoActiveTextEdit,
    #[error("another text block is already being edited")]
    TextEditInProgress,
}
