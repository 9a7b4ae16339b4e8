use crate::{
    apply_format, Block, BlockBody, BlockKind, EditorError, FormatCommand, TextSelection, Theme,
};
use tracing::{debug, warn};
use uuid::Uuid;

/// In-flight modal edit of one text block. Tracked by block id so reorders
/// and deletions of other blocks cannot redirect the draft.
#[derive(Debug, Clone)]
pub struct TextEdit {
    pub block_id: Uuid,
    pub draft: String,
}

/// One editing session over a post body: the block list, the theme, and a
/// session-level error slot. In-memory only; nothing persists until the
/// caller serializes and saves.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub blocks: Vec<Block>,
    pub theme: Theme,
    last_error: Option<String>,
    text_edit: Option<TextEdit>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(blocks: Vec<Block>, theme: Theme) -> Self {
        Self {
            blocks,
            theme,
            last_error: None,
            text_edit: None,
        }
    }

    /// Append a fresh default block and return its index.
    pub fn insert_block(&mut self, kind: BlockKind) -> usize {
        self.blocks.push(Block::new(kind));
        debug!(kind = %kind, index = self.blocks.len() - 1, "block inserted");
        self.blocks.len() - 1
    }

    /// Insert a fresh default block at `index` (clamped to the end).
    pub fn insert_block_at(&mut self, index: usize, kind: BlockKind) -> usize {
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, Block::new(kind));
        index
    }

    /// Replace the block at `index` wholesale. The stored id is preserved
    /// and the kind may not change.
    pub fn update_block(&mut self, index: usize, block: Block) -> Result<(), EditorError> {
        let len = self.blocks.len();
        let slot = self
            .blocks
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })?;
        if slot.kind() != block.kind() {
            return Err(EditorError::KindMismatch {
                from: slot.kind(),
                to: block.kind(),
            });
        }
        let id = slot.id;
        *slot = block;
        slot.id = id;
        Ok(())
    }

    /// Remove the block at `index`; out of range is a no-op.
    pub fn delete_block(&mut self, index: usize) {
        if index >= self.blocks.len() {
            warn!(index, len = self.blocks.len(), "delete ignored, out of range");
            return;
        }
        let removed = self.blocks.remove(index);
        if let Some(edit) = &self.text_edit {
            if edit.block_id == removed.id {
                self.text_edit = None;
            }
        }
    }

    /// Remove the block at `from` and reinsert it at `to`. An out-of-range
    /// index on either side is a silent no-op; boundary buttons in the UI
    /// are expected to be disabled instead.
    pub fn move_block(&mut self, from: usize, to: usize) {
        let len = self.blocks.len();
        if from >= len || to >= len {
            return;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
    }

    /// Insert a copy of the block at `index` immediately after it, under a
    /// fresh id. Returns the new block's id; out of range is a no-op.
    pub fn duplicate_block(&mut self, index: usize) -> Option<Uuid> {
        let source = self.blocks.get(index)?;
        let copy = source.duplicate();
        let id = copy.id;
        self.blocks.insert(index + 1, copy);
        Some(id)
    }

    /// Merge an uploaded media URL into the block at `index`. Galleries
    /// accumulate; single-media kinds overwrite.
    pub fn set_media_url(&mut self, index: usize, url: String) -> Result<(), EditorError> {
        let len = self.blocks.len();
        let block = self
            .blocks
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })?;
        match &mut block.body {
            BlockBody::Image { url: slot, .. }
            | BlockBody::Video { url: slot, .. }
            | BlockBody::Embed { url: slot } => *slot = url,
            BlockBody::Gallery { images } => images.push(url),
            BlockBody::Card { image, .. } => *image = Some(url),
            _ => return Err(EditorError::NotAMediaBlock(index)),
        }
        Ok(())
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "session error");
        self.last_error = Some(message);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    // --- text block modal editing -------------------------------------

    /// Enter edit mode on the text block at `index`, seeding the draft from
    /// its current content.
    pub fn begin_text_edit(&mut self, index: usize) -> Result<(), EditorError> {
        if self.text_edit.is_some() {
            return Err(EditorError::TextEditInProgress);
        }
        let len = self.blocks.len();
        let block = self
            .blocks
            .get(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })?;
        let BlockBody::Text { content } = &block.body else {
            return Err(EditorError::NotATextBlock(index));
        };
        self.text_edit = Some(TextEdit {
            block_id: block.id,
            draft: content.clone(),
        });
        Ok(())
    }

    pub fn text_edit(&self) -> Option<&TextEdit> {
        self.text_edit.as_ref()
    }

    /// Apply one formatting command to the active draft. Only meaningful
    /// while a text block is in edit mode.
    pub fn format_draft(
        &mut self,
        selection: TextSelection,
        command: &FormatCommand,
    ) -> Result<(), EditorError> {
        let edit = self.text_edit.as_mut().ok_or(EditorError::NoActiveTextEdit)?;
        edit.draft = apply_format(&edit.draft, selection, command);
        Ok(())
    }

    /// Commit the draft markup into the block's content and leave edit mode.
    pub fn save_text_edit(&mut self) -> Result<(), EditorError> {
        let edit = self.text_edit.take().ok_or(EditorError::NoActiveTextEdit)?;
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == edit.block_id) {
            if let BlockBody::Text { content } = &mut block.body {
                *content = edit.draft;
            }
        }
        Ok(())
    }

    /// Leave edit mode, discarding any uncommitted markup.
    pub fn cancel_text_edit(&mut self) {
        self.text_edit = None;
    }
}
