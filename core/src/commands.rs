use crate::{Block, BlockKind, EditorError, FormatCommand, Session, TextSelection};

/// The narrow operation set the editing surfaces drive the session through.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    Insert(BlockKind),
    InsertAt { index: usize, kind: BlockKind },
    Update { index: usize, block: Block },
    Delete(usize),
    Move { from: usize, to: usize },
    Duplicate(usize),
    SetMediaUrl { index: usize, url: String },
    BeginTextEdit(usize),
    Format { selection: TextSelection, command: FormatCommand },
    SaveTextEdit,
    CancelTextEdit,
}

impl Session {
    pub fn execute(&mut self, cmd: EditorCommand) -> Result<(), EditorError> {
        match cmd {
            EditorCommand::Insert(kind) => {
                self.insert_block(kind);
                Ok(())
            }
            EditorCommand::InsertAt { index, kind } => {
                self.insert_block_at(index, kind);
                Ok(())
            }
            EditorCommand::Update { index, block } => self.update_block(index, block),
            EditorCommand::Delete(index) => {
                self.delete_block(index);
                Ok(())
            }
            EditorCommand::Move { from, to } => {
                self.move_block(from, to);
                Ok(())
            }
            EditorCommand::Duplicate(index) => {
                self.duplicate_block(index);
                Ok(())
            }
            EditorCommand::SetMediaUrl { index, url } => self.set_media_url(index, url),
            EditorCommand::BeginTextEdit(index) => self.begin_text_edit(index),
            EditorCommand::Format { selection, command } => {
                self.format_draft(selection, &command)
            }
            EditorCommand::SaveTextEdit => self.save_text_edit(),
            EditorCommand::CancelTextEdit => {
                self.cancel_text_edit();
                Ok(())
            }
        }
    }
}
