//! Best-effort migration of documents saved before blocks carried a
//! `blockType`. The inference is lossy and order-sensitive by nature; it is
//! not an inverse of any serialization and runs only for units the
//! steady-state deserializer cannot dispatch.

use crate::{Block, BlockBody, BlockKind, BlockStyle};
use tracing::debug;
use uuid::Uuid;

use crate::wire::WireUnit;

/// Infer a block from which of the flattened fields are populated:
/// heading-only, text-only and image-only map to their obvious kinds;
/// anything mixed or ambiguous becomes a text block with synthesized markup
/// so no content is dropped.
pub fn infer_block(unit: &WireUnit) -> Block {
    let has_heading = !unit.heading.trim().is_empty();
    let has_text = !unit.text.trim().is_empty();
    let has_image = !unit.image.trim().is_empty();

    let body = match (has_heading, has_text, has_image) {
        (true, false, false) => {
            let mut body = BlockBody::empty(BlockKind::Heading);
            if let BlockBody::Heading { content, .. } = &mut body {
                *content = unit.heading.clone();
            }
            body
        }
        (false, true, false) => BlockBody::Text {
            content: unit.text.clone(),
        },
        (false, false, true) => {
            let mut body = BlockBody::empty(BlockKind::Image);
            if let BlockBody::Image { url, .. } = &mut body {
                *url = unit.image.clone();
            }
            body
        }
        _ => {
            debug!("ambiguous legacy unit, folding into a text block");
            BlockBody::Text {
                content: synthesize_markup(unit),
            }
        }
    };
    Block {
        id: Uuid::new_v4(),
        style: BlockStyle::default(),
        body,
    }
}

fn synthesize_markup(unit: &WireUnit) -> String {
    let mut out = String::new();
    if !unit.heading.trim().is_empty() {
        out.push_str("<h3>");
        out.push_str(&unit.heading);
        out.push_str("</h3>");
    }
    if !unit.text.trim().is_empty() {
        out.push_str(&unit.text);
    }
    out
}
