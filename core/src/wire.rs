use crate::{
    legacy, Block, BlockBody, BlockKind, ButtonTarget, ColumnContent, ContactInfo, ListStyle,
    ListType,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Flattened persisted form of one block. `heading`/`text`/`image` duplicate
/// the primary rendering fields for backend-side quick access; `block_data`
/// carries the full structured block and is authoritative on read. The
/// redundancy is an external backend contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct WireUnit {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "kind_or_none"
    )]
    pub block_type: Option<BlockKind>,
    pub heading: String,
    pub text: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_data: Option<Value>,
}

/// Unknown `blockType` strings decode as `None` and flow through legacy
/// inference instead of failing the unit.
fn kind_or_none<'de, D>(deserializer: D) -> Result<Option<BlockKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(BlockKind::parse))
}

impl BlockKind {
    pub fn parse(raw: &str) -> Option<Self> {
        BlockKind::ALL.iter().copied().find(|k| k.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ListPayload {
    items: Vec<String>,
    list_type: ListType,
    list_style: ListStyle,
    checked_items: BTreeMap<usize, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ColumnsPayload {
    left: ColumnContent,
    right: ColumnContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct CtaPayload {
    description: String,
    primary: Option<ButtonTarget>,
    secondary: Option<ButtonTarget>,
    contact: ContactInfo,
}

/// Pure list transform to the persisted representation. Total over the 14
/// kinds; the caller owns the actual create/update request.
pub fn serialize_blocks(blocks: &[Block]) -> Vec<WireUnit> {
    blocks.iter().map(serialize_block).collect()
}

fn serialize_block(block: &Block) -> WireUnit {
    let mut unit = WireUnit {
        block_type: Some(block.kind()),
        block_data: serde_json::to_value(block).ok(),
        ..WireUnit::default()
    };
    match &block.body {
        BlockBody::Heading { content, .. } => {
            unit.heading = content.clone();
        }
        BlockBody::Text { content } => {
            unit.text = content.clone();
        }
        BlockBody::Image { url, caption, .. } | BlockBody::Video { url, caption, .. } => {
            unit.heading = caption.clone();
            unit.image = url.clone();
        }
        BlockBody::Quote { text, attribution } => {
            unit.heading = attribution.clone();
            unit.text = text.clone();
        }
        BlockBody::List {
            items,
            list_type,
            list_style,
            checked,
        } => {
            let payload = ListPayload {
                items: items.clone(),
                list_type: *list_type,
                list_style: *list_style,
                checked_items: checked.clone(),
            };
            unit.text = serde_json::to_string(&payload).unwrap_or_default();
        }
        BlockBody::Divider { .. } | BlockBody::Spacer { .. } => {}
        BlockBody::Embed { url } => {
            unit.image = url.clone();
        }
        BlockBody::Gallery { images } => {
            unit.text = serde_json::to_string(images).unwrap_or_default();
            unit.image = images.first().cloned().unwrap_or_default();
        }
        BlockBody::Button { label, url, .. } => {
            unit.heading = label.clone();
            unit.text = url.clone();
        }
        BlockBody::Columns { left, right } => {
            let payload = ColumnsPayload {
                left: left.clone(),
                right: right.clone(),
            };
            unit.text = serde_json::to_string(&payload).unwrap_or_default();
        }
        BlockBody::Card {
            title,
            content,
            image,
            ..
        } => {
            unit.heading = title.clone();
            unit.text = content.clone();
            unit.image = image.clone().unwrap_or_default();
        }
        BlockBody::Cta {
            title,
            description,
            primary,
            secondary,
            contact,
        } => {
            let payload = CtaPayload {
                description: description.clone(),
                primary: primary.clone(),
                secondary: secondary.clone(),
                contact: contact.clone(),
            };
            unit.heading = title.clone();
            unit.text = serde_json::to_string(&payload).unwrap_or_default();
        }
    }
    unit
}

/// Reconstruct editable blocks from persisted units. Never fails: malformed
/// sub-fields degrade to kind-appropriate defaults per unit, and units
/// without a recognizable `blockType` go through legacy inference. Every
/// block gets a fresh id; the wire format does not persist editor-local ids.
pub fn deserialize_blocks(units: &[WireUnit]) -> Vec<Block> {
    units.iter().map(deserialize_unit).collect()
}

fn deserialize_unit(unit: &WireUnit) -> Block {
    let Some(kind) = unit.block_type else {
        return legacy::infer_block(unit);
    };
    // The embedded structured block wins when it parses and agrees on kind.
    if let Some(data) = &unit.block_data {
        if let Ok(mut block) = serde_json::from_value::<Block>(data.clone()) {
            if block.kind() == kind {
                block.id = Uuid::new_v4();
                return block;
            }
            debug!(
                expected = %kind,
                found = %block.kind(),
                "blockData kind disagrees with blockType, using flattened fields"
            );
        }
    }
    Block {
        id: Uuid::new_v4(),
        style: Default::default(),
        body: body_from_flattened(kind, unit),
    }
}

fn body_from_flattened(kind: BlockKind, unit: &WireUnit) -> BlockBody {
    let mut body = BlockBody::empty(kind);
    match &mut body {
        BlockBody::Heading { content, .. } => {
            *content = unit.heading.clone();
        }
        BlockBody::Text { content } => {
            *content = unit.text.clone();
        }
        BlockBody::Image { url, caption, .. } | BlockBody::Video { url, caption, .. } => {
            *url = unit.image.clone();
            *caption = unit.heading.clone();
        }
        BlockBody::Quote { text, attribution } => {
            *text = unit.text.clone();
            *attribution = unit.heading.clone();
        }
        BlockBody::List {
            items,
            list_type,
            list_style,
            checked,
        } => {
            let payload: ListPayload = parse_or_default(&unit.text);
            *items = payload.items;
            *list_type = payload.list_type;
            *list_style = payload.list_style;
            *checked = payload.checked_items;
        }
        BlockBody::Divider { .. } | BlockBody::Spacer { .. } => {}
        BlockBody::Embed { url } => {
            *url = unit.image.clone();
        }
        BlockBody::Gallery { images } => {
            *images = serde_json::from_str(&unit.text).unwrap_or_else(|_| {
                if unit.image.is_empty() {
                    Vec::new()
                } else {
                    vec![unit.image.clone()]
                }
            });
        }
        BlockBody::Button { label, url, .. } => {
            if !unit.heading.is_empty() {
                *label = unit.heading.clone();
            }
            *url = unit.text.clone();
        }
        BlockBody::Columns { left, right } => {
            let payload: ColumnsPayload = parse_or_default(&unit.text);
            *left = payload.left;
            *right = payload.right;
        }
        BlockBody::Card {
            title,
            content,
            image,
            ..
        } => {
            *title = unit.heading.clone();
            *content = unit.text.clone();
            *image = (!unit.image.is_empty()).then(|| unit.image.clone());
        }
        BlockBody::Cta {
            title,
            description,
            primary,
            secondary,
            contact,
        } => {
            let payload: CtaPayload = parse_or_default(&unit.text);
            *title = unit.heading.clone();
            *description = payload.description;
            *primary = payload.primary;
            *secondary = payload.secondary;
            *contact = payload.contact;
        }
    }
    body
}

fn parse_or_default<T: Default + for<'de> Deserialize<'de>>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        debug!(%err, "malformed wire payload, using defaults");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_block_starts_from_empty_defaults_on_bad_json() {
        let unit = WireUnit {
            block_type: Some(BlockKind::List),
            text: "{not json".into(),
            ..WireUnit::default()
        };
        let blocks = deserialize_blocks(&[unit]);
        let BlockBody::List { items, checked, .. } = &blocks[0].body else {
            panic!("expected a list block");
        };
        assert!(items.is_empty());
        assert!(checked.is_empty());
    }

    #[test]
    fn unknown_block_type_string_goes_through_legacy_inference() {
        let raw = r#"{"blockType": "carousel_v2", "text": "hello"}"#;
        let unit: WireUnit = serde_json::from_str(raw).unwrap();
        assert_eq!(unit.block_type, None);
        let blocks = deserialize_blocks(&[unit]);
        assert_eq!(blocks[0].kind(), BlockKind::Text);
    }

    #[test]
    fn block_data_is_authoritative_over_flattened_fields() {
        let mut block = Block::new(BlockKind::Heading);
        if let BlockBody::Heading { content, .. } = &mut block.body {
            *content = "Structured".into();
        }
        let mut unit = serialize_blocks(std::slice::from_ref(&block)).remove(0);
        unit.heading = "Flattened".into();
        let round = deserialize_blocks(&[unit]);
        let BlockBody::Heading { content, .. } = &round[0].body else {
            panic!("expected heading");
        };
        assert_eq!(content, "Structured");
    }

    #[test]
    fn flattened_fields_carry_the_primary_content() {
        let mut block = Block::new(BlockKind::Image);
        if let BlockBody::Image { url, caption, .. } = &mut block.body {
            *url = "https://cdn.example/a.jpg".into();
            *caption = "A beach".into();
        }
        let unit = serialize_blocks(std::slice::from_ref(&block)).remove(0);
        assert_eq!(unit.image, "https://cdn.example/a.jpg");
        assert_eq!(unit.heading, "A beach");
        assert_eq!(unit.text, "");
    }
}
