use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Tag for the closed set of block variants. Serialized form is the wire
/// `blockType` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading,
    Text,
    Image,
    Video,
    Quote,
    List,
    Divider,
    Embed,
    Gallery,
    Button,
    Columns,
    Spacer,
    Card,
    Cta,
}

impl BlockKind {
    pub const ALL: [BlockKind; 14] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Quote,
        BlockKind::List,
        BlockKind::Divider,
        BlockKind::Embed,
        BlockKind::Gallery,
        BlockKind::Button,
        BlockKind::Columns,
        BlockKind::Spacer,
        BlockKind::Card,
        BlockKind::Cta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Quote => "quote",
            BlockKind::List => "list",
            BlockKind::Divider => "divider",
            BlockKind::Embed => "embed",
            BlockKind::Gallery => "gallery",
            BlockKind::Button => "button",
            BlockKind::Columns => "columns",
            BlockKind::Spacer => "spacer",
            BlockKind::Card => "card",
            BlockKind::Cta => "cta",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Compact,
    #[default]
    Normal,
    Relaxed,
    Loose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlockWidth {
    #[default]
    Full,
    ThreeQuarter,
    TwoThirds,
    Half,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShadowLevel {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HoverEffect {
    #[default]
    None,
    Lift,
    Glow,
    Zoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundStyle {
    #[default]
    None,
    Solid,
    Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
}

/// Presentation attributes shared by every block variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockStyle {
    pub spacing: Spacing,
    pub width: BlockWidth,
    pub shadow: ShadowLevel,
    /// Percentage, 0..=100.
    pub opacity: u8,
    pub hover: HoverEffect,
    pub background: BackgroundStyle,
    pub background_color: Option<String>,
    pub border: BorderStyle,
    /// Pixels.
    pub border_radius: u16,
    /// Pixels.
    pub padding: u16,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            spacing: Spacing::Normal,
            width: BlockWidth::Full,
            shadow: ShadowLevel::None,
            opacity: 100,
            hover: HoverEffect::None,
            background: BackgroundStyle::None,
            background_color: None,
            border: BorderStyle::None,
            border_radius: 8,
            padding: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MediaSize {
    Small,
    #[default]
    Medium,
    Large,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListType {
    #[default]
    Unordered,
    Ordered,
    Checklist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    #[default]
    Disc,
    Circle,
    Square,
    Decimal,
    Roman,
    Alpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DividerStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

/// One side of a two-column block: either prose or a single image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnContent {
    Text { content: String },
    Image { url: String, caption: String },
}

impl Default for ColumnContent {
    fn default() -> Self {
        ColumnContent::Text {
            content: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ButtonTarget {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

/// Type-specific payload. Each variant carries only its own fields, so a
/// block can never accumulate stale fields from another kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockBody {
    Heading {
        content: String,
        level: HeadingLevel,
        alignment: Alignment,
        text_color: Option<String>,
    },
    /// Opaque markup produced by the rich-text editor, replayed verbatim.
    Text {
        content: String,
    },
    Image {
        url: String,
        caption: String,
        size: MediaSize,
        alignment: Alignment,
    },
    Video {
        url: String,
        caption: String,
        size: MediaSize,
        alignment: Alignment,
    },
    Quote {
        text: String,
        attribution: String,
    },
    List {
        items: Vec<String>,
        list_type: ListType,
        list_style: ListStyle,
        /// Sparse index map; only meaningful for checklists.
        checked: BTreeMap<usize, bool>,
    },
    Divider {
        // The body is flattened into Block, which has its own `style` key.
        #[serde(rename = "divider_style")]
        style: DividerStyle,
    },
    Embed {
        url: String,
    },
    Gallery {
        images: Vec<String>,
    },
    Button {
        label: String,
        url: String,
        color: String,
        alignment: Alignment,
    },
    Columns {
        left: ColumnContent,
        right: ColumnContent,
    },
    Spacer {
        /// Pixels.
        height: u16,
    },
    Card {
        title: String,
        content: String,
        image: Option<String>,
        link: Option<String>,
    },
    Cta {
        title: String,
        description: String,
        primary: Option<ButtonTarget>,
        secondary: Option<ButtonTarget>,
        contact: ContactInfo,
    },
}

impl BlockBody {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockBody::Heading { .. } => BlockKind::Heading,
            BlockBody::Text { .. } => BlockKind::Text,
            BlockBody::Image { .. } => BlockKind::Image,
            BlockBody::Video { .. } => BlockKind::Video,
            BlockBody::Quote { .. } => BlockKind::Quote,
            BlockBody::List { .. } => BlockKind::List,
            BlockBody::Divider { .. } => BlockKind::Divider,
            BlockBody::Embed { .. } => BlockKind::Embed,
            BlockBody::Gallery { .. } => BlockKind::Gallery,
            BlockBody::Button { .. } => BlockKind::Button,
            BlockBody::Columns { .. } => BlockKind::Columns,
            BlockBody::Spacer { .. } => BlockKind::Spacer,
            BlockBody::Card { .. } => BlockKind::Card,
            BlockBody::Cta { .. } => BlockKind::Cta,
        }
    }

    /// Empty payload with the defaults the editor surface for this kind
    /// expects. Exhaustive over the enum so no kind can ship without its
    /// required fields.
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading => BlockBody::Heading {
                content: String::new(),
                level: HeadingLevel::H2,
                alignment: Alignment::Left,
                text_color: None,
            },
            BlockKind::Text => BlockBody::Text {
                content: String::new(),
            },
            BlockKind::Image => BlockBody::Image {
                url: String::new(),
                caption: String::new(),
                size: MediaSize::Medium,
                alignment: Alignment::Center,
            },
            BlockKind::Video => BlockBody::Video {
                url: String::new(),
                caption: String::new(),
                size: MediaSize::Medium,
                alignment: Alignment::Center,
            },
            BlockKind::Quote => BlockBody::Quote {
                text: String::new(),
                attribution: String::new(),
            },
            BlockKind::List => BlockBody::List {
                items: vec![String::from("List item")],
                list_type: ListType::Unordered,
                list_style: ListStyle::Disc,
                checked: BTreeMap::new(),
            },
            BlockKind::Divider => BlockBody::Divider {
                style: DividerStyle::Solid,
            },
            BlockKind::Embed => BlockBody::Embed { url: String::new() },
            BlockKind::Gallery => BlockBody::Gallery { images: Vec::new() },
            BlockKind::Button => BlockBody::Button {
                label: String::from("Learn more"),
                url: String::new(),
                color: String::from("#2563eb"),
                alignment: Alignment::Center,
            },
            BlockKind::Columns => BlockBody::Columns {
                left: ColumnContent::default(),
                right: ColumnContent::default(),
            },
            BlockKind::Spacer => BlockBody::Spacer { height: 40 },
            BlockKind::Card => BlockBody::Card {
                title: String::new(),
                content: String::new(),
                image: None,
                link: None,
            },
            BlockKind::Cta => BlockBody::Cta {
                title: String::new(),
                description: String::new(),
                primary: None,
                secondary: None,
                contact: ContactInfo::default(),
            },
        }
    }
}

/// One content unit of a post body. The id is assigned at creation, stays
/// stable across edits, and is never reused; the body variant never changes
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: Uuid,
    #[serde(default)]
    pub style: BlockStyle,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl Block {
    /// A fresh block with kind-appropriate defaults.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: BlockStyle::default(),
            body: BlockBody::empty(kind),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }

    /// Copy of this block under a new identity.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            style: self.style.clone(),
            body: self.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_kind() {
        for kind in BlockKind::ALL {
            let block = Block::new(kind);
            assert_eq!(block.kind(), kind);
            assert_eq!(block.style, BlockStyle::default());
        }
    }

    #[test]
    fn duplicate_gets_fresh_id() {
        let block = Block::new(BlockKind::Heading);
        let copy = block.duplicate();
        assert_ne!(block.id, copy.id);
        assert_eq!(block.body, copy.body);
        assert_eq!(block.style, copy.style);
    }

    #[test]
    fn kind_tag_matches_serialized_type() {
        for kind in BlockKind::ALL {
            let block = Block::new(kind);
            let value = serde_json::to_value(&block).unwrap();
            assert_eq!(value["type"], kind.as_str());
        }
    }
}
