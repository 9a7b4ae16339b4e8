use be_core::{
    Alignment, BlockStyle, BlockWidth, BorderStyle, DividerStyle, HoverEffect, ListStyle,
    MediaSize, ShadowLevel, Spacing,
};

/// Device-width toggle for the preview. A pure display concern: it only
/// swaps the wrapper's max-width and carries no state into the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    pub fn max_width(&self) -> &'static str {
        match self {
            Device::Desktop => "100%",
            Device::Tablet => "768px",
            Device::Mobile => "390px",
        }
    }
}

pub fn alignment_keyword(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

pub fn media_width(size: MediaSize) -> &'static str {
    match size {
        MediaSize::Small => "40%",
        MediaSize::Medium => "60%",
        MediaSize::Large => "80%",
        MediaSize::Full => "100%",
    }
}

pub fn block_width(width: BlockWidth) -> &'static str {
    match width {
        BlockWidth::Full => "100%",
        BlockWidth::ThreeQuarter => "75%",
        BlockWidth::TwoThirds => "66.67%",
        BlockWidth::Half => "50%",
        BlockWidth::Third => "33.33%",
    }
}

pub fn shadow_value(shadow: ShadowLevel) -> Option<&'static str> {
    match shadow {
        ShadowLevel::None => None,
        ShadowLevel::Small => Some("0 1px 3px rgba(0,0,0,0.12)"),
        ShadowLevel::Medium => Some("0 4px 10px rgba(0,0,0,0.15)"),
        ShadowLevel::Large => Some("0 10px 28px rgba(0,0,0,0.22)"),
    }
}

pub fn spacing_margin(spacing: Spacing) -> &'static str {
    match spacing {
        Spacing::Compact => "8px",
        Spacing::Normal => "16px",
        Spacing::Relaxed => "28px",
        Spacing::Loose => "44px",
    }
}

pub fn list_style_keyword(style: ListStyle) -> &'static str {
    match style {
        ListStyle::Disc => "disc",
        ListStyle::Circle => "circle",
        ListStyle::Square => "square",
        ListStyle::Decimal => "decimal",
        ListStyle::Roman => "upper-roman",
        ListStyle::Alpha => "upper-alpha",
    }
}

pub fn divider_keyword(style: DividerStyle) -> &'static str {
    match style {
        DividerStyle::Solid => "solid",
        DividerStyle::Dashed => "dashed",
        DividerStyle::Dotted => "dotted",
        DividerStyle::Double => "double",
    }
}

pub fn hover_class(hover: HoverEffect) -> Option<&'static str> {
    match hover {
        HoverEffect::None => None,
        HoverEffect::Lift => Some("hover-lift"),
        HoverEffect::Glow => Some("hover-glow"),
        HoverEffect::Zoom => Some("hover-zoom"),
    }
}

/// Inline style string for a block's shared presentation attributes.
pub fn container_style(style: &BlockStyle) -> String {
    let mut out = String::new();
    out.push_str("margin: ");
    out.push_str(spacing_margin(style.spacing));
    out.push_str(" auto; width: ");
    out.push_str(block_width(style.width));
    out.push(';');
    if let Some(shadow) = shadow_value(style.shadow) {
        out.push_str(" box-shadow: ");
        out.push_str(shadow);
        out.push(';');
    }
    let opacity = style.opacity.min(100);
    if opacity < 100 {
        out.push_str(&format!(" opacity: 0.{opacity:02};"));
    }
    if let Some(color) = &style.background_color {
        out.push_str(" background-color: ");
        out.push_str(color);
        out.push(';');
    }
    if style.border != BorderStyle::None {
        let keyword = match style.border {
            BorderStyle::None => unreachable!(),
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        };
        out.push_str(&format!(" border: 1px {keyword} currentColor;"));
    }
    out.push_str(&format!(
        " border-radius: {}px; padding: {}px;",
        style.border_radius, style.padding
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_renders_baseline_box() {
        let css = container_style(&BlockStyle::default());
        assert!(css.contains("width: 100%"));
        assert!(css.contains("border-radius: 8px"));
        assert!(css.contains("padding: 16px"));
        assert!(!css.contains("box-shadow"));
        assert!(!css.contains("opacity"));
    }

    #[test]
    fn partial_opacity_is_emitted_as_fraction() {
        let style = BlockStyle {
            opacity: 75,
            ..BlockStyle::default()
        };
        assert!(container_style(&style).contains("opacity: 0.75"));
    }

    #[test]
    fn opacity_is_clamped_to_the_documented_range() {
        let over = BlockStyle {
            opacity: 150,
            ..BlockStyle::default()
        };
        assert!(!container_style(&over).contains("opacity"));

        let zero = BlockStyle {
            opacity: 0,
            ..BlockStyle::default()
        };
        assert!(container_style(&zero).contains("opacity: 0.00"));
    }
}
