use crate::{
    alignment_keyword, container_style, divider_keyword, hover_class, list_style_keyword,
    media_width, normalize_embed_url, Device,
};
use be_core::{Block, BlockBody, ButtonTarget, ColumnContent, ContactInfo, ListType, Theme};
use tracing::trace;

/// Pure mapping of the block list plus theme to read-only preview markup.
/// Blocks with empty required content are skipped entirely; that is a
/// content-quality filter, not an error.
pub fn render_preview(blocks: &[Block], theme: &Theme, device: Device) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"post-preview\" style=\"max-width: {}; margin: 0 auto; \
         background-color: {}; color: {}; font-family: {}\">",
        device.max_width(),
        theme.background_color,
        theme.text_color,
        theme.font_family,
    ));
    for block in blocks {
        if !has_renderable_content(&block.body) {
            trace!(kind = %block.kind(), "skipping empty block in preview");
            continue;
        }
        render_block(&mut out, block, theme);
    }
    out.push_str("</div>");
    out
}

/// Whether a block carries enough content to be worth rendering.
pub fn has_renderable_content(body: &BlockBody) -> bool {
    match body {
        BlockBody::Heading { content, .. } => !content.trim().is_empty(),
        BlockBody::Text { content } => !content.trim().is_empty(),
        BlockBody::Image { url, .. } | BlockBody::Video { url, .. } => !url.trim().is_empty(),
        BlockBody::Quote { text, .. } => !text.trim().is_empty(),
        BlockBody::List { items, .. } => items.iter().any(|item| !item.trim().is_empty()),
        BlockBody::Divider { .. } | BlockBody::Spacer { .. } => true,
        BlockBody::Embed { url } => !url.trim().is_empty(),
        BlockBody::Gallery { images } => !images.is_empty(),
        BlockBody::Button { label, .. } => !label.trim().is_empty(),
        BlockBody::Columns { left, right } => {
            column_has_content(left) || column_has_content(right)
        }
        BlockBody::Card { title, content, .. } => {
            !title.trim().is_empty() || !content.trim().is_empty()
        }
        BlockBody::Cta { title, .. } => !title.trim().is_empty(),
    }
}

fn column_has_content(column: &ColumnContent) -> bool {
    match column {
        ColumnContent::Text { content } => !content.trim().is_empty(),
        ColumnContent::Image { url, .. } => !url.trim().is_empty(),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_block(out: &mut String, block: &Block, theme: &Theme) {
    out.push_str("<div class=\"block block-");
    out.push_str(block.kind().as_str());
    if let Some(class) = hover_class(block.style.hover) {
        out.push(' ');
        out.push_str(class);
    }
    out.push_str("\" style=\"");
    out.push_str(&container_style(&block.style));
    out.push_str("\">");
    render_body(out, &block.body, theme);
    out.push_str("</div>");
}

fn render_body(out: &mut String, body: &BlockBody, theme: &Theme) {
    match body {
        BlockBody::Heading {
            content,
            level,
            alignment,
            text_color,
        } => {
            let tag = level.tag();
            let color = text_color.as_deref().unwrap_or(&theme.primary_color);
            out.push_str(&format!(
                "<{tag} style=\"text-align: {}; color: {color}\">{}</{tag}>",
                alignment_keyword(*alignment),
                escape_html(content),
            ));
        }
        // Rich-text markup is stored opaque and replayed verbatim by
        // contract with the editor.
        BlockBody::Text { content } => {
            out.push_str("<div class=\"rich-text\">");
            out.push_str(content);
            out.push_str("</div>");
        }
        BlockBody::Image {
            url,
            caption,
            size,
            alignment,
        } => {
            out.push_str(&format!(
                "<figure style=\"text-align: {}\"><img src=\"{}\" alt=\"{}\" \
                 style=\"width: {}; border-radius: {}px\">",
                alignment_keyword(*alignment),
                escape_html(url),
                escape_html(caption),
                media_width(*size),
                theme.border_radius,
            ));
            if !caption.trim().is_empty() {
                out.push_str(&format!(
                    "<figcaption>{}</figcaption>",
                    escape_html(caption)
                ));
            }
            out.push_str("</figure>");
        }
        BlockBody::Video {
            url,
            caption,
            size,
            alignment,
        } => {
            out.push_str(&format!(
                "<figure style=\"text-align: {}\"><video controls src=\"{}\" \
                 style=\"width: {}\"></video>",
                alignment_keyword(*alignment),
                escape_html(url),
                media_width(*size),
            ));
            if !caption.trim().is_empty() {
                out.push_str(&format!(
                    "<figcaption>{}</figcaption>",
                    escape_html(caption)
                ));
            }
            out.push_str("</figure>");
        }
        BlockBody::Quote { text, attribution } => {
            out.push_str(&format!(
                "<blockquote style=\"border-left: 4px solid {}\"><p>{}</p>",
                theme.accent_color,
                escape_html(text),
            ));
            if !attribution.trim().is_empty() {
                out.push_str(&format!("<cite>{}</cite>", escape_html(attribution)));
            }
            out.push_str("</blockquote>");
        }
        BlockBody::List {
            items,
            list_type,
            list_style,
            checked,
        } => render_list(out, items, *list_type, list_style, checked),
        BlockBody::Divider { style } => {
            out.push_str(&format!(
                "<hr style=\"border: none; border-top: 2px {} {}\">",
                divider_keyword(*style),
                theme.secondary_color,
            ));
        }
        BlockBody::Embed { url } => {
            out.push_str(&format!(
                "<iframe src=\"{}\" frameborder=\"0\" allowfullscreen \
                 style=\"width: 100%; aspect-ratio: 16/9\"></iframe>",
                escape_html(&normalize_embed_url(url)),
            ));
        }
        BlockBody::Gallery { images } => {
            out.push_str(
                "<div class=\"gallery\" style=\"display: grid; \
                 grid-template-columns: repeat(3, 1fr); gap: 8px\">",
            );
            for image in images {
                out.push_str(&format!(
                    "<img src=\"{}\" style=\"width: 100%; border-radius: {}px\">",
                    escape_html(image),
                    theme.border_radius,
                ));
            }
            out.push_str("</div>");
        }
        BlockBody::Button {
            label,
            url,
            color,
            alignment,
        } => {
            out.push_str(&format!(
                "<div style=\"text-align: {}\"><a href=\"{}\" style=\"display: \
                 inline-block; background-color: {}; color: #ffffff; padding: \
                 10px 24px; border-radius: {}px; text-decoration: none\">{}</a></div>",
                alignment_keyword(*alignment),
                escape_html(url),
                color,
                theme.border_radius,
                escape_html(label),
            ));
        }
        BlockBody::Columns { left, right } => {
            out.push_str("<div style=\"display: flex; gap: 16px\">");
            for column in [left, right] {
                out.push_str("<div style=\"flex: 1\">");
                render_column(out, column, theme);
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }
        BlockBody::Spacer { height } => {
            out.push_str(&format!("<div style=\"height: {height}px\"></div>"));
        }
        BlockBody::Card {
            title,
            content,
            image,
            link,
        } => {
            out.push_str("<div class=\"card\">");
            if let Some(image) = image {
                if !image.trim().is_empty() {
                    out.push_str(&format!(
                        "<img src=\"{}\" style=\"width: 100%; border-radius: {}px\">",
                        escape_html(image),
                        theme.border_radius,
                    ));
                }
            }
            if !title.trim().is_empty() {
                out.push_str(&format!("<h3>{}</h3>", escape_html(title)));
            }
            if !content.trim().is_empty() {
                out.push_str(&format!("<p>{}</p>", escape_html(content)));
            }
            if let Some(link) = link {
                if !link.trim().is_empty() {
                    out.push_str(&format!(
                        "<a href=\"{}\" style=\"color: {}\">Read more</a>",
                        escape_html(link),
                        theme.accent_color,
                    ));
                }
            }
            out.push_str("</div>");
        }
        BlockBody::Cta {
            title,
            description,
            primary,
            secondary,
            contact,
        } => {
            out.push_str("<div class=\"cta\" style=\"text-align: center\">");
            out.push_str(&format!("<h2>{}</h2>", escape_html(title)));
            if !description.trim().is_empty() {
                out.push_str(&format!("<p>{}</p>", escape_html(description)));
            }
            for (target, color) in [
                (primary, &theme.accent_color),
                (secondary, &theme.secondary_color),
            ] {
                if let Some(target) = target {
                    render_cta_button(out, target, color, theme);
                }
            }
            render_contact(out, contact);
            out.push_str("</div>");
        }
    }
}

fn render_list(
    out: &mut String,
    items: &[String],
    list_type: ListType,
    list_style: &be_core::ListStyle,
    checked: &std::collections::BTreeMap<usize, bool>,
) {
    match list_type {
        ListType::Checklist => {
            out.push_str("<div class=\"checklist\">");
            for (index, item) in items.iter().enumerate() {
                if item.trim().is_empty() {
                    continue;
                }
                let mark = if checked.get(&index).copied().unwrap_or(false) {
                    "&#9745;"
                } else {
                    "&#9744;"
                };
                out.push_str(&format!("<div>{mark} {}</div>", escape_html(item)));
            }
            out.push_str("</div>");
        }
        ListType::Unordered | ListType::Ordered => {
            let tag = if list_type == ListType::Ordered { "ol" } else { "ul" };
            out.push_str(&format!(
                "<{tag} style=\"list-style-type: {}\">",
                list_style_keyword(*list_style)
            ));
            for item in items {
                if item.trim().is_empty() {
                    continue;
                }
                out.push_str(&format!("<li>{}</li>", escape_html(item)));
            }
            out.push_str(&format!("</{tag}>"));
        }
    }
}

fn render_column(out: &mut String, column: &ColumnContent, theme: &Theme) {
    match column {
        ColumnContent::Text { content } => {
            out.push_str(&format!("<p>{}</p>", escape_html(content)));
        }
        ColumnContent::Image { url, caption } => {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" style=\"width: 100%; border-radius: {}px\">",
                escape_html(url),
                escape_html(caption),
                theme.border_radius,
            ));
        }
    }
}

fn render_cta_button(out: &mut String, target: &ButtonTarget, color: &str, theme: &Theme) {
    out.push_str(&format!(
        "<a href=\"{}\" style=\"display: inline-block; margin: 4px; \
         background-color: {color}; color: #ffffff; padding: 10px 24px; \
         border-radius: {}px; text-decoration: none\">{}</a>",
        escape_html(&target.url),
        theme.border_radius,
        escape_html(&target.label),
    ));
}

fn render_contact(out: &mut String, contact: &ContactInfo) {
    if contact.is_empty() {
        return;
    }
    out.push_str("<div class=\"cta-contact\">");
    if let Some(email) = &contact.email {
        out.push_str(&format!(
            "<div><a href=\"mailto:{0}\">{0}</a></div>",
            escape_html(email)
        ));
    }
    if let Some(phone) = &contact.phone {
        out.push_str(&format!("<div>{}</div>", escape_html(phone)));
    }
    if let Some(address) = &contact.address {
        out.push_str(&format!("<div>{}</div>", escape_html(address)));
    }
    out.push_str("</div>");
}
