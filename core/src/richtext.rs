use crate::Alignment;

/// Character range within a text draft. `start > end` is normalized; ranges
/// past the end of the draft are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSelection {
    pub start: usize,
    pub end: usize,
}

impl TextSelection {
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    pub fn all(draft: &str) -> Self {
        Self {
            start: 0,
            end: draft.chars().count(),
        }
    }
}

/// Fixed dispatch table of formatting commands for the rich-text editor.
/// Commands rewrite the draft markup; the result is stored verbatim in the
/// text block's content on save.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
    Align(Alignment),
    UnorderedList,
    OrderedList,
    Link { url: String },
    Font { family: String },
    FontSize { px: u8 },
    Color { color: String },
    Indent,
    Outdent,
    ClearFormatting,
}

/// Apply one formatting command to `draft` over `selection`, returning the
/// rewritten markup. Pure; an empty selection returns the draft unchanged
/// except for block-level commands (align, indent), which apply to the whole
/// draft.
pub fn apply_format(draft: &str, selection: TextSelection, cmd: &FormatCommand) -> String {
    match cmd {
        FormatCommand::Bold => wrap_tag(draft, selection, "b"),
        FormatCommand::Italic => wrap_tag(draft, selection, "i"),
        FormatCommand::Underline => wrap_tag(draft, selection, "u"),
        FormatCommand::Strikethrough => wrap_tag(draft, selection, "s"),
        FormatCommand::Subscript => wrap_tag(draft, selection, "sub"),
        FormatCommand::Superscript => wrap_tag(draft, selection, "sup"),
        FormatCommand::Align(alignment) => {
            let keyword = match alignment {
                Alignment::Left => "left",
                Alignment::Center => "center",
                Alignment::Right => "right",
            };
            format!("<div style=\"text-align: {keyword}\">{draft}</div>")
        }
        FormatCommand::UnorderedList => wrap_list(draft, selection, "ul"),
        FormatCommand::OrderedList => wrap_list(draft, selection, "ol"),
        FormatCommand::Link { url } => wrap_open_close(
            draft,
            selection,
            &format!("<a href=\"{url}\">"),
            "</a>",
        ),
        FormatCommand::Font { family } => wrap_open_close(
            draft,
            selection,
            &format!("<span style=\"font-family: {family}\">"),
            "</span>",
        ),
        FormatCommand::FontSize { px } => wrap_open_close(
            draft,
            selection,
            &format!("<span style=\"font-size: {px}px\">"),
            "</span>",
        ),
        FormatCommand::Color { color } => wrap_open_close(
            draft,
            selection,
            &format!("<span style=\"color: {color}\">"),
            "</span>",
        ),
        FormatCommand::Indent => format!("<div style=\"margin-left: 2em\">{draft}</div>"),
        FormatCommand::Outdent => outdent(draft),
        FormatCommand::ClearFormatting => clear_formatting(draft, selection),
    }
}

fn split_at_selection(draft: &str, selection: TextSelection) -> (String, String, String) {
    let chars: Vec<char> = draft.chars().collect();
    let start = selection.start.min(chars.len());
    let end = selection.end.min(chars.len());
    let prefix: String = chars[..start].iter().collect();
    let selected: String = chars[start..end].iter().collect();
    let suffix: String = chars[end..].iter().collect();
    (prefix, selected, suffix)
}

fn wrap_tag(draft: &str, selection: TextSelection, tag: &str) -> String {
    wrap_open_close(draft, selection, &format!("<{tag}>"), &format!("</{tag}>"))
}

fn wrap_open_close(draft: &str, selection: TextSelection, open: &str, close: &str) -> String {
    let (prefix, selected, suffix) = split_at_selection(draft, selection);
    if selected.is_empty() {
        return draft.to_string();
    }
    format!("{prefix}{open}{selected}{close}{suffix}")
}

fn wrap_list(draft: &str, selection: TextSelection, tag: &str) -> String {
    let (prefix, selected, suffix) = split_at_selection(draft, selection);
    if selected.is_empty() {
        return draft.to_string();
    }
    let mut items = String::new();
    for line in selected.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        items.push_str("<li>");
        items.push_str(line);
        items.push_str("</li>");
    }
    format!("{prefix}<{tag}>{items}</{tag}>{suffix}")
}

fn outdent(draft: &str) -> String {
    const OPEN: &str = "<div style=\"margin-left: 2em\">";
    if let Some(rest) = draft.strip_prefix(OPEN) {
        if let Some(inner) = rest.strip_suffix("</div>") {
            return inner.to_string();
        }
    }
    draft.to_string()
}

/// Strip every tag inside the selection, keeping the text. Same tag walk the
/// HTML importer uses, restricted to the selected range.
fn clear_formatting(draft: &str, selection: TextSelection) -> String {
    let (prefix, selected, suffix) = split_at_selection(draft, selection);
    let mut stripped = String::with_capacity(selected.len());
    let mut in_tag = false;
    for ch in selected.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ => {
                if !in_tag {
                    stripped.push(ch);
                }
            }
        }
    }
    format!("{prefix}{stripped}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_wraps_selection_only() {
        let out = apply_format("hello world", TextSelection::new(0, 5), &FormatCommand::Bold);
        assert_eq!(out, "<b>hello</b> world");
    }

    #[test]
    fn reversed_selection_is_normalized() {
        let out = apply_format("hello", TextSelection::new(5, 0), &FormatCommand::Italic);
        assert_eq!(out, "<i>hello</i>");
    }

    #[test]
    fn empty_selection_leaves_draft_alone() {
        let out = apply_format("hello", TextSelection::new(2, 2), &FormatCommand::Bold);
        assert_eq!(out, "hello");
    }

    #[test]
    fn list_splits_lines_into_items() {
        let draft = "first\nsecond";
        let out = apply_format(draft, TextSelection::all(draft), &FormatCommand::UnorderedList);
        assert_eq!(out, "<ul><li>first</li><li>second</li></ul>");
    }

    #[test]
    fn clear_strips_tags_in_selection() {
        let draft = "<b>bold</b> tail";
        let out = apply_format(
            draft,
            TextSelection::new(0, 11),
            &FormatCommand::ClearFormatting,
        );
        assert_eq!(out, "bold tail");
    }

    #[test]
    fn outdent_reverses_indent() {
        let draft = "body";
        let indented = apply_format(draft, TextSelection::all(draft), &FormatCommand::Indent);
        let out = apply_format(&indented, TextSelection::all(&indented), &FormatCommand::Outdent);
        assert_eq!(out, draft);
    }

    #[test]
    fn selection_past_end_is_clamped() {
        let out = apply_format("ab", TextSelection::new(0, 99), &FormatCommand::Underline);
        assert_eq!(out, "<u>ab</u>");
    }
}
