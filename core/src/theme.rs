use serde::{Deserialize, Serialize};

/// Flat style-token record carried alongside the block list. Independent of
/// the blocks themselves; the preview threads it through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    /// Pixels.
    pub border_radius: u16,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::preset(ThemePreset::Classic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    Classic,
    Ocean,
    Sunset,
    Minimal,
}

impl Theme {
    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Classic => Theme {
                primary_color: "#1f2937".into(),
                secondary_color: "#4b5563".into(),
                accent_color: "#2563eb".into(),
                background_color: "#ffffff".into(),
                text_color: "#111827".into(),
                border_radius: 8,
                font_family: "Georgia, serif".into(),
            },
            ThemePreset::Ocean => Theme {
                primary_color: "#0c4a6e".into(),
                secondary_color: "#0369a1".into(),
                accent_color: "#06b6d4".into(),
                background_color: "#f0f9ff".into(),
                text_color: "#082f49".into(),
                border_radius: 12,
                font_family: "'Helvetica Neue', sans-serif".into(),
            },
            ThemePreset::Sunset => Theme {
                primary_color: "#7c2d12".into(),
                secondary_color: "#c2410c".into(),
                accent_color: "#f59e0b".into(),
                background_color: "#fffbeb".into(),
                text_color: "#431407".into(),
                border_radius: 16,
                font_family: "'Palatino Linotype', serif".into(),
            },
            ThemePreset::Minimal => Theme {
                primary_color: "#000000".into(),
                secondary_color: "#525252".into(),
                accent_color: "#737373".into(),
                background_color: "#fafafa".into(),
                text_color: "#171717".into(),
                border_radius: 0,
                font_family: "'Inter', sans-serif".into(),
            },
        }
    }
}
