//! Theme and font-size lookup.
//!
//! The theme axis decides colors and the font-size axis decides base sizes;
//! the two never interact, so six combinations come from two small tables.

use crate::shared::i18n::TextKey;
use serde::{Deserialize, Serialize};

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stable code used for `data-theme` and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            Theme::Dark => TextKey::ThemeDark,
            Theme::Light => TextKey::ThemeLight,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == s)
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Dark, Theme::Light]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            FontSize::Small => TextKey::FontSmall,
            FontSize::Medium => TextKey::FontMedium,
            FontSize::Large => TextKey::FontLarge,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.as_str() == s)
    }

    pub fn all() -> [FontSize; 3] {
        [FontSize::Small, FontSize::Medium, FontSize::Large]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    background: &'static str,
    surface: &'static str,
    text: &'static str,
    muted: &'static str,
    accent: &'static str,
    border: &'static str,
}

const DARK: Palette = Palette {
    background: "#1e1e1e",
    surface: "#252526",
    text: "#e8e8e8",
    muted: "#9d9d9d",
    accent: "#007acc",
    border: "#3c3c3c",
};

const LIGHT: Palette = Palette {
    background: "#f8f9fa",
    surface: "#ffffff",
    text: "#212529",
    muted: "#666666",
    accent: "#005a9e",
    border: "#e0e0e0",
};

/// Resolved style of one theme × font size combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBundle {
    pub theme: Theme,
    pub font_size: FontSize,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub muted: String,
    pub accent: String,
    pub border: String,
    pub base_font_px: u8,
    pub heading_font_px: u8,
}

pub fn style_for(theme: Theme, font_size: FontSize) -> StyleBundle {
    let palette = match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    };
    let (base, heading) = match font_size {
        FontSize::Small => (12, 20),
        FontSize::Medium => (14, 24),
        FontSize::Large => (17, 28),
    };
    StyleBundle {
        theme,
        font_size,
        background: palette.background.to_string(),
        surface: palette.surface.to_string(),
        text: palette.text.to_string(),
        muted: palette.muted.to_string(),
        accent: palette.accent.to_string(),
        border: palette.border.to_string(),
        base_font_px: base,
        heading_font_px: heading,
    }
}

impl StyleBundle {
    /// CSS custom properties for the document body
    pub fn css_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--ims-bg", self.background.clone()),
            ("--ims-surface", self.surface.clone()),
            ("--ims-text", self.text.clone()),
            ("--ims-muted", self.muted.clone()),
            ("--ims-accent", self.accent.clone()),
            ("--ims-border", self.border.clone()),
            ("--ims-font-base", format!("{}px", self.base_font_px)),
            ("--ims-font-heading", format!("{}px", self.heading_font_px)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_are_independent() {
        for theme in Theme::all() {
            let sizes: Vec<_> = FontSize::all().iter().map(|f| style_for(theme, *f)).collect();
            assert!(sizes.windows(2).all(|w| w[0].background == w[1].background));
        }
        for size in FontSize::all() {
            let dark = style_for(Theme::Dark, size);
            let light = style_for(Theme::Light, size);
            assert_eq!(dark.base_font_px, light.base_font_px);
            assert_ne!(dark.background, light.background);
        }
    }

    #[test]
    fn test_css_vars() {
        let style = style_for(Theme::Light, FontSize::Large);
        let vars = style.css_vars();
        assert!(vars.contains(&("--ims-font-base", "17px".to_string())));
        assert_eq!(vars[0], ("--ims-bg", "#f8f9fa".to_string()));
    }

    #[test]
    fn test_codes() {
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("forest"), None);
        assert_eq!(FontSize::from_str("small"), Some(FontSize::Small));
        assert_eq!(FontSize::default(), FontSize::Medium);
    }
}
