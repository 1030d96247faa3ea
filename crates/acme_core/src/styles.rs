//! Mobile style helpers: named text/background style objects from the current palette.
//!
//! Serialized field names match React Native style props (`color`,
//! `backgroundColor`, `fontSize`, `fontWeight`).

use serde::Serialize;

use acme_types::{ColorTheme, ThemeSlot};

use crate::accessor::ThemeAccessor;
use crate::error::Result;
use crate::store::ScopeHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStyle {
    pub background_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontStyle {
    pub color: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
}

/// Style objects derived from one palette snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicColors {
    pub text_primary: TextStyle,
    pub text_secondary: TextStyle,
    pub text_background: TextStyle,
    pub text_foreground: TextStyle,
    pub text_card: TextStyle,
    pub text_muted: TextStyle,
    pub text_accent: TextStyle,
    pub text_destructive: TextStyle,

    pub bg_primary: ViewStyle,
    pub bg_secondary: ViewStyle,
    pub bg_background: ViewStyle,
    pub bg_card: ViewStyle,
    pub bg_muted: ViewStyle,
    pub bg_accent: ViewStyle,
    pub bg_destructive: ViewStyle,
    pub bg_border: ViewStyle,

    pub bg_sidebar: ViewStyle,
    pub text_sidebar: TextStyle,
    pub bg_sidebar_primary: ViewStyle,
    pub text_sidebar_primary: TextStyle,
    pub bg_sidebar_accent: ViewStyle,
    pub text_sidebar_accent: TextStyle,

    #[serde(skip)]
    colors: ColorTheme,
}

fn text(theme: &ColorTheme, slot: ThemeSlot) -> TextStyle {
    TextStyle {
        color: theme.get(slot).to_string(),
    }
}

fn view(theme: &ColorTheme, slot: ThemeSlot) -> ViewStyle {
    ViewStyle {
        background_color: theme.get(slot).to_string(),
    }
}

impl DynamicColors {
    pub fn from_theme(theme: &ColorTheme) -> Self {
        use ThemeSlot::*;
        Self {
            text_primary: text(theme, Primary),
            text_secondary: text(theme, Secondary),
            text_background: text(theme, Background),
            text_foreground: text(theme, Foreground),
            text_card: text(theme, CardForeground),
            text_muted: text(theme, MutedForeground),
            text_accent: text(theme, AccentForeground),
            text_destructive: text(theme, Destructive),

            bg_primary: view(theme, Primary),
            bg_secondary: view(theme, Secondary),
            bg_background: view(theme, Background),
            bg_card: view(theme, Card),
            bg_muted: view(theme, Muted),
            bg_accent: view(theme, Accent),
            bg_destructive: view(theme, Destructive),
            bg_border: view(theme, Border),

            bg_sidebar: view(theme, Sidebar),
            text_sidebar: text(theme, SidebarForeground),
            bg_sidebar_primary: view(theme, SidebarPrimary),
            text_sidebar_primary: text(theme, SidebarPrimaryForeground),
            bg_sidebar_accent: view(theme, SidebarAccent),
            text_sidebar_accent: text(theme, SidebarAccentForeground),

            colors: theme.clone(),
        }
    }

    /// Styles for whatever `accessor` resolves in `scope`.
    pub fn resolve(accessor: &ThemeAccessor, scope: Option<&ScopeHandle>) -> Result<Self> {
        let colors = accessor.access(scope)?.colors;
        tracing::debug!(primary = %colors.primary, "resolving dynamic colors");
        Ok(Self::from_theme(&colors))
    }

    /// Primary-colored text at the given size and weight.
    pub fn primary_text(&self, font_size: f32, font_weight: FontWeight) -> FontStyle {
        FontStyle {
            color: self.colors.primary.clone(),
            font_size,
            font_weight,
        }
    }

    /// Any slot by name.
    pub fn get_color(&self, slot: ThemeSlot) -> &str {
        self.colors.get(slot)
    }
}
