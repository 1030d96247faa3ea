//! Default palettes, one per app.
//!
//! Web palettes are oklch() expressions; mobile palettes are hex literals
//! approximating the same colors. Mobile dark is mobile light with
//! [`MOBILE_DARK_OVERRIDES`] applied.

use std::fmt;
use std::str::FromStr;

use acme_types::{ColorTheme, ThemeOverrides, ThemeSlot};

/// Radius shared by every palette.
pub const RADIUS: &str = "0.625rem";

/// Admin web default (warm hue 30 throughout).
pub fn admin() -> ColorTheme {
    ColorTheme {
        radius: RADIUS.into(),

        background: "oklch(0.99 0.03 30)".into(),
        foreground: "oklch(0.15 0.02 30)".into(),

        card: "oklch(1 0 0)".into(),
        card_foreground: "oklch(0.15 0.02 30)".into(),

        popover: "oklch(1 0 0)".into(),
        popover_foreground: "oklch(0.15 0.02 30)".into(),

        primary: "oklch(0.55 0.2 30)".into(),
        primary_foreground: "oklch(0.98 0.01 30)".into(),

        secondary: "oklch(0.92 0.08 30)".into(),
        secondary_foreground: "oklch(0.18 0.03 30)".into(),

        muted: "oklch(0.95 0.03 30)".into(),
        muted_foreground: "oklch(0.45 0.02 30)".into(),

        accent: "oklch(0.9 0.12 30)".into(),
        accent_foreground: "oklch(0.18 0.03 30)".into(),

        destructive: "oklch(0.65 0.25 20)".into(),

        border: "oklch(0.9 0.03 30)".into(),
        input: "oklch(0.9 0.03 30)".into(),
        ring: "oklch(0.55 0.2 30)".into(),

        sidebar: "oklch(0.97 0.03 30)".into(),
        sidebar_foreground: "oklch(0.15 0.02 30)".into(),
        sidebar_primary: "oklch(0.55 0.2 30)".into(),
        sidebar_primary_foreground: "oklch(0.98 0.01 30)".into(),
        sidebar_accent: "oklch(0.9 0.12 30)".into(),
        sidebar_accent_foreground: "oklch(0.18 0.03 30)".into(),
        sidebar_border: "oklch(0.88 0.02 30)".into(),
        sidebar_ring: "oklch(0.55 0.2 30)".into(),
    }
}

/// User web default (warm surfaces, green hue 150 for interactive slots).
pub fn user() -> ColorTheme {
    ColorTheme {
        radius: RADIUS.into(),

        background: "oklch(0.99 0.03 30)".into(),
        foreground: "oklch(0.15 0.02 30)".into(),

        card: "oklch(1 0 0)".into(),
        card_foreground: "oklch(0.15 0.02 30)".into(),

        popover: "oklch(1 0 0)".into(),
        popover_foreground: "oklch(0.15 0.02 30)".into(),

        primary: "oklch(0.55 0.16 150)".into(),
        primary_foreground: "oklch(0.98 0.01 150)".into(),

        secondary: "oklch(0.92 0.05 150)".into(),
        secondary_foreground: "oklch(0.18 0.04 150)".into(),

        muted: "oklch(0.95 0.02 150)".into(),
        muted_foreground: "oklch(0.45 0.03 150)".into(),

        accent: "oklch(0.9 0.06 150)".into(),
        accent_foreground: "oklch(0.18 0.04 150)".into(),

        destructive: "oklch(0.58 0.24 27)".into(),

        border: "oklch(0.9 0.02 150)".into(),
        input: "oklch(0.9 0.02 150)".into(),
        ring: "oklch(0.55 0.16 150)".into(),

        sidebar: "oklch(0.97 0.02 150)".into(),
        sidebar_foreground: "oklch(0.15 0.02 150)".into(),
        sidebar_primary: "oklch(0.55 0.16 150)".into(),
        sidebar_primary_foreground: "oklch(0.98 0.01 150)".into(),
        sidebar_accent: "oklch(0.9 0.05 150)".into(),
        sidebar_accent_foreground: "oklch(0.18 0.04 150)".into(),
        sidebar_border: "oklch(0.88 0.02 150)".into(),
        sidebar_ring: "oklch(0.55 0.16 150)".into(),
    }
}

/// Mobile light default. Hex approximations of the user web palette.
pub fn mobile_light() -> ColorTheme {
    ColorTheme {
        radius: RADIUS.into(),

        background: "#FFFBF0".into(), // oklch(0.99 0.03 30)
        foreground: "#2C2C2C".into(), // oklch(0.15 0.02 30)

        card: "#FFFFFF".into(),
        card_foreground: "#2C2C2C".into(),

        popover: "#FFFFFF".into(),
        popover_foreground: "#2C2C2C".into(),

        primary: "#0066CC".into(), // oklch(0.55 0.16 150)
        primary_foreground: "#F8F8F8".into(),

        secondary: "#E8F4F8".into(),
        secondary_foreground: "#2E3E42".into(),

        muted: "#F0F7F9".into(),
        muted_foreground: "#6B7C80".into(),

        accent: "#D1E7ED".into(),
        accent_foreground: "#2E3E42".into(),

        destructive: "#CC4125".into(), // oklch(0.58 0.24 27)

        border: "#E0E7E9".into(),
        input: "#E0E7E9".into(),
        ring: "#0066CC".into(),

        sidebar: "#F5F8F9".into(),
        sidebar_foreground: "#2C2C2C".into(),
        sidebar_primary: "#0066CC".into(),
        sidebar_primary_foreground: "#F8F8F8".into(),
        sidebar_accent: "#D1E7ED".into(),
        sidebar_accent_foreground: "#2E3E42".into(),
        sidebar_border: "#DDE4E6".into(),
        sidebar_ring: "#0066CC".into(),
    }
}

/// Slots mobile dark replaces on top of [`mobile_light`]. `radius` is absent.
pub const MOBILE_DARK_OVERRIDES: &[(ThemeSlot, &str)] = &[
    (ThemeSlot::Background, "#1A1A1A"),
    (ThemeSlot::Foreground, "#F0F0F0"),
    (ThemeSlot::Card, "#2A2A2A"),
    (ThemeSlot::CardForeground, "#F0F0F0"),
    (ThemeSlot::Popover, "#2A2A2A"),
    (ThemeSlot::PopoverForeground, "#F0F0F0"),
    (ThemeSlot::Primary, "#4A90E2"),
    (ThemeSlot::PrimaryForeground, "#FFFFFF"),
    (ThemeSlot::Secondary, "#3A3A3A"),
    (ThemeSlot::SecondaryForeground, "#F0F0F0"),
    (ThemeSlot::Muted, "#333333"),
    (ThemeSlot::MutedForeground, "#CCCCCC"),
    (ThemeSlot::Accent, "#444444"),
    (ThemeSlot::AccentForeground, "#F0F0F0"),
    (ThemeSlot::Destructive, "#D32F2F"),
    (ThemeSlot::Border, "#444444"),
    (ThemeSlot::Input, "#444444"),
    (ThemeSlot::Ring, "#4A90E2"),
    (ThemeSlot::Sidebar, "#222222"),
    (ThemeSlot::SidebarForeground, "#F0F0F0"),
    (ThemeSlot::SidebarPrimary, "#4A90E2"),
    (ThemeSlot::SidebarPrimaryForeground, "#FFFFFF"),
    (ThemeSlot::SidebarAccent, "#444444"),
    (ThemeSlot::SidebarAccentForeground, "#F0F0F0"),
    (ThemeSlot::SidebarBorder, "#333333"),
    (ThemeSlot::SidebarRing, "#4A90E2"),
];

pub fn mobile_dark_overrides() -> ThemeOverrides {
    MOBILE_DARK_OVERRIDES.iter().copied().collect()
}

/// Mobile dark: [`mobile_light`] merged with [`MOBILE_DARK_OVERRIDES`].
pub fn mobile_dark() -> ColorTheme {
    mobile_light().with_overrides(&mobile_dark_overrides())
}

/// Named built-in palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    Admin,
    User,
    Mobile,
    MobileDark,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 4] = [
        ThemeVariant::Admin,
        ThemeVariant::User,
        ThemeVariant::Mobile,
        ThemeVariant::MobileDark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemeVariant::Admin => "admin",
            ThemeVariant::User => "user",
            ThemeVariant::Mobile => "mobile",
            ThemeVariant::MobileDark => "mobile-dark",
        }
    }

    pub fn default_theme(self) -> ColorTheme {
        match self {
            ThemeVariant::Admin => admin(),
            ThemeVariant::User => user(),
            ThemeVariant::Mobile => mobile_light(),
            ThemeVariant::MobileDark => mobile_dark(),
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme variant: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for ThemeVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "admin" => Ok(ThemeVariant::Admin),
            "user" => Ok(ThemeVariant::User),
            "mobile" | "mobile-light" => Ok(ThemeVariant::Mobile),
            "mobile-dark" | "dark" => Ok(ThemeVariant::MobileDark),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
