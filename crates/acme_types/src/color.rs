//! ColorTheme: the closed set of design-token slots shared by every app.
//!
//! The struct and the [`ThemeSlot`] enum are generated from one table so the
//! slot order, the field and the wire key can never drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ThemeOverrides;

macro_rules! color_theme {
    ($( $(#[$doc:meta])* $field:ident => $slot:ident = $key:literal; )+) => {
        /// One full palette. Every slot is present; values are opaque strings
        /// (CSS color expressions on web, color literals on mobile).
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct ColorTheme {
            $( $(#[$doc])* pub $field: String, )+
        }

        /// Names one slot of a [`ColorTheme`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ThemeSlot {
            $( $slot, )+
        }

        impl ThemeSlot {
            /// Number of slots in a theme.
            pub const COUNT: usize = [$( $key ),+].len();

            /// Every slot, in declaration order.
            pub const ALL: [ThemeSlot; ThemeSlot::COUNT] = [$( ThemeSlot::$slot ),+];

            /// Wire key (camelCase), as used in the persisted record and CSS property names.
            pub const fn key(self) -> &'static str {
                match self {
                    $( ThemeSlot::$slot => $key, )+
                }
            }
        }

        impl ColorTheme {
            /// Current value of `slot`.
            pub fn get(&self, slot: ThemeSlot) -> &str {
                match slot {
                    $( ThemeSlot::$slot => &self.$field, )+
                }
            }

            fn slot_mut(&mut self, slot: ThemeSlot) -> &mut String {
                match slot {
                    $( ThemeSlot::$slot => &mut self.$field, )+
                }
            }
        }
    };
}

color_theme! {
    /// Corner radius token (not a color).
    radius => Radius = "radius";

    background => Background = "background";
    foreground => Foreground = "foreground";

    card => Card = "card";
    card_foreground => CardForeground = "cardForeground";

    popover => Popover = "popover";
    popover_foreground => PopoverForeground = "popoverForeground";

    primary => Primary = "primary";
    primary_foreground => PrimaryForeground = "primaryForeground";

    secondary => Secondary = "secondary";
    secondary_foreground => SecondaryForeground = "secondaryForeground";

    muted => Muted = "muted";
    muted_foreground => MutedForeground = "mutedForeground";

    accent => Accent = "accent";
    accent_foreground => AccentForeground = "accentForeground";

    destructive => Destructive = "destructive";

    border => Border = "border";
    input => Input = "input";
    /// Focus ring.
    ring => Ring = "ring";

    sidebar => Sidebar = "sidebar";
    sidebar_foreground => SidebarForeground = "sidebarForeground";
    sidebar_primary => SidebarPrimary = "sidebarPrimary";
    sidebar_primary_foreground => SidebarPrimaryForeground = "sidebarPrimaryForeground";
    sidebar_accent => SidebarAccent = "sidebarAccent";
    sidebar_accent_foreground => SidebarAccentForeground = "sidebarAccentForeground";
    sidebar_border => SidebarBorder = "sidebarBorder";
    sidebar_ring => SidebarRing = "sidebarRing";
}

impl ThemeSlot {
    /// CSS custom property name for this slot, e.g. `--cardForeground`.
    pub fn css_property(self) -> String {
        format!("--{}", self.key())
    }

    /// Looks a slot up by wire key. Also accepts kebab/snake spellings
    /// (`card-foreground`, `card_foreground`), ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        let wanted: String = key
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|slot| slot.key().eq_ignore_ascii_case(&wanted))
    }

    /// Slots whose name starts with `sidebar`.
    pub fn is_sidebar(self) -> bool {
        self.key().starts_with("sidebar")
    }
}

impl fmt::Display for ThemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names no slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSlot(pub String);

impl fmt::Display for UnknownSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme slot: {}", self.0)
    }
}

impl std::error::Error for UnknownSlot {}

impl FromStr for ThemeSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownSlot(s.to_string()))
    }
}

impl Serialize for ThemeSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ThemeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

impl ColorTheme {
    /// Overwrites one slot.
    pub fn set(&mut self, slot: ThemeSlot, value: impl Into<String>) {
        *self.slot_mut(slot) = value.into();
    }

    /// `(slot, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeSlot, &str)> + '_ {
        ThemeSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Overwrites every slot named in `overrides`; other slots are kept.
    pub fn apply_overrides(&mut self, overrides: &ThemeOverrides) {
        for (slot, value) in overrides.iter() {
            self.set(slot, value);
        }
    }

    /// Copy of `self` with `overrides` applied.
    pub fn with_overrides(&self, overrides: &ThemeOverrides) -> Self {
        let mut merged = self.clone();
        merged.apply_overrides(overrides);
        merged
    }

    /// Slots where `other` differs from `self`, carrying `other`'s values.
    /// `self.with_overrides(&self.diff(other)) == *other` always holds.
    pub fn diff(&self, other: &ColorTheme) -> ThemeOverrides {
        other
            .iter()
            .filter(|(slot, value)| self.get(*slot) != *value)
            .collect()
    }
}
