//! The three client apps and what each one does with its theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use acme_constant::ThemeVariant;

use crate::accessor::MissingScopePolicy;
use crate::error::ThemeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum App {
    #[serde(alias = "admin")]
    AdminWeb,
    #[serde(alias = "user")]
    UserWeb,
    #[default]
    Mobile,
}

/// Where an app mirrors its theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceKind {
    /// In-memory only.
    None,
    /// One serialized record in a key-value store, restored at startup.
    KeyValue,
    /// One CSS custom property per slot on the document root; never read back.
    CssProperties,
}

impl App {
    pub const ALL: [App; 3] = [App::AdminWeb, App::UserWeb, App::Mobile];

    pub fn name(self) -> &'static str {
        match self {
            App::AdminWeb => "admin-web",
            App::UserWeb => "user-web",
            App::Mobile => "mobile",
        }
    }

    pub fn default_variant(self) -> ThemeVariant {
        match self {
            App::AdminWeb => ThemeVariant::Admin,
            App::UserWeb => ThemeVariant::User,
            App::Mobile => ThemeVariant::Mobile,
        }
    }

    /// Admin and mobile fall back to their default; user web refuses.
    pub fn missing_scope_policy(self) -> MissingScopePolicy {
        match self {
            App::AdminWeb | App::Mobile => MissingScopePolicy::Fallback,
            App::UserWeb => MissingScopePolicy::Strict,
        }
    }

    pub fn persistence_kind(self) -> PersistenceKind {
        match self {
            App::AdminWeb => PersistenceKind::None,
            App::UserWeb => PersistenceKind::CssProperties,
            App::Mobile => PersistenceKind::KeyValue,
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for App {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" | "admin-web" => Ok(App::AdminWeb),
            "user" | "user-web" => Ok(App::UserWeb),
            "mobile" => Ok(App::Mobile),
            other => Err(ThemeError::Config(format!(
                "unknown app '{}'. Available: admin, user, mobile",
                other
            ))),
        }
    }
}
