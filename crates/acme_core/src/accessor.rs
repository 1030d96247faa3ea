//! Theme accessor: what descendant code calls to get `{colors, setColors}`.
//!
//! The enclosing scope is passed explicitly. What happens without one
//! depends on the app's [`MissingScopePolicy`]: admin and mobile hand out
//! their default palette with a no-op setter, user web fails with
//! [`ThemeError::MissingProvider`].

use acme_types::ColorTheme;

use crate::app::App;
use crate::error::{Result, ThemeError};
use crate::store::{ScopeHandle, SetColors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingScopePolicy {
    /// Return the fallback palette and a no-op setter.
    Fallback,
    /// Fail with [`ThemeError::MissingProvider`].
    Strict,
}

/// Result of [`ThemeAccessor::access`].
#[derive(Debug, Clone)]
pub struct Colors {
    pub colors: ColorTheme,
    pub set_colors: SetColors,
}

#[derive(Debug, Clone)]
pub struct ThemeAccessor {
    fallback: ColorTheme,
    policy: MissingScopePolicy,
}

impl ThemeAccessor {
    pub fn new(fallback: ColorTheme, policy: MissingScopePolicy) -> Self {
        Self { fallback, policy }
    }

    /// Accessor with the app's default palette and policy.
    pub fn for_app(app: App) -> Self {
        Self::new(app.default_variant().default_theme(), app.missing_scope_policy())
    }

    pub fn policy(&self) -> MissingScopePolicy {
        self.policy
    }

    pub fn access(&self, scope: Option<&ScopeHandle>) -> Result<Colors> {
        match (scope, self.policy) {
            (Some(handle), _) => Ok(Colors {
                colors: handle.read(),
                set_colors: handle.setter(),
            }),
            (None, MissingScopePolicy::Fallback) => Ok(Colors {
                colors: self.fallback.clone(),
                set_colors: SetColors::Noop,
            }),
            (None, MissingScopePolicy::Strict) => Err(ThemeError::MissingProvider),
        }
    }
}

/// Shorthand for `ThemeAccessor::for_app(app).access(scope)`.
pub fn use_colors(app: App, scope: Option<&ScopeHandle>) -> Result<Colors> {
    ThemeAccessor::for_app(app).access(scope)
}

#[cfg(test)]
mod tests {
    use acme_constant::theme;

    use super::*;
    use crate::error::MISSING_PROVIDER_MESSAGE;
    use crate::store::initialize;

    #[test]
    fn test_strict_without_scope_errors() {
        let err = use_colors(App::UserWeb, None).unwrap_err();
        assert!(matches!(err, ThemeError::MissingProvider));
        assert_eq!(err.to_string(), MISSING_PROVIDER_MESSAGE);
    }

    #[test]
    fn test_fallback_without_scope_returns_default() {
        let admin = use_colors(App::AdminWeb, None).unwrap();
        assert_eq!(admin.colors, theme::admin());
        assert!(admin.set_colors.is_noop());

        let mobile = use_colors(App::Mobile, None).unwrap();
        assert_eq!(mobile.colors, theme::mobile_light());
        mobile.set_colors.set(theme::mobile_dark());
        assert_eq!(use_colors(App::Mobile, None).unwrap().colors, theme::mobile_light());
    }

    #[test]
    fn test_scoped_access_reads_and_writes_store() {
        let handle = initialize(theme::user());
        for app in App::ALL {
            let colors = use_colors(app, Some(&handle)).unwrap();
            assert_eq!(colors.colors, theme::user());
            assert!(!colors.set_colors.is_noop());
        }

        let colors = use_colors(App::UserWeb, Some(&handle)).unwrap();
        colors.set_colors.set(theme::admin());
        assert_eq!(handle.read(), theme::admin());
    }

    #[test]
    fn test_custom_fallback() {
        let accessor = ThemeAccessor::new(theme::mobile_dark(), MissingScopePolicy::Fallback);
        assert_eq!(accessor.access(None).unwrap().colors, theme::mobile_dark());
        assert_eq!(accessor.policy(), MissingScopePolicy::Fallback);
    }
}
