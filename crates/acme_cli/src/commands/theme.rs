//! `acme-theme show|get|set|apply|use|reset`.

use std::path::Path;

use acme_core::ThemeOverrides;
use anyhow::{Context, Result};
use serde::Serialize;

use super::{parse_slot, parse_variant, Session};
use crate::output;

#[derive(Serialize)]
struct SlotRow<'a> {
    slot: &'a str,
    value: &'a str,
}

pub fn show(session: &Session) -> Result<()> {
    let theme = session.current();
    let config = session.config();

    output::header(&format!("Theme: {}", config.app));

    let mut table = output::table();
    output::table_header(&mut table, &["Slot", "Value"]);
    let rows: Vec<_> = theme
        .iter()
        .map(|(slot, value)| {
            output::table_row(&mut table, &[slot.key(), value]);
            SlotRow {
                slot: slot.key(),
                value,
            }
        })
        .collect();
    output::table_print(&table, &rows);

    if let Some(entry) = session.storage().entry(&config.storage_key)? {
        output::dim(&format!(
            "saved under '{}' at {}",
            entry.key,
            entry.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    Ok(())
}

pub fn get(session: &Session, slot: &str) -> Result<()> {
    let slot = parse_slot(slot)?;
    output::plain(slot.key(), session.current().get(slot));
    Ok(())
}

pub fn set(session: &Session, slot: &str, value: String) -> Result<()> {
    let slot = parse_slot(slot)?;
    let mut theme = session.current();
    theme.set(slot, value);
    session.commit(theme)?;
    output::success(&format!("Set {}", slot));
    Ok(())
}

pub fn apply(session: &Session, file: &Path) -> Result<()> {
    let overrides = read_overrides(file)?;
    session.commit(session.current().with_overrides(&overrides))?;
    output::success(&format!("Applied {} override(s) from {}", overrides.len(), file.display()));
    for (slot, value) in overrides.iter() {
        output::kv(slot.key(), value);
    }
    Ok(())
}

pub fn use_variant(session: &Session, variant: &str) -> Result<()> {
    let variant = parse_variant(variant)?;
    session.commit(variant.default_theme())?;
    output::success(&format!("Using {} palette", variant));
    Ok(())
}

pub fn reset(session: &Session) -> Result<()> {
    let app = session.config().app;
    session.commit(app.default_variant().default_theme())?;
    output::success(&format!("Reset {} theme to default", app));
    Ok(())
}

fn read_overrides(file: &Path) -> Result<ThemeOverrides> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("read overrides file {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse overrides in {}", file.display()))
}

#[cfg(test)]
mod tests {
    use acme_constant::theme;
    use acme_core::{App, ThemeError};

    use super::*;
    use crate::commands::tests::session_in;

    #[test]
    fn test_set_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        set(&session_in(&dir, App::Mobile), "card-foreground", "#111111".into()).unwrap();
        let theme = session_in(&dir, App::Mobile).current();
        assert_eq!(theme.card_foreground, "#111111");
        assert_eq!(theme.primary, theme::mobile_light().primary);
    }

    #[test]
    fn test_unknown_slot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = set(&session_in(&dir, App::Mobile), "shadow", "x".into()).unwrap_err();
        assert_eq!(err.to_string(), "unknown theme slot: shadow");
        assert!(matches!(err.downcast_ref::<ThemeError>(), Some(ThemeError::UnknownSlot(_))));
    }

    #[test]
    fn test_apply_merges_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("overrides.json");
        std::fs::write(&file, r##"{"primary": "#FF0000", "sidebarRing": "#00FF00"}"##).unwrap();

        apply(&session_in(&dir, App::AdminWeb), &file).unwrap();
        let theme = session_in(&dir, App::AdminWeb).current();
        assert_eq!(theme.primary, "#FF0000");
        assert_eq!(theme.sidebar_ring, "#00FF00");
        assert_eq!(theme.background, theme::admin().background);
    }

    #[test]
    fn test_apply_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("overrides.json");
        std::fs::write(&file, r#"{"shadow": "none"}"#).unwrap();
        assert!(apply(&session_in(&dir, App::Mobile), &file).is_err());
        assert_eq!(session_in(&dir, App::Mobile).current(), theme::mobile_light());
    }

    #[test]
    fn test_use_then_reset() {
        let dir = tempfile::tempdir().unwrap();
        use_variant(&session_in(&dir, App::Mobile), "dark").unwrap();
        assert_eq!(session_in(&dir, App::Mobile).current(), theme::mobile_dark());

        reset(&session_in(&dir, App::Mobile)).unwrap();
        assert_eq!(session_in(&dir, App::Mobile).current(), theme::mobile_light());
    }
}
