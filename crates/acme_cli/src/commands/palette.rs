//! `acme-theme variants|css|diff`.

use acme_constant::ThemeVariant;
use acme_core::{App, ColorTheme, CssVariablePersistence, StyleDeclaration, ThemePersistence};
use anyhow::Result;
use serde::Serialize;

use super::{parse_variant, Session};
use crate::output;

#[derive(Serialize)]
struct VariantRow {
    name: &'static str,
    primary: String,
    background: String,
    default_for: Vec<&'static str>,
}

pub fn variants(current_app: App) -> Result<()> {
    output::header("Built-in Palettes");

    let mut table = output::table();
    output::table_header(&mut table, &["Palette", "Primary", "Background", "Default for"]);
    let rows: Vec<_> = ThemeVariant::ALL
        .into_iter()
        .map(|variant| {
            let theme = variant.default_theme();
            let default_for: Vec<_> = App::ALL
                .into_iter()
                .filter(|app| app.default_variant() == variant)
                .map(App::name)
                .collect();
            let marker = if current_app.default_variant() == variant { " *" } else { "" };
            let label = format!("{}{}", variant.name(), marker);
            let apps = default_for.join(", ");
            output::table_row(
                &mut table,
                &[label.as_str(), theme.primary.as_str(), theme.background.as_str(), apps.as_str()],
            );
            VariantRow {
                name: variant.name(),
                primary: theme.primary,
                background: theme.background,
                default_for,
            }
        })
        .collect();
    output::table_print(&table, &rows);
    Ok(())
}

/// The theme as a block of custom properties under `selector`.
pub fn render_css(theme: &ColorTheme, selector: &str) -> Result<String> {
    let sink = CssVariablePersistence::new(StyleDeclaration::new());
    sink.persist(theme)?;
    Ok(sink.target().to_css(selector))
}

pub fn css(session: &Session, selector: &str) -> Result<()> {
    output::plain("css", &render_css(&session.current(), selector)?);
    Ok(())
}

#[derive(Serialize)]
struct DiffRow<'a> {
    slot: &'a str,
    current: &'a str,
    palette: &'a str,
}

pub fn diff(session: &Session, variant: &str) -> Result<()> {
    let variant = parse_variant(variant)?;
    let current = session.current();
    let changes = current.diff(&variant.default_theme());

    if changes.is_empty() {
        output::success(&format!("Theme matches the {} palette", variant));
        return Ok(());
    }

    output::header(&format!("{} slot(s) differ from {}", changes.len(), variant));
    let mut table = output::table();
    output::table_header(&mut table, &["Slot", "Current", variant.name()]);
    let rows: Vec<_> = changes
        .iter()
        .map(|(slot, palette)| {
            let current = current.get(slot);
            output::table_row(&mut table, &[slot.key(), current, palette]);
            DiffRow {
                slot: slot.key(),
                current,
                palette,
            }
        })
        .collect();
    output::table_print(&table, &rows);
    Ok(())
}
