//! CSS custom property sink used by the user web app.
//!
//! Each write sets `--<slot key>` on the document root. Nothing is read back.

use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

use acme_types::{ColorTheme, ThemeSlot};

use super::ThemePersistence;
use crate::app::PersistenceKind;
use crate::error::Result;

/// Anything with an inline style that accepts custom properties.
pub trait CssPropertyTarget {
    fn set_property(&self, name: &str, value: &str) -> Result<()>;
}

impl<T: CssPropertyTarget + ?Sized> CssPropertyTarget for Rc<T> {
    fn set_property(&self, name: &str, value: &str) -> Result<()> {
        (**self).set_property(name, value)
    }
}

/// In-memory style declaration block, in first-set order.
#[derive(Debug, Default)]
pub struct StyleDeclaration {
    properties: RefCell<Vec<(String, String)>>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_property(&self, name: &str) -> Option<String> {
        self.properties
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }

    /// Renders `selector { --k: v; ... }`.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = format!("{} {{\n", selector);
        for (name, value) in self.properties.borrow().iter() {
            writeln!(out, "  {}: {};", name, value).ok();
        }
        out.push_str("}\n");
        out
    }
}

impl CssPropertyTarget for StyleDeclaration {
    fn set_property(&self, name: &str, value: &str) -> Result<()> {
        let mut properties = self.properties.borrow_mut();
        match properties.iter().position(|(n, _)| n == name) {
            Some(index) => properties[index].1 = value.to_string(),
            None => properties.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }
}

/// Applies every slot as a custom property on `target`.
pub struct CssVariablePersistence<T> {
    target: T,
}

impl<T: CssPropertyTarget> CssVariablePersistence<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: CssPropertyTarget> ThemePersistence for CssVariablePersistence<T> {
    fn backend(&self) -> &'static str {
        "css"
    }

    fn kind(&self) -> PersistenceKind {
        PersistenceKind::CssProperties
    }

    fn supports_restore(&self) -> bool {
        false
    }

    fn restore(&self) -> Result<Option<ColorTheme>> {
        Ok(None)
    }

    fn persist(&self, theme: &ColorTheme) -> Result<()> {
        for (slot, value) in theme.iter() {
            self.target.set_property(&slot.css_property(), value)?;
        }
        Ok(())
    }
}

/// `theme` as a `:root` block of custom properties.
pub fn render_root_css(theme: &ColorTheme) -> String {
    let declaration = StyleDeclaration::new();
    for slot in ThemeSlot::ALL {
        // StyleDeclaration never fails
        let _ = declaration.set_property(&slot.css_property(), theme.get(slot));
    }
    declaration.to_css(":root")
}
