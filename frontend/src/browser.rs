//! Fallible wrappers over the handful of DOM APIs the site touches.
//!
//! Nothing here is allowed to bring the page down: callers log the error and
//! fall back to a sensible default.

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MediaQueryList, Storage, Window};

use crate::config::THEME_STORAGE_KEY;
use crate::state::sections::{SectionBounds, SectionId};
use crate::state::theme::{ResolvedTheme, ThemePreference};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{0}` is not an HTML element")]
    NotHtml(String),
    #[error("local storage is unavailable")]
    NoStorage,
    #[error("media query `{0}` is not supported")]
    MediaQuery(&'static str),
    #[error("global `{0}` is not defined")]
    MissingGlobal(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn local_storage() -> Result<Storage, DomError> {
    window()?.local_storage()?.ok_or(DomError::NoStorage)
}

pub fn scroll_y() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn section_bounds(anchor: &str) -> Result<SectionBounds, DomError> {
    let element = document()?
        .get_element_by_id(anchor)
        .ok_or_else(|| DomError::MissingElement(anchor.to_string()))?;
    let element: HtmlElement = element
        .dyn_into()
        .map_err(|_| DomError::NotHtml(anchor.to_string()))?;
    Ok(SectionBounds::new(
        element.offset_top() as f64,
        element.offset_height() as f64,
    ))
}

/// Live bounds of every section in `sections` that is currently rendered,
/// keeping the given order.
pub fn measure_sections(sections: &[SectionId]) -> Vec<(SectionId, SectionBounds)> {
    sections
        .iter()
        .filter_map(|id| match section_bounds(id.anchor()) {
            Ok(bounds) => Some((*id, bounds)),
            Err(e) => {
                debug!("Skipping section {}: {}", id.anchor(), e);
                None
            }
        })
        .collect()
}

pub fn stored_theme() -> Option<ThemePreference> {
    let raw = match local_storage().and_then(|s| Ok(s.get_item(THEME_STORAGE_KEY)?)) {
        Ok(raw) => raw?,
        Err(e) => {
            debug!("Could not read stored theme: {}", e);
            return None;
        }
    };
    match raw.parse() {
        Ok(preference) => Some(preference),
        Err(e) => {
            warn!("Ignoring stored theme: {}", e);
            None
        }
    }
}

pub fn store_theme(preference: ThemePreference) -> Result<(), DomError> {
    local_storage()?.set_item(THEME_STORAGE_KEY, preference.as_str())?;
    Ok(())
}

fn dark_scheme_query() -> Result<MediaQueryList, DomError> {
    window()?
        .match_media(DARK_SCHEME_QUERY)?
        .ok_or(DomError::MediaQuery(DARK_SCHEME_QUERY))
}

fn scheme_of(query: &MediaQueryList) -> ResolvedTheme {
    if query.matches() {
        ResolvedTheme::Dark
    } else {
        ResolvedTheme::Light
    }
}

/// OS colour scheme, light when the browser can't tell us.
pub fn system_theme() -> ResolvedTheme {
    match dark_scheme_query() {
        Ok(query) => scheme_of(&query),
        Err(e) => {
            debug!("Falling back to light scheme: {}", e);
            ResolvedTheme::Light
        }
    }
}

/// Keeps a `change` listener on the colour-scheme media query alive.
/// Dropping it detaches the listener.
pub struct SystemThemeListener {
    query: MediaQueryList,
    callback: Closure<dyn Fn()>,
}

impl Drop for SystemThemeListener {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

pub fn watch_system_theme<F>(on_change: F) -> Result<SystemThemeListener, DomError>
where
    F: Fn(ResolvedTheme) + 'static,
{
    let query = dark_scheme_query()?;
    let callback = Closure::<dyn Fn()>::new({
        let query = query.clone();
        move || on_change(scheme_of(&query))
    });
    query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())?;
    Ok(SystemThemeListener { query, callback })
}

/// Reflect the resolved scheme on `<html>` so the stylesheet's `.dark`
/// selectors and native form controls follow it.
pub fn apply_theme(theme: ResolvedTheme) -> Result<(), DomError> {
    let root: HtmlElement = document()?
        .document_element()
        .ok_or_else(|| DomError::MissingElement("html".to_string()))?
        .dyn_into()
        .map_err(|_| DomError::NotHtml("html".to_string()))?;
    if theme.is_dark() {
        root.class_list().add_1(DARK_CLASS)?;
    } else {
        root.class_list().remove_1(DARK_CLASS)?;
    }
    root.set_attribute("data-theme", theme.as_str())?;
    root.style().set_property("color-scheme", theme.as_str())?;
    Ok(())
}

/// True when this page load was reached by following a link from our own
/// origin rather than typed in, bookmarked or linked from elsewhere.
pub fn came_from_internal() -> bool {
    let window = match window() {
        Ok(window) => window,
        Err(_) => return false,
    };
    let history_len = window.history().and_then(|h| h.length()).unwrap_or(0);
    let origin = window.location().origin().unwrap_or_default();
    let referrer = window.document().map(|d| d.referrer()).unwrap_or_default();
    history_len > 1 && !origin.is_empty() && referrer.contains(&origin)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    fn root() -> HtmlElement {
        document()
            .ok()
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into().ok())
            .expect("html element")
    }

    #[wasm_bindgen_test]
    fn applying_a_theme_keeps_other_inline_styles() {
        let root = root();
        root.style().set_property("overflow", "hidden").expect("set overflow");

        apply_theme(ResolvedTheme::Dark).expect("apply dark");
        assert!(root.class_list().contains(DARK_CLASS));
        assert_eq!(root.style().get_property_value("color-scheme").ok().as_deref(), Some("dark"));
        assert_eq!(root.style().get_property_value("overflow").ok().as_deref(), Some("hidden"));

        apply_theme(ResolvedTheme::Light).expect("apply light");
        assert!(!root.class_list().contains(DARK_CLASS));
        assert_eq!(root.style().get_property_value("color-scheme").ok().as_deref(), Some("light"));
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));

        root.style().remove_property("overflow").expect("reset overflow");
    }
}
