//! Desktop application catalog built from `apps.manifest.toml` at compile time.

use std::sync::OnceLock;

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AppId, WindowRecord};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// App whose window the context menu's "Display settings" item opens.
pub const PERSONALIZATION_APP_ID: &str = "personalization";
/// App whose window the context menu's "About this desktop" item opens.
pub const ABOUT_APP_ID: &str = "about";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title: String,
    pub icon: String,
    pub show_on_desktop: bool,
    pub show_in_launcher: bool,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("app catalog is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a catalog JSON document.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when `raw` is not a JSON array of descriptors.
pub fn parse_catalog(raw: &str) -> Result<Vec<AppDescriptor>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// Returns the embedded catalog. A catalog that fails to parse is logged once and treated as empty,
/// so every `open` becomes an ignored unknown-app request rather than a crash.
pub fn app_catalog() -> &'static [AppDescriptor] {
    static CATALOG: OnceLock<Vec<AppDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| match parse_catalog(APP_CATALOG_JSON) {
        Ok(entries) => entries,
        Err(err) => {
            logging::warn!("{err}");
            Vec::new()
        }
    })
}

pub fn app_descriptor(app_id: &AppId) -> Option<&'static AppDescriptor> {
    app_catalog().iter().find(|entry| entry.app_id == *app_id)
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_catalog()
        .iter()
        .filter(|entry| entry.show_on_desktop)
        .cloned()
        .collect()
}

pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_catalog()
        .iter()
        .filter(|entry| entry.show_in_launcher)
        .cloned()
        .collect()
}

/// Renders the body of a window. App content is supplied by the content layer; the shell only
/// reserves the slot.
pub fn render_window_contents(window: &WindowRecord) -> View {
    let title = window.title.clone();
    view! {
        <p class="window__placeholder" data-app-id=window.id.to_string()>
            {format!("Content for {title} will go here...")}
        </p>
    }
    .into_view()
}
