//! Application Context
//!
//! Shared state provided via Leptos Context API: the API client and the
//! current route.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use kamashka_core::{ReqwestTransport, SiteApi};

use crate::routes::Route;

pub type Api = SiteApi<ReqwestTransport>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Client shared by every page
    api: StoredValue<Api, LocalStorage>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), api: Api) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            api: StoredValue::new_local(api),
        }
    }

    /// Owned client handle for a `spawn_local` task
    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    /// Push a history entry and switch pages
    pub fn navigate(&self, path: &str) {
        let route = Route::parse(path);
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                    log::warn!("pushState failed: {:?}", err);
                }
            }
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.show(route);
    }

    /// Switch pages without touching history (back/forward)
    pub fn show(&self, route: Route) {
        set_document_title(route.title());
        self.set_route.set(route);
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.route.with(|route| route.path() == path)
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Path of the page the browser is currently showing
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
