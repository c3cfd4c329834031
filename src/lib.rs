// ============================================================================
// MANAGEMENT CLIENT - Rust + WASM, MVVM
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: per-screen state + logic
// - Services: HTTP only
// - State: Rc<RefCell> + change subscribers
// - Models: records shared with the backend
// ============================================================================

mod app;
pub mod config;
mod dom;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
mod utils;
pub mod viewmodels;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::router::Route;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Management client starting (backend: '{}')", CONFIG.backend_url());

    let app = App::new()?;
    app.render()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // Registered once; back/forward remounts the screen for the new URL
    dom::on_popstate(|_| remount(&router::current_path()))?;

    Ok(())
}

/// Rebuild the DOM of the mounted screen
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-rendering: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [APP] App is not initialized"),
    });
}

/// Push `path` to the history and mount its screen
pub fn navigate_to(path: &str) {
    if let Err(e) = router::push_path(path) {
        log::error!("❌ [ROUTER] pushState failed: {:?}", e);
    }
    remount(path);
}

fn remount(path: &str) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            app.mount(Route::from_path(path));
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error rendering {}: {:?}", path, e);
            }
        }
    });
}
