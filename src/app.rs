// ============================================================================
// APP - Root element, mounting, full re-render
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::dom::{
    append_child, focus_element, focused_element_id, get_element_by_id,
    release_render_listeners, set_inner_html,
};
use crate::router::{current_path, Route};
use crate::services::ApiClient;
use crate::state::{AppState, PendingFlag};
use crate::utils::constants::ROOT_ELEMENT_ID;
use crate::viewmodels::ScreenViewModel;
use crate::views::render_app;

pub struct App {
    state: AppState<ApiClient>,
    root: Element,
}

impl App {
    /// Attach to `#app` and mount the screen for the current URL
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(ApiClient::new());

        // Changes arriving before the scheduled render runs share it
        let pending = PendingFlag::new();
        state.subscribe_to_changes(move || {
            if pending.schedule() {
                let pending = pending.clone();
                Timeout::new(0, move || {
                    pending.finish();
                    crate::rerender_app();
                })
                .forget();
            }
        });

        let app = Self { state, root };
        app.mount(Route::from_path(&current_path()));
        Ok(app)
    }

    /// Fresh screen state for `route` plus its on-mount loads.
    /// The two dashboard lists load independently of each other.
    pub fn mount(&self, route: Route) {
        if let ScreenViewModel::Dashboard(vm) = self.state.mount(route) {
            let companies = vm.companies.clone();
            spawn_local(async move { companies.load().await });
            let departments = vm.departments.clone();
            spawn_local(async move { departments.load().await });
        }
    }

    pub fn render(&self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] render {}", self.state.route().path());
        let focused = focused_element_id();
        release_render_listeners();
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        // Inputs are rebuilt; keep the one the user was typing in
        match focused {
            Some(id) => focus_element(&id),
            None => Ok(()),
        }
    }
}
