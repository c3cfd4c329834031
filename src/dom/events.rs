// ============================================================================
// EVENT HANDLING
// ============================================================================
// Element listeners belong to the render that created them: their closures
// are kept in RENDER_LISTENERS and dropped by `release_render_listeners`
// before the next render. Window-level listeners are registered once, at
// startup, and live as long as the page.
// ============================================================================

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement, MouseEvent};

type Listener = Closure<dyn FnMut(Event)>;

/// Handles owned by one render pass
pub struct ListenerBatch<T> {
    items: Vec<T>,
}

impl<T> Default for ListenerBatch<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ListenerBatch<T> {
    pub fn keep(&mut self, item: T) {
        self.items.push(item);
    }

    /// Hand over everything kept so far, leaving the batch empty
    pub fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

thread_local! {
    static RENDER_LISTENERS: RefCell<ListenerBatch<Listener>> = RefCell::new(ListenerBatch::default());
}

/// Drop the closures of the previous render. A closure that is running
/// right now (a click that navigates) is freed by wasm-bindgen once it
/// returns.
pub fn release_render_listeners() {
    let released = RENDER_LISTENERS.with(|batch| batch.borrow_mut().take());
    log::debug!("🧹 [DOM] releasing {} listeners", released.len());
    drop(released);
}

fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<Listener, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

fn listen_for_render<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = listen(element, event_type, handler)?;
    RENDER_LISTENERS.with(|batch| batch.borrow_mut().keep(closure));
    Ok(())
}

pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen_for_render(element, "click", move |e: Event| {
        if let Ok(mouse) = e.dyn_into::<MouseEvent>() {
            handler(mouse);
        }
    })
}

/// Current value of the `<input>` or `<select>` that fired `event`
pub fn event_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

/// Handler gets the field value on every keystroke
pub fn on_input_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen_for_render(element, "input", move |e: Event| {
        if let Some(value) = event_value(&e) {
            handler(value);
        }
    })
}

/// Handler gets the selected value of a `<select>`
pub fn on_change_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen_for_render(element, "change", move |e: Event| {
        if let Some(value) = event_value(&e) {
            handler(value);
        }
    })
}

/// Form submit with the browser navigation suppressed
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen_for_render(form, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// Browser back/forward
pub fn on_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    listen(&win, "popstate", handler)?.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn taking_a_batch_drops_what_it_kept() {
        let panel_state = Rc::new(());
        let mut batch = ListenerBatch::default();
        for _ in 0..6 {
            batch.keep(panel_state.clone());
        }
        assert_eq!(Rc::strong_count(&panel_state), 7);

        drop(batch.take());

        assert!(batch.is_empty());
        assert_eq!(Rc::strong_count(&panel_state), 1);
    }

    #[test]
    fn each_render_only_holds_its_own_handles() {
        let first = Rc::new(());
        let second = Rc::new(());
        let mut batch = ListenerBatch::default();

        batch.keep(first.clone());
        drop(batch.take());
        batch.keep(second.clone());

        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(Rc::strong_count(&second), 2);
        assert_eq!(batch.len(), 1);
    }
}
