// ============================================================================
// APP STATE - Current route + mounted screen
// ============================================================================
// The shell owns no business data: only which screen is mounted and who
// wants to hear about changes.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::router::Route;
use crate::services::Backend;
use crate::viewmodels::ScreenViewModel;

pub struct AppState<B: Backend> {
    backend: B,
    route: Rc<RefCell<Route>>,
    screen: Rc<RefCell<ScreenViewModel<B>>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl<B: Backend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            route: self.route.clone(),
            screen: self.screen.clone(),
            change_subscribers: self.change_subscribers.clone(),
        }
    }
}

impl<B: Backend> AppState<B> {
    /// Nothing is mounted until `mount` is called
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            route: Rc::new(RefCell::new(Route::Unmatched(String::new()))),
            screen: Rc::new(RefCell::new(ScreenViewModel::Blank)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn route(&self) -> Route {
        self.route.borrow().clone()
    }

    pub fn screen(&self) -> ScreenViewModel<B> {
        self.screen.borrow().clone()
    }

    /// Replace the mounted screen with a fresh one for `route`.
    /// The caller starts the on-mount loads of the returned screen.
    pub fn mount(&self, route: Route) -> ScreenViewModel<B> {
        log::info!("🧭 [ROUTER] Mounting {}", route.path());
        let screen = ScreenViewModel::for_route(&route, self.backend.clone());

        let subscribers = self.change_subscribers.clone();
        screen.subscribe(move || {
            let callbacks: Vec<Rc<dyn Fn()>> = subscribers.borrow().clone();
            for callback in callbacks {
                callback();
            }
        });

        *self.route.borrow_mut() = route;
        *self.screen.borrow_mut() = screen.clone();
        screen
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }
}
