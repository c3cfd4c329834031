// ============================================================================
// VIEWMODELS - State + logic per screen, no DOM
// ============================================================================

pub mod crud_panel;
pub mod dashboard_viewmodel;
pub mod auth_viewmodel;

pub use crud_panel::CrudPanel;
pub use dashboard_viewmodel::{DashboardViewModel, DepartmentRow};
pub use auth_viewmodel::{LoginViewModel, RegisterViewModel};

use crate::router::Route;
use crate::services::Backend;

/// View model of the mounted screen. A new one is built on every mount,
/// so navigating back to a screen starts from empty state.
pub enum ScreenViewModel<B: Backend> {
    Login(LoginViewModel<B>),
    Register(RegisterViewModel<B>),
    Dashboard(DashboardViewModel<B>),
    Blank,
}

impl<B: Backend> Clone for ScreenViewModel<B> {
    fn clone(&self) -> Self {
        match self {
            ScreenViewModel::Login(vm) => ScreenViewModel::Login(vm.clone()),
            ScreenViewModel::Register(vm) => ScreenViewModel::Register(vm.clone()),
            ScreenViewModel::Dashboard(vm) => ScreenViewModel::Dashboard(vm.clone()),
            ScreenViewModel::Blank => ScreenViewModel::Blank,
        }
    }
}

impl<B: Backend> ScreenViewModel<B> {
    pub fn for_route(route: &Route, backend: B) -> Self {
        match route {
            Route::Login => ScreenViewModel::Login(LoginViewModel::new(backend)),
            Route::Register => ScreenViewModel::Register(RegisterViewModel::new(backend)),
            Route::Dashboard => ScreenViewModel::Dashboard(DashboardViewModel::new(backend)),
            Route::Unmatched(_) => ScreenViewModel::Blank,
        }
    }

    /// Re-render hook. Auth forms never change outside a keystroke.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + Clone + 'static,
    {
        if let ScreenViewModel::Dashboard(vm) = self {
            vm.subscribe(callback);
        }
    }
}
