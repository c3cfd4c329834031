// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod reactivity;
pub mod app_state;

pub use reactivity::*;
pub use app_state::*;
