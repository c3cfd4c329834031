pub mod app;
pub mod navbar;
pub mod forms;
pub mod login;
pub mod register;
pub mod dashboard;

pub use app::render_app;
pub use navbar::render_navbar;
pub use login::render_login;
pub use register::render_register;
pub use dashboard::render_dashboard;
