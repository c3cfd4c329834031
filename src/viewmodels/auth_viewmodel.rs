// ============================================================================
// AUTH VIEWMODELS - Login and register forms
// ============================================================================
// One request per submit, outcome goes to the log. No session is stored,
// nothing navigates, and the submit button is never disabled, so two
// quick submits send two requests.
// ============================================================================

use crate::models::{LoginRequest, RegisterForm};
use crate::services::Backend;
use crate::state::ReactiveState;

pub struct LoginViewModel<B: Backend> {
    backend: B,
    form: ReactiveState<LoginRequest>,
}

impl<B: Backend> Clone for LoginViewModel<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            form: self.form.clone(),
        }
    }
}

impl<B: Backend> LoginViewModel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            form: ReactiveState::new(LoginRequest::default()),
        }
    }

    pub fn form(&self) -> LoginRequest {
        self.form.get()
    }

    pub fn edit(&self, edit: impl FnOnce(&mut LoginRequest)) {
        self.form.update_silent(edit);
    }

    pub async fn submit(&self) {
        let request = self.form.get();
        match self.backend.login(&request).await {
            Ok(body) => log::info!("✅ [LOGIN] Login successful {}", body),
            Err(e) => log::error!("❌ [LOGIN] There was an error logging in! {}", e),
        }
    }
}

pub struct RegisterViewModel<B: Backend> {
    backend: B,
    form: ReactiveState<RegisterForm>,
}

impl<B: Backend> Clone for RegisterViewModel<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            form: self.form.clone(),
        }
    }
}

impl<B: Backend> RegisterViewModel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            form: ReactiveState::new(RegisterForm::default()),
        }
    }

    pub fn form(&self) -> RegisterForm {
        self.form.get()
    }

    pub fn edit(&self, edit: impl FnOnce(&mut RegisterForm)) {
        self.form.update_silent(edit);
    }

    /// Password confirmation is not compared here
    pub async fn submit(&self) {
        let request = self.form.with(RegisterForm::to_request);
        match self.backend.register(&request).await {
            Ok(body) => log::info!("✅ [REGISTER] Registration successful {}", body),
            Err(e) => log::error!("❌ [REGISTER] There was an error registering! {}", e),
        }
    }
}
