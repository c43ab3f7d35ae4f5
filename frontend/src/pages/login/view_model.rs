use leptos::*;

/// View state of the login screen. The password-visibility flag is the
/// only state the screen owns; every other control is presentational.
#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub password_visible: RwSignal<bool>,
}

pub fn use_login_view_model() -> LoginViewModel {
    LoginViewModel {
        password_visible: create_rw_signal(false),
    }
}

impl LoginViewModel {
    pub fn toggle_password_visibility(&self) {
        self.password_visible.update(|visible| *visible = !*visible);
    }
}
