use crate::components::forms::{Divider, OutlineButton, PasswordField, PrimaryButton, TextField};
use crate::pages::login::view_model::LoginViewModel;
use leptos::*;

/// The login form: email, password with visibility toggle, primary and
/// Google-styled actions, recovery and sign-up affordances. Only the
/// visibility toggle is wired; the rest of the controls are a static
/// mock of the eventual authentication flow.
#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let on_toggle = Callback::new(move |_: ev::MouseEvent| vm.toggle_password_visibility());

    view! {
        <div class="flex justify-center items-center w-full max-w-md p-6">
            <div class="w-full">
                <h1 class="mb-2 font-bold text-fg text-4xl text-center">"Bienvenido"</h1>
                <p class="mb-8 text-fg-muted text-center">"Inicia sesión para continuar"</p>

                <form class="flex flex-col">
                    <div class="flex flex-col gap-4 mb-4">
                        <TextField input_type="email" placeholder="Correo electrónico"/>
                        <PasswordField
                            placeholder="Contraseña"
                            visible=vm.password_visible
                            on_toggle=on_toggle
                        />
                    </div>

                    <div class="flex justify-end mb-4">
                        <button type="button" class="text-action-primary-bg text-sm hover:underline">
                            "¿Olvidaste tu contraseña?"
                        </button>
                    </div>

                    <Divider label="o"/>

                    <PrimaryButton label="Iniciar sesión"/>

                    <OutlineButton>
                        <img src="/icons/google-icon.svg" alt="Google" class="w-5 h-5"/>
                        "Iniciar con Google"
                    </OutlineButton>
                </form>

                <p class="mt-6 text-fg-muted text-sm text-center">
                    "¿No tienes una cuenta? "
                    <span class="font-semibold text-action-primary-bg hover:underline cursor-pointer">
                        "Regístrate"
                    </span>
                </p>
            </div>
        </div>
    }
}
