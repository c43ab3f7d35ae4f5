use leptos::*;
use leptos_router::*;

mod components;
pub mod config;
mod pages;

#[cfg(test)]
mod test_support;

use pages::login::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=LoginPage/>
            </Routes>
        </Router>
    }
}

/// Browser entry point: install the panic hook, bring up console
/// logging, resolve runtime config, then mount the app.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting Certifirma frontend: initializing runtime config");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        mount_to_body(|| view! { <App/> });
    });
}
