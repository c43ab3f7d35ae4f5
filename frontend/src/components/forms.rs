use leptos::{ev::MouseEvent, *};

/// `type` attribute for a maskable input.
pub fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

/// Icon for the visibility toggle: a crossed-out eye while the text is
/// shown, an open eye while it is masked.
pub fn visibility_icon_class(visible: bool) -> &'static str {
    if visible {
        "fas fa-eye-slash"
    } else {
        "fas fa-eye"
    }
}

/// Rounded single-line input. Purely presentational: no value binding.
#[component]
pub fn TextField(input_type: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            class="w-full rounded-xl h-12 px-4 text-base bg-surface-elevated text-fg placeholder-fg-muted border border-border focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
        />
    }
}

/// Masked input with an eye toggle. The visibility flag is owned by the
/// caller; the toggle only reports clicks.
#[component]
pub fn PasswordField(
    placeholder: &'static str,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_toggle: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <input
                type=move || password_input_type(visible.get())
                placeholder=placeholder
                class="w-full pr-12 rounded-xl h-12 px-4 text-base bg-surface-elevated text-fg placeholder-fg-muted border border-border focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
            />
            <button
                type="button"
                class="absolute top-1/2 right-4 -translate-y-1/2 text-fg-muted hover:text-fg"
                aria-label="Mostrar u ocultar la contraseña"
                on:click=move |ev| on_toggle.call(ev)
            >
                <i class=move || visibility_icon_class(visible.get())></i>
            </button>
        </div>
    }
}

#[component]
pub fn PrimaryButton(label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class="w-full h-12 rounded-xl bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text text-lg font-medium"
        >
            {label}
        </button>
    }
}

#[component]
pub fn OutlineButton(children: Children) -> impl IntoView {
    view! {
        <button
            type="button"
            class="flex items-center justify-center gap-2 mt-4 w-full h-12 rounded-xl border border-border bg-surface-elevated text-fg hover:bg-action-ghost-bg-hover"
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Divider(label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 my-6">
            <span class="flex-1 border-t border-border"></span>
            <span class="text-fg-muted text-sm">{label}</span>
            <span class="flex-1 border-t border-border"></span>
        </div>
    }
}
