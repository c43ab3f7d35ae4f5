use super::{components::form::LoginForm, utils, view_model::use_login_view_model};
use leptos::*;

// Left-edge percentages of the two slanted surfaces: the full-screen
// decorative panel and the card surface holding the form.
const SIDE_PANEL_CLIP: (u8, u8) = (70, 65);
const CARD_PANEL_CLIP: (u8, u8) = (60, 55);

const BACKGROUND_IMAGE: &str = "/login-unsch.jpg";

/// Page shell: campus photo under a darkening veil, a slanted
/// decorative panel along the right edge, and a centered rounded card
/// whose clipped right surface holds the login form.
#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();

    view! {
        <div class="relative bg-surface w-full h-screen overflow-hidden">
            <div
                class="absolute inset-0 bg-cover"
                style=utils::background_image_style(BACKGROUND_IMAGE)
            >
                <div class="bg-black/20 w-full h-full"></div>
            </div>

            <div
                class="absolute inset-0 bg-surface-muted"
                style=utils::clipped_panel_style(SIDE_PANEL_CLIP.0, SIDE_PANEL_CLIP.1)
            ></div>

            <div class="z-10 relative flex justify-center items-center p-4 w-full h-full">
                <div class="relative rounded-[60px] w-6xl h-4/6 overflow-hidden">
                    <div
                        class="absolute inset-0 bg-cover bg-center"
                        style=utils::background_image_style(BACKGROUND_IMAGE)
                    ></div>
                    <div
                        class="absolute inset-0 bg-surface z-20 flex justify-end items-center"
                        style=utils::clipped_panel_style(CARD_PANEL_CLIP.0, CARD_PANEL_CLIP.1)
                    >
                        <div class="w-[40%] flex justify-center items-center">
                            <LoginForm vm=vm/>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
