use dioxus::prelude::*;

use crate::client::router::Route;

/// Terminal message rendered instead of a page's content.
#[component]
pub fn StatusMessage(text: String) -> Element {
    rsx!(
        div { class: "flex justify-center p-8",
            p { class: "text-lg text-base-content/70", "{text}" }
        }
    )
}

/// Shown to anonymous viewers on pages that need a session.
#[component]
pub fn LoginPrompt() -> Element {
    rsx!(
        div { class: "flex flex-col items-center gap-4 p-8",
            p { class: "text-lg", "Необходимо авторизоваться" }
            Link { to: Route::Login {}, class: "btn btn-primary", "Войти" }
        }
    )
}
