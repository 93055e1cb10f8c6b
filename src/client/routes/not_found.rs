use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{Page, StatusMessage},
    router::Route,
};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Страница не найдена | Портал" }
        Page { class: "flex flex-col items-center",
            StatusMessage { text: "Страница /{path} не найдена" }
            Link { to: Route::Home {}, class: "btn btn-outline", "На главную" }
        }
    )
}
