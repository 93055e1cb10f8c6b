use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{Page, StatusMessage};

#[component]
pub fn Council() -> Element {
    rsx!(
        Title { "Совет | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Совет" }
            StatusMessage { text: "В разработке..." }
        }
    )
}

#[component]
pub fn Contacts() -> Element {
    rsx!(
        Title { "Контакты | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Контакты" }
            StatusMessage { text: "В разработке..." }
        }
    )
}
