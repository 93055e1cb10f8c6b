use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Footer() -> Element {
    rsx!(
        footer { class: "footer footer-center bg-base-200 p-6",
            nav { class: "flex flex-wrap gap-4",
                Link { to: Route::Contacts {}, class: "link link-hover", "Контакты" }
                Link { to: Route::Support {}, class: "link link-hover", "Поддержка" }
                a { href: "/api/docs", class: "link link-hover", "API" }
            }
        }
    )
}
