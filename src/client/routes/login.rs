use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{
    components::{Page, Spinner},
    router::Route,
    store::use_session,
};

#[component]
pub fn Login() -> Element {
    let session = use_session();

    rsx!(
        Title { "Вход | Портал" }
        Page { class: "flex items-center justify-center",
            div { class: "card bg-base-100 shadow-sm w-full max-w-md mx-auto",
                div { class: "card-body items-center text-center gap-4",
                    h1 { class: "card-title text-2xl", "Вход" }
                    if !session.read().is_resolved() {
                        Spinner {}
                    } else if let Some(user) = session.read().user() {
                        p { "Вы вошли как {user.display_name}" }
                        div { class: "flex gap-2",
                            Link { to: Route::Profile {}, class: "btn btn-primary", "Профиль" }
                            a { href: "/api/auth/logout", class: "btn btn-outline", "Выйти" }
                        }
                    } else {
                        p {
                            "Войдите через учётную запись организации, чтобы регистрироваться на мероприятия и отправлять обращения."
                        }
                        a { href: "/api/auth/login", class: "btn btn-primary", "Войти" }
                    }
                }
            }
        }
    )
}
