use dioxus::prelude::*;

use crate::client::{
    components::{Footer, ToastList},
    router::Route,
    store::{use_session, use_viewer_role},
};

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let role = use_viewer_role();

    let is_employee = role().is_employee();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    p { class: "text-xl", "Портал" }
                }
            }
            div {
                class: "navbar-center hidden lg:flex",
                ul { class: "menu menu-horizontal gap-1",
                    li { Link { to: Route::Events {}, "Мероприятия" } }
                    li { Link { to: Route::News {}, "Новости" } }
                    li { Link { to: Route::Council {}, "Совет" } }
                    li { Link { to: Route::Documents {}, "Документы" } }
                    li { Link { to: Route::Contacts {}, "Контакты" } }
                    if is_employee {
                        li { Link { to: Route::UserManagement {}, "Пользователи" } }
                        li { Link { to: Route::ReceivedRequests {}, "Обращения" } }
                    }
                }
            }
            div {
                class: "navbar-end",
                if let Some(user) = session.read().user() {
                    Link { to: Route::Profile {}, class: "btn btn-ghost",
                        "{user.display_name}"
                    }
                } else if session.read().is_resolved() {
                    Link { to: Route::Login {}, class: "btn btn-primary", "Войти" }
                }
            }
        }

        Outlet::<Route> {}

        ToastList {}
        Footer {}
    }
}
