use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use portal::query::LoadState;

use crate::client::{
    api,
    components::{Page, Spinner, StatusMessage},
    router::Route,
    routes::{event::EventCard, news::NewsCard},
    store::use_queries,
};

/// Entries of each list shown on the index page.
const PREVIEW_LIMIT: usize = 3;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Портал" }
        Meta {
            name: "description",
            content: "Мероприятия, новости и документы сообщества."
        }
        Page {
            div { class: "flex flex-col gap-8",
                div { class: "hero bg-base-200 rounded-box py-10",
                    div { class: "hero-content text-center flex-col",
                        h1 { class: "text-4xl font-bold", "Добро пожаловать" }
                        p { "Новости сообщества, ближайшие мероприятия и полезные документы в одном месте." }
                    }
                }
                LatestNews {}
                UpcomingEvents {}
            }
        }
    )
}

#[component]
fn LatestNews() -> Element {
    let queries = use_queries();
    let news = use_resource(move || {
        let queries = queries.clone();
        async move { api::news::list(&queries).await }
    });

    let state = LoadState::from_resource(news.read().as_ref());

    rsx!(
        section { class: "flex flex-col gap-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-2xl font-bold", "Новости" }
                Link { to: Route::News {}, class: "link", "Все новости" }
            }
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::Ready(news) => rsx!(
                    for article in news.into_iter().take(PREVIEW_LIMIT) {
                        NewsCard { key: "{article.id}", article }
                    }
                ),
                LoadState::NotFound | LoadState::Failed => rsx!(
                    StatusMessage { text: "Произошла ошибка при загрузке новостей" }
                ),
            }}
        }
    )
}

#[component]
fn UpcomingEvents() -> Element {
    let queries = use_queries();
    let events = use_resource(move || {
        let queries = queries.clone();
        async move { api::event::list(&queries).await }
    });

    let state = LoadState::from_resource(events.read().as_ref());

    rsx!(
        section { class: "flex flex-col gap-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-2xl font-bold", "Мероприятия" }
                Link { to: Route::Events {}, class: "link", "Все мероприятия" }
            }
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::Ready(events) => rsx!(
                    div { class: "grid gap-4 md:grid-cols-3",
                        for event in events.into_iter().take(PREVIEW_LIMIT) {
                            EventCard { key: "{event.id}", event }
                        }
                    }
                ),
                LoadState::NotFound | LoadState::Failed => rsx!(
                    StatusMessage { text: "Произошла ошибка при загрузке мероприятий" }
                ),
            }}
        }
    )
}
