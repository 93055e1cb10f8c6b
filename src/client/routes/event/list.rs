use dioxus::document::Title;
use dioxus::prelude::*;

use portal::{model::event::EventDto, query::LoadState};

use crate::client::{
    api,
    components::{Page, Spinner, StatusMessage},
    router::Route,
    store::use_queries,
};

#[component]
pub fn Events() -> Element {
    let queries = use_queries();
    let events = use_resource(move || {
        let queries = queries.clone();
        async move { api::event::list(&queries).await }
    });

    let state = LoadState::from_resource(events.read().as_ref());

    rsx!(
        Title { "Мероприятия | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Мероприятия" }
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::Ready(events) if events.is_empty() => rsx!(
                    StatusMessage { text: "Мероприятий пока нет" }
                ),
                LoadState::Ready(events) => rsx!(
                    div { class: "grid gap-4 md:grid-cols-2",
                        for event in events {
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

/// Event summary linking to its detail page.
#[component]
pub fn EventCard(event: EventDto) -> Element {
    rsx!(
        Link {
            to: Route::EventArticle { id: event.id.to_string() },
            class: "card bg-base-100 shadow-sm hover:shadow-md",
            div { class: "card-body",
                h2 { class: "card-title", "{event.title}" }
                p { class: "text-sm text-base-content/70", {event.formatted_date()} }
                if let Some(limit) = event.participants_limit {
                    p { class: "text-sm", "Участники: {event.current_participants} / {limit}" }
                }
            }
        }
    )
}
