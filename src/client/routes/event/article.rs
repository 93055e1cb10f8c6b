use dioxus::document::Title;
use dioxus::prelude::*;

use portal::{
    model::{
        action::{EventAction, JoinClick},
        event::{parse_event_id, EventArticleDto},
    },
    query::LoadState,
};

use crate::client::{
    api,
    components::{Page, Spinner, StatusMessage},
    router::Route,
    store::{use_queries, use_session, use_toaster, use_viewer_role},
};

/// Event detail page with a single action chosen from the viewer's session and role.
#[component]
pub fn EventArticle(id: String) -> Element {
    let queries = use_queries();
    let event_id = parse_event_id(&id);

    let article = use_resource(use_reactive((&event_id,), move |(event_id,)| {
        let queries = queries.clone();
        async move {
            match event_id {
                Some(event_id) => api::event::article(&queries, event_id).await,
                None => Ok(None),
            }
        }
    }));

    let state = LoadState::from_optional(article.read().as_ref());

    rsx!(
        Page {
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::NotFound => rsx!(StatusMessage { text: "Мероприятие не найдено" }),
                LoadState::Failed => rsx!(StatusMessage {
                    text: "Произошла ошибка при загрузке мероприятия"
                }),
                LoadState::Ready(article) => rsx!(ArticleBody { article }),
            }}
        }
    )
}

#[component]
fn ArticleBody(article: EventArticleDto) -> Element {
    let session = use_session();
    let role = use_viewer_role();

    let action = EventAction::derive(&session.read(), role(), &article);
    let role_loading = session.read().user().is_some() && !role().resolved;
    let event = &article.event;

    rsx!(
        Title { "{event.title} | Портал" }
        article { class: "flex flex-col gap-4",
            if let Some(image_url) = &event.image_url {
                img { class: "w-full max-h-96 object-cover rounded", src: "{image_url}", alt: "{event.title}" }
            }
            h1 { class: "text-3xl font-bold", "{event.title}" }
            p { class: "text-base-content/70", {event.formatted_date()} }
            if let Some(limit) = event.participants_limit {
                p { "Участники: {event.current_participants} / {limit}" }
            }
            p { class: "whitespace-pre-line", "{event.description}" }
            if role_loading {
                Spinner {}
            } else {
                EventActionControl { event_id: event.id, action }
            }
        }
    )
}

#[component]
fn EventActionControl(event_id: i32, action: EventAction) -> Element {
    let session = use_session();
    let mut toaster = use_toaster();
    let navigator = use_navigator();

    match action {
        EventAction::None => rsx!(),
        EventAction::ViewParticipants => rsx!(
            Link {
                to: Route::EventParticipants { id: event_id.to_string() },
                class: "btn btn-outline w-fit",
                "Список участников"
            }
        ),
        EventAction::Join { disabled } => rsx!(
            button {
                class: "btn btn-primary w-fit",
                disabled: disabled,
                onclick: move |_| match JoinClick::resolve(&session.read(), event_id) {
                    JoinClick::Navigate { event_id } => {
                        navigator.push(Route::JoinEvent { id: event_id.to_string() });
                    }
                    JoinClick::Rejected(notification) => toaster.push(notification),
                },
                "Присоединиться"
            }
        ),
    }
}
