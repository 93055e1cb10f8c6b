use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use portal::{
    model::{
        api::ApiError,
        event::{parse_event_id, EventArticleDto},
        notification::Notification,
    },
    query::LoadState,
};

use crate::client::{
    api,
    components::{LoginPrompt, Page, Spinner, StatusMessage},
    router::Route,
    store::{use_queries, use_session, use_toaster},
};

/// Confirmation step before registering the viewer for an event.
#[component]
pub fn JoinEvent(id: String) -> Element {
    let session = use_session();
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

    if session.read().is_resolved() && session.read().user().is_none() {
        return rsx!(Page { LoginPrompt {} });
    }

    let state = LoadState::from_optional(article.read().as_ref());

    rsx!(
        Title { "Регистрация на мероприятие | Портал" }
        Page {
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::NotFound => rsx!(StatusMessage { text: "Мероприятие не найдено" }),
                LoadState::Failed => rsx!(StatusMessage {
                    text: "Произошла ошибка при загрузке мероприятия"
                }),
                LoadState::Ready(article) => rsx!(JoinConfirmation { article }),
            }}
        }
    )
}

#[component]
fn JoinConfirmation(article: EventArticleDto) -> Element {
    let session = use_session();
    let queries = use_queries();
    let mut toaster = use_toaster();
    let navigator = use_navigator();
    let mut submitting = use_signal(|| false);

    let event = article.event.clone();
    let event_id = event.id;
    let already_joined = session
        .read()
        .user_id()
        .is_some_and(|user_id| article.has_participant(user_id));

    let confirm = move |_| {
        let queries = queries.clone();
        submitting.set(true);

        spawn(async move {
            match api::event::join(&queries, event_id).await {
                Ok(_) => {
                    toaster.push(Notification::success(
                        "Готово",
                        "Вы зарегистрированы на мероприятие",
                    ));
                    navigator.push(Route::EventArticle { id: event_id.to_string() });
                }
                Err(ApiError::Conflict(message)) => toaster.push(Notification::error(message)),
                Err(ApiError::Unauthorized) => toaster.push(Notification::authentication_required()),
                Err(e) => {
                    tracing::error!(event_id, "Failed to join event: {}", e);
                    toaster.push(Notification::error("Не удалось зарегистрироваться"));
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        div { class: "card bg-base-100 shadow-sm max-w-xl mx-auto",
            div { class: "card-body gap-3",
                h1 { class: "card-title text-2xl", "{event.title}" }
                p { class: "text-base-content/70", {event.formatted_date()} }
                if let Some(limit) = event.participants_limit {
                    p { "Участники: {event.current_participants} / {limit}" }
                }
                if already_joined {
                    p { "Вы уже зарегистрированы на это мероприятие" }
                } else if event.is_full() {
                    p { "Свободных мест нет" }
                }
                div { class: "card-actions justify-end",
                    Link {
                        to: Route::EventArticle { id: event_id.to_string() },
                        class: "btn btn-ghost",
                        "Назад"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: submitting() || already_joined || event.is_full(),
                        onclick: confirm,
                        "Подтвердить участие"
                    }
                }
            }
        }
    )
}
