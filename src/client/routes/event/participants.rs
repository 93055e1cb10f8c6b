use dioxus::document::Title;
use dioxus::prelude::*;

use portal::{
    model::{
        api::ApiError,
        event::{format_event_date, parse_event_id},
    },
    query::LoadState,
};

use crate::client::{
    api,
    components::{LoginPrompt, Page, Spinner, StatusMessage},
    router::Route,
    store::{use_queries, use_session},
};

/// Participants of an event, visible to employees only.
#[component]
pub fn EventParticipants(id: String) -> Element {
    let session = use_session();
    let queries = use_queries();
    let event_id = parse_event_id(&id);

    let participants = use_resource(use_reactive((&event_id,), move |(event_id,)| {
        let queries = queries.clone();
        let signed_in = session.read().user().is_some();
        async move {
            match event_id {
                Some(event_id) if signed_in => {
                    api::event::participants(&queries, event_id).await.map(Some)
                }
                Some(_) => Err(ApiError::Unauthorized),
                None => Ok(None),
            }
        }
    }));

    if !session.read().is_resolved() {
        return rsx!(Page { Spinner {} });
    }

    let forbidden = matches!(
        &*participants.read(),
        Some(Err(ApiError::Forbidden))
    );
    let unauthorized = matches!(
        &*participants.read(),
        Some(Err(ApiError::Unauthorized))
    );
    let state = LoadState::from_optional(participants.read().as_ref());

    rsx!(
        Title { "Список участников | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Список участников" }
            if let Some(event_id) = event_id {
                Link {
                    to: Route::EventArticle { id: event_id.to_string() },
                    class: "link mb-4 block",
                    "К мероприятию"
                }
            }
            {match state {
                _ if unauthorized => rsx!(LoginPrompt {}),
                _ if forbidden => rsx!(StatusMessage { text: "Доступно только сотрудникам" }),
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::NotFound => rsx!(StatusMessage { text: "Мероприятие не найдено" }),
                LoadState::Failed => rsx!(StatusMessage {
                    text: "Произошла ошибка при загрузке участников"
                }),
                LoadState::Ready(participants) if participants.is_empty() => rsx!(
                    StatusMessage { text: "Пока никто не зарегистрировался" }
                ),
                LoadState::Ready(participants) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Имя" }
                                    th { "Email" }
                                    th { "Дата регистрации" }
                                }
                            }
                            tbody {
                                for participant in participants {
                                    tr { key: "{participant.user_id}",
                                        td { {participant.full_name.clone().unwrap_or_else(|| format!("#{}", participant.user_id))} }
                                        td { {participant.email.clone().unwrap_or_default()} }
                                        td { {format_event_date(&participant.registered_at)} }
                                    }
                                }
                            }
                        }
                    }
                ),
            }}
        }
    )
}
