use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use portal::{
    model::{
        api::ApiError,
        event::format_event_date,
        notification::Notification,
        support::{CreateSupportRequestDto, SupportRequestDto},
    },
    query::LoadState,
};

use crate::client::{
    api,
    components::{LoginPrompt, Page, Spinner, StatusMessage},
    store::{use_queries, use_session, use_toaster, use_viewer_role},
};

/// Form for signed-in viewers to contact the organisers.
#[component]
pub fn Support() -> Element {
    let session = use_session();
    let queries = use_queries();
    let mut toaster = use_toaster();
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let submit = move |event: FormEvent| {
        event.prevent_default();

        let request = CreateSupportRequestDto {
            subject: subject(),
            message: message(),
        };
        if let Some(reason) = request.validation_error() {
            toaster.push(Notification::error(reason));
            return;
        }

        let queries = queries.clone();
        submitting.set(true);
        spawn(async move {
            match api::support::create(&queries, &request).await {
                Ok(_) => {
                    subject.set(String::new());
                    message.set(String::new());
                    toaster.push(Notification::success("Спасибо", "Обращение отправлено"));
                }
                Err(ApiError::Unauthorized) => toaster.push(Notification::authentication_required()),
                Err(ApiError::BadRequest(reason)) => toaster.push(Notification::error(reason)),
                Err(e) => {
                    tracing::error!("Failed to submit support request: {}", e);
                    toaster.push(Notification::error("Не удалось отправить обращение"));
                }
            }
            submitting.set(false);
        });
    };

    rsx!(
        Title { "Поддержка | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Поддержка" }
            if !session.read().is_resolved() {
                Spinner {}
            } else if session.read().user().is_none() {
                LoginPrompt {}
            } else {
                form { class: "flex flex-col gap-4 max-w-xl", onsubmit: submit,
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Тема",
                        value: "{subject}",
                        oninput: move |e| subject.set(e.value()),
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full h-40",
                        placeholder: "Сообщение",
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary w-fit",
                        r#type: "submit",
                        disabled: submitting(),
                        "Отправить"
                    }
                }
            }
        }
    )
}

/// Support requests received by employees.
#[component]
pub fn ReceivedRequests() -> Element {
    let session = use_session();
    let role = use_viewer_role();
    let queries = use_queries();

    let requests = use_resource(move || {
        let queries = queries.clone();
        let is_employee = role().is_employee();
        async move {
            if is_employee {
                api::support::list(&queries).await.map(Some)
            } else {
                Ok(None)
            }
        }
    });

    if !session.read().is_resolved() || (session.read().user().is_some() && !role().resolved) {
        return rsx!(Page { Spinner {} });
    }
    if session.read().user().is_none() {
        return rsx!(Page { LoginPrompt {} });
    }

    let state = LoadState::from_resource(requests.read().as_ref());

    rsx!(
        Title { "Обращения | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Обращения" }
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::Ready(None) => rsx!(StatusMessage { text: "Доступно только сотрудникам" }),
                LoadState::Ready(Some(requests)) if requests.is_empty() => rsx!(
                    StatusMessage { text: "Обращений нет" }
                ),
                LoadState::Ready(Some(requests)) => rsx!(
                    div { class: "flex flex-col gap-4",
                        for request in requests {
                            RequestCard { key: "{request.id}", request }
                        }
                    }
                ),
                LoadState::NotFound | LoadState::Failed => rsx!(
                    StatusMessage { text: "Произошла ошибка при загрузке обращений" }
                ),
            }}
        }
    )
}

#[component]
fn RequestCard(request: SupportRequestDto) -> Element {
    let queries = use_queries();
    let mut toaster = use_toaster();
    let request_id = request.id;

    let resolve = move |_| {
        let queries = queries.clone();
        spawn(async move {
            if let Err(e) = api::support::resolve(&queries, request_id).await {
                tracing::error!(request_id, "Failed to resolve support request: {}", e);
                toaster.push(Notification::error("Не удалось обновить обращение"));
            }
        });
    };

    rsx!(
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                div { class: "flex items-center justify-between gap-2",
                    h2 { class: "card-title", "{request.subject}" }
                    if request.resolved {
                        span { class: "badge badge-success", "Решено" }
                    } else {
                        span { class: "badge badge-warning", "Открыто" }
                    }
                }
                p { class: "text-sm text-base-content/70",
                    "{request.author} · "
                    {format_event_date(&request.created_at)}
                }
                p { class: "whitespace-pre-line", "{request.message}" }
                if !request.resolved {
                    div { class: "card-actions justify-end",
                        button { class: "btn btn-outline btn-sm", onclick: resolve, "Отметить решённым" }
                    }
                }
            }
        }
    )
}
