use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use portal::{
    model::{
        notification::Notification,
        profile::{ProfileDto, UpdateProfileDto},
        session::{SessionUser, ViewerSession},
    },
    query::LoadState,
};

use crate::client::{
    api,
    components::{LoginPrompt, Page, Spinner, StatusMessage},
    store::{use_queries, use_session, use_toaster},
};

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let queries = use_queries();

    let profile = use_resource(move || {
        let queries = queries.clone();
        let viewer_id = session.read().user_id();
        async move {
            match viewer_id {
                Some(viewer_id) => api::profile::own(&queries, viewer_id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    if !session.read().is_resolved() {
        return rsx!(Page { Spinner {} });
    }

    let state = LoadState::from_optional(profile.read().as_ref());

    rsx!(
        Title { "Профиль | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Профиль" }
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::NotFound => rsx!(LoginPrompt {}),
                LoadState::Failed => rsx!(StatusMessage {
                    text: "Произошла ошибка при загрузке профиля"
                }),
                LoadState::Ready(profile) => rsx!(ProfileCard { profile }),
            }}
        }
    )
}

#[component]
fn ProfileCard(profile: ProfileDto) -> Element {
    let queries = use_queries();
    let mut session = use_session();
    let mut toaster = use_toaster();
    let mut full_name = use_signal(|| profile.full_name.clone().unwrap_or_default());
    let mut saving = use_signal(|| false);

    let save = move |event: FormEvent| {
        event.prevent_default();

        let update = UpdateProfileDto {
            full_name: Some(full_name().trim().to_string()).filter(|name| !name.is_empty()),
        };
        let queries = queries.clone();
        saving.set(true);
        spawn(async move {
            match api::profile::update_own(&queries, &update).await {
                Ok(updated) => {
                    session.set(ViewerSession::Authenticated(SessionUser::from(&updated)));
                    toaster.push(Notification::success("Готово", "Профиль сохранён"));
                }
                Err(e) => {
                    tracing::error!("Failed to update profile: {}", e);
                    toaster.push(Notification::error("Не удалось сохранить профиль"));
                }
            }
            saving.set(false);
        });
    };

    rsx!(
        div { class: "card bg-base-100 shadow-sm max-w-xl",
            div { class: "card-body gap-4",
                dl { class: "grid grid-cols-[auto_1fr] gap-x-4 gap-y-2",
                    dt { class: "font-semibold", "Email" }
                    dd { {profile.email.clone().unwrap_or_else(|| "не указан".to_string())} }
                    dt { class: "font-semibold", "Роль" }
                    dd { {profile.role.label()} }
                }
                form { class: "flex flex-col gap-2", onsubmit: save,
                    label { class: "font-semibold", r#for: "full-name", "Имя" }
                    input {
                        id: "full-name",
                        class: "input input-bordered w-full",
                        value: "{full_name}",
                        oninput: move |e| full_name.set(e.value()),
                    }
                    button {
                        class: "btn btn-primary w-fit",
                        r#type: "submit",
                        disabled: saving(),
                        "Сохранить"
                    }
                }
                a { href: "/api/auth/logout", class: "btn btn-outline w-fit", "Выйти" }
            }
        }
    )
}
