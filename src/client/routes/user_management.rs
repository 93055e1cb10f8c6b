use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use portal::{
    model::{
        api::ApiError,
        notification::Notification,
        profile::{ProfileDto, Role},
    },
    query::LoadState,
};

use crate::client::{
    api,
    components::{LoginPrompt, Page, Spinner, StatusMessage},
    store::{use_queries, use_session, use_toaster, use_viewer_role},
};

/// Employees list every profile and assign roles.
#[component]
pub fn UserManagement() -> Element {
    let session = use_session();
    let role = use_viewer_role();
    let queries = use_queries();

    let mut profiles = use_resource(move || {
        let queries = queries.clone();
        let viewer_id = session.read().user_id();
        let is_employee = role().is_employee();
        async move {
            match viewer_id {
                Some(viewer_id) if is_employee => {
                    api::profile::list(&queries, viewer_id).await.map(Some)
                }
                _ => Ok(None),
            }
        }
    });

    if !session.read().is_resolved() || (session.read().user().is_some() && !role().resolved) {
        return rsx!(Page { Spinner {} });
    }
    let Some(viewer_id) = session.read().user_id() else {
        return rsx!(Page { LoginPrompt {} });
    };

    let state = LoadState::from_resource(profiles.read().as_ref());

    rsx!(
        Title { "Пользователи | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Пользователи" }
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::Ready(None) => rsx!(StatusMessage { text: "Доступно только сотрудникам" }),
                LoadState::Ready(Some(profile_list)) => rsx!(
                    div { class: "overflow-x-auto",
                        table { class: "table table-md",
                            thead {
                                tr {
                                    th { "Имя" }
                                    th { "Email" }
                                    th { "Роль" }
                                }
                            }
                            tbody {
                                for profile in profile_list {
                                    ProfileRow {
                                        key: "{profile.id}",
                                        is_self: profile.id == viewer_id,
                                        profile,
                                        on_changed: move |_| profiles.restart(),
                                    }
                                }
                            }
                        }
                    }
                ),
                LoadState::NotFound | LoadState::Failed => rsx!(
                    StatusMessage { text: "Произошла ошибка при загрузке пользователей" }
                ),
            }}
        }
    )
}

/// Role shown in a row once a change request has settled.
fn settled_role(previous: Role, outcome: &Result<ProfileDto, ApiError>) -> Role {
    match outcome {
        Ok(profile) => profile.role,
        Err(_) => previous,
    }
}

#[component]
fn ProfileRow(profile: ProfileDto, is_self: bool, on_changed: EventHandler<()>) -> Element {
    let queries = use_queries();
    let mut toaster = use_toaster();
    let profile_id = profile.id;
    let mut shown_role = use_signal(|| profile.role);

    let change_role = move |event: FormEvent| {
        let Some(role) = Role::parse(&event.value()) else {
            return;
        };
        let previous = shown_role();
        shown_role.set(role);
        let queries = queries.clone();
        spawn(async move {
            let outcome = api::profile::set_role(&queries, profile_id, role).await;
            shown_role.set(settled_role(previous, &outcome));

            match outcome {
                Ok(_) => {
                    toaster.push(Notification::success("Готово", "Роль изменена"));
                    on_changed.call(());
                }
                Err(ApiError::BadRequest(reason)) => toaster.push(Notification::error(reason)),
                Err(e) => {
                    tracing::error!(profile_id, "Failed to change role: {}", e);
                    toaster.push(Notification::error("Не удалось изменить роль"));
                }
            }
        });
    };

    rsx!(
        tr {
            td { {profile.display_name()} }
            td { {profile.email.clone().unwrap_or_default()} }
            td {
                select {
                    class: "select select-bordered select-sm",
                    disabled: is_self,
                    value: shown_role().as_str(),
                    onchange: change_role,
                    for role in Role::ALL {
                        option {
                            value: role.as_str(),
                            selected: role == shown_role(),
                            {role.label()}
                        }
                    }
                }
            }
        }
    )
}
