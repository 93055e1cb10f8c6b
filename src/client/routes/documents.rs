use dioxus::document::Title;
use dioxus::prelude::*;

use portal::query::LoadState;

use crate::client::{
    api,
    components::{Page, Spinner, StatusMessage},
    store::use_queries,
};

#[component]
pub fn Documents() -> Element {
    let queries = use_queries();
    let documents = use_resource(move || {
        let queries = queries.clone();
        async move { api::document::list(&queries).await }
    });

    let state = LoadState::from_resource(documents.read().as_ref());

    rsx!(
        Title { "Документы | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Документы" }
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::Ready(documents) if documents.is_empty() => rsx!(
                    StatusMessage { text: "Документов пока нет" }
                ),
                LoadState::Ready(documents) => rsx!(
                    ul { class: "flex flex-col gap-2",
                        for document in documents {
                            li { key: "{document.id}", class: "card bg-base-100 shadow-sm",
                                div { class: "card-body py-4",
                                    a {
                                        class: "link link-primary text-lg",
                                        href: "{document.url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{document.title}"
                                    }
                                    if let Some(description) = &document.description {
                                        p { class: "text-base-content/70", "{description}" }
                                    }
                                }
                            }
                        }
                    }
                ),
                LoadState::NotFound | LoadState::Failed => rsx!(
                    StatusMessage { text: "Произошла ошибка при загрузке документов" }
                ),
            }}
        }
    )
}
