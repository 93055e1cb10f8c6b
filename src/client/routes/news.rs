use dioxus::document::Title;
use dioxus::prelude::*;

use portal::{
    model::{event::format_event_date, news::NewsDto},
    query::LoadState,
};

use crate::client::{
    api,
    components::{Page, Spinner, StatusMessage},
    router::Route,
    store::use_queries,
};

/// Characters of an article shown in listings.
const EXCERPT_CHARS: usize = 200;

#[component]
pub fn News() -> Element {
    let queries = use_queries();
    let news = use_resource(move || {
        let queries = queries.clone();
        async move { api::news::list(&queries).await }
    });

    let state = LoadState::from_resource(news.read().as_ref());

    rsx!(
        Title { "Новости | Портал" }
        Page {
            h1 { class: "text-3xl font-bold mb-4", "Новости" }
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::Ready(news) if news.is_empty() => rsx!(
                    StatusMessage { text: "Новостей пока нет" }
                ),
                LoadState::Ready(news) => rsx!(
                    div { class: "flex flex-col gap-4",
                        for article in news {
                            NewsCard { key: "{article.id}", article }
                        }
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
pub fn NewsCard(article: NewsDto) -> Element {
    rsx!(
        Link {
            to: Route::NewsArticle { id: article.id.to_string() },
            class: "card bg-base-100 shadow-sm hover:shadow-md",
            div { class: "card-body",
                h2 { class: "card-title", "{article.title}" }
                p { class: "text-sm text-base-content/70", {format_event_date(&article.published_at)} }
                p { {article.excerpt(EXCERPT_CHARS)} }
            }
        }
    )
}

#[component]
pub fn NewsArticle(id: String) -> Element {
    let queries = use_queries();
    let news_id = id.parse::<i32>().ok().filter(|id| *id > 0);

    let article = use_resource(use_reactive((&news_id,), move |(news_id,)| {
        let queries = queries.clone();
        async move {
            match news_id {
                Some(news_id) => api::news::article(&queries, news_id).await,
                None => Ok(None),
            }
        }
    }));

    let state = LoadState::from_optional(article.read().as_ref());

    rsx!(
        Page {
            {match state {
                LoadState::Loading => rsx!(Spinner {}),
                LoadState::NotFound => rsx!(StatusMessage { text: "Новость не найдена" }),
                LoadState::Failed => rsx!(StatusMessage {
                    text: "Произошла ошибка при загрузке новости"
                }),
                LoadState::Ready(news) => rsx!(
                    Title { "{news.title} | Портал" }
                    article { class: "flex flex-col gap-4",
                        if let Some(image_url) = &news.image_url {
                            img { class: "w-full max-h-96 object-cover rounded", src: "{image_url}", alt: "{news.title}" }
                        }
                        h1 { class: "text-3xl font-bold", "{news.title}" }
                        p { class: "text-base-content/70", {format_event_date(&news.published_at)} }
                        p { class: "whitespace-pre-line", "{news.content}" }
                    }
                ),
            }}
        }
    )
}
