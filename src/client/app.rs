use dioxus::document::Title;
use dioxus::prelude::*;

use portal::{model::session::ViewerSession, query::QueryClient};

use crate::client::{
    router::Route,
    store::{session::resolve_session, Toaster},
};

#[component]
pub fn App() -> Element {
    let session = use_context_provider(|| Signal::new(ViewerSession::Pending));
    use_context_provider(QueryClient::new);
    use_context_provider(Toaster::new);

    use_future(move || resolve_session(session));

    rsx! {
        Title { "Портал" }
        Router::<Route> {}
    }
}
