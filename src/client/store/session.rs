use dioxus::prelude::*;
use dioxus_logger::tracing;

use portal::model::{
    api::ApiError,
    profile::ViewerRole,
    session::{SessionUser, ViewerSession},
};

use crate::client::{api, store::use_queries};

pub fn use_session() -> Signal<ViewerSession> {
    use_context::<Signal<ViewerSession>>()
}

/// Resolves the session once on start-up; failures leave the viewer anonymous.
pub async fn resolve_session(mut session: Signal<ViewerSession>) {
    let resolved = match api::auth::get_session().await {
        Ok(Some(profile)) => ViewerSession::Authenticated(SessionUser::from(&profile)),
        Ok(None) => ViewerSession::Anonymous,
        Err(e) => {
            tracing::error!("Failed to resolve session: {}", e);
            ViewerSession::Anonymous
        }
    };

    session.set(resolved);
}

/// Role of the signed-in viewer; no request is made without a session.
pub fn use_viewer_role() -> Memo<ViewerRole> {
    let session = use_session();
    let queries = use_queries();

    let role = use_resource(move || {
        let queries = queries.clone();
        let viewer_id = session.read().user_id();

        async move {
            match viewer_id {
                Some(viewer_id) => api::profile::role(&queries, viewer_id).await,
                None => Ok::<_, ApiError>(None),
            }
        }
    });

    use_memo(move || {
        if !session.read().is_resolved() {
            return ViewerRole::default();
        }

        match &*role.read() {
            None => ViewerRole::default(),
            Some(Ok(role)) => ViewerRole::settled(*role),
            Some(Err(e)) => {
                tracing::warn!("Failed to load viewer role: {}", e);
                ViewerRole::settled(None)
            }
        }
    })
}
