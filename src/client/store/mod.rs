//! Application-wide state provided through Dioxus context.

pub mod notification;
pub mod session;

use dioxus::prelude::*;

use portal::query::QueryClient;

pub use notification::{use_toaster, Toaster};
pub use session::{use_session, use_viewer_role};

/// Query cache shared by every page.
pub fn use_queries() -> QueryClient {
    use_context::<QueryClient>()
}
