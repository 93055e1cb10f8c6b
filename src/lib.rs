//! Community portal: shared models, the client query layer and the API server.

pub mod model;
pub mod query;

#[cfg(feature = "server")]
pub mod server;
